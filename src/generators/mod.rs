pub mod shell;

pub use shell::ShellDumpGenerator;

use anyhow::Result;

/// Produces a dump of one logical database
pub trait DumpGenerator {
    /// Create a dump for `database`, optionally stripping DEFINER clauses
    fn create(&self, database: &str, remove_definers: bool) -> Result<()>;

    /// Get generator name (for logging)
    fn name(&self) -> &'static str;
}

/// Recording generator for tests
/// Available for use in external test crates
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Recorded `create` call
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct DumpCall {
        pub database: String,
        pub remove_definers: bool,
    }

    #[derive(Clone, Default)]
    pub struct MockDumpGenerator {
        pub calls: Arc<Mutex<Vec<DumpCall>>>,
        failing: Arc<Mutex<Vec<String>>>,
    }

    impl MockDumpGenerator {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make `create` fail for the given database
        pub fn failing_on(self, database: &str) -> Self {
            self.failing.lock().unwrap().push(database.to_string());
            self
        }

        pub fn get_calls(&self) -> Vec<DumpCall> {
            self.calls.lock().unwrap().clone()
        }

        /// Databases in the order they were dumped
        pub fn dumped(&self) -> Vec<String> {
            self.get_calls().into_iter().map(|c| c.database).collect()
        }
    }

    impl DumpGenerator for MockDumpGenerator {
        fn create(&self, database: &str, remove_definers: bool) -> Result<()> {
            self.calls.lock().unwrap().push(DumpCall {
                database: database.to_string(),
                remove_definers,
            });

            if self.failing.lock().unwrap().iter().any(|d| d == database) {
                anyhow::bail!("mysqldump: Got error: 1045: Access denied for {}", database);
            }
            Ok(())
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }
}
