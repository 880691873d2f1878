//! Test utilities for cloud-db-tools
//!
//! This crate provides shared test utilities, builders and helper
//! functions for testing the cloud-db-tools commands.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_utils::{ConfigBuilder, MockDumpGenerator, ScriptedConfirmation};
//!
//! #[test]
//! fn my_test() {
//!     let config = ConfigBuilder::new()
//!         .add_database("main", "default")
//!         .build();
//!     // ... test code
//! }
//! ```

pub mod config_builder;
pub mod test_context;

// Re-export commonly used items
pub use config_builder::ConfigBuilder;
pub use test_context::TestContext;

// Re-export types from the main crate for convenience
pub use cloud_db_tools::config::{
    Config, DatabaseEntry, DatabaseMap, DumpSettings, LoggingSettings, MergedConfig,
};
pub use cloud_db_tools::managers::dump::{BackupRequest, DumpError, DumpManager, DumpOutcome};
pub use cloud_db_tools::validators::{ValidationResult, Validator};

// Re-export mock implementations from the main crate
pub use cloud_db_tools::generators::mock::{DumpCall, MockDumpGenerator};
pub use cloud_db_tools::generators::DumpGenerator;
pub use cloud_db_tools::utils::executor::mock::MockExecutor;
pub use cloud_db_tools::utils::prompt::mock::ScriptedConfirmation;
