//! Cloud DB Tools Library
//!
//! Deployment helpers for database-backed cloud projects: the `db-dump`
//! backup command and validators for the merged deployment configuration.

pub mod config;
pub mod generators;
pub mod managers;
pub mod utils;
pub mod validators;

// Re-export commonly used types
pub use config::{load_config, Config, DatabaseMap, MergedConfig};
pub use generators::{DumpGenerator, ShellDumpGenerator};
pub use managers::dump::{BackupRequest, DumpError, DumpManager, DumpOutcome};
pub use managers::logging::{init_logging, LogGuard, LoggingConfig};
pub use validators::{ResourceConfiguration, ValidationResult, Validator};
