//! Configuration module for cloud-db-tools
//!
//! This module handles loading and validating configuration from TOML files.
//!
//! The file carries three tool sections (`logging`, `dump`, `databases`) and
//! the merged deployment `resource` section checked by the validators.
//!
//! ## Example Usage
//!
//! ```no_run
//! use cloud_db_tools::config;
//!
//! let config = config::load_config("cloud-db-tools.toml")?;
//!
//! for name in config.databases.names() {
//!     println!("Database: {}", name);
//! }
//! # Ok::<(), config::ConfigError>(())
//! ```

mod loader;
mod types;

pub use loader::{load_config, parse_config, ConfigError, Result};
pub use types::*;

/// Expand tilde (~) in path
pub fn expand_tilde(path: &std::path::Path) -> std::path::PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}
