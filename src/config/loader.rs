use super::types::*;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Load and validate configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse and validate configuration from a TOML string
pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate the configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.dump.command.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Dump command must not be empty".to_string(),
        ));
    }

    if config.databases.is_empty() {
        return Err(ConfigError::ValidationError(
            "No databases defined".to_string(),
        ));
    }

    for (name, entry) in config.databases.iter() {
        validate_database(name, entry)?;
    }

    Ok(())
}

fn validate_database(name: &str, entry: &DatabaseEntry) -> Result<()> {
    if name.trim().is_empty() || name.contains(char::is_whitespace) {
        return Err(ConfigError::ValidationError(format!(
            "Invalid database identifier: '{}'",
            name
        )));
    }

    if entry.connection.trim().is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "Database '{}': connection must not be empty",
            name
        )));
    }

    Ok(())
}
