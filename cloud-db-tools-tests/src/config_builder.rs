//! Fluent API for building test configurations
//!
//! Provides a builder pattern for creating test configurations with sensible defaults.

use cloud_db_tools::config::{
    Config, DatabaseEntry, DatabaseMap, DumpSettings, LoggingSettings, MergedConfig,
};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for creating test configurations
pub struct ConfigBuilder {
    temp_dir: TempDir,
    logging: LoggingSettings,
    dump: DumpSettings,
    databases: DatabaseMap,
    resources: Map<String, Value>,
}

impl ConfigBuilder {
    /// Create a new ConfigBuilder with no databases and no resources
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let log_directory = temp_dir.path().join("logs");
        fs::create_dir_all(&log_directory).expect("Failed to create log directory");

        let logging = LoggingSettings {
            directory: log_directory,
            level: "debug".to_string(),
            max_files: 5,
        };

        let dump = DumpSettings {
            output_dir: temp_dir.path().join("dumps"),
            ..DumpSettings::default()
        };

        Self {
            temp_dir,
            logging,
            dump,
            databases: DatabaseMap::new(),
            resources: Map::new(),
        }
    }

    /// The usual three databases, each with a connected resource
    pub fn standard() -> Self {
        Self::new()
            .add_database("main", "default")
            .add_database("quote", "checkout")
            .add_database("sales", "sales")
            .add_resource("default")
            .add_resource("checkout")
            .add_resource("sales")
    }

    /// Add a database whose connection and resource share a name
    pub fn add_database(mut self, name: &str, connection: &str) -> Self {
        self.databases = self
            .databases
            .with_database(name, DatabaseEntry::new(connection, connection));
        self
    }

    /// Add a resource with connection information
    pub fn add_resource(mut self, name: &str) -> Self {
        self.resources.insert(
            name.to_string(),
            json!({ "connection": { "host": "localhost", "dbname": name } }),
        );
        self
    }

    /// Add a resource without connection information
    pub fn add_resource_without_connection(mut self, name: &str) -> Self {
        self.resources
            .insert(name.to_string(), json!({ "engine": "mysql" }));
        self
    }

    /// Set the dump command template
    pub fn with_dump_command(mut self, command: &str) -> Self {
        self.dump.command = command.to_string();
        self
    }

    /// Get the temp directory path
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Where dumps will be written
    pub fn dump_dir(&self) -> PathBuf {
        self.dump.output_dir.clone()
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.persist().0
    }

    /// Keep the temp directory (don't delete on drop)
    pub fn persist(self) -> (Config, TempDir) {
        let config = Config {
            logging: self.logging,
            dump: self.dump,
            databases: self.databases,
            merged: MergedConfig::from_resources(self.resources),
        };
        (config, self.temp_dir)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
