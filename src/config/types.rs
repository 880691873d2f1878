use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingSettings,

    #[serde(default)]
    pub dump: DumpSettings,

    /// Logical databases available to `db-dump`
    #[serde(default)]
    pub databases: DatabaseMap,

    /// Merged deployment configuration (the `resource` section)
    #[serde(flatten)]
    pub merged: MergedConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_max_files")]
    pub max_files: u32,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
            level: default_log_level(),
            max_files: default_log_max_files(),
        }
    }
}

/// How the external dump utility is invoked
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DumpSettings {
    /// Shell command template, see `generators::shell` for placeholders
    #[serde(default = "default_dump_command")]
    pub command: String,

    /// Directory dumps are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Pipeline stage appended when definers must be stripped
    #[serde(default = "default_definer_filter")]
    pub definer_filter: String,
}

impl Default for DumpSettings {
    fn default() -> Self {
        Self {
            command: default_dump_command(),
            output_dir: default_output_dir(),
            definer_filter: default_definer_filter(),
        }
    }
}

/// Connection-selection metadata for one logical database
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DatabaseEntry {
    /// Connection name used to reach the database
    pub connection: String,

    /// Resource name in the merged configuration, defaults to the connection name
    #[serde(default)]
    pub resource: String,
}

impl DatabaseEntry {
    pub fn new(connection: &str, resource: &str) -> Self {
        Self {
            connection: connection.to_string(),
            resource: resource.to_string(),
        }
    }

    /// Resource to dump, falling back to the connection name when unset
    pub fn resource_name(&self) -> &str {
        if self.resource.trim().is_empty() {
            &self.connection
        } else {
            &self.resource
        }
    }
}

/// Fixed mapping of logical database identifiers to their connection metadata
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct DatabaseMap(BTreeMap<String, DatabaseEntry>);

impl DatabaseMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add or replace an entry
    pub fn with_database(mut self, name: &str, entry: DatabaseEntry) -> Self {
        self.0.insert(name.to_string(), entry);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&DatabaseEntry> {
        self.0.get(name)
    }

    /// All known identifiers, sorted
    pub fn names(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DatabaseEntry)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for DatabaseMap {
    fn default() -> Self {
        Self::new()
            .with_database("main", DatabaseEntry::new("default", "default"))
            .with_database("quote", DatabaseEntry::new("checkout", "checkout"))
            .with_database("sales", DatabaseEntry::new("sales", "sales"))
    }
}

/// Deployment configuration after all sources have been merged
///
/// Only the `resource` section is modelled. Each resource value is kept as
/// raw JSON since its shape is owned by whoever produced the merge.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct MergedConfig {
    #[serde(default)]
    pub resource: Map<String, Value>,
}

impl MergedConfig {
    pub const KEY_CONNECTION: &'static str = "connection";

    /// Build from a `resource` map
    pub fn from_resources(resource: Map<String, Value>) -> Self {
        Self { resource }
    }

    /// Parse a merged configuration from its JSON form
    pub fn from_json(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Resources in declaration order
    pub fn resources(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.resource.iter()
    }
}

// Default value functions

fn default_log_directory() -> PathBuf { PathBuf::from("~/logs") }
fn default_log_level() -> String { "info".to_string() }
fn default_log_max_files() -> u32 { 10 }
fn default_dump_command() -> String {
    "mysqldump --defaults-group-suffix=_{connection} --single-transaction --routines \
     {resource}{definer_filter} | gzip > {output_dir}/{database}_dump_{timestamp}.sql.gz"
        .to_string()
}
fn default_output_dir() -> PathBuf { PathBuf::from("/tmp") }
fn default_definer_filter() -> String {
    r"sed -e 's/DEFINER[ ]*=[ ]*[^*]*\*/\*/'".to_string()
}
