//! Shell dump generator
//!
//! Runs the configured dump command template through the shell. Supported
//! placeholders:
//! - `{database}`: logical database identifier
//! - `{connection}` / `{resource}`: values from the database map entry
//!   (`{resource}` falls back to the connection name)
//! - `{output_dir}`: configured dump directory (tilde expanded)
//! - `{timestamp}`: local time as `%Y_%m_%d_%H%M%S`
//! - `{definer_filter}`: ` | <filter>` when definers are removed, else empty

use super::DumpGenerator;
use crate::config::{expand_tilde, DatabaseEntry, DatabaseMap, DumpSettings};
use crate::utils::{CommandExecutor, RealExecutor};
use anyhow::{Context, Result};
use std::fs;
use tracing::{debug, info};

pub struct ShellDumpGenerator<E: CommandExecutor = RealExecutor> {
    settings: DumpSettings,
    databases: DatabaseMap,
    executor: E,
}

impl ShellDumpGenerator<RealExecutor> {
    pub fn new(settings: DumpSettings, databases: DatabaseMap) -> Self {
        Self::with_executor(settings, databases, RealExecutor::new())
    }
}

impl<E: CommandExecutor> ShellDumpGenerator<E> {
    /// Create generator with a specific executor
    pub fn with_executor(settings: DumpSettings, databases: DatabaseMap, executor: E) -> Self {
        Self {
            settings,
            databases,
            executor,
        }
    }

    /// Fill in the command template for one database
    pub fn render_command(
        &self,
        database: &str,
        entry: &DatabaseEntry,
        remove_definers: bool,
        timestamp: &str,
    ) -> String {
        let definer_filter = if remove_definers {
            format!(" | {}", self.settings.definer_filter)
        } else {
            String::new()
        };
        let output_dir = expand_tilde(&self.settings.output_dir);

        self.settings
            .command
            .replace("{database}", database)
            .replace("{connection}", &entry.connection)
            .replace("{resource}", entry.resource_name())
            .replace("{output_dir}", &output_dir.display().to_string())
            .replace("{timestamp}", timestamp)
            .replace("{definer_filter}", &definer_filter)
    }
}

impl<E: CommandExecutor> DumpGenerator for ShellDumpGenerator<E> {
    fn create(&self, database: &str, remove_definers: bool) -> Result<()> {
        let entry = self
            .databases
            .get(database)
            .ok_or_else(|| anyhow::anyhow!("Database '{}' is not configured", database))?;

        let output_dir = expand_tilde(&self.settings.output_dir);
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("Failed to create dump directory: {:?}", output_dir))?;

        let timestamp = chrono::Local::now().format("%Y_%m_%d_%H%M%S").to_string();
        let command = self.render_command(database, entry, remove_definers, &timestamp);

        info!("Creating dump of '{}' database", database);
        debug!("Dump command: {}", command);

        self.executor
            .run_shell_command(&command, None)
            .with_context(|| format!("Failed to dump database '{}'", database))?;

        info!("Dump of '{}' database created", database);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "shell"
    }
}
