//! Database dump manager - orchestrates the `db-dump` command

use crate::config::DatabaseMap;
use crate::generators::DumpGenerator;
use crate::utils::Confirmation;
use tracing::{debug, error, info};

/// Question shown before any dump starts
pub const MAINTENANCE_PROMPT: &str =
    "We suggest to enable maintenance mode before running this command. Do you want to continue";

/// Databases to back up and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupRequest {
    pub databases: Vec<String>,
    pub remove_definers: bool,
}

impl BackupRequest {
    pub fn new<I, S>(databases: I, remove_definers: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            databases: databases.into_iter().map(Into::into).collect(),
            remove_definers,
        }
    }

    /// Request covering every known database
    pub fn all(map: &DatabaseMap, remove_definers: bool) -> Self {
        Self::new(map.names(), remove_definers)
    }
}

/// How a `db-dump` run ended without an execution failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpOutcome {
    /// Every requested database was dumped
    Completed { databases: usize },
    /// Unknown database names; nothing ran
    Rejected { invalid: Vec<String> },
    /// The operator declined the confirmation prompt
    Declined,
}

#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("Failed to create dump for database '{database}': {source}")]
    Execution {
        database: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to ask for confirmation: {0}")]
    Prompt(String),
}

pub struct DumpManager<G: DumpGenerator, C: Confirmation> {
    databases: DatabaseMap,
    generator: G,
    confirmation: C,
}

impl<G: DumpGenerator, C: Confirmation> DumpManager<G, C> {
    /// Create new dump manager
    pub fn new(databases: DatabaseMap, generator: G, confirmation: C) -> Self {
        Self {
            databases,
            generator,
            confirmation,
        }
    }

    /// Validate the request, confirm with the operator and dump each database in order
    pub fn run(&self, request: &BackupRequest, interactive: bool) -> Result<DumpOutcome, DumpError> {
        let invalid = self.invalid_databases(&request.databases);
        if !invalid.is_empty() {
            let available = self.databases.names().join(",");
            for database in &invalid {
                error!(
                    "Incorrect value for argument 'databases': {}. Available values: [{}]",
                    database, available
                );
            }
            return Ok(DumpOutcome::Rejected { invalid });
        }

        // Non-interactive runs skip the question entirely
        if interactive {
            let confirmed = self
                .confirmation
                .confirm(MAINTENANCE_PROMPT, false)
                .map_err(|e| DumpError::Prompt(format!("{:#}", e)))?;
            if !confirmed {
                return Ok(DumpOutcome::Declined);
            }
        }

        info!("Starting backup.");
        debug!("Using {} dump generator", self.generator.name());

        for database in &request.databases {
            if let Err(e) = self.generator.create(database, request.remove_definers) {
                error!(severity = "critical", "{:#}", e);
                return Err(DumpError::Execution {
                    database: database.clone(),
                    source: e.into(),
                });
            }
        }

        info!("Backup completed.");

        Ok(DumpOutcome::Completed {
            databases: request.databases.len(),
        })
    }

    /// Requested names missing from the database map, in request order
    fn invalid_databases(&self, requested: &[String]) -> Vec<String> {
        requested
            .iter()
            .filter(|name| !self.databases.contains(name))
            .cloned()
            .collect()
    }
}
