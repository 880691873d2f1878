use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cloud_db_tools::config;
use cloud_db_tools::managers::dump::{BackupRequest, DumpManager, DumpOutcome};
use cloud_db_tools::managers::logging::{init_logging, LoggingConfig};
use cloud_db_tools::utils::TerminalConfirmation;
use cloud_db_tools::validators::{ResourceConfiguration, Validator};
use cloud_db_tools::ShellDumpGenerator;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cloud-db-tools")]
#[command(about = "Database backup and configuration checks for cloud deployments", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "cloud-db-tools.toml")]
    config: PathBuf,

    /// Do not ask any interactive question
    #[arg(short = 'n', long, global = true)]
    no_interaction: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Creates backup of database
    #[command(name = "db-dump")]
    DbDump {
        /// Databases to backup (defaults to every configured database)
        databases: Vec<String>,

        /// Remove definers from the database dump
        #[arg(short = 'd', long)]
        remove_definers: bool,
    },

    /// Validate the merged resource configuration
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;

    // Setup logging with file rotation (must keep guard alive)
    let log_guard = init_logging(&LoggingConfig::from_settings(&config.logging))?;

    match cli.command {
        Commands::DbDump {
            databases,
            remove_definers,
        } => {
            let request = if databases.is_empty() {
                BackupRequest::all(&config.databases, remove_definers)
            } else {
                BackupRequest::new(databases, remove_definers)
            };
            let interactive = !cli.no_interaction && std::io::stdin().is_terminal();

            let generator = ShellDumpGenerator::new(config.dump.clone(), config.databases.clone());
            let manager = DumpManager::new(
                config.databases.clone(),
                generator,
                TerminalConfirmation::new(),
            );

            match manager.run(&request, interactive)? {
                DumpOutcome::Completed { databases } => {
                    println!("✓ Backup completed for {} database(s)", databases);
                }
                // Already reported through the log
                DumpOutcome::Rejected { .. } => {}
                DumpOutcome::Declined => {
                    println!("Backup cancelled.");
                }
            }
        }

        Commands::Validate => {
            let result = ResourceConfiguration::new(&config.merged).validate();
            if result.is_success() {
                println!("✓ {}", result);
                println!("Resources: {}", config.merged.resource.len());
            } else {
                eprintln!("✗ {}", result);
                drop(log_guard);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
