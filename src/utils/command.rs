//! Utilities for running commands with proper error handling

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tracing::{debug, error, info};

/// Run a command and wait for it to finish
pub fn run_command(program: &str, args: &[&str], working_dir: Option<&Path>) -> Result<Output> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }

    debug!("Running command: {} {}", program, args.join(" "));

    let output = cmd
        .output()
        .context(format!("Failed to execute {}", program))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        error!("Command failed: {} {}", program, args.join(" "));
        error!("Stderr: {}", stderr);
        anyhow::bail!(
            "Command failed with exit code {:?}: {}",
            output.status.code(),
            stderr
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.is_empty() {
        debug!("Command output: {}", stdout);
    }

    Ok(output)
}

/// Run a shell command (dump pipelines need pipes and redirection)
pub fn run_shell_command(command: &str, working_dir: Option<&Path>) -> Result<Output> {
    info!("Running shell command: {}", command);

    #[cfg(unix)]
    let (shell, flag) = ("sh", "-c");

    #[cfg(windows)]
    let (shell, flag) = ("cmd", "/C");

    run_command(shell, &[flag, command], working_dir)
}
