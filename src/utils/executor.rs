//! Command execution abstraction for testability
//!
//! This module provides a trait-based abstraction for command execution,
//! enabling dependency injection and mocking for tests.

use anyhow::Result;
use std::path::Path;
use std::process::Output;

/// Abstraction for command execution, enabling mocking in tests
pub trait CommandExecutor {
    /// Run a command and wait for it
    fn run_command(&self, program: &str, args: &[&str], working_dir: Option<&Path>) -> Result<Output>;

    /// Run a shell command line
    fn run_shell_command(&self, command: &str, working_dir: Option<&Path>) -> Result<Output>;
}

/// Default implementation using real subprocess calls
#[derive(Debug, Clone, Default)]
pub struct RealExecutor;

impl RealExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for RealExecutor {
    fn run_command(&self, program: &str, args: &[&str], working_dir: Option<&Path>) -> Result<Output> {
        super::command::run_command(program, args, working_dir)
    }

    fn run_shell_command(&self, command: &str, working_dir: Option<&Path>) -> Result<Output> {
        super::command::run_shell_command(command, working_dir)
    }
}

/// A mock executor that records calls and returns configured responses
/// Available for use in external test crates
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Recorded command invocation
    #[derive(Clone, Debug)]
    pub struct CommandCall {
        pub program: String,
        pub args: Vec<String>,
        pub working_dir: Option<String>,
    }

    /// Configured failure: needle, stderr, exit code
    type Failure = (String, String, i32);

    /// Mock executor for testing
    #[derive(Clone, Default)]
    pub struct MockExecutor {
        /// Recorded command invocations
        pub calls: Arc<Mutex<Vec<CommandCall>>>,
        /// Failure returned when a command line contains the given needle
        failures: Arc<Mutex<Vec<Failure>>>,
    }

    impl MockExecutor {
        pub fn new() -> Self {
            Self::default()
        }

        /// Fail any invocation whose joined command line contains `needle`
        pub fn fail_when_contains(self, needle: &str, stderr: &str, exit_code: i32) -> Self {
            self.failures
                .lock()
                .unwrap()
                .push((needle.to_string(), stderr.to_string(), exit_code));
            self
        }

        /// Get all recorded calls
        pub fn get_calls(&self) -> Vec<CommandCall> {
            self.calls.lock().unwrap().clone()
        }

        /// The last argument of each recorded call (the script for shell calls)
        pub fn command_lines(&self) -> Vec<String> {
            self.get_calls()
                .into_iter()
                .filter_map(|c| c.args.last().cloned())
                .collect()
        }

        fn failure_for(&self, line: &str) -> Option<(String, i32)> {
            self.failures
                .lock()
                .unwrap()
                .iter()
                .find(|(needle, _, _)| line.contains(needle.as_str()))
                .map(|(_, stderr, code)| (stderr.clone(), *code))
        }
    }

    impl CommandExecutor for MockExecutor {
        fn run_command(&self, program: &str, args: &[&str], working_dir: Option<&Path>) -> Result<Output> {
            self.calls.lock().unwrap().push(CommandCall {
                program: program.to_string(),
                args: args.iter().map(|s| s.to_string()).collect(),
                working_dir: working_dir.map(|p| p.display().to_string()),
            });

            let line = format!("{} {}", program, args.join(" "));
            if let Some((stderr, exit_code)) = self.failure_for(&line) {
                anyhow::bail!("Command failed with exit code {:?}: {}", exit_code, stderr);
            }

            Ok(Output {
                status: std::process::ExitStatus::default(),
                stdout: Vec::new(),
                stderr: Vec::new(),
            })
        }

        fn run_shell_command(&self, command: &str, working_dir: Option<&Path>) -> Result<Output> {
            #[cfg(unix)]
            let (shell, flag) = ("sh", "-c");
            #[cfg(windows)]
            let (shell, flag) = ("cmd", "/C");

            self.run_command(shell, &[flag, command], working_dir)
        }
    }
}
