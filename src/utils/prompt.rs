//! Operator confirmation prompts
//!
//! Wrapped in a trait so commands can be driven without a terminal in tests.

use anyhow::{Context, Result};

/// Asks the operator a yes/no question
pub trait Confirmation {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompt backed by dialoguer
#[derive(Debug, Clone, Default)]
pub struct TerminalConfirmation;

impl TerminalConfirmation {
    pub fn new() -> Self {
        Self
    }
}

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .context("Failed to read confirmation from terminal")
    }
}

/// Scripted confirmation for tests
/// Available for use in external test crates
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Answers every prompt with a fixed reply and records what was asked
    #[derive(Clone)]
    pub struct ScriptedConfirmation {
        answer: Option<bool>,
        pub asked: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedConfirmation {
        pub fn answering(answer: bool) -> Self {
            Self {
                answer: Some(answer),
                asked: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Fails like a prompt with no terminal attached
        pub fn broken() -> Self {
            Self {
                answer: None,
                asked: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn times_asked(&self) -> usize {
            self.asked.lock().unwrap().len()
        }
    }

    impl Confirmation for ScriptedConfirmation {
        fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
            self.asked.lock().unwrap().push(prompt.to_string());
            self.answer
                .ok_or_else(|| anyhow::anyhow!("not a terminal"))
        }
    }
}
