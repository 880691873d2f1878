pub mod command;
pub mod prompt;

// Trait-based abstractions for testability
pub mod executor;

// Re-export commonly used types and traits (used by test crate)
pub use executor::{CommandExecutor, RealExecutor};
pub use prompt::{Confirmation, TerminalConfirmation};
