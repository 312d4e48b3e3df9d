//! Presentation layer for briefdesk
//!
//! This crate contains CLI definitions, the interactive intake wizard,
//! headless answer loading, and output formatting.

pub mod cli;
pub mod input;
pub mod output;
pub mod wizard;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use input::answers_file::{AnswersFile, AnswersFileError};
pub use output::console::ConsoleFormatter;
pub use wizard::{IntakeWizard, WizardError};
