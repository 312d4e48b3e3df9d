//! Interactive intake wizard
//!
//! Prompts through both intake pages on a terminal.

mod prompts;
mod runner;

pub use runner::{IntakeWizard, WizardError};
