//! Non-interactive input sources

pub mod answers_file;

pub use answers_file::{AnswersFile, AnswersFileError};
