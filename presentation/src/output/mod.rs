//! Output formatting for completed briefs

pub mod console;

pub use console::ConsoleFormatter;
