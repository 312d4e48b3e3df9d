//! Output format value object

use serde::{Deserialize, Serialize};

/// How a completed brief is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full formatted brief, section by section (default)
    Full,
    /// One-line recap only
    Summary,
    /// The delivery payload as pretty-printed JSON
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Full
    }
}
