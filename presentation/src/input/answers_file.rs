//! Headless answer loading
//!
//! A single JSON document drives an intake run without prompts:
//!
//! ```json
//! {
//!   "opening": {
//!     "company_name": "Acme Corp",
//!     "project_name": "Rebrand",
//!     "date": "2025-03-01",
//!     "categories": ["Naming"]
//!   },
//!   "answers": {
//!     "naming_complexity_level_block": { "complexity_level": "Tier 2" },
//!     "advertisement_platform_block": { "platforms": ["Facebook"] }
//!   }
//! }
//! ```
//!
//! The `answers` map uses the same block and field ids the catalog
//! declares; unknown ids are carried along and ignored by extraction.

use std::path::Path;

use brief_domain::{AnswerSheet, OpeningDraft};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnswersFileError {
    #[error("failed to read answers file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse answers file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Both pages of an intake, answered up front
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswersFile {
    #[serde(default)]
    pub opening: OpeningDraft,
    #[serde(default)]
    pub answers: AnswerSheet,
}

impl AnswersFile {
    pub fn load(path: &Path) -> Result<Self, AnswersFileError> {
        let text = std::fs::read_to_string(path).map_err(|source| AnswersFileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| AnswersFileError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "opening": {
            "company_name": "Acme Corp",
            "project_name": "Rebrand",
            "date": "2025-03-01",
            "categories": ["Naming"]
        },
        "answers": {
            "naming_complexity_level_block": { "complexity_level": "Tier 2" }
        }
    }"#;

    #[test]
    fn test_load_parses_both_pages() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let answers = AnswersFile::load(file.path()).unwrap();
        assert_eq!(answers.opening.company_name, "Acme Corp");
        assert_eq!(answers.opening.categories, vec!["Naming"]);
        assert!(
            answers
                .answers
                .contains_block("naming_complexity_level_block")
        );
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let answers: AnswersFile = serde_json::from_str("{}").unwrap();
        assert!(answers.opening.company_name.is_empty());
        assert!(answers.answers.is_empty());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AnswersFile::load(Path::new("/nonexistent/answers.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/answers.json"));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = AnswersFile::load(file.path()).unwrap_err();
        assert!(matches!(err, AnswersFileError::Parse { .. }));
    }
}
