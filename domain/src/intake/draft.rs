//! Opening-form validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, opening};

use super::selection::Selection;

/// Canonical date form accepted on the opening page.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One field-level validation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field_id: String,
    pub message: String,
}

/// Validation messages keyed by field, in form order.
///
/// A value, not a panic: the caller re-renders the form with these
/// messages attached and the user's typed values intact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field_id: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field_id: field_id.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// First message recorded for a field, if any.
    pub fn message_for(&self, field_id: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field_id == field_id)
            .map(|e| e.message.as_str())
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field_id, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

impl std::error::Error for FieldErrors {}

/// Raw opening-form values exactly as typed.
///
/// Held as strings so a failed validation can re-render the form without
/// blanking anything the user already filled in correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningDraft {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl OpeningDraft {
    /// Check the required opening fields.
    ///
    /// Collects every problem in one pass rather than stopping at the
    /// first, so the re-rendered form can flag all offending fields at
    /// once. On success the selection is trimmed, parsed, and category
    /// de-duplicated; `submitted_by` is left for the caller to fill.
    pub fn validate(&self) -> Result<Selection, FieldErrors> {
        let mut errors = FieldErrors::new();

        let company_name = self.company_name.trim();
        if company_name.is_empty() {
            errors.push(opening::COMPANY_NAME, "Company name is required");
        }

        let project_name = self.project_name.trim();
        if project_name.is_empty() {
            errors.push(opening::PROJECT_NAME, "Project name is required");
        }

        let date = self.date.trim();
        if date.is_empty() {
            errors.push(opening::DATE, "Please select a date");
        } else if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
            errors.push(opening::DATE, "Date must be YYYY-MM-DD");
        }

        let mut categories: Vec<Category> = Vec::new();
        let provided: Vec<&str> = self
            .categories
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect();
        if provided.is_empty() {
            errors.push(opening::CATEGORIES, "Select at least one service");
        } else {
            for raw in provided {
                match raw.parse::<Category>() {
                    Ok(category) => {
                        if !categories.contains(&category) {
                            categories.push(category);
                        }
                    }
                    Err(_) => errors.push(opening::CATEGORIES, format!("Unknown service: {raw}")),
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Selection {
            company_name: company_name.to_string(),
            project_name: project_name.to_string(),
            date: date.to_string(),
            categories,
            submitted_by: None,
        })
    }
}
