//! Selection-to-questions composition.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, Category, FormPage, QuestionBlock};

/// Title of the follow-up page.
pub const DETAILS_TITLE: &str = "Service Details";
/// Submit label of the follow-up page.
pub const DETAILS_SUBMIT_LABEL: &str = "Submit";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// Upstream validation should have caught this; re-asserted here because
    /// an empty details page would otherwise submit silently.
    #[error("no categories selected")]
    EmptySelection,
}

/// The ordered follow-up questionnaire for one selection.
///
/// Produced by [`Catalog::compose`]. Block order is deterministic:
/// exclusive blocks in selection order, then shared blocks in catalog
/// order, then extra groups in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedDetails {
    categories: Vec<Category>,
    blocks: Vec<QuestionBlock>,
}

impl ComposedDetails {
    /// The selection this page was composed for, de-duplicated, in the
    /// order categories were first selected.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn blocks(&self) -> &[QuestionBlock] {
        &self.blocks
    }

    /// Human-readable category list for headers and logs,
    /// e.g. `"Messaging, Strategy"`.
    pub fn summary(&self) -> String {
        self.categories
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn page(&self) -> FormPage {
        FormPage::new(DETAILS_TITLE, DETAILS_SUBMIT_LABEL).with_blocks(self.blocks.clone())
    }
}

impl Catalog {
    /// Compose the follow-up questionnaire for a category selection.
    ///
    /// Pure and deterministic: the same selection always yields the same
    /// block list. Duplicate categories are collapsed to their first
    /// occurrence. Shared questions appear exactly once when any selected
    /// category qualifies them.
    pub fn compose(&self, selection: &[Category]) -> Result<ComposedDetails, ComposeError> {
        let mut categories: Vec<Category> = Vec::with_capacity(selection.len());
        for &category in selection {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        if categories.is_empty() {
            return Err(ComposeError::EmptySelection);
        }

        let mut blocks = Vec::new();
        // Exclusive blocks first. Categories without one are skipped,
        // not an error.
        for &category in &categories {
            if let Some(block) = self.exclusive_block(category) {
                blocks.push(block.clone());
            }
        }
        // Shared blocks once each, in catalog order.
        for rule in self.shared_rules() {
            if rule.applies_to_any(&categories) {
                blocks.push(rule.block.clone());
            }
        }
        // Extra groups last.
        for &category in &categories {
            blocks.extend(self.extra_blocks(category).iter().cloned());
        }

        Ok(ComposedDetails { categories, blocks })
    }
}
