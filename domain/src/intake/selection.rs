//! The accepted opening answers, threaded through to extraction.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// Correlation payload between the two form pages.
///
/// Produced by opening validation, consumed by the extractor. Travels
/// through whatever continuation mechanism the host uses (the intake use
/// cases keep it server-side behind an opaque token), so it round-trips
/// through serde without loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub company_name: String,
    pub project_name: String,
    pub date: String,
    /// De-duplicated, in first-selected order.
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,
}
