//! Begin Intake use case
//!
//! Opens a fresh intake session and hands the caller the opening page.

use std::sync::Arc;

use brief_domain::{Catalog, FormPage, IntakeSession};
use tracing::debug;

/// Output of the BeginIntake use case
#[derive(Debug, Clone)]
pub struct BeginIntakeOutput {
    /// New session at the `Opened` stage
    pub session: IntakeSession,
    /// The opening form to render
    pub page: FormPage,
}

/// Use case for starting a questionnaire instance
pub struct BeginIntakeUseCase {
    catalog: Arc<Catalog>,
}

impl BeginIntakeUseCase {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self) -> BeginIntakeOutput {
        debug!("Opening a new intake session");
        BeginIntakeOutput {
            session: IntakeSession::new(),
            page: self.catalog.opening_page(),
        }
    }
}
