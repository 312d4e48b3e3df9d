//! Compose Details use case
//!
//! Validates the opening draft and composes the follow-up page. Validation
//! failure is an expected outcome here, not an error: the caller gets the
//! field messages back and re-renders the opening form with the draft
//! values intact.

use std::sync::Arc;

use brief_domain::{Catalog, ComposeError, FieldErrors, FormPage, IntakeSession, OpeningDraft, opening};
use tracing::{debug, info};

use crate::ports::correlation::{CorrelationStore, CorrelationToken};

/// The composed follow-up page plus the handle needed to submit it.
#[derive(Debug, Clone)]
pub struct DetailsPage {
    /// Single-use token the final submission must present
    pub token: CorrelationToken,
    /// Human-readable category list, e.g. "Messaging, Strategy"
    pub summary: String,
    /// The follow-up form to render
    pub page: FormPage,
}

/// Use case for turning an opening draft into the details page
pub struct ComposeDetailsUseCase {
    catalog: Arc<Catalog>,
    correlation: Arc<dyn CorrelationStore>,
    default_submitted_by: Option<String>,
}

impl ComposeDetailsUseCase {
    pub fn new(catalog: Arc<Catalog>, correlation: Arc<dyn CorrelationStore>) -> Self {
        Self {
            catalog,
            correlation,
            default_submitted_by: None,
        }
    }

    /// Attribute accepted briefs to this user when the draft carries none.
    pub fn with_submitted_by(mut self, user: impl Into<String>) -> Self {
        self.default_submitted_by = Some(user.into());
        self
    }

    /// Validate the draft and compose the follow-up questionnaire.
    ///
    /// On success the session advances to `DetailsComposed` and the
    /// accepted selection is stashed behind the returned token. On
    /// validation failure the session stays at `Opened`.
    pub fn execute(
        &self,
        session: &mut IntakeSession,
        draft: OpeningDraft,
    ) -> Result<DetailsPage, FieldErrors> {
        let mut selection = session.submit_opening(draft)?;
        if selection.submitted_by.is_none() {
            selection.submitted_by = self.default_submitted_by.clone();
        }

        let details = match self.catalog.compose(&selection.categories) {
            Ok(details) => details,
            // Validation already guarantees a non-empty selection; keep the
            // re-assertion as a field error rather than a panic.
            Err(ComposeError::EmptySelection) => {
                let mut errors = FieldErrors::new();
                errors.push(opening::CATEGORIES, "Select at least one service");
                return Err(errors);
            }
        };

        let summary = details.summary();
        let page = details.page();
        let token = self.correlation.stash(selection);
        session.mark_composed();

        debug!(token = %token, "Selection stashed for submission");
        info!("Composed details page for: {}", summary);

        Ok(DetailsPage {
            token,
            summary,
            page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brief_domain::{IntakeStage, Selection};
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct TestStore {
        entries: Mutex<HashMap<String, Selection>>,
        counter: Mutex<u64>,
    }

    impl TestStore {
        fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                counter: Mutex::new(0),
            }
        }
    }

    impl CorrelationStore for TestStore {
        fn stash(&self, selection: Selection) -> CorrelationToken {
            let mut counter = self.counter.lock().unwrap();
            *counter += 1;
            let token = CorrelationToken::new(format!("t{counter}"));
            self.entries
                .lock()
                .unwrap()
                .insert(token.as_str().to_string(), selection);
            token
        }

        fn reclaim(&self, token: &CorrelationToken) -> Option<Selection> {
            self.entries.lock().unwrap().remove(token.as_str())
        }
    }

    fn draft() -> OpeningDraft {
        OpeningDraft {
            company_name: "Acme".into(),
            project_name: "Rebrand".into(),
            date: "2025-06-01".into(),
            categories: vec!["Messaging".into(), "Strategy".into()],
        }
    }

    fn use_case(store: Arc<TestStore>) -> ComposeDetailsUseCase {
        ComposeDetailsUseCase::new(Arc::new(Catalog::standard().unwrap()), store)
    }

    #[test]
    fn test_valid_draft_composes_and_stashes_selection() {
        let store = Arc::new(TestStore::new());
        let mut session = IntakeSession::new();

        let details = use_case(store.clone()).execute(&mut session, draft()).unwrap();
        assert_eq!(session.stage(), IntakeStage::DetailsComposed);
        assert_eq!(details.summary, "Messaging, Strategy");
        assert_eq!(details.page.title, "Service Details");
        // stakeholders_interview applies to neither selected category
        assert_eq!(details.page.blocks.len(), 4);

        let stashed = store.reclaim(&details.token).unwrap();
        assert_eq!(stashed.company_name, "Acme");
        assert!(stashed.submitted_by.is_none());
    }

    #[test]
    fn test_invalid_draft_reports_fields_and_keeps_stage() {
        let store = Arc::new(TestStore::new());
        let mut session = IntakeSession::new();
        let mut bad = draft();
        bad.project_name = String::new();
        bad.date = "soon".into();

        let errors = use_case(store).execute(&mut session, bad).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(session.stage(), IntakeStage::Opened);
        assert_eq!(session.draft().company_name, "Acme");
    }

    #[test]
    fn test_default_submitted_by_fills_empty_attribution() {
        let store = Arc::new(TestStore::new());
        let mut session = IntakeSession::new();

        let details = use_case(store.clone())
            .with_submitted_by("mwallace")
            .execute(&mut session, draft())
            .unwrap();
        let stashed = store.reclaim(&details.token).unwrap();
        assert_eq!(stashed.submitted_by.as_deref(), Some("mwallace"));
    }
}
