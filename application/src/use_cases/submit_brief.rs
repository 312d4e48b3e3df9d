//! Submit Brief use case
//!
//! Reclaims the stashed selection, extracts the structured brief from the
//! submitted answers, stamps it, and hands it to the configured sink.
//! Delivery failure is an outcome, not an error: the brief is already
//! complete at that point and must survive a broken endpoint.

use std::sync::Arc;

use brief_domain::{AnswerSheet, BriefSubmission, Catalog, IntakeSession};
use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::ports::brief_sink::BriefSink;
use crate::ports::correlation::{CorrelationStore, CorrelationToken};
use crate::ports::submission_log::{SubmissionEvent, SubmissionLogger};

/// Errors that can occur while accepting a details submission
#[derive(Error, Debug)]
pub enum SubmitBriefError {
    /// The token was never issued, or its selection was already consumed.
    #[error("unknown or already-used submission token")]
    UnknownToken,
}

/// What happened to the completed brief downstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The sink accepted the brief
    Delivered,
    /// No sink configured (dry run or webhook disabled)
    Skipped,
    /// The sink refused or could not be reached
    Failed(String),
}

impl DeliveryOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            DeliveryOutcome::Delivered => "delivered",
            DeliveryOutcome::Skipped => "skipped",
            DeliveryOutcome::Failed(_) => "failed",
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DeliveryOutcome::Failed(_))
    }
}

/// Output of the SubmitBrief use case
#[derive(Debug, Clone)]
pub struct SubmitBriefOutput {
    pub submission: BriefSubmission,
    pub delivery: DeliveryOutcome,
}

/// Use case for accepting the details submission and finishing the intake
pub struct SubmitBriefUseCase<S: BriefSink + 'static> {
    catalog: Arc<Catalog>,
    correlation: Arc<dyn CorrelationStore>,
    sink: Option<Arc<S>>,
    logger: Arc<dyn SubmissionLogger>,
}

impl<S: BriefSink + 'static> SubmitBriefUseCase<S> {
    pub fn new(
        catalog: Arc<Catalog>,
        correlation: Arc<dyn CorrelationStore>,
        sink: Arc<S>,
        logger: Arc<dyn SubmissionLogger>,
    ) -> Self {
        Self {
            catalog,
            correlation,
            sink: Some(sink),
            logger,
        }
    }

    /// Build a use case that produces and archives the brief without
    /// delivering it anywhere.
    pub fn without_delivery(
        catalog: Arc<Catalog>,
        correlation: Arc<dyn CorrelationStore>,
        logger: Arc<dyn SubmissionLogger>,
    ) -> Self {
        Self {
            catalog,
            correlation,
            sink: None,
            logger,
        }
    }

    pub async fn execute(
        &self,
        session: &mut IntakeSession,
        token: &CorrelationToken,
        answers: &AnswerSheet,
    ) -> Result<SubmitBriefOutput, SubmitBriefError> {
        let Some(selection) = self.correlation.reclaim(token) else {
            warn!(token = %token, "Rejected details submission with unknown token");
            return Err(SubmitBriefError::UnknownToken);
        };

        let mut submission = self.catalog.extract(&selection, answers);
        submission.submitted_at = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));

        let delivery = match &self.sink {
            None => {
                debug!("No sink configured; skipping delivery");
                DeliveryOutcome::Skipped
            }
            Some(sink) => match sink.deliver(&submission).await {
                Ok(()) => {
                    info!(company = %submission.company_name, "Brief delivered");
                    DeliveryOutcome::Delivered
                }
                Err(e) => {
                    warn!(error = %e, "Brief delivery failed; submission retained");
                    DeliveryOutcome::Failed(e.to_string())
                }
            },
        };

        self.logger.record(SubmissionEvent::new(
            "brief_submitted",
            json!({
                "delivery": delivery.as_str(),
                "submission": serde_json::to_value(&submission).unwrap_or(Value::Null),
            }),
        ));
        session.mark_submitted();

        Ok(SubmitBriefOutput {
            submission,
            delivery,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::brief_sink::SinkError;
    use brief_domain::{Category, IntakeStage, OpeningDraft, Selection};
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct TestStore {
        entries: Mutex<HashMap<String, Selection>>,
    }

    impl TestStore {
        fn with_selection(token: &str, selection: Selection) -> Arc<Self> {
            Arc::new(Self {
                entries: Mutex::new(HashMap::from([(token.to_string(), selection)])),
            })
        }
    }

    impl CorrelationStore for TestStore {
        fn stash(&self, _selection: Selection) -> CorrelationToken {
            unimplemented!("tests seed the store directly")
        }

        fn reclaim(&self, token: &CorrelationToken) -> Option<Selection> {
            self.entries.lock().unwrap().remove(token.as_str())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        deliveries: Mutex<Vec<BriefSubmission>>,
    }

    #[async_trait::async_trait]
    impl BriefSink for RecordingSink {
        async fn deliver(&self, submission: &BriefSubmission) -> Result<(), SinkError> {
            self.deliveries.lock().unwrap().push(submission.clone());
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait::async_trait]
    impl BriefSink for FailingSink {
        async fn deliver(&self, _submission: &BriefSubmission) -> Result<(), SinkError> {
            Err(SinkError::Rejected("HTTP 500".into()))
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, Value)>>,
    }

    impl SubmissionLogger for RecordingLogger {
        fn record(&self, event: SubmissionEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    fn naming_selection() -> Selection {
        Selection {
            company_name: "Acme".into(),
            project_name: "Rebrand".into(),
            date: "2025-06-01".into(),
            categories: vec![Category::Naming],
            submitted_by: Some("mwallace".into()),
        }
    }

    fn composed_session() -> IntakeSession {
        let mut session = IntakeSession::new();
        session
            .submit_opening(OpeningDraft {
                company_name: "Acme".into(),
                project_name: "Rebrand".into(),
                date: "2025-06-01".into(),
                categories: vec!["Naming".into()],
            })
            .unwrap();
        session.mark_composed();
        session
    }

    fn answers() -> AnswerSheet {
        let mut sheet = AnswerSheet::new();
        sheet.set_value("naming_complexity_level_block", "complexity_level", "Tier 2");
        sheet
    }

    #[tokio::test]
    async fn test_submit_delivers_and_finishes_session() {
        let store = TestStore::with_selection("t1", naming_selection());
        let sink = Arc::new(RecordingSink::default());
        let logger = Arc::new(RecordingLogger::default());
        let use_case = SubmitBriefUseCase::new(
            Arc::new(Catalog::standard().unwrap()),
            store,
            sink.clone(),
            logger.clone(),
        );

        let mut session = composed_session();
        let output = use_case
            .execute(&mut session, &CorrelationToken::new("t1"), &answers())
            .await
            .unwrap();

        assert_eq!(output.delivery, DeliveryOutcome::Delivered);
        assert_eq!(session.stage(), IntakeStage::Submitted);
        assert!(output.submission.submitted_at.is_some());
        assert_eq!(output.submission.submitted_by.as_deref(), Some("mwallace"));

        let deliveries = sink.deliveries.lock().unwrap();
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].company_name, "Acme");

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, "brief_submitted");
        assert_eq!(events[0].1["delivery"], "delivered");
        assert_eq!(events[0].1["submission"]["project_name"], "Rebrand");
    }

    #[tokio::test]
    async fn test_token_is_single_use() {
        let store = TestStore::with_selection("t1", naming_selection());
        let use_case = SubmitBriefUseCase::new(
            Arc::new(Catalog::standard().unwrap()),
            store,
            Arc::new(RecordingSink::default()),
            Arc::new(RecordingLogger::default()),
        );

        let token = CorrelationToken::new("t1");
        let mut session = composed_session();
        use_case
            .execute(&mut session, &token, &answers())
            .await
            .unwrap();

        let mut replay = composed_session();
        let err = use_case
            .execute(&mut replay, &token, &answers())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitBriefError::UnknownToken));
        assert_eq!(replay.stage(), IntakeStage::DetailsComposed);
    }

    #[tokio::test]
    async fn test_delivery_failure_is_an_outcome_not_an_error() {
        let store = TestStore::with_selection("t1", naming_selection());
        let logger = Arc::new(RecordingLogger::default());
        let use_case = SubmitBriefUseCase::new(
            Arc::new(Catalog::standard().unwrap()),
            store,
            Arc::new(FailingSink),
            logger.clone(),
        );

        let mut session = composed_session();
        let output = use_case
            .execute(&mut session, &CorrelationToken::new("t1"), &answers())
            .await
            .unwrap();

        assert!(output.delivery.is_failed());
        // The intake still completed; only delivery went wrong.
        assert_eq!(session.stage(), IntakeStage::Submitted);
        assert_eq!(
            output.submission.category_answer(Category::Naming, "complexity_level"),
            Some(&brief_domain::AnswerValue::single("Tier 2"))
        );
        let events = logger.events.lock().unwrap();
        assert_eq!(events[0].1["delivery"], "failed");
    }

    #[tokio::test]
    async fn test_without_delivery_skips_but_archives() {
        let store = TestStore::with_selection("t1", naming_selection());
        let logger = Arc::new(RecordingLogger::default());
        let use_case = SubmitBriefUseCase::<RecordingSink>::without_delivery(
            Arc::new(Catalog::standard().unwrap()),
            store,
            logger.clone(),
        );

        let mut session = composed_session();
        let output = use_case
            .execute(&mut session, &CorrelationToken::new("t1"), &answers())
            .await
            .unwrap();

        assert_eq!(output.delivery, DeliveryOutcome::Skipped);
        assert_eq!(logger.events.lock().unwrap().len(), 1);
    }
}
