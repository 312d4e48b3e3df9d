//! One in-flight intake.

use serde::{Deserialize, Serialize};

use super::draft::{FieldErrors, OpeningDraft};
use super::selection::Selection;
use super::stage::IntakeStage;

/// State of a single questionnaire instance.
///
/// Owns the current stage and the latest opening draft. The draft is
/// stored verbatim on every submission attempt, so a validation failure
/// re-renders with the user's values still in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeSession {
    stage: IntakeStage,
    draft: OpeningDraft,
}

impl IntakeSession {
    pub fn new() -> Self {
        Self {
            stage: IntakeStage::Opened,
            draft: OpeningDraft::default(),
        }
    }

    pub fn stage(&self) -> IntakeStage {
        self.stage
    }

    pub fn draft(&self) -> &OpeningDraft {
        &self.draft
    }

    /// Attempt the opening submission.
    ///
    /// On success the session moves to `CategoriesSelected`. On failure
    /// it stays at `Opened` with the draft retained for re-prompting.
    /// Once past `Opened`, further calls only revalidate; the stage does
    /// not move again.
    pub fn submit_opening(&mut self, draft: OpeningDraft) -> Result<Selection, FieldErrors> {
        self.draft = draft;
        let selection = self.draft.validate()?;
        if self.stage == IntakeStage::Opened {
            self.stage = self.stage.advance();
        }
        Ok(selection)
    }

    /// Record that the details page was composed and shown.
    pub fn mark_composed(&mut self) {
        if self.stage == IntakeStage::CategoriesSelected {
            self.stage = self.stage.advance();
        }
    }

    /// Record the final submission.
    pub fn mark_submitted(&mut self) {
        if self.stage == IntakeStage::DetailsComposed {
            self.stage = self.stage.advance();
        }
    }
}

impl Default for IntakeSession {
    fn default() -> Self {
        Self::new()
    }
}
