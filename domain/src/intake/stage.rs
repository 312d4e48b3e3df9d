//! Lifecycle stages of one intake.

use serde::{Deserialize, Serialize};

/// Stage of a questionnaire instance
///
/// One-directional: an intake only ever moves forward. A failed opening
/// validation stays at `Opened` and re-prompts; it never regresses from a
/// later stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntakeStage {
    /// Opening form shown, required fields not yet accepted
    Opened,
    /// Required fields accepted, category selection fixed
    CategoriesSelected,
    /// Follow-up questionnaire composed and shown
    DetailsComposed,
    /// Structured brief produced, intake finished
    Submitted,
}

impl IntakeStage {
    pub fn as_str(&self) -> &str {
        match self {
            IntakeStage::Opened => "opened",
            IntakeStage::CategoriesSelected => "categories_selected",
            IntakeStage::DetailsComposed => "details_composed",
            IntakeStage::Submitted => "submitted",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            IntakeStage::Opened => "Opened",
            IntakeStage::CategoriesSelected => "Categories Selected",
            IntakeStage::DetailsComposed => "Details Composed",
            IntakeStage::Submitted => "Submitted",
        }
    }

    /// The next stage, or `self` when already terminal.
    pub fn advance(&self) -> IntakeStage {
        match self {
            IntakeStage::Opened => IntakeStage::CategoriesSelected,
            IntakeStage::CategoriesSelected => IntakeStage::DetailsComposed,
            IntakeStage::DetailsComposed => IntakeStage::Submitted,
            IntakeStage::Submitted => IntakeStage::Submitted,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, IntakeStage::Submitted)
    }
}

impl std::fmt::Display for IntakeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_walks_forward_and_parks_at_submitted() {
        let mut stage = IntakeStage::Opened;
        let mut seen = vec![stage];
        for _ in 0..4 {
            stage = stage.advance();
            seen.push(stage);
        }
        assert_eq!(
            seen,
            vec![
                IntakeStage::Opened,
                IntakeStage::CategoriesSelected,
                IntakeStage::DetailsComposed,
                IntakeStage::Submitted,
                IntakeStage::Submitted,
            ]
        );
    }

    #[test]
    fn test_only_submitted_is_terminal() {
        assert!(IntakeStage::Submitted.is_terminal());
        assert!(!IntakeStage::Opened.is_terminal());
        assert!(!IntakeStage::CategoriesSelected.is_terminal());
        assert!(!IntakeStage::DetailsComposed.is_terminal());
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(IntakeStage::CategoriesSelected.as_str(), "categories_selected");
        assert_eq!(IntakeStage::DetailsComposed.to_string(), "Details Composed");
    }
}
