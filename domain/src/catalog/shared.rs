//! Shared question rules: one block, many qualifying categories.
//!
//! A shared question is asked once per brief no matter how many selected
//! categories qualify for it. The rule is declarative: a logical name, the
//! block to render, and the set of categories it applies to. The composer
//! evaluates every rule uniformly, so growing the catalog never adds
//! per-category special cases.

use super::block::QuestionBlock;
use super::category::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A question block shared across categories, included once iff any
/// selected category is in its applicable set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedRule {
    /// Logical name; the key under which the answer lands in the
    /// shared-results section of a submission.
    pub name: String,
    pub block: QuestionBlock,
    applicable: BTreeSet<Category>,
}

impl SharedRule {
    pub fn new(
        name: impl Into<String>,
        block: QuestionBlock,
        applicable: impl IntoIterator<Item = Category>,
    ) -> Self {
        Self {
            name: name.into(),
            block,
            applicable: applicable.into_iter().collect(),
        }
    }

    pub fn applies_to(&self, category: Category) -> bool {
        self.applicable.contains(&category)
    }

    /// Whether any of the selected categories qualifies this rule.
    pub fn applies_to_any(&self, selected: &[Category]) -> bool {
        selected.iter().any(|c| self.applies_to(*c))
    }

    /// Categories this rule applies to, in canonical order.
    pub fn applicable_categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.applicable.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::block::ChoiceOption;

    fn rule() -> SharedRule {
        SharedRule::new(
            "stakeholders_interview",
            QuestionBlock::single_choice(
                "shared_stakeholders_interview_block",
                "stakeholders_interview",
                "How many stakeholders to interview?",
                vec![ChoiceOption::plain("4"), ChoiceOption::plain("8")],
            ),
            [Category::Naming, Category::Strategy],
        )
    }

    #[test]
    fn test_applies_to_membership() {
        let rule = rule();
        assert!(rule.applies_to(Category::Naming));
        assert!(rule.applies_to(Category::Strategy));
        assert!(!rule.applies_to(Category::Messaging));
        assert!(!rule.applies_to(Category::Advertisement));
    }

    #[test]
    fn test_applies_to_any_intersects_selection() {
        let rule = rule();
        assert!(rule.applies_to_any(&[Category::Messaging, Category::Strategy]));
        assert!(!rule.applies_to_any(&[Category::Messaging, Category::Advertisement]));
        assert!(!rule.applies_to_any(&[]));
    }

    #[test]
    fn test_applicable_categories_in_canonical_order() {
        let rule = SharedRule::new(
            "r",
            QuestionBlock::free_text("b", "f", "label"),
            [Category::Strategy, Category::Messaging, Category::Naming],
        );
        let cats: Vec<_> = rule.applicable_categories().collect();
        assert_eq!(
            cats,
            vec![Category::Messaging, Category::Naming, Category::Strategy]
        );
    }
}
