//! The standard agency catalog.
//!
//! Complexity tiers per category, three shared questions with their
//! applicability sets, and the Advertisement-only platform/budget/duration
//! group. Returns `Err` on id collisions like any other catalog build; the
//! binary treats that as fatal at startup.

use super::block::{ChoiceOption, QuestionBlock};
use super::category::Category;
use super::registry::{Catalog, CatalogError};
use super::shared::SharedRule;

fn tier_options(count: usize) -> Vec<ChoiceOption> {
    ["Tier 1", "Tier 2", "Tier 3"]
        .iter()
        .take(count)
        .map(|t| ChoiceOption::plain(*t))
        .collect()
}

fn counts(values: &[&str]) -> Vec<ChoiceOption> {
    values.iter().map(|v| ChoiceOption::plain(*v)).collect()
}

impl Catalog {
    /// The production catalog content.
    pub fn standard() -> Result<Catalog, CatalogError> {
        Catalog::builder()
            // Exclusive complexity blocks. Advertisement intentionally has
            // none; its questions live in the extra group below.
            .exclusive(
                Category::Messaging,
                QuestionBlock::single_choice(
                    "messaging_complexity_level_block",
                    "complexity_level",
                    "Messaging: Complexity Level",
                    tier_options(3),
                ),
            )
            .exclusive(
                Category::Naming,
                QuestionBlock::single_choice(
                    "naming_complexity_level_block",
                    "complexity_level",
                    "Naming: Complexity Level",
                    tier_options(3),
                ),
            )
            .exclusive(
                Category::Strategy,
                QuestionBlock::single_choice(
                    "strategy_complexity_level_block",
                    "complexity_level",
                    "Strategy: Complexity Level",
                    tier_options(1),
                ),
            )
            // Shared questions, asked once per brief when any qualifying
            // category is selected.
            .shared(SharedRule::new(
                "client_materials",
                QuestionBlock::single_choice(
                    "shared_client_materials_block",
                    "client_materials",
                    "How many client materials to review?",
                    counts(&["3", "5", "10", "15"]),
                ),
                [Category::Messaging, Category::Naming, Category::Strategy],
            ))
            .shared(SharedRule::new(
                "competitors_analyze",
                QuestionBlock::single_choice(
                    "shared_competitors_analyze_block",
                    "competitors_analyze",
                    "How many competitors to analyze?",
                    counts(&["2", "3", "5", "8"]),
                ),
                [Category::Messaging, Category::Naming, Category::Strategy],
            ))
            .shared(SharedRule::new(
                "stakeholders_interview",
                QuestionBlock::single_choice(
                    "shared_stakeholders_interview_block",
                    "stakeholders_interview",
                    "How many stakeholders to interview?",
                    counts(&["4", "8", "12", "20"]),
                ),
                [Category::Naming],
            ))
            // Advertisement's fixed three-block group.
            .extra(
                Category::Advertisement,
                QuestionBlock::multi_choice(
                    "advertisement_platform_block",
                    "platforms",
                    "Advertisement: Platforms",
                    counts(&["Google Ads", "Facebook", "Instagram", "LinkedIn", "Other"]),
                ),
            )
            .extra(
                Category::Advertisement,
                QuestionBlock::free_text(
                    "advertisement_budget_block",
                    "budget",
                    "Advertisement: What is your budget?",
                )
                .with_placeholder("e.g. $5000/month"),
            )
            .extra(
                Category::Advertisement,
                QuestionBlock::single_choice(
                    "advertisement_duration_block",
                    "duration",
                    "Advertisement: Campaign Duration (weeks)",
                    counts(&["2 weeks", "4 weeks", "8 weeks"]),
                ),
            )
            .build()
    }
}
