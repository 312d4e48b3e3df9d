//! Submission-to-structured-result extraction.

use std::collections::BTreeMap;

use crate::catalog::{Catalog, QuestionBlock};
use crate::intake::Selection;

use super::answers::AnswerSheet;
use super::submission::{AnswerValue, BriefSubmission, FieldAnswers};

/// Type one block's raw answer. Multi-choice becomes an ordered value
/// list (empty when unanswered); everything else becomes string-or-null.
fn typed_answer(block: &QuestionBlock, answers: &AnswerSheet) -> AnswerValue {
    let (block_id, field_id) = block.answer_key();
    let raw = answers.get(block_id, field_id);
    if block.kind.is_multi() {
        AnswerValue::Multi(raw.map(|r| r.values()).unwrap_or_default())
    } else {
        AnswerValue::Single(raw.and_then(|r| r.first_value()).map(str::to_string))
    }
}

impl Catalog {
    /// Map raw answers back into the structured brief.
    ///
    /// Total function: a missing or blank optional answer extracts to
    /// `null`, never an error. Required top-level fields were validated
    /// before the details page existed, so they arrive via `selection`.
    /// `submitted_at` is left unset; the submitting caller stamps it.
    pub fn extract(&self, selection: &Selection, answers: &AnswerSheet) -> BriefSubmission {
        let mut per_category_details = BTreeMap::new();
        let mut extra_category_details = BTreeMap::new();
        for &category in &selection.categories {
            // Key presence for every selected category, answered or not.
            let mut fields = FieldAnswers::new();
            if let Some(block) = self.exclusive_block(category) {
                fields.insert(block.field_id.clone(), typed_answer(block, answers));
            }
            per_category_details.insert(category, fields);

            let extras = self.extra_blocks(category);
            if !extras.is_empty() {
                let mut fields = FieldAnswers::new();
                for block in extras {
                    fields.insert(block.field_id.clone(), typed_answer(block, answers));
                }
                extra_category_details.insert(category, fields);
            }
        }

        // Shared answers keyed by rule name, once each, only when the
        // block actually appeared on the submitted page.
        let mut shared_details = FieldAnswers::new();
        for rule in self.shared_rules() {
            if answers.contains_block(&rule.block.block_id) {
                shared_details.insert(rule.name.clone(), typed_answer(&rule.block, answers));
            }
        }

        BriefSubmission {
            submitted_by: selection.submitted_by.clone(),
            company_name: selection.company_name.clone(),
            project_name: selection.project_name.clone(),
            date: selection.date.clone(),
            selected_categories: selection.categories.clone(),
            per_category_details,
            shared_details,
            extra_category_details,
            submitted_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::extract::answers::RawAnswer;

    fn selection(categories: &[Category]) -> Selection {
        Selection {
            company_name: "Acme".into(),
            project_name: "Rebrand".into(),
            date: "2025-06-01".into(),
            categories: categories.to_vec(),
            submitted_by: Some("U123".into()),
        }
    }

    #[test]
    fn test_naming_brief_lands_in_all_three_sections() {
        let catalog = Catalog::standard().unwrap();
        let mut sheet = AnswerSheet::new();
        sheet.set_value("naming_complexity_level_block", "complexity_level", "Tier 2");
        sheet.set_value("shared_client_materials_block", "client_materials", "5");
        sheet.set_value("shared_competitors_analyze_block", "competitors_analyze", "3");
        sheet.set_value("shared_stakeholders_interview_block", "stakeholders_interview", "8");

        let brief = catalog.extract(&selection(&[Category::Naming]), &sheet);
        assert_eq!(
            brief.category_answer(Category::Naming, "complexity_level"),
            Some(&AnswerValue::single("Tier 2"))
        );
        assert_eq!(brief.shared_details["client_materials"], AnswerValue::single("5"));
        assert_eq!(brief.shared_details["competitors_analyze"], AnswerValue::single("3"));
        assert_eq!(brief.shared_details["stakeholders_interview"], AnswerValue::single("8"));
        assert!(brief.extra_category_details.is_empty());
        assert!(!brief.per_category_details.contains_key(&Category::Advertisement));
        assert_eq!(brief.company_name, "Acme");
        assert_eq!(brief.submitted_by.as_deref(), Some("U123"));
        assert!(brief.submitted_at.is_none());
    }

    #[test]
    fn test_advertisement_entry_is_empty_but_present() {
        let catalog = Catalog::standard().unwrap();
        let mut sheet = AnswerSheet::new();
        sheet.set_values(
            "advertisement_platform_block",
            "platforms",
            ["Google Ads".to_string(), "Other".to_string()],
        );
        sheet.set_value("advertisement_duration_block", "duration", "4 weeks");
        // budget intentionally left unanswered

        let brief = catalog.extract(&selection(&[Category::Advertisement]), &sheet);
        assert_eq!(brief.per_category_details[&Category::Advertisement], FieldAnswers::new());
        let extras = &brief.extra_category_details[&Category::Advertisement];
        assert_eq!(
            extras["platforms"],
            AnswerValue::multi(["Google Ads".to_string(), "Other".to_string()])
        );
        assert_eq!(extras["budget"], AnswerValue::null());
        assert_eq!(extras["duration"], AnswerValue::single("4 weeks"));
        assert!(brief.shared_details.is_empty());
    }

    #[test]
    fn test_empty_sheet_yields_nulls_not_errors() {
        let catalog = Catalog::standard().unwrap();
        let brief = catalog.extract(
            &selection(&[Category::Messaging, Category::Advertisement]),
            &AnswerSheet::new(),
        );
        assert_eq!(
            brief.category_answer(Category::Messaging, "complexity_level"),
            Some(&AnswerValue::null())
        );
        assert_eq!(brief.per_category_details[&Category::Advertisement], FieldAnswers::new());
        let extras = &brief.extra_category_details[&Category::Advertisement];
        assert_eq!(extras["platforms"], AnswerValue::multi([]));
        assert_eq!(extras["budget"], AnswerValue::null());
        assert_eq!(extras["duration"], AnswerValue::null());
        assert!(brief.shared_details.is_empty());
    }

    #[test]
    fn test_blank_shared_answer_extracts_to_null() {
        let catalog = Catalog::standard().unwrap();
        let mut sheet = AnswerSheet::new();
        sheet.set_value("shared_client_materials_block", "client_materials", "  ");

        let brief = catalog.extract(&selection(&[Category::Naming]), &sheet);
        assert_eq!(brief.shared_details["client_materials"], AnswerValue::null());
        // Blocks absent from the sheet stay absent from the shared section.
        assert!(!brief.shared_details.contains_key("competitors_analyze"));
    }

    #[test]
    fn test_values_survive_extraction_unchanged() {
        let catalog = Catalog::standard().unwrap();
        let picked = selection(&[
            Category::Messaging,
            Category::Advertisement,
            Category::Naming,
            Category::Strategy,
        ]);
        let details = catalog.compose(&picked.categories).unwrap();

        // Answer every composed block with its first option (or a marker
        // for free text) and check each value comes back verbatim.
        let mut sheet = AnswerSheet::new();
        for block in details.blocks() {
            let (block_id, field_id) = block.answer_key();
            match block.kind.options().first() {
                Some(option) if block.kind.is_multi() => {
                    sheet.set_values(block_id, field_id, [option.value.clone()]);
                }
                Some(option) => sheet.set_value(block_id, field_id, option.value.clone()),
                None => sheet.set_value(block_id, field_id, "free text answer"),
            }
        }

        let brief = catalog.extract(&picked, &sheet);
        for block in details.blocks() {
            let raw = sheet.get(&block.block_id, &block.field_id).unwrap();
            let expected = if block.kind.is_multi() {
                AnswerValue::Multi(raw.values())
            } else {
                AnswerValue::Single(raw.first_value().map(str::to_string))
            };

            // Locate the section this block extracts into.
            let stored = catalog
                .shared_rules()
                .iter()
                .find(|rule| rule.block.block_id == block.block_id)
                .map(|rule| &brief.shared_details[&rule.name])
                .or_else(|| {
                    picked.categories.iter().find_map(|&category| {
                        let exclusive = catalog
                            .exclusive_block(category)
                            .filter(|b| b.block_id == block.block_id)
                            .map(|_| &brief.per_category_details[&category][&block.field_id]);
                        exclusive.or_else(|| {
                            catalog
                                .extra_blocks(category)
                                .iter()
                                .any(|b| b.block_id == block.block_id)
                                .then(|| &brief.extra_category_details[&category][&block.field_id])
                        })
                    })
                });
            assert_eq!(stored, Some(&expected), "block {}", block.block_id);
        }
    }

    #[test]
    fn test_single_answer_tolerates_list_shaped_raw() {
        let catalog = Catalog::standard().unwrap();
        let mut sheet = AnswerSheet::new();
        sheet.insert(
            "naming_complexity_level_block",
            "complexity_level",
            RawAnswer::Values(vec!["Tier 3".into()]),
        );
        let brief = catalog.extract(&selection(&[Category::Naming]), &sheet);
        assert_eq!(
            brief.category_answer(Category::Naming, "complexity_level"),
            Some(&AnswerValue::single("Tier 3"))
        );
    }
}
