//! The structured result delivered downstream.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// A typed answer in the structured result.
///
/// Serializes to exactly `string | null | [string, ...]` so downstream
/// consumers never see a wrapper object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Multi(Vec<String>),
    Single(Option<String>),
}

impl AnswerValue {
    pub fn null() -> Self {
        AnswerValue::Single(None)
    }

    pub fn single(value: impl Into<String>) -> Self {
        AnswerValue::Single(Some(value.into()))
    }

    pub fn multi(values: impl IntoIterator<Item = String>) -> Self {
        AnswerValue::Multi(values.into_iter().collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AnswerValue::Single(None))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnswerValue::Single(Some(v)) => Some(v),
            _ => None,
        }
    }
}

/// Field answers for one section, keyed by `field_id` (or by a shared
/// rule's logical name).
pub type FieldAnswers = BTreeMap<String, AnswerValue>;

/// The completed brief, grouped by category and by shared/exclusive
/// section.
///
/// Guarantees downstream consumers can rely on:
/// - `per_category_details` has an entry for every selected category,
///   empty when the category asked nothing exclusive.
/// - `shared_details` holds each shared answer once, under the rule name.
/// - `extra_category_details` appears only for categories that declare an
///   extra group, with every field key present (missing answers are null,
///   missing multi-choice picks are an empty list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefSubmission {
    #[serde(default)]
    pub submitted_by: Option<String>,
    pub company_name: String,
    pub project_name: String,
    pub date: String,
    pub selected_categories: Vec<Category>,
    pub per_category_details: BTreeMap<Category, FieldAnswers>,
    pub shared_details: FieldAnswers,
    #[serde(default)]
    pub extra_category_details: BTreeMap<Category, FieldAnswers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
}

impl BriefSubmission {
    /// Answer recorded for a category's exclusive question, if any.
    pub fn category_answer(&self, category: Category, field_id: &str) -> Option<&AnswerValue> {
        self.per_category_details.get(&category)?.get(field_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_value_json_shapes() {
        assert_eq!(serde_json::to_value(AnswerValue::single("Tier 1")).unwrap(), json!("Tier 1"));
        assert_eq!(serde_json::to_value(AnswerValue::null()).unwrap(), json!(null));
        assert_eq!(
            serde_json::to_value(AnswerValue::multi(["a".to_string(), "b".to_string()])).unwrap(),
            json!(["a", "b"])
        );
    }

    #[test]
    fn test_answer_value_deserializes_untagged() {
        assert_eq!(
            serde_json::from_value::<AnswerValue>(json!(null)).unwrap(),
            AnswerValue::null()
        );
        assert_eq!(
            serde_json::from_value::<AnswerValue>(json!("8")).unwrap(),
            AnswerValue::single("8")
        );
        assert_eq!(
            serde_json::from_value::<AnswerValue>(json!(["Facebook"])).unwrap(),
            AnswerValue::multi(["Facebook".to_string()])
        );
    }

    #[test]
    fn test_submission_serializes_with_category_keys() {
        let submission = BriefSubmission {
            submitted_by: Some("mwallace".into()),
            company_name: "Acme".into(),
            project_name: "Rebrand".into(),
            date: "2025-06-01".into(),
            selected_categories: vec![Category::Advertisement],
            per_category_details: BTreeMap::from([(Category::Advertisement, FieldAnswers::new())]),
            shared_details: FieldAnswers::new(),
            extra_category_details: BTreeMap::from([(
                Category::Advertisement,
                FieldAnswers::from([("budget".to_string(), AnswerValue::null())]),
            )]),
            submitted_at: None,
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["per_category_details"]["Advertisement"], json!({}));
        assert_eq!(value["extra_category_details"]["Advertisement"]["budget"], json!(null));
        // Unset timestamp stays out of the payload entirely.
        assert!(value.get("submitted_at").is_none());
    }
}
