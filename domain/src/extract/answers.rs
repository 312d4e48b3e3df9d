//! Raw submitted values, keyed the way forms key them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One field's submitted value before typing.
///
/// Untagged so the JSON form is a plain string or a string array, matching
/// what form transports actually post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Values(Vec<String>),
    Value(String),
}

impl RawAnswer {
    /// First non-blank value, regardless of variant.
    pub fn first_value(&self) -> Option<&str> {
        match self {
            RawAnswer::Value(v) => {
                let v = v.trim();
                (!v.is_empty()).then_some(v)
            }
            RawAnswer::Values(vs) => vs
                .iter()
                .map(|v| v.trim())
                .find(|v| !v.is_empty()),
        }
    }

    /// All non-blank values, in submission order.
    pub fn values(&self) -> Vec<String> {
        match self {
            RawAnswer::Value(v) => {
                let v = v.trim();
                if v.is_empty() { Vec::new() } else { vec![v.to_string()] }
            }
            RawAnswer::Values(vs) => vs
                .iter()
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Every raw answer from one details page, `block_id -> field_id -> value`.
///
/// Mirrors the nested state object chat platforms post back. Blocks the
/// user skipped are simply absent; the extractor turns absence into `null`
/// rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    entries: BTreeMap<String, BTreeMap<String, RawAnswer>>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        block_id: impl Into<String>,
        field_id: impl Into<String>,
        answer: RawAnswer,
    ) {
        self.entries
            .entry(block_id.into())
            .or_default()
            .insert(field_id.into(), answer);
    }

    /// Record a single string value.
    pub fn set_value(
        &mut self,
        block_id: impl Into<String>,
        field_id: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.insert(block_id, field_id, RawAnswer::Value(value.into()));
    }

    /// Record a multi-choice value list.
    pub fn set_values(
        &mut self,
        block_id: impl Into<String>,
        field_id: impl Into<String>,
        values: impl IntoIterator<Item = String>,
    ) {
        self.insert(
            block_id,
            field_id,
            RawAnswer::Values(values.into_iter().collect()),
        );
    }

    pub fn get(&self, block_id: &str, field_id: &str) -> Option<&RawAnswer> {
        self.entries.get(block_id)?.get(field_id)
    }

    pub fn contains_block(&self, block_id: &str) -> bool {
        self.entries.contains_key(block_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
