//! Question block descriptors: the transport-neutral form vocabulary.
//!
//! A [`QuestionBlock`] describes one question as any UI layer (chat dialog,
//! web form, terminal wizard) needs to render it: a stable `block_id`, the
//! answer key `field_id` within the block, a label, and an [`InputKind`]
//! with kind-specific constraints. A [`FormPage`] groups blocks into one
//! renderable screen.

use serde::{Deserialize, Serialize};

/// One allowed option of a choice input: wire `value` plus display `label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose label is its value, the common case for short answers
    /// like "3" or "Tier 1".
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Input kind of a question block, with kind-specific constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputKind {
    /// Pick exactly one of an ordered option list.
    SingleChoice { options: Vec<ChoiceOption> },
    /// Pick any subset of an ordered option list.
    MultiChoice { options: Vec<ChoiceOption> },
    /// Unconstrained text.
    FreeText,
    /// Calendar date, canonical form `YYYY-MM-DD`.
    Date,
}

impl InputKind {
    /// The option list for choice kinds, empty for text and date inputs.
    pub fn options(&self) -> &[ChoiceOption] {
        match self {
            InputKind::SingleChoice { options } | InputKind::MultiChoice { options } => options,
            InputKind::FreeText | InputKind::Date => &[],
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, InputKind::MultiChoice { .. })
    }
}

/// A single question as rendered by any UI layer.
///
/// `block_id` is globally unique within a catalog; `(block_id, field_id)`
/// is the key under which the raw answer comes back on submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBlock {
    pub block_id: String,
    pub field_id: String,
    pub label: String,
    /// Hint text for text-like inputs (e.g. "e.g. $5000/month").
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub placeholder: Option<String>,
    #[serde(flatten)]
    pub kind: InputKind,
}

impl QuestionBlock {
    pub fn single_choice(
        block_id: impl Into<String>,
        field_id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self {
            block_id: block_id.into(),
            field_id: field_id.into(),
            label: label.into(),
            placeholder: None,
            kind: InputKind::SingleChoice { options },
        }
    }

    pub fn multi_choice(
        block_id: impl Into<String>,
        field_id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self {
            block_id: block_id.into(),
            field_id: field_id.into(),
            label: label.into(),
            placeholder: None,
            kind: InputKind::MultiChoice { options },
        }
    }

    pub fn free_text(
        block_id: impl Into<String>,
        field_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            block_id: block_id.into(),
            field_id: field_id.into(),
            label: label.into(),
            placeholder: None,
            kind: InputKind::FreeText,
        }
    }

    pub fn date(
        block_id: impl Into<String>,
        field_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            block_id: block_id.into(),
            field_id: field_id.into(),
            label: label.into(),
            placeholder: None,
            kind: InputKind::Date,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// The key under which this block's answer is submitted.
    pub fn answer_key(&self) -> (&str, &str) {
        (&self.block_id, &self.field_id)
    }
}

/// One renderable screen: a title, a submit button label, and blocks in
/// display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPage {
    pub title: String,
    pub submit_label: String,
    pub blocks: Vec<QuestionBlock>,
}

impl FormPage {
    pub fn new(title: impl Into<String>, submit_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            submit_label: submit_label.into(),
            blocks: Vec::new(),
        }
    }

    pub fn with_blocks(mut self, blocks: Vec<QuestionBlock>) -> Self {
        self.blocks = blocks;
        self
    }

    /// Look up a block by its id.
    pub fn block(&self, block_id: &str) -> Option<&QuestionBlock> {
        self.blocks.iter().find(|b| b.block_id == block_id)
    }
}
