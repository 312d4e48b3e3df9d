//! The catalog: immutable registry of question blocks and shared rules.
//!
//! Built once at startup through [`CatalogBuilder`], which rejects id
//! collisions: `block_id` is the dictionary key for both composition and
//! extraction, and a collision would silently merge two questions. After
//! construction the catalog is read-only and safe to share across
//! concurrent intakes.

use super::block::{FormPage, QuestionBlock};
use super::category::Category;
use super::opening;
use super::shared::SharedRule;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Catalog construction failures. All of these are configuration errors:
/// fatal at startup, never surfaced to an end user mid-intake.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate block id `{0}` in catalog")]
    DuplicateBlockId(String),

    #[error("duplicate shared rule name `{0}` in catalog")]
    DuplicateRuleName(String),

    #[error("block id `{0}` is reserved by the opening form")]
    ReservedBlockId(String),
}

/// Immutable registry of per-category and shared question blocks.
#[derive(Debug, Clone)]
pub struct Catalog {
    exclusive: BTreeMap<Category, QuestionBlock>,
    extras: BTreeMap<Category, Vec<QuestionBlock>>,
    shared: Vec<SharedRule>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The category's exclusive (complexity-style) block, if it declares one.
    /// Categories without one are simply absent, not an error.
    pub fn exclusive_block(&self, category: Category) -> Option<&QuestionBlock> {
        self.exclusive.get(&category)
    }

    /// Extra blocks unique to this category, in catalog-defined order.
    pub fn extra_blocks(&self, category: Category) -> &[QuestionBlock] {
        self.extras.get(&category).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Shared rules in canonical catalog order.
    pub fn shared_rules(&self) -> &[SharedRule] {
        &self.shared
    }

    /// The fixed first screen (company, project, date, categories).
    pub fn opening_page(&self) -> FormPage {
        opening::page()
    }

    /// Total number of details blocks registered, for startup logging.
    pub fn block_count(&self) -> usize {
        self.exclusive.len()
            + self.shared.len()
            + self.extras.values().map(Vec::len).sum::<usize>()
    }
}

/// Builder enforcing catalog-wide id uniqueness at `build` time.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    exclusive: BTreeMap<Category, QuestionBlock>,
    extras: BTreeMap<Category, Vec<QuestionBlock>>,
    shared: Vec<SharedRule>,
}

impl CatalogBuilder {
    /// Register the category's exclusive block. A second call for the same
    /// category replaces the first; the previous block id is freed.
    pub fn exclusive(mut self, category: Category, block: QuestionBlock) -> Self {
        self.exclusive.insert(category, block);
        self
    }

    /// Append an extra block unique to this category. Order of calls is the
    /// order blocks appear in composed forms.
    pub fn extra(mut self, category: Category, block: QuestionBlock) -> Self {
        self.extras.entry(category).or_default().push(block);
        self
    }

    /// Append a shared rule. Order of calls is the canonical shared order.
    pub fn shared(mut self, rule: SharedRule) -> Self {
        self.shared.push(rule);
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut seen_blocks: HashSet<&str> = HashSet::new();
        let reserved = opening::reserved_block_ids();

        let exclusive_blocks = self.exclusive.values();
        let shared_blocks = self.shared.iter().map(|r| &r.block);
        let extra_blocks = self.extras.values().flatten();

        for block in exclusive_blocks.chain(shared_blocks).chain(extra_blocks) {
            let id = block.block_id.as_str();
            if reserved.contains(&id) {
                return Err(CatalogError::ReservedBlockId(id.to_string()));
            }
            if !seen_blocks.insert(id) {
                return Err(CatalogError::DuplicateBlockId(id.to_string()));
            }
        }

        // Rule names key the shared-results section; a duplicate would
        // silently merge two answers.
        let mut seen_rules: HashSet<&str> = HashSet::new();
        for rule in &self.shared {
            if !seen_rules.insert(rule.name.as_str()) {
                return Err(CatalogError::DuplicateRuleName(rule.name.clone()));
            }
        }

        Ok(Catalog {
            exclusive: self.exclusive,
            extras: self.extras,
            shared: self.shared,
        })
    }
}
