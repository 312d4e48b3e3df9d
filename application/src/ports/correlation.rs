//! Port for carrying the accepted selection between the two form pages.
//!
//! The opening page's validated [`Selection`] must reach the final
//! submission untouched. Rather than round-tripping it through the client
//! (where it could be tampered with), the application stashes it behind an
//! opaque single-use token and reclaims it when the details page comes back.

use brief_domain::Selection;

/// Opaque handle to one stashed selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationToken(String);

impl CorrelationToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CorrelationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Port for stashing selections between the opening and details pages.
///
/// Tokens are single use: `reclaim` consumes the entry, so a replayed
/// details submission cannot produce a second brief from the same opening.
pub trait CorrelationStore: Send + Sync {
    /// Stash a selection, handing back a fresh token.
    fn stash(&self, selection: Selection) -> CorrelationToken;

    /// Take the selection back out. Returns `None` for unknown tokens and
    /// for tokens already reclaimed once.
    fn reclaim(&self, token: &CorrelationToken) -> Option<Selection>;
}
