//! In-memory correlation store.
//!
//! Holds accepted selections between the opening and details pages, keyed
//! by opaque tokens. Single process, single use: reclaiming removes the
//! entry, so one opening can never yield two briefs.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use brief_application::ports::correlation::{CorrelationStore, CorrelationToken};
use brief_domain::Selection;

/// Process-local implementation of [`CorrelationStore`].
#[derive(Default)]
pub struct InMemoryCorrelationStore {
    entries: Mutex<HashMap<String, Selection>>,
    counter: AtomicU64,
}

impl InMemoryCorrelationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CorrelationStore for InMemoryCorrelationStore {
    fn stash(&self, selection: Selection) -> CorrelationToken {
        let id = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let token = CorrelationToken::new(format!("intake-{id}"));
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(token.as_str().to_string(), selection);
        token
    }

    fn reclaim(&self, token: &CorrelationToken) -> Option<Selection> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(token.as_str())
    }
}
