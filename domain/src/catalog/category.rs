//! Service category value object

use serde::{Deserialize, Serialize};

/// Service categories a client can request in a brief (Value Object)
///
/// The set is fixed and known at configuration time; the declaration order
/// is the canonical catalog order used wherever a deterministic ordering of
/// categories is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Messaging,
    Advertisement,
    Naming,
    Strategy,
}

impl Category {
    /// All categories in canonical catalog order.
    pub fn all() -> [Category; 4] {
        [
            Category::Messaging,
            Category::Advertisement,
            Category::Naming,
            Category::Strategy,
        ]
    }

    /// Stable identifier, also the value carried in composed forms
    /// and submission payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Messaging => "Messaging",
            Category::Advertisement => "Advertisement",
            Category::Naming => "Naming",
            Category::Strategy => "Strategy",
        }
    }

    /// Human-readable label for form rendering.
    ///
    /// Currently identical to [`Category::as_str`]; kept separate so display
    /// text can diverge from wire values without touching the extractor.
    pub fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "messaging" => Ok(Category::Messaging),
            "advertisement" | "ads" => Ok(Category::Advertisement),
            "naming" => Ok(Category::Naming),
            "strategy" => Ok(Category::Strategy),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}
