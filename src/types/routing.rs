//! Routing rule types
//!
//! Static keyword-to-response mappings used by the reply generator.

use serde::{Deserialize, Serialize};

/// Topic a routing rule answers for. Also the rule's name in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCategory {
    Ai,
    Web,
    Cloud,
    Mobile,
    Scheduling,
    Pricing,
    Fallback,
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleCategory::Ai => write!(f, "ai"),
            RuleCategory::Web => write!(f, "web"),
            RuleCategory::Cloud => write!(f, "cloud"),
            RuleCategory::Mobile => write!(f, "mobile"),
            RuleCategory::Scheduling => write!(f, "scheduling"),
            RuleCategory::Pricing => write!(f, "pricing"),
            RuleCategory::Fallback => write!(f, "fallback"),
        }
    }
}

/// A consultant suggested alongside a reply. Advisory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedContact {
    pub name: String,
    pub domain: String,
    pub availability: String,
    /// 0 - 100
    pub match_score: u8,
}

/// Static form of [`RecommendedContact`] so rule tables can live in a `static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEntry {
    pub name: &'static str,
    pub domain: &'static str,
    pub availability: &'static str,
    pub match_score: u8,
}

impl From<&ContactEntry> for RecommendedContact {
    fn from(entry: &ContactEntry) -> Self {
        RecommendedContact {
            name: entry.name.to_string(),
            domain: entry.domain.to_string(),
            availability: entry.availability.to_string(),
            match_score: entry.match_score.min(100),
        }
    }
}

/// One row of the decision list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingRule {
    pub category: RuleCategory,
    /// Lowercase substrings, any of which selects this rule
    pub keywords: &'static [&'static str],
    pub response: &'static str,
    pub suggestions: &'static [&'static str],
    pub recommended_contacts: &'static [ContactEntry],
}

impl RoutingRule {
    /// Whether any keyword occurs in an already lower-cased utterance.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}
