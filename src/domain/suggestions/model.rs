use super::category::CategoryId;
use serde::{Deserialize, Serialize};

/// A link as recognized across sources. Two identities are the same link
/// iff their `url` strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkIdentity {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl LinkIdentity {
    pub fn new(url: impl Into<String>, title: Option<String>) -> Self {
        Self {
            url: url.into(),
            title,
        }
    }
}

/// Raw suggestion as returned by a suggestion source, category not yet validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateLink {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

/// Suggestion that passed deduplication and category normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptedLink {
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: CategoryId,
}

impl AcceptedLink {
    pub fn from_candidate(candidate: CandidateLink) -> Self {
        let category = CategoryId::normalize(&candidate.category);
        Self {
            title: candidate.title,
            url: candidate.url,
            description: candidate.description,
            category,
        }
    }
}

/// Input of one accumulation run
#[derive(Debug, Clone, Default)]
pub struct SuggestionCriteria {
    pub keywords: Option<String>,
    pub preferred_categories: Vec<CategoryId>,
    pub target_count: usize,
    pub known_links: Vec<LinkIdentity>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccumulationResult {
    pub links: Vec<AcceptedLink>,
    pub attempts_used: usize,
}
