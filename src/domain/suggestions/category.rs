use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed set of categories a link can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryId {
    #[serde(rename = "Learning")]
    Learning,
    #[serde(rename = "Tools")]
    Tools,
    #[serde(rename = "Project Repos")]
    ProjectRepos,
    #[serde(rename = "Videos")]
    Videos,
    #[serde(rename = "Other")]
    Other,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl CategoryId {
    pub const ALL: [CategoryId; 5] = [
        CategoryId::Learning,
        CategoryId::Tools,
        CategoryId::ProjectRepos,
        CategoryId::Videos,
        CategoryId::Other,
    ];

    /// Display name, also used on the wire and in prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Learning => "Learning",
            CategoryId::Tools => "Tools",
            CategoryId::ProjectRepos => "Project Repos",
            CategoryId::Videos => "Videos",
            CategoryId::Other => "Other",
        }
    }

    /// Map free text from an untrusted source onto the closed set.
    /// Matching is case-insensitive but otherwise exact; anything else falls back to `Other`.
    pub fn normalize(raw: &str) -> CategoryId {
        match Self::lookup(raw) {
            Some(category) => category,
            None => {
                tracing::debug!(raw_category = raw, "Unrecognized category, defaulting to Other");
                CategoryId::Other
            }
        }
    }

    fn lookup(raw: &str) -> Option<CategoryId> {
        let lowered = raw.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().to_lowercase() == lowered)
    }
}

impl FromStr for CategoryId {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
