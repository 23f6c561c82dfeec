use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod accumulator;
pub mod category;
pub mod dedup;
pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use accumulator::{AccumulationLimits, SuggestionAccumulator};
pub use category::CategoryId;
pub use dedup::DeduplicationSet;
pub use error::{AccumulationError, SuggestionServiceError};
pub use model::{AcceptedLink, AccumulationResult, CandidateLink, LinkIdentity, SuggestionCriteria};
pub use service::{LinkSuggestionService, LinkSuggestionServiceApi};

/// One request to a suggestion source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionBatchRequest {
    pub keywords: Option<String>,
    pub preferred_categories: Vec<CategoryId>,
    pub valid_categories: Vec<CategoryId>,
    pub count: usize,
    pub exclude: Vec<LinkIdentity>,
}

/// A well-formed response of a suggestion source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionBatch {
    #[serde(rename = "suggestedLinks")]
    pub suggested_links: Vec<CandidateLink>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    #[error("malformed suggestion payload: {0}")]
    Malformed(String),
    #[error("suggestion source unavailable: {0}")]
    Upstream(String),
}

/// Generative capability that proposes new links.
///
/// Implementations try to avoid the URLs in `exclude` and to return about
/// `count` items, but callers re-validate both.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn fetch_batch(&self, request: SuggestionBatchRequest) -> Result<SuggestionBatch, SourceError>;
}
