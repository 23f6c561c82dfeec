pub mod error;
pub mod model;
pub mod query;
pub mod service;

pub use error::LinkServiceError;
pub use model::{LinkItem, LinkSource, SortOrder};
pub use service::{LinkService, LinkServiceApi};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Query parameters for GET /api/sessions/{sessionId}/links
#[derive(Debug, Default, Deserialize)]
pub struct LinkQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
}

/// Response for GET /api/sessions/{sessionId}/links
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkListResponse {
    pub links: Vec<LinkItem>,
    pub displayed: usize,
    pub total: usize,
}

/// Picks the links of a collection that are relevant to free-text keywords.
/// Abstracts the model used to judge relevance.
#[async_trait]
pub trait LinkRelevanceFilter: Send + Sync {
    /// Returns the ids of the relevant links
    ///
    /// # Errors
    /// Returns error if the provider cannot be reached
    async fn relevant_ids(&self, links: &[LinkItem], keywords: &str) -> Result<HashSet<Uuid>, String>;
}
