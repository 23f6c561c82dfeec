use super::model::LinkIdentity;
use crate::domain::links::LinkItem;
use serde::{Deserialize, Serialize};

fn default_link_count() -> i64 {
    5
}

/// Request for POST /api/sessions/{sessionId}/suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestLinksRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default = "default_link_count")]
    pub link_count: i64,
    /// Links parsed by the client from an uploaded file. When omitted, the
    /// list from the session's last successful request is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_links: Option<Vec<LinkIdentity>>,
}

/// Response for POST /api/sessions/{sessionId}/suggestions
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestLinksResponse {
    pub links: Vec<LinkItem>,
    pub attempts_used: usize,
    pub requested: usize,
    pub delivered: usize,
    pub under_delivered: bool,
}
