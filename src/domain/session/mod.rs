pub mod error;
pub mod model;
pub mod service;

pub use error::SessionServiceError;
pub use model::{LinkSession, LinkSessionHandle, SuggestionGuard};
pub use service::{SessionService, SessionServiceApi};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Link supplied by the client when opening a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedLink {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Request for POST /api/sessions
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub links: Vec<SeedLink>,
}

/// Response for POST /api/sessions
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub links: usize,
}
