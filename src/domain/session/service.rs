use super::error::SessionServiceError;
use super::model::LinkSession;
use super::{CreateSessionRequest, SeedLink, SessionResponse};
use crate::domain::links::{LinkItem, LinkSource};
use crate::domain::suggestions::CategoryId;
use crate::infrastructure::repositories::SessionRepository;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

pub struct SessionService {
    session_repo: Arc<SessionRepository>,
}

impl SessionService {
    pub fn new(session_repo: Arc<SessionRepository>) -> Self {
        Self { session_repo }
    }
}

#[async_trait]
pub trait SessionServiceApi: Send + Sync {
    /// Open a session, optionally seeded with the client's current links
    async fn create_session(
        &self,
        request: CreateSessionRequest,
    ) -> Result<SessionResponse, SessionServiceError>;

    async fn delete_session(&self, session_id: Uuid) -> Result<(), SessionServiceError>;
}

#[async_trait]
impl SessionServiceApi for SessionService {
    async fn create_session(
        &self,
        request: CreateSessionRequest,
    ) -> Result<SessionResponse, SessionServiceError> {
        let mut session = LinkSession::new();
        let now = Utc::now();

        for (index, seed) in request.links.into_iter().enumerate() {
            self.validate_url(&seed.url)?;
            let item = self.curated_item(seed, now + Duration::milliseconds(index as i64));
            if !session.push_unique(item) {
                tracing::debug!(session_id = %session.id, "Skipping duplicate seed link");
            }
        }

        let response = SessionResponse {
            id: session.id,
            created_at: session.created_at,
            links: session.links.len(),
        };

        self.session_repo.insert(session).await;

        tracing::info!(
            session_id = %response.id,
            seeded_links = response.links,
            "Session created"
        );

        Ok(response)
    }

    async fn delete_session(&self, session_id: Uuid) -> Result<(), SessionServiceError> {
        if !self.session_repo.remove(session_id).await {
            return Err(SessionServiceError::NotFound);
        }
        tracing::info!(session_id = %session_id, "Session deleted");
        Ok(())
    }
}

impl SessionService {
    fn validate_url(&self, url: &str) -> Result<(), SessionServiceError> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(SessionServiceError::Invalid(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    fn curated_item(&self, seed: SeedLink, added_at: chrono::DateTime<Utc>) -> LinkItem {
        LinkItem {
            id: Uuid::new_v4(),
            title: seed.title,
            description: seed.description,
            url: seed.url,
            category: seed
                .category
                .as_deref()
                .map(CategoryId::normalize)
                .unwrap_or(CategoryId::Other),
            source: LinkSource::Curated,
            added_at,
        }
    }
}
