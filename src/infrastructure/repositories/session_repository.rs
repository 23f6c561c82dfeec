use crate::domain::session::{LinkSession, LinkSessionHandle};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// In-memory session store. Sessions idle for longer than the configured
/// time-to-idle are evicted; nothing survives a restart.
pub struct SessionRepository {
    sessions: Cache<Uuid, Arc<LinkSessionHandle>>,
}

impl SessionRepository {
    pub fn new(max_capacity: u64, time_to_idle: Duration) -> Self {
        let sessions = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_idle(time_to_idle) // refreshes on access
            .eviction_listener(|id, _, cause| {
                tracing::debug!(session_id = %id, cause = ?cause, "Session evicted");
            })
            .build();

        Self { sessions }
    }

    pub async fn insert(&self, session: LinkSession) -> Arc<LinkSessionHandle> {
        let handle = Arc::new(LinkSessionHandle::new(session));
        self.sessions.insert(handle.id, handle.clone()).await;
        handle
    }

    pub async fn find(&self, id: Uuid) -> Option<Arc<LinkSessionHandle>> {
        self.sessions.get(&id).await
    }

    /// Returns `false` if no such session was stored
    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.remove(&id).await.is_some()
    }

    pub async fn count(&self) -> u64 {
        self.sessions.run_pending_tasks().await;
        self.sessions.entry_count()
    }
}
