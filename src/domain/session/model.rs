use crate::domain::links::LinkItem;
use crate::domain::suggestions::{AcceptedLink, DeduplicationSet, LinkIdentity};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// In-memory link collection owned by one client
#[derive(Debug, Clone)]
pub struct LinkSession {
    pub id: Uuid,
    pub links: Vec<LinkItem>,
    pub last_upload: Vec<LinkIdentity>,
    pub created_at: DateTime<Utc>,
}

impl LinkSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            links: Vec::new(),
            last_upload: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Add a link unless its URL is already in the collection
    pub fn push_unique(&mut self, item: LinkItem) -> bool {
        if self.links.iter().any(|l| l.url == item.url) {
            return false;
        }
        self.links.push(item);
        true
    }

    /// Collection links followed by `uploaded`, one identity per URL,
    /// keeping a title whenever any source has one
    pub fn known_identities(&self, uploaded: &[LinkIdentity]) -> Vec<LinkIdentity> {
        self.links
            .iter()
            .map(LinkItem::identity)
            .chain(uploaded.iter().cloned())
            .collect::<DeduplicationSet>()
            .into_identities()
    }

    /// Append accepted suggestions, one millisecond apart so that date
    /// ordering follows discovery order. Returns the items actually added.
    pub fn merge_suggestions(&mut self, links: Vec<AcceptedLink>, now: DateTime<Utc>) -> Vec<LinkItem> {
        let mut present: HashSet<String> = self.links.iter().map(|l| l.url.clone()).collect();
        let mut added = Vec::new();

        for (index, link) in links.into_iter().enumerate() {
            if !present.insert(link.url.clone()) {
                continue;
            }
            let item = LinkItem::from_suggestion(link, now + Duration::milliseconds(index as i64));
            self.links.push(item.clone());
            added.push(item);
        }

        added
    }
}

impl Default for LinkSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to a stored session
#[derive(Debug)]
pub struct LinkSessionHandle {
    pub id: Uuid,
    state: Mutex<LinkSession>,
    suggesting: AtomicBool,
}

impl LinkSessionHandle {
    pub fn new(session: LinkSession) -> Self {
        Self {
            id: session.id,
            state: Mutex::new(session),
            suggesting: AtomicBool::new(false),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, LinkSession> {
        self.state.lock().await
    }

    /// Mark a suggestion request as running; `None` if one already is.
    pub fn try_begin_suggestion(&self) -> Option<SuggestionGuard<'_>> {
        self.suggesting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SuggestionGuard {
                flag: &self.suggesting,
            })
    }

    pub fn is_suggesting(&self) -> bool {
        self.suggesting.load(Ordering::Acquire)
    }
}

/// Clears the busy flag on drop
#[derive(Debug)]
pub struct SuggestionGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for SuggestionGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
