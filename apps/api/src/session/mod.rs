// Per-session generation history.
// Each session owns one SessionHistory. The store lives in AppState and is
// handed to handlers explicitly; nothing here is process-global.
// Sessions idle for longer than the TTL are dropped, and the store never holds
// more than its capacity: opening a session when full evicts the least
// recently used one.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::history::{GenerationRecord, SessionHistory};

struct SessionEntry {
    history: SessionHistory,
    last_access: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, SessionEntry>>>,
    idle_ttl: Duration,
    capacity: usize,
}

impl SessionStore {
    /// A capacity of zero is treated as one.
    pub fn new(idle_ttl: Duration, capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            idle_ttl,
            capacity: capacity.max(1),
        }
    }

    /// Opens a new session with an empty history.
    pub async fn create(&self) -> Uuid {
        let now = Instant::now();
        let mut sessions = self.inner.lock().await;

        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_access) < self.idle_ttl);
        if sessions.len() < before {
            debug!("Expired {} idle sessions", before - sessions.len());
        }

        while sessions.len() >= self.capacity {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_access)
                .map(|(id, _)| *id);
            match oldest {
                Some(oldest) => {
                    sessions.remove(&oldest);
                    info!("Session store full; evicted least recently used session {oldest}");
                }
                None => break,
            }
        }

        let id = Uuid::new_v4();
        sessions.insert(
            id,
            SessionEntry {
                history: SessionHistory::new(),
                last_access: now,
            },
        );
        info!("Opened session {id}");
        id
    }

    pub async fn exists(&self, id: Uuid) -> bool {
        let mut sessions = self.inner.lock().await;
        self.touch(&mut sessions, id).is_ok()
    }

    /// Prepends a record to the session's history and returns the new length.
    pub async fn record(&self, id: Uuid, record: GenerationRecord) -> Result<usize, AppError> {
        let mut sessions = self.inner.lock().await;
        let entry = self.touch(&mut sessions, id)?;
        entry.history.record(record);
        Ok(entry.history.len())
    }

    /// A snapshot of the session's history.
    pub async fn history(&self, id: Uuid) -> Result<SessionHistory, AppError> {
        let mut sessions = self.inner.lock().await;
        Ok(self.touch(&mut sessions, id)?.history.clone())
    }

    /// Looks up a live session and refreshes its last access. An expired
    /// session is removed and reported as not found.
    fn touch<'a>(
        &self,
        sessions: &'a mut HashMap<Uuid, SessionEntry>,
        id: Uuid,
    ) -> Result<&'a mut SessionEntry, AppError> {
        let now = Instant::now();
        let expired = sessions
            .get(&id)
            .is_some_and(|entry| now.duration_since(entry.last_access) >= self.idle_ttl);
        if expired {
            sessions.remove(&id);
            info!("Session {id} expired after {:?} idle", self.idle_ttl);
        }

        let entry = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        entry.last_access = now;
        Ok(entry)
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}

pub fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
