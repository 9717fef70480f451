//! In-memory session registry. Nothing here outlives the process, and a
//! session left idle past the TTL is dropped.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

use super::Session;

pub type SharedSession = Arc<Mutex<Session>>;

pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(2 * 60 * 60);

struct Entry {
    session: SharedSession,
    last_seen: Instant,
}

impl Entry {
    /// A handle held outside the map means a request is still working on it.
    fn in_use(&self) -> bool {
        Arc::strong_count(&self.session) > 1
    }

    fn expired(&self, now: Instant, ttl: Duration) -> bool {
        !self.in_use() && now.duration_since(self.last_seen) >= ttl
    }
}

/// Sessions share no state with each other. The per-session mutex is held for
/// the whole of a journey step, including the model call.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<Uuid, Entry>>,
    idle_ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_ttl(DEFAULT_IDLE_TTL)
    }
}

impl SessionStore {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            idle_ttl,
        }
    }

    /// Registers a fresh session and returns its handle. Expired sessions are
    /// swept first so the registry cannot grow past what is live.
    pub fn create(&self) -> (Uuid, SharedSession) {
        self.sweep();
        let session = Session::new();
        let id = session.id();
        let shared = Arc::new(Mutex::new(session));
        self.sessions.insert(
            id,
            Entry {
                session: shared.clone(),
                last_seen: Instant::now(),
            },
        );
        info!(session = %id, active = self.sessions.len(), "Session created");
        (id, shared)
    }

    /// Returns the handle and marks the session as active. An expired
    /// session is removed instead.
    pub fn get(&self, id: Uuid) -> Option<SharedSession> {
        let now = Instant::now();
        // Clone the handle so the map guard is released before any await.
        let handle = {
            let mut entry = self.sessions.get_mut(&id)?;
            if entry.expired(now, self.idle_ttl) {
                None
            } else {
                entry.last_seen = now;
                Some(entry.session.clone())
            }
        };
        if handle.is_none() {
            self.sessions.remove(&id);
            info!(session = %id, "Session expired");
        }
        handle
    }

    pub fn remove(&self, id: Uuid) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Drops every idle session past the TTL. Returns how many were removed.
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| !entry.expired(now, self.idle_ttl));
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            info!(removed, active = self.sessions.len(), "Expired idle sessions");
        }
        removed
    }

    /// Sweeps on a fixed period for as long as the runtime lives.
    pub fn spawn_sweeper(&self, period: Duration) {
        let store = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                store.sweep();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_get_remove() {
        let store = SessionStore::new();
        let (id, _) = store.create();

        let session = store.get(id).unwrap();
        assert_eq!(session.lock().await.id(), id);

        assert!(store.remove(id));
        assert!(store.get(id).is_none());
        assert!(!store.remove(id));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let (a, _) = store.create();
        let (b, _) = store.create();
        assert_ne!(a, b);

        assert!(store.remove(a));
        assert!(store.get(b).is_some());
    }

    #[tokio::test]
    async fn test_clones_share_the_registry() {
        let store = SessionStore::new();
        let handle = store.clone();
        let (id, _) = handle.create();
        assert!(store.get(id).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_session_expires() {
        let store = SessionStore::with_idle_ttl(Duration::from_secs(60));
        let (idle, _) = store.create();

        tokio::time::advance(Duration::from_secs(61)).await;
        let (fresh, _) = store.create();

        assert!(store.get(idle).is_none());
        assert!(store.get(fresh).is_some());
        assert_eq!(store.sweep(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_many_abandoned_sessions_are_reclaimed() {
        let store = SessionStore::with_idle_ttl(Duration::from_secs(60));
        for _ in 0..1_000 {
            store.create();
        }

        tokio::time::advance(Duration::from_secs(7 * 24 * 60 * 60)).await;
        store.create();

        assert_eq!(store.sessions.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_activity_keeps_session_alive() {
        let store = SessionStore::with_idle_ttl(Duration::from_secs(60));
        let (id, _) = store.create();

        for _ in 0..3 {
            tokio::time::advance(Duration::from_secs(40)).await;
            assert!(store.get(id).is_some());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_in_use_is_not_swept() {
        let store = SessionStore::with_idle_ttl(Duration::from_secs(60));
        let (id, handle) = store.create();
        let _guard = handle.lock().await;

        tokio::time::advance(Duration::from_secs(120)).await;
        assert_eq!(store.sweep(), 0);
        assert!(store.get(id).is_some());
    }
}
