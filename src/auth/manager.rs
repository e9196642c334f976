//! Owner of the live session and its logout timer

use super::{AuthAction, PersistedSession, Session, SESSION_KEY};
use crate::error::Result;
use crate::storage::BlobStore;
use crate::store::Dispatcher;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Holds the one live session, arms the timer that logs it out, and moves
/// it in and out of the blob store.
///
/// There is at most one pending timer. Arming replaces (and cancels) any
/// timer that is still pending; clearing with nothing armed does nothing.
pub struct AuthSessionManager {
    blobs: Arc<dyn BlobStore>,
    dispatcher: Dispatcher,
    current: RwLock<Option<Session>>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl AuthSessionManager {
    pub fn new(blobs: Arc<dyn BlobStore>, dispatcher: Dispatcher) -> Self {
        Self {
            blobs,
            dispatcher,
            current: RwLock::new(None),
            timer: Mutex::new(None),
        }
    }

    /// Dispatch [`AuthAction::Logout`] once `duration` has elapsed
    pub fn set_logout_timer(&self, duration: Duration) {
        debug!("Arming logout timer for {:?}", duration);
        let dispatcher = self.dispatcher.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            info!("Session expired, logging out");
            if let Err(e) = dispatcher.dispatch(AuthAction::Logout) {
                debug!("Logout after expiry not delivered: {}", e);
            }
        });

        if let Some(previous) = self.lock_timer().replace(handle) {
            if !previous.is_finished() {
                debug!("Replacing pending logout timer");
            }
            previous.abort();
        }
    }

    /// Cancel the pending logout timer, if any
    pub fn clear_logout_timer(&self) {
        if let Some(handle) = self.lock_timer().take() {
            debug!("Clearing logout timer");
            handle.abort();
        }
    }

    /// Whether a logout timer is armed and has not fired yet
    pub fn has_pending_timer(&self) -> bool {
        self.lock_timer()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// The live session, if any
    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Make `session` the live one and write it to the blob store
    pub async fn persist(&self, session: &Session) -> Result<()> {
        self.set_current(Some(session.clone()));
        let record = PersistedSession::from_session(session).encode()?;
        self.blobs.set(SESSION_KEY, &record).await
    }

    /// Load the stored session and make it the live one.
    ///
    /// A missing, unreadable or invalid record is `None`, never an error.
    /// So is a record without a token; it leaves no live session behind.
    pub async fn restore(&self) -> Option<Session> {
        let raw = match self.blobs.get(SESSION_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read stored session: {}", e);
                return None;
            }
        };

        let session = PersistedSession::decode(&raw)?.into_session();
        if session.token.is_empty() {
            debug!("Stored session for {} has no token", session.email);
            return None;
        }
        self.set_current(Some(session.clone()));
        Some(session)
    }

    /// Drop the live session and delete the stored one
    pub async fn forget(&self) -> Result<()> {
        self.set_current(None);
        self.blobs.remove(SESSION_KEY).await
    }

    fn set_current(&self, session: Option<Session>) {
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = session;
    }

    fn lock_timer(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.timer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for AuthSessionManager {
    fn drop(&mut self) {
        if let Some(handle) = self.lock_timer().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryBlobStore;
    use crate::store::{Action, AppState, Store};
    use crate::testing::wait_for_action;
    use chrono::Utc;

    fn manager_with_store() -> (AuthSessionManager, Store, Arc<InMemoryBlobStore>) {
        let store = Store::new(AppState::default());
        let blobs = Arc::new(InMemoryBlobStore::new());
        let manager = AuthSessionManager::new(blobs.clone(), store.dispatcher());
        (manager, store, blobs)
    }

    #[tokio::test]
    async fn test_timer_dispatches_logout() {
        let (manager, store, _) = manager_with_store();
        let handle = store.spawn();
        let mut actions = handle.subscribe();

        manager.set_logout_timer(Duration::from_millis(10));
        assert!(manager.has_pending_timer());

        wait_for_action(&mut actions, |a| matches!(a, Action::Auth(AuthAction::Logout)))
            .await
            .unwrap();
        handle.shutdown();
    }

    #[tokio::test]
    async fn test_clear_cancels_pending_timer() {
        let (manager, _store, _) = manager_with_store();

        manager.set_logout_timer(Duration::from_secs(60));
        assert!(manager.has_pending_timer());

        manager.clear_logout_timer();
        assert!(!manager.has_pending_timer());

        // Clearing again is a no-op
        manager.clear_logout_timer();
    }

    #[tokio::test]
    async fn test_rearming_replaces_previous_timer() {
        let (manager, store, _) = manager_with_store();
        let handle = store.spawn();
        let mut actions = handle.subscribe();

        manager.set_logout_timer(Duration::from_millis(20));
        manager.set_logout_timer(Duration::from_secs(60));

        let fired = tokio::time::timeout(
            Duration::from_millis(200),
            wait_for_action(&mut actions, |a| matches!(a, Action::Auth(AuthAction::Logout))),
        )
        .await;
        assert!(fired.is_err(), "replaced timer should not fire");
        assert!(manager.has_pending_timer());
        handle.shutdown();
    }

    #[tokio::test]
    async fn test_persist_restore_forget() {
        let (manager, _store, blobs) = manager_with_store();
        let session = Session::new(
            "cook@example.com",
            "u1",
            "tok",
            Utc::now() + chrono::Duration::hours(1),
        );

        manager.persist(&session).await.unwrap();
        assert_eq!(manager.current(), Some(session.clone()));
        assert!(blobs.get(SESSION_KEY).await.unwrap().is_some());

        let restored = manager.restore().await.unwrap();
        assert_eq!(restored.user_id, "u1");
        assert_eq!(restored.token, "tok");
        assert_eq!(restored.expires_at.timestamp(), session.expires_at.timestamp());

        manager.forget().await.unwrap();
        assert!(manager.current().is_none());
        assert!(blobs.get(SESSION_KEY).await.unwrap().is_none());
        assert!(manager.restore().await.is_none());
    }

    #[tokio::test]
    async fn test_restore_without_token_is_no_session() {
        let (manager, _store, _) = manager_with_store();
        let session = Session::new(
            "cook@example.com",
            "u1",
            "",
            Utc::now() + chrono::Duration::hours(1),
        );
        manager.persist(&session).await.unwrap();
        manager.set_current(None);

        assert!(manager.restore().await.is_none());
        assert!(manager.current().is_none());
    }

    #[tokio::test]
    async fn test_restore_garbage_is_no_session() {
        let store = Store::new(AppState::default());
        let blobs = Arc::new(InMemoryBlobStore::with_blob(SESSION_KEY, "{broken"));
        let manager = AuthSessionManager::new(blobs, store.dispatcher());

        assert!(manager.restore().await.is_none());
        assert!(manager.current().is_none());
    }
}
