//! The publishing state store.
//!
//! [`AppStore`] owns the session snapshot behind a mutex and fans every new
//! snapshot out to subscribers over a broadcast channel. Dispatch is the
//! only write path; the reducer runs while the lock is held, so transitions
//! are applied atomically and in delivery order.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast;

use reels_shared::constants::STORE_CHANNEL_CAPACITY;

use crate::actions::Action;
use crate::reducer::reduce;
use crate::state::AppState;

/// Shared handle to the session store. Cheap to clone.
#[derive(Clone)]
pub struct AppStore {
    inner: Arc<Inner>,
}

struct Inner {
    state: Mutex<AppState>,
    tx: broadcast::Sender<AppState>,
}

impl AppStore {
    /// A store seeded with [`AppState::initial`].
    pub fn new() -> Self {
        Self::with_state(AppState::initial())
    }

    /// A store starting from an explicit snapshot.
    pub fn with_state(state: AppState) -> Self {
        let (tx, _) = broadcast::channel(STORE_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                tx,
            }),
        }
    }

    /// Apply an action and publish the resulting snapshot.
    ///
    /// Returns the new snapshot. Dispatch never fails; subscribers that have
    /// fallen behind or gone away are ignored.
    pub fn dispatch(&self, action: Action) -> AppState {
        let next = {
            let mut guard = lock(&self.inner.state);
            let next = reduce(&guard, action);
            *guard = next.clone();
            next
        };

        let _ = self.inner.tx.send(next.clone());
        next
    }

    /// Clone the current snapshot.
    pub fn snapshot(&self) -> AppState {
        lock(&self.inner.state).clone()
    }

    /// Subscribe to snapshots published by future dispatches.
    pub fn subscribe(&self) -> broadcast::Receiver<AppState> {
        self.inner.tx.subscribe()
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

// The lock is only held across the synchronous reduce step; a poisoning
// panic cannot leave the snapshot half-written, so the poison flag carries
// no information here.
fn lock(state: &Mutex<AppState>) -> MutexGuard<'_, AppState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
