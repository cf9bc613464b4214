//! The store: an explicit state container, not a process-wide singleton.
//!
//! DESIGN
//! ======
//! The store owns the composed [`AppState`] behind a lock. `dispatch`
//! reduces synchronously and atomically, then notifies subscribers with a
//! snapshot; no two reductions interleave. Callers construct a store and
//! pass it where needed, which keeps reducers unit-testable in isolation.
//!
//! Read requests have no cancellation, so a superseded response can arrive
//! after the user moved on. Each [`RequestKey`] carries an epoch counter:
//! actions register an epoch when they start and dispatch through
//! [`Store::dispatch_if_current`], which drops payloads from requests that
//! are no longer the newest for their key.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::state::{AppState, Event};

/// Identity of a read request, for stale-response discard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKey {
    CurrentUser,
    BoardList,
    BoardDetail,
}

type Subscriber = Box<dyn Fn(&AppState) + Send + Sync>;

/// The composed application store. One instance per client.
#[derive(Default)]
pub struct Store {
    state: RwLock<AppState>,
    subscribers: Mutex<Vec<Subscriber>>,
    epochs: Mutex<HashMap<RequestKey, u64>>,
}

impl Store {
    /// A store with every slice at its initial value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the current state tree.
    pub fn snapshot(&self) -> AppState {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Current session token, if any.
    pub fn token(&self) -> Option<String> {
        self.state.read().unwrap_or_else(PoisonError::into_inner).auth.token.clone()
    }

    /// ID of the authenticated user, if any.
    pub fn user_id(&self) -> Option<i64> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .auth
            .user
            .as_ref()
            .map(|user| user.id)
    }

    /// Register a callback invoked with a state snapshot after every
    /// dispatch.
    pub fn subscribe(&self, subscriber: impl Fn(&AppState) + Send + Sync + 'static) {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(subscriber));
    }

    /// Reduce one event into the state tree and notify subscribers.
    pub fn dispatch(&self, event: Event) {
        let snapshot = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            *state = state.reduce(&event);
            state.clone()
        };
        let subscribers = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        for subscriber in subscribers.iter() {
            subscriber(&snapshot);
        }
    }

    /// Mark a new in-flight read for `key`, superseding any previous one.
    /// Returns the epoch to pass to [`Store::dispatch_if_current`].
    pub fn begin_request(&self, key: RequestKey) -> u64 {
        let mut epochs = self.epochs.lock().unwrap_or_else(PoisonError::into_inner);
        let epoch = epochs.entry(key).or_insert(0);
        *epoch += 1;
        *epoch
    }

    /// Dispatch `event` only if no newer request for `key` has started.
    /// Returns whether the event was applied.
    pub fn dispatch_if_current(&self, key: RequestKey, epoch: u64, event: Event) -> bool {
        let current = {
            let epochs = self.epochs.lock().unwrap_or_else(PoisonError::into_inner);
            epochs.get(&key).copied()
        };
        if current != Some(epoch) {
            warn!(?key, epoch, ?current, "discarding stale response");
            return false;
        }
        debug!(?key, epoch, "applying response");
        self.dispatch(event);
        true
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("state", &self.snapshot()).finish_non_exhaustive()
    }
}
