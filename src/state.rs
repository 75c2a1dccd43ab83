//! Shared application state for all routes: the storage handle and the guard that serializes access to it.

use crate::store::ItemStore;
use std::ops::Deref;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ItemStore>,
    /// Held for the duration of every storage statement, across all requests.
    guard: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self {
            store,
            guard: Arc::new(Mutex::new(())),
        }
    }

    /// Wait for exclusive use of storage. The returned session releases it when dropped.
    pub async fn storage(&self) -> StorageSession<'_> {
        StorageSession {
            _held: self.guard.lock().await,
            store: self.store.as_ref(),
        }
    }
}

/// Exclusive access to the storage handle.
pub struct StorageSession<'a> {
    _held: MutexGuard<'a, ()>,
    store: &'a dyn ItemStore,
}

impl<'a> Deref for StorageSession<'a> {
    type Target = dyn ItemStore + 'a;

    fn deref(&self) -> &Self::Target {
        self.store
    }
}
