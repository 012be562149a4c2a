use std::sync::Arc;

use crate::adapters::{MemoryRoomStore, NullNotifier};
use crate::repos::{RoomNotifier, RoomStore};

/// Application state containing shared resources.
///
/// Bundles the collaborators every facade call needs: the room store and
/// the notifier. Cheap to clone; the collaborators live behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RoomStore>,
    notifier: Arc<dyn RoomNotifier>,
}

impl AppState {
    pub fn new(store: Arc<dyn RoomStore>, notifier: Arc<dyn RoomNotifier>) -> Self {
        Self { store, notifier }
    }

    /// Fully in-process state: memory store, no-op notifier. The default
    /// for tests and headless simulations.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryRoomStore::new()),
            Arc::new(NullNotifier::new()),
        )
    }

    pub fn store(&self) -> &dyn RoomStore {
        self.store.as_ref()
    }

    pub fn notifier(&self) -> &dyn RoomNotifier {
        self.notifier.as_ref()
    }
}
