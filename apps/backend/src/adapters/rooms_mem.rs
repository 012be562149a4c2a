//! In-memory room store backed by a concurrent map.
//!
//! The reference [`RoomStore`]: state blobs keyed by room id,
//! last-write-wins. Suitable for tests and single-process deployments; a
//! real deployment would put a durable key-value store behind the same
//! trait.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{GameState, RoomId};
use crate::errors::domain::DomainError;
use crate::repos::RoomStore;

#[derive(Default)]
pub struct MemoryRoomStore {
    rooms: DashMap<RoomId, GameState>,
}

impl MemoryRoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[async_trait]
impl RoomStore for MemoryRoomStore {
    async fn fetch(&self, room_id: RoomId) -> Result<Option<GameState>, DomainError> {
        Ok(self.rooms.get(&room_id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, state: &GameState) -> Result<(), DomainError> {
        self.rooms.insert(state.room_id, state.clone());
        Ok(())
    }

    async fn remove(&self, room_id: RoomId) -> Result<(), DomainError> {
        self.rooms.remove(&room_id);
        Ok(())
    }
}
