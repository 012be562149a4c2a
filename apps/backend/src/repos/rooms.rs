//! Room persistence seam.

use async_trait::async_trait;

use crate::domain::{GameState, RoomId};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::errors::ErrorCode;

/// Key-value persistence for room state, keyed by room id.
///
/// The stored `GameState` is an opaque blob to the store; saves are
/// last-write-wins at room granularity and assumed atomic. The engine
/// serializes actions per room by fetching a fresh copy per call and
/// validating preconditions before mutating, so the store needs no
/// locking of its own.
#[async_trait]
pub trait RoomStore: Send + Sync {
    async fn fetch(&self, room_id: RoomId) -> Result<Option<GameState>, DomainError>;

    async fn save(&self, state: &GameState) -> Result<(), DomainError>;

    async fn remove(&self, room_id: RoomId) -> Result<(), DomainError>;
}

/// Fetch a room or fail with `ROOM_NOT_FOUND`.
pub async fn require_room(store: &dyn RoomStore, room_id: RoomId) -> Result<GameState, AppError> {
    match store.fetch(room_id).await? {
        Some(state) => Ok(state),
        None => Err(AppError::not_found(
            ErrorCode::RoomNotFound,
            format!("Room {room_id} not found"),
        )),
    }
}
