//! Notification seam: broadcast post-mutation messages to room members.

use async_trait::async_trait;

use crate::domain::RoomId;
use crate::errors::domain::DomainError;
use crate::protocol::ServerMsg;

/// Publish/subscribe delivery of [`ServerMsg`] values to a room's members.
///
/// Delivery is best-effort; a notifier must not fail an action because a
/// subscriber went away.
#[async_trait]
pub trait RoomNotifier: Send + Sync {
    async fn broadcast(&self, room_id: RoomId, msg: ServerMsg) -> Result<(), DomainError>;
}
