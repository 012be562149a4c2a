//! Notifier adapters: a tokio broadcast fan-out and a no-op.

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::broadcast;
use tracing::debug;

use crate::domain::RoomId;
use crate::errors::domain::DomainError;
use crate::protocol::ServerMsg;
use crate::repos::RoomNotifier;

const CHANNEL_CAPACITY: usize = 64;

/// Fan-out notifier backed by one tokio broadcast channel per room.
///
/// Subscribers (a websocket session, a test) call [`subscribe`] and read
/// messages at their own pace; lagging receivers drop old messages rather
/// than block the engine.
///
/// [`subscribe`]: BroadcastNotifier::subscribe
#[derive(Default)]
pub struct BroadcastNotifier {
    channels: DashMap<RoomId, broadcast::Sender<ServerMsg>>,
}

impl BroadcastNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Obtain a receiver for a room's messages, creating the channel on
    /// first use.
    pub fn subscribe(&self, room_id: RoomId) -> broadcast::Receiver<ServerMsg> {
        self.channels
            .entry(room_id)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }
}

#[async_trait]
impl RoomNotifier for BroadcastNotifier {
    async fn broadcast(&self, room_id: RoomId, msg: ServerMsg) -> Result<(), DomainError> {
        if let Some(sender) = self.channels.get(&room_id) {
            // A send error just means nobody is listening right now.
            if sender.send(msg).is_err() {
                debug!(%room_id, "no live subscribers for room broadcast");
            }
        }
        Ok(())
    }
}

/// Notifier that drops everything; for tests and headless simulations.
#[derive(Default)]
pub struct NullNotifier;

impl NullNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RoomNotifier for NullNotifier {
    async fn broadcast(&self, _room_id: RoomId, _msg: ServerMsg) -> Result<(), DomainError> {
        Ok(())
    }
}
