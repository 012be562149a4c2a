//! Reference adapters for the collaborator traits.

pub mod notify_broadcast;
pub mod rooms_mem;

pub use notify_broadcast::{BroadcastNotifier, NullNotifier};
pub use rooms_mem::MemoryRoomStore;
