//! Collaborator traits consumed by the facade.
//!
//! The engine does not own persistence or delivery; it talks to whatever
//! implements these traits. Reference adapters live in [`crate::adapters`].

pub mod notify;
pub mod rooms;

pub use notify::RoomNotifier;
pub use rooms::{require_room, RoomStore};
