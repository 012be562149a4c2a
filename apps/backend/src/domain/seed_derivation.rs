//! RNG seed derivation utilities for deterministic game behavior.
//!
//! Provides functions to derive unique-but-deterministic seeds for different
//! shuffle contexts (dealing, mid-round reshuffles) from a room's base seed.
//! The base seed is drawn from entropy once at room creation; everything
//! random afterwards flows from it, so a room replays identically.

/// Derive a seed for dealing a round's opening hands.
///
/// Unique per (room, round) combination.
pub fn derive_dealing_seed(room_seed: u64, round_no: u32) -> u64 {
    room_seed
        .wrapping_add(u64::from(round_no).wrapping_mul(1_000_000))
        .wrapping_add(1) // offset to distinguish from reshuffle seeds
}

/// Derive a seed for reshuffling the discard pile back into the draw pile.
///
/// `reshuffles` is the count of reshuffles already performed this round, so
/// successive reshuffles within one round stay distinct.
pub fn derive_reshuffle_seed(room_seed: u64, round_no: u32, reshuffles: u32) -> u64 {
    room_seed
        .wrapping_add(u64::from(round_no).wrapping_mul(1_000_000))
        .wrapping_add(u64::from(reshuffles).wrapping_mul(100))
        .wrapping_add(2)
}
