//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod game_transition;
pub mod player_view;

pub mod plays;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod turns;
#[cfg(test)]
mod test_state_helpers;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_dealing;
#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_props_validity;
#[cfg(test)]
mod tests_validity;

// Re-exports for ergonomics
pub use cards_logic::{faces_match, hand_has_color, hand_points};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, CardId, CardKind, Color};
pub use dealing::{build_deck, deal, start_round};
pub use player_view::{view_for, PlayerView};
pub use rules::{is_valid_play, valid_plays};
pub use scoring::{finish_round, reset_for_rematch, MatchResult};
pub use seed_derivation::{derive_dealing_seed, derive_reshuffle_seed};
pub use snapshot::{snapshot, GameSnapshot};
pub use state::{
    ChallengeState, Direction, GameState, PendingDraw, Player, PlayerId, RoomId, Seat, StackKind,
    Status,
};
