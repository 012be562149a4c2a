/// Property-based tests for the play-validity oracle
use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::cards_logic::faces_match;
use crate::domain::rules::{is_valid_play, valid_plays};
use crate::domain::state::{PendingDraw, StackKind};
use crate::domain::test_state_helpers::playing_state;
use crate::domain::{test_gens, test_prelude, CardKind};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a wild is always valid while no stack is pending.
    #[test]
    fn prop_wilds_always_valid(
        top in test_gens::colored_card(),
        wild in test_gens::wild_card(),
    ) {
        let state = playing_state(vec![vec![wild]], top);
        prop_assert!(is_valid_play(&state, &wild));
    }

    /// Property: for colored candidates in a quiet state, the oracle is
    /// exactly "matches the color in effect, or matches the top's face".
    #[test]
    fn prop_colored_validity_is_color_or_face_match(
        top in test_gens::colored_card(),
        candidate in test_gens::colored_card(),
    ) {
        let state = playing_state(vec![vec![candidate]], top);
        let expected = candidate.color == top.color || faces_match(&candidate, &top);
        prop_assert_eq!(is_valid_play(&state, &candidate), expected);
    }

    /// Property: a pending stack gates validity down to the matching
    /// stackable kind, whatever the candidate.
    #[test]
    fn prop_stack_gates_everything(
        top in test_gens::colored_card(),
        candidate in test_gens::card(),
        draw_two_stack in any::<bool>(),
    ) {
        let kind = if draw_two_stack {
            StackKind::DrawTwo
        } else {
            StackKind::WildDrawFour
        };
        let mut state = playing_state(vec![vec![candidate]], top);
        state.pending_draw = Some(PendingDraw {
            kind,
            count: kind.draw_increment(),
        });

        let expected = match kind {
            StackKind::DrawTwo => candidate.kind == CardKind::DrawTwo,
            StackKind::WildDrawFour => candidate.kind == CardKind::WildDrawFour,
        };
        prop_assert_eq!(is_valid_play(&state, &candidate), expected);
    }

    /// Property: legal plays are a duplicate-free subset of the hand.
    #[test]
    fn prop_valid_plays_subset(
        top in test_gens::colored_card(),
        hand in test_gens::hand_up_to(10),
    ) {
        let state = playing_state(vec![hand.clone()], top);
        let legal = valid_plays(&state, 0);

        let ids: HashSet<_> = legal.iter().map(|c| c.id).collect();
        prop_assert_eq!(ids.len(), legal.len(), "no duplicates");
        for card in &legal {
            prop_assert!(
                hand.iter().any(|h| h.id == card.id),
                "legal play {card:?} must come from the hand"
            );
        }
    }
}
