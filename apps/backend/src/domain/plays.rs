//! Card-effect resolution: what each player action does to the room state.
//!
//! Every function here is a synchronous transform of the working state copy
//! the facade fetched for this action. Guards come first (status, then
//! turn), then the mutation, then a typed result describing what happened.
//! Stack and challenge handling is never a dead end: any action taken while
//! one is pending has a defined outcome.

use super::cards_logic::hand_has_color;
use super::cards_types::{CardId, CardKind, Color};
use super::dealing::shuffle_with_seed;
use super::rules::{self, FAILED_CHALLENGE_PENALTY, UNO_PENALTY_DRAW, WILD_FOUR_DRAW};
use super::scoring::finish_round;
use super::seed_derivation::derive_reshuffle_seed;
use super::state::{
    require_current_color, require_turn, ChallengeState, GameState, PendingDraw, Seat, StackKind,
    Status,
};
use super::turns::{advance_turn, advance_turn_by, apply_reverse, next_seat, set_turn};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// How the acting player's UNO obligation resolved on a play down to one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnoOutcome {
    /// Declared in time; safe from `call_uno_on`.
    Declared,
    /// Not declared; vulnerable until the next hand-size change.
    Missed,
}

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// The play emptied the hand and ended the round.
    pub round_finished: bool,
    pub winner: Option<Seat>,
    /// An unstacked wild-draw-four opened a challenge window.
    pub challenge_opened: bool,
    /// Accumulated draw-stack count after this play, if a stack is pending.
    pub stack_count: Option<u8>,
    pub uno: Option<UnoOutcome>,
    pub next_turn: Option<Seat>,
}

/// Result of a draw action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    pub cards_drawn: u8,
    /// The draw absorbed a pending draw stack.
    pub absorbed_stack: bool,
    /// The draw accepted an open wild-draw-four challenge.
    pub accepted_challenge: bool,
    pub next_turn: Option<Seat>,
}

/// The challenger's decision on an open wild-draw-four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeDecision {
    Challenge,
    Accept,
}

/// Result of resolving a wild-draw-four challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeResult {
    pub decision: ChallengeDecision,
    /// Whether the contested play was legal; None when accepted unexamined.
    pub play_was_legal: Option<bool>,
    /// Seat that drew the penalty cards.
    pub penalized: Seat,
    pub cards_drawn: u8,
    pub next_turn: Option<Seat>,
}

/// Result of a successful UNO call against another player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnoPenaltyResult {
    pub cards_drawn: u8,
}

fn require_playing(state: &GameState) -> Result<(), DomainError> {
    if state.status != Status::Playing {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Game not in progress",
        ));
    }
    Ok(())
}

fn require_acting_turn(state: &GameState, seat: Seat) -> Result<(), DomainError> {
    let turn = require_turn(state, "acting turn")?;
    if turn != seat {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Not your turn",
        ));
    }
    Ok(())
}

/// Shuffle everything but the top discard card back into the draw pile.
///
/// Reshuffled wilds lose their chosen color. No-op while the discard pile
/// holds at most the one card a live round always keeps.
fn reshuffle_discard_into_draw(state: &mut GameState) {
    if state.discard_pile.len() <= 1 {
        return;
    }
    let Some(top) = state.discard_pile.pop() else {
        return;
    };
    let mut rest = std::mem::take(&mut state.discard_pile);
    for card in rest.iter_mut() {
        card.chosen_color = None;
    }
    state.reshuffles += 1;
    shuffle_with_seed(
        &mut rest,
        derive_reshuffle_seed(state.rng_seed, state.round_no, state.reshuffles),
    );
    state.draw_pile = rest;
    state.discard_pile = vec![top];
    state.push_log("Discard pile reshuffled into the draw pile");
}

/// Move up to `count` cards from the draw pile into `seat`'s hand,
/// reshuffling when the pile runs dry. Returns the number actually drawn
/// (short only if both piles are exhausted).
fn draw_from_pile(state: &mut GameState, seat: Seat, count: u8) -> Result<u8, DomainError> {
    if state.player(seat).is_none() {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("No player at seat {seat}"),
        ));
    }
    let mut drawn = 0;
    for _ in 0..count {
        if state.draw_pile.is_empty() {
            reshuffle_discard_into_draw(state);
        }
        let Some(card) = state.draw_pile.pop() else {
            break;
        };
        if let Some(player) = state.player_mut(seat) {
            player.cards.push(card);
            drawn += 1;
        }
    }
    if let Some(player) = state.player_mut(seat) {
        if player.cards.len() != 1 {
            player.said_uno = false;
        }
    }
    Ok(drawn)
}

/// Play a card from `seat`'s hand, resolving its effect.
pub fn play_card(
    state: &mut GameState,
    seat: Seat,
    card_id: CardId,
    chosen_color: Option<Color>,
) -> Result<PlayCardResult, DomainError> {
    require_playing(state)?;
    require_acting_turn(state, seat)?;
    if state.challenge.is_some() {
        return Err(DomainError::validation(
            ValidationKind::ChallengePending,
            "Resolve the wild-draw-four challenge first",
        ));
    }

    let color_before = require_current_color(state, "play_card")?;

    let hand = &state.players[seat as usize].cards;
    let pos = hand.iter().position(|c| c.id == card_id).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::CardInHand,
            format!("Card {card_id} not in hand"),
        )
    })?;
    let card = hand[pos];

    if !rules::is_valid_play(state, &card) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlay,
            format!("{card} cannot be played here"),
        ));
    }

    let chosen = if card.kind.is_wild() {
        let chosen = chosen_color.ok_or_else(|| {
            DomainError::validation(
                ValidationKind::MissingColorChoice,
                "Playing a wild requires naming a color",
            )
        })?;
        if !chosen.is_choosable() {
            return Err(DomainError::validation(
                ValidationKind::InvalidColorChoice,
                format!("{chosen} cannot be chosen"),
            ));
        }
        Some(chosen)
    } else {
        None
    };

    // Commit: move the card onto the discard pile.
    let mut played = state.players[seat as usize].cards.remove(pos);
    played.chosen_color = chosen;
    state.current_color = Some(played.effective_color());
    state.discard_pile.push(played);

    let player_name = state.players[seat as usize].name.clone();
    state.push_log(format!("{player_name} played {played}"));

    // UNO bookkeeping on the acting player.
    let hand_len = state.players[seat as usize].cards.len();
    let uno = if hand_len == 1 {
        if state.players[seat as usize].said_uno {
            state.push_log(format!("{player_name} has UNO!"));
            Some(UnoOutcome::Declared)
        } else {
            state.push_log(format!(
                "{player_name} is down to one card without declaring UNO"
            ));
            Some(UnoOutcome::Missed)
        }
    } else {
        state.players[seat as usize].said_uno = false;
        None
    };

    // Empty hand ends the round immediately; no further effect resolution.
    if hand_len == 0 {
        finish_round(state, seat);
        return Ok(PlayCardResult {
            round_finished: true,
            winner: Some(seat),
            challenge_opened: false,
            stack_count: None,
            uno,
            next_turn: None,
        });
    }

    let mut challenge_opened = false;
    match played.kind {
        CardKind::Number(_) | CardKind::Wild => {
            advance_turn(state)?;
        }
        CardKind::Skip => {
            // The immediate next player is skipped entirely.
            advance_turn_by(state, 2)?;
        }
        CardKind::Reverse => {
            apply_reverse(state)?;
        }
        CardKind::DrawTwo => {
            match state.pending_draw.as_mut() {
                Some(pending) => pending.count += StackKind::DrawTwo.draw_increment(),
                None => {
                    state.pending_draw = Some(PendingDraw {
                        kind: StackKind::DrawTwo,
                        count: StackKind::DrawTwo.draw_increment(),
                    })
                }
            }
            advance_turn(state)?;
        }
        CardKind::WildDrawFour => {
            if let Some(pending) = state.pending_draw.as_mut() {
                // Stacked: escalates the obligation, no challenge window.
                pending.count += StackKind::WildDrawFour.draw_increment();
                advance_turn(state)?;
            } else {
                debug_assert!(state.challenge.is_none());
                let challenger = next_seat(state, seat);
                state.challenge = Some(ChallengeState {
                    challenger,
                    challenged: seat,
                    card_played: played.id,
                    prior_color: color_before,
                });
                set_turn(state, challenger);
                challenge_opened = true;
                let challenger_name = state.players[challenger as usize].name.clone();
                state.push_log(format!(
                    "{challenger_name} may challenge the Wild Draw Four"
                ));
            }
        }
    }

    Ok(PlayCardResult {
        round_finished: false,
        winner: None,
        challenge_opened,
        stack_count: state.pending_draw.map(|p| p.count),
        uno,
        next_turn: state.turn,
    })
}

/// Draw for `seat`: absorbs a pending stack, accepts an open challenge, or
/// takes the single optional card of a normal turn.
pub fn draw_card(state: &mut GameState, seat: Seat) -> Result<DrawResult, DomainError> {
    require_playing(state)?;
    require_acting_turn(state, seat)?;

    // A draw while a challenge is open is the challenger accepting it.
    if state.challenge.is_some() {
        let outcome = resolve_challenge(state, seat, ChallengeDecision::Accept)?;
        return Ok(DrawResult {
            cards_drawn: outcome.cards_drawn,
            absorbed_stack: false,
            accepted_challenge: true,
            next_turn: state.turn,
        });
    }

    if let Some(pending) = state.pending_draw.take() {
        let drawn = draw_from_pile(state, seat, pending.count)?;
        let name = state.players[seat as usize].name.clone();
        state.push_log(format!("{name} draws {drawn}; the stack is spent"));
        advance_turn(state)?;
        return Ok(DrawResult {
            cards_drawn: drawn,
            absorbed_stack: true,
            accepted_challenge: false,
            next_turn: state.turn,
        });
    }

    if state.has_drawn_this_turn {
        return Err(DomainError::validation(
            ValidationKind::AlreadyDrawn,
            "Already drew a card this turn",
        ));
    }

    let drawn = draw_from_pile(state, seat, 1)?;
    state.has_drawn_this_turn = true;
    state.drawn_card = if drawn > 0 {
        state.player(seat).and_then(|p| p.cards.last()).map(|c| c.id)
    } else {
        None
    };
    let name = state.players[seat as usize].name.clone();
    state.push_log(format!("{name} drew a card"));
    Ok(DrawResult {
        cards_drawn: drawn,
        absorbed_stack: false,
        accepted_challenge: false,
        next_turn: state.turn,
    })
}

/// End the turn after a draw that produced nothing playable (or nothing the
/// player wants to play).
pub fn pass_turn(state: &mut GameState, seat: Seat) -> Result<Seat, DomainError> {
    require_playing(state)?;
    require_acting_turn(state, seat)?;
    if state.challenge.is_some() {
        return Err(DomainError::validation(
            ValidationKind::ChallengePending,
            "Resolve the wild-draw-four challenge first",
        ));
    }
    if !state.has_drawn_this_turn {
        return Err(DomainError::validation(
            ValidationKind::MustPlayOrDrawFirst,
            "Draw a card before passing",
        ));
    }
    let name = state.players[seat as usize].name.clone();
    state.push_log(format!("{name} passes"));
    advance_turn(state)
}

/// Declare UNO while holding exactly two cards (about to reach one).
///
/// Not turn-gated: the declaration is made in the moment, whoever is acting.
pub fn declare_uno(state: &mut GameState, seat: Seat) -> Result<(), DomainError> {
    require_playing(state)?;
    let Some(player) = state.player_mut(seat) else {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("No player at seat {seat}"),
        ));
    };
    if player.cards.len() != 2 {
        return Err(DomainError::validation(
            ValidationKind::InvalidUnoDeclaration,
            "UNO can only be declared while holding two cards",
        ));
    }
    player.said_uno = true;
    let name = player.name.clone();
    state.push_log(format!("{name} declared UNO"));
    Ok(())
}

/// Catch `target` holding one card without a declaration: two-card penalty.
pub fn call_uno_on(
    state: &mut GameState,
    caller: Seat,
    target: Seat,
) -> Result<UnoPenaltyResult, DomainError> {
    require_playing(state)?;
    if state.player(caller).is_none() {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("No player at seat {caller}"),
        ));
    }
    if caller == target {
        return Err(DomainError::validation(
            ValidationKind::CannotCallUno,
            "Cannot call UNO on yourself",
        ));
    }
    let Some(target_player) = state.player(target) else {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("No player at seat {target}"),
        ));
    };
    if target_player.hand_size() != 1 || target_player.said_uno {
        return Err(DomainError::validation(
            ValidationKind::CannotCallUno,
            "Target declared in time or does not hold one card",
        ));
    }

    let drawn = draw_from_pile(state, target, UNO_PENALTY_DRAW)?;
    let caller_name = state.players[caller as usize].name.clone();
    let target_name = state.players[target as usize].name.clone();
    state.push_log(format!(
        "{caller_name} caught {target_name} not declaring UNO; {target_name} draws {drawn}"
    ));
    Ok(UnoPenaltyResult { cards_drawn: drawn })
}

/// Resolve an open wild-draw-four challenge.
///
/// Accept: the challenger draws four. Challenge: the contested play is
/// examined against the color that was in effect before it - if the player
/// held a matching-color card the play was illegal and they draw the four
/// instead; if not, the challenger draws six. In every outcome the turn
/// lands on the seat after the challenger.
pub fn resolve_challenge(
    state: &mut GameState,
    seat: Seat,
    decision: ChallengeDecision,
) -> Result<ChallengeResult, DomainError> {
    require_playing(state)?;
    let Some(challenge) = state.challenge else {
        return Err(DomainError::validation(
            ValidationKind::NoActiveChallenge,
            "No wild-draw-four challenge is open",
        ));
    };
    if seat != challenge.challenger {
        return Err(DomainError::validation(
            ValidationKind::NotChallenger,
            "Only the player facing the wild-draw-four may resolve it",
        ));
    }

    let (penalized, penalty, play_was_legal) = match decision {
        ChallengeDecision::Accept => (challenge.challenger, WILD_FOUR_DRAW, None),
        ChallengeDecision::Challenge => {
            let hand = &state.players[challenge.challenged as usize].cards;
            let legal = !hand_has_color(hand, challenge.prior_color);
            if legal {
                (
                    challenge.challenger,
                    WILD_FOUR_DRAW + FAILED_CHALLENGE_PENALTY,
                    Some(true),
                )
            } else {
                (challenge.challenged, WILD_FOUR_DRAW, Some(false))
            }
        }
    };

    let drawn = draw_from_pile(state, penalized, penalty)?;
    state.challenge = None;

    let challenger_name = state.players[challenge.challenger as usize].name.clone();
    let challenged_name = state.players[challenge.challenged as usize].name.clone();
    match play_was_legal {
        None => state.push_log(format!("{challenger_name} accepts and draws {drawn}")),
        Some(true) => state.push_log(format!(
            "{challenger_name}'s challenge fails; {challenger_name} draws {drawn}"
        )),
        Some(false) => state.push_log(format!(
            "{challenged_name} was caught bluffing and draws {drawn}"
        )),
    }

    set_turn(state, challenge.challenger);
    let next = advance_turn(state)?;
    Ok(ChallengeResult {
        decision,
        play_was_legal,
        penalized,
        cards_drawn: drawn,
        next_turn: Some(next),
    })
}
