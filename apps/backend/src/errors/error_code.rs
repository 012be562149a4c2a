//! Error codes for the game backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that the facade's callers see.

use core::fmt;

use super::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind};

/// Centralized error codes for the game backend API.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Action Validation
    /// Action attempted out of turn
    OutOfTurn,
    /// Room is not in the status the operation requires
    GameNotInProgress,
    /// Card fails the play-validity oracle
    InvalidPlay,
    /// Wild played without naming a color
    MissingColorChoice,
    /// Chosen color is not playable
    InvalidColorChoice,
    /// Player already drew this turn
    AlreadyDrawnThisTurn,
    /// Pass attempted before playing or drawing
    MustPlayOrDrawFirst,
    /// UNO declared at the wrong moment
    InvalidUnoDeclaration,
    /// UNO called on a player who cannot be penalized
    CannotCallUno,
    /// No wild-draw-four challenge is open
    NoActiveChallenge,
    /// Only the challenger may resolve a challenge
    NotChallenger,
    /// A wild-draw-four challenge awaits resolution
    ChallengePending,
    /// Fewer than two players at round start
    NotEnoughPlayers,
    /// Card token failed to parse
    ParseCard,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Room not found
    RoomNotFound,
    /// Player not found in the room (state desync)
    PlayerNotFound,
    /// Card not in the acting player's hand (state desync)
    CardNotInHand,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Round already started
    AlreadyStarted,
    /// Room already seats four players
    RoomFull,
    /// Operation reserved for the room host
    NotHost,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Room store unavailable
    StoreUnavailable,
    /// Data corruption detected
    DataCorruption,
    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Action Validation
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::GameNotInProgress => "GAME_NOT_IN_PROGRESS",
            Self::InvalidPlay => "INVALID_PLAY",
            Self::MissingColorChoice => "MISSING_COLOR_CHOICE",
            Self::InvalidColorChoice => "INVALID_COLOR_CHOICE",
            Self::AlreadyDrawnThisTurn => "ALREADY_DRAWN_THIS_TURN",
            Self::MustPlayOrDrawFirst => "MUST_PLAY_OR_DRAW_FIRST",
            Self::InvalidUnoDeclaration => "INVALID_UNO_DECLARATION",
            Self::CannotCallUno => "CANNOT_CALL_UNO",
            Self::NoActiveChallenge => "NO_ACTIVE_CHALLENGE",
            Self::NotChallenger => "NOT_CHALLENGER",
            Self::ChallengePending => "CHALLENGE_PENDING",
            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            Self::ParseCard => "PARSE_CARD",
            Self::ValidationError => "VALIDATION_ERROR",

            // Resource Not Found
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::NotFound => "NOT_FOUND",

            // Business Logic Conflicts
            Self::AlreadyStarted => "ALREADY_STARTED",
            Self::RoomFull => "ROOM_FULL",
            Self::NotHost => "NOT_HOST",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// True for codes that signal a stale client view of the room.
    ///
    /// Per the error handling design, these are defensive failures; callers
    /// should force a full state refresh rather than retry the action.
    pub const fn is_desync(&self) -> bool {
        matches!(self, Self::PlayerNotFound | Self::CardNotInHand)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::OutOfTurn => Self::OutOfTurn,
                ValidationKind::PhaseMismatch => Self::GameNotInProgress,
                ValidationKind::InvalidPlay => Self::InvalidPlay,
                ValidationKind::MissingColorChoice => Self::MissingColorChoice,
                ValidationKind::InvalidColorChoice => Self::InvalidColorChoice,
                ValidationKind::AlreadyDrawn => Self::AlreadyDrawnThisTurn,
                ValidationKind::MustPlayOrDrawFirst => Self::MustPlayOrDrawFirst,
                ValidationKind::InvalidUnoDeclaration => Self::InvalidUnoDeclaration,
                ValidationKind::CannotCallUno => Self::CannotCallUno,
                ValidationKind::NoActiveChallenge => Self::NoActiveChallenge,
                ValidationKind::NotChallenger => Self::NotChallenger,
                ValidationKind::ChallengePending => Self::ChallengePending,
                ValidationKind::NotEnoughPlayers => Self::NotEnoughPlayers,
                ValidationKind::ParseCard => Self::ParseCard,
                _ => Self::ValidationError,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Room => Self::RoomNotFound,
                NotFoundKind::Player => Self::PlayerNotFound,
                NotFoundKind::CardInHand => Self::CardNotInHand,
                _ => Self::NotFound,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::AlreadyStarted => Self::AlreadyStarted,
                ConflictKind::RoomFull => Self::RoomFull,
                ConflictKind::NotHost => Self::NotHost,
                _ => Self::Conflict,
            },
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::StoreUnavailable => Self::StoreUnavailable,
                InfraErrorKind::DataCorruption => Self::DataCorruption,
                _ => Self::InternalError,
            },
        }
    }
}
