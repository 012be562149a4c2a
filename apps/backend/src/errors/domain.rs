//! Domain-level error type used across the engine, services and adapters.
//!
//! This error type is transport- and storage-agnostic. Facade entry points
//! return `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rule/validation failure kinds surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Action attempted by a player whose turn it is not
    OutOfTurn,
    /// Action attempted while the room is not in the required status
    PhaseMismatch,
    /// Card fails the play-validity oracle
    InvalidPlay,
    /// Wild played without naming a color
    MissingColorChoice,
    /// Chosen color is not one of the four playable colors
    InvalidColorChoice,
    /// Second draw attempted within the same turn
    AlreadyDrawn,
    /// Pass attempted before playing or drawing
    MustPlayOrDrawFirst,
    /// UNO declared at a hand size other than two
    InvalidUnoDeclaration,
    /// UNO called on a player who declared, or whose hand is not one card
    CannotCallUno,
    /// Challenge resolution attempted with no challenge open
    NoActiveChallenge,
    /// Challenge resolution attempted by someone other than the challenger
    NotChallenger,
    /// Play or pass attempted while a wild-draw-four challenge awaits resolution
    ChallengePending,
    /// Fewer than two players at round start
    NotEnoughPlayers,
    /// Card token failed to parse
    ParseCard,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Room,
    Player,
    /// Card id not present in the acting player's hand (state desync)
    CardInHand,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    AlreadyStarted,
    RoomFull,
    NotHost,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    StoreUnavailable,
    DataCorruption,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or game rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}
