use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// Boundary error type returned by every facade entry point.
///
/// Carries a stable [`ErrorCode`] plus a human-readable detail. The transport
/// layer (HTTP/RPC, not part of this crate) is expected to map the code to
/// its own status space; nothing here is fatal to the process.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// The stable code for this error, regardless of variant.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::InternalError,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// The human-readable detail for this error, regardless of variant.
    pub fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Conflict { detail, .. } => detail.clone(),
            AppError::Internal { detail } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
        }
    }

    /// True when the caller should discard its view of the room and refetch.
    pub fn is_desync(&self) -> bool {
        self.code().is_desync()
    }

    pub fn invalid(code: ErrorCode, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn not_found(code: ErrorCode, detail: String) -> Self {
        Self::NotFound { code, detail }
    }

    pub fn conflict(code: ErrorCode, detail: String) -> Self {
        Self::Conflict { code, detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let code = ErrorCode::from(&err);
        match err {
            DomainError::Validation(_, detail) => AppError::Validation { code, detail },
            DomainError::NotFound(_, detail) => AppError::NotFound { code, detail },
            DomainError::Conflict(_, detail) => AppError::Conflict { code, detail },
            DomainError::Infra(_, detail) => AppError::Internal { detail },
        }
    }
}
