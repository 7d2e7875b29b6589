//! Error types for the Alexandria engine

use serde::Serialize;
use thiserror::Error;

/// Machine-readable rejection codes surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Null/empty/too-short field, bad email/phone/ISBN syntax
    MalformedInput,
    /// ISBN fails its control-digit check
    ChecksumInvalid,
    /// Year/date outside permitted bounds, limit/offset invalid
    RangeViolation,
    /// Uniqueness constraint violated
    DuplicateValue,
    /// A foreign or target id does not resolve
    ReferenceNotFound,
    /// Mutation blocked by existing dependents
    DependencyConflict,
    /// Loan request exceeds the role quota, or the user is inactive
    QuotaExceeded,
    /// Deactivation refused while the user holds open loans
    DeactivationBlocked,
    /// Repository I/O failure
    StorageFailure,
}

/// A single violated rule: the field it concerns, a machine-readable code
/// and a human-readable message. Validators fail fast, so at most one of
/// these is produced per call.
#[derive(Debug, Clone, Serialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub code: ErrorCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }
}

/// Raised by repository implementations on I/O failure. The engine never
/// interprets it; it is propagated to the caller unchanged.
#[derive(Error, Debug)]
#[error("storage failure: {0}")]
pub struct StorageError(pub String);

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AppError {
    /// The rejection code carried by this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(e) => e.code,
            AppError::Storage(_) => ErrorCode::StorageFailure,
        }
    }

    /// The offending field, when this is a validation rejection
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AppError::Validation(e) => Some(e.field),
            AppError::Storage(_) => None,
        }
    }
}

/// Error response body, surfaced to presentation layers unchanged
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub field: Option<&'static str>,
    pub code: ErrorCode,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::Validation(e) => ErrorResponse {
                field: Some(e.field),
                code: e.code,
                message: e.message.clone(),
            },
            AppError::Storage(e) => ErrorResponse {
                field: None,
                code: ErrorCode::StorageFailure,
                message: e.to_string(),
            },
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
