//! # App Error Type
//!
//! Unified error type for shell handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in the Shell                             │
//! │                                                                         │
//! │  Handler (record sale)                                                 │
//! │  Result<(), AppError>                                                  │
//! │       │                                                                 │
//! │       ├── ValidationError ── bad date, non-integer qty ──┐             │
//! │       ├── CoreError ──────── unknown member, low stock ──┤             │
//! │       ├── DbError ────────── rolled-back transaction ────┼── AppError  │
//! │       └── io::Error ──────── terminal read/write ────────┘             │
//! │                                                                         │
//! │  Menu loop prints "=> Error: <message>" and continues. Every error     │
//! │  is terminal to the current operation only, never to the process.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tome_core::{CoreError, ValidationError};
use tome_db::DbError;

/// Error surfaced to the operator at the prompt.
#[derive(Debug, Clone)]
pub struct AppError {
    /// Machine-readable error code, kept for tests and logging
    pub code: ErrorCode,

    /// Human-readable message printed after "=> Error: "
    pub message: String,
}

/// Coarse error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Referenced member, book, or sale does not exist
    NotFound,

    /// Prompt input failed format or range validation
    ValidationError,

    /// Storage operation failed (transaction rolled back)
    DatabaseError,

    /// Requested quantity exceeds remaining stock
    InsufficientStock,

    /// Terminal I/O or other unexpected failure
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts validation errors (bad prompt input) to app errors.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Converts core business errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MemberNotFound(id) => AppError::not_found("Member", &id),
            CoreError::BookNotFound(id) => AppError::not_found("Book", &id),
            CoreError::InsufficientStock { .. } => {
                AppError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

/// Converts database errors to app errors.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => AppError::not_found(&entity, &id),
            DbError::InsufficientStock { .. } => {
                AppError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            DbError::UniqueViolation { .. } | DbError::ForeignKeyViolation { .. } => {
                AppError::new(ErrorCode::ValidationError, err.to_string())
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but keep the prompt message generic
                tracing::error!("Database query failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database transaction failed")
            }
            DbError::ConnectionFailed(_) | DbError::PoolExhausted => {
                AppError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                AppError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Terminal read/write failures.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::Internal, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: AppError = CoreError::MemberNotFound("M9".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Member not found: M9");

        let err: AppError = CoreError::InsufficientStock {
            book_id: "B1".to_string(),
            available: 3,
            requested: 5,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
    }

    #[test]
    fn test_db_error_mapping() {
        let err: AppError = DbError::not_found("Sale", "7").into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Sale not found: 7");
    }

    #[test]
    fn test_commit_failure_maps_to_generic_message() {
        // sqlx detail stays in the log; the prompt gets the category
        let err: AppError = DbError::TransactionFailed("disk I/O error".to_string()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database transaction failed");
    }
}
