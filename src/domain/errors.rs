//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

use sea_orm::SqlErr;

#[derive(Debug)]
pub enum DomainError {
    /// Resource not found
    NotFound,
    /// Validation error with message
    Validation(String),
    /// A uniqueness constraint rejected the write
    Conflict(String),
    /// Database/persistence error
    Database(String),
    /// Generic internal error
    Internal(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                DomainError::Validation(format!("referenced record does not exist ({})", msg))
            }
            _ => DomainError::Database(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl DomainError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, DomainError::Conflict(_))
    }
}

/// Reject blank values for columns the schema declares NOT NULL without a default.
pub fn require(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{} is required", field)));
    }
    Ok(())
}
