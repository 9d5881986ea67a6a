//! Structured error types for store operations.

use std::fmt;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation errors
    InvalidPosition,
    InvalidInput,

    // Persistence errors
    Storage,
}

/// Structured error for store operations.
#[derive(Debug)]
pub struct StoreError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl StoreError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors

    pub fn invalid_position(position: i64, len: usize) -> Self {
        Self::new(
            ErrorCode::InvalidPosition,
            format!("Invalid task number: {}", position),
        )
        .with_details(format!("list has {} task(s)", len))
    }

    pub fn invalid_input(input: &str) -> Self {
        Self::new(
            ErrorCode::InvalidInput,
            format!("Not a number: '{}'", input.trim()),
        )
    }

    pub fn storage(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::Storage, err.to_string())
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StoreError {}

// Allow using ? with anyhow errors by converting them
impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<StoreError>() {
            Ok(store_err) => store_err,
            Err(err) => StoreError::storage(format!("{:#}", err)),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_position_carries_code_and_details() {
        let err = StoreError::invalid_position(7, 2);
        assert_eq!(err.code, ErrorCode::InvalidPosition);
        assert!(err.message.contains('7'));
        assert_eq!(err.details.as_deref(), Some("list has 2 task(s)"));
    }

    #[test]
    fn anyhow_round_trip_preserves_store_error() {
        let err = StoreError::invalid_position(0, 0);
        let any: anyhow::Error = err.into();
        let back = StoreError::from(any);
        assert_eq!(back.code, ErrorCode::InvalidPosition);
    }

    #[test]
    fn foreign_anyhow_becomes_storage_error() {
        let any = anyhow::anyhow!("disk on fire");
        let err = StoreError::from(any);
        assert_eq!(err.code, ErrorCode::Storage);
        assert!(err.message.contains("disk on fire"));
    }
}
