//! # Submission Error Types
//!
//! The two failure kinds of the order submission workflow.
//!
//! ## Error Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Step 1 customer lookup fails  → SubmitError::Lookup                   │
//! │  Step 2 order insert fails     → SubmitError::Insert                   │
//! │  Step 3 item batch fails       → SubmitError::Insert                   │
//! │                                                                         │
//! │  Both kinds surface identically: a destructive toast showing the raw   │
//! │  message. The variant split exists so callers and tests can tell       │
//! │  "no customer record" apart from "write rejected".                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Order submission failures.
///
/// Display output is the raw message because that is exactly what the
/// toast shows; no structured recovery happens above this.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Customer record missing or unreachable (step 1).
    #[error("{0}")]
    Lookup(String),

    /// Order or order-item write rejected by the backend (steps 2-3).
    #[error("{0}")]
    Insert(String),
}

impl SubmitError {
    /// Creates a lookup error from anything displayable.
    pub fn lookup(message: impl ToString) -> Self {
        SubmitError::Lookup(message.to_string())
    }

    /// Creates an insert error from anything displayable.
    pub fn insert(message: impl ToString) -> Self {
        SubmitError::Insert(message.to_string())
    }
}

/// Result type for submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_message() {
        let err = SubmitError::lookup("No customer record for this account");
        assert_eq!(err.to_string(), "No customer record for this account");

        let err = SubmitError::insert("FOREIGN KEY constraint failed");
        assert_eq!(err.to_string(), "FOREIGN KEY constraint failed");
    }
}
