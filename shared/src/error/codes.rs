//! Error codes for the café directory
//!
//! Codes are grouped by range:
//! - 0xxx: General errors
//! - 2xxx: Permission errors
//! - 9xxx: System errors

use std::fmt;

/// Unified error code enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Required field missing
    RequiredField = 7,

    // ==================== 2xxx: Permission ====================
    /// Access key missing or wrong
    PermissionDenied = 2001,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Numeric value of the code
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::RequiredField => "Required field missing",
            Self::PermissionDenied => {
                "Sorry, that's not allowed. Make sure you have the correct api_key."
            }
            Self::DatabaseError => "Database error",
        }
    }

    /// True for 9xxx codes, whose details must not reach the client
    pub fn is_system(&self) -> bool {
        self.code() >= 9000
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(ErrorCode::NotFound.to_string(), "E0003");
        assert_eq!(ErrorCode::PermissionDenied.to_string(), "E2001");
    }

    #[test]
    fn test_system_range() {
        assert!(ErrorCode::DatabaseError.is_system());
        assert!(!ErrorCode::NotFound.is_system());
        assert!(!ErrorCode::PermissionDenied.is_system());
    }
}
