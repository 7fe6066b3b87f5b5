//! Error types for message construction.

use thiserror::Error;

/// Errors that can occur while building an access message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// A field value lies outside its protocol-defined range.
    #[error("invalid argument: {field} must be between {min} and {max}, got {value}")]
    InvalidArgument {
        /// Name of the offending field.
        field: &'static str,
        /// Value that was supplied.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// Application key has the wrong length.
    #[error("invalid application key: expected {expected} bytes, got {actual}")]
    KeyFormat {
        /// Required key length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Application key string is not valid hex.
    #[error("invalid application key hex: {0}")]
    KeyHex(String),

    /// No application key is bound to the requested index.
    #[error("no application key at index {0}")]
    UnknownAppKey(u16),

    /// Raw value does not match any access-layer opcode format.
    #[error("invalid opcode: 0x{0:X}")]
    InvalidOpcode(u32),
}

impl MessageError {
    /// Create an invalid argument error.
    pub fn invalid_argument(field: &'static str, value: i64, min: i64, max: i64) -> Self {
        MessageError::InvalidArgument {
            field,
            value,
            min,
            max,
        }
    }
}

/// Result type for message operations.
pub type Result<T> = std::result::Result<T, MessageError>;

/// Returns `value` if it lies in `min..=max`.
pub(crate) fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<i64> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(MessageError::invalid_argument(field, value, min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MessageError::invalid_argument("lightness", 65536, 0, 65535);
        assert_eq!(
            err.to_string(),
            "invalid argument: lightness must be between 0 and 65535, got 65536"
        );

        let err = MessageError::KeyFormat {
            expected: 16,
            actual: 15,
        };
        assert!(err.to_string().contains("expected 16 bytes, got 15"));
    }

    #[test]
    fn test_check_range_bounds() {
        assert_eq!(check_range("tid", 0, 0, 255), Ok(0));
        assert_eq!(check_range("tid", 255, 0, 255), Ok(255));
        assert!(matches!(
            check_range("tid", 256, 0, 255),
            Err(MessageError::InvalidArgument { field: "tid", value: 256, .. })
        ));
        assert!(check_range("tid", -1, 0, 255).is_err());
    }
}
