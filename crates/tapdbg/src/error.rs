use thiserror::Error;

use crate::attribute::AttributeKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid invocation: expected `{expected}`, got [{args}]")]
    InvalidInvocation { expected: String, args: String },

    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: AttributeKind,
        actual: AttributeKind,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {len} bytes of target memory at address {address:#x}: {message}")]
    Tap {
        address: u64,
        len: usize,
        message: String,
    },

    #[error("Result length mismatch: expected {expected} bytes, got {actual}")]
    ResultLength { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if this error came from the tap rather than from the invocation
    pub fn is_tap_failure(&self) -> bool {
        matches!(self, Error::Tap { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.is_not_found());

        let other_io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err2 = Error::Io(other_io_err);
        assert!(!err2.is_not_found());
    }

    #[test]
    fn test_tap_error_message() {
        let err = Error::Tap {
            address: 0xfffff004,
            len: 16,
            message: "unmapped".to_string(),
        };
        assert!(err.is_tap_failure());
        assert_eq!(
            err.to_string(),
            "Failed to read 16 bytes of target memory at address 0xfffff004: unmapped"
        );
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = Error::TypeMismatch {
            expected: AttributeKind::UInt64,
            actual: AttributeKind::String,
        };
        assert_eq!(err.to_string(), "Type mismatch: expected uint64, got string");
    }
}
