//! Custom error types for fieldseal
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant is terminal for the operation
//! that produced it; nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for fieldseal operations
#[derive(Error, Debug)]
pub enum FieldsealError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A key file does not exist at the configured path
    #[error("Key file not found: {}", path.display())]
    KeyFileNotFound { path: PathBuf },

    /// Key generation failed (entropy source or key size)
    #[error("Key generation error: {0}")]
    KeyGeneration(String),

    /// Key file exists but does not hold a usable key
    #[error("Key decode error in {}: {reason}", path.display())]
    KeyDecode { path: PathBuf, reason: String },

    /// Encryption primitive failures
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Plaintext exceeds what a single OAEP block can carry
    #[error("Encryption error: message too long ({len} bytes, maximum is {max})")]
    MessageTooLong { len: usize, max: usize },

    /// Bad padding, label mismatch, oversized ciphertext
    #[error("Decryption error: {0}")]
    Decryption(String),

    /// Malformed `ENC[...]` wrapper or invalid base64
    #[error("Envelope format error: {0}")]
    EnvelopeFormat(String),

    /// Document could not be parsed or produced
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Document format could not be determined
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Caller supplied unusable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A field inside a document failed; `path` is the dotted key path
    #[error("Field '{path}': {source}")]
    Field {
        path: String,
        #[source]
        source: Box<FieldsealError>,
    },
}

impl FieldsealError {
    /// Attach a document key path to an error raised while processing a field
    pub fn at_field(path: impl Into<String>, source: FieldsealError) -> Self {
        Self::Field {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Strip any field-path wrappers and return the underlying error
    pub fn root_cause(&self) -> &FieldsealError {
        match self {
            Self::Field { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Check if this is (or wraps) a decryption error
    pub fn is_decryption(&self) -> bool {
        matches!(self.root_cause(), Self::Decryption(_))
    }

    /// Check if this is (or wraps) an envelope format error
    pub fn is_envelope_format(&self) -> bool {
        matches!(self.root_cause(), Self::EnvelopeFormat(_))
    }

    /// Check if this is a plaintext size error
    pub fn is_message_too_long(&self) -> bool {
        matches!(self.root_cause(), Self::MessageTooLong { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FieldsealError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FieldsealError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for FieldsealError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for fieldseal operations
pub type FieldsealResult<T> = Result<T, FieldsealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FieldsealError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_message_too_long_display() {
        let err = FieldsealError::MessageTooLong { len: 100, max: 62 };
        assert_eq!(
            err.to_string(),
            "Encryption error: message too long (100 bytes, maximum is 62)"
        );
        assert!(err.is_message_too_long());
    }

    #[test]
    fn test_field_wrapper_keeps_root_cause() {
        let inner = FieldsealError::Decryption("bad padding".into());
        let outer = FieldsealError::at_field("b.c", FieldsealError::at_field("c", inner));

        assert!(outer.is_decryption());
        assert!(!outer.is_envelope_format());
        assert!(outer.to_string().starts_with("Field 'b.c'"));
    }

    #[test]
    fn test_key_file_not_found_display() {
        let err = FieldsealError::KeyFileNotFound {
            path: PathBuf::from("/tmp/private.pem"),
        };
        assert_eq!(err.to_string(), "Key file not found: /tmp/private.pem");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FieldsealError = io_err.into();
        assert!(matches!(err, FieldsealError::Io(_)));
    }
}
