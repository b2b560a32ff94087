//! Textual ciphertext envelope
//!
//! Ciphertext is carried inside documents as `ENC[<base64>]`, using the
//! standard RFC 4648 alphabet with padding, on a single line.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{FieldsealError, FieldsealResult};

/// Marker that opens every envelope
pub const ENVELOPE_PREFIX: &str = "ENC[";

/// Marker that closes every envelope
pub const ENVELOPE_SUFFIX: &str = "]";

/// Wrap raw ciphertext bytes in an envelope
pub fn wrap(ciphertext: &[u8]) -> String {
    format!(
        "{}{}{}",
        ENVELOPE_PREFIX,
        STANDARD.encode(ciphertext),
        ENVELOPE_SUFFIX
    )
}

/// Check whether a string is marked as an envelope
///
/// Only the prefix is inspected. A value such as `ENC[abc` is classified as an
/// envelope here and then rejected by [`unwrap`], so it surfaces as an error
/// instead of passing through as plain text.
pub fn is_envelope(value: &str) -> bool {
    value.starts_with(ENVELOPE_PREFIX)
}

/// Strip the envelope markers and decode the ciphertext
pub fn unwrap(value: &str) -> FieldsealResult<Vec<u8>> {
    if value.len() < ENVELOPE_PREFIX.len() + ENVELOPE_SUFFIX.len() {
        return Err(FieldsealError::EnvelopeFormat(format!(
            "value too short to be an envelope ({} bytes)",
            value.len()
        )));
    }

    let interior = value
        .strip_prefix(ENVELOPE_PREFIX)
        .and_then(|rest| rest.strip_suffix(ENVELOPE_SUFFIX))
        .ok_or_else(|| {
            FieldsealError::EnvelopeFormat("value is not wrapped in ENC[...]".to_string())
        })?;

    STANDARD
        .decode(interior)
        .map_err(|e| FieldsealError::EnvelopeFormat(format!("invalid base64 payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_format() {
        assert_eq!(wrap(b"hello"), "ENC[aGVsbG8=]");
        assert_eq!(wrap(b""), "ENC[]");
    }

    #[test]
    fn test_wrap_unwrap() {
        let ciphertext: Vec<u8> = (0..=255).collect();
        let wrapped = wrap(&ciphertext);

        assert!(is_envelope(&wrapped));
        assert!(!wrapped.contains('\n'));
        assert_eq!(unwrap(&wrapped).unwrap(), ciphertext);
    }

    #[test]
    fn test_is_envelope_only_checks_prefix() {
        assert!(is_envelope("ENC[abc"));
        assert!(is_envelope("ENC["));
        assert!(!is_envelope("enc[abc]"));
        assert!(!is_envelope(" ENC[abc]"));
        assert!(!is_envelope("plain"));
    }

    #[test]
    fn test_unwrap_invalid_base64() {
        let err = unwrap("ENC[not-valid-base64]").unwrap_err();
        assert!(err.is_envelope_format());
    }

    #[test]
    fn test_unwrap_missing_suffix() {
        let err = unwrap("ENC[aGVsbG8=").unwrap_err();
        assert!(err.is_envelope_format());
    }

    #[test]
    fn test_unwrap_too_short() {
        assert!(unwrap("ENC").unwrap_err().is_envelope_format());
        assert!(unwrap("").unwrap_err().is_envelope_format());
    }

    #[test]
    fn test_unwrap_empty_interior() {
        assert!(unwrap("ENC[]").unwrap().is_empty());
    }
}
