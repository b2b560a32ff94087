//! Encryption of caller-supplied values
//!
//! The encrypt direction does not walk a document. The caller names every
//! sensitive value explicitly and gets back a small mapping keyed by the
//! label, ready to be pasted into a configuration file.

use rsa::RsaPublicKey;
use serde_json::Value;

use super::Document;
use crate::crypto::{encrypt_field, wrap, SecretBytes};
use crate::error::{FieldsealError, FieldsealResult};

/// Encrypt each value under `label`
///
/// A single value maps `label` to one envelope string; several values map it
/// to a sequence of envelopes in input order. Any failure discards all output.
pub fn encrypt_values(
    values: &[SecretBytes],
    label: &str,
    public_key: &RsaPublicKey,
) -> FieldsealResult<Document> {
    let mut envelopes = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            encrypt_field(value.as_bytes(), label, public_key)
                .map(|ciphertext| Value::String(wrap(&ciphertext)))
                .map_err(|e| {
                    tracing::error!(index, error = %e, "encryption failed");
                    e
                })
        })
        .collect::<FieldsealResult<Vec<Value>>>()?;

    let entry = match envelopes.len() {
        0 => {
            return Err(FieldsealError::InvalidInput(
                "no values supplied for encryption".to_string(),
            ))
        }
        1 => envelopes.remove(0),
        _ => Value::Array(envelopes),
    };

    let mut document = Document::new();
    document.insert(label.to_string(), entry);
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::test_support::key_pair;
    use crate::crypto::{decrypt_field, is_envelope, unwrap};

    fn open(envelope: &Value, label: &str) -> Vec<u8> {
        let text = envelope.as_str().unwrap();
        assert!(is_envelope(text));
        decrypt_field(&unwrap(text).unwrap(), label, key_pair().private())
            .unwrap()
            .to_vec()
    }

    #[test]
    fn test_single_value() {
        let doc = encrypt_values(&[SecretBytes::from("hunter2")], "db", key_pair().public()).unwrap();

        assert_eq!(doc.len(), 1);
        assert_eq!(open(&doc["db"], "db"), b"hunter2");
    }

    #[test]
    fn test_multiple_values_keep_order() {
        let values: Vec<SecretBytes> = vec!["one".into(), "two".into(), "three".into()];
        let doc = encrypt_values(&values, "tokens", key_pair().public()).unwrap();

        let items = doc["tokens"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(open(&items[0], "tokens"), b"one");
        assert_eq!(open(&items[1], "tokens"), b"two");
        assert_eq!(open(&items[2], "tokens"), b"three");
    }

    #[test]
    fn test_no_values() {
        let err = encrypt_values(&[], "db", key_pair().public()).unwrap_err();
        assert!(matches!(err, FieldsealError::InvalidInput(_)));
    }

    #[test]
    fn test_oversized_value_discards_everything() {
        let values: Vec<SecretBytes> = vec!["ok".into(), SecretBytes::new(vec![b'x'; 200])];
        let err = encrypt_values(&values, "db", key_pair().public()).unwrap_err();
        assert!(err.is_message_too_long());
    }
}
