//! Recursive decryption of envelope-marked fields
//!
//! The walker visits every key of a document depth-first. String values that
//! start with `ENC[` are decrypted and replaced with their plaintext; nested
//! mappings are recursed into. Everything else is left alone, including
//! sequences: an envelope inside an array element stays encrypted.

use rsa::RsaPrivateKey;
use serde_json::Value;
use zeroize::Zeroizing;

use super::Document;
use crate::crypto::{decrypt_field, envelope};
use crate::error::{FieldsealError, FieldsealResult};

/// Decrypt every envelope in `document`
///
/// On error `document` is left exactly as it was; a half-decrypted document
/// is never observable. The error names the dotted key path that failed.
pub fn decrypt_values(
    document: &mut Document,
    label: &str,
    private_key: &RsaPrivateKey,
) -> FieldsealResult<()> {
    let mut working = document.clone();
    let count = decrypt_mapping(&mut working, "", label, private_key)?;

    tracing::debug!(fields = count, "decrypted document");
    *document = working;
    Ok(())
}

fn decrypt_mapping(
    mapping: &mut Document,
    prefix: &str,
    label: &str,
    private_key: &RsaPrivateKey,
) -> FieldsealResult<usize> {
    let mut count = 0;

    for (key, value) in mapping.iter_mut() {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::String(text) if envelope::is_envelope(text.as_str()) => {
                let plaintext = decrypt_text(text, label, private_key).map_err(|e| {
                    tracing::warn!(key = %path, error = %e, "cannot decrypt field");
                    FieldsealError::at_field(path.as_str(), e)
                })?;
                *text = plaintext;
                count += 1;
            }
            Value::Object(nested) => {
                tracing::debug!(key = %path, "looping on key");
                count += decrypt_mapping(nested, &path, label, private_key)?;
            }
            _ => {}
        }
    }

    Ok(count)
}

fn decrypt_text(text: &str, label: &str, private_key: &RsaPrivateKey) -> FieldsealResult<String> {
    let ciphertext = envelope::unwrap(text)?;
    let plaintext = decrypt_field(&ciphertext, label, private_key)?;

    String::from_utf8(plaintext.to_vec()).map_err(|e| {
        drop(Zeroizing::new(e.into_bytes()));
        FieldsealError::Decryption("decrypted value is not valid UTF-8 text".to_string())
    })
}
