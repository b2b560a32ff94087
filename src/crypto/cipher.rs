//! RSA-OAEP field cipher
//!
//! Each value is encrypted on its own with RSA-OAEP, SHA-256 as both the
//! digest and the MGF1 hash, and the caller's label bound in as associated
//! data. A value encrypted under one label will not decrypt under another.

use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::error::{FieldsealError, FieldsealResult};

/// Label used when the caller does not pick one
pub const DEFAULT_LABEL: &str = "label";

fn padding(label: &str) -> Oaep {
    Oaep::new_with_label::<Sha256, _>(label)
}

/// Largest plaintext, in bytes, that fits in one OAEP block for `key`
///
/// This is `k - 2h - 2` for a `k` byte modulus and `h` byte digest.
pub fn max_plaintext_len(key: &impl PublicKeyParts) -> usize {
    key.size()
        .saturating_sub(2 * <Sha256 as Digest>::output_size() + 2)
}

/// Encrypt a single value
///
/// Output is randomized; encrypting the same input twice yields different
/// ciphertexts. The result is always exactly as long as the modulus.
pub fn encrypt_field(
    plaintext: &[u8],
    label: &str,
    public_key: &RsaPublicKey,
) -> FieldsealResult<Vec<u8>> {
    let max = max_plaintext_len(public_key);
    if plaintext.len() > max {
        tracing::warn!(len = plaintext.len(), max, "plaintext exceeds OAEP capacity");
        return Err(FieldsealError::MessageTooLong {
            len: plaintext.len(),
            max,
        });
    }

    public_key
        .encrypt(&mut OsRng, padding(label), plaintext)
        .map_err(|e| {
            tracing::error!("could not encrypt data");
            FieldsealError::Encryption(e.to_string())
        })
}

/// Decrypt a single value
///
/// Fails if the label differs from the one used at encryption time, the
/// ciphertext is longer than the modulus, or padding does not verify. No
/// output is produced on failure.
pub fn decrypt_field(
    ciphertext: &[u8],
    label: &str,
    private_key: &RsaPrivateKey,
) -> FieldsealResult<Zeroizing<Vec<u8>>> {
    let size = private_key.size();
    if ciphertext.len() > size {
        return Err(FieldsealError::Decryption(format!(
            "ciphertext is {} bytes but the key modulus is {} bytes",
            ciphertext.len(),
            size
        )));
    }

    private_key
        .decrypt_blinded(&mut OsRng, padding(label), ciphertext)
        .map(Zeroizing::new)
        .map_err(|_| {
            tracing::error!("could not decrypt data");
            FieldsealError::Decryption("invalid key, label, or corrupted ciphertext".to_string())
        })
}
