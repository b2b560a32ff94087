//! Cryptographic functions for fieldseal
//!
//! Provides RSA key pair management, RSA-OAEP encryption of single values,
//! and the `ENC[...]` envelope that marks encrypted values inside documents.

pub mod cipher;
pub mod envelope;
pub mod keys;
pub mod secure_memory;

pub use cipher::{decrypt_field, encrypt_field, max_plaintext_len, DEFAULT_LABEL};
pub use envelope::{is_envelope, unwrap, wrap};
pub use keys::{load_private, load_public, KeyPair, DEFAULT_KEY_BITS, MIN_KEY_BITS};
pub use secure_memory::SecretBytes;
