//! fieldseal - field-level encryption for JSON and YAML documents
//!
//! Sensitive string values inside a structured document are replaced with an
//! `ENC[<base64>]` envelope holding RSA-OAEP ciphertext, while the rest of the
//! document stays readable and editable. Decryption walks the document and
//! restores every marked field.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings file and key path resolution
//! - `error`: Custom error types
//! - `crypto`: Key pairs, the field cipher, and the envelope codec
//! - `document`: Document formats, the decrypting walker, and value sealing
//! - `cli`: Command handlers
//! - `logging`: Diagnostic output setup
//!
//! # Example
//!
//! ```rust,ignore
//! use fieldseal::crypto::{encrypt_field, wrap, KeyPair};
//! use fieldseal::document::decrypt_values;
//!
//! let pair = KeyPair::generate(2048)?;
//! let sealed = wrap(&encrypt_field(b"hunter2", "db", pair.public())?);
//! let mut doc = serde_json::json!({ "password": sealed });
//! decrypt_values(doc.as_object_mut().unwrap(), "db", pair.private())?;
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod document;
pub mod error;
pub mod logging;

pub use error::{FieldsealError, FieldsealResult};
