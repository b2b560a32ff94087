//! Structured documents and field-level processing
//!
//! A [`Document`] is a string-keyed mapping whose values are the usual JSON
//! value kinds. Decryption walks a whole document; encryption works on a flat
//! list of values the caller picked out.

pub mod format;
pub mod seal;
pub mod walker;

pub use format::DocumentFormat;
pub use seal::encrypt_values;
pub use walker::decrypt_values;

/// A string-keyed mapping of values
pub type Document = serde_json::Map<String, serde_json::Value>;
