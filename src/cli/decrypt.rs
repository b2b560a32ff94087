//! Decryption command
//!
//! Loads a JSON or YAML document, decrypts every envelope-marked field, and
//! prints the document in the same format.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::crypto::load_private;
use crate::document::{decrypt_values, DocumentFormat};
use crate::error::{FieldsealError, FieldsealResult};

/// Arguments for `fieldseal decrypt`
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Label the values were encrypted with
    #[arg(short, long)]
    pub label: Option<String>,

    /// Document format (detected from the file extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<DocumentFormat>,

    /// Document to decrypt
    pub file: PathBuf,
}

/// Handle the decrypt command
///
/// Nothing is written to `out` unless the whole document decrypted.
pub fn handle_decrypt_command<W: Write>(
    settings: &Settings,
    args: DecryptArgs,
    out: &mut W,
) -> FieldsealResult<()> {
    let format = match args.format {
        Some(format) => format,
        None => DocumentFormat::from_path(&args.file)?,
    };
    let label = args.label.as_deref().unwrap_or(&settings.label);

    let contents = std::fs::read_to_string(&args.file).map_err(|e| {
        FieldsealError::Io(format!("Failed to read {}: {}", args.file.display(), e))
    })?;
    let mut document = format.parse(&contents).map_err(|e| {
        tracing::error!(file = %args.file.display(), "cannot unmarshal file");
        e
    })?;

    let private_key = load_private(&settings.private_key_path()?)?;
    decrypt_values(&mut document, label, &private_key).map_err(|e| {
        tracing::error!(file = %args.file.display(), "cannot decrypt object");
        e
    })?;

    let rendered = format.render(&document)?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}
