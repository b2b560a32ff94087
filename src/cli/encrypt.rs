//! Encryption command
//!
//! Encrypts values named on the command line (file contents, or literal
//! strings with `--string`) and prints a mapping of the label to the
//! resulting envelopes. With no arguments a single value is read from stdin.

use std::io::{Read, Write};

use clap::Args;

use crate::config::Settings;
use crate::crypto::{load_public, SecretBytes};
use crate::document::{encrypt_values, DocumentFormat};
use crate::error::{FieldsealError, FieldsealResult};

/// Arguments for `fieldseal encrypt`
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Label to use for each encrypted string
    #[arg(short, long)]
    pub label: Option<String>,

    /// Encrypt arguments as strings instead of file paths
    #[arg(short, long)]
    pub string: bool,

    /// Output data format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: DocumentFormat,

    /// Files to encrypt (or strings with --string); reads stdin when omitted
    pub values: Vec<String>,
}

/// Handle the encrypt command
///
/// Nothing is written to `out` unless every value encrypted successfully.
pub fn handle_encrypt_command<R: Read, W: Write>(
    settings: &Settings,
    args: EncryptArgs,
    input: &mut R,
    out: &mut W,
) -> FieldsealResult<()> {
    let label = args.label.as_deref().unwrap_or(&settings.label);
    let values = collect_values(&args, input)?;

    let public_key = load_public(&settings.public_key_path()?)?;
    let document = encrypt_values(&values, label, &public_key)?;

    let rendered = args.format.render(&document)?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

/// Gather the raw values to encrypt
fn collect_values<R: Read>(args: &EncryptArgs, input: &mut R) -> FieldsealResult<Vec<SecretBytes>> {
    if args.values.is_empty() {
        if args.string {
            return Err(FieldsealError::InvalidInput(
                "must specify at least one argument with --string flag".to_string(),
            ));
        }

        let mut buffer = Vec::new();
        input.read_to_end(&mut buffer).map_err(|e| {
            tracing::error!("could not read from stdin");
            FieldsealError::Io(format!("Failed to read stdin: {}", e))
        })?;
        return Ok(vec![SecretBytes::new(buffer)]);
    }

    args.values
        .iter()
        .map(|arg| {
            if args.string {
                Ok(SecretBytes::from(arg.as_str()))
            } else {
                std::fs::read(arg).map(SecretBytes::new).map_err(|e| {
                    tracing::error!(arg = %arg, "could not parse arg");
                    FieldsealError::Io(format!("Failed to read {}: {}", arg, e))
                })
            }
        })
        .collect()
}
