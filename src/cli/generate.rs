//! Key generation command
//!
//! Writes a fresh key pair to the configured public and private key paths.

use std::io::Write;
use std::path::Path;

use clap::Args;

use crate::config::Settings;
use crate::crypto::KeyPair;
use crate::error::FieldsealResult;

/// Arguments for `fieldseal generate`
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Overwrite existing key files
    #[arg(short, long)]
    pub force: bool,

    /// Modulus size in bits (defaults to the configured keyBits)
    #[arg(short, long)]
    pub bits: Option<usize>,
}

/// Handle the generate command
///
/// Refuses to touch existing key files unless `--force` is given; the refusal
/// is reported on `out` and is not an error.
pub fn handle_generate_command<W: Write>(
    settings: &Settings,
    args: GenerateArgs,
    out: &mut W,
) -> FieldsealResult<()> {
    tracing::info!(force = args.force, "overwriting of existing key files");

    let paths = settings.paths()?;
    let public_path = settings.public_key_path()?;
    let private_path = settings.private_key_path()?;

    for path in [&public_path, &private_path] {
        if refuse_overwrite(path, args.force, out)? {
            return Ok(());
        }
    }

    paths.ensure_base_dir()?;

    let bits = args.bits.unwrap_or(settings.key_bits);
    let pair = KeyPair::generate(bits)?;
    pair.persist(&public_path, &private_path)?;

    writeln!(out, "Generated {}-bit RSA key pair", bits)?;
    writeln!(out, "  Public key:  {}", public_path.display())?;
    writeln!(out, "  Private key: {}", private_path.display())?;
    Ok(())
}

fn refuse_overwrite<W: Write>(path: &Path, force: bool, out: &mut W) -> FieldsealResult<bool> {
    if path.exists() && !force {
        writeln!(out, "cannot overwrite existing file: {}", path.display())?;
        writeln!(out, "use --force if necessary.")?;
        return Ok(true);
    }
    Ok(false)
}
