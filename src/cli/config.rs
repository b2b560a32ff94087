//! Configuration command
//!
//! Prints the effective settings, including command-line and environment
//! overrides, so they can be checked before running other commands.

use std::io::Write;

use crate::config::Settings;
use crate::error::FieldsealResult;

/// Handle the config command
pub fn handle_config_command<W: Write>(settings: &Settings, out: &mut W) -> FieldsealResult<()> {
    tracing::info!("marshaling output as yaml");
    let yaml = settings.to_yaml()?;

    writeln!(out, "configuration")?;
    writeln!(out)?;
    match &settings.config_file {
        Some(file) => writeln!(out, "# config file: {}", file.display())?,
        None => writeln!(out, "# config file: none (using defaults)")?,
    }
    writeln!(out, "# base dir:    {}", settings.paths()?.base_dir().display())?;
    writeln!(out, "# public key:  {}", settings.public_key_path()?.display())?;
    writeln!(out, "# private key: {}", settings.private_key_path()?.display())?;
    writeln!(out, "---")?;
    write!(out, "{}", yaml)?;
    Ok(())
}
