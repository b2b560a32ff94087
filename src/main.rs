use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fieldseal::cli::{
    handle_config_command, handle_decrypt_command, handle_encrypt_command,
    handle_generate_command, DecryptArgs, EncryptArgs, GenerateArgs,
};
use fieldseal::config::Settings;

#[derive(Parser)]
#[command(
    name = "fieldseal",
    version,
    about = "Provide per-value encryption of sensitive data in JSON and YAML files",
    long_about = "fieldseal encrypts individual values inside JSON and YAML documents. \
                  Instead of encrypting a whole file and losing the ability to edit \
                  the non-sensitive parts, encrypted fields are marked as ENC[...] \
                  and decrypted in place when the document is read back."
)]
struct Cli {
    /// Config file (default is $HOME/.fieldseal/fieldseal.yaml)
    #[arg(long, global = true, env = "FIELDSEAL_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the public/private key pair used for encryption
    Generate(GenerateArgs),

    /// Encrypt strings or files with the public key
    Encrypt(EncryptArgs),

    /// Decrypt every encrypted field of a document with the private key
    Decrypt(DecryptArgs),

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    fieldseal::logging::init(&settings.logging.level)?;
    if let Some(file) = &settings.config_file {
        tracing::info!(file = %file.display(), "using config file");
    }

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Generate(args) => handle_generate_command(&settings, args, &mut stdout)?,
        Commands::Encrypt(args) => {
            handle_encrypt_command(&settings, args, &mut std::io::stdin().lock(), &mut stdout)?
        }
        Commands::Decrypt(args) => handle_decrypt_command(&settings, args, &mut stdout)?,
        Commands::Config => handle_config_command(&settings, &mut stdout)?,
    }

    Ok(())
}
