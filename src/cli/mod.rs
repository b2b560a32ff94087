//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the encryption core.

pub mod config;
pub mod decrypt;
pub mod encrypt;
pub mod generate;

pub use config::handle_config_command;
pub use decrypt::{handle_decrypt_command, DecryptArgs};
pub use encrypt::{handle_encrypt_command, EncryptArgs};
pub use generate::{handle_generate_command, GenerateArgs};
