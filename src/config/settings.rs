//! User settings for fieldseal
//!
//! Settings are read from a YAML file using the same camelCase keys the file
//! is written with:
//!
//! ```yaml
//! baseDir: $HOME/.fieldseal
//! encryptMethod: rsa
//! publicKey: public.pem
//! privateKey: private.pem
//! label: label
//! keyBits: 2048
//! logging:
//!   level: warn
//! ```
//!
//! Every field is optional. The loaded value is built once at startup and
//! passed by reference to everything that needs it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::paths::{self, FieldsealPaths, BASE_DIR_ENV, DEFAULT_BASE_DIR};
use crate::crypto::{DEFAULT_KEY_BITS, DEFAULT_LABEL, MIN_KEY_BITS};
use crate::error::{FieldsealError, FieldsealResult};

/// Field encryption algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EncryptMethod {
    /// RSA-OAEP with SHA-256
    #[default]
    Rsa,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// Minimum level written to stderr (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// User settings for fieldseal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Directory holding keys; relative key paths resolve against it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,

    /// Encryption algorithm
    #[serde(default)]
    pub encrypt_method: EncryptMethod,

    /// Public key file
    #[serde(default = "default_public_key")]
    pub public_key: String,

    /// Private key file
    #[serde(default = "default_private_key")]
    pub private_key: String,

    /// Label bound into every encryption unless overridden
    #[serde(default = "default_label")]
    pub label: String,

    /// Modulus size for newly generated keys
    #[serde(default = "default_key_bits")]
    pub key_bits: usize,

    /// Logging configuration
    #[serde(default)]
    pub logging: LogSettings,

    /// Settings file this value was read from
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

fn default_public_key() -> String {
    "public.pem".to_string()
}

fn default_private_key() -> String {
    "private.pem".to_string()
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

fn default_key_bits() -> usize {
    DEFAULT_KEY_BITS
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_dir: None,
            encrypt_method: EncryptMethod::default(),
            public_key: default_public_key(),
            private_key: default_private_key(),
            label: default_label(),
            key_bits: default_key_bits(),
            logging: LogSettings::default(),
            config_file: None,
        }
    }
}

impl Settings {
    /// Load settings, searching the standard locations when `explicit` is None
    ///
    /// A file that does not set `baseDir` uses its own directory as the base.
    /// `FIELDSEAL_BASE_DIR` overrides whatever the file says.
    pub fn load(explicit: Option<&Path>) -> FieldsealResult<Self> {
        let mut settings = match paths::find_config_file(explicit)? {
            Some(file) => {
                let mut settings = Self::from_file(&file)?;
                if settings.base_dir.is_none() {
                    settings.base_dir = file.parent().map(|dir| dir.display().to_string());
                }
                settings.config_file = Some(file);
                settings
            }
            None => Self::default(),
        };

        if let Ok(dir) = std::env::var(BASE_DIR_ENV) {
            settings.base_dir = Some(dir);
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a specific YAML file
    pub fn from_file(path: &Path) -> FieldsealResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FieldsealError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = if contents.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|e| {
                FieldsealError::Config(format!(
                    "Failed to parse settings file {}: {}",
                    path.display(),
                    e
                ))
            })?
        };

        Ok(settings)
    }

    /// Reject values no command could work with
    pub fn validate(&self) -> FieldsealResult<()> {
        if self.key_bits < MIN_KEY_BITS {
            return Err(FieldsealError::Config(format!(
                "keyBits must be at least {}, got {}",
                MIN_KEY_BITS, self.key_bits
            )));
        }
        if self.public_key.is_empty() || self.private_key.is_empty() {
            return Err(FieldsealError::Config(
                "publicKey and privateKey must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Resolve the base directory and key locations
    pub fn paths(&self) -> FieldsealResult<FieldsealPaths> {
        FieldsealPaths::new(self.base_dir.as_deref().unwrap_or(DEFAULT_BASE_DIR))
    }

    /// Absolute path of the public key file
    pub fn public_key_path(&self) -> FieldsealResult<PathBuf> {
        Ok(self.paths()?.key_file(&self.public_key))
    }

    /// Absolute path of the private key file
    pub fn private_key_path(&self) -> FieldsealResult<PathBuf> {
        Ok(self.paths()?.key_file(&self.private_key))
    }

    /// Render the settings as YAML
    pub fn to_yaml(&self) -> FieldsealResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| FieldsealError::Config(format!("could not marshal configuration: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.encrypt_method, EncryptMethod::Rsa);
        assert_eq!(settings.public_key, "public.pem");
        assert_eq!(settings.private_key, "private.pem");
        assert_eq!(settings.label, "label");
        assert_eq!(settings.key_bits, 2048);
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("fieldseal.yaml");
        std::fs::write(&file, "privateKey: /secure/private.pem\nlogging:\n  level: debug\n").unwrap();

        let settings = Settings::from_file(&file).unwrap();
        assert_eq!(settings.private_key, "/secure/private.pem");
        assert_eq!(settings.public_key, "public.pem");
        assert_eq!(settings.logging.level, "debug");
        assert!(settings.base_dir.is_none());
    }

    #[test]
    fn test_load_defaults_base_dir_to_file_dir() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("custom.yaml");
        std::fs::write(&file, "label: payments\n").unwrap();

        let settings = Settings::load(Some(file.as_path())).unwrap();
        assert_eq!(settings.label, "payments");
        assert_eq!(settings.config_file.as_deref(), Some(file.as_path()));

        // FIELDSEAL_BASE_DIR may be set by the environment running the tests
        if std::env::var(BASE_DIR_ENV).is_err() {
            assert_eq!(
                settings.public_key_path().unwrap(),
                temp_dir.path().join("public.pem")
            );
        }
    }

    #[test]
    fn test_unknown_encrypt_method_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("fieldseal.yaml");
        std::fs::write(&file, "encryptMethod: des\n").unwrap();

        let err = Settings::from_file(&file).unwrap_err();
        assert!(matches!(err, FieldsealError::Config(_)));
    }

    #[test]
    fn test_validate_key_bits() {
        let settings = Settings {
            key_bits: 512,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_key_paths() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings {
            base_dir: Some(temp_dir.path().display().to_string()),
            private_key: "/opt/keys/private.pem".into(),
            ..Settings::default()
        };

        assert_eq!(
            settings.public_key_path().unwrap(),
            temp_dir.path().join("public.pem")
        );
        assert_eq!(
            settings.private_key_path().unwrap(),
            PathBuf::from("/opt/keys/private.pem")
        );
    }

    #[test]
    fn test_yaml_round_trip() {
        let settings = Settings {
            base_dir: Some("/srv/fieldseal".into()),
            ..Settings::default()
        };
        let yaml = settings.to_yaml().unwrap();
        assert!(yaml.contains("baseDir: /srv/fieldseal"));
        assert!(yaml.contains("encryptMethod: rsa"));

        let parsed: Settings = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.base_dir.as_deref(), Some("/srv/fieldseal"));
        assert_eq!(parsed.key_bits, settings.key_bits);
    }
}
