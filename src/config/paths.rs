//! Path management for fieldseal
//!
//! Resolves the base directory that holds the key files and the optional
//! `fieldseal.yaml` settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `FIELDSEAL_BASE_DIR` environment variable (if set)
//! 2. `baseDir` from the settings file, or the directory holding that file
//! 3. `$HOME/.fieldseal`
//!
//! Key paths that are not absolute are taken relative to the base directory.

use std::path::{Path, PathBuf};

use crate::error::{FieldsealError, FieldsealResult};

/// Environment variable that overrides the base directory
pub const BASE_DIR_ENV: &str = "FIELDSEAL_BASE_DIR";

/// Base directory used when nothing else is configured
pub const DEFAULT_BASE_DIR: &str = "$HOME/.fieldseal";

/// System-wide directory searched for a settings file
pub const SYSTEM_CONFIG_DIR: &str = "/etc/fieldseal";

/// Name of the settings file
pub const CONFIG_FILE_NAME: &str = "fieldseal.yaml";

/// Manages all paths used by fieldseal
#[derive(Debug, Clone)]
pub struct FieldsealPaths {
    /// Directory holding keys and settings
    base_dir: PathBuf,
}

impl FieldsealPaths {
    /// Create paths rooted at a configured base directory
    ///
    /// The value may start with `~`, `$HOME`, or another `$VAR` and may be
    /// relative to the current directory.
    pub fn new(base_dir: &str) -> FieldsealResult<Self> {
        Ok(Self {
            base_dir: expand_path(base_dir)?,
        })
    }

    /// Create paths with an already resolved base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Resolve a key file name against the base directory
    pub fn key_file(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Create the base directory if it does not exist
    ///
    /// New directories are created readable by the owner only.
    pub fn ensure_base_dir(&self) -> FieldsealResult<()> {
        if self.base_dir.is_dir() {
            tracing::debug!(base_dir = %self.base_dir.display(), "base_dir exists. skipping.");
            return Ok(());
        }

        tracing::info!(base_dir = %self.base_dir.display(), "base_dir does not exist. creating.");
        let mut builder = std::fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o700);
        }

        builder.create(&self.base_dir).map_err(|e| {
            tracing::error!(base_dir = %self.base_dir.display(), "cannot create base_dir.");
            FieldsealError::Io(format!("Failed to create base directory: {}", e))
        })
    }
}

/// Locate the settings file to read, if any
///
/// An explicitly requested file must exist. Otherwise the default base
/// directory and then [`SYSTEM_CONFIG_DIR`] are searched.
pub fn find_config_file(explicit: Option<&Path>) -> FieldsealResult<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(FieldsealError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let default_dir = match std::env::var(BASE_DIR_ENV) {
        Ok(dir) => expand_path(&dir)?,
        Err(_) => expand_path(DEFAULT_BASE_DIR)?,
    };

    Ok([default_dir, PathBuf::from(SYSTEM_CONFIG_DIR)]
        .into_iter()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file()))
}

/// Expand a leading `~`, `$HOME`, or `$VAR` and make the path absolute
pub fn expand_path(path: &str) -> FieldsealResult<PathBuf> {
    tracing::debug!(path, "trying to resolve absolute path");

    let expanded = if let Some(rest) = strip_home(path) {
        join_remainder(home_dir()?, rest)
    } else if let Some(var) = path.strip_prefix('$') {
        let (name, rest) = match var.find(std::path::is_separator) {
            Some(end) => var.split_at(end),
            None => (var, ""),
        };
        let value = std::env::var(name).map_err(|_| {
            FieldsealError::Config(format!("Environment variable {} is not set", name))
        })?;
        join_remainder(PathBuf::from(value), rest)
    } else {
        PathBuf::from(path)
    };

    if expanded.is_absolute() {
        return Ok(expanded);
    }

    let cwd = std::env::current_dir().map_err(|e| {
        FieldsealError::Config(format!("Could not determine current directory: {}", e))
    })?;
    Ok(cwd.join(expanded))
}

fn strip_home(path: &str) -> Option<&str> {
    ["$HOME", "~"].iter().find_map(|prefix| {
        path.strip_prefix(prefix)
            .filter(|rest| rest.is_empty() || rest.starts_with(std::path::is_separator))
    })
}

fn join_remainder(base: PathBuf, rest: &str) -> PathBuf {
    let rest = rest.trim_start_matches(std::path::is_separator);
    if rest.is_empty() {
        base
    } else {
        base.join(rest)
    }
}

fn home_dir() -> FieldsealResult<PathBuf> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| FieldsealError::Config("Could not determine home directory".into()))
}
