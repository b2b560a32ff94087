//! Configuration module for fieldseal
//!
//! This module provides configuration management including:
//! - Base directory and key path resolution
//! - Settings file discovery and parsing

pub mod paths;
pub mod settings;

pub use paths::FieldsealPaths;
pub use settings::Settings;
