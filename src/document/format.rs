//! JSON and YAML document (de)serialization
//!
//! Documents are string-keyed mappings of `serde_json::Value`, independent of
//! the text format they were read from.

use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

use super::Document;
use crate::error::{FieldsealError, FieldsealResult};

/// Supported document text formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentFormat {
    /// JSON, pretty-printed with four-space indentation
    Json,
    /// YAML
    #[value(alias = "yml")]
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> FieldsealResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        Self::from_name(ext).map_err(|_| {
            FieldsealError::UnsupportedFormat(format!(
                "cannot determine format of {} (expected .json, .yaml or .yml)",
                path.display()
            ))
        })
    }

    /// Pick a format from its name, case-insensitively
    pub fn from_name(name: &str) -> FieldsealResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(FieldsealError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Parse text into a document; the top level must be a mapping
    pub fn parse(&self, input: &str) -> FieldsealResult<Document> {
        let value: Value = match self {
            Self::Json => serde_json::from_str(input)?,
            Self::Yaml => {
                let yaml: serde_yaml::Value = serde_yaml::from_str(input)?;
                reject_non_finite(&yaml, "")?;
                serde_yaml::from_value(yaml)?
            }
        };

        match value {
            Value::Object(map) => Ok(map),
            // an empty YAML stream is an empty document
            Value::Null if *self == Self::Yaml => Ok(Document::new()),
            other => Err(FieldsealError::Serialization(format!(
                "top level of document must be a mapping, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Render a document as text
    pub fn render(&self, document: &Document) -> FieldsealResult<String> {
        match self {
            Self::Json => {
                let mut out = Vec::new();
                let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
                document.serialize(&mut serializer)?;
                out.push(b'\n');
                String::from_utf8(out).map_err(|e| FieldsealError::Serialization(e.to_string()))
            }
            Self::Yaml => Ok(serde_yaml::to_string(document)?),
        }
    }
}

// JSON values cannot hold NaN or infinities; they would turn into null
fn reject_non_finite(value: &serde_yaml::Value, path: &str) -> FieldsealResult<()> {
    match value {
        serde_yaml::Value::Number(n) if n.as_f64().is_some_and(|f| !f.is_finite()) => {
            Err(FieldsealError::Serialization(format!(
                "non-finite number {} at '{}' is not supported",
                n, path
            )))
        }
        serde_yaml::Value::Sequence(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(index, item)| reject_non_finite(item, &format!("{}[{}]", path, index))),
        serde_yaml::Value::Mapping(mapping) => mapping.iter().try_for_each(|(key, item)| {
            let key = match key {
                serde_yaml::Value::String(key) => key.clone(),
                other => serde_yaml::to_string(other)
                    .map(|k| k.trim_end().to_string())
                    .unwrap_or_default(),
            };
            let path = if path.is_empty() {
                key
            } else {
                format!("{}.{}", path, key)
            };
            reject_non_finite(item, &path)
        }),
        serde_yaml::Value::Tagged(tagged) => reject_non_finite(&tagged.value, path),
        _ => Ok(()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
