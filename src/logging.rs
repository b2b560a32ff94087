//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only document
//! output so it can be redirected into a file.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::{FieldsealError, FieldsealResult};

/// Level used when the configured one cannot be parsed
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Parse a level name such as `warn` or `DEBUG`
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse::<LevelFilter>().ok()
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `level`. An unparseable `level` is
/// reported once the subscriber is up and [`DEFAULT_LEVEL`] is used instead.
pub fn init(level: &str) -> FieldsealResult<()> {
    let parsed = parse_level(level);

    let env_filter = EnvFilter::builder()
        .with_default_directive(parsed.unwrap_or(DEFAULT_LEVEL).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| FieldsealError::Config(format!("cannot initialize logging: {}", e)))?;

    if parsed.is_none() {
        tracing::error!(level, "not a valid level");
    }

    Ok(())
}
