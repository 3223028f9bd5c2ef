//! Error types for vocab_drill.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`EngineError`].
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the engine.
///
/// Degraded-but-valid outcomes (short option sets, ignored clicks, a second
/// answer to the same question) are not errors; the state machines absorb them.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A gated screen or test was requested before the data files loaded.
    #[error("vocabulary data is not loaded yet")]
    DataNotLoaded,

    /// A data file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file was not valid JSON of the expected shape.
    #[error("failed to parse {source_name}: {source}")]
    Parse {
        source_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A test mode was started with nothing to draw from.
    #[error("no {source_name} available to build a test from")]
    EmptySource { source_name: &'static str },

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
