use std::path::PathBuf;

use thiserror::Error;

/// Row- and value-level parse errors.
///
/// These are absorbed by the normalizer (the offending row is dropped and
/// counted) and surfaced directly only where a caller supplies the value,
/// such as a date-range argument on the CLI.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unrecognized timestamp '{value}'")]
    InvalidTimestamp { value: String },

    #[error("invalid calendar date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("column '{column}' is not numeric: '{value}'")]
    NonNumericField { column: &'static str, value: String },

    #[error("row is missing column '{column}'")]
    MissingColumn { column: &'static str },
}

/// Source-level failures raised by the record store loader.
///
/// These halt the pipeline run and propagate to the presentation boundary
/// as a user-visible message.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("record source unreadable: {reason}")]
    SourceUnreadable { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failures raised by the remote fetcher.
///
/// Every variant carries a human-readable diagnostic; callers treat any of
/// them as "no data available" and must not assume the flat source was
/// modified.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("quote api transport error: {0}")]
    Transport(String),

    #[error("quote api returned status {0}")]
    UpstreamStatus(u16),

    #[error("quote api payload could not be decoded: {0}")]
    MalformedPayload(String),

    #[error("quote api payload is missing the intraday series object")]
    MissingSeries,

    #[error("failed to persist fetched records: {0}")]
    Persist(#[from] std::io::Error),
}
