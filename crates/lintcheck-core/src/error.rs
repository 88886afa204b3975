//! Error taxonomy for report generation.

/// Errors that abort report generation.
///
/// Unmatched engine results and annotation truncation are not errors; the
/// builder degrades gracefully for those and only logs.
#[derive(Debug, thiserror::Error)]
pub enum LintCheckError {
    #[error("failed to load lint engine: {0}")]
    EngineLoad(String),

    #[error("lint engine execution failed: {0}")]
    EngineExecution(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for lintcheck operations.
pub type Result<T> = std::result::Result<T, LintCheckError>;
