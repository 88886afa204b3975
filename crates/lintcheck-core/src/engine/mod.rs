//! Lint engine seam.
//!
//! The builder never locates or constructs a linter itself; it is handed an
//! implementation of [`LintEngine`] that was already built with its
//! [`EngineOptions`](crate::config::EngineOptions).

pub mod eslint;

use async_trait::async_trait;

use crate::domain::EngineReport;
use crate::error::Result;

pub use eslint::EslintCli;

/// Trait for lint engine backends.
#[async_trait]
pub trait LintEngine: Send + Sync {
    /// Lint the given files and return per-file results plus aggregates.
    async fn execute_on_files(&self, paths: &[String]) -> Result<EngineReport>;
}
