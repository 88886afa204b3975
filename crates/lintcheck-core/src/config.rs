//! Builder and engine configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::SeverityMap;
use crate::error::{LintCheckError, Result};

/// Extensions the engine considers when walking the given files.
pub const EXTENSIONS_TO_LINT: &[&str] = &[".js", ".jsx", ".ts", ".tsx"];

/// Check-run APIs accept at most 50 annotations per request.
pub const DEFAULT_MAX_ANNOTATIONS: usize = 50;

/// Title used for messages that carry no rule id.
pub const DEFAULT_FALLBACK_TITLE: &str = "ESLint";

/// Configuration for the annotation builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuilderConfig {
    /// Maximum number of annotations in one report.
    pub max_annotations: usize,

    /// Annotation title when a message has no rule id.
    pub fallback_title: String,

    /// Severity ordinal to annotation level mapping.
    pub severity_map: SeverityMap,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            max_annotations: DEFAULT_MAX_ANNOTATIONS,
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
            severity_map: SeverityMap::default(),
        }
    }
}

impl BuilderConfig {
    pub fn with_max_annotations(mut self, max_annotations: usize) -> Self {
        self.max_annotations = max_annotations;
        self
    }

    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_annotations == 0 {
            return Err(LintCheckError::InvalidConfig(
                "max_annotations must be at least 1".to_string(),
            ));
        }
        if self.fallback_title.trim().is_empty() {
            return Err(LintCheckError::InvalidConfig(
                "fallback_title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Options the lint engine is constructed with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineOptions {
    /// Extensions to lint (with leading dot).
    pub extensions: Vec<String>,

    /// Project directory whose `node_modules` provides ESLint. Input paths
    /// and ESLint itself are still resolved against the process cwd.
    pub work_dir: PathBuf,

    /// Explicit ESLint executable, bypassing `node_modules/.bin` lookup.
    pub binary: Option<PathBuf>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            extensions: EXTENSIONS_TO_LINT.iter().map(|e| e.to_string()).collect(),
            work_dir: PathBuf::from("."),
            binary: None,
        }
    }
}

impl EngineOptions {
    /// Parse a comma-separated extension list, adding missing leading dots.
    pub fn parse_extensions(list: &str) -> Vec<String> {
        list.split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s.starts_with('.') {
                    s.to_string()
                } else {
                    format!(".{}", s)
                }
            })
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(LintCheckError::InvalidConfig(
                "at least one extension is required".to_string(),
            ));
        }
        Ok(())
    }
}
