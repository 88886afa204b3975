//! Check-run annotation types and the severity mapping.

use serde::{Deserialize, Serialize};

/// Annotation level understood by the check-run API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationLevel {
    Notice,
    Warning,
    Failure,
}

impl std::fmt::Display for AnnotationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnotationLevel::Notice => write!(f, "notice"),
            AnnotationLevel::Warning => write!(f, "warning"),
            AnnotationLevel::Failure => write!(f, "failure"),
        }
    }
}

/// Maps engine severity ordinals onto annotation levels.
///
/// The engine uses 0 (off), 1 (warning) and 2 (error). Anything else
/// resolves to `unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeverityMap {
    pub off: AnnotationLevel,
    pub warning: AnnotationLevel,
    pub error: AnnotationLevel,
    pub unknown: AnnotationLevel,
}

impl Default for SeverityMap {
    fn default() -> Self {
        Self {
            off: AnnotationLevel::Notice,
            warning: AnnotationLevel::Warning,
            error: AnnotationLevel::Failure,
            unknown: AnnotationLevel::Notice,
        }
    }
}

impl SeverityMap {
    /// Look up a severity ordinal. Returns `None` when the ordinal is outside
    /// the engine's vocabulary.
    pub fn get(&self, severity: u8) -> Option<AnnotationLevel> {
        match severity {
            0 => Some(self.off),
            1 => Some(self.warning),
            2 => Some(self.error),
            _ => None,
        }
    }

    /// Look up a severity ordinal, falling back to `unknown`.
    pub fn level_for(&self, severity: u8) -> AnnotationLevel {
        self.get(severity).unwrap_or(self.unknown)
    }
}

/// A single check-run annotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Annotation {
    /// Path as given by the caller, never the engine's absolute path.
    pub path: String,
    pub start_line: u32,
    pub end_line: u32,
    pub start_column: u32,
    pub end_column: u32,
    pub annotation_level: AnnotationLevel,
    pub title: String,
    pub message: String,
}
