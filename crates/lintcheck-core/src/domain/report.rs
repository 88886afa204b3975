//! The check-run payload produced for one lint invocation.

use serde::{Deserialize, Serialize};

use super::annotation::Annotation;

/// Overall outcome of the check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Conclusion {
    Success,
    Failure,
}

impl Conclusion {
    /// Only errors fail a check; warnings never do.
    pub fn from_error_count(error_count: u64) -> Self {
        if error_count > 0 {
            Conclusion::Failure
        } else {
            Conclusion::Success
        }
    }
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conclusion::Success => write!(f, "success"),
            Conclusion::Failure => write!(f, "failure"),
        }
    }
}

/// The `output` object of a check run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportOutput {
    pub title: String,
    pub summary: String,
    pub annotations: Vec<Annotation>,
}

/// Check-run payload: conclusion plus output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub conclusion: Conclusion,
    pub output: ReportOutput,
}

impl Report {
    /// Assemble a report from engine aggregates and the mapped annotations.
    ///
    /// `file_count` is the number of input files that existed on disk.
    pub fn new(
        error_count: u64,
        warning_count: u64,
        file_count: usize,
        annotations: Vec<Annotation>,
    ) -> Self {
        let summary = summary_line(error_count, warning_count, file_count);
        Self {
            conclusion: Conclusion::from_error_count(error_count),
            output: ReportOutput {
                title: summary.clone(),
                summary,
                annotations,
            },
        }
    }

    pub fn passed(&self) -> bool {
        self.conclusion == Conclusion::Success
    }
}

/// `"<errors> error(s), <warnings> warning(s) found in <files> file(s)"`.
pub fn summary_line(error_count: u64, warning_count: u64, file_count: usize) -> String {
    format!(
        "{} error(s), {} warning(s) found in {} file(s)",
        error_count, warning_count, file_count
    )
}
