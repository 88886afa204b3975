//! Engine-side diagnostic types.
//!
//! These mirror the shape produced by ESLint's JSON formatter
//! (`eslint --format json`): camelCase keys, nullable `ruleId`, and
//! a number of fields we do not consume (`nodeType`, `fix`, `source`, ...)
//! which are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// A single message reported for a file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LintMessage {
    /// 1-based start line.
    #[serde(default)]
    pub line: Option<u32>,

    /// 1-based start column.
    #[serde(default)]
    pub column: Option<u32>,

    #[serde(default)]
    pub end_line: Option<u32>,

    #[serde(default)]
    pub end_column: Option<u32>,

    /// 0 = off, 1 = warning, 2 = error.
    pub severity: u8,

    /// Rule that produced the message; absent for parse failures.
    #[serde(default)]
    pub rule_id: Option<String>,

    pub message: String,

    /// Set by the engine when the file could not be parsed.
    #[serde(default)]
    pub fatal: bool,
}

impl LintMessage {
    /// Create a message with no location and no rule.
    pub fn new(severity: u8, message: impl Into<String>) -> Self {
        Self {
            line: None,
            column: None,
            end_line: None,
            end_column: None,
            severity,
            rule_id: None,
            message: message.into(),
            fatal: false,
        }
    }

    /// Set the start position.
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Set the end position.
    pub fn until(mut self, end_line: u32, end_column: u32) -> Self {
        self.end_line = Some(end_line);
        self.end_column = Some(end_column);
        self
    }

    /// Set the rule id.
    pub fn with_rule(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = Some(rule_id.into());
        self
    }
}

/// Diagnostics for one file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    /// Absolute path as reported by the engine.
    pub file_path: String,

    #[serde(default)]
    pub messages: Vec<LintMessage>,

    #[serde(default)]
    pub error_count: u64,

    #[serde(default)]
    pub warning_count: u64,

    #[serde(default)]
    pub fixable_error_count: u64,

    #[serde(default)]
    pub fixable_warning_count: u64,
}

impl LintResult {
    /// Build a result, deriving the per-file counts from the messages.
    pub fn new(file_path: impl Into<String>, messages: Vec<LintMessage>) -> Self {
        let error_count = messages.iter().filter(|m| m.severity == 2).count() as u64;
        let warning_count = messages.iter().filter(|m| m.severity == 1).count() as u64;
        Self {
            file_path: file_path.into(),
            messages,
            error_count,
            warning_count,
            fixable_error_count: 0,
            fixable_warning_count: 0,
        }
    }
}

/// Output of one engine run: per-file results plus process-wide aggregates.
///
/// The aggregates are taken as produced by the engine and are not
/// recomputed from the messages that end up annotated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineReport {
    pub results: Vec<LintResult>,
    pub error_count: u64,
    pub warning_count: u64,
    pub fixable_error_count: u64,
    pub fixable_warning_count: u64,
}

impl EngineReport {
    /// Aggregate per-file counts the same way ESLint does for its own report.
    pub fn from_results(results: Vec<LintResult>) -> Self {
        let mut report = EngineReport::default();
        for result in &results {
            report.error_count += result.error_count;
            report.warning_count += result.warning_count;
            report.fixable_error_count += result.fixable_error_count;
            report.fixable_warning_count += result.fixable_warning_count;
        }
        report.results = results;
        report
    }

    /// Total number of messages across all files.
    pub fn message_count(&self) -> usize {
        self.results.iter().map(|r| r.messages.len()).sum()
    }

    /// Messages for files the engine could not parse.
    pub fn fatal_count(&self) -> usize {
        self.results
            .iter()
            .flat_map(|r| r.messages.iter())
            .filter(|m| m.fatal)
            .count()
    }
}
