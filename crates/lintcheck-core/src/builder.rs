//! Annotation builder: lint results to check-run report.
//!
//! One call to [`AnnotationBuilder::build_report`]:
//! 1. keeps the input files that exist on disk (order and duplicates kept)
//! 2. runs the engine once on that list
//! 3. maps every message of every result that correlates to an input path
//!    into an [`Annotation`], stopping at `max_annotations`
//! 4. derives the conclusion and summary from the engine's aggregates

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::BuilderConfig;
use crate::domain::{Annotation, EngineReport, LintMessage, Report};
use crate::engine::LintEngine;
use crate::error::Result;
use crate::paths::PathCorrelator;

/// Keep the entries of `files` that currently exist, preserving order.
///
/// I/O errors while checking are treated as "does not exist".
pub async fn filter_existing(files: &[String]) -> Vec<String> {
    let mut existing = Vec::with_capacity(files.len());
    for file in files {
        if tokio::fs::try_exists(file).await.unwrap_or(false) {
            existing.push(file.clone());
        } else {
            debug!(file = %file, "Skipping missing file");
        }
    }
    existing
}

/// Builds check-run reports from lint engine output.
pub struct AnnotationBuilder {
    engine: Arc<dyn LintEngine>,
    config: BuilderConfig,
}

impl AnnotationBuilder {
    /// Create a builder around an already-constructed engine.
    pub fn new(engine: Arc<dyn LintEngine>, config: BuilderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { engine, config })
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Lint `files` and build the report.
    ///
    /// Engine failures propagate; no partial report is produced.
    pub async fn build_report(&self, files: &[String]) -> Result<Report> {
        let filtered = filter_existing(files).await;
        info!(
            requested = files.len(),
            existing = filtered.len(),
            "Linting files"
        );

        let engine_report = self.engine.execute_on_files(&filtered).await?;
        let correlator = PathCorrelator::new(&filtered).await;
        debug!(
            candidates = correlator.len(),
            results = engine_report.results.len(),
            "Correlating engine results with input paths"
        );
        let annotations = self.collect_annotations(&engine_report, &correlator);

        let report = Report::new(
            engine_report.error_count,
            engine_report.warning_count,
            filtered.len(),
            annotations,
        );

        info!(
            conclusion = %report.conclusion,
            errors = engine_report.error_count,
            warnings = engine_report.warning_count,
            fixable_errors = engine_report.fixable_error_count,
            fixable_warnings = engine_report.fixable_warning_count,
            fatal = engine_report.fatal_count(),
            annotations = report.output.annotations.len(),
            "Built lint report"
        );

        Ok(report)
    }

    fn collect_annotations(
        &self,
        report: &EngineReport,
        correlator: &PathCorrelator,
    ) -> Vec<Annotation> {
        let cap = self.config.max_annotations;
        let mut annotations = Vec::new();

        'results: for result in &report.results {
            let Some(path) = correlator.resolve(&result.file_path) else {
                debug!(file_path = %result.file_path, "No input path matches engine result");
                continue;
            };

            for message in &result.messages {
                if annotations.len() >= cap {
                    warn!(
                        shown = annotations.len(),
                        total_results = report.results.len(),
                        total_messages = report.message_count(),
                        "Annotation limit reached; only showing the first {}",
                        cap
                    );
                    break 'results;
                }
                annotations.push(self.annotate(path, message));
            }
        }

        annotations
    }

    /// Map one engine message onto an annotation for `path`.
    pub fn annotate(&self, path: &str, message: &LintMessage) -> Annotation {
        let start_line = message.line.unwrap_or(0);
        let start_column = message.column.unwrap_or(0);

        if self.config.severity_map.get(message.severity).is_none() {
            warn!(
                severity = message.severity,
                path = %path,
                "Unknown severity; using fallback level"
            );
        }
        let annotation_level = self.config.severity_map.level_for(message.severity);

        Annotation {
            path: path.to_string(),
            start_line,
            end_line: message.end_line.unwrap_or(start_line),
            start_column,
            end_column: message.end_column.unwrap_or(start_column),
            annotation_level,
            title: message
                .rule_id
                .clone()
                .unwrap_or_else(|| self.config.fallback_title.clone()),
            message: message.message.clone(),
        }
    }
}
