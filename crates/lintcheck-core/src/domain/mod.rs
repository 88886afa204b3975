//! Domain models for lintcheck.
//!
//! - `lint`: what the engine reports (per-file results, messages, aggregates)
//! - `annotation`: check-run annotations and the severity mapping
//! - `report`: the check-run payload (conclusion + output)

pub mod annotation;
pub mod lint;
pub mod report;

pub use annotation::{Annotation, AnnotationLevel, SeverityMap};
pub use lint::{EngineReport, LintMessage, LintResult};
pub use report::{summary_line, Conclusion, Report, ReportOutput};
