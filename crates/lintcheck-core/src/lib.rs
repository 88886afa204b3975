//! lintcheck core library
//!
//! Turns ESLint findings into a check-run payload:
//! - `builder`: filters input files, runs the engine, maps and caps annotations
//! - `engine`: the `LintEngine` seam and the ESLint CLI implementation
//! - `domain`: engine results, annotations, and the report
//! - `paths`: correlating engine paths back to caller paths
//! - `config`: builder and engine configuration

pub mod builder;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod fakes;
pub mod paths;
pub mod telemetry;

pub use builder::{filter_existing, AnnotationBuilder};
pub use config::{
    BuilderConfig, EngineOptions, DEFAULT_FALLBACK_TITLE, DEFAULT_MAX_ANNOTATIONS,
    EXTENSIONS_TO_LINT,
};
pub use domain::{
    Annotation, AnnotationLevel, Conclusion, EngineReport, LintMessage, LintResult, Report,
    ReportOutput, SeverityMap,
};
pub use engine::{EslintCli, LintEngine};
pub use error::{LintCheckError, Result};
pub use paths::PathCorrelator;
pub use telemetry::init_tracing;
