//! In-memory fakes for the lint engine (testing only)
//!
//! `StaticEngine` returns a canned report and records every path list it
//! was called with; `FailingEngine` always fails the run.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::EngineReport;
use crate::engine::LintEngine;
use crate::error::{LintCheckError, Result};

// ---------------------------------------------------------------------------
// StaticEngine
// ---------------------------------------------------------------------------

/// Engine that answers every run with the same report.
#[derive(Debug, Default)]
pub struct StaticEngine {
    report: EngineReport,
    calls: Mutex<Vec<Vec<String>>>,
}

impl StaticEngine {
    pub fn new(report: EngineReport) -> Self {
        Self {
            report,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Path lists passed to `execute_on_files`, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LintEngine for StaticEngine {
    async fn execute_on_files(&self, paths: &[String]) -> Result<EngineReport> {
        self.calls.lock().unwrap().push(paths.to_vec());
        Ok(self.report.clone())
    }
}

// ---------------------------------------------------------------------------
// FailingEngine
// ---------------------------------------------------------------------------

/// Engine whose runs always fail, as with a broken ESLint configuration.
#[derive(Debug)]
pub struct FailingEngine {
    reason: String,
}

impl FailingEngine {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl LintEngine for FailingEngine {
    async fn execute_on_files(&self, _paths: &[String]) -> Result<EngineReport> {
        Err(LintCheckError::EngineExecution(self.reason.clone()))
    }
}
