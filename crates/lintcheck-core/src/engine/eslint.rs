//! ESLint command-line engine.
//!
//! Runs the ESLint executable installed in a project's `node_modules` with
//! the JSON formatter and parses its output.
//!
//! ESLint runs in the process working directory, the same base the builder
//! uses for its existence filter, so relative input paths mean the same
//! file to both. `work_dir` only decides where `node_modules` is looked up.
//!
//! ESLint 8 (eslintrc) gets `--ext`; ESLint 9 and later reject that flag
//! under flat config, and explicitly named files are linted regardless of
//! extension, so it is omitted there.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use super::LintEngine;
use crate::config::EngineOptions;
use crate::domain::{EngineReport, LintResult};
use crate::error::{LintCheckError, Result};

/// ESLint exits with 0 (clean) or 1 (lint errors found) when it ran to
/// completion; 2 means a configuration or internal failure.
const EXIT_CLEAN: i32 = 0;
const EXIT_LINT_ERRORS: i32 = 1;

/// First major version without `--ext` under flat config.
const FLAT_CONFIG_MAJOR: u32 = 9;

#[cfg(windows)]
const LOCAL_BIN: &str = "eslint.cmd";
#[cfg(not(windows))]
const LOCAL_BIN: &str = "eslint";

/// Path of the ESLint executable inside a project's dependency installation.
pub fn local_binary(work_dir: &Path) -> PathBuf {
    work_dir.join("node_modules").join(".bin").join(LOCAL_BIN)
}

/// ESLint engine backed by the `eslint` executable.
#[derive(Debug, Clone)]
pub struct EslintCli {
    binary: PathBuf,
    options: EngineOptions,
    version: String,
}

impl EslintCli {
    /// Locate and probe the ESLint executable.
    ///
    /// Uses `options.binary` when set, otherwise
    /// `<work_dir>/node_modules/.bin/eslint`. Fails with
    /// [`LintCheckError::EngineLoad`] if the executable is missing or
    /// `eslint --version` does not succeed.
    pub async fn load(options: EngineOptions) -> Result<Self> {
        options.validate()?;

        let binary = match &options.binary {
            Some(binary) => binary.clone(),
            None => {
                let binary = local_binary(&options.work_dir);
                if !tokio::fs::try_exists(&binary).await.unwrap_or(false) {
                    return Err(LintCheckError::EngineLoad(format!(
                        "{} not found (is eslint installed in {}?)",
                        binary.display(),
                        options.work_dir.display()
                    )));
                }
                binary
            }
        };

        let output = Command::new(&binary)
            .arg("--version")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                LintCheckError::EngineLoad(format!("failed to spawn {}: {}", binary.display(), e))
            })?;

        if !output.status.success() {
            return Err(LintCheckError::EngineLoad(format!(
                "{} --version exited with {}: {}",
                binary.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        info!(binary = %binary.display(), version = %version, "Loaded ESLint");

        Ok(Self {
            binary,
            options,
            version,
        })
    }

    /// Version string reported by `eslint --version`.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Arguments passed to ESLint for one run.
    pub fn command_args(&self, paths: &[String]) -> Vec<String> {
        let mut args = vec!["--format".to_string(), "json".to_string()];
        if self.accepts_ext_flag() {
            args.push("--ext".to_string());
            args.push(self.options.extensions.join(","));
        }
        args.push("--".to_string());
        args.extend(paths.iter().cloned());
        args
    }

    fn accepts_ext_flag(&self) -> bool {
        match major_version(&self.version) {
            Some(major) => major < FLAT_CONFIG_MAJOR,
            None => true,
        }
    }
}

/// Major version from `eslint --version` output such as `v8.57.0`.
pub fn major_version(version: &str) -> Option<u32> {
    version
        .trim()
        .trim_start_matches('v')
        .split('.')
        .next()
        .and_then(|major| major.parse().ok())
}

/// Parse the output of `eslint --format json`.
pub fn parse_json_output(stdout: &str) -> Result<EngineReport> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Err(LintCheckError::EngineExecution(
            "eslint produced no output".to_string(),
        ));
    }
    let results: Vec<LintResult> = serde_json::from_str(trimmed)?;
    Ok(EngineReport::from_results(results))
}

#[async_trait]
impl LintEngine for EslintCli {
    async fn execute_on_files(&self, paths: &[String]) -> Result<EngineReport> {
        if paths.is_empty() {
            debug!("No files to lint; skipping ESLint run");
            return Ok(EngineReport::default());
        }

        let args = self.command_args(paths);
        debug!(binary = %self.binary.display(), files = paths.len(), "Running ESLint");

        let output = Command::new(&self.binary)
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                LintCheckError::EngineExecution(format!(
                    "failed to spawn {}: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        match output.status.code() {
            Some(EXIT_CLEAN) | Some(EXIT_LINT_ERRORS) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                parse_json_output(&stdout).map_err(|e| match e {
                    LintCheckError::Serialization(err) => LintCheckError::EngineExecution(
                        format!("unparsable eslint output: {}", err),
                    ),
                    other => other,
                })
            }
            code => Err(LintCheckError::EngineExecution(format!(
                "eslint exited with {}: {}",
                code.map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string()),
                String::from_utf8_lossy(&output.stderr).trim()
            ))),
        }
    }
}
