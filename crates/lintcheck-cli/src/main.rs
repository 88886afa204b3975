//! lintcheck - ESLint findings as a check-run payload
//!
//! ## Commands
//!
//! - `report`: lint the given files and print the check-run `conclusion` +
//!   `output` JSON
//! - `version`: print the version

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::{info, Level};

use lintcheck_core::{
    AnnotationBuilder, BuilderConfig, EngineOptions, EslintCli, Report, DEFAULT_FALLBACK_TITLE,
    DEFAULT_MAX_ANNOTATIONS,
};

#[derive(Parser)]
#[command(name = "lintcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Turn ESLint findings into check-run annotations", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint files and print the check-run report as JSON
    Report {
        /// Files to lint (missing files are skipped)
        files: Vec<String>,

        /// Read additional newline-separated paths from a file ("-" for stdin)
        #[arg(long)]
        files_from: Option<PathBuf>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the report JSON
        #[arg(long)]
        pretty: bool,

        /// Exit with a non-zero status when the conclusion is failure
        #[arg(long)]
        fail_on_error: bool,

        /// Maximum number of annotations in the report
        #[arg(long, env = "LINTCHECK_MAX_ANNOTATIONS", default_value_t = DEFAULT_MAX_ANNOTATIONS)]
        max_annotations: usize,

        /// Annotation title for messages without a rule id
        #[arg(long, env = "LINTCHECK_FALLBACK_TITLE", default_value = DEFAULT_FALLBACK_TITLE)]
        fallback_title: String,

        /// Extensions to lint (comma-separated)
        #[arg(long, env = "LINTCHECK_EXTENSIONS")]
        extensions: Option<String>,

        /// Project directory containing node_modules (files stay relative to the cwd)
        #[arg(short, long, default_value = ".")]
        work_dir: PathBuf,

        /// ESLint executable (default: <work-dir>/node_modules/.bin/eslint)
        #[arg(long, env = "LINTCHECK_ESLINT_BIN")]
        eslint_bin: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    lintcheck_core::init_tracing(cli.json, level);

    match cli.command {
        Commands::Report {
            files,
            files_from,
            output,
            pretty,
            fail_on_error,
            max_annotations,
            fallback_title,
            extensions,
            work_dir,
            eslint_bin,
        } => {
            let files = collect_files(files, files_from.as_deref()).await?;
            let config = BuilderConfig::default()
                .with_max_annotations(max_annotations)
                .with_fallback_title(fallback_title);
            let options = engine_options(extensions.as_deref(), work_dir, eslint_bin);
            cmd_report(files, config, options, output.as_deref(), pretty, fail_on_error).await
        }
        Commands::Version => {
            println!("lintcheck {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn cmd_report(
    files: Vec<String>,
    config: BuilderConfig,
    options: EngineOptions,
    output: Option<&Path>,
    pretty: bool,
    fail_on_error: bool,
) -> Result<()> {
    let engine = EslintCli::load(options)
        .await
        .context("Failed to load ESLint")?;
    info!(
        binary = %engine.binary().display(),
        version = %engine.version(),
        "Using ESLint"
    );
    let builder = AnnotationBuilder::new(Arc::new(engine), config)?;
    info!(
        files = files.len(),
        max_annotations = builder.config().max_annotations,
        "Building lint report"
    );

    let report = builder
        .build_report(&files)
        .await
        .context("Failed to build lint report")?;

    let rendered = render_report(&report, pretty)?;
    match output {
        Some(path) => {
            tokio::fs::write(path, rendered.as_bytes())
                .await
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!(path = %path.display(), "Wrote lint report");
        }
        None => println!("{}", rendered),
    }

    if fail_on_error && !report.passed() {
        anyhow::bail!("Lint check failed: {}", report.output.summary)
    }
    Ok(())
}

fn render_report(report: &Report, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(rendered)
}

fn engine_options(
    extensions: Option<&str>,
    work_dir: PathBuf,
    eslint_bin: Option<PathBuf>,
) -> EngineOptions {
    let mut options = EngineOptions {
        work_dir,
        binary: eslint_bin,
        ..EngineOptions::default()
    };
    if let Some(list) = extensions {
        options.extensions = EngineOptions::parse_extensions(list);
    }
    options
}

/// Positional files first, then those listed in `files_from`.
async fn collect_files(mut files: Vec<String>, files_from: Option<&Path>) -> Result<Vec<String>> {
    let Some(source) = files_from else {
        return Ok(files);
    };

    let content = if source == Path::new("-") {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("Failed to read file list from stdin")?;
        buf
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("Failed to read file list {}", source.display()))?
    };

    files.extend(parse_file_list(&content));
    Ok(files)
}

fn parse_file_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintcheck_core::Conclusion;

    #[test]
    fn test_parse_file_list_skips_blank_lines() {
        let files = parse_file_list("src/a.ts\n\n  src/b.js  \r\n\n");
        assert_eq!(files, vec!["src/a.ts", "src/b.js"]);
    }

    #[tokio::test]
    async fn test_collect_files_appends_list_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let list = dir.path().join("changed.txt");
        std::fs::write(&list, "b.ts\nc.ts\n").expect("write");

        let files = collect_files(vec!["a.ts".to_string()], Some(list.as_path()))
            .await
            .expect("collect");
        assert_eq!(files, vec!["a.ts", "b.ts", "c.ts"]);
    }

    #[tokio::test]
    async fn test_collect_files_missing_list_file() {
        let result = collect_files(Vec::new(), Some(Path::new("/nonexistent/list.txt"))).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_engine_options_from_flags() {
        let options = engine_options(Some("js,.vue"), PathBuf::from("web"), None);
        assert_eq!(options.extensions, vec![".js", ".vue"]);
        assert_eq!(options.work_dir, PathBuf::from("web"));

        let defaults = engine_options(None, PathBuf::from("."), Some(PathBuf::from("eslint")));
        assert_eq!(defaults.extensions, EngineOptions::default().extensions);
        assert_eq!(defaults.binary, Some(PathBuf::from("eslint")));
    }

    #[test]
    fn test_cli_parses_report_command() {
        let cli = Cli::try_parse_from([
            "lintcheck",
            "--verbose",
            "report",
            "a.ts",
            "b.ts",
            "--max-annotations",
            "10",
            "--fail-on-error",
        ])
        .expect("parse");

        assert!(cli.verbose);
        match cli.command {
            Commands::Report {
                files,
                max_annotations,
                fail_on_error,
                fallback_title,
                ..
            } => {
                assert_eq!(files, vec!["a.ts", "b.ts"]);
                assert_eq!(max_annotations, 10);
                assert!(fail_on_error);
                assert_eq!(fallback_title, "ESLint");
            }
            Commands::Version => panic!("expected report command"),
        }
    }

    #[test]
    fn test_render_report() {
        let report = Report::new(0, 1, 1, Vec::new());
        let compact = render_report(&report, false).expect("render");
        assert!(!compact.contains('\n'));
        assert!(compact.contains("\"conclusion\":\"success\""));

        let pretty = render_report(&report, true).expect("render");
        assert!(pretty.contains('\n'));
        let parsed: Report = serde_json::from_str(&pretty).expect("parse");
        assert_eq!(parsed.conclusion, Conclusion::Success);
    }
}
