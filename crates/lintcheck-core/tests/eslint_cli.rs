//! Runs `EslintCli` against a stand-in `node_modules/.bin/eslint` script.
//!
//! The scenarios share one test so the scripts are never written while
//! another test thread is spawning processes.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::sync::Arc;

use lintcheck_core::{
    AnnotationBuilder, BuilderConfig, Conclusion, EngineOptions, EslintCli, LintCheckError,
    LintEngine,
};

fn install_script(work_dir: &Path, body: &str) {
    let bin_dir = work_dir.join("node_modules").join(".bin");
    std::fs::create_dir_all(&bin_dir).expect("create bin dir");
    let script = bin_dir.join("eslint");
    std::fs::write(&script, body).expect("write script");
    let mut perms = std::fs::metadata(&script).expect("metadata").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).expect("chmod");
}

/// Reports `eqeqeq` errors for `.ts` files and `no-console` warnings for
/// `.js` files, resolving every argument against its own working directory
/// and failing like ESLint when a named file does not exist there.
const LINTING_SCRIPT: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "v8.57.0"
  exit 0
fi
while [ "$#" -gt 0 ] && [ "$1" != "--" ]; do shift; done
shift
status=0
sep=""
printf '['
for f in "$@"; do
  if [ ! -e "$f" ]; then
    echo "No files matching the pattern \"$f\" were found." >&2
    exit 2
  fi
  case "$f" in
    /*) p="$f" ;;
    *) p="$PWD/$f" ;;
  esac
  case "$f" in
    *.ts)
      printf '%s{"filePath":"%s","messages":[{"ruleId":"eqeqeq","severity":2,"message":"Expected === and instead saw ==.","line":2,"column":7,"endLine":2,"endColumn":9}],"errorCount":1,"warningCount":0}' "$sep" "$p"
      status=1
      ;;
    *)
      printf '%s{"filePath":"%s","messages":[{"ruleId":"no-console","severity":1,"message":"Unexpected console statement.","line":1,"column":1}],"errorCount":0,"warningCount":1}' "$sep" "$p"
      ;;
  esac
  sep=","
done
printf ']\n'
exit $status
"#;

const BROKEN_CONFIG_SCRIPT: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "v8.57.0"
  exit 0
fi
echo "Oops! Something went wrong! ESLint couldn't find a configuration file." >&2
exit 2
"#;

#[tokio::test]
async fn test_eslint_cli_engine() {
    // Successful run with lint errors (exit code 1)
    let project = tempfile::tempdir().expect("tempdir");
    install_script(project.path(), LINTING_SCRIPT);
    std::fs::create_dir(project.path().join("src")).expect("mkdir src");
    std::fs::write(project.path().join("src/a.ts"), "if (a == b) {}\n").expect("write");
    std::fs::write(project.path().join("src/b.js"), "console.log(1);\n").expect("write");

    let options = EngineOptions {
        work_dir: project.path().to_path_buf(),
        ..EngineOptions::default()
    };
    let engine = EslintCli::load(options).await.expect("load eslint");
    assert_eq!(engine.version(), "v8.57.0");

    let files: Vec<String> = ["src/a.ts", "src/b.js"]
        .iter()
        .map(|f| project.path().join(f).to_string_lossy().to_string())
        .collect();

    let raw = engine.execute_on_files(&files).await.expect("run eslint");
    assert_eq!(raw.results.len(), 2);
    assert_eq!(raw.error_count, 1);
    assert_eq!(raw.warning_count, 1);

    let builder =
        AnnotationBuilder::new(Arc::new(engine), BuilderConfig::default()).expect("builder");
    let report = builder.build_report(&files).await.expect("report");
    assert_eq!(report.conclusion, Conclusion::Failure);
    assert_eq!(report.output.title, "1 error(s), 1 warning(s) found in 2 file(s)");
    assert_eq!(report.output.annotations.len(), 2);
    assert_eq!(report.output.annotations[0].path, files[0]);
    assert_eq!(report.output.annotations[0].end_column, 9);
    assert_eq!(report.output.annotations[1].title, "no-console");

    // Relative inputs resolve against the process cwd even when the
    // ESLint installation lives in another directory.
    let local = tempfile::tempdir_in(".").expect("tempdir in cwd");
    std::fs::write(local.path().join("c.ts"), "if (a == b) {}\n").expect("write");
    let relative = local.path().join("c.ts").to_string_lossy().to_string();
    assert!(Path::new(&relative).is_relative());

    let options = EngineOptions {
        work_dir: project.path().to_path_buf(),
        ..EngineOptions::default()
    };
    let engine = EslintCli::load(options).await.expect("load eslint");
    let builder =
        AnnotationBuilder::new(Arc::new(engine), BuilderConfig::default()).expect("builder");
    let report = builder
        .build_report(&[relative.clone()])
        .await
        .expect("report for relative input");
    assert_eq!(report.output.title, "1 error(s), 0 warning(s) found in 1 file(s)");
    assert_eq!(report.output.annotations.len(), 1);
    assert_eq!(report.output.annotations[0].path, relative);
    assert_eq!(report.output.annotations[0].title, "eqeqeq");

    // Configuration failure (exit code 2) is fatal
    let broken = tempfile::tempdir().expect("tempdir");
    install_script(broken.path(), BROKEN_CONFIG_SCRIPT);
    std::fs::write(broken.path().join("a.js"), "").expect("write");

    let options = EngineOptions {
        work_dir: broken.path().to_path_buf(),
        ..EngineOptions::default()
    };
    let engine = EslintCli::load(options).await.expect("load eslint");
    let err = engine
        .execute_on_files(&[broken.path().join("a.js").to_string_lossy().to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err, LintCheckError::EngineExecution(_)));
    assert!(err.to_string().contains("couldn't find a configuration file"));
}
