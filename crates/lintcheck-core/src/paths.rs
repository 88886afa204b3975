//! Correlating engine-reported paths with the caller's input paths.
//!
//! The engine reports absolute paths; annotations must carry the path the
//! caller gave us. Matching is done on path components, never on raw string
//! suffixes, so `src/ba.ts` can not be mistaken for `a.ts`.

use std::path::{Component, Path, PathBuf};

/// Drop `.` components so `./src/a.ts` and `src/a.ts` compare equal.
pub fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[derive(Debug)]
struct Candidate {
    input: String,
    normalized: PathBuf,
    canonical: Option<PathBuf>,
}

/// Resolves engine paths back to input paths.
///
/// Inputs are tried in their original order and the first match wins.
#[derive(Debug, Default)]
pub struct PathCorrelator {
    candidates: Vec<Candidate>,
}

impl PathCorrelator {
    /// Index the given input paths. Canonical forms are resolved up front
    /// so symlinked or `..`-relative inputs still match.
    pub async fn new(inputs: &[String]) -> Self {
        let mut candidates = Vec::with_capacity(inputs.len());
        for input in inputs {
            let normalized = normalize(Path::new(input));
            if normalized.as_os_str().is_empty() {
                continue;
            }
            let canonical = tokio::fs::canonicalize(input).await.ok();
            candidates.push(Candidate {
                input: input.clone(),
                normalized,
                canonical,
            });
        }
        Self { candidates }
    }

    /// Find the input path an engine-reported path refers to.
    pub fn resolve(&self, engine_path: &str) -> Option<&str> {
        let reported = normalize(Path::new(engine_path));

        self.candidates
            .iter()
            .find(|c| c.canonical.as_deref() == Some(reported.as_path()))
            .or_else(|| {
                self.candidates
                    .iter()
                    .find(|c| reported.ends_with(&c.normalized))
            })
            .map(|c| c.input.as_str())
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
