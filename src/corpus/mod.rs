//! Fixed input/expected cases for checking an inflator end to end.
//!
//! A corpus is a TOML file of `[[cases]]`. The built-in corpus is embedded
//! and covers the behavior the library guarantees; `numinflate check` runs
//! it (or a user corpus) and exits non-zero on any failure.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::inflate::Inflator;

pub const DEFAULT_CASES_TOML: &str = include_str!("default_cases.toml");

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("corpus has no cases")]
    Empty,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    pub input: String,
    pub expected: String,
    pub category: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub skip: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Corpus {
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub status: CheckStatus,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckSummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub results: Vec<CaseResult>,
    pub summary: CheckSummary,
}

impl CheckReport {
    /// True when no case failed.
    pub fn passed(&self) -> bool {
        self.summary.fail == 0
    }
}

impl Corpus {
    /// The embedded default corpus.
    pub fn builtin() -> Corpus {
        Corpus::parse(DEFAULT_CASES_TOML).expect("built-in corpus TOML must be valid")
    }

    pub fn parse(toml_str: &str) -> Result<Corpus, CorpusError> {
        let corpus: Corpus =
            toml::from_str(toml_str).map_err(|e| CorpusError::Parse(e.to_string()))?;
        if corpus.cases.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(corpus)
    }

    pub fn load(path: &Path) -> Result<Corpus, CorpusError> {
        let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Corpus::parse(&content)
    }

    /// Run every case (optionally only one category) through `inflator`.
    pub fn run(&self, inflator: &Inflator, category: Option<&str>) -> CheckReport {
        let results: Vec<CaseResult> = self
            .cases
            .iter()
            .filter(|c| category.map_or(true, |cat| c.category == cat))
            .map(|case| {
                let (actual, status) = if case.skip {
                    (String::new(), CheckStatus::Skip)
                } else {
                    let actual = inflator.inflate(&case.input);
                    let status = if actual == case.expected {
                        CheckStatus::Pass
                    } else {
                        CheckStatus::Fail
                    };
                    (actual, status)
                };
                CaseResult {
                    input: case.input.clone(),
                    expected: case.expected.clone(),
                    actual,
                    status,
                    category: case.category.clone(),
                    note: case.note.clone(),
                }
            })
            .collect();

        let count = |s: CheckStatus| results.iter().filter(|r| r.status == s).count();
        let total = results.len();
        let pass = count(CheckStatus::Pass);
        let fail = count(CheckStatus::Fail);
        let skip = count(CheckStatus::Skip);
        let tested = total - skip;
        let rate = if tested > 0 {
            pass as f64 / tested as f64 * 100.0
        } else {
            0.0
        };
        debug!(total, pass, fail, skip, "corpus run");

        CheckReport {
            results,
            summary: CheckSummary {
                total,
                pass,
                fail,
                skip,
                pass_rate: format!("{:.1}%", rate),
            },
        }
    }
}
