//! Validation report
//!
//! The runner's output: one [`FileResult`] per target in input order, a
//! [`Summary`], and a binary outcome. Rendering is pure; printing the report
//! and setting the process exit status is left to the caller.

use serde::Serialize;
use std::fmt;

use crate::schema::Issues;

const RULE_WIDTH: usize = 50;

/// How a single target fared
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail { issues: Issues },
    /// The content could not be read or parsed, so no schema was applied
    LoadFailed { reason: String },
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileResult {
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub results: Vec<FileResult>,
    pub summary: Summary,
}

impl ValidationReport {
    pub fn new(results: Vec<FileResult>) -> Self {
        let passed = results.iter().filter(|r| r.outcome.is_pass()).count();
        let summary = Summary {
            total: results.len(),
            passed,
            failed: results.len() - passed,
        };
        Self { results, summary }
    }

    pub fn is_success(&self) -> bool {
        self.summary.failed == 0
    }

    /// Process exit status this report maps to: 0 on success, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    pub fn get(&self, name: &str) -> Option<&FileResult> {
        self.results.iter().find(|r| r.name == name)
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileResult> {
        self.results.iter().filter(|r| !r.outcome.is_pass())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for FileResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Pass => write!(f, "  ✓ [PASS] {}", self.name),
            Outcome::Fail { issues } => {
                write!(f, "  ✗ [FAIL] {}", self.name)?;
                for issue in issues {
                    write!(f, "\n    {} — {}", issue.path, issue.message)?;
                }
                Ok(())
            }
            Outcome::LoadFailed { reason } => {
                write!(f, "  ✗ [FAIL] {}\n    could not load: {}", self.name, reason)
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "─".repeat(RULE_WIDTH);

        for result in &self.results {
            writeln!(f, "{}", result)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "📊 Results: {} checked, {} passed, {} failed",
            self.summary.total, self.summary.passed, self.summary.failed
        )?;
        writeln!(f, "{}", rule)?;

        if self.is_success() {
            write!(f, "✅ All data files are valid!")
        } else {
            write!(f, "❌ Validation failed. Please fix the errors above.")
        }
    }
}
