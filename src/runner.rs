//! Validation Runner
//!
//! The lenient path: every target is validated, failures are isolated per
//! target, and the outcome is a [`ValidationReport`]. A bad document never
//! stops the run.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domains::Domain;
use crate::error::LoadError;
use crate::loader::ContentLoader;
use crate::report::{FileResult, Outcome, ValidationReport};
use crate::schema::Schema;

/// A named document paired with the schema it must satisfy
#[derive(Debug)]
pub struct ValidationTarget {
    pub name: String,
    pub schema: Schema,
    pub content: Result<Value, LoadError>,
}

impl ValidationTarget {
    pub fn new(
        name: impl Into<String>,
        schema: impl Into<Schema>,
        content: Result<Value, LoadError>,
    ) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            content,
        }
    }

    pub fn for_domain(domain: Domain, loader: &ContentLoader) -> Self {
        Self::new(domain.file_name(), domain.schema(), loader.load_domain(domain))
    }

    fn run(&self) -> FileResult {
        let outcome = match &self.content {
            Err(e) => {
                warn!(target_name = %self.name, error = %e, "Content could not be loaded");
                Outcome::LoadFailed {
                    reason: e.to_string(),
                }
            }
            Ok(value) => match self.schema.validate(value) {
                Ok(_) => {
                    debug!(target_name = %self.name, "Content is valid");
                    Outcome::Pass
                }
                Err(issues) => {
                    warn!(target_name = %self.name, issues = issues.len(), "Content failed validation");
                    Outcome::Fail { issues }
                }
            },
        };

        FileResult {
            name: self.name.clone(),
            outcome,
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationRunner {
    targets: Vec<ValidationTarget>,
}

impl ValidationRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, target: ValidationTarget) -> Self {
        self.targets.push(target);
        self
    }

    pub fn push(&mut self, target: ValidationTarget) {
        self.targets.push(target);
    }

    /// One target per domain, in [`Domain::ALL`] order
    pub fn for_domains(loader: &ContentLoader, domains: &[Domain]) -> Self {
        let mut runner = Self::new();
        for &domain in domains {
            runner.push(ValidationTarget::for_domain(domain, loader));
        }
        runner
    }

    pub fn for_all_domains(loader: &ContentLoader) -> Self {
        Self::for_domains(loader, &Domain::ALL)
    }

    pub fn targets(&self) -> &[ValidationTarget] {
        &self.targets
    }

    /// Validate every target. Results keep the order targets were added in.
    pub fn run(&self) -> ValidationReport {
        let results: Vec<FileResult> = self.targets.iter().map(ValidationTarget::run).collect();
        let report = ValidationReport::new(results);

        info!(
            total = report.summary.total,
            passed = report.summary.passed,
            failed = report.summary.failed,
            "Validation run complete"
        );
        report
    }
}
