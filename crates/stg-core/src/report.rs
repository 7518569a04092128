//! Outcome of one validation scan and how it is reported.

use serde::Serialize;

use crate::issues::ContentIssue;

/// Append-only accumulator for one validation scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub projects_checked: usize,
    pub stages_checked: usize,
    pub templates_checked: usize,
    pub issues: Vec<ContentIssue>,
}

impl ValidationReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = ContentIssue>) {
        self.issues.extend(issues);
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// The user-facing line for every issue, in collection order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// One-line outcome printed after the issue list.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.is_valid() {
            format!(
                "All checks passed ({} projects, {} stages, {} templates)",
                self.projects_checked, self.stages_checked, self.templates_checked
            )
        } else {
            format!(
                "Validation failed with {} error(s) ({} projects, {} stages, {} templates)",
                self.issue_count(),
                self.projects_checked,
                self.stages_checked,
                self.templates_checked
            )
        }
    }

    /// Process exit code for the CI entry point.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.is_valid())
    }
}
