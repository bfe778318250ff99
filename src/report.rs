//! Pass/fail aggregation of a validation run.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Outcome of one validation run: either every record passed, or an
/// ordered list of diagnostics in discovery order (line order; within a
/// line, the field-count check first, else rules in set order).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Report {
    Success { record_count: usize },
    Failure { errors: Vec<ValidationError> },
}

impl Report {
    /// Fold an ordered error list into a report. `record_count` is the
    /// number of data lines processed, independent of how many erred.
    pub fn from_errors(errors: Vec<ValidationError>, record_count: usize) -> Self {
        if errors.is_empty() {
            Report::Success { record_count }
        } else {
            Report::Failure { errors }
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Report::Success { .. })
    }

    /// Render the report as human-readable text. `file_label` names the
    /// validated input in the success message, typically the file's base
    /// name.
    pub fn render(&self, file_label: &str) -> String {
        match self {
            Report::Success { record_count } => {
                format!(
                    "{} is VALID\n{} correct records found.",
                    file_label, record_count
                )
            }
            Report::Failure { errors } => errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
