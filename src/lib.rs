//! Rule-based validation for CSV-shaped text files.
//!
//! Records are validated against a configurable set of named field rules,
//! each combining a regex pattern, a uniqueness requirement, and an
//! empty-value policy. The crate provides the complete pipeline:
//!
//! ```text
//! parse_rules(yaml) → RuleSet → validate(csv, &rules) → Report
//!                             → serialize_rules(&rules) → yaml
//! ```
//!
//! Header columns are bound to rules by literal prefix match on the rule
//! name; rules without a matching column are skipped. Every data row is
//! checked against every bound rule, all diagnostics are accumulated, and
//! the run ends in either [`report::Report::Success`] with a record count
//! or [`report::Report::Failure`] with the ordered diagnostic list.
//!
//! # Quick Start
//!
//! ```rust
//! use csvcheck::rules::{Rule, RuleSet};
//!
//! let rules = RuleSet::from_rules([
//!     Rule {
//!         name: "ID".to_string(),
//!         pattern: r"^\d+$".to_string(),
//!         is_unique: true,
//!         allow_empty: false,
//!     },
//! ]);
//!
//! let report = csvcheck::check("ID,Name\n1,alice\n2,bob", &rules).unwrap();
//! assert!(report.is_valid());
//! ```

pub mod error;
pub mod header;
pub mod parse;
pub mod report;
pub mod rules;
pub mod serialize;
pub mod split;
pub mod testbed;
pub mod validate;

pub use error::*;
pub use report::Report;
pub use rules::{Rule, RuleSet};

// Re-export entry-point functions at the crate root for convenience.
pub use parse::parse_rules;
pub use serialize::serialize_rules;
pub use validate::validate;

use std::path::Path;

/// Convenience entry point: validate CSV text against a rule set.
///
/// Alias for [`validate::validate`].
///
/// # Errors
///
/// Returns [`CheckError`] for unusable input or a broken rule pattern;
/// row diagnostics live inside the returned report, never here.
pub fn check(input: &str, rules: &RuleSet) -> Result<Report, CheckError> {
    validate::validate(input, rules)
}

/// Validate a CSV file on disk and render the outcome as text: a success
/// message naming the file and the number of correct records, or one
/// human-readable line per diagnostic in report order.
///
/// # Errors
///
/// Returns [`CheckError::Input`] when the file cannot be read or is
/// empty, and [`CheckError::Config`] for a broken rule pattern.
pub fn check_file(path: &Path, rules: &RuleSet) -> Result<String, CheckError> {
    let input = std::fs::read_to_string(path).map_err(|e| InputError {
        kind: InputErrorKind::Io,
        message: format!("cannot read {}: {}", path.display(), e),
    })?;

    let report = validate::validate(&input, rules)?;

    let label = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    Ok(report.render(&label))
}
