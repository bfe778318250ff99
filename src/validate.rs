//! The validation engine: applies a [`RuleSet`] to CSV text and
//! accumulates **all** row diagnostics, not just the first.
//!
//! The run is single-threaded and fully in-memory: every line is split
//! and checked strictly in order, because diagnostics must report in line
//! order and uniqueness is first-occurrence-wins.

use regex::{Regex, RegexBuilder};
use std::collections::{HashMap, HashSet};

use crate::error::{CheckError, ConfigError, ErrorKind, InputError, ValidationError};
use crate::header::{HeaderMap, resolve_header};
use crate::report::Report;
use crate::rules::{Rule, RuleSet};
use crate::split::split_line;

/// Per-run memory of values already seen for each unique rule.
pub type UniquenessTracker = HashMap<String, HashSet<String>>;

/// A rule bound to a header column, with its pattern compiled for the run.
struct BoundRule<'a> {
    rule: &'a Rule,
    column: usize,
    regex: Regex,
}

/// Validate CSV text against a rule set.
///
/// Line 1 is the header; every subsequent physical line is one record.
/// Rules are bound to columns by [`resolve_header`]; rules without a
/// matching column are silently skipped. Row diagnostics are accumulated
/// into the returned [`Report`] and never terminate the run early.
///
/// # Errors
///
/// Returns [`CheckError::Input`] for empty input, and
/// [`CheckError::Config`] when a header-bound rule's pattern fails to
/// compile. Both are fatal: no partial report is produced.
pub fn validate(input: &str, rules: &RuleSet) -> Result<Report, CheckError> {
    let lines: Vec<&str> = input.lines().collect();
    if lines.is_empty() {
        return Err(InputError::empty().into());
    }

    let header = split_line(lines[0]);
    let header_map = resolve_header(&header, rules);
    let bound = bind_rules(rules, &header_map)?;

    let mut tracker: UniquenessTracker = UniquenessTracker::new();
    let mut errors = Vec::new();
    for (i, raw_line) in lines.iter().copied().enumerate().skip(1) {
        check_row(
            raw_line,
            i + 1,
            header.len(),
            &bound,
            &mut tracker,
            &mut errors,
        );
    }

    Ok(Report::from_errors(errors, lines.len() - 1))
}

/// Compile the pattern of every header-bound rule, preserving rule-set
/// order. Patterns of unbound rules are never compiled, so a broken
/// pattern on a rule that is not in play does not fail the run.
fn bind_rules<'a>(
    rules: &'a RuleSet,
    header_map: &HeaderMap,
) -> Result<Vec<BoundRule<'a>>, ConfigError> {
    let mut bound = Vec::new();
    for rule in rules {
        let Some(&column) = header_map.get(&rule.name) else {
            continue;
        };
        let regex = RegexBuilder::new(&rule.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ConfigError {
                rule: rule.name.clone(),
                pattern: rule.pattern.clone(),
                message: e.to_string(),
            })?;
        bound.push(BoundRule {
            rule,
            column,
            regex,
        });
    }
    Ok(bound)
}

/// Validate one data row, appending zero or more diagnostics.
///
/// A field-count mismatch yields exactly one diagnostic and suppresses
/// all rule checks for the row. Otherwise every bound rule is applied in
/// rule-set order; the pattern and uniqueness checks are independent, so
/// one value can produce both a `PatternMismatch` and a `DuplicateValue`.
fn check_row(
    raw_line: &str,
    line_no: usize,
    header_len: usize,
    bound: &[BoundRule<'_>],
    tracker: &mut UniquenessTracker,
    errors: &mut Vec<ValidationError>,
) {
    let fields = split_line(raw_line);
    if fields.len() != header_len {
        errors.push(ValidationError {
            line: line_no,
            column: 0,
            rule: String::new(),
            kind: ErrorKind::FieldCountMismatch,
            value: String::new(),
        });
        return;
    }

    for b in bound {
        let value = fields[b.column].trim();

        // Unanchored search: the pattern's own anchors decide whether a
        // partial match is accepted.
        if !b.regex.is_match(value) {
            errors.push(ValidationError {
                line: line_no,
                column: column_of(raw_line, value),
                rule: b.rule.name.clone(),
                kind: ErrorKind::PatternMismatch,
                value: value.to_string(),
            });
        }

        if b.rule.is_unique && !(b.rule.allow_empty && value.is_empty()) {
            let seen = tracker.entry(b.rule.name.clone()).or_default();
            if !seen.insert(value.to_string()) {
                errors.push(ValidationError {
                    line: line_no,
                    column: column_of(raw_line, value),
                    rule: b.rule.name.clone(),
                    kind: ErrorKind::DuplicateValue,
                    value: value.to_string(),
                });
            }
        }
    }
}

/// Best-effort column number: 1 + offset of the first occurrence of the
/// trimmed value in the raw line, or 0 when absent. An empty value or a
/// value that also appears earlier in the line yields an approximate
/// position; consumers rely on this exact approximation, so it is not
/// corrected to a true field offset.
fn column_of(raw_line: &str, value: &str) -> usize {
    raw_line.find(value).map_or(0, |i| i + 1)
}
