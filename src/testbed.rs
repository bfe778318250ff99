//! Pattern testbed for rule editors.
//!
//! A rule-editing front end wants live feedback while a pattern is being
//! typed: which parts of a sample value match, and whether the sample as
//! a whole passes. The span computation lives here so the presentation
//! layer only has to paint ranges.

use regex::Regex;

use crate::error::ConfigError;

/// A half-open byte range of one pattern match within the sample text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Compute the non-overlapping match spans of `pattern` over `text`.
///
/// Unlike the validation engine, matching here is case-sensitive — the
/// testbed shows the pattern exactly as written.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the pattern does not compile; the rule
/// name is empty because the pattern may not be attached to a rule yet.
pub fn match_spans(pattern: &str, text: &str) -> Result<Vec<Span>, ConfigError> {
    let regex = Regex::new(pattern).map_err(|e| ConfigError {
        rule: String::new(),
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    Ok(regex
        .find_iter(text)
        .map(|m| Span {
            start: m.start(),
            end: m.end(),
        })
        .collect())
}

/// The testbed's pass/fail verdict: true when the sample is non-empty and
/// the final match ends exactly at the end of the sample. Gaps between
/// earlier matches are not considered; only the tail counts.
pub fn verdict(spans: &[Span], text: &str) -> bool {
    !text.is_empty() && spans.last().is_some_and(|s| s.end == text.len())
}
