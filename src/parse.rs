//! Rules-document (YAML) → [`RuleSet`] materialization.

use crate::error::{ParseError, ParseErrorKind};
use crate::rules::{Rule, RuleSet};

/// Parse a YAML rules document into a [`RuleSet`].
///
/// Expected shape:
///
/// ```yaml
/// rules:
///   - name: Email
///     pattern: '^$|^[^@\s]+@[^@\s]+\.[^@\s]+$'
///     unique: true
///     allow_empty: true
/// ```
///
/// Boolean literals are accepted case-insensitively, bare or quoted
/// (`true`, `True`, `"FALSE"`, ...). Pattern syntax is NOT checked here;
/// an invalid pattern only fails when a validation run first uses it.
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed YAML, a non-mapping root, a
/// missing or non-sequence `rules` key, missing record fields, non-string
/// or non-boolean field values, or a duplicated rule name.
pub fn parse_rules(input: &str) -> Result<RuleSet, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError {
            kind: ParseErrorKind::Syntax,
            message: "empty input".to_string(),
            path: None,
        });
    }

    // Deserialize through serde_json::Value so field access and error
    // paths are uniform regardless of the YAML flavor used.
    let value: serde_json::Value = serde_saphyr::from_str(input).map_err(|e| ParseError {
        kind: ParseErrorKind::Syntax,
        message: e.to_string(),
        path: None,
    })?;

    let Some(root) = value.as_object() else {
        return Err(ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: "document root must be a mapping".to_string(),
            path: None,
        });
    };

    for key in root.keys() {
        if key != "rules" {
            return Err(ParseError {
                kind: ParseErrorKind::TypeMismatch,
                message: format!("unknown top-level field: {}", key),
                path: Some(key.clone()),
            });
        }
    }

    let records = match root.get("rules") {
        Some(serde_json::Value::Array(records)) => records,
        Some(_) => {
            return Err(ParseError {
                kind: ParseErrorKind::TypeMismatch,
                message: "rules must be a sequence".to_string(),
                path: Some("rules".to_string()),
            });
        }
        None => {
            return Err(ParseError {
                kind: ParseErrorKind::MissingField,
                message: "missing top-level 'rules' key".to_string(),
                path: None,
            });
        }
    };

    let mut set = RuleSet::new();
    for (i, record) in records.iter().enumerate() {
        let rule = parse_record(record, i)?;
        if set.get(&rule.name).is_some() {
            return Err(ParseError {
                kind: ParseErrorKind::DuplicateRule,
                message: format!("duplicate rule name: '{}'", rule.name),
                path: Some(format!("rules[{}].name", i)),
            });
        }
        set.upsert(rule);
    }

    Ok(set)
}

fn parse_record(record: &serde_json::Value, index: usize) -> Result<Rule, ParseError> {
    let path = format!("rules[{}]", index);
    let Some(obj) = record.as_object() else {
        return Err(ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: "rule record must be a mapping".to_string(),
            path: Some(path),
        });
    };

    Ok(Rule {
        name: string_field(obj, &path, "name")?,
        pattern: string_field(obj, &path, "pattern")?,
        is_unique: bool_field(obj, &path, "unique")?,
        allow_empty: bool_field(obj, &path, "allow_empty")?,
    })
}

fn string_field(
    obj: &serde_json::Map<String, serde_json::Value>,
    path: &str,
    key: &str,
) -> Result<String, ParseError> {
    match obj.get(key) {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: format!("{} must be a string, got {}", key, other),
            path: Some(format!("{}.{}", path, key)),
        }),
        None => Err(ParseError {
            kind: ParseErrorKind::MissingField,
            message: format!("missing field: {}", key),
            path: Some(format!("{}.{}", path, key)),
        }),
    }
}

fn bool_field(
    obj: &serde_json::Map<String, serde_json::Value>,
    path: &str,
    key: &str,
) -> Result<bool, ParseError> {
    match obj.get(key) {
        Some(serde_json::Value::Bool(b)) => Ok(*b),
        // Boolean literals round-tripped as text are accepted
        // case-insensitively.
        Some(serde_json::Value::String(s)) => match s.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ParseError {
                kind: ParseErrorKind::TypeMismatch,
                message: format!("{} must be 'true' or 'false', got '{}'", key, s),
                path: Some(format!("{}.{}", path, key)),
            }),
        },
        Some(other) => Err(ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: format!("{} must be a boolean, got {}", key, other),
            path: Some(format!("{}.{}", path, key)),
        }),
        None => Err(ParseError {
            kind: ParseErrorKind::MissingField,
            message: format!("missing field: {}", key),
            path: Some(format!("{}.{}", path, key)),
        }),
    }
}
