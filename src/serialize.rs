//! [`RuleSet`] → YAML rules-document serialization.

use serde_json::{Map, Value, json};

use crate::error::SerializeError;
use crate::rules::RuleSet;

/// Serialize a rule set to a YAML rules document.
///
/// Rules are emitted in set order with the four fields `name`, `pattern`,
/// `unique`, `allow_empty` per record. The output parses back via
/// [`crate::parse::parse_rules`] into an equal set.
pub fn serialize_rules(rules: &RuleSet) -> Result<String, SerializeError> {
    // Build a serde_json::Value first so key ordering is deterministic.
    let records: Vec<Value> = rules
        .iter()
        .map(|r| {
            let mut obj = Map::new();
            obj.insert("name".to_string(), json!(r.name));
            obj.insert("pattern".to_string(), json!(r.pattern));
            obj.insert("unique".to_string(), json!(r.is_unique));
            obj.insert("allow_empty".to_string(), json!(r.allow_empty));
            Value::Object(obj)
        })
        .collect();

    let mut root = Map::new();
    root.insert("rules".to_string(), Value::Array(records));

    serde_saphyr::to_string(&Value::Object(root)).map_err(|e| SerializeError {
        message: format!("failed to serialize rules to YAML: {}", e),
    })
}
