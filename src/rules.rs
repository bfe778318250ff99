//! Rule and rule-set types plus the built-in default rule registry.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::parse;

/// A named validation unit: a regex pattern the field value must match,
/// whether values must be unique across the file, and whether empty
/// values are permitted.
///
/// The pattern is not checked for syntactic validity here; a broken
/// pattern only surfaces when a validation run first compiles it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub pattern: String,
    #[serde(rename = "unique")]
    pub is_unique: bool,
    pub allow_empty: bool,
}

/// A built-in rule as a compile-time constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub is_unique: bool,
    pub allow_empty: bool,
}

/// The built-in default rule registry, used when no persisted rules
/// document is available.
pub static DEFAULT_RULES: &[DefaultRule] = &[
    DefaultRule {
        name: "Market Number",
        pattern: r"^\d+$",
        is_unique: false,
        allow_empty: false,
    },
    DefaultRule {
        name: "User ID",
        pattern: r"^\d+\d+[a-zA-Z]{2}$",
        is_unique: true,
        allow_empty: false,
    },
    DefaultRule {
        name: "Registered/Active/Deactive/BadEmail/Unsubscribed",
        pattern: r"^(Registered|Active|Deactive|BadEmail|Unsubscribed)$",
        is_unique: false,
        allow_empty: false,
    },
    DefaultRule {
        name: "Email",
        pattern: r"^$|^[^@\s]+@[^@\s]+\.[^@\s]+$",
        is_unique: true,
        allow_empty: true,
    },
    DefaultRule {
        name: "Phone Number",
        pattern: r"^$|^\d{3}-\d{3}-\d{4}$|^\(\d{3}\) \d{3}-\d{4}$",
        is_unique: false,
        allow_empty: true,
    },
    DefaultRule {
        name: "Street Address",
        pattern: r"^.*$",
        is_unique: false,
        allow_empty: true,
    },
    DefaultRule {
        name: "Zip",
        pattern: r"^\d{5}$",
        is_unique: false,
        allow_empty: false,
    },
    DefaultRule {
        name: "Website",
        pattern: r#"^$|^(http|https):\/\/[^ "\s]+$|^[^ "\s]+\.[^ "\s]+$"#,
        is_unique: false,
        allow_empty: true,
    },
];

/// An ordered collection of rules, keyed by unique name.
///
/// Order matters twice: it is the display order in any listing, and it is
/// the deterministic order used for header prefix matching and per-row
/// rule application. The original tool let an unordered map decide both;
/// here the sequence is explicit so "first rule wins per column" is a
/// testable property rather than an accident.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

/// The default rule set is the built-in eight-rule registry, not an
/// empty set: an empty set would validate anything as Success.
impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleSet {
    /// An empty rule set.
    pub fn new() -> Self {
        RuleSet { rules: Vec::new() }
    }

    /// The built-in default set of eight rules.
    pub fn builtin() -> Self {
        RuleSet {
            rules: DEFAULT_RULES
                .iter()
                .map(|r| Rule {
                    name: r.name.to_string(),
                    pattern: r.pattern.to_string(),
                    is_unique: r.is_unique,
                    allow_empty: r.allow_empty,
                })
                .collect(),
        }
    }

    /// Build a rule set from a sequence of rules.
    ///
    /// A rule whose name repeats an earlier one replaces it in place,
    /// keeping the earlier position.
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut set = RuleSet::new();
        for rule in rules {
            set.upsert(rule);
        }
        set
    }

    /// Load a rules document from `path`, falling back to the built-in
    /// defaults when the file is missing or fails to parse. Never yields
    /// a partially-loaded set.
    pub fn load_or_builtin(path: &Path) -> Self {
        let Ok(text) = std::fs::read_to_string(path) else {
            return RuleSet::builtin();
        };
        match parse::parse_rules(&text) {
            Ok(set) => set,
            Err(_) => RuleSet::builtin(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Enumerate rules in set order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Insert or update a rule. An existing rule with the same name is
    /// replaced in place; a new name is appended.
    pub fn upsert(&mut self, rule: Rule) {
        match self.rules.iter_mut().find(|r| r.name == rule.name) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// Remove a rule by name. Returns the removed rule, if any.
    pub fn remove(&mut self, name: &str) -> Option<Rule> {
        let idx = self.rules.iter().position(|r| r.name == name)?;
        Some(self.rules.remove(idx))
    }

    /// Rename a rule, keeping its position. Fails when `from` does not
    /// exist or `to` is already taken by another rule.
    pub fn rename(&mut self, from: &str, to: &str) -> bool {
        if from != to && self.get(to).is_some() {
            return false;
        }
        match self.rules.iter_mut().find(|r| r.name == from) {
            Some(rule) => {
                rule.name = to.to_string();
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
