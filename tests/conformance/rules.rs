use super::common::rule;
use csvcheck::error::ParseErrorKind;
use csvcheck::parse::parse_rules;
use csvcheck::rules::{DEFAULT_RULES, RuleSet};

// ─── Built-in defaults ──────────────────────────────────────────────────────

#[test]
fn builtin_set_has_eight_rules() {
    assert_eq!(DEFAULT_RULES.len(), 8);
    assert_eq!(RuleSet::builtin().len(), 8);
}

#[test]
fn builtin_field_semantics() {
    let set = RuleSet::builtin();

    let user_id = set.get("User ID").expect("User ID rule");
    assert!(user_id.is_unique);
    assert!(!user_id.allow_empty);

    let email = set.get("Email").expect("Email rule");
    assert!(email.is_unique);
    assert!(email.allow_empty);

    let zip = set.get("Zip").expect("Zip rule");
    assert!(!zip.is_unique);
    assert!(!zip.allow_empty);

    let website = set.get("Website").expect("Website rule");
    assert!(!website.is_unique);
    assert!(website.allow_empty);
}

#[test]
fn default_is_the_builtin_set_not_an_empty_one() {
    assert_eq!(RuleSet::default(), RuleSet::builtin());
    assert_eq!(RuleSet::default().len(), 8);
}

#[test]
fn builtin_patterns_all_compile() {
    for r in RuleSet::builtin().iter() {
        assert!(
            regex::Regex::new(&r.pattern).is_ok(),
            "pattern for '{}' must compile",
            r.name
        );
    }
}

// ─── Set operations ─────────────────────────────────────────────────────────

#[test]
fn upsert_replaces_in_place_and_appends_new() {
    let mut set = RuleSet::from_rules([
        rule("A", "^a$", false, false),
        rule("B", "^b$", false, false),
    ]);

    set.upsert(rule("A", "^aa$", true, true));
    set.upsert(rule("C", "^c$", false, false));

    let names: Vec<_> = set.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    let a = set.get("A").unwrap();
    assert_eq!(a.pattern, "^aa$");
    assert!(a.is_unique);
}

#[test]
fn remove_by_name() {
    let mut set = RuleSet::from_rules([
        rule("A", "^a$", false, false),
        rule("B", "^b$", false, false),
    ]);
    let removed = set.remove("A").unwrap();
    assert_eq!(removed.pattern, "^a$");
    assert!(set.get("A").is_none());
    assert_eq!(set.len(), 1);
    assert!(set.remove("A").is_none());
}

#[test]
fn rename_keeps_position_and_rejects_collisions() {
    let mut set = RuleSet::from_rules([
        rule("A", "^a$", false, false),
        rule("B", "^b$", false, false),
    ]);

    assert!(set.rename("A", "Z"));
    let names: Vec<_> = set.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Z", "B"]);

    assert!(!set.rename("Z", "B"), "collision must be rejected");
    assert!(!set.rename("Gone", "X"), "unknown source must be rejected");
    assert!(set.rename("B", "B"), "no-op rename is allowed");
}

// ─── Document parsing ───────────────────────────────────────────────────────

#[test]
fn parses_a_well_formed_document_in_order() {
    let yaml = r#"
rules:
  - name: ID
    pattern: '^\d+$'
    unique: true
    allow_empty: false
  - name: Email
    pattern: '^$|^[^@\s]+@[^@\s]+\.[^@\s]+$'
    unique: true
    allow_empty: true
"#;
    let set = parse_rules(yaml).expect("should parse");
    let names: Vec<_> = set.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["ID", "Email"]);
    assert_eq!(set.get("ID").unwrap().pattern, r"^\d+$");
    assert!(set.get("Email").unwrap().allow_empty);
}

#[test]
fn boolean_literals_are_case_insensitive() {
    let yaml = r#"
rules:
  - name: A
    pattern: '^a$'
    unique: "True"
    allow_empty: "FALSE"
"#;
    let set = parse_rules(yaml).expect("should parse");
    let a = set.get("A").unwrap();
    assert!(a.is_unique);
    assert!(!a.allow_empty);
}

#[test]
fn empty_input_is_a_syntax_error() {
    let err = parse_rules("   \n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Syntax);
}

#[test]
fn non_mapping_root_is_rejected() {
    let err = parse_rules("- a\n- b\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TypeMismatch);
}

#[test]
fn unknown_top_level_key_is_rejected() {
    let err = parse_rules("other: 1\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TypeMismatch);
    assert_eq!(err.path.as_deref(), Some("other"));
}

#[test]
fn missing_rules_key_is_rejected() {
    let err = parse_rules("{}").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingField);
}

#[test]
fn missing_record_field_is_rejected_with_path() {
    let yaml = r#"
rules:
  - name: A
    pattern: '^a$'
    unique: true
"#;
    let err = parse_rules(yaml).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingField);
    assert_eq!(err.path.as_deref(), Some("rules[0].allow_empty"));
}

#[test]
fn non_boolean_flag_is_rejected() {
    let yaml = r#"
rules:
  - name: A
    pattern: '^a$'
    unique: maybe
    allow_empty: false
"#;
    let err = parse_rules(yaml).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TypeMismatch);
    assert_eq!(err.path.as_deref(), Some("rules[0].unique"));
}

#[test]
fn duplicate_rule_names_are_rejected() {
    let yaml = r#"
rules:
  - name: A
    pattern: '^a$'
    unique: false
    allow_empty: false
  - name: A
    pattern: '^b$'
    unique: false
    allow_empty: false
"#;
    let err = parse_rules(yaml).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::DuplicateRule);
    assert_eq!(err.path.as_deref(), Some("rules[1].name"));
}

#[test]
fn pattern_syntax_is_not_checked_at_load_time() {
    let yaml = r#"
rules:
  - name: Broken
    pattern: '(unclosed'
    unique: false
    allow_empty: false
"#;
    let set = parse_rules(yaml).expect("load must not compile patterns");
    assert_eq!(set.get("Broken").unwrap().pattern, "(unclosed");
}

// ─── Load-or-fallback ───────────────────────────────────────────────────────

#[test]
fn missing_file_falls_back_to_builtin() {
    let path = std::env::temp_dir().join("csvcheck-no-such-rules.yaml");
    let set = RuleSet::load_or_builtin(&path);
    assert_eq!(set, RuleSet::builtin());
}

#[test]
fn malformed_file_falls_back_to_builtin_not_a_partial_set() {
    let path = std::env::temp_dir().join("csvcheck-malformed-rules.yaml");
    std::fs::write(&path, "rules: [ {name: A} ]").unwrap();
    let set = RuleSet::load_or_builtin(&path);
    assert_eq!(set, RuleSet::builtin());
    std::fs::remove_file(&path).ok();
}

#[test]
fn well_formed_file_loads() {
    let path = std::env::temp_dir().join("csvcheck-good-rules.yaml");
    let yaml = "rules:\n  - name: Only\n    pattern: '^x$'\n    unique: false\n    allow_empty: true\n";
    std::fs::write(&path, yaml).unwrap();
    let set = RuleSet::load_or_builtin(&path);
    assert_eq!(set.len(), 1);
    assert!(set.get("Only").is_some());
    std::fs::remove_file(&path).ok();
}
