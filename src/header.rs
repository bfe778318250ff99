//! Header resolution: binding header columns to rule names.

use std::collections::HashMap;

use crate::rules::RuleSet;

/// Rule name → column index for one validation run. Partial: a rule with
/// no matching header column is simply absent and takes no part in row
/// checks.
pub type HeaderMap = HashMap<String, usize>;

/// Bind header columns to rules by literal, case-sensitive prefix match.
///
/// For each column in order, the first rule (in set order) whose name is
/// a prefix of the header text claims that column; scanning for the
/// column stops at the first match. When a later column also matches a
/// rule already bound, the later column index overwrites the earlier
/// binding — each rule ends up on the LAST matching column. That
/// last-wins behavior is deliberate and kept compatible with existing
/// rule files; do not change it to first-wins.
pub fn resolve_header(header: &[String], rules: &RuleSet) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (i, text) in header.iter().enumerate() {
        for rule in rules {
            if text.starts_with(&rule.name) {
                map.insert(rule.name.clone(), i);
                break;
            }
        }
    }
    map
}
