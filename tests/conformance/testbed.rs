use csvcheck::testbed::{Span, match_spans, verdict};

#[test]
fn spans_of_every_match_are_reported() {
    let spans = match_spans(r"\d+", "a12b345c").expect("pattern compiles");
    assert_eq!(
        spans,
        vec![Span { start: 1, end: 3 }, Span { start: 4, end: 7 }]
    );
}

#[test]
fn testbed_matching_is_case_sensitive() {
    let spans = match_spans("abc", "ABC").expect("pattern compiles");
    assert!(spans.is_empty());
}

#[test]
fn full_match_passes() {
    let spans = match_spans(r"^\d{5}$", "12345").expect("pattern compiles");
    assert!(verdict(&spans, "12345"));
}

#[test]
fn empty_sample_never_passes() {
    let spans = match_spans(".*", "").expect("pattern compiles");
    assert!(!verdict(&spans, ""));
}

#[test]
fn unmatched_tail_fails() {
    let spans = match_spans(r"\d+", "123x").expect("pattern compiles");
    assert!(!verdict(&spans, "123x"));
}

#[test]
fn gaps_before_the_final_match_are_ignored() {
    // Only the last match's end offset decides the verdict.
    let spans = match_spans("ab", "abXab").expect("pattern compiles");
    assert_eq!(spans.len(), 2);
    assert!(verdict(&spans, "abXab"));
}

#[test]
fn no_match_fails() {
    let spans = match_spans("xyz", "abc").expect("pattern compiles");
    assert!(!verdict(&spans, "abc"));
}

#[test]
fn invalid_pattern_is_a_config_error() {
    let err = match_spans("(unclosed", "abc").unwrap_err();
    assert_eq!(err.pattern, "(unclosed");
}
