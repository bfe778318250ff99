use csvcheck::split::split_line;

#[test]
fn plain_fields() {
    assert_eq!(split_line("a,b,c"), vec!["a", "b", "c"]);
}

#[test]
fn quoted_field_with_embedded_comma() {
    assert_eq!(split_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
}

#[test]
fn empty_line_yields_one_empty_field() {
    assert_eq!(split_line(""), vec![""]);
}

#[test]
fn trailing_comma_yields_trailing_empty_field() {
    assert_eq!(split_line("a,"), vec!["a", ""]);
}

#[test]
fn leading_comma_yields_leading_empty_field() {
    assert_eq!(split_line(",a"), vec!["", "a"]);
}

#[test]
fn consecutive_commas_yield_empty_fields() {
    assert_eq!(split_line("a,,b"), vec!["a", "", "b"]);
}

#[test]
fn quoted_empty_field() {
    assert_eq!(split_line(r#"a,"",b"#), vec!["a", "", "b"]);
}

#[test]
fn quotes_are_not_escapable() {
    // The first closing quote terminates the field; the rest up to the
    // next comma is dropped.
    assert_eq!(split_line(r#""ab""cd",e"#), vec!["ab", "e"]);
}

#[test]
fn stray_text_after_closing_quote_is_skipped() {
    assert_eq!(split_line(r#""ab"xyz,d"#), vec!["ab", "d"]);
}

#[test]
fn unterminated_quote_is_a_plain_field_keeping_the_quote() {
    // With no closing quote the field is not quoted at all: the leading
    // quote stays in the value and the field still ends at a comma.
    assert_eq!(split_line(r#"a,"bc,d"#), vec!["a", "\"bc", "d"]);
    assert_eq!(split_line(r#"a,"bc"#), vec!["a", "\"bc"]);
    assert_eq!(split_line(r#""bc"#), vec!["\"bc"]);
}

#[test]
fn closing_quote_is_searched_past_commas() {
    assert_eq!(split_line(r#"a,"b,c""#), vec!["a", "b,c"]);
}

#[test]
fn quote_mid_field_is_literal() {
    // Only a quote at field start opens a quoted field.
    assert_eq!(split_line(r#"a"b,c"#), vec![r#"a"b"#, "c"]);
}

#[test]
fn single_quoted_field() {
    assert_eq!(split_line(r#""a,b""#), vec!["a,b"]);
}

#[test]
fn whitespace_is_preserved() {
    assert_eq!(split_line(" a , b "), vec![" a ", " b "]);
}

#[test]
fn multibyte_content() {
    assert_eq!(split_line(r#"héllo,"wörld,ä",ß"#), vec!["héllo", "wörld,ä", "ß"]);
}
