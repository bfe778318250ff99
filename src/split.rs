//! Line-oriented field splitting.
//!
//! One physical line is one record. Fields are comma-separated with an
//! optional double-quote wrapper that makes embedded commas literal.
//! There is no escape sequence for quotes: the first closing quote always
//! terminates a quoted field.

/// Split one line of text into its ordered field values.
///
/// A field starts at the beginning of the line or immediately after a
/// comma. If it starts with `"` and a closing `"` exists, everything up
/// to (not including) that quote is the value and commas inside are
/// literal; any stray text between the closing quote and the next comma
/// is skipped. Otherwise the value runs to the next comma or end of
/// line. A quote with no closing quote does not open a quoted field: the
/// field is captured plain, leading `"` included, up to the next comma.
///
/// An empty line yields a single empty field, never zero fields.
///
/// # Example
///
/// ```rust
/// let fields = csvcheck::split::split_line(r#"a,"b,c",d"#);
/// assert_eq!(fields, vec!["a", "b,c", "d"]);
/// ```
pub fn split_line(line: &str) -> Vec<String> {
    let bytes = line.as_bytes();
    let mut fields = Vec::new();
    let mut i = 0;

    loop {
        if i < bytes.len()
            && bytes[i] == b'"'
            && let Some(offset) = line[i + 1..].find('"')
        {
            let start = i + 1;
            let end = start + offset;
            fields.push(line[start..end].to_string());
            // Skip anything between the closing quote and the next comma.
            i = end + 1;
            while i < bytes.len() && bytes[i] != b',' {
                i += 1;
            }
        } else {
            let start = i;
            while i < bytes.len() && bytes[i] != b',' {
                i += 1;
            }
            fields.push(line[start..i].to_string());
        }

        if i >= bytes.len() {
            break;
        }
        i += 1; // consume the comma
    }

    fields
}
