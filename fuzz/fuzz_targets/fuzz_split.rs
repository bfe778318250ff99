#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    for line in s.lines() {
        let fields = csvcheck::split::split_line(line);

        // Splitting an empty string yields one empty segment; every line
        // therefore produces at least one field.
        assert!(!fields.is_empty(), "split produced zero fields: {:?}", line);

        // No field may contain more text than the line itself.
        let total: usize = fields.iter().map(String::len).sum();
        assert!(
            total <= line.len(),
            "fields longer than input: {:?} -> {:?}",
            line,
            fields
        );
    }
});
