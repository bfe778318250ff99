#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let rules = match csvcheck::parse_rules(&s) {
        Ok(r) => r,
        Err(_) => return,
    };

    let yaml = match csvcheck::serialize_rules(&rules) {
        Ok(y) => y,
        Err(_) => return,
    };

    // Whatever we can serialize we must be able to parse back, losslessly.
    match csvcheck::parse_rules(&yaml) {
        Ok(reparsed) => assert_eq!(
            reparsed, rules,
            "round-trip changed the rule set.\nSerialized:\n{}",
            yaml
        ),
        Err(e) => panic!(
            "round-trip failure: serialized rules cannot be re-parsed: {}\n{}",
            e, yaml
        ),
    }
});
