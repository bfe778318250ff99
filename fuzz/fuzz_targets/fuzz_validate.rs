#![no_main]

use libfuzzer_sys::fuzz_target;

use csvcheck::rules::RuleSet;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    // The engine must never panic: any input is either a report or a
    // fatal error, and the only fatal error with compilable patterns is
    // empty input.
    match csvcheck::check(&s, &RuleSet::builtin()) {
        Ok(report) => {
            if let csvcheck::Report::Failure { errors } = report {
                assert!(!errors.is_empty());
                for window in errors.windows(2) {
                    assert!(window[0].line <= window[1].line, "errors out of line order");
                }
            }
        }
        Err(csvcheck::CheckError::Input(_)) => {}
        Err(csvcheck::CheckError::Config(e)) => {
            panic!("builtin patterns must compile: {}", e)
        }
    }
});
