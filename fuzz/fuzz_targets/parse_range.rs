#![no_main]

use libfuzzer_sys::fuzz_target;
use lt_version::RangeSpec;

fuzz_target!(|data: &str| {
    if let Ok(range) = RangeSpec::parse(data) {
        let reparsed = RangeSpec::parse(&range.to_string()).unwrap();
        assert_eq!(reparsed, range);
    }
});
