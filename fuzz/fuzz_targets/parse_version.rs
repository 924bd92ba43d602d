#![no_main]

use libfuzzer_sys::fuzz_target;
use lt_version::VersionSpec;

fuzz_target!(|data: &str| {
    if let Ok(version) = VersionSpec::parse(data) {
        let reparsed = VersionSpec::parse(&version.to_string()).unwrap();
        assert_eq!(reparsed, version);
    }
});
