use pretty_assertions::assert_eq;

use crate::common::LtTest;

#[test]
fn test_contains_inclusive_start() {
    let test = LtTest::new();

    let result = test.lt(&["contains", "[1.0, 2.0)", "1.0"]);
    result.assert_success();
    assert_eq!(result.stdout(), "true\n");

    let result = test.lt(&["contains", "[1.0, 2.0)", "1.5"]);
    result.assert_success();
    assert_eq!(result.stdout(), "true\n");
}

#[test]
fn test_contains_outside_exits_with_failure() {
    let test = LtTest::new();

    let result = test.lt(&["contains", "[1.0, 2.0)", "2.0"]);
    result.assert_failure();
    assert_eq!(result.code(), Some(1));
    assert_eq!(result.stdout(), "false\n");

    let result = test.lt(&["contains", "(1.0, 2.0]", "1.0"]);
    result.assert_failure();
    assert_eq!(result.stdout(), "false\n");
}

#[test]
fn test_contains_invalid_range() {
    let test = LtTest::new();
    let result = test.lt(&["contains", "{1.0, 2.0)", "1.0"]);
    result.assert_failure();
    assert_eq!(result.code(), Some(2));
    assert_eq!(result.stdout(), "");
    assert!(
        result.stderr().contains("Invalid version range '{1.0, 2.0)'"),
        "unexpected stderr: {}",
        result.stderr()
    );
}

#[test]
fn test_contains_unicode_padding() {
    let test = LtTest::new();

    let result = test.lt(&["contains", "[1.0,\u{c}2.0]", "2.0"]);
    result.assert_success();
    assert_eq!(result.stdout(), "true\n");

    let result = test.lt(&["contains", "[\u{a0}1.0, 2.0\u{a0})", "2.0"]);
    assert_eq!(result.code(), Some(1));
    assert_eq!(result.stdout(), "false\n");
}
