use indoc::indoc;
use pretty_assertions::assert_eq;

use crate::common::LtTest;

#[test]
fn test_compare() {
    let test = LtTest::new();

    let result = test.lt(&["compare", "2", "10"]);
    result.assert_success();
    assert_eq!(result.stdout(), "2.0 < 10.0\n");

    let result = test.lt(&["compare", "1.0.0", "1.0.0-SNAPSHOT"]);
    result.assert_success();
    assert_eq!(result.stdout(), "1.0 > 1.0-SNAPSHOT\n");

    let result = test.lt(&["compare", "1", "1.0.0"]);
    result.assert_success();
    assert_eq!(result.stdout(), "1.0 = 1.0\n");
}

#[test]
fn test_compare_invalid_version() {
    let test = LtTest::new();
    let result = test.lt(&["compare", "Z.0", "1.0"]);
    result.assert_failure();
    assert_eq!(result.code(), Some(2));
    let stderr = result.stderr();
    assert!(
        stderr.contains("Invalid version number 'Z.0'"),
        "unexpected stderr: {stderr}"
    );
    assert!(stderr.contains("lt::invalid_format"), "unexpected stderr: {stderr}");
}

#[test]
fn test_ensure() {
    let test = LtTest::new();

    let result = test.lt(&["ensure", "1.2.3", "1.2"]);
    result.assert_success();
    assert_eq!(result.stdout(), "1.2.3 >= 1.2\n");

    let result = test.lt(&["ensure", "1.2-RC1", "1.2"]);
    result.assert_failure();
    assert_eq!(result.code(), Some(2));
    assert!(
        result
            .stderr()
            .contains("Version 1.2-RC1 is older than the required 1.2"),
        "unexpected stderr: {}",
        result.stderr()
    );
}

#[test]
fn test_bump() {
    let test = LtTest::new();

    let result = test.lt(&["bump", "1.2.3"]);
    result.assert_success();
    assert_eq!(result.stdout(), "1.2.4\n");

    let result = test.lt(&["bump", "1.2.3-RC1", "--field", "major"]);
    result.assert_success();
    assert_eq!(result.stdout(), "2.2.3-RC1\n");

    let result = test.lt(&["bump", "1.2.3", "--field", "build"]);
    result.assert_failure();
}

#[test]
fn test_canonical() {
    let test = LtTest::new();

    let result = test.lt(&["canonical", "1.2.0"]);
    result.assert_success();
    assert_eq!(result.stdout(), "1.2\n");

    let result = test.lt(&["canonical", "( 1.0,   2.0 )"]);
    result.assert_success();
    assert_eq!(result.stdout(), "(1.0, 2.0)\n");
}

#[test]
fn test_sort_arguments() {
    let test = LtTest::new();
    let result = test.lt(&["sort", "10", "2", "1.0.0-B", "1.0.0", "1.0.0-A"]);
    result.assert_success();
    assert_eq!(
        result.stdout(),
        indoc! {"
            1.0-A
            1.0-B
            1.0
            2.0
            10.0
        "}
    );
}

#[test]
fn test_sort_stdin_reversed() {
    let test = LtTest::new();
    let result = test.lt_with_stdin(&["sort", "--reverse"], "1.2\n\n1.10\n1.9.1\n");
    result.assert_success();
    assert_eq!(
        result.stdout(),
        indoc! {"
            1.10
            1.9.1
            1.2
        "}
    );
}

#[test]
fn test_sort_json_from_env() {
    let mut test = LtTest::new();
    test.env.insert("LT_FORMAT".into(), "json".into());

    let result = test.lt(&["sort", "2.0", "1.0-RC1", "1.0"]);
    result.assert_success();
    assert_eq!(result.stdout(), "[\"1.0-RC1\",\"1.0\",\"2.0\"]\n");
}
