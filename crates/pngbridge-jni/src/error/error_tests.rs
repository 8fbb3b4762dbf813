#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(JniError::StringConversion("x".into()), "String conversion failed: x")]
#[test_case(JniError::ArrayAccess("x".into()), "Array access failed: x")]
#[test_case(JniError::InvalidPath("x".into()), "Invalid path: x")]
fn JniError___display___prefixes_kind(error: JniError, expected: &str) {
    assert_eq!(error.to_string(), expected);
}
