//! Compile-fail tests to verify error messages
//!
//! These tests ensure that unsupported targets and invalid attributes are
//! rejected at expansion time with a message pointing at the offending code.

#[test]
fn ui_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
