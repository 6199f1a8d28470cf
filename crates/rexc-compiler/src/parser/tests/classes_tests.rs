//! Character class and named set parsing tests.

use crate::test_utils::expect_ast;

#[test]
fn single_characters() {
    insta::assert_snapshot!(expect_ast("[abc]"), @"Class 'a' 'b' 'c'");
}

#[test]
fn ranges_are_kept_as_written() {
    insta::assert_snapshot!(expect_ast("[z-a0-9x]"), @"Class 'z'-'a' '0'-'9' 'x'");
}

#[test]
fn negated_class() {
    insta::assert_snapshot!(expect_ast("[^a-z]"), @"Class ^'a'-'z'");
}

#[test]
fn caret_after_first_position_is_literal() {
    insta::assert_snapshot!(expect_ast("[a^]"), @"Class 'a' '^'");
}

#[test]
fn leading_and_trailing_dash_are_literal() {
    insta::assert_snapshot!(expect_ast("[-a-]"), @"Class '-' 'a' '-'");
}

#[test]
fn dash_as_range_endpoint() {
    insta::assert_snapshot!(expect_ast("[!--]"), @"Class '!'-'-'");
}

#[test]
fn operators_are_literal_inside_a_class() {
    insta::assert_snapshot!(expect_ast("[.*+?(|)$]"), @"Class '.' '*' '+' '?' '(' '|' ')' '$'");
}

#[test]
fn class_escapes() {
    insta::assert_snapshot!(expect_ast(r"[\]\[\-\^\\\n]"), @r"Class ']' '[' '-' '^' '\\' '\n'");
}

#[test]
fn class_followed_by_quantifier() {
    insta::assert_snapshot!(expect_ast("[ab]*"), @r"
    Star *
      Class 'a' 'b'
    ");
}

#[test]
fn named_set() {
    insta::assert_snapshot!(expect_ast("[:alpha:]"), @"Named alpha");
}

#[test]
fn negated_named_set() {
    insta::assert_snapshot!(expect_ast("[:^space:]"), @"Named ^space");
}

#[test]
fn every_named_set_parses() {
    for set in crate::parser::NamedSet::ALL {
        let source = format!("[:{set}:]");
        assert_eq!(expect_ast(&source), format!("Named {set}\n"));
    }
}

#[test]
fn named_sets_in_sequence() {
    insta::assert_snapshot!(expect_ast("[:digit:]+[:upper:]"), @r"
    Concat
      Plus +
        Named digit
      Named upper
    ");
}
