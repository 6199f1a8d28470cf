use rowan::{TextRange, TextSize};

use super::core::Parser;
use super::lexer::{TokenKind, lex};

fn parser(source: &str) -> Parser<'_> {
    Parser::new(source, lex(source))
}

#[test]
fn bump_walks_the_token_window() {
    let mut p = parser("a*");
    assert_eq!(p.current(), Some(TokenKind::Char));
    assert_eq!(p.bump(), TextRange::new(TextSize::from(0), TextSize::from(1)));
    assert_eq!(p.current(), Some(TokenKind::Star));
    p.bump();
    assert!(p.eof());
    assert_eq!(p.current(), None);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "bump called at EOF")]
fn bump_at_eof_is_caught_in_debug_builds() {
    let mut p = parser("");
    p.bump();
}
