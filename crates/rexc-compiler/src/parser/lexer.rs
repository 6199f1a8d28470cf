//! Lexer for regex source text.
//!
//! Produces span-based tokens without storing text; text is sliced from
//! source only when needed.
//!
//! Regex syntax is modal: inside `[...]` almost every character is literal,
//! inside `{...}` only digits and `,` are meaningful. Each mode has its own
//! Logos token enum and the lexer morphs between them at the delimiters, so
//! the parser sees a single flat stream of [`TokenKind`]s.
//!
//! Lazy quantifiers are single tokens (`*?`, `+?`, `??`). Longest match
//! therefore recognizes them before their greedy prefixes.
//!
//! ## Error handling
//!
//! Consecutive unlexable characters coalesce into one `Garbage` token (a
//! trailing `\`, a backslash before a newline, letters inside a bound).

use logos::{Lexer, Logos};
use rowan::TextRange;
use std::ops::Range;

/// Token kinds across all lexer modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Outer mode
    ParenOpen,
    /// `$(` opening a suppression group
    SuppressOpen,
    ParenClose,
    Pipe,
    Dot,
    Star,
    StarLazy,
    Plus,
    PlusLazy,
    Question,
    QuestionLazy,
    /// `[` opening a class; the lexer switches to class mode
    BracketOpen,
    /// `[:name:]` or `[:^name:]`
    NamedSet,
    /// `{` opening a bound; the lexer switches to bound mode
    BraceOpen,
    Caret,
    Dollar,
    /// `\` followed by one character
    Escape,
    Char,

    // Class mode
    ClassClose,
    ClassCaret,
    ClassMinus,
    ClassEscape,
    ClassChar,

    // Bound mode
    Number,
    Comma,
    BraceClose,

    /// Coalesced unrecognized characters
    Garbage,
}

impl TokenKind {
    pub fn is_quantifier(self) -> bool {
        matches!(
            self,
            Self::Star
                | Self::StarLazy
                | Self::Plus
                | Self::PlusLazy
                | Self::Question
                | Self::QuestionLazy
                | Self::BraceOpen
        )
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Outer {
    #[token("(")]
    ParenOpen,
    #[token("$(")]
    SuppressOpen,
    #[token(")")]
    ParenClose,
    #[token("|")]
    Pipe,
    #[token(".")]
    Dot,
    #[token("*")]
    Star,
    #[token("*?")]
    StarLazy,
    #[token("+")]
    Plus,
    #[token("+?")]
    PlusLazy,
    #[token("?")]
    Question,
    #[token("??")]
    QuestionLazy,
    #[token("[")]
    BracketOpen,
    #[token("{")]
    BraceOpen,
    #[token("^")]
    Caret,
    #[token("$")]
    Dollar,
    #[regex(r"\\[^\n]")]
    Escape,
    #[regex(r"[^\\()\[|.*+?{$^]")]
    Char,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    #[token("]")]
    Close,
    #[token("^")]
    Caret,
    #[token("-")]
    Minus,
    #[regex(r"\\[^\n]")]
    Escape,
    #[regex(r"[^\]\^\-\\]")]
    Char,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    #[regex(r"[0-9]+")]
    Number,
    #[token(",")]
    Comma,
    #[token("}")]
    Close,
}

impl From<Outer> for TokenKind {
    fn from(token: Outer) -> Self {
        match token {
            Outer::ParenOpen => Self::ParenOpen,
            Outer::SuppressOpen => Self::SuppressOpen,
            Outer::ParenClose => Self::ParenClose,
            Outer::Pipe => Self::Pipe,
            Outer::Dot => Self::Dot,
            Outer::Star => Self::Star,
            Outer::StarLazy => Self::StarLazy,
            Outer::Plus => Self::Plus,
            Outer::PlusLazy => Self::PlusLazy,
            Outer::Question => Self::Question,
            Outer::QuestionLazy => Self::QuestionLazy,
            Outer::BracketOpen => Self::BracketOpen,
            Outer::BraceOpen => Self::BraceOpen,
            Outer::Caret => Self::Caret,
            Outer::Dollar => Self::Dollar,
            Outer::Escape => Self::Escape,
            Outer::Char => Self::Char,
        }
    }
}

impl From<Class> for TokenKind {
    fn from(token: Class) -> Self {
        match token {
            Class::Close => Self::ClassClose,
            Class::Caret => Self::ClassCaret,
            Class::Minus => Self::ClassMinus,
            Class::Escape => Self::ClassEscape,
            Class::Char => Self::ClassChar,
        }
    }
}

impl From<Bound> for TokenKind {
    fn from(token: Bound) -> Self {
        match token {
            Bound::Number => Self::Number,
            Bound::Comma => Self::Comma,
            Bound::Close => Self::BraceClose,
        }
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

enum Mode<'s> {
    Outer(Lexer<'s, Outer>),
    Class(Lexer<'s, Class>),
    Bound(Lexer<'s, Bound>),
}

/// Accumulates tokens, coalescing runs of lexer errors into `Garbage`.
struct Sink {
    tokens: Vec<Token>,
    error_start: Option<usize>,
}

impl Sink {
    fn push(&mut self, kind: TokenKind, span: Range<usize>) {
        self.flush_garbage(span.start);
        self.tokens.push(Token::new(kind, range_to_text_range(span)));
    }

    fn error(&mut self, span: Range<usize>) {
        if self.error_start.is_none() {
            self.error_start = Some(span.start);
        }
    }

    fn flush_garbage(&mut self, end: usize) {
        if let Some(start) = self.error_start.take() {
            self.tokens
                .push(Token::new(TokenKind::Garbage, range_to_text_range(start..end)));
        }
    }
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Post-processes the Logos output:
/// - Switches modes after `[`/`]` and `{`/`}`
/// - Recognizes `[:name:]` before entering class mode
/// - Coalesces consecutive lexer errors into single `Garbage` tokens
pub fn lex(source: &str) -> Vec<Token> {
    let mut sink = Sink {
        tokens: Vec::new(),
        error_start: None,
    };
    let mut mode = Mode::Outer(Outer::lexer(source));

    loop {
        mode = match mode {
            Mode::Outer(mut lexer) => match lexer.next() {
                None => break,
                Some(Err(())) => {
                    sink.error(lexer.span());
                    Mode::Outer(lexer)
                }
                Some(Ok(Outer::BracketOpen)) => {
                    let span = lexer.span();
                    if let Some(len) = named_set_len(lexer.remainder()) {
                        lexer.bump(len);
                        sink.push(TokenKind::NamedSet, span.start..span.end + len);
                        Mode::Outer(lexer)
                    } else {
                        sink.push(TokenKind::BracketOpen, span);
                        Mode::Class(lexer.morph())
                    }
                }
                Some(Ok(Outer::BraceOpen)) => {
                    sink.push(TokenKind::BraceOpen, lexer.span());
                    Mode::Bound(lexer.morph())
                }
                Some(Ok(token)) => {
                    sink.push(token.into(), lexer.span());
                    Mode::Outer(lexer)
                }
            },
            Mode::Class(mut lexer) => match lexer.next() {
                None => break,
                Some(Err(())) => {
                    sink.error(lexer.span());
                    Mode::Class(lexer)
                }
                Some(Ok(Class::Close)) => {
                    sink.push(TokenKind::ClassClose, lexer.span());
                    Mode::Outer(lexer.morph())
                }
                Some(Ok(token)) => {
                    sink.push(token.into(), lexer.span());
                    Mode::Class(lexer)
                }
            },
            Mode::Bound(mut lexer) => match lexer.next() {
                None => break,
                Some(Err(())) => {
                    sink.error(lexer.span());
                    Mode::Bound(lexer)
                }
                Some(Ok(Bound::Close)) => {
                    sink.push(TokenKind::BraceClose, lexer.span());
                    Mode::Outer(lexer.morph())
                }
                Some(Ok(token)) => {
                    sink.push(token.into(), lexer.span());
                    Mode::Bound(lexer)
                }
            },
        };
    }

    sink.flush_garbage(source.len());
    sink.tokens
}

/// Length of `:name:]` or `:^name:]` at the start of `rest`, if present.
fn named_set_len(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix(':')?;
    let body = body.strip_prefix('^').unwrap_or(body);
    let name_len = body
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic())
        .count();
    if name_len == 0 || !body[name_len..].starts_with(":]") {
        return None;
    }
    Some(rest.len() - body.len() + name_len + 2)
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
