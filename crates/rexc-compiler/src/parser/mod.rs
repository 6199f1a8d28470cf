//! Parser for regex source text.
//!
//! # Architecture
//!
//! - `lexer`: mode-aware Logos tokenizer producing span-based tokens
//! - `core`: token cursor, nesting limit, error construction
//! - `grammar`: hand-written recursive descent, one file per construct
//! - `ast`: the surface tree the grammar builds
//!
//! Anchors are handled before the grammar runs: a leading `^` and a
//! trailing `$` are stripped off the token window and reported as
//! [`Anchoring`]. A `^` or `$` anywhere else is an ordinary character
//! (`$(` always opens a suppression).
//!
//! Parsing stops at the first error; there is no partial tree.

pub mod ast;
pub mod lexer;

mod core;
mod grammar;

#[cfg(test)]
mod core_tests;
#[cfg(test)]
mod tests;

pub use ast::{Anchoring, CharRange, NamedSet, Regex};
pub use self::core::{DEFAULT_RECURSION_FUEL, Parser};

use crate::diagnostics::ParseError;
use lexer::lex;

/// Main entry point.
pub fn parse(source: &str) -> Result<(Anchoring, Regex), ParseError> {
    Parser::new(source, lex(source)).parse()
}

/// Parse with a custom nesting limit; `None` disables it.
pub fn parse_with_recursion_fuel(
    source: &str,
    limit: Option<u32>,
) -> Result<(Anchoring, Regex), ParseError> {
    Parser::new(source, lex(source))
        .with_recursion_fuel(limit)
        .parse()
}
