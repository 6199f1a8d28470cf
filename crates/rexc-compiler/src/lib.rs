//! rexc compiler: regex front end.
//!
//! Turns POSIX-flavored regex source into the canonical byte IR of
//! [`rexc_ir`]:
//! - `parser` - lexer, surface AST, and recursive-descent grammar
//! - `lower` - interval algebra, balanced alternation, and AST → IR lowering
//! - `diagnostics` - parse errors and their snippet rendering
//! - `compile` - the two passes run back to back
//!
//! # Example
//!
//! ```
//! use rexc_compiler::{compile, LowerOptions};
//!
//! let compiled = compile("^(a|b){2}$", &LowerOptions::default()).unwrap();
//! assert_eq!(compiled.group_count, 1);
//! assert!(compiled.anchoring.at_start() && compiled.anchoring.at_end());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod diagnostics;
pub mod lower;
pub mod parser;

#[cfg(test)]
pub mod test_utils;

pub use compile::{Compiled, compile};
pub use diagnostics::{DiagnosticKind, ParseError};
pub use lower::{
    DotBehavior, LowerError, LowerOptions, Lowered, OpenRepeat, QuestionOrientation, lower,
    lower_with,
};
pub use parser::{Anchoring, NamedSet, Regex, parse};
pub use rexc_ir::{GroupId, Ir};

/// Errors from running the whole front end.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("regex parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("regex lowering failed: {0}")]
    Lower(#[from] LowerError),
}

/// Result type for front-end operations.
pub type Result<T> = std::result::Result<T, Error>;
