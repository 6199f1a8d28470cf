//! Syntax errors for the regex parser.
//!
//! Parsing stops at the first failure, so a parse produces at most one
//! [`ParseError`]. The error carries the offending range, a message rendered
//! from its [`DiagnosticKind`], and optionally a related range (where an
//! unclosed delimiter was opened) and a suggested fix.

mod render;


use rowan::TextRange;

pub use render::{render_error, render_error_colored};

/// Diagnostic kinds ordered by how early they tend to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Delimiters left open at end of input
    UnclosedGroup,
    UnclosedSuppression,
    UnclosedClass,
    UnclosedBound,

    // Something required is missing
    ExpectedDigits,
    EmptyClass,

    // Something present does not belong
    InvalidEscape,
    UnknownNamedSet,
    NothingToRepeat,
    BoundTooLarge,
    UnmatchedParen,
    UnexpectedToken,

    // Resource limits
    NestingTooDeep,
}

impl DiagnosticKind {
    /// Base message for this kind, used when no detail is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedGroup => "missing closing `)`",
            Self::UnclosedSuppression => "missing closing `)` for `$(`",
            Self::UnclosedClass => "missing closing `]`",
            Self::UnclosedBound => "missing closing `}`",

            Self::ExpectedDigits => "expected a decimal repetition bound",
            Self::EmptyClass => "empty character class",

            Self::InvalidEscape => "invalid escape sequence",
            Self::UnknownNamedSet => "unknown named character set",
            Self::NothingToRepeat => "quantifier has nothing to repeat",
            Self::BoundTooLarge => "repetition bound is too large",
            Self::UnmatchedParen => "unmatched `)`",
            Self::UnexpectedToken => "unexpected token",

            Self::NestingTooDeep => "groups are nested too deeply",
        }
    }

    /// Template for messages with caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnknownNamedSet => "`{}` is not a named character set".to_string(),
            Self::InvalidEscape => "invalid escape sequence `{}`".to_string(),
            Self::UnclosedGroup | Self::UnclosedSuppression | Self::UnclosedClass => {
                format!("{}; {{}}", self.fallback_message())
            }
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// `None` yields the fallback message, `Some(detail)` fills the template.
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

/// A suggested source replacement for the error range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub replacement: String,
    pub description: String,
}

impl Fix {
    pub fn new(replacement: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            description: description.into(),
        }
    }
}

/// Secondary location, e.g. where an unclosed delimiter was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub range: TextRange,
    pub message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("error at {}..{}: {message}", u32::from(.range.start()), u32::from(.range.end()))]
pub struct ParseError {
    pub kind: DiagnosticKind,
    pub range: TextRange,
    pub message: String,
    pub related: Option<RelatedInfo>,
    pub fix: Option<Fix>,
}

impl ParseError {
    pub fn new(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            message: kind.fallback_message().to_string(),
            related: None,
            fix: None,
        }
    }

    /// Replace the fallback message with the kind's template filled by `detail`.
    pub fn detail(mut self, detail: impl AsRef<str>) -> Self {
        self.message = self.kind.message(Some(detail.as_ref()));
        self
    }

    pub fn related_to(mut self, range: TextRange, message: impl Into<String>) -> Self {
        self.related = Some(RelatedInfo::new(range, message));
        self
    }

    pub fn fix(mut self, replacement: impl Into<String>, description: impl Into<String>) -> Self {
        self.fix = Some(Fix::new(replacement, description));
        self
    }

    /// Byte offset where the error starts.
    pub fn offset(&self) -> usize {
        self.range.start().into()
    }

    pub fn render(&self, source: &str) -> String {
        render_error(source, self, None)
    }
}
