//! Parser state and low-level token operations.

use rowan::{TextRange, TextSize};

use super::ast::{Anchoring, Regex};
use super::lexer::{Token, TokenKind, token_text};
use crate::diagnostics::{DiagnosticKind, ParseError};

/// Default limit on group nesting.
pub const DEFAULT_RECURSION_FUEL: u32 = 512;

pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    /// Exclusive end of the parsed token window; a trailing `$` anchor sits past it.
    pub(super) end: usize,
    pub(super) depth: u32,
    recursion_fuel_limit: Option<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        let end = tokens.len();
        Self {
            source,
            tokens,
            pos: 0,
            end,
            depth: 0,
            recursion_fuel_limit: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    /// `None` disables the nesting limit.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<(Anchoring, Regex), ParseError> {
        let anchoring = self.take_anchors();
        let regex = self.parse_root()?;
        log::debug!(
            "parsed {} bytes: anchoring={anchoring:?}, {} capture groups",
            self.source.len(),
            regex.capture_count()
        );
        Ok((anchoring, regex))
    }

    /// Strips a leading `^` and a trailing `$` off the token window.
    fn take_anchors(&mut self) -> Anchoring {
        let start = self.tokens.first().is_some_and(|t| t.kind == TokenKind::Caret);
        if start {
            self.pos = 1;
        }
        let end = self.end > self.pos
            && self.tokens[self.end - 1].kind == TokenKind::Dollar;
        if end {
            self.end -= 1;
        }
        Anchoring::from_flags(start, end)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.end
    }

    pub(super) fn current(&self) -> Option<TokenKind> {
        self.nth(0)
    }

    pub(super) fn nth(&self, lookahead: usize) -> Option<TokenKind> {
        let idx = self.pos + lookahead;
        if idx < self.end {
            Some(self.tokens[idx].kind)
        } else {
            None
        }
    }

    pub(super) fn currently_is(&self, kind: TokenKind) -> bool {
        self.current() == Some(kind)
    }

    pub(super) fn current_text(&self) -> &'src str {
        self.nth_text(0)
    }

    pub(super) fn nth_text(&self, lookahead: usize) -> &'src str {
        let idx = self.pos + lookahead;
        if idx < self.end {
            token_text(self.source, &self.tokens[idx])
        } else {
            ""
        }
    }

    /// Span of the current token, or an empty range at end of input.
    pub(super) fn current_span(&self) -> TextRange {
        if self.pos < self.end {
            self.tokens[self.pos].span
        } else {
            TextRange::empty(self.eof_offset())
        }
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        // The window may stop before a trailing `$`; errors at its end point there.
        match self.tokens.get(self.end) {
            Some(t) => t.span.start(),
            None => TextSize::from(self.source.len() as u32),
        }
    }

    /// Consumes the current token and returns its span.
    pub(super) fn bump(&mut self) -> TextRange {
        debug_assert!(!self.eof(), "bump called at EOF");
        let span = self.tokens[self.pos].span;
        self.pos += 1;
        span
    }

    pub(super) fn eat(&mut self, kind: TokenKind) -> Option<TextRange> {
        if self.currently_is(kind) {
            Some(self.bump())
        } else {
            None
        }
    }

    pub(super) fn error(&self, kind: DiagnosticKind) -> ParseError {
        ParseError::new(kind, self.current_span())
    }

    pub(super) fn enter_recursion(&mut self, open: TextRange) -> Result<(), ParseError> {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            return Err(ParseError::new(DiagnosticKind::NestingTooDeep, open)
                .detail(format!("limit is {limit}")));
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(super) fn error_unclosed(
        &self,
        kind: DiagnosticKind,
        open: TextRange,
        related_msg: impl Into<String>,
    ) -> ParseError {
        let current = self.current_span();
        let full_range = TextRange::new(open.start(), current.end());
        ParseError::new(kind, full_range).related_to(open, related_msg)
    }
}
