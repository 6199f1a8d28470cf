use crate::diagnostics::{DiagnosticKind, ParseError};
use crate::parser::Parser;
use crate::parser::ast::{CharRange, Regex};
use crate::parser::lexer::TokenKind;

/// Characters that may follow `\` inside a class.
const CLASS_ESCAPABLE: &str = "[]\\-^";

impl Parser<'_> {
    /// `[abc]`, `[a-z0-9]`, `[^\n]`
    ///
    /// Ranges are kept as written; sorting, merging, and dropping reversed
    /// ranges happen during lowering.
    pub(crate) fn parse_class(&mut self) -> Result<Regex, ParseError> {
        let open = self.bump();
        let positive = self.eat(TokenKind::ClassCaret).is_none();

        let mut ranges = Vec::new();
        loop {
            match self.current() {
                Some(TokenKind::ClassClose) => break,
                None => {
                    return Err(self.error_unclosed(
                        DiagnosticKind::UnclosedClass,
                        open,
                        "class started here",
                    ));
                }
                Some(_) => {}
            }

            let lo = self.parse_class_char()?;
            let range = if self.at_range_dash() {
                self.bump();
                CharRange::new(lo, self.parse_class_char()?)
            } else {
                CharRange::single(lo)
            };
            ranges.push(range);
        }

        if ranges.is_empty() {
            let close = self.current_span();
            return Err(ParseError::new(
                DiagnosticKind::EmptyClass,
                rowan::TextRange::new(open.start(), close.end()),
            )
            .fix("\\[\\]", "escape the brackets to match them literally"));
        }

        self.bump();
        Ok(Regex::class(positive, ranges))
    }

    /// A `-` between two elements; a trailing `-` before `]` is literal.
    fn at_range_dash(&self) -> bool {
        self.current() == Some(TokenKind::ClassMinus)
            && !matches!(self.nth(1), None | Some(TokenKind::ClassClose))
    }

    fn parse_class_char(&mut self) -> Result<char, ParseError> {
        match self.current() {
            Some(TokenKind::ClassChar) => {
                let c = self.current_char();
                self.bump();
                Ok(c)
            }
            Some(TokenKind::ClassMinus) => {
                self.bump();
                Ok('-')
            }
            Some(TokenKind::ClassCaret) => {
                self.bump();
                Ok('^')
            }
            Some(TokenKind::ClassEscape) => self.parse_escape(CLASS_ESCAPABLE),
            Some(TokenKind::Garbage) if self.current_text().starts_with('\\') => Err(self
                .error(DiagnosticKind::InvalidEscape)
                .detail(self.current_text())),
            _ => Err(self.error(DiagnosticKind::UnexpectedToken)),
        }
    }
}
