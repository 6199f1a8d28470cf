use rowan::TextRange;

use crate::diagnostics::{DiagnosticKind, ParseError};
use crate::parser::Parser;
use crate::parser::ast::Regex;
use crate::parser::lexer::TokenKind;

impl Parser<'_> {
    /// `{n}`, `{n,}`, `{n,m}`, each optionally followed by `?` for the lazy form.
    pub(crate) fn parse_bound(&mut self, body: Regex) -> Result<Regex, ParseError> {
        let open = self.bump();

        let min = self.parse_bound_number(open)?;
        let max = if self.eat(TokenKind::Comma).is_some() {
            if self.currently_is(TokenKind::Number) {
                Some(self.parse_bound_number(open)?)
            } else {
                None
            }
        } else {
            Some(min)
        };

        if self.eat(TokenKind::BraceClose).is_none() {
            let err = match self.current() {
                None => self.error_unclosed(DiagnosticKind::UnclosedBound, open, "bound started here"),
                Some(TokenKind::Garbage | TokenKind::Number) => {
                    self.error(DiagnosticKind::ExpectedDigits)
                }
                Some(_) => self.error(DiagnosticKind::UnexpectedToken),
            };
            return Err(err);
        }

        let greedy = self.eat(TokenKind::Question).is_none();
        Ok(Regex::Repeat {
            body: Box::new(body),
            min,
            max,
            greedy,
        })
    }

    fn parse_bound_number(&mut self, open: TextRange) -> Result<u32, ParseError> {
        if !self.currently_is(TokenKind::Number) {
            return Err(match self.current() {
                None => self.error_unclosed(DiagnosticKind::UnclosedBound, open, "bound started here"),
                Some(_) => self
                    .error(DiagnosticKind::ExpectedDigits)
                    .detail(format!("found `{}`", self.current_text())),
            });
        }

        let text = self.current_text();
        let n = text
            .parse::<u32>()
            .map_err(|_| self.error(DiagnosticKind::BoundTooLarge).detail(text))?;
        self.bump();
        Ok(n)
    }
}
