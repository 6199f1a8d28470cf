use rowan::TextRange;

use crate::diagnostics::{DiagnosticKind, ParseError};
use crate::parser::Parser;
use crate::parser::ast::{NamedSet, Regex};
use crate::parser::lexer::TokenKind;

/// Characters that may follow `\` outside a class to stand for themselves.
const ESCAPABLE: &str = ".\\()[]{}*?+$^|-";

impl Parser<'_> {
    pub(crate) fn parse_atom(&mut self) -> Result<Regex, ParseError> {
        let Some(kind) = self.current() else {
            return Err(self.error(DiagnosticKind::UnexpectedToken));
        };

        match kind {
            TokenKind::ParenOpen => self.parse_group(),
            TokenKind::SuppressOpen => self.parse_suppression(),
            TokenKind::NamedSet => self.parse_named_set(),
            TokenKind::BracketOpen => self.parse_class(),
            TokenKind::Dot => {
                self.bump();
                Ok(Regex::Wildcard)
            }
            TokenKind::Char => {
                let c = self.current_char();
                self.bump();
                Ok(Regex::Literal(c))
            }
            // Not in anchor position, so literal
            TokenKind::Caret => {
                self.bump();
                Ok(Regex::Literal('^'))
            }
            TokenKind::Dollar => {
                self.bump();
                Ok(Regex::Literal('$'))
            }
            TokenKind::Escape => {
                let c = self.parse_escape(ESCAPABLE)?;
                Ok(Regex::Literal(c))
            }
            kind if kind.is_quantifier() => {
                let text = self.current_text();
                Err(self
                    .error(DiagnosticKind::NothingToRepeat)
                    .fix(format!("\\{text}"), "escape it to match literally"))
            }
            TokenKind::Garbage if self.current_text().starts_with('\\') => Err(self
                .error(DiagnosticKind::InvalidEscape)
                .detail(self.current_text())),
            _ => Err(self.error(DiagnosticKind::UnexpectedToken)),
        }
    }

    /// `(...)` capturing, `(?:...)` non-capturing.
    fn parse_group(&mut self) -> Result<Regex, ParseError> {
        let open = self.bump();
        let capturing = !self.at_non_capturing_marker();
        let open = if capturing {
            open
        } else {
            let marker = TextRange::new(open.start(), self.nth_span_end(1));
            self.bump();
            self.bump();
            marker
        };

        let body = self.parse_delimited(open, DiagnosticKind::UnclosedGroup, "group started here")?;
        Ok(Regex::Group {
            capturing,
            body: Box::new(body),
        })
    }

    /// `$(...)`
    fn parse_suppression(&mut self) -> Result<Regex, ParseError> {
        let open = self.bump();
        let body = self.parse_delimited(
            open,
            DiagnosticKind::UnclosedSuppression,
            "suppression started here",
        )?;
        Ok(Regex::suppress(body))
    }

    /// Full alternation up to the `)` matching `open`.
    fn parse_delimited(
        &mut self,
        open: TextRange,
        unclosed: DiagnosticKind,
        related_msg: &str,
    ) -> Result<Regex, ParseError> {
        self.enter_recursion(open)?;
        let body = self.parse_alternation()?;
        self.exit_recursion();

        if self.eat(TokenKind::ParenClose).is_none() {
            return Err(self.error_unclosed(unclosed, open, related_msg));
        }
        Ok(body)
    }

    /// `?` immediately followed by `:` right after `(`.
    fn at_non_capturing_marker(&self) -> bool {
        self.current() == Some(TokenKind::Question)
            && self.nth(1) == Some(TokenKind::Char)
            && self.nth_text(1) == ":"
    }

    fn nth_span_end(&self, lookahead: usize) -> rowan::TextSize {
        self.tokens[self.pos + lookahead].span.end()
    }

    /// `[:name:]` or `[:^name:]`
    fn parse_named_set(&mut self) -> Result<Regex, ParseError> {
        let text = self.current_text();
        let inner = text
            .strip_prefix("[:")
            .and_then(|t| t.strip_suffix(":]"))
            .unwrap_or(text);
        let (positive, name) = match inner.strip_prefix('^') {
            Some(name) => (false, name),
            None => (true, inner),
        };

        let Some(set) = NamedSet::from_name(name) else {
            return Err(self.error(DiagnosticKind::UnknownNamedSet).detail(name));
        };
        self.bump();
        Ok(Regex::Named { positive, set })
    }

    /// First character of the current token's text.
    pub(crate) fn current_char(&self) -> char {
        self.current_text().chars().next().unwrap_or('\0')
    }

    /// Decodes `\x` where `x` is in `allowed` or one of `n`, `t`, `r`.
    pub(crate) fn parse_escape(&mut self, allowed: &str) -> Result<char, ParseError> {
        let text = self.current_text();
        let escaped = text.chars().nth(1).unwrap_or('\\');
        let c = match escaped {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            c if allowed.contains(c) => c,
            _ => {
                return Err(self.error(DiagnosticKind::InvalidEscape).detail(text));
            }
        };
        self.bump();
        Ok(c)
    }
}
