//! Alternation, concatenation, and postfix quantifiers.
//!
//! Precedence, tightest first: postfix quantifier, juxtaposition, `|`.

use crate::diagnostics::{DiagnosticKind, ParseError};
use crate::parser::Parser;
use crate::parser::ast::Regex;
use crate::parser::lexer::TokenKind;

impl Parser<'_> {
    /// Whole-input expression; anything left over is a stray `)`.
    pub(crate) fn parse_root(&mut self) -> Result<Regex, ParseError> {
        let regex = self.parse_alternation()?;
        if !self.eof() {
            let err = if self.currently_is(TokenKind::ParenClose) {
                self.error(DiagnosticKind::UnmatchedParen)
                    .fix("\\)", "escape it to match a literal `)`")
            } else {
                self.error(DiagnosticKind::UnexpectedToken)
            };
            return Err(err);
        }
        Ok(regex)
    }

    /// `a|b|c` → `Branch(a, Branch(b, c))`
    pub(crate) fn parse_alternation(&mut self) -> Result<Regex, ParseError> {
        let mut branches = vec![self.parse_concat()?];
        while self.eat(TokenKind::Pipe).is_some() {
            branches.push(self.parse_concat()?);
        }

        let mut regex = branches.pop().unwrap_or(Regex::Empty);
        while let Some(left) = branches.pop() {
            regex = Regex::branch(left, regex);
        }
        Ok(regex)
    }

    /// `abc` → `Concat(Concat(a, b), c)`; an empty alternative is `Empty`.
    fn parse_concat(&mut self) -> Result<Regex, ParseError> {
        let mut regex: Option<Regex> = None;
        while let Some(kind) = self.current() {
            if matches!(kind, TokenKind::Pipe | TokenKind::ParenClose) {
                break;
            }
            let item = self.parse_postfix()?;
            regex = Some(match regex {
                None => item,
                Some(left) => Regex::concat(left, item),
            });
        }
        Ok(regex.unwrap_or(Regex::Empty))
    }

    /// Atom with at most one quantifier. Lazy forms are single tokens, so
    /// `*?` is seen before `*` can claim the star.
    fn parse_postfix(&mut self) -> Result<Regex, ParseError> {
        let atom = self.parse_atom()?;
        let Some(kind) = self.current() else {
            return Ok(atom);
        };

        let body = Box::new(atom);
        let quantified = match kind {
            TokenKind::StarLazy => Regex::Star { body, greedy: false },
            TokenKind::Star => Regex::Star { body, greedy: true },
            TokenKind::PlusLazy => Regex::Plus { body, greedy: false },
            TokenKind::Plus => Regex::Plus { body, greedy: true },
            TokenKind::QuestionLazy => Regex::Question { body, greedy: false },
            TokenKind::Question => Regex::Question { body, greedy: true },
            TokenKind::BraceOpen => return self.parse_bound(*body),
            _ => return Ok(*body),
        };
        self.bump();
        Ok(quantified)
    }
}
