//! Lowering pass: surface AST → canonical byte IR.
//!
//! Sugar disappears here. Classes and named sets become balanced byte
//! alternations, bounded repetition is unrolled, `+` and `?` are rewritten
//! in terms of sequence, alternation, and closure.
//!
//! # Capture groups
//!
//! Group ids follow source order: pre-order, left to right, a group's own id
//! before any group in its body. The next free id is threaded through the
//! recursion as a value (`next` in, `next` out). Repetition lowers its body
//! once and copies the result, so every copy of a repeated capturing group
//! carries the same id: `(a){2}` is `(group 1 'a') (group 1 'a')`.
//!
//! # Empty language
//!
//! `None` stands for the empty language (no string matches). It is not an
//! error: `e{3,1}` and `e{0}` lower to `None`, and `None` is absorbing in
//! sequences and neutral in alternations.

pub mod balance;
pub mod intervals;
pub mod posix;

mod options;

#[cfg(test)]
mod balance_tests;
#[cfg(test)]
mod intervals_tests;
#[cfg(test)]
mod posix_tests;

use rexc_ir::{GroupId, Ir};

use crate::parser::{CharRange, Regex};
use balance::balanced_alt;
use intervals::{ALPHABET_MAX, Interval, complement, normalize};

pub use options::{
    DEFAULT_UNROLL_FUEL, DotBehavior, LowerOptions, OpenRepeat, QuestionOrientation,
};

/// Constructs the lowering pass does not translate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LowerError {
    /// Lazy quantifiers and suppression have no IR counterpart.
    #[error("{construct} is not supported by the byte IR")]
    Unsupported { construct: &'static str },

    /// A literal or class endpoint above U+00FF.
    #[error("{ch:?} (U+{:04X}) does not fit in a byte", u32::from(*.ch))]
    ByteOutOfRange { ch: char },

    /// Unrolling repetition would exceed [`LowerOptions::unroll_fuel`].
    #[error("repetition unrolls to {nodes} IR nodes, over the limit of {limit}")]
    TooLarge { nodes: u64, limit: u64 },
}

/// Lowering result: the IR (or `None` for the empty language) and the
/// number of capture group ids allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lowered {
    pub ir: Option<Ir>,
    pub group_count: u32,
}

/// Lowers `ast` with the given `?` orientation and `.` behavior.
pub fn lower(
    ast: Regex,
    question: QuestionOrientation,
    dot: DotBehavior,
) -> Result<Option<Ir>, LowerError> {
    let options = LowerOptions::default().question(question).dot(dot);
    lower_with(ast, &options).map(|lowered| lowered.ir)
}

/// Lowers `ast` with full options, also reporting the group count.
pub fn lower_with(ast: Regex, options: &LowerOptions) -> Result<Lowered, LowerError> {
    let mut lowering = Lowering {
        options,
        unrolled: 0,
    };
    let (ir, next) = lowering.lower(ast, GroupId::FIRST)?;
    let group_count = next.get() - 1;
    log::debug!(
        "lowered to {} ({group_count} capture groups, {} unrolled nodes)",
        if ir.is_some() { "IR" } else { "the empty language" },
        lowering.unrolled,
    );
    Ok(Lowered { ir, group_count })
}

struct Lowering<'o> {
    options: &'o LowerOptions,
    /// IR nodes produced by repetition so far, checked against `unroll_fuel`.
    unrolled: u64,
}

/// Lowered node and the next free group id.
type Step = (Option<Ir>, GroupId);

impl Lowering<'_> {
    fn lower(&mut self, mut node: Regex, next: GroupId) -> Result<Step, LowerError> {
        match &mut node {
            Regex::Empty => Ok((Some(Ir::empty()), next)),
            Regex::Wildcard => Ok((self.wildcard(), next)),
            Regex::Literal(c) => Ok((Some(Ir::byte(to_byte(*c)?)), next)),
            Regex::Group { capturing: true, body } => {
                let id = next;
                let (inner, next) = self.lower(body.take(), id.succ())?;
                Ok((inner.map(|ir| Ir::group(id, ir)), next))
            }
            Regex::Group { capturing: false, body } => self.lower(body.take(), next),
            Regex::Concat(left, right) => self.lower_concat(left.take(), right.take(), next),
            Regex::Branch(left, right) => self.lower_branch(left.take(), right.take(), next),
            Regex::Class { positive, ranges } => {
                let intervals: Vec<Interval> = ranges.iter().map(char_interval).collect();
                Ok((class(*positive, &intervals)?, next))
            }
            Regex::Named { positive, set } => Ok((class(*positive, posix::ranges(*set))?, next)),
            Regex::Question { body, greedy: true } => {
                let (inner, next) = self.lower(body.take(), next)?;
                Ok((self.question(inner), next))
            }
            Regex::Star { body, greedy: true } => {
                let (inner, next) = self.lower(body.take(), next)?;
                Ok((Some(star(inner)), next))
            }
            Regex::Plus { body, greedy: true } => {
                let (inner, next) = self.lower(body.take(), next)?;
                Ok((plus(inner), next))
            }
            Regex::Repeat {
                body,
                min,
                max,
                greedy: true,
            } => {
                let (min, max) = (*min, *max);
                let (inner, next) = self.lower(body.take(), next)?;
                Ok((self.repeat(inner, min, max)?, next))
            }
            Regex::Question { greedy: false, .. } => Err(unsupported("lazy quantifier `??`")),
            Regex::Star { greedy: false, .. } => Err(unsupported("lazy quantifier `*?`")),
            Regex::Plus { greedy: false, .. } => Err(unsupported("lazy quantifier `+?`")),
            Regex::Repeat { greedy: false, .. } => Err(unsupported("lazy bounded repetition")),
            Regex::Suppress(_) => Err(unsupported("suppression `$(...)`")),
        }
    }

    /// Walks the left spine iteratively; long literal runs would otherwise
    /// recurse once per character.
    fn lower_concat(
        &mut self,
        left: Regex,
        right: Regex,
        next: GroupId,
    ) -> Result<Step, LowerError> {
        let mut rights = vec![right];
        let mut leftmost = left;
        loop {
            let (left, right) = match &mut leftmost {
                Regex::Concat(left, right) => (left.take(), right.take()),
                _ => break,
            };
            rights.push(right);
            leftmost = left;
        }

        let (mut acc, mut next) = self.lower(leftmost, next)?;
        while let Some(right) = rights.pop() {
            let (ir, after) = self.lower(right, next)?;
            next = after;
            acc = match (acc, ir) {
                (Some(a), Some(b)) => Some(Ir::seq(a, b)),
                _ => None,
            };
        }
        Ok((acc, next))
    }

    /// Walks the right spine iteratively, left operands first for id order.
    fn lower_branch(
        &mut self,
        left: Regex,
        right: Regex,
        next: GroupId,
    ) -> Result<Step, LowerError> {
        let (first, mut next) = self.lower(left, next)?;
        let mut lowered = vec![first];
        let mut rest = right;
        loop {
            let (left, right) = match &mut rest {
                Regex::Branch(left, right) => (left.take(), right.take()),
                _ => break,
            };
            let (ir, after) = self.lower(left, next)?;
            lowered.push(ir);
            next = after;
            rest = right;
        }
        let (mut acc, next) = self.lower(rest, next)?;

        while let Some(left) = lowered.pop() {
            acc = match (left, acc) {
                (Some(a), Some(b)) => Some(Ir::alt(a, b)),
                (a, b) => a.or(b),
            };
        }
        Ok((acc, next))
    }

    fn wildcard(&self) -> Option<Ir> {
        match self.options.dot {
            DotBehavior::BalancedTree => balanced_alt((0..=u8::MAX).map(Ir::byte).collect()),
            DotBehavior::DummyDot => Some(Ir::byte(b'.')),
        }
    }

    /// `e?` as `eps | e` or `e | eps`; the empty language contributes nothing.
    fn question(&self, inner: Option<Ir>) -> Option<Ir> {
        let Some(inner) = inner else {
            return Some(Ir::empty());
        };
        Some(match self.options.question {
            QuestionOrientation::EmptyFirst => Ir::alt(Ir::empty(), inner),
            QuestionOrientation::EmptyLast => Ir::alt(inner, Ir::empty()),
        })
    }

    /// Unrolls `e{min,max}`: `min` copies of `e`, then `max - min` copies of `e?`,
    /// folded left into a sequence.
    fn repeat(
        &mut self,
        inner: Option<Ir>,
        min: u32,
        max: Option<u32>,
    ) -> Result<Option<Ir>, LowerError> {
        let Some(max) = max else {
            return self.repeat_open(inner, min);
        };
        if max < min || max == 0 {
            log::trace!("bound {{{min},{max}}} denotes the empty language");
            return Ok(None);
        }

        log::trace!("unrolling {{{min},{max}}}");
        let optional = self.question(inner.clone());
        self.charge(&[(&inner, min), (&optional, max - min)])?;
        let mut copies = std::iter::repeat_n(inner, min as usize)
            .chain(std::iter::repeat_n(optional, (max - min) as usize));
        Ok(sequence(&mut copies))
    }

    /// `e{min,}`
    fn repeat_open(&mut self, inner: Option<Ir>, min: u32) -> Result<Option<Ir>, LowerError> {
        Ok(match self.options.open_repeat {
            OpenRepeat::AtLeast if min == 0 => Some(star(inner)),
            OpenRepeat::AtLeast => {
                log::trace!("unrolling {{{min},}} as {} copies and a plus", min - 1);
                let tail = plus(inner.clone());
                self.charge(&[(&inner, min - 1), (&tail, 1)])?;
                let mut copies = std::iter::repeat_n(inner, (min - 1) as usize)
                    .chain(std::iter::once(tail));
                sequence(&mut copies)
            }
            OpenRepeat::Truncate if min == 0 => None,
            OpenRepeat::Truncate => {
                log::trace!("unrolling {{{min},}} as exactly {min} copies");
                self.charge(&[(&inner, min)])?;
                sequence(&mut std::iter::repeat_n(inner, min as usize))
            }
        })
    }

    /// Spends unroll fuel on `count` copies of each operand before any is built.
    fn charge(&mut self, copies: &[(&Option<Ir>, u32)]) -> Result<(), LowerError> {
        let cost = copies.iter().fold(0u64, |acc, &(ir, count)| {
            let size = ir.as_ref().map_or(0, Ir::size) as u64;
            acc.saturating_add(size.saturating_mul(u64::from(count)))
        });
        self.unrolled = self.unrolled.saturating_add(cost);
        match self.options.unroll_fuel {
            Some(limit) if self.unrolled > limit => {
                log::debug!("repetition needs {} nodes, fuel is {limit}", self.unrolled);
                Err(LowerError::TooLarge {
                    nodes: self.unrolled,
                    limit,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Left-folded sequence; `None` if any item is `None` or there are no items.
fn sequence(items: &mut impl Iterator<Item = Option<Ir>>) -> Option<Ir> {
    let first = items.next()??;
    items.try_fold(first, |acc, item| item.map(|ir| Ir::seq(acc, ir)))
}

/// Closure of the empty language matches only the empty string.
fn star(inner: Option<Ir>) -> Ir {
    match inner {
        Some(ir) => Ir::star(ir),
        None => Ir::empty(),
    }
}

/// `e+` as `e e*`.
fn plus(inner: Option<Ir>) -> Option<Ir> {
    let ir = inner?;
    Some(Ir::seq(ir.clone(), Ir::star(ir)))
}

fn class(positive: bool, ranges: &[Interval]) -> Result<Option<Ir>, LowerError> {
    let normalized = normalize(ranges);
    if let Some(last) = normalized.last()
        && last.hi > ALPHABET_MAX
    {
        let ch = char::from_u32(last.hi).unwrap_or(char::MAX);
        return Err(LowerError::ByteOutOfRange { ch });
    }

    let set = if positive {
        normalized
    } else {
        complement(&normalized)
    };

    let bytes = set
        .iter()
        .flat_map(Interval::values)
        .map(|v| Ir::byte(v as u8))
        .collect();
    Ok(balanced_alt(bytes))
}

fn char_interval(range: &CharRange) -> Interval {
    Interval::new(range.lo.into(), range.hi.into())
}

fn to_byte(c: char) -> Result<u8, LowerError> {
    u8::try_from(c).map_err(|_| LowerError::ByteOutOfRange { ch: c })
}

fn unsupported(construct: &'static str) -> LowerError {
    LowerError::Unsupported { construct }
}
