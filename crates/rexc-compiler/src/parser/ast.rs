//! Surface AST produced by the parser.
//!
//! One node per syntactic construct. Nodes are plain values: two trees with
//! the same shape are interchangeable, and every pass consumes its input.

use std::fmt::{self, Write};
use std::mem;

use serde::{Deserialize, Serialize};

/// Where a match is pinned, from a leading `^` and a trailing `$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Anchoring {
    #[default]
    None,
    Start,
    End,
    Both,
}

impl Anchoring {
    pub fn from_flags(start: bool, end: bool) -> Self {
        match (start, end) {
            (false, false) => Self::None,
            (true, false) => Self::Start,
            (false, true) => Self::End,
            (true, true) => Self::Both,
        }
    }

    pub fn at_start(self) -> bool {
        matches!(self, Self::Start | Self::Both)
    }

    pub fn at_end(self) -> bool {
        matches!(self, Self::End | Self::Both)
    }
}

/// POSIX bracket-expression class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedSet {
    Alnum,
    Alpha,
    Ascii,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    Word,
    Xdigit,
}

impl NamedSet {
    pub const ALL: [NamedSet; 14] = [
        Self::Alnum,
        Self::Alpha,
        Self::Ascii,
        Self::Blank,
        Self::Cntrl,
        Self::Digit,
        Self::Graph,
        Self::Lower,
        Self::Print,
        Self::Punct,
        Self::Space,
        Self::Upper,
        Self::Word,
        Self::Xdigit,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|set| set.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Alnum => "alnum",
            Self::Alpha => "alpha",
            Self::Ascii => "ascii",
            Self::Blank => "blank",
            Self::Cntrl => "cntrl",
            Self::Digit => "digit",
            Self::Graph => "graph",
            Self::Lower => "lower",
            Self::Print => "print",
            Self::Punct => "punct",
            Self::Space => "space",
            Self::Upper => "upper",
            Self::Word => "word",
            Self::Xdigit => "xdigit",
        }
    }
}

impl fmt::Display for NamedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive character range as written; may be reversed (and then empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharRange {
    pub lo: char,
    pub hi: char,
}

impl CharRange {
    pub fn new(lo: char, hi: char) -> Self {
        Self { lo, hi }
    }

    pub fn single(c: char) -> Self {
        Self { lo: c, hi: c }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regex {
    /// Matches the empty string.
    Empty,
    /// `.`
    Wildcard,
    Literal(char),
    /// `(...)` when capturing, `(?:...)` otherwise.
    Group { capturing: bool, body: Box<Regex> },
    Concat(Box<Regex>, Box<Regex>),
    Branch(Box<Regex>, Box<Regex>),
    /// `[...]`; `positive == false` for `[^...]`.
    Class { positive: bool, ranges: Vec<CharRange> },
    /// `[:name:]`; `positive == false` for `[:^name:]`.
    Named { positive: bool, set: NamedSet },
    /// `{n}`, `{n,}`, `{n,m}`, optionally lazy.
    Repeat {
        body: Box<Regex>,
        min: u32,
        max: Option<u32>,
        greedy: bool,
    },
    Star { body: Box<Regex>, greedy: bool },
    Plus { body: Box<Regex>, greedy: bool },
    Question { body: Box<Regex>, greedy: bool },
    /// `$(...)`: matched text is excluded from captured output.
    Suppress(Box<Regex>),
}

impl Regex {
    pub fn literal(c: char) -> Self {
        Self::Literal(c)
    }

    pub fn group(body: Regex) -> Self {
        Self::Group {
            capturing: true,
            body: Box::new(body),
        }
    }

    pub fn non_capturing(body: Regex) -> Self {
        Self::Group {
            capturing: false,
            body: Box::new(body),
        }
    }

    pub fn concat(left: Regex, right: Regex) -> Self {
        Self::Concat(Box::new(left), Box::new(right))
    }

    pub fn branch(left: Regex, right: Regex) -> Self {
        Self::Branch(Box::new(left), Box::new(right))
    }

    pub fn class(positive: bool, ranges: Vec<CharRange>) -> Self {
        Self::Class { positive, ranges }
    }

    pub fn repeat(body: Regex, min: u32, max: Option<u32>) -> Self {
        Self::Repeat {
            body: Box::new(body),
            min,
            max,
            greedy: true,
        }
    }

    pub fn star(body: Regex) -> Self {
        Self::Star {
            body: Box::new(body),
            greedy: true,
        }
    }

    pub fn plus(body: Regex) -> Self {
        Self::Plus {
            body: Box::new(body),
            greedy: true,
        }
    }

    pub fn question(body: Regex) -> Self {
        Self::Question {
            body: Box::new(body),
            greedy: true,
        }
    }

    pub fn suppress(body: Regex) -> Self {
        Self::Suppress(Box::new(body))
    }

    /// Number of capturing groups, which is also the highest group id lowering assigns.
    pub fn capture_count(&self) -> u32 {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Self::Empty
                | Self::Wildcard
                | Self::Literal(_)
                | Self::Class { .. }
                | Self::Named { .. } => {}
                Self::Group { capturing, body } => {
                    if *capturing {
                        count += 1;
                    }
                    stack.push(body);
                }
                Self::Concat(a, b) | Self::Branch(a, b) => {
                    stack.push(a);
                    stack.push(b);
                }
                Self::Repeat { body, .. }
                | Self::Star { body, .. }
                | Self::Plus { body, .. }
                | Self::Question { body, .. }
                | Self::Suppress(body) => stack.push(body),
            }
        }
        count
    }

    /// Moves the node out, leaving `Empty` in its place.
    pub(crate) fn take(&mut self) -> Regex {
        mem::replace(self, Self::Empty)
    }

    fn is_leaf(&self) -> bool {
        matches!(
            self,
            Self::Empty | Self::Wildcard | Self::Literal(_) | Self::Class { .. } | Self::Named { .. }
        )
    }

    /// Direct sub-expressions, left to right.
    fn children(&self) -> impl DoubleEndedIterator<Item = &Regex> {
        let (first, second) = match self {
            Self::Empty
            | Self::Wildcard
            | Self::Literal(_)
            | Self::Class { .. }
            | Self::Named { .. } => (None, None),
            Self::Concat(a, b) | Self::Branch(a, b) => (Some(&**a), Some(&**b)),
            Self::Group { body, .. }
            | Self::Repeat { body, .. }
            | Self::Star { body, .. }
            | Self::Plus { body, .. }
            | Self::Question { body, .. }
            | Self::Suppress(body) => (Some(&**body), None),
        };
        first.into_iter().chain(second)
    }

    /// Indented tree rendering, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format_tree(&mut out)
            .expect("String write never fails");
        out
    }

    fn format_tree(&self, w: &mut impl Write) -> fmt::Result {
        let mut stack = vec![(self, 0)];
        while let Some((node, indent)) = stack.pop() {
            w.write_str(&"  ".repeat(indent))?;
            node.format_line(w)?;
            stack.extend(node.children().rev().map(|child| (child, indent + 1)));
        }
        Ok(())
    }

    fn format_line(&self, w: &mut impl Write) -> fmt::Result {
        match self {
            Self::Empty => writeln!(w, "Empty"),
            Self::Wildcard => writeln!(w, "Wildcard"),
            Self::Literal(c) => writeln!(w, "Literal {c:?}"),
            Self::Group { capturing, .. } => {
                writeln!(w, "{}", if *capturing { "Group" } else { "Group ?:" })
            }
            Self::Concat(..) => writeln!(w, "Concat"),
            Self::Branch(..) => writeln!(w, "Branch"),
            Self::Class { positive, ranges } => {
                let caret = if *positive { "" } else { "^" };
                write!(w, "Class {caret}")?;
                for (i, r) in ranges.iter().enumerate() {
                    if i > 0 {
                        w.write_char(' ')?;
                    }
                    if r.lo == r.hi {
                        write!(w, "{:?}", r.lo)?;
                    } else {
                        write!(w, "{:?}-{:?}", r.lo, r.hi)?;
                    }
                }
                writeln!(w)
            }
            Self::Named { positive, set } => {
                let caret = if *positive { "" } else { "^" };
                writeln!(w, "Named {caret}{set}")
            }
            Self::Repeat {
                min, max, greedy, ..
            } => {
                let lazy = if *greedy { "" } else { "?" };
                match max {
                    Some(max) if max == min => writeln!(w, "Repeat {{{min}}}{lazy}"),
                    Some(max) => writeln!(w, "Repeat {{{min},{max}}}{lazy}"),
                    None => writeln!(w, "Repeat {{{min},}}{lazy}"),
                }
            }
            Self::Star { greedy, .. } => writeln!(w, "Star {}", if *greedy { "*" } else { "*?" }),
            Self::Plus { greedy, .. } => writeln!(w, "Plus {}", if *greedy { "+" } else { "+?" }),
            Self::Question { greedy, .. } => {
                writeln!(w, "Question {}", if *greedy { "?" } else { "??" })
            }
            Self::Suppress(_) => writeln!(w, "Suppress"),
        }
    }

    /// Moves non-leaf children into `out`, leaving `Empty` behind.
    fn detach_children(&mut self, out: &mut Vec<Regex>) {
        let mut detach = |slot: &mut Box<Regex>| {
            if !slot.is_leaf() {
                out.push(slot.take());
            }
        };
        match self {
            Self::Empty
            | Self::Wildcard
            | Self::Literal(_)
            | Self::Class { .. }
            | Self::Named { .. } => {}
            Self::Concat(a, b) | Self::Branch(a, b) => {
                detach(a);
                detach(b);
            }
            Self::Group { body, .. }
            | Self::Repeat { body, .. }
            | Self::Star { body, .. }
            | Self::Plus { body, .. }
            | Self::Question { body, .. }
            | Self::Suppress(body) => detach(body),
        }
    }
}

/// Concatenation spines grow with the pattern, so children are released
/// from a heap stack.
impl Drop for Regex {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}
