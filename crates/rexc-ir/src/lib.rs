#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Canonical byte-level IR for compiled regular expressions.
//!
//! The front end lowers surface syntax into this tree; automaton builders
//! consume it. The algebra is deliberately small:
//!
//! - `Empty`: matches the empty string
//! - `Byte`: matches one byte (0-255)
//! - `Seq` / `Alt`: binary sequencing and alternation
//! - `Star`: Kleene closure
//! - `Group`: capture group wrapper carrying a positive id
//!
//! There is no "empty language" node. Producers signal it by returning
//! `Option::None` instead of an `Ir`.

use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::mem;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod lib_tests;

/// Identity of a capture group. Ids start at 1 and follow source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(NonZeroU32);

impl GroupId {
    pub const FIRST: GroupId = GroupId(NonZeroU32::MIN);

    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The id allocated after this one.
    pub fn succ(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub enum Ir {
    Empty,
    Byte(u8),
    Seq(Box<Ir>, Box<Ir>),
    Alt(Box<Ir>, Box<Ir>),
    Star(Box<Ir>),
    Group(GroupId, Box<Ir>),
}

impl Ir {
    pub fn empty() -> Self {
        Self::Empty
    }

    pub fn byte(b: u8) -> Self {
        Self::Byte(b)
    }

    pub fn seq(first: Ir, second: Ir) -> Self {
        Self::Seq(Box::new(first), Box::new(second))
    }

    pub fn alt(left: Ir, right: Ir) -> Self {
        Self::Alt(Box::new(left), Box::new(right))
    }

    pub fn star(inner: Ir) -> Self {
        Self::Star(Box::new(inner))
    }

    pub fn group(id: GroupId, inner: Ir) -> Self {
        Self::Group(id, Box::new(inner))
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Self::Empty | Self::Byte(_))
    }

    /// Height of the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            max = max.max(level);
            match node {
                Self::Empty | Self::Byte(_) => {}
                Self::Star(inner) | Self::Group(_, inner) => stack.push((&**inner, level + 1)),
                Self::Seq(a, b) | Self::Alt(a, b) => {
                    stack.push((&**b, level + 1));
                    stack.push((&**a, level + 1));
                }
            }
        }
        max
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            match node {
                Self::Empty | Self::Byte(_) => {}
                Self::Star(inner) | Self::Group(_, inner) => stack.push(inner),
                Self::Seq(a, b) | Self::Alt(a, b) => {
                    stack.push(b);
                    stack.push(a);
                }
            }
        }
        count
    }

    /// Group ids in pre-order, duplicates included.
    pub fn group_ids(&self) -> Vec<GroupId> {
        let mut ids = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Self::Empty | Self::Byte(_) => {}
                Self::Star(inner) => stack.push(inner),
                Self::Group(id, inner) => {
                    ids.push(*id);
                    stack.push(inner);
                }
                Self::Seq(a, b) | Self::Alt(a, b) => {
                    stack.push(b);
                    stack.push(a);
                }
            }
        }
        ids
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
            let prefix = "  ".repeat(indent);
            match node {
                Self::Empty => writeln!(w, "{prefix}Empty")?,
                Self::Byte(b) => {
                    write!(w, "{prefix}Byte ")?;
                    write_byte(*b, w)?;
                    writeln!(w)?;
                }
                Self::Seq(a, b) | Self::Alt(a, b) => {
                    let name = if matches!(node, Self::Seq(..)) { "Seq" } else { "Alt" };
                    writeln!(w, "{prefix}{name}")?;
                    stack.push((&**b, indent + 1));
                    stack.push((&**a, indent + 1));
                }
                Self::Star(inner) => {
                    writeln!(w, "{prefix}Star")?;
                    stack.push((&**inner, indent + 1));
                }
                Self::Group(id, inner) => {
                    writeln!(w, "{prefix}Group {id}")?;
                    stack.push((&**inner, indent + 1));
                }
            }
        }
        Ok(())
    }

    /// Moves non-leaf children into `out`, leaving `Empty` behind.
    fn detach_children(&mut self, out: &mut Vec<Ir>) {
        let mut detach = |slot: &mut Box<Ir>| {
            if !slot.is_leaf() {
                out.push(mem::replace(&mut **slot, Ir::Empty));
            }
        };
        match self {
            Self::Empty | Self::Byte(_) => {}
            Self::Star(inner) | Self::Group(_, inner) => detach(inner),
            Self::Seq(a, b) | Self::Alt(a, b) => {
                detach(a);
                detach(b);
            }
        }
    }
}

// Trees can be as deep as the pattern is long; whole-tree operations below
// walk an explicit stack.

impl Drop for Ir {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl Clone for Ir {
    fn clone(&self) -> Self {
        enum Task<'a> {
            Visit(&'a Ir),
            Build(&'a Ir),
        }

        let mut tasks = vec![Task::Visit(self)];
        let mut built: Vec<Ir> = Vec::new();
        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(node) => match node {
                    Self::Empty => built.push(Self::Empty),
                    Self::Byte(b) => built.push(Self::Byte(*b)),
                    Self::Seq(a, b) | Self::Alt(a, b) => {
                        tasks.push(Task::Build(node));
                        tasks.push(Task::Visit(b));
                        tasks.push(Task::Visit(a));
                    }
                    Self::Star(inner) | Self::Group(_, inner) => {
                        tasks.push(Task::Build(node));
                        tasks.push(Task::Visit(inner));
                    }
                },
                Task::Build(node) => {
                    let built_node = match node {
                        Self::Seq(..) | Self::Alt(..) => {
                            let second = built.pop().expect("children are built first");
                            let first = built.pop().expect("children are built first");
                            if matches!(node, Self::Seq(..)) {
                                Self::seq(first, second)
                            } else {
                                Self::alt(first, second)
                            }
                        }
                        Self::Star(_) => {
                            Self::star(built.pop().expect("children are built first"))
                        }
                        Self::Group(id, _) => {
                            Self::group(*id, built.pop().expect("children are built first"))
                        }
                        Self::Empty | Self::Byte(_) => unreachable!("leaves are built on visit"),
                    };
                    built.push(built_node);
                }
            }
        }
        built.pop().expect("root is built last")
    }
}

impl PartialEq for Ir {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some(pair) = pairs.pop() {
            match pair {
                (Self::Empty, Self::Empty) => {}
                (Self::Byte(x), Self::Byte(y)) if x == y => {}
                (Self::Seq(a1, b1), Self::Seq(a2, b2))
                | (Self::Alt(a1, b1), Self::Alt(a2, b2)) => {
                    pairs.push((&**b1, &**b2));
                    pairs.push((&**a1, &**a2));
                }
                (Self::Star(x), Self::Star(y)) => pairs.push((&**x, &**y)),
                (Self::Group(i, x), Self::Group(j, y)) if i == j => pairs.push((&**x, &**y)),
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Ir {}

impl Hash for Ir {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            mem::discriminant(node).hash(state);
            match node {
                Self::Empty => {}
                Self::Byte(b) => b.hash(state),
                Self::Star(inner) => stack.push(inner),
                Self::Group(id, inner) => {
                    id.hash(state);
                    stack.push(inner);
                }
                Self::Seq(a, b) | Self::Alt(a, b) => {
                    stack.push(b);
                    stack.push(a);
                }
            }
        }
    }
}

/// S-expression rendering: `(seq 'a' (star 'b'))`.
impl fmt::Display for Ir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'a> {
            Node(&'a Ir),
            Text(&'static str),
        }

        let mut stack = vec![Piece::Node(self)];
        while let Some(piece) = stack.pop() {
            let node = match piece {
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Node(node) => node,
            };
            match node {
                Self::Empty => f.write_str("eps")?,
                Self::Byte(b) => write_byte(*b, f)?,
                Self::Seq(a, b) | Self::Alt(a, b) => {
                    let head = if matches!(node, Self::Seq(..)) { "(seq " } else { "(alt " };
                    f.write_str(head)?;
                    stack.extend([
                        Piece::Text(")"),
                        Piece::Node(b),
                        Piece::Text(" "),
                        Piece::Node(a),
                    ]);
                }
                Self::Star(inner) => {
                    f.write_str("(star ")?;
                    stack.extend([Piece::Text(")"), Piece::Node(inner)]);
                }
                Self::Group(id, inner) => {
                    write!(f, "(group {id} ")?;
                    stack.extend([Piece::Text(")"), Piece::Node(inner)]);
                }
            }
        }
        Ok(())
    }
}

fn write_byte(b: u8, w: &mut impl Write) -> fmt::Result {
    if b.is_ascii_graphic() && b != b'\'' && b != b'\\' {
        write!(w, "'{}'", b as char)
    } else {
        write!(w, "0x{b:02x}")
    }
}
