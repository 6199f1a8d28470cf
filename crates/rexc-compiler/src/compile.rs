//! Parse and lower in one call.

#[cfg(test)]
#[path = "compile_tests.rs"]
mod compile_tests;

use rexc_ir::Ir;

use crate::Result;
use crate::lower::{LowerOptions, lower_with};
use crate::parser::{Anchoring, parse};

/// Output of the front end for one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    pub anchoring: Anchoring,
    /// `None` when the pattern denotes the empty language.
    pub ir: Option<Ir>,
    pub group_count: u32,
}

impl Compiled {
    pub fn matches_nothing(&self) -> bool {
        self.ir.is_none()
    }
}

pub fn compile(source: &str, options: &LowerOptions) -> Result<Compiled> {
    let (anchoring, ast) = parse(source)?;
    let lowered = lower_with(ast, options)?;
    Ok(Compiled {
        anchoring,
        ir: lowered.ir,
        group_count: lowered.group_count,
    })
}
