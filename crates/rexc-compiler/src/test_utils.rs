//! Test helpers shared by the parser and lowering tests.

use rexc_ir::Ir;

use crate::lower::{LowerOptions, lower_with};
use crate::parser::{Anchoring, Regex, parse};

/// Parses `source`, panicking with the rendered error on failure.
pub fn expect_parse(source: &str) -> (Anchoring, Regex) {
    match parse(source) {
        Ok(parsed) => parsed,
        Err(err) => panic!("expected valid regex:\n{}", err.render(source)),
    }
}

/// AST dump of a valid regex.
pub fn expect_ast(source: &str) -> String {
    expect_parse(source).1.dump()
}

/// Rendered error of an invalid regex.
pub fn expect_invalid(source: &str) -> String {
    match parse(source) {
        Ok((_, ast)) => panic!("expected a parse error, got:\n{}", ast.dump()),
        Err(err) => err.render(source),
    }
}

/// IR of a valid regex with the given options.
pub fn expect_ir_with(source: &str, options: &LowerOptions) -> Option<Ir> {
    let (_, ast) = expect_parse(source);
    match lower_with(ast, options) {
        Ok(lowered) => lowered.ir,
        Err(err) => panic!("expected lowering to succeed: {err}"),
    }
}

/// IR of a valid regex with default options, as an s-expression.
/// The empty language renders as `none`.
pub fn expect_ir(source: &str) -> String {
    render(expect_ir_with(source, &LowerOptions::default()))
}

pub fn render(ir: Option<Ir>) -> String {
    ir.map_or_else(|| "none".to_string(), |ir| ir.to_string())
}
