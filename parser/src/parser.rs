//! FILENAME: parser/src/parser.rs
//! PURPOSE: Runs the full pipeline from formula text to a tree.
//! CONTEXT: Glues the three stages together; each stage's error converts
//! into `ParseError` so the first failure is returned as-is.
//!
//! GRAMMAR:
//!   expr     --> term ( ("AND" | "OR" | "->") term )*
//!   term     --> "NOT" term | "(" expr ")" | variable
//!   variable --> [a-z]+
//!
//! Keywords must be followed by a space.

use crate::ast::{parse_ast, Node};
use crate::error::ParseResult;
use crate::lexer::tokenize;
use crate::rpn::order_by_rpn;

/// Parses a formula string into its tree.
pub fn parse(input: &str) -> ParseResult<Node> {
    let tokens = tokenize(input)?;
    let postfix = order_by_rpn(tokens)?;
    let node = parse_ast(postfix)?;
    log::debug!("parsed {:?} as {}", input, node);
    Ok(node)
}
