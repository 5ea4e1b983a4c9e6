//! FILENAME: parser/src/lib.rs
//! PURPOSE: Library root for the propositional formula parser.
//! CONTEXT: This crate exposes the lexer, the RPN reorderer and the AST
//! builder needed to turn formula strings into expression trees.
//!
//! PIPELINE: Formula String --> Lexer --> Tokens --> RPN --> Postfix --> AST
//!
//! SUPPORTED FEATURES:
//! - Variables: lowercase names (a, foo)
//! - Negation: NOT (binds tightest)
//! - Conjunction / disjunction: AND, OR (left-associative, equal priority)
//! - Implication: -> (right-associative, lowest priority)
//! - Parentheses for grouping

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod rpn;
pub mod token;


// Re-export commonly used types for convenience
pub use ast::{parse_ast, BinaryOperator, Node, UnaryOperator};
pub use error::{
    FormulaError, ParseError, ParseResult, TokenizeError, Unmatched, UnmatchedParenthesisError,
};
pub use lexer::{tokenize, Lexer};
pub use parser::parse;
pub use rpn::order_by_rpn;
pub use token::{
    tokens_to_string, Associativity, OperatorClass, OperatorSpec, Span, Token, TokenKind,
};
