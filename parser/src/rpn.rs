//! FILENAME: parser/src/rpn.rs
//! PURPOSE: Reorders infix tokens into postfix (Reverse Polish) order.
//! CONTEXT: Second stage of the pipeline. A shunting-yard pass resolves
//! priority and associativity so the AST builder can work with a plain
//! operand stack. Parentheses never reach the output.

use crate::error::{Unmatched, UnmatchedParenthesisError};
use crate::token::{Associativity, OperatorClass, Token, TokenKind};

/// Returns true if the operator on top of the stack must be emitted before
/// `incoming` is pushed.
///
/// A unary operator on the stack always binds tighter than an incoming
/// binary one. Between binary operators, a left-associative incoming
/// operator yields to equal or higher priority, a right-associative one only
/// to strictly higher priority.
fn dominates(top: OperatorClass, incoming: OperatorClass) -> bool {
    if top.is_unary() {
        return true;
    }
    match incoming {
        OperatorClass::Binary {
            associativity,
            priority,
        } => {
            (associativity == Associativity::Left && priority <= top.priority())
                || priority < top.priority()
        }
        // Unary operators are pushed without comparison.
        OperatorClass::Unary { .. } => false,
    }
}

/// Converts an infix token sequence to postfix.
pub fn order_by_rpn(tokens: Vec<Token>) -> Result<Vec<Token>, UnmatchedParenthesisError> {
    let mut stack: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.kind {
            TokenKind::Variable(_) => output.push(token),
            TokenKind::LeftParen => stack.push(token),
            TokenKind::RightParen => {
                loop {
                    let top = stack.pop().ok_or(UnmatchedParenthesisError {
                        kind: Unmatched::MissingLeft,
                        offset: token.span.start,
                    })?;
                    if top.kind == TokenKind::LeftParen {
                        break;
                    }
                    output.push(top);
                }
            }
            TokenKind::Negation => stack.push(token),
            TokenKind::Conjunction | TokenKind::Disjunction | TokenKind::Implication => {
                while let Some(top) = stack.last() {
                    let pop = match (top.operator(), token.operator()) {
                        (Some(top), Some(incoming)) => dominates(top.class, incoming.class),
                        // Parentheses on the stack stop the sweep.
                        _ => false,
                    };
                    if !pop {
                        break;
                    }
                    if let Some(popped) = stack.pop() {
                        log::trace!("popped {} before {}", popped.value(), token.value());
                        output.push(popped);
                    }
                }
                stack.push(token);
            }
        }
    }

    while let Some(token) = stack.pop() {
        if token.kind == TokenKind::LeftParen {
            return Err(UnmatchedParenthesisError {
                kind: Unmatched::MissingRight,
                offset: token.span.start,
            });
        }
        output.push(token);
    }

    log::debug!("postfix order: {}", crate::token::tokens_to_string(&output));
    Ok(output)
}
