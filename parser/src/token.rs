//! FILENAME: parser/src/token.rs
//! PURPOSE: Token definitions and the fixed operator table.
//! CONTEXT: Tokens are produced by the lexer, reordered by the RPN stage and
//! consumed by the AST builder. Operator metadata (arity, associativity,
//! priority) lives here as static data so every stage reads the same table.

use serde::{Deserialize, Serialize};

/// Half-open character range `[start, end)` into the original formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }
}

/// Grouping direction for operators of equal priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Associativity {
    Left,
    Right,
}

/// Operator class with its precedence data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatorClass {
    Unary {
        priority: u8,
    },
    Binary {
        associativity: Associativity,
        priority: u8,
    },
}

impl OperatorClass {
    pub fn priority(&self) -> u8 {
        match self {
            OperatorClass::Unary { priority } => *priority,
            OperatorClass::Binary { priority, .. } => *priority,
        }
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, OperatorClass::Unary { .. })
    }
}

/// One row of the operator table.
#[derive(Debug, PartialEq, Eq)]
pub struct OperatorSpec {
    pub keyword: &'static str,
    pub class: OperatorClass,
}

// ============================================================================
// OPERATOR TABLE
// ============================================================================

pub static NEGATION: OperatorSpec = OperatorSpec {
    keyword: "NOT",
    class: OperatorClass::Unary { priority: 3 },
};

pub static CONJUNCTION: OperatorSpec = OperatorSpec {
    keyword: "AND",
    class: OperatorClass::Binary {
        associativity: Associativity::Left,
        priority: 2,
    },
};

pub static DISJUNCTION: OperatorSpec = OperatorSpec {
    keyword: "OR",
    class: OperatorClass::Binary {
        associativity: Associativity::Left,
        priority: 2,
    },
};

pub static IMPLICATION: OperatorSpec = OperatorSpec {
    keyword: "->",
    class: OperatorClass::Binary {
        associativity: Associativity::Right,
        priority: 1,
    },
};

/// The kinds of token the lexer recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Variable(String),

    // Operators
    Negation,
    Conjunction,
    Disjunction,
    Implication,

    // Delimiters
    LeftParen,
    RightParen,
}

impl TokenKind {
    /// Operator metadata, or `None` for variables and parentheses.
    pub fn operator(&self) -> Option<&'static OperatorSpec> {
        match self {
            TokenKind::Negation => Some(&NEGATION),
            TokenKind::Conjunction => Some(&CONJUNCTION),
            TokenKind::Disjunction => Some(&DISJUNCTION),
            TokenKind::Implication => Some(&IMPLICATION),
            TokenKind::Variable(_) | TokenKind::LeftParen | TokenKind::RightParen => None,
        }
    }

    /// The source text this kind stands for.
    pub fn value(&self) -> &str {
        match self {
            TokenKind::Variable(name) => name,
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Negation => NEGATION.keyword,
            TokenKind::Conjunction => CONJUNCTION.keyword,
            TokenKind::Disjunction => DISJUNCTION.keyword,
            TokenKind::Implication => IMPLICATION.keyword,
        }
    }

    pub fn is_paren(&self) -> bool {
        matches!(self, TokenKind::LeftParen | TokenKind::RightParen)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A token with its position in the source formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Builds a token starting at `start`; the span length follows the value.
    pub fn new(kind: TokenKind, start: usize) -> Self {
        let end = start + kind.value().len();
        Token {
            kind,
            span: Span::new(start, end),
        }
    }

    pub fn variable(name: impl Into<String>, start: usize) -> Self {
        Token::new(TokenKind::Variable(name.into()), start)
    }

    pub fn value(&self) -> &str {
        self.kind.value()
    }

    pub fn operator(&self) -> Option<&'static OperatorSpec> {
        self.kind.operator()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Joins token values with single spaces, e.g. `"a b OR"` for a postfix run.
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::value)
        .collect::<Vec<_>>()
        .join(" ")
}
