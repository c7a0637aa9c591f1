//! Syntax errors reported by the parser.

use std::fmt;

use thiserror::Error;

use super::parser::MAX_NESTING;
use super::token::{Token, TokenKind};

/// What the parser was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific token kind, e.g. `closeParentheses` or `default`.
    Token(TokenKind),
    /// A keyword that may open a statement.
    Keyword,
    /// Any statement (reported for a stray `else`).
    Statement,
    /// A block within the nesting limit.
    ShallowerNesting,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => f.write_str(kind.as_str()),
            Expected::Keyword => f.write_str("keyword"),
            Expected::Statement => f.write_str("statement"),
            Expected::ShallowerNesting => {
                write!(f, "at most {MAX_NESTING} nested blocks")
            }
        }
    }
}

impl From<TokenKind> for Expected {
    fn from(kind: TokenKind) -> Self {
        Expected::Token(kind)
    }
}

/// The first syntax violation found in a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{col}, expected '{expected}', but got '{actual}'")]
pub struct SyntaxError {
    pub line: usize,
    pub col: usize,
    pub expected: Expected,
    pub actual: TokenKind,
}

impl SyntaxError {
    /// An error located at `found`.
    pub fn unexpected(expected: impl Into<Expected>, found: &Token) -> Self {
        Self {
            line: found.line,
            col: found.col,
            expected: expected.into(),
            actual: found.kind,
        }
    }
}
