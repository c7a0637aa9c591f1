//! Structogram front end: source text to tokens to AST.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Node, Structogram};
pub use error::{Expected, SyntaxError};
pub use lexer::scan;
pub use parser::{parse, parse_with, BlockStart, ParseOptions};
pub use token::{Token, TokenKind, FIXED_LEXEMES};

/// Scan and parse DSL source with default options.
pub fn parse_source(source: &str) -> Result<Structogram, SyntaxError> {
    parse(&scan(source))
}

/// Scan and parse DSL source.
pub fn parse_source_with(
    source: &str,
    options: ParseOptions,
) -> Result<Structogram, SyntaxError> {
    parse_with(&scan(source), options)
}
