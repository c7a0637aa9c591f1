//! Token types for the structogram scanner.

use std::fmt;

/// A token produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The lexeme, the unquoted content for strings, or `"EOF"`.
    pub text: String,
    pub line: usize,
    pub col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            col,
        }
    }
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Name,
    Instruction,
    Call,
    If,
    Else,
    While,
    DoWhile,
    Switch,
    Case,
    Default,

    // Delimiters
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,

    // Literals
    String,

    // Special
    Whitespace,
    Invalid,
    Eof,
}

/// Every lexeme the scanner commits to as soon as its buffer equals it.
pub const FIXED_LEXEMES: [(&str, TokenKind); 14] = [
    ("name", TokenKind::Name),
    ("instruction", TokenKind::Instruction),
    ("call", TokenKind::Call),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("dowhile", TokenKind::DoWhile),
    ("switch", TokenKind::Switch),
    ("case", TokenKind::Case),
    ("default", TokenKind::Default),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("{", TokenKind::OpenBrace),
    ("}", TokenKind::CloseBrace),
];

impl TokenKind {
    /// Look up the kind whose fixed lexeme is exactly `s`.
    pub fn from_lexeme(s: &str) -> Option<TokenKind> {
        FIXED_LEXEMES
            .iter()
            .find(|(lexeme, _)| *lexeme == s)
            .map(|&(_, kind)| kind)
    }

    /// Stable name used in diagnostics and token dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Name => "name",
            TokenKind::Instruction => "instruction",
            TokenKind::Call => "call",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::DoWhile => "dowhile",
            TokenKind::Switch => "switch",
            TokenKind::Case => "case",
            TokenKind::Default => "default",
            TokenKind::OpenParen => "openParentheses",
            TokenKind::CloseParen => "closeParentheses",
            TokenKind::OpenBrace => "openBrace",
            TokenKind::CloseBrace => "closeBrace",
            TokenKind::String => "string",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Invalid => "invalid",
            TokenKind::Eof => "EOF",
        }
    }

    /// Whether this kind can start a statement inside a statement list.
    pub fn starts_statement(self) -> bool {
        matches!(
            self,
            TokenKind::Instruction
                | TokenKind::Call
                | TokenKind::If
                | TokenKind::While
                | TokenKind::DoWhile
                | TokenKind::Switch
                | TokenKind::Case
                | TokenKind::Default
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
