//! Scanner for the structogram DSL.
//!
//! Converts source text into a stream of [`Token`]s. Scanning never fails:
//! anything that is not a keyword, delimiter, string or whitespace becomes an
//! [`TokenKind::Invalid`] token and is left for the parser to reject.
//!
//! Keywords are matched eagerly. As soon as the characters collected since
//! the last token spell one of the fixed lexemes, that token is emitted,
//! without looking at what follows. `named` therefore scans as `name`
//! followed by an invalid `d`.

use super::token::{Token, TokenKind};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    buffer: String,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            buffer: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Scan the whole source. The result always ends with exactly one `Eof`.
    pub fn tokenize(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            let ch = self.peek();

            // A delimiter closes whatever unmatched text came before it.
            if !self.buffer.is_empty() && is_delimiter(ch) {
                self.emit_buffer(TokenKind::Invalid);
                continue;
            }

            match ch {
                ' ' | '\t' | '\n' => self.lex_whitespace(),
                '"' | '\'' => self.lex_string(),
                _ => {
                    let ch = self.advance();
                    self.buffer.push(ch);
                    if let Some(kind) = TokenKind::from_lexeme(&self.buffer) {
                        self.emit_buffer(kind);
                    }
                }
            }
        }

        if !self.buffer.is_empty() {
            self.emit_buffer(TokenKind::Invalid);
        }
        self.tokens
            .push(Token::new(TokenKind::Eof, "EOF", self.line, self.col));

        tracing::debug!(
            tokens = self.tokens.len(),
            lines = self.line,
            "scanned source"
        );
        std::mem::take(&mut self.tokens)
    }

    fn peek(&self) -> char {
        self.chars[self.pos]
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.pos];
        self.pos += 1;
        ch
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Emit the buffered characters as one token and advance the column by
    /// their length.
    fn emit_buffer(&mut self, kind: TokenKind) {
        let text = std::mem::take(&mut self.buffer);
        let width = text.chars().count();
        self.tokens.push(Token::new(kind, text, self.line, self.col));
        self.col += width;
    }

    fn lex_whitespace(&mut self) {
        let line = self.line;
        let col = self.col;
        let mut run = String::new();
        while !self.is_at_end() && is_whitespace(self.peek()) {
            run.push(self.advance());
        }

        for ch in run.chars() {
            if ch == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        self.tokens
            .push(Token::new(TokenKind::Whitespace, run, line, col));
    }

    fn lex_string(&mut self) {
        let quote = self.advance();
        let mut content = String::new();
        while !self.is_at_end() && self.peek() != quote {
            content.push(self.advance());
        }
        if !self.is_at_end() {
            self.advance(); // closing quote
        }

        // The quotes are not part of the text but still occupy columns.
        let width = content.chars().count() + 2;
        self.tokens
            .push(Token::new(TokenKind::String, content, self.line, self.col));
        self.col += width;
    }
}

/// Scan `source` into tokens.
pub fn scan(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

fn is_delimiter(ch: char) -> bool {
    is_whitespace(ch) || matches!(ch, '"' | '\'' | '(' | ')' | '{' | '}')
}
