//! Parser for the structogram DSL.
//!
//! A recursive-descent parser over the scanner's tokens. Whitespace tokens are
//! dropped up front. The first syntax violation aborts the parse.
//!
//! ```text
//! structogram := 'name' '(' STR ')' statement* EOF
//! statement   := instruction | call | if [else] | while | dowhile
//!              | switch | case | default
//! block       := '{' statement+ '}'
//! switch      := 'switch' '(' STR ')' '{' case* default '}'
//! ```
//!
//! Whether `case` and `default` are legal depends on where the parser is, so
//! every parse function takes a [`Context`] describing its enclosing switch
//! and case bodies.

use serde::{Deserialize, Serialize};

use super::ast::{Node, Structogram};
use super::error::{Expected, SyntaxError};
use super::token::{Token, TokenKind};

/// Which keywords may open a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockStart {
    /// Only `instruction`, `if`, `call`, `default` and `switch`. Blocks whose
    /// first statement is a `while`, `dowhile` or `case` are rejected.
    #[default]
    Compatible,
    /// Every keyword the statement loop accepts.
    AnyStatement,
}

impl BlockStart {
    fn accepts(self, kind: TokenKind) -> bool {
        match self {
            BlockStart::Compatible => matches!(
                kind,
                TokenKind::Instruction
                    | TokenKind::If
                    | TokenKind::Call
                    | TokenKind::Default
                    | TokenKind::Switch
            ),
            BlockStart::AnyStatement => kind.starts_statement(),
        }
    }
}

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub block_start: BlockStart,
}

/// Deepest block nesting accepted. Each block, switch body included, is one
/// level. Deeper input is rejected instead of exhausting the stack.
pub const MAX_NESTING: usize = 128;

/// Where in the switch structure a statement list sits.
#[derive(Debug, Clone, Copy, Default)]
struct Context {
    /// Inside some switch body; a bare `default` statement is illegal.
    in_switch_body: bool,
    /// Inside a case body; a nested `case` statement is illegal.
    in_case_body: bool,
    /// Blocks opened around this statement list.
    depth: usize,
}

pub struct Parser<'a> {
    tokens: Vec<&'a Token>,
    pos: usize,
    options: ParseOptions,
    /// Stands in for a missing end marker in hand-built token streams.
    end: Token,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], options: ParseOptions) -> Self {
        let (line, col) = tokens.last().map_or((1, 1), |t| (t.line, t.col));
        Self {
            tokens: tokens
                .iter()
                .filter(|t| t.kind != TokenKind::Whitespace)
                .collect(),
            pos: 0,
            options,
            end: Token::new(TokenKind::Eof, "EOF", line, col),
        }
    }

    pub fn parse(&mut self) -> Result<Structogram, SyntaxError> {
        let result = self.parse_structogram();
        match &result {
            Ok(structogram) => tracing::debug!(
                name = %structogram.name,
                nodes = structogram.nodes.len(),
                "parsed structogram"
            ),
            Err(err) => tracing::debug!(%err, "syntax error"),
        }
        result
    }

    fn parse_structogram(&mut self) -> Result<Structogram, SyntaxError> {
        self.expect(TokenKind::Name)?;
        let name = self.parse_argument()?;
        let nodes = self.parse_statements(TokenKind::Eof, Context::default())?;
        Ok(Structogram { name, nodes })
    }

    /// Parse statements until `stop`, consuming it.
    fn parse_statements(
        &mut self,
        stop: TokenKind,
        ctx: Context,
    ) -> Result<Vec<Node>, SyntaxError> {
        let mut nodes = Vec::new();

        loop {
            let kind = self.peek().kind;
            if kind == stop {
                self.advance();
                return Ok(nodes);
            }

            match kind {
                TokenKind::Eof => return Err(self.error(stop)),
                TokenKind::Instruction => {
                    self.advance();
                    let text = self.parse_argument()?;
                    nodes.push(Node::Instruction { text });
                }
                TokenKind::Call => {
                    self.advance();
                    let text = self.parse_argument()?;
                    nodes.push(Node::Call { text });
                }
                TokenKind::If => {
                    self.advance();
                    let condition = self.parse_argument()?;
                    let body = self.parse_block(ctx)?;
                    nodes.push(Node::If { condition, body });

                    if self.check(TokenKind::Else) {
                        self.advance();
                        let body = self.parse_block(ctx)?;
                        nodes.push(Node::Else { body });
                    }
                }
                TokenKind::Else => return Err(self.error(Expected::Statement)),
                TokenKind::While => {
                    self.advance();
                    let condition = self.parse_argument()?;
                    let body = self.parse_block(ctx)?;
                    nodes.push(Node::While { condition, body });
                }
                TokenKind::DoWhile => {
                    self.advance();
                    let condition = self.parse_argument()?;
                    let body = self.parse_block(ctx)?;
                    nodes.push(Node::DoWhile { condition, body });
                }
                TokenKind::Switch => {
                    self.advance();
                    let condition = self.parse_argument()?;
                    let body = self.parse_switch_body(ctx)?;
                    nodes.push(Node::Switch { condition, body });
                }
                TokenKind::Default if !ctx.in_switch_body => {
                    self.advance();
                    let body = self.parse_block(ctx)?;
                    nodes.push(Node::Default { body });
                }
                TokenKind::Case if !ctx.in_case_body => {
                    self.advance();
                    let condition = self.parse_argument()?;
                    let body = self.parse_block(ctx)?;
                    nodes.push(Node::Case { condition, body });
                }
                _ => return Err(self.error(Expected::Keyword)),
            }

            if let Some(node) = nodes.last() {
                tracing::trace!(keyword = node.keyword(), value = node.value(), "statement");
            }
        }
    }

    /// `'{' statement+ '}'`
    fn parse_block(&mut self, ctx: Context) -> Result<Vec<Node>, SyntaxError> {
        let ctx = self.nested(ctx)?;
        self.expect(TokenKind::OpenBrace)?;
        if !self.options.block_start.accepts(self.peek().kind) {
            return Err(self.error(Expected::Keyword));
        }
        self.parse_statements(TokenKind::CloseBrace, ctx)
    }

    /// `'{' case* default '}'`
    ///
    /// Only the case blocks count as case bodies. The default block may
    /// again hold `case` statements, even when the switch itself sits in a
    /// case body.
    fn parse_switch_body(&mut self, ctx: Context) -> Result<Vec<Node>, SyntaxError> {
        let switch_ctx = Context {
            in_switch_body: true,
            in_case_body: false,
            ..self.nested(ctx)?
        };
        self.expect(TokenKind::OpenBrace)?;

        let mut body = Vec::new();
        while self.check(TokenKind::Case) {
            self.advance();
            let condition = self.parse_argument()?;
            let case_body = self.parse_block(Context {
                in_case_body: true,
                ..switch_ctx
            })?;
            body.push(Node::Case {
                condition,
                body: case_body,
            });
        }

        if !self.check(TokenKind::Default) {
            return Err(self.error(TokenKind::Default));
        }
        self.advance();
        let default_body = self.parse_block(switch_ctx)?;
        self.expect(TokenKind::CloseBrace)?;
        body.push(Node::Default { body: default_body });

        Ok(body)
    }

    /// Enter one more block level, failing at the current token when the
    /// nesting limit is reached.
    fn nested(&self, ctx: Context) -> Result<Context, SyntaxError> {
        if ctx.depth >= MAX_NESTING {
            return Err(self.error(Expected::ShallowerNesting));
        }
        Ok(Context {
            depth: ctx.depth + 1,
            ..ctx
        })
    }

    /// `'(' STR ')'`, returning the string's content.
    fn parse_argument(&mut self) -> Result<String, SyntaxError> {
        self.expect(TokenKind::OpenParen)?;
        if !self.check(TokenKind::String) {
            return Err(self.error(TokenKind::String));
        }
        let text = self.peek().text.clone();
        self.advance();
        self.expect(TokenKind::CloseParen)?;
        Ok(text)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).copied().unwrap_or(&self.end)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), SyntaxError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(kind))
        }
    }

    fn error(&self, expected: impl Into<Expected>) -> SyntaxError {
        SyntaxError::unexpected(expected, self.peek())
    }
}

/// Parse a token stream with default options.
pub fn parse(tokens: &[Token]) -> Result<Structogram, SyntaxError> {
    parse_with(tokens, ParseOptions::default())
}

/// Parse a token stream.
pub fn parse_with(tokens: &[Token], options: ParseOptions) -> Result<Structogram, SyntaxError> {
    Parser::new(tokens, options).parse()
}
