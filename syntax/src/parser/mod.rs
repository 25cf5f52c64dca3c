//! Parser for formula expressions.
//!
//! Inputs: a [`TokenCursor`] over lexer tokens ending with an explicit EOF token.
//! Spans are UTF-8 byte offsets into the source text, with half-open semantics `[start, end)`.
//!
//! Responsibility: build the AST or report the first syntax error. There is no recovery;
//! evaluation lives in the `formula-evaluator` crate.

use std::fmt;

use thiserror::Error;

use crate::lexer::{Span, Token, TokenKind};
use crate::parser::ast::Expr;

pub mod ast;
mod expr;
mod pretty;
mod tokenstream;
pub mod visit;

pub use tokenstream::TokenCursor;

/// Parentheses and prefix operators may nest at most this deep.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Tallest tree the parser builds, see [`Expr::height`](ast::Expr::height).
///
/// Operator chains count too: `0+1+1+…` grows one level per operator.
pub const MAX_TREE_HEIGHT: usize = 512;

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Expression,
    CloseParen,
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Expression => f.write_str("expression"),
            Expected::CloseParen => f.write_str("`)`"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: Expected,
        found: TokenKind,
        span: Span,
    },
    /// `open` is the span of the `(` that was never closed.
    #[error("expected `)`, found {found}")]
    UnclosedParen {
        found: TokenKind,
        span: Span,
        open: Span,
    },
    #[error("expected end of input, found {found}")]
    TrailingInput { found: TokenKind, span: Span },
    #[error("number literal `{text}` is out of range")]
    NumberOutOfRange { text: String, span: Span },
    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnclosedParen { span, .. }
            | ParseError::TrailingInput { span, .. }
            | ParseError::NumberOutOfRange { span, .. }
            | ParseError::TooDeep { span, .. } => *span,
        }
    }

    pub fn position(&self) -> usize {
        self.span().start as usize
    }

    pub fn expected(&self) -> Option<Expected> {
        match self {
            ParseError::UnexpectedToken { expected, .. } => Some(*expected),
            ParseError::UnclosedParen { .. } => Some(Expected::CloseParen),
            ParseError::TrailingInput { .. } => Some(Expected::EndOfInput),
            ParseError::NumberOutOfRange { .. } | ParseError::TooDeep { .. } => None,
        }
    }

    pub fn found(&self) -> Option<&TokenKind> {
        match self {
            ParseError::UnexpectedToken { found, .. }
            | ParseError::UnclosedParen { found, .. }
            | ParseError::TrailingInput { found, .. } => Some(found),
            ParseError::NumberOutOfRange { .. } | ParseError::TooDeep { .. } => None,
        }
    }
}

pub struct Parser<'a> {
    token_cursor: TokenCursor<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(token_cursor: TokenCursor<'a>) -> Self {
        Parser {
            token_cursor,
            depth: 0,
        }
    }

    fn cur(&self) -> &Token {
        let idx = self
            .token_cursor
            .pos
            .min(self.token_cursor.tokens.len() - 1);
        &self.token_cursor.tokens[idx]
    }

    /// Consumes the current token. The trailing EOF token is never consumed.
    fn bump(&mut self) -> Token {
        let tok = self.cur().clone();
        if tok.kind != TokenKind::Eof {
            self.token_cursor.pos += 1;
        }
        tok
    }

    /// Span of the last consumed token.
    fn prev_span(&self) -> Span {
        let idx = self.token_cursor.pos.saturating_sub(1);
        self.token_cursor
            .tokens
            .get(idx)
            .map_or_else(|| self.cur().span, |tok| tok.span)
    }

    /// Rejects `expr` once it is taller than [`MAX_TREE_HEIGHT`]; `span` marks the operator
    /// that made it so.
    fn check_height(&self, expr: Expr, span: Span) -> Result<Expr, ParseError> {
        if expr.height() > MAX_TREE_HEIGHT {
            return Err(ParseError::TooDeep {
                limit: MAX_TREE_HEIGHT,
                span,
            });
        }
        Ok(expr)
    }

    fn lit_text(&self, span: Span) -> &'a str {
        span.slice(self.token_cursor.source)
    }

    fn unexpected(&self, expected: Expected) -> ParseError {
        let tok = self.cur();
        ParseError::UnexpectedToken {
            expected,
            found: tok.kind.clone(),
            span: tok.span,
        }
    }

    /// Runs `f` one nesting level deeper, failing once [`MAX_NESTING_DEPTH`] is exceeded.
    fn nested<T>(
        &mut self,
        span: Span,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_NESTING_DEPTH,
                span,
            });
        }
        self.depth += 1;
        let out = f(self);
        self.depth -= 1;
        out
    }
}
