use crate::lexer::{Span, Token, TokenKind};

/// The token sequence a [`Parser`](super::Parser) consumes, plus the source it was lexed from.
pub struct TokenCursor<'a> {
    pub source: &'a str,
    pub tokens: Vec<Token>,
    pub pos: usize,
}

impl<'a> TokenCursor<'a> {
    /// Wraps `tokens`, appending an EOF token at the end of `source` if the caller's
    /// sequence does not already end with one.
    pub fn new(source: &'a str, mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            tokens.push(Token {
                kind: TokenKind::Eof,
                span: Span::empty(source.len()),
            });
        }

        TokenCursor {
            source,
            tokens,
            pos: 0,
        }
    }
}
