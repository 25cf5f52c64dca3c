//! Formula syntax: lexer, parser and AST.
//!
//! Pipeline: lex → parse → AST. Evaluation lives in `formula-evaluator`.
//! All spans are UTF-8 byte offsets into the source text, using `[start, end)`.
use thiserror::Error;
use tracing::debug;

use crate::parser::{Parser, TokenCursor};

mod diagnostics;
mod lexer;
mod parser;
mod source_map;
mod span;
mod tests;

pub use diagnostics::{Diagnostic, Label, format_diagnostic, format_diagnostics};
pub use lexer::{LexError, Lit, LitKind, Symbol, Token, TokenKind, tokenize};
pub use parser::ast;
pub use parser::visit::{self, Visitor, walk};
pub use parser::{Expected, MAX_NESTING_DEPTH, MAX_TREE_HEIGHT, ParseError};
pub use source_map::SourceMap;
pub use span::{Span, Spanned};

/// Any error `parse` can return: the lexer's or the parser's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Lex(err) => err.span(),
            SyntaxError::Parse(err) => err.span(),
        }
    }

    pub fn position(&self) -> usize {
        self.span().start as usize
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        self.into()
    }
}

/// Parses a single formula expression.
///
/// Spans are stored as `u32`, so positions in sources longer than `u32::MAX` bytes
/// saturate at `u32::MAX`.
pub fn parse(text: &str) -> Result<ast::Expr, SyntaxError> {
    let tokens = tokenize(text)?;
    Ok(parse_tokens(text, tokens)?)
}

/// Parses an already tokenized formula. `source` is the text the tokens were lexed from.
pub fn parse_tokens(source: &str, tokens: Vec<Token>) -> Result<ast::Expr, ParseError> {
    debug!(len = source.len(), tokens = tokens.len(), "parse");
    let token_cursor = TokenCursor::new(source, tokens);
    let mut parser = Parser::new(token_cursor);
    parser.parse().inspect_err(|err| {
        debug!(%err, position = err.position(), "parse error");
    })
}
