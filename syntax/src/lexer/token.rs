//! Lexer tokens.
//!
//! Spans are UTF-8 byte offsets into the source text, half-open `[start, end)`.
//! The lexer always emits a [`TokenKind::Eof`] token with an empty span at end of input.

use std::fmt;

pub use crate::span::{Span, Spanned};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub text: String,
}

impl Symbol {
    pub fn new(text: impl Into<String>) -> Self {
        Symbol { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    Bool,
    Number,
    String,
}

/// A literal token.
///
/// For numbers and booleans `symbol` is the lexeme as written. For strings it is the
/// decoded contents, without quotes and with escapes resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lit {
    pub kind: LitKind,
    pub symbol: Symbol,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /* Expression-operator symbols. */
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `==`
    EqEq,
    /// `!=`
    Ne,
    /// `>=`
    Ge,
    /// `>`
    Gt,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `!`
    Bang,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,

    /* Structural symbols */
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,

    /* Literals */
    /// Literal token.
    Literal(Lit),
    /// Identifier token.
    Ident(Symbol),

    /// End of input
    Eof,
}

impl TokenKind {
    /// The fixed spelling of operator and delimiter tokens.
    pub fn spelling(&self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self {
            // Relational operators
            Lt => "<",
            Le => "<=",
            EqEq => "==",
            Ne => "!=",
            Ge => ">=",
            Gt => ">",

            // Logical operators
            AndAnd => "&&",
            OrOr => "||",
            Bang => "!",

            // Arithmetic operators
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Percent => "%",

            // Delimiters
            OpenParen => "(",
            CloseParen => ")",

            _ => return None,
        })
    }

    pub fn is_operator(&self) -> bool {
        !matches!(
            self,
            TokenKind::OpenParen
                | TokenKind::CloseParen
                | TokenKind::Literal(_)
                | TokenKind::Ident(_)
                | TokenKind::Eof
        )
    }
}

/// Describes a token the way diagnostics mention it: `` `+` ``, `number`, `end of input`.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(spelling) = self.spelling() {
            return write!(f, "`{spelling}`");
        }

        match self {
            TokenKind::Ident(sym) => write!(f, "identifier `{}`", sym.text),
            TokenKind::Literal(lit) => match lit.kind {
                LitKind::Bool => f.write_str("boolean"),
                LitKind::Number => f.write_str("number"),
                LitKind::String => f.write_str("string literal"),
            },
            TokenKind::Eof => f.write_str("end of input"),
            other => write!(f, "{other:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A token with its source span.
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn can_begin_expr(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Ident(..)
                | TokenKind::OpenParen
                | TokenKind::Literal(..)
                | TokenKind::Bang
                | TokenKind::Minus
                | TokenKind::Plus
        )
    }

    /// The lexeme as it appears in `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source)
    }

    /// Byte offset of the token's first character.
    pub fn position(&self) -> usize {
        self.span.start as usize
    }
}
