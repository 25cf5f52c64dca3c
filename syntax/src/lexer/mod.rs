use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;
use tracing::{debug, trace};

mod token;

pub use token::{Lit, LitKind, Span, Spanned, Symbol, Token, TokenKind};

/// The first character sequence the lexer could not turn into a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character `{ch}`{}", hint_suffix(.hint))]
    UnexpectedChar {
        ch: char,
        span: Span,
        hint: Option<&'static str>,
    },
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
    #[error("unknown escape sequence `\\{ch}` in string literal")]
    InvalidEscape { ch: char, span: Span },
}

fn hint_suffix(hint: &Option<&'static str>) -> String {
    match hint {
        Some(hint) => format!(" (did you mean `{hint}`?)"),
        None => String::new(),
    }
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::InvalidEscape { span, .. } => *span,
        }
    }

    /// Byte offset the error points at.
    pub fn position(&self) -> usize {
        self.span().start as usize
    }
}

type Chars<'a> = Peekable<CharIndices<'a>>;

/// Lex the input into tokens, ending with [`TokenKind::Eof`].
///
/// - Numbers: ASCII digits with an optional fraction (`1.5`) and exponent (`2e-3`).
/// - Strings: double-quoted, escapes `\"`, `\\`, `\n`, `\t`.
/// - Identifiers: `[A-Za-z_][A-Za-z0-9_]*`; `true` and `false` are boolean literals.
///
/// Lexing stops at the first character that starts no token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    debug!(len = input.len(), "tokenize");
    lex(input).inspect_err(|err| {
        debug!(%err, position = err.position(), "lex error");
    })
}

fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut iter = input.char_indices().peekable();

    while let Some((start, ch)) = iter.next() {
        if matches!(ch, ' ' | '\t' | '\r' | '\n') {
            continue;
        }

        // Two-char operators first
        let kind = match ch {
            '<' => {
                if eat_char(&mut iter, '=') {
                    TokenKind::Le
                } else {
                    TokenKind::Lt
                }
            }
            '>' => {
                if eat_char(&mut iter, '=') {
                    TokenKind::Ge
                } else {
                    TokenKind::Gt
                }
            }
            '=' => {
                if eat_char(&mut iter, '=') {
                    TokenKind::EqEq
                } else {
                    return Err(unexpected(start, ch, Some("==")));
                }
            }
            '!' => {
                if eat_char(&mut iter, '=') {
                    TokenKind::Ne
                } else {
                    TokenKind::Bang
                }
            }
            '&' => {
                if eat_char(&mut iter, '&') {
                    TokenKind::AndAnd
                } else {
                    return Err(unexpected(start, ch, Some("&&")));
                }
            }
            '|' => {
                if eat_char(&mut iter, '|') {
                    TokenKind::OrOr
                } else {
                    return Err(unexpected(start, ch, Some("||")));
                }
            }

            // one-char
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,

            '"' => {
                let (text, end) = lex_string(input, start, &mut iter)?;
                tokens.push(Token {
                    kind: TokenKind::Literal(Lit {
                        kind: LitKind::String,
                        symbol: Symbol { text },
                    }),
                    span: Span::new(start, end),
                });
                continue;
            }

            c if c.is_ascii_digit() => {
                let end = lex_number(start, &mut iter);
                tokens.push(Token {
                    kind: TokenKind::Literal(Lit {
                        kind: LitKind::Number,
                        symbol: Symbol::new(&input[start..end]),
                    }),
                    span: Span::new(start, end),
                });
                continue;
            }

            c if is_ident_start(c) => {
                let mut end = start + c.len_utf8();
                while let Some(&(i, c2)) = iter.peek() {
                    if !is_ident_continue(c2) {
                        break;
                    }
                    iter.next();
                    end = i + c2.len_utf8();
                }

                let ident = &input[start..end];
                let kind = match ident {
                    "true" | "false" => TokenKind::Literal(Lit {
                        kind: LitKind::Bool,
                        symbol: Symbol::new(ident),
                    }),
                    _ => TokenKind::Ident(Symbol::new(ident)),
                };

                tokens.push(Token {
                    kind,
                    span: Span::new(start, end),
                });
                continue;
            }

            _ => return Err(unexpected(start, ch, None)),
        };

        // Every remaining operator is ASCII; two-char ones consumed their second char above.
        let len = kind.spelling().map_or(1, str::len);
        tokens.push(Token {
            kind,
            span: Span::new(start, start + len),
        });
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::empty(input.len()),
    });

    trace!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

fn eat_char(iter: &mut Chars<'_>, expected: char) -> bool {
    if matches!(iter.peek(), Some(&(_, c)) if c == expected) {
        iter.next();
        true
    } else {
        false
    }
}

fn peek_digit(iter: &Chars<'_>) -> bool {
    let mut ahead = iter.clone();
    matches!(ahead.peek(), Some((_, c)) if c.is_ascii_digit())
}

fn eat_digits(iter: &mut Chars<'_>, end: &mut usize) {
    while let Some(&(i, c)) = iter.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        iter.next();
        *end = i + 1;
    }
}

/// Consumes the rest of a number whose first digit starts at `start`; returns its end.
///
/// A `.` or exponent marker only belongs to the number when digits follow it, so `1.`
/// leaves the `.` for the caller to reject.
fn lex_number(start: usize, iter: &mut Chars<'_>) -> usize {
    let mut end = start + 1;
    eat_digits(iter, &mut end);

    if matches!(iter.peek(), Some((_, '.'))) {
        let mut ahead = iter.clone();
        ahead.next();
        if peek_digit(&ahead) {
            iter.next();
            eat_digits(iter, &mut end);
        }
    }

    if matches!(iter.peek(), Some((_, 'e' | 'E'))) {
        let mut ahead = iter.clone();
        ahead.next();
        if matches!(ahead.peek(), Some((_, '+' | '-'))) {
            ahead.next();
        }
        if peek_digit(&ahead) {
            *iter = ahead;
            eat_digits(iter, &mut end);
        }
    }

    end
}

/// Reads a string literal whose opening quote is at `start`.
///
/// Returns the decoded contents and the byte offset just past the closing quote.
fn lex_string(
    input: &str,
    start: usize,
    iter: &mut Chars<'_>,
) -> Result<(String, usize), LexError> {
    let mut text = String::new();

    while let Some((i, c)) = iter.next() {
        match c {
            '"' => return Ok((text, i + 1)),
            '\\' => {
                let Some((j, escaped)) = iter.next() else {
                    break;
                };
                let decoded = match escaped {
                    '"' => '"',
                    '\\' => '\\',
                    'n' => '\n',
                    't' => '\t',
                    other => {
                        return Err(LexError::InvalidEscape {
                            ch: other,
                            span: Span::new(i, j + other.len_utf8()),
                        });
                    }
                };
                text.push(decoded);
            }
            other => text.push(other),
        }
    }

    Err(LexError::UnterminatedString {
        span: Span::new(start, input.len()),
    })
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

fn unexpected(start: usize, ch: char, hint: Option<&'static str>) -> LexError {
    LexError::UnexpectedChar {
        ch,
        span: Span::new(start, start + ch.len_utf8()),
        hint,
    }
}
