//! Expression parsing (precedence climbing).
//!
//! Spans are UTF-8 byte offsets with half-open semantics `[start, end)`.

use tracing::trace;

use super::ast::{BinOp, BinOpKind, Expr, ExprKind, Literal, UnOp};
use super::{Expected, ParseError, Parser};
use crate::lexer::{LitKind, Span, TokenKind};

impl<'a> Parser<'a> {
    /// Parser's entry point: `main := expr EndOfInput`.
    ///
    /// Supported forms:
    /// - literals: `1`, `2.5e3`, `"hello"`, `true`, `false`
    /// - identifiers: `x`, `rate_2`
    /// - grouping (parentheses): `(expr)`, which produces no node of its own
    /// - unary: [`UnOp`], binding tighter than every binary operator
    /// - binary: [`BinOpKind`], all left-associative
    ///
    /// ```text
    /// `1 + 2 * 3`  parses as `1 + (2 * 3)`
    /// `10 - 3 - 2` parses as `(10 - 3) - 2`
    /// `-2 * 3`     parses as `(-2) * 3`
    /// `(1 + 2) * 3` parses as `*` with lhs `+`
    /// ```
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;

        let tok = self.cur();
        if tok.kind != TokenKind::Eof {
            return Err(ParseError::TrailingInput {
                found: tok.kind.clone(),
                span: tok.span,
            });
        }
        Ok(expr)
    }

    /// Parses an expression.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_assoc_with(0)
    }

    /// Parses an associative expression with operators of at least `min_bp` precedence.
    fn parse_expr_assoc_with(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_expr_prefix()?;

        loop {
            let Some(op) = self.peek_binop_kind() else {
                break;
            };

            let (l_bp, r_bp) = op.infix_binding_power();
            if l_bp < min_bp {
                break;
            }

            let op_tok = self.bump(); // operator token
            let rhs = self.parse_expr_assoc_with(r_bp)?;

            let span = lhs.span.to(rhs.span);
            trace!(op = op.as_str(), ?span, "binary");
            let node = Expr::new(
                span,
                ExprKind::Binary {
                    op: BinOp {
                        node: op,
                        span: op_tok.span,
                    },
                    left: Box::new(lhs),
                    right: Box::new(rhs),
                },
            );
            lhs = self.check_height(node, op_tok.span)?;
        }

        Ok(lhs)
    }

    /// Parses `unary := ('-' | '+' | '!') unary | primary`.
    fn parse_expr_prefix(&mut self) -> Result<Expr, ParseError> {
        let op = match self.cur().kind {
            // `!expr`
            TokenKind::Bang => UnOp::Not,
            // `-expr`
            TokenKind::Minus => UnOp::Neg,
            // `+expr`
            TokenKind::Plus => UnOp::Plus,
            _ => return self.parse_expr_primary(),
        };
        self.parse_expr_unary(op)
    }

    fn parse_expr_unary(&mut self, op: UnOp) -> Result<Expr, ParseError> {
        let tok = self.bump();
        let expr = self.nested(tok.span, |p| p.parse_expr_prefix())?;
        // `-(1)`: the operand's span stops before `)`, the unary node's does not
        let node = Expr::new(
            tok.span.to(self.prev_span()),
            ExprKind::Unary {
                op,
                expr: Box::new(expr),
            },
        );
        self.check_height(node, tok.span)
    }

    fn peek_binop_kind(&self) -> Option<BinOpKind> {
        match self.cur().kind {
            TokenKind::Lt => Some(BinOpKind::Lt),
            TokenKind::Le => Some(BinOpKind::Le),
            TokenKind::EqEq => Some(BinOpKind::EqEq),
            TokenKind::Ne => Some(BinOpKind::Ne),
            TokenKind::Ge => Some(BinOpKind::Ge),
            TokenKind::Gt => Some(BinOpKind::Gt),
            TokenKind::AndAnd => Some(BinOpKind::AndAnd),
            TokenKind::OrOr => Some(BinOpKind::OrOr),
            TokenKind::Plus => Some(BinOpKind::Plus),
            TokenKind::Minus => Some(BinOpKind::Minus),
            TokenKind::Star => Some(BinOpKind::Star),
            TokenKind::Slash => Some(BinOpKind::Slash),
            TokenKind::Percent => Some(BinOpKind::Percent),
            _ => None,
        }
    }

    /// Parses a primary expression: `a`, `1`, `"hello"`, `true`, `false`, `(expr)`.
    fn parse_expr_primary(&mut self) -> Result<Expr, ParseError> {
        match self.cur().kind.clone() {
            TokenKind::Ident(_) => Ok(self.parse_ident()),

            TokenKind::Literal(lit) => match lit.kind {
                LitKind::Bool => Ok(self.parse_bool_literal()),
                LitKind::Number => self.parse_number_literal(),
                LitKind::String => Ok(self.parse_string_literal()),
            },

            TokenKind::OpenParen => self.parse_expr_parens(),

            _ => Err(self.unexpected(Expected::Expression)),
        }
    }

    fn parse_ident(&mut self) -> Expr {
        let tok = self.bump(); // identifier
        match tok.kind {
            TokenKind::Ident(sym) => Expr::new(tok.span, ExprKind::Ident(sym)),
            _ => unreachable!("parse_ident called on a non-identifier token"),
        }
    }

    fn parse_bool_literal(&mut self) -> Expr {
        let tok = self.bump(); // bool literal
        let value = self.lit_text(tok.span) == "true";
        Expr::new(tok.span, ExprKind::Lit(Literal::Bool(value)))
    }

    fn parse_number_literal(&mut self) -> Result<Expr, ParseError> {
        let tok = self.bump(); // number literal
        let text = self.lit_text(tok.span);
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                Ok(Expr::new(tok.span, ExprKind::Lit(Literal::Number(value))))
            }
            _ => Err(ParseError::NumberOutOfRange {
                text: text.to_string(),
                span: tok.span,
            }),
        }
    }

    fn parse_string_literal(&mut self) -> Expr {
        let tok = self.bump(); // string literal
        match tok.kind {
            TokenKind::Literal(lit) => {
                Expr::new(tok.span, ExprKind::Lit(Literal::String(lit.symbol.text)))
            }
            _ => unreachable!("parse_string_literal called on a non-literal token"),
        }
    }

    /// Parses `'(' expr ')'`. The inner expression is returned as-is; the parentheses only
    /// reset precedence.
    fn parse_expr_parens(&mut self) -> Result<Expr, ParseError> {
        let lparen = self.bump(); // '('
        let inner = self.nested(lparen.span, |p| p.parse_expr_assoc_with(0))?;

        let found = self.cur();
        if found.kind != TokenKind::CloseParen {
            let span = if found.kind == TokenKind::Eof {
                Span::empty(found.span.start as usize)
            } else {
                found.span
            };
            return Err(ParseError::UnclosedParen {
                found: found.kind.clone(),
                span,
                open: lparen.span,
            });
        }
        self.bump(); // ')'

        Ok(inner)
    }
}
