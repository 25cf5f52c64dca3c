use std::fmt::Write;

use super::ast::{Expr, ExprKind, Literal, PREFIX_BINDING_POWER};

impl Expr {
    /// Renders the canonical text of the expression.
    ///
    /// No whitespace is emitted and only the parentheses needed to keep the tree shape
    /// survive, so `3*4/2 - 2 * (3 - (1)) / ((2 - 1))` renders as `3*4/2-2*(3-1)/(2-1)`.
    /// For trees produced by the parser, parsing the result yields an equal tree.
    ///
    /// Hand-built trees may hold numbers no literal can spell. A negative number renders
    /// parenthesized (`(-2)`) and reparses as a negation with the same value; NaN and
    /// infinities render as `NaN`, `inf` or `(-inf)` and do not reparse.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.pretty_with_prec(&mut out, 0);
        out
    }

    fn pretty_with_prec(&self, out: &mut String, parent_prec: u8) {
        match &self.kind {
            ExprKind::Ident(sym) => out.push_str(&sym.text),
            ExprKind::Lit(lit) => write_literal(out, lit),
            ExprKind::Unary { op, expr } => {
                out.push_str(op.as_str());
                expr.pretty_with_prec(out, PREFIX_BINDING_POWER);
            }
            ExprKind::Binary { op, left, right } => {
                let (l_bp, r_bp) = op.node.infix_binding_power();
                let parens = l_bp < parent_prec;

                if parens {
                    out.push('(');
                }
                left.pretty_with_prec(out, l_bp);
                out.push_str(op.node.as_str());
                right.pretty_with_prec(out, r_bp);
                if parens {
                    out.push(')');
                }
            }
        }
    }
}

fn write_literal(out: &mut String, lit: &Literal) {
    match lit {
        Literal::Number(n) if n.is_sign_negative() && !n.is_nan() => {
            let _ = write!(out, "({n})");
        }
        Literal::Number(n) => {
            let _ = write!(out, "{n}");
        }
        Literal::Bool(b) => {
            let _ = write!(out, "{b}");
        }
        Literal::String(text) => escape_string_for_pretty(out, text),
    }
}

fn escape_string_for_pretty(out: &mut String, text: &str) {
    out.reserve(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}
