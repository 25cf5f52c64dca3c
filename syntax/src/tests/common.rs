use tracing_subscriber::EnvFilter;

use crate::ast::{Expr, ExprKind, Literal};
use crate::{SyntaxError, parse};

/// Routes `tracing` output through the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn parse_ok(input: &str) -> Expr {
    init_tracing();
    parse(input).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
}

pub fn parse_err(input: &str) -> SyntaxError {
    init_tracing();
    match parse(input) {
        Ok(expr) => panic!("expected {input:?} to fail, got {expr:?}"),
        Err(e) => e,
    }
}

/// S-expression rendering of the tree shape, ignoring spans.
pub fn sexpr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Ident(sym) => sym.text.clone(),
        ExprKind::Lit(Literal::Number(n)) => n.to_string(),
        ExprKind::Lit(Literal::String(s)) => format!("{s:?}"),
        ExprKind::Lit(Literal::Bool(b)) => b.to_string(),
        ExprKind::Unary { op, expr } => format!("({} {})", op.as_str(), sexpr(expr)),
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", op.node.as_str(), sexpr(left), sexpr(right))
        }
    }
}

macro_rules! assert_bin {
    ($e:expr, $op:pat) => {{
        match &($e).kind {
            ExprKind::Binary { op, left, right } if matches!(op.node, $op) => {
                (left.as_ref(), right.as_ref())
            }
            other => panic!("expected Binary({}), got {:?}", stringify!($op), other),
        }
    }};
}

macro_rules! assert_unary {
    ($e:expr, $op:pat) => {{
        match &($e).kind {
            ExprKind::Unary { op, expr } if matches!(op, $op) => expr.as_ref(),
            other => panic!("expected Unary({}), got {:?}", stringify!($op), other),
        }
    }};
}

macro_rules! assert_lit_num {
    ($e:expr, $value:expr) => {{
        match &($e).kind {
            ExprKind::Lit(Literal::Number(n)) => assert_eq!(*n, $value as f64),
            other => panic!("expected Number literal, got {:?}", other),
        }
    }};
}

macro_rules! assert_ident {
    ($e:expr, $name:expr) => {{
        match &($e).kind {
            ExprKind::Ident(sym) => assert_eq!(sym.text, $name),
            other => panic!("expected Ident, got {:?}", other),
        }
    }};
}
