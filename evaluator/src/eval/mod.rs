//! Tree-walking evaluation.
//!
//! One rule per node kind; the only state is the call stack.

use formula_syntax::Span;
use formula_syntax::ast::{Expr, ExprKind};

use crate::{Environment, EvalError, Value};

mod binary;
mod unary;

/// Evaluates `expr` against `env`. The environment is only read.
pub(crate) fn eval_expr<E>(expr: &Expr, env: &E) -> Result<Value, EvalError>
where
    E: Environment + ?Sized,
{
    match &expr.kind {
        ExprKind::Lit(lit) => Ok(Value::from(lit)),
        ExprKind::Ident(sym) => env
            .get(sym.as_str())
            .ok_or_else(|| EvalError::UnboundVariable {
                name: sym.text.clone(),
                span: expr.span,
            }),
        ExprKind::Unary { op, expr: operand } => unary::eval_unary(*op, operand, expr, env),
        ExprKind::Binary { op, left, right } => {
            binary::eval_binary(op.node, left, right, expr, env)
        }
    }
}

fn type_mismatch(op: &'static str, operands: &[&Value], span: Span) -> EvalError {
    EvalError::TypeMismatch {
        op,
        operands: operands.iter().map(|v| v.type_name()).collect(),
        span,
    }
}
