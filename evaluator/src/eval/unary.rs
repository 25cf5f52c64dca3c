//! Unary operation evaluation

use formula_syntax::ast::{Expr, UnOp};

use super::{eval_expr, type_mismatch};
use crate::{Environment, EvalError, Value};

/// `-` and `+` take a number, `!` takes a boolean.
pub(super) fn eval_unary<E>(
    op: UnOp,
    operand: &Expr,
    node: &Expr,
    env: &E,
) -> Result<Value, EvalError>
where
    E: Environment + ?Sized,
{
    let value = eval_expr(operand, env)?;

    match (op, &value) {
        (UnOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnOp::Plus, Value::Number(n)) => Ok(Value::Number(*n)),
        (UnOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        _ => Err(type_mismatch(op.as_str(), &[&value], node.span)),
    }
}
