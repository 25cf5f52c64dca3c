//! Binary operation evaluation

use formula_syntax::Span;
use formula_syntax::ast::{BinOpKind, Expr};
use tracing::trace;

use super::{eval_expr, type_mismatch};
use crate::{Environment, EvalError, Value};

pub(super) fn eval_binary<E>(
    op: BinOpKind,
    left: &Expr,
    right: &Expr,
    node: &Expr,
    env: &E,
) -> Result<Value, EvalError>
where
    E: Environment + ?Sized,
{
    // Short-circuit evaluation for && and ||
    match op {
        BinOpKind::AndAnd => return eval_logical(op, false, left, right, env),
        BinOpKind::OrOr => return eval_logical(op, true, left, right, env),
        _ => {}
    }

    // Evaluate both operands, left first
    let l = eval_expr(left, env)?;
    let r = eval_expr(right, env)?;
    let span = node.span;

    match op {
        // Arithmetic
        BinOpKind::Plus => eval_add(l, r, span),
        BinOpKind::Minus => eval_arith(op, l, r, span, |a, b| a - b),
        BinOpKind::Star => eval_arith(op, l, r, span, |a, b| a * b),
        BinOpKind::Slash => eval_division(op, l, r, span, |a, b| a / b),
        BinOpKind::Percent => eval_division(op, l, r, span, |a, b| a % b),

        // Comparison
        BinOpKind::EqEq => eval_equality(op, &l, &r, span).map(Value::Bool),
        BinOpKind::Ne => eval_equality(op, &l, &r, span).map(|eq| Value::Bool(!eq)),
        BinOpKind::Lt | BinOpKind::Le | BinOpKind::Gt | BinOpKind::Ge => {
            eval_ordering(op, &l, &r, span)
        }

        // Logical (already handled above with short-circuit)
        BinOpKind::AndAnd | BinOpKind::OrOr => unreachable!(),
    }
}

/// `&&` and `||`: the right operand is skipped once the left equals `decisive`.
fn eval_logical<E>(
    op: BinOpKind,
    decisive: bool,
    left: &Expr,
    right: &Expr,
    env: &E,
) -> Result<Value, EvalError>
where
    E: Environment + ?Sized,
{
    let l = eval_expr(left, env)?;
    match l {
        Value::Bool(b) if b == decisive => {
            trace!(op = op.as_str(), "short-circuit");
            return Ok(Value::Bool(b));
        }
        Value::Bool(_) => {}
        other => return Err(type_mismatch(op.as_str(), &[&other], left.span)),
    }

    match eval_expr(right, env)? {
        Value::Bool(b) => Ok(Value::Bool(b)),
        other => Err(type_mismatch(op.as_str(), &[&other], right.span)),
    }
}

/// `+` adds numbers and concatenates strings.
fn eval_add(l: Value, r: Value, span: Span) -> Result<Value, EvalError> {
    match (l, r) {
        (Value::String(mut a), Value::String(b)) => {
            a.push_str(&b);
            Ok(Value::String(a))
        }
        (l, r) => eval_arith(BinOpKind::Plus, l, r, span, |a, b| a + b),
    }
}

fn eval_arith(
    op: BinOpKind,
    l: Value,
    r: Value,
    span: Span,
    f: impl FnOnce(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    let (Value::Number(a), Value::Number(b)) = (&l, &r) else {
        return Err(type_mismatch(op.as_str(), &[&l, &r], span));
    };

    let result = f(*a, *b);
    if !result.is_finite() {
        return Err(EvalError::NumericOverflow {
            op: op.as_str(),
            span,
        });
    }
    Ok(Value::Number(result))
}

fn eval_division(
    op: BinOpKind,
    l: Value,
    r: Value,
    span: Span,
    f: impl FnOnce(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    if matches!((&l, &r), (Value::Number(_), Value::Number(b)) if *b == 0.0) {
        return Err(EvalError::DivisionByZero { span });
    }
    eval_arith(op, l, r, span, f)
}

/// Values of the same type compare by value; mixed types are an error.
fn eval_equality(op: BinOpKind, l: &Value, r: &Value, span: Span) -> Result<bool, EvalError> {
    match (l, r) {
        (Value::Number(a), Value::Number(b)) => Ok(a == b),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::String(a), Value::String(b)) => Ok(a == b),
        _ => Err(type_mismatch(op.as_str(), &[l, r], span)),
    }
}

/// Numbers compare numerically, strings lexicographically.
fn eval_ordering(op: BinOpKind, l: &Value, r: &Value, span: Span) -> Result<Value, EvalError> {
    let result = match (l, r) {
        (Value::Number(a), Value::Number(b)) => compare(op, a, b),
        (Value::String(a), Value::String(b)) => compare(op, a, b),
        _ => return Err(type_mismatch(op.as_str(), &[l, r], span)),
    };
    Ok(Value::Bool(result))
}

fn compare<T: PartialOrd + ?Sized>(op: BinOpKind, a: &T, b: &T) -> bool {
    match op {
        BinOpKind::Lt => a < b,
        BinOpKind::Le => a <= b,
        BinOpKind::Gt => a > b,
        BinOpKind::Ge => a >= b,
        _ => unreachable!("compare called with non-ordering operator {op}"),
    }
}
