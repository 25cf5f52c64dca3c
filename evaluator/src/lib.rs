//! Formula evaluator.
//!
//! Walks an AST produced by `formula-syntax` against a caller-supplied [`Environment`]
//! and produces a [`Value`] or an [`EvalError`]. Evaluation is pure: the same tree and
//! environment always give the same result, and a tree can be shared across threads.
use formula_syntax::ast::Expr;
use tracing::debug;

mod env;
mod error;
mod eval;
mod formula;
mod tests;
mod value;

pub use env::{Environment, FnEnv};
pub use error::{EvalError, EvalErrorKind};
pub use formula::Formula;
pub use value::Value;

/// Evaluates `expr` against `env`.
///
/// `&&` and `||` short-circuit: `false && 1/0` is `false`.
pub fn evaluate<E>(expr: &Expr, env: &E) -> Result<Value, EvalError>
where
    E: Environment + ?Sized,
{
    debug!(span = ?expr.span, "evaluate");
    eval::eval_expr(expr, env).inspect_err(|err| {
        debug!(%err, kind = ?err.kind(), "evaluation failed");
    })
}
