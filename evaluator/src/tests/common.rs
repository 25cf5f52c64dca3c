use std::collections::HashMap;

use formula_syntax::parse;
use tracing_subscriber::EnvFilter;

use crate::{Environment, EvalError, Value, evaluate};

/// Routes `tracing` output through the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn eval_in(input: &str, env: &impl Environment) -> Result<Value, EvalError> {
    init_tracing();
    let expr = parse(input).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"));
    evaluate(&expr, env)
}

pub fn eval_ok(input: &str) -> Value {
    eval_in(input, &()).unwrap_or_else(|e| panic!("failed to evaluate {input:?}: {e}"))
}

pub fn eval_err(input: &str) -> EvalError {
    match eval_in(input, &()) {
        Ok(value) => panic!("expected {input:?} to fail, got {value:?}"),
        Err(e) => e,
    }
}

pub fn num(input: &str) -> f64 {
    match eval_ok(input) {
        Value::Number(n) => n,
        other => panic!("expected a number from {input:?}, got {other:?}"),
    }
}

pub fn env_of(bindings: &[(&str, Value)]) -> HashMap<String, Value> {
    bindings
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}
