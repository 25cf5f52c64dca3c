//! Variable bindings supplied by the caller at evaluation time.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::Value;

/// Name → value lookup. Evaluation only reads from it.
pub trait Environment {
    fn get(&self, name: &str) -> Option<Value>;
}

impl<S: BuildHasher> Environment for HashMap<String, Value, S> {
    fn get(&self, name: &str) -> Option<Value> {
        HashMap::get(self, name).cloned()
    }
}

impl Environment for BTreeMap<String, Value> {
    fn get(&self, name: &str) -> Option<Value> {
        BTreeMap::get(self, name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn get(&self, name: &str) -> Option<Value> {
        (**self).get(name)
    }
}

/// The empty environment: every lookup misses.
impl Environment for () {
    fn get(&self, _name: &str) -> Option<Value> {
        None
    }
}

/// Adapts a lookup closure, e.g. one that reads cells out of a sheet.
///
/// ```
/// use formula_evaluator::{FnEnv, Value, evaluate};
///
/// let env = FnEnv(|name: &str| name.strip_prefix('x').map(|_| Value::Number(2.0)));
/// let expr = formula_syntax::parse("x1 * x2").unwrap();
/// assert_eq!(evaluate(&expr, &env), Ok(Value::Number(4.0)));
/// ```
pub struct FnEnv<F>(pub F);

impl<F> Environment for FnEnv<F>
where
    F: Fn(&str) -> Option<Value>,
{
    fn get(&self, name: &str) -> Option<Value> {
        (self.0)(name)
    }
}
