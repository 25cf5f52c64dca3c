use std::fmt;
use std::str::FromStr;

use formula_syntax::SyntaxError;
use formula_syntax::ast::Expr;

use crate::{Environment, EvalError, Value, evaluate};

/// A parsed formula: the tree plus what callers usually ask of it.
///
/// Parsing happens once; [`Formula::evaluate`] can then run any number of times, from any
/// number of threads, against different environments.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    expr: Expr,
    referenced: Vec<String>,
}

impl Formula {
    pub fn parse(source: &str) -> Result<Self, SyntaxError> {
        let expr = formula_syntax::parse(source)?;
        Ok(Self::from_expr(expr))
    }

    pub fn from_expr(expr: Expr) -> Self {
        let referenced = expr
            .referenced_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        Formula { expr, referenced }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Canonical text of the formula, see [`Expr::pretty`].
    pub fn expression(&self) -> String {
        self.expr.pretty()
    }

    /// Distinct variable names the formula reads, sorted.
    pub fn referenced_names(&self) -> &[String] {
        &self.referenced
    }

    pub fn evaluate<E>(&self, env: &E) -> Result<Value, EvalError>
    where
        E: Environment + ?Sized,
    {
        evaluate(&self.expr, env)
    }
}

impl FromStr for Formula {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression())
    }
}
