//! Error types for formula evaluation

use formula_syntax::{Diagnostic, Span};
use thiserror::Error;

/// Coarse classification of an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalErrorKind {
    TypeMismatch,
    DivisionByZero,
    UnboundVariable,
    NumericOverflow,
}

/// Main error type for evaluation. `span` points at the offending node.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An operator was applied to operands of the wrong type
    #[error("cannot apply `{op}` to {}", describe_operands(.operands))]
    TypeMismatch {
        op: &'static str,
        /// Type names of the operands, in source order
        operands: Vec<&'static str>,
        span: Span,
    },

    #[error("division by zero")]
    DivisionByZero { span: Span },

    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String, span: Span },

    /// Arithmetic produced an infinite or NaN result
    #[error("result of `{op}` is not a finite number")]
    NumericOverflow { op: &'static str, span: Span },
}

fn describe_operands(operands: &[&'static str]) -> String {
    operands.join(" and ")
}

impl EvalError {
    pub fn kind(&self) -> EvalErrorKind {
        match self {
            EvalError::TypeMismatch { .. } => EvalErrorKind::TypeMismatch,
            EvalError::DivisionByZero { .. } => EvalErrorKind::DivisionByZero,
            EvalError::UnboundVariable { .. } => EvalErrorKind::UnboundVariable,
            EvalError::NumericOverflow { .. } => EvalErrorKind::NumericOverflow,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            EvalError::TypeMismatch { span, .. }
            | EvalError::DivisionByZero { span }
            | EvalError::UnboundVariable { span, .. }
            | EvalError::NumericOverflow { span, .. } => *span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.span(), self.to_string());
        match self {
            EvalError::UnboundVariable { name, .. } => {
                diag.with_note(format!("bind `{name}` in the environment passed to evaluate"))
            }
            _ => diag,
        }
    }
}
