//! Depth-first traversal over the AST.
//!
//! [`walk`] calls [`Visitor::enter`] before a node's children and [`Visitor::exit`] after
//! them. Implementors match on [`ExprKind`] for the node kinds they care about.

use std::collections::BTreeSet;

use super::ast::{Expr, ExprKind};

pub trait Visitor<'ast> {
    fn enter(&mut self, _expr: &'ast Expr) {}

    fn exit(&mut self, _expr: &'ast Expr) {}
}

pub fn walk<'ast, V>(expr: &'ast Expr, visitor: &mut V)
where
    V: Visitor<'ast> + ?Sized,
{
    visitor.enter(expr);
    match &expr.kind {
        ExprKind::Ident(_) | ExprKind::Lit(_) => {}
        ExprKind::Unary { expr: inner, .. } => walk(inner, visitor),
        ExprKind::Binary { left, right, .. } => {
            walk(left, visitor);
            walk(right, visitor);
        }
    }
    visitor.exit(expr);
}

#[derive(Default)]
struct NameCollector<'ast> {
    names: BTreeSet<&'ast str>,
}

impl<'ast> Visitor<'ast> for NameCollector<'ast> {
    fn enter(&mut self, expr: &'ast Expr) {
        if let ExprKind::Ident(sym) = &expr.kind {
            self.names.insert(sym.as_str());
        }
    }
}

impl Expr {
    /// Distinct variable names referenced by the expression, sorted.
    pub fn referenced_names(&self) -> Vec<&str> {
        let mut collector = NameCollector::default();
        walk(self, &mut collector);
        collector.names.into_iter().collect()
    }
}
