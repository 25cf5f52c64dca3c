use crate::lexer::{Span, Spanned, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `==`
    EqEq,
    /// `!=`
    Ne,
    /// `>=`
    Ge,
    /// `>`
    Gt,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
}

impl BinOpKind {
    pub fn as_str(&self) -> &'static str {
        use BinOpKind::*;
        match self {
            Lt => "<",
            Le => "<=",
            EqEq => "==",
            Ne => "!=",
            Ge => ">=",
            Gt => ">",
            AndAnd => "&&",
            OrOr => "||",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Percent => "%",
        }
    }

    /// Returns the binding power `(left_bp, right_bp)` for an infix operator.
    ///
    /// Larger numbers bind tighter. Every operator is left-associative, so
    /// `right_bp = left_bp + 1` and `a - b - c` parses as `(a - b) - c`.
    ///
    /// Tiers, loosest first: `||`, `&&`, `== !=`, `< <= >= >`, `+ -`, `* / %`.
    pub fn infix_binding_power(&self) -> (u8, u8) {
        use BinOpKind::*;

        match self {
            OrOr => (1, 2),
            AndAnd => (3, 4),

            EqEq | Ne => (5, 6),
            Lt | Le | Ge | Gt => (7, 8),

            Plus | Minus => (9, 10),
            Star | Slash | Percent => (11, 12),
        }
    }
}

impl std::fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type BinOp = Spanned<BinOpKind>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    /// `!`
    Not,
    /// `-`
    Neg,
    /// `+`
    Plus,
}

/// Binding power of every prefix operator: tighter than any infix operator, so
/// `-a * b` is `(-a) * b`.
pub const PREFIX_BINDING_POWER: u8 = 13;

impl UnOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnOp::Not => "!",
            UnOp::Neg => "-",
            UnOp::Plus => "+",
        }
    }
}

impl std::fmt::Display for UnOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A constant parsed out of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
    Bool(bool),
}

/// An expression node. Parenthesized groups are not represented: `(a + b)` parses to
/// the `a + b` node itself, and its span excludes the parentheses. A prefix operator's
/// span runs to the end of its operand's source text, so `-(1)` covers the `)` too.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub span: Span,
    pub kind: ExprKind,
    height: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Ident(Symbol),
    Lit(Literal),
    Unary {
        op: UnOp,
        expr: Box<Expr>,
    },
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn new(span: Span, kind: ExprKind) -> Self {
        let height = match &kind {
            ExprKind::Ident(_) | ExprKind::Lit(_) => 1,
            ExprKind::Unary { expr, .. } => expr.height + 1,
            ExprKind::Binary { left, right, .. } => left.height.max(right.height) + 1,
        };
        Expr { span, kind, height }
    }

    /// Number of nodes on the longest root-to-leaf path; a leaf has height 1.
    ///
    /// Parsed trees never exceed [`MAX_TREE_HEIGHT`](crate::MAX_TREE_HEIGHT), which keeps
    /// every recursive pass over them within a default thread stack.
    pub fn height(&self) -> usize {
        self.height
    }
}
