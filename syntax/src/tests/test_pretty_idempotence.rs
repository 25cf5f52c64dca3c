use super::common::{parse_ok, sexpr};
use crate::ast::{BinOp, BinOpKind, Expr, ExprKind, Literal};
use crate::lexer::Span;

fn assert_pretty_idempotent(input: &str) {
    let a1 = parse_ok(input);
    let p1 = a1.pretty();
    let a2 = parse_ok(&p1);
    assert_eq!(sexpr(&a1), sexpr(&a2), "pretty changed the tree: {input} -> {p1}");
    let p2 = a2.pretty();
    assert_eq!(p1, p2, "input: {input}");
}

#[test]
fn test_pretty_idempotence_cases() {
    let cases = [
        "1+2*3",
        "(1+2)*3",
        "10-(3-2)",
        "(10-3)-2",
        "a&&b||c",
        "a&&(b||c)",
        "a==b||c==d",
        "!a&&-b",
        "-(a+b)*c",
        "a - -b",
        "!(x <= 1) != false",
        r#""quote \" and \\ slash" + "\n""#,
        "1.5e-3 % 7",
        "((((x))))",
    ];

    for input in cases {
        assert_pretty_idempotent(input);
    }
}

#[test]
fn test_pretty_drops_redundant_parens() {
    let ast = parse_ok("3*4/2 - 2 * (3 - (1)) / ((2 - 1))");
    assert_eq!(ast.pretty(), "3*4/2-2*(3-1)/(2-1)");
}

#[test]
fn test_pretty_keeps_required_parens() {
    assert_eq!(parse_ok("1 - (2 - 3)").pretty(), "1-(2-3)");
    assert_eq!(parse_ok("(1 - 2) - 3").pretty(), "1-2-3");
    assert_eq!(parse_ok("(a || b) && c").pretty(), "(a||b)&&c");
    assert_eq!(parse_ok("-(a + b)").pretty(), "-(a+b)");
    assert_eq!(parse_ok("(-a) * b").pretty(), "-a*b");
    assert_eq!(parse_ok("!(x == 1)").pretty(), "!(x==1)");
}

#[test]
fn test_pretty_literals() {
    assert_eq!(parse_ok("2.50").pretty(), "2.5");
    assert_eq!(parse_ok("1e3").pretty(), "1000");
    assert_eq!(parse_ok("true || false").pretty(), "true||false");
    assert_eq!(parse_ok(r#""a\"b""#).pretty(), r#""a\"b""#);
}

fn num(n: f64) -> Expr {
    Expr::new(Span::empty(0), ExprKind::Lit(Literal::Number(n)))
}

fn minus(left: Expr, right: Expr) -> Expr {
    Expr::new(
        Span::empty(0),
        ExprKind::Binary {
            op: BinOp {
                node: BinOpKind::Minus,
                span: Span::empty(0),
            },
            left: Box::new(left),
            right: Box::new(right),
        },
    )
}

#[test]
fn test_pretty_hand_built_negative_numbers() {
    let ast = minus(num(1.0), num(-2.0));
    assert_eq!(ast.pretty(), "1-(-2)");
    assert_eq!(sexpr(&parse_ok(&ast.pretty())), "(- 1 (- 2))");

    assert_eq!(num(-0.0).pretty(), "(-0)");
    assert_eq!(num(-1.5).pretty(), "(-1.5)");
    assert_eq!(num(f64::NAN).pretty(), "NaN");
    assert_eq!(num(f64::NEG_INFINITY).pretty(), "(-inf)");
}
