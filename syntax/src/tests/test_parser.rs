use super::common::{parse_ok, sexpr};
use crate::ast::{BinOpKind, ExprKind, Literal, UnOp};
use crate::lexer::{Span, tokenize};
use crate::parse_tokens;

#[test]
fn test_precedence() {
    let ast = parse_ok("1 + 2 * 3");

    let (left, right) = assert_bin!(ast, BinOpKind::Plus);
    assert_lit_num!(left, 1);

    let (left, right) = assert_bin!(right, BinOpKind::Star);
    assert_lit_num!(left, 2);
    assert_lit_num!(right, 3);
}

#[test]
fn test_same_tier_is_left_associative() {
    let ast = parse_ok("10 - 3 - 2");

    let (left, right) = assert_bin!(ast, BinOpKind::Minus);
    assert_lit_num!(right, 2);
    let (left, right) = assert_bin!(left, BinOpKind::Minus);
    assert_lit_num!(left, 10);
    assert_lit_num!(right, 3);

    assert_eq!(sexpr(&parse_ok("8 / 4 / 2")), "(/ (/ 8 4) 2)");
    assert_eq!(sexpr(&parse_ok("1 % 2 * 3 / 4")), "(/ (* (% 1 2) 3) 4)");
    assert_eq!(sexpr(&parse_ok("a == b != c")), "(!= (== a b) c)");
    assert_eq!(sexpr(&parse_ok("a || b || c")), "(|| (|| a b) c)");
}

#[test]
fn test_unary_binds_tighter_than_binary() {
    let ast = parse_ok("-2 * 3");

    let (left, right) = assert_bin!(ast, BinOpKind::Star);
    let operand = assert_unary!(left, UnOp::Neg);
    assert_lit_num!(operand, 2);
    assert_lit_num!(right, 3);

    assert_eq!(sexpr(&parse_ok("!a == b")), "(== (! a) b)");
    assert_eq!(sexpr(&parse_ok("a - -b")), "(- a (- b))");
    assert_eq!(sexpr(&parse_ok("+x % 2")), "(% (+ x) 2)");
}

#[test]
fn test_nested_unary() {
    let ast = parse_ok("--x");
    let inner = assert_unary!(ast, UnOp::Neg);
    let inner = assert_unary!(inner, UnOp::Neg);
    assert_ident!(inner, "x");

    assert_eq!(sexpr(&parse_ok("!!true")), "(! (! true))");
}

#[test]
fn test_parens_override_precedence() {
    let ast = parse_ok("(1 + 2) * 3");

    let (left, right) = assert_bin!(ast, BinOpKind::Star);
    let (l, r) = assert_bin!(left, BinOpKind::Plus);
    assert_lit_num!(l, 1);
    assert_lit_num!(r, 2);
    assert_lit_num!(right, 3);

    assert_eq!(sexpr(&parse_ok("1 - (2 - 3)")), "(- 1 (- 2 3))");
    assert_eq!(sexpr(&parse_ok("-(1 + 2)")), "(- (+ 1 2))");
}

#[test]
fn test_parens_produce_no_node() {
    let ast = parse_ok("((x))");
    assert_ident!(ast, "x");
    assert_eq!(ast.span, Span::new(2, 3));

    let ast = parse_ok("(1 + 2) * 3");
    assert_eq!(ast.span, Span::new(1, 11));
}

#[test]
fn test_logical_and_comparison_tiers() {
    assert_eq!(sexpr(&parse_ok("a || b && c")), "(|| a (&& b c))");
    assert_eq!(sexpr(&parse_ok("a && b || c")), "(|| (&& a b) c)");
    assert_eq!(sexpr(&parse_ok("1 < 2 == true")), "(== (< 1 2) true)");
    assert_eq!(sexpr(&parse_ok("1 + 2 <= 3 * 4")), "(<= (+ 1 2) (* 3 4))");
    assert_eq!(
        sexpr(&parse_ok("x > 1 && x < 10 || y")),
        "(|| (&& (> x 1) (< x 10)) y)"
    );
}

#[test]
fn test_literals() {
    let ast = parse_ok("2.5e3");
    assert_lit_num!(ast, 2500.0);

    let ast = parse_ok(r#""hi there""#);
    assert_eq!(
        ast.kind,
        ExprKind::Lit(Literal::String("hi there".to_string()))
    );

    assert_eq!(parse_ok("true").kind, ExprKind::Lit(Literal::Bool(true)));
    assert_eq!(parse_ok("false").kind, ExprKind::Lit(Literal::Bool(false)));
}

#[test]
fn test_binary_spans() {
    let src = "a * (b + c)";
    let ast = parse_ok(src);
    assert_eq!(ast.span, Span::new(0, 10));

    let ExprKind::Binary { op, right, .. } = &ast.kind else {
        panic!("expected binary, got {:?}", ast.kind);
    };
    assert_eq!(op.span, Span::new(2, 3));
    assert_eq!(right.span.slice(src), "b + c");
}

#[test]
fn test_unary_span_covers_parenthesized_operand() {
    let src = "-(1) * 2";
    let ast = parse_ok(src);
    assert_eq!(ast.span, Span::new(0, 8));

    let ExprKind::Binary { left, .. } = &ast.kind else {
        panic!("expected binary, got {:?}", ast.kind);
    };
    assert_eq!(left.span.slice(src), "-(1)");
    let ExprKind::Unary { expr, .. } = &left.kind else {
        panic!("expected unary, got {:?}", left.kind);
    };
    assert_eq!(expr.span, Span::new(2, 3));

    let src = "!((a || b))";
    assert_eq!(parse_ok(src).span, Span::new(0, 11));
    assert_eq!(parse_ok("- x").span, Span::new(0, 3));
}

#[test]
fn test_parse_tokens_without_eof() {
    let src = "1 + x";
    let mut tokens = tokenize(src).unwrap();
    tokens.pop();

    let ast = parse_tokens(src, tokens).unwrap();
    assert_eq!(sexpr(&ast), "(+ 1 x)");
}

#[test]
fn test_parse_tokens_empty() {
    let err = parse_tokens("", vec![]).unwrap_err();
    assert_eq!(err.to_string(), "expected expression, found end of input");
}
