use formula_syntax::parse;
use insta::assert_snapshot;

fn canonical(source: &str) -> String {
    parse(source)
        .unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"))
        .pretty()
}

#[test]
fn spreadsheet_style_formulas() {
    assert_snapshot!(canonical("3*4/2 - 2 * (3 - (1)) / ((2 - 1))"), @"3*4/2-2*(3-1)/(2-1)");
    assert_snapshot!(canonical("  (A1 + B2) * (C3 - 1) "), @"(A1+B2)*(C3-1)");
    assert_snapshot!(canonical("+(1)"), @"+1");
}

#[test]
fn boolean_formulas() {
    assert_snapshot!(canonical("(a > 1) && (b <= 2 || !c)"), @"a>1&&(b<=2||!c)");
    assert_snapshot!(canonical(r#"name == "x" != flag"#), @r#"name=="x"!=flag"#);
}
