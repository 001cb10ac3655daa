use exprcalc::{
    ast::{Expr, Operator},
    error::{EvalError, ParseError},
    evaluate, parse, parse_and_evaluate,
};

fn assert_evaluates(expression: &str, expected: f64) {
    match parse_and_evaluate(expression) {
        Ok(value) => assert_eq!(value, expected,
                                "{expression} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{expression} failed: {e}"),
    }
}

fn parse_error(expression: &str) -> ParseError {
    match parse(expression) {
        Ok(expr) => panic!("{expression} parsed to {expr:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn eval_error(expression: &str) -> EvalError {
    let expr = parse(expression).unwrap_or_else(|e| panic!("{expression} failed to parse: {e}"));
    match evaluate(&expr) {
        Ok(value) => panic!("{expression} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_without_parentheses() {
    assert_evaluates("1+2*3", 7.0);
    assert_evaluates("1+2+3*2", 9.0);
    assert_evaluates("6/2-1", 2.0);
    assert_evaluates("1-2+3", 2.0);
    assert_evaluates("8/4/2", 1.0);
}

#[test]
fn parenthesization_overrides_precedence() {
    assert_evaluates("(1+2)*3", 9.0);
    assert_evaluates("2*(2+3)", 10.0);
    assert_evaluates("((4))", 4.0);
}

#[test]
fn exponentiation_binds_tightest_and_groups_right() {
    assert_evaluates("2^3^2", 512.0);
    assert_evaluates("1+2*2^2", 9.0);
    assert_evaluates("2^2*3", 12.0);
    assert_evaluates("4^0.5", 2.0);
    assert_evaluates("2^-1", 0.5);
}

#[test]
fn unary_prefix_operators() {
    assert_evaluates("-3+5", 2.0);
    assert_evaluates("+0+0.5", 0.5);
    assert_evaluates("--3", 3.0);
    assert_evaluates("2*-3", -6.0);
    assert_evaluates("-2^2", 4.0);
}

#[test]
fn end_to_end_scenarios() {
    assert_evaluates("1+2", 3.0);
    assert_evaluates("1+2+3", 6.0);
    assert_evaluates("1+2^2-5*2", -5.0);
    assert_evaluates("2/2+3*(1+2*(1+2)^2-5)", 43.0);
    assert_evaluates("1.5+2", 3.5);
    assert_evaluates("0.5*2", 1.0);
    assert_evaluates("10+1254", 1264.0);
}

#[test]
fn ieee_754_specials_are_values_not_errors() {
    assert_eq!(parse_and_evaluate("1/0").unwrap(), f64::INFINITY);
    assert_eq!(parse_and_evaluate("-1/0").unwrap(), f64::NEG_INFINITY);
    assert!(parse_and_evaluate("0/0").unwrap().is_nan());
    assert_eq!(parse_and_evaluate("0^-1").unwrap(), f64::INFINITY);
}

#[test]
fn reparsing_is_idempotent() {
    let first = parse_and_evaluate("2/2+3*(1+2*(1+2)^2-5)").unwrap();
    for _ in 0..5 {
        let again = parse_and_evaluate("2/2+3*(1+2*(1+2)^2-5)").unwrap();
        assert_eq!(first.to_bits(), again.to_bits());
    }
}

#[test]
fn truncated_input_is_invalid() {
    assert_eq!(parse_error("1+"), ParseError::UnexpectedEndOfInput);
    assert_eq!(parse_error(""), ParseError::UnexpectedEndOfInput);
    assert_eq!(parse_error("2*("), ParseError::UnexpectedEndOfInput);
}

#[test]
fn unrecognized_characters_are_invalid() {
    assert!(matches!(parse_error("1 + 2"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("1+x"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("1=2"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("()"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn unmatched_parentheses_are_reported() {
    assert_eq!(parse_error("(1+2"), ParseError::ExpectedClosingParen { pos: 0 });
    assert_eq!(parse_error("2*(1+(2+3)"), ParseError::ExpectedClosingParen { pos: 2 });
}

#[test]
fn trailing_tokens_are_rejected() {
    assert!(matches!(parse_error("1+2)"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_error("(1)(2)"), ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn malformed_literals_parse_but_fail_evaluation() {
    assert!(matches!(eval_error("1..2"), EvalError::NumberFormat { .. }));
    assert!(matches!(eval_error("1.2.3+4"), EvalError::NumberFormat { .. }));

    // "1." converts cleanly, matching f64's grammar.
    assert_evaluates("1.+2", 3.0);
}

#[test]
fn non_prefix_operators_parse_but_fail_evaluation() {
    let expr = parse("*5").unwrap();
    assert!(matches!(expr, Expr::UnaryOp { op: Operator::Mul, .. }));

    assert_eq!(eval_error("*5"),
               EvalError::InvalidUnaryOperator { op:  Operator::Mul,
                                                 pos: 0, });
    assert!(matches!(eval_error("1+/2"),
                     EvalError::InvalidUnaryOperator { op: Operator::Div, .. }));
}

#[test]
fn literals_defer_conversion_to_evaluation() {
    let expr = parse("1..2").unwrap();
    assert_eq!(expr,
               Expr::Literal { text: "1..2".to_string(),
                               pos:  0, });
}

#[test]
fn climb_produces_expected_tree_shapes() {
    // 1+2*3 keeps the multiplication as the right child of the addition.
    let expr = parse("1+2*3").unwrap();
    match expr {
        Expr::BinaryOp { op: Operator::Add, right, .. } => {
            assert!(matches!(*right, Expr::BinaryOp { op: Operator::Mul, .. }));
        },
        other => panic!("unexpected tree: {other:?}"),
    }

    // 2^3^2 nests the second exponentiation on the right.
    let expr = parse("2^3^2").unwrap();
    match expr {
        Expr::BinaryOp { op: Operator::Pow, left, right, .. } => {
            assert!(matches!(*left, Expr::Literal { .. }));
            assert!(matches!(*right, Expr::BinaryOp { op: Operator::Pow, .. }));
        },
        other => panic!("unexpected tree: {other:?}"),
    }

    // 1-2+3 left-associates through the loop.
    let expr = parse("1-2+3").unwrap();
    match expr {
        Expr::BinaryOp { op: Operator::Add, left, .. } => {
            assert!(matches!(*left, Expr::BinaryOp { op: Operator::Sub, .. }));
        },
        other => panic!("unexpected tree: {other:?}"),
    }
}
