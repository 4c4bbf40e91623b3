use algebra_engine::{normalize, parse_expr, parse_relation, AlgebraError};
use proptest::prelude::*;

fn norm(input: &str) -> String {
    normalize(input).expect("normalize")
}

#[test]
fn fraction_of_a_root() {
    let normalized = norm(r"\frac{\sqrt{x-1}}{x+2}");
    assert_eq!(normalized, "((x - 1)^(1/2))/(x + 2)");
    assert_eq!(
        parse_expr(&normalized).expect("parse normalized"),
        parse_expr("(x-1)^(1/2)/(x+2)").expect("parse reference")
    );
}

#[test]
fn bare_macro_words_match_backslashed_ones() {
    assert_eq!(norm(r"frac{1}{x}"), norm(r"\dfrac{1}{x}"));
    assert_eq!(norm(r"sqrt{x}"), norm(r"\sqrt{x}"));
    assert_eq!(norm(r"\tfrac{1}{2}"), "1/2");
}

#[test]
fn every_absolute_value_spelling_agrees() {
    let expected = "abs(x^2 - 9) < 4";
    for input in [
        r"\lvert x^2-9 \rvert < 4",
        "lvert x^2-9 rvert < 4",
        r"\left| x^2-9 \right| < 4",
        r"\left\lvert x^2-9 \right\rvert < 4",
        r"\vert x^2-9 \vert < 4",
        r"\abs{x^2-9} < 4",
        "abs(x^2-9) < 4",
        "| x^2-9 | < 4",
    ] {
        assert_eq!(norm(input), expected, "normalizing {input}");
    }
}

#[test]
fn implicit_multiplication() {
    assert_eq!(norm("|2x-3|=5"), "abs(2*x - 3) = 5");
    assert_eq!(norm("2(x+1)(x-1)"), "2*(x + 1)*(x - 1)");
    assert_eq!(norm("xy"), "x*y");
    assert_eq!(norm(r"3\sqrt{x}"), "3*x^(1/2)");
    assert_eq!(norm("2|x|"), "2*abs(x)");
}

#[test]
fn leading_dot_decimals_and_null_delimiters() {
    assert_eq!(norm(".5x+1"), "0.5*x + 1");
    assert_eq!(norm(r"\left. 2x \right."), "2*x");
    assert_eq!(norm("0.5*x + 1"), "0.5*x + 1");
}

#[test]
fn comparison_spellings() {
    assert_eq!(norm(r"x \le 3"), "x <= 3");
    assert_eq!(norm(r"x\geq3"), "x >= 3");
    assert_eq!(norm("x ≥ 3"), "x >= 3");
    assert_eq!(norm("x==3"), "x = 3");
    assert_eq!(norm(r"x\lt 3"), "x < 3");
}

#[test]
fn operator_and_grouping_spellings() {
    assert_eq!(norm(r"2 \cdot x \div 4"), "2*x/4");
    assert_eq!(norm("2 × x ÷ 4 − 1"), "2*x/4 - 1");
    assert_eq!(norm(r"\left( x+1 \right)^2"), "(x + 1)^2");
    assert_eq!(norm("[x+1]^{2}"), "(x + 1)^2");
    assert_eq!(norm(r"x^{2}\,+\;1"), "x^2 + 1");
}

#[test]
fn functions_become_calls() {
    assert_eq!(norm(r"\ln{x}"), "log(x)");
    assert_eq!(norm(r"\sin x"), "sin(x)");
    assert_eq!(norm("2cos(x)"), "2*cos(x)");
}

#[test]
fn normalized_output_parses() {
    for input in [
        r"x^3-4x^2-x+4 \geq 0",
        r"\frac{x+1}{x-2} \le 0",
        r"\sqrt{x+7} = x - 5",
        r"\left|x\right| + |x-2| = 4",
        r"\sqrt[3]{x} = 2",
    ] {
        let normalized = norm(input);
        parse_relation(&normalized)
            .unwrap_or_else(|e| panic!("{normalized} from {input} failed: {e}"));
    }
}

#[test]
fn unpaired_pipes_are_reported() {
    match normalize("|x - 1| + |x") {
        Err(AlgebraError::Normalization { offending, position }) => {
            assert_eq!(offending, "|");
            assert_eq!(position, 10);
        }
        other => panic!("expected a normalization error, got {other:?}"),
    }
}

#[test]
fn malformed_notation_is_rejected() {
    for input in [r"\frac{1}", r"\sqrt", "(x + 1", "x + 1)", r"\lvert x", r"\unknown{x}", "x ? 2", "()"] {
        assert!(
            matches!(normalize(input), Err(AlgebraError::Normalization { .. })),
            "{input} should not normalize"
        );
    }
}

fn combine(kind: usize, a: &str, b: &str) -> String {
    match kind {
        0 => format!("{a}+{b}"),
        1 => format!("{a} - {b}"),
        2 => format!("{a}{b}"),
        _ => format!(r"\frac{{{a}}}{{{b}}}"),
    }
}

fn wrap(kind: usize, a: &str) -> String {
    match kind {
        0 => format!(r"\sqrt{{{a}}}"),
        1 => format!(r"\sqrt[3]{{{a}}}"),
        2 => format!("|{a}|"),
        3 => format!(r"\left\lvert {a} \right\rvert"),
        4 => format!("({a})"),
        5 => format!("{{{a}}}^2"),
        6 => format!("-{a}"),
        _ => format!(r"\sin{{{a}}}"),
    }
}

fn notation() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just("x".to_string()),
        Just("y".to_string()),
        (0u32..20).prop_map(|n| n.to_string()),
        Just("3.5".to_string()),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone(), 0..4usize).prop_map(|(a, b, k)| combine(k, &a, &b)),
            (inner, 0..8usize).prop_map(|(a, k)| wrap(k, &a)),
        ]
    })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(lhs in notation(), rhs in notation(), op in prop_oneof![
        Just("="), Just(r"\le"), Just(">"), Just("≥")
    ]) {
        let raw = format!("{lhs} {op} {rhs}");
        if let Ok(once) = normalize(&raw) {
            let twice = normalize(&once);
            prop_assert_eq!(twice.as_ref().ok(), Some(&once));
        }
    }

    #[test]
    fn normalized_expressions_parse(input in notation()) {
        if let Ok(normalized) = normalize(&input) {
            prop_assert!(parse_expr(&normalized).is_ok(), "{} did not parse", normalized);
        }
    }
}
