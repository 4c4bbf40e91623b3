use algebra_engine::{factor, parse_expr, Poly, Rational};

fn poly(input: &str) -> Poly {
    let expr = parse_expr(input).expect("parse polynomial");
    Poly::from_expr(&expr, "x").expect("build polynomial")
}

fn rational_const(num: i64) -> Rational {
    Rational::from_integer(num.into())
}

fn assert_factorization(input: &str, constant: Rational, expected: &[(&str, usize)]) {
    let factorization = factor(&poly(input));
    assert_eq!(factorization.constant, constant, "leading constant for {input}");

    let actual: Vec<(Poly, usize)> = factorization
        .factors
        .iter()
        .map(|f| (f.poly.clone(), f.multiplicity))
        .collect();
    for (txt, mult) in expected {
        assert!(
            actual.contains(&(poly(txt), *mult)),
            "{input}: missing factor {txt} with multiplicity {mult}, got {actual:?}"
        );
    }
    assert_eq!(actual.len(), expected.len(), "factor count for {input}");
    assert_eq!(factorization.expand(), poly(input), "expansion of {input}");
}

#[test]
fn factor_cubic_with_three_rational_roots() {
    assert_factorization(
        "x^3 - 4*x^2 - x + 4",
        rational_const(1),
        &[("x + 1", 1), ("x - 1", 1), ("x - 4", 1)],
    );
}

#[test]
fn factor_repeated_root() {
    assert_factorization(
        "2*x^3 - 6*x + 4",
        rational_const(2),
        &[("x - 1", 2), ("x + 2", 1)],
    );
}

#[test]
fn factor_rational_root_with_denominator() {
    assert_factorization("2*x^2 - x - 1", rational_const(2), &[("x - 1", 1), ("x + 1/2", 1)]);
}

#[test]
fn factor_irreducible_quadratic() {
    assert_factorization("x^2 + 1", rational_const(1), &[("x^2 + 1", 1)]);
}

#[test]
fn factor_quartic_into_quadratics() {
    assert_factorization(
        "x^4 + 3*x^2 + 2",
        rational_const(1),
        &[("x^2 + 1", 1), ("x^2 + 2", 1)],
    );
}

#[test]
fn factored_display_orders_roots() {
    let factorization = factor(&poly("x^3 - 4*x^2 - x + 4"));
    assert_eq!(factorization.display("x"), "(x + 1)*(x - 1)*(x - 4)");
    assert_eq!(factor(&poly("-x^3 + x^2")).display("x"), "-x^2*(x - 1)");
    assert_eq!(factor(&poly("3")).display("x"), "3");
}
