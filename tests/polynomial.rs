use algebra_engine::{parse_expr, Poly, Rational};
use std::cmp::Ordering;

fn poly(input: &str) -> Poly {
    let expr = parse_expr(input).expect("parse polynomial");
    Poly::from_expr(&expr, "x").expect("build polynomial")
}

fn r(num: i64, den: i64) -> Rational {
    Rational::new(num.into(), den.into())
}

#[test]
fn polynomial_division_exact() {
    let (quotient, remainder) = poly("x^3 - 1").div_rem(&poly("x - 1"));
    assert!(remainder.is_zero());
    assert_eq!(quotient, poly("x^2 + x + 1"));
}

#[test]
fn polynomial_division_remainder() {
    let (quotient, remainder) = poly("x^3 + x + 1").div_rem(&poly("x^2 + 1"));
    assert_eq!(quotient, poly("x"));
    assert_eq!(remainder, poly("1"));
}

#[test]
fn polynomial_division_non_exact() {
    assert!(poly("x^2 + 1").div_exact(&poly("x + 1")).is_none());
}

#[test]
fn polynomial_gcd_is_monic() {
    assert_eq!(Poly::gcd(&poly("x^2 - 1"), &poly("x^2 - x")), poly("x - 1"));
    assert_eq!(Poly::gcd(&poly("2*x^2 + 2*x"), &poly("4*x")), poly("x"));
}

#[test]
fn from_expr_expands_products_and_powers() {
    assert_eq!(poly("(x + 1)^2 - (x - 1)^2"), poly("4*x"));
    assert_eq!(poly("(x^2 - 1)/2"), Poly::from_coeffs([r(-1, 2), r(0, 1), r(1, 2)]));
    assert!(Poly::from_expr(&parse_expr("1/x").expect("parse"), "x").is_none());
    assert!(Poly::from_expr(&parse_expr("x^(1/2)").expect("parse"), "x").is_none());
}

#[test]
fn evaluation_and_sign() {
    let p = poly("x^3 - 4*x^2 - x + 4");
    assert_eq!(p.evaluate(&r(4, 1)), r(0, 1));
    assert_eq!(p.sign_at(&r(0, 1)), Ordering::Greater);
    assert_eq!(p.sign_at(&r(2, 1)), Ordering::Less);
    assert_eq!(p.evaluate(&r(1, 2)), r(21, 8));
}

#[test]
fn square_free_decomposition_tracks_multiplicity() {
    let parts = poly("(x - 1)^2*(x + 2)").square_free_decomposition();
    assert!(parts.contains(&(poly("x + 2"), 1)));
    assert!(parts.contains(&(poly("x - 1"), 2)));
}

#[test]
fn sturm_counts_real_roots() {
    assert_eq!(poly("x^3 - 3*x + 1").count_real_roots(), 3);
    assert_eq!(poly("x^2 + 1").count_real_roots(), 0);
    assert_eq!(poly("x^4 - 5*x^2 + 4").count_roots_in(&r(0, 1), &r(3, 1)), 2);
}

#[test]
fn display_uses_the_variable() {
    assert_eq!(poly("x^3 - 2*x - 5").display("t"), "t^3 - 2*t - 5");
    assert_eq!(poly("1/2 - x").display("x"), "-x + 1/2");
}
