use algebra_engine::{parse_expr, real_roots, ExactValue, Poly, Rational};

fn poly(input: &str) -> Poly {
    let expr = parse_expr(input).expect("parse polynomial");
    Poly::from_expr(&expr, "x").expect("build polynomial")
}

fn shown(values: &[ExactValue]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn rational_roots_are_sorted_with_multiplicity() {
    let result = real_roots(&poly("(x - 3)*(x + 1)^2"), "x");
    assert_eq!(shown(&result.values()), vec!["-1", "3"]);
    assert_eq!(result.roots[0].multiplicity, 2);
    assert_eq!(result.roots[1].multiplicity, 1);
}

#[test]
fn quadratic_roots_stay_exact() {
    let result = real_roots(&poly("x^2 - 2*x - 1"), "x");
    assert_eq!(shown(&result.values()), vec!["1 - sqrt(2)", "1 + sqrt(2)"]);
    assert!(result.values().iter().all(|v| !v.is_rational()));

    let result = real_roots(&poly("x^2 - 3*x + 1"), "x");
    assert_eq!(shown(&result.values()), vec!["(3 - sqrt(5))/2", "(3 + sqrt(5))/2"]);
}

#[test]
fn surd_roots_satisfy_the_polynomial() {
    let p = poly("2*x^2 - 6");
    for value in real_roots(&p, "x").values() {
        assert!(value.is_root_of(&p), "{value} is not a root");
    }
}

#[test]
fn irreducible_cubic_roots_are_isolated() {
    let result = real_roots(&poly("x^3 - 3*x + 1"), "x");
    let values = result.values();
    assert_eq!(values.len(), 3);
    assert_eq!(shown(&values)[0], "RootOf(x^3 - 3*x + 1, 1)");
    assert!(values.windows(2).all(|w| w[0] < w[1]));
    assert!((values[2].approx() - 1.879_385_242).abs() < 1e-6);
    assert!(result.complex.is_empty());
}

#[test]
fn non_real_roots_are_noted() {
    let result = real_roots(&poly("x^3 - 2"), "x");
    assert_eq!(result.values().len(), 1);
    assert_eq!(result.complex, vec!["x^3 - 2 = 0 has 2 non-real roots".to_string()]);

    let result = real_roots(&poly("x^2 + 4"), "y");
    assert!(result.roots.is_empty());
    assert_eq!(result.complex, vec!["y^2 + 4 = 0: ±2*i".to_string()]);
}

#[test]
fn algebraic_and_surd_values_compare_exactly() {
    let int = |n: i64| Rational::from_integer(n.into());
    let sqrt2 = ExactValue::surd(int(0), int(1), &int(2));
    let cube_root2 = real_roots(&poly("x^3 - 2"), "x").values().remove(0);
    assert!(cube_root2 < sqrt2);
    assert_ne!(cube_root2, ExactValue::fraction(5, 4));
    assert!(ExactValue::fraction(141, 100) < sqrt2);
    assert!(sqrt2 < ExactValue::fraction(142, 100));
}
