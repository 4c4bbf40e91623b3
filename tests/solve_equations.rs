use algebra_engine::{
    solve, solve_notation, solve_with, AlgebraError, ExactValue, ExclusionReason, ProblemClass,
    SolveOptions, Status,
};

fn shown(values: &[ExactValue]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn absolute_value_equation() {
    let solution = solve("abs(2*x - 3) = 5").expect("solve");
    assert_eq!(solution.class, ProblemClass::AbsoluteValueEquation);
    assert_eq!(shown(&solution.solutions), vec!["-1", "4"]);
    assert_eq!(solution.interval_notation, "{-1, 4}");
    assert!(solution.is_solved());
}

#[test]
fn implicit_products_solve_directly() {
    let solution = solve("abs(2x-3)=5").expect("solve");
    assert_eq!(solution.input, "abs(2*x - 3) = 5");
    assert_eq!(solution.class, ProblemClass::AbsoluteValueEquation);
    assert_eq!(shown(&solution.solutions), vec!["-1", "4"]);

    let decimal = solve(".5x = 1").expect("solve");
    assert_eq!(shown(&decimal.solutions), vec!["2"]);
}

#[test]
fn raw_pipe_notation_solves_the_same() {
    let from_pipes = solve_notation("|2x-3|=5").expect("solve");
    assert_eq!(from_pipes.input, "abs(2*x - 3) = 5");
    assert_eq!(shown(&from_pipes.solutions), vec!["-1", "4"]);
}

#[test]
fn negative_bound_gives_an_empty_set() {
    let solution = solve("abs(x) = -3").expect("solve");
    assert!(solution.is_solved());
    assert!(solution.solutions.is_empty());
    assert!(solution.solution_set.is_empty());
    assert_eq!(solution.interval_notation, "∅");
}

#[test]
fn several_absolute_values_split_by_sign() {
    let solution = solve("abs(x) + abs(x - 2) = 4").expect("solve");
    assert_eq!(shown(&solution.solutions), vec!["-1", "3"]);
}

#[test]
fn linear_equation() {
    let solution = solve("3*x + 1 = x - 4").expect("solve");
    assert_eq!(solution.class, ProblemClass::LinearEquation);
    assert_eq!(shown(&solution.solutions), vec!["-5/2"]);
    assert_eq!(solution.degree, Some(1));
}

#[test]
fn identities_and_contradictions() {
    let always = solve("x + 1 = 1 + x").expect("solve");
    assert!(always.solution_set.is_all());
    assert_eq!(always.interval_notation, "(-∞,∞)");

    let never = solve("x = x + 1").expect("solve");
    assert!(never.solution_set.is_empty());
}

#[test]
fn quadratic_roots_are_exact_surds() {
    let solution = solve("x^2 - 2*x - 1 = 0").expect("solve");
    assert_eq!(solution.class, ProblemClass::PolynomialEquation);
    assert_eq!(shown(&solution.solutions), vec!["1 - sqrt(2)", "1 + sqrt(2)"]);
    assert!(solution.solutions.iter().all(|v| !v.is_rational()));
    assert_eq!(solution.solutions[1].latex(), "1 + \\sqrt{2}");
}

#[test]
fn complex_roots_are_noted_not_returned() {
    let solution = solve("x^2 + x + 1 = 0").expect("solve");
    assert!(solution.solutions.is_empty());
    assert_eq!(solution.complex_roots.len(), 1);
    assert!(solution.complex_roots[0].contains("±"));
}

#[test]
fn irreducible_cubic_uses_isolated_roots() {
    let solution = solve("x^3 - 3*x + 1 = 0").expect("solve");
    let values = shown(&solution.solutions);
    assert_eq!(values.len(), 3);
    assert!(values.iter().all(|v| v.starts_with("RootOf(x^3 - 3*x + 1")));
    let approx: Vec<f64> = solution.solutions.iter().map(|v| v.approx()).collect();
    assert!((approx[0] + 1.879_385).abs() < 1e-5);
    assert!((approx[1] - 0.347_296).abs() < 1e-5);
}

#[test]
fn quadratics_with_huge_constants_stay_exact() {
    let solution = solve("x^2 = 1000000000000000000000000").expect("solve");
    assert_eq!(
        shown(&solution.solutions),
        vec!["-1000000000000", "1000000000000"]
    );
    assert_eq!(
        solution.factored.as_deref(),
        Some("(x + 1000000000000)*(x - 1000000000000)")
    );

    let irrational = solve("x^2 = 2000000000000000000000000").expect("solve");
    assert_eq!(irrational.solutions.len(), 2);
    assert!(irrational.solutions.iter().all(|v| !v.is_rational()));
    let high = irrational.solutions[1].approx();
    assert!((high / 1.414_213_562e12 - 1.0).abs() < 1e-9);
}

#[test]
fn cubic_with_huge_constant_falls_back_to_isolation() {
    let solution = solve("x^3 = 1000000000000000000000000000").expect("solve");
    assert!(solution.is_solved());
    assert_eq!(solution.solutions.len(), 1);
    let root = &solution.solutions[0];
    assert!(*root > ExactValue::integer(999_999_999));
    assert!(*root < ExactValue::integer(1_000_000_001));
    assert_eq!(solution.complex_roots.len(), 1);
}

#[test]
fn repeated_roots_report_multiplicity() {
    let solution = solve("(x - 1)^2*(x + 2) = 0").expect("solve");
    assert_eq!(shown(&solution.solutions), vec!["-2", "1"]);
    let double = &solution.critical_points[1];
    assert_eq!(double.multiplicity, 2);
    assert!(!double.sign_change);
    assert_eq!(solution.factored.as_deref(), Some("(x + 2)*(x - 1)^2"));
}

#[test]
fn rational_equation_excludes_zero_denominators() {
    let solution = solve("(x^2 - 1)/(x - 1) = 0").expect("solve");
    assert_eq!(solution.class, ProblemClass::RationalEquation);
    assert_eq!(shown(&solution.solutions), vec!["-1"]);
    assert_eq!(solution.excluded.len(), 1);
    assert_eq!(solution.excluded[0].value, ExactValue::integer(1));
    assert_eq!(solution.excluded[0].reason, ExclusionReason::ZeroDenominator);
}

#[test]
fn rational_equation_with_cleared_denominators() {
    let solution = solve("1/x + 1/(x - 2) = 0").expect("solve");
    assert_eq!(shown(&solution.solutions), vec!["1"]);
    assert!(solution.excluded.is_empty());
}

#[test]
fn radical_equation_rejects_extraneous_roots() {
    let solution = solve("(x + 7)^(1/2) = x - 5").expect("solve");
    assert_eq!(solution.class, ProblemClass::RadicalEquation);
    assert_eq!(shown(&solution.solutions), vec!["9"]);
    assert_eq!(solution.excluded.len(), 1);
    assert_eq!(solution.excluded[0].value, ExactValue::integer(2));
    assert_eq!(solution.excluded[0].reason, ExclusionReason::Extraneous);
}

#[test]
fn radical_from_raw_notation() {
    let solution = solve_notation(r"\sqrt{x+7} = x - 5").expect("solve");
    assert_eq!(shown(&solution.solutions), vec!["9"]);
}

#[test]
fn variable_is_picked_or_requested() {
    let solution = solve("2*t - 4 = 0").expect("solve");
    assert_eq!(solution.variable, "t");
    assert_eq!(shown(&solution.solutions), vec!["2"]);

    let options = SolveOptions::default().with_variable("t");
    let solution = solve_with("t^2 = 9", &options).expect("solve");
    assert_eq!(shown(&solution.solutions), vec!["-3", "3"]);
}

#[test]
fn unsupported_input_degrades_instead_of_failing() {
    let solution = solve("sin(x) = 0").expect("degraded solution");
    assert!(!solution.is_solved());
    assert!(matches!(solution.status, Status::Unsolvable { .. }));
    assert!(solution.solution_set.is_empty());

    let solution = solve("x + y = 1").expect("degraded solution");
    assert!(matches!(solution.status, Status::Unsolvable { .. }));

    let solution = solve("1/(x - x) = 1").expect("degraded solution");
    assert!(matches!(solution.status, Status::Domain { .. }));
}

#[test]
fn malformed_input_is_an_error() {
    assert!(matches!(solve("x + * 2"), Err(AlgebraError::Parse { .. })));
    assert!(matches!(
        solve_notation(r"\frac{1}"),
        Err(AlgebraError::Normalization { .. })
    ));
}

#[test]
fn solution_serializes_for_the_frontend() {
    let solution = solve("x^2 - 4 = 0").expect("solve");
    let json: serde_json::Value =
        serde_json::from_str(&solution.to_json().expect("to_json")).expect("valid json");
    assert_eq!(json["class"], "polynomial-equation");
    assert_eq!(json["solutions"][0]["exact"], "-2");
    assert_eq!(json["solutions"][1]["latex"], "2");
    assert_eq!(json["status"]["state"], "solved");
    assert_eq!(json["interval_notation"], "{-2, 2}");
    assert!(json["plot"]["xs"].as_array().is_some_and(|xs| !xs.is_empty()));
}

#[test]
fn summary_lines() {
    let lines = solve("x^2 - 4 = 0").expect("solve").summary();
    assert_eq!(lines[0], "x^2 - 4 = 0 (polynomial-equation)");
    assert!(lines.contains(&"x = -2, 2".to_string()));
}
