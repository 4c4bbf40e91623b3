use algebra_engine::{
    solve, solve_notation, ExactValue, PointKind, ProblemClass, Sign, SolveOptions, Status,
};

fn shown(values: &[ExactValue]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn quadratic_inequality() {
    let solution = solve("x^2 - 4 >= 0").expect("solve");
    assert_eq!(solution.class, ProblemClass::PolynomialInequality);
    assert_eq!(shown(&solution.critical_values()), vec!["-2", "2"]);
    assert_eq!(solution.interval_notation, "(-∞,-2] ∪ [2,∞)");
    assert_eq!(solution.interval_latex, "(-\\infty,-2] \\cup [2,\\infty)");
}

#[test]
fn cubic_inequality_with_sign_chart() {
    let solution = solve("x^3 - 4*x^2 - x + 4 >= 0").expect("solve");
    assert_eq!(shown(&solution.critical_values()), vec!["-1", "1", "4"]);
    assert_eq!(solution.interval_notation, "[-1,1] ∪ [4,∞)");
    assert_eq!(solution.factored.as_deref(), Some("(x + 1)*(x - 1)*(x - 4)"));

    let signs: Vec<Sign> = solution.sign_chart.iter().map(|row| row.sign).collect();
    assert_eq!(
        signs,
        vec![Sign::Negative, Sign::Positive, Sign::Negative, Sign::Positive]
    );
    assert_eq!(solution.sign_chart[0].interval, "(-∞,-1)");
    assert!(!solution.sign_chart[0].satisfies);
}

#[test]
fn raw_notation_solves_directly() {
    let cubic = solve("x^3-4x^2-x+4>=0").expect("solve");
    assert_eq!(cubic.input, "x^3 - 4*x^2 - x + 4 >= 0");
    assert_eq!(shown(&cubic.critical_values()), vec!["-1", "1", "4"]);
    assert_eq!(cubic.interval_notation, "[-1,1] ∪ [4,∞)");

    let quadratic = solve("x^2-4>=0").expect("solve");
    assert_eq!(quadratic.interval_notation, "(-∞,-2] ∪ [2,∞)");

    let from_lvert = solve("lvert x^2-9 rvert < 4").expect("solve");
    let from_pipes = solve("| x^2-9 | < 4").expect("solve");
    assert_eq!(from_lvert.solution_set, from_pipes.solution_set);
}

#[test]
fn strict_inequality_leaves_endpoints_out() {
    let solution = solve("x^2 - 4 < 0").expect("solve");
    assert_eq!(solution.interval_notation, "(-2,2)");
}

#[test]
fn even_multiplicity_keeps_the_sign() {
    let solution = solve("(x - 1)^2*(x + 2) > 0").expect("solve");
    assert_eq!(solution.interval_notation, "(-2,1) ∪ (1,∞)");

    let touching = solve("(x - 1)^2 <= 0").expect("solve");
    assert_eq!(touching.interval_notation, "{1}");
}

#[test]
fn surd_endpoints() {
    let solution = solve("x^2 - 2 > 0").expect("solve");
    assert_eq!(solution.interval_notation, "(-∞,-sqrt(2)) ∪ (sqrt(2),∞)");
}

#[test]
fn linear_inequality_flips_on_negative_coefficient() {
    let solution = solve("-3*x + 6 >= 0").expect("solve");
    assert_eq!(solution.class, ProblemClass::LinearInequality);
    assert_eq!(solution.interval_notation, "(-∞,2]");

    let solution = solve("2*x + 1 < 0").expect("solve");
    assert_eq!(solution.interval_notation, "(-∞,-1/2)");
}

#[test]
fn rational_inequality_keeps_poles_open() {
    let solution = solve("(x + 1)/(x - 2) <= 0").expect("solve");
    assert_eq!(solution.class, ProblemClass::RationalInequality);
    assert_eq!(solution.interval_notation, "[-1,2)");
    let pole = &solution.critical_points[1];
    assert_eq!(pole.value, ExactValue::integer(2));
    assert_eq!(pole.kind, PointKind::Undefined);
}

#[test]
fn cancelled_factor_leaves_a_hole() {
    let solution = solve("(x^2 - 1)/(x - 1) > 0").expect("solve");
    assert_eq!(solution.interval_notation, "(-1,1) ∪ (1,∞)");
}

#[test]
fn absolute_value_inequalities() {
    let solution = solve("abs(x - 1) > 2").expect("solve");
    assert_eq!(solution.class, ProblemClass::AbsoluteValueInequality);
    assert_eq!(solution.interval_notation, "(-∞,-1) ∪ (3,∞)");
    assert_eq!(shown(&solution.critical_values()), vec!["-1", "3"]);

    let solution = solve("abs(2*x) <= 4").expect("solve");
    assert_eq!(solution.interval_notation, "[-2,2]");
}

#[test]
fn absolute_value_against_non_positive_bounds() {
    assert!(solve("abs(x) < -1").expect("solve").solution_set.is_empty());
    assert!(solve("abs(x) < 0").expect("solve").solution_set.is_empty());
    assert!(solve("abs(x) >= -1").expect("solve").solution_set.is_all());
    assert_eq!(solve("abs(x) > 0").expect("solve").interval_notation, "(-∞,0) ∪ (0,∞)");
    assert_eq!(solve("abs(1/x) >= 0").expect("solve").interval_notation, "(-∞,0) ∪ (0,∞)");
}

#[test]
fn lvert_and_pipe_spellings_solve_identically() {
    let from_lvert = solve_notation("lvert x^2-9 rvert < 4").expect("solve");
    let from_pipes = solve_notation("| x^2-9 | < 4").expect("solve");
    assert_eq!(from_lvert.input, from_pipes.input);
    assert_eq!(from_lvert.solution_set, from_pipes.solution_set);
    assert_eq!(
        from_lvert.interval_notation,
        "(-sqrt(13),-sqrt(5)) ∪ (sqrt(5),sqrt(13))"
    );
    assert_eq!(
        shown(&from_pipes.critical_values()),
        vec!["-sqrt(13)", "-sqrt(5)", "sqrt(5)", "sqrt(13)"]
    );
}

#[test]
fn sums_of_absolute_values() {
    let solution = solve("abs(x) + abs(x - 2) < 4").expect("solve");
    assert_eq!(solution.interval_notation, "(-1,3)");
}

#[test]
fn branch_limit_is_configurable() {
    let options = SolveOptions::default().with_max_abs_branches(1);
    let solution =
        algebra_engine::solve_with("abs(x) + abs(x - 2) < 4", &options).expect("solve");
    assert!(matches!(solution.status, Status::Unsolvable { .. }));
}

#[test]
fn radical_inequalities_are_unsolvable() {
    let solution = solve("(x + 1)^(1/2) > 2").expect("degraded solution");
    assert!(matches!(solution.status, Status::Unsolvable { .. }));
}

#[test]
fn plot_marks_critical_points() {
    let options = SolveOptions::default().with_plot_samples(11);
    let solution = algebra_engine::solve_with("x^2 - 4 >= 0", &options).expect("solve");
    let plot = solution.plot.expect("plot");
    assert_eq!(plot.xs.len(), 11);
    assert_eq!(plot.critical_markers, vec![-2.0, 2.0]);
    assert!(plot.solution_markers.is_empty());
}
