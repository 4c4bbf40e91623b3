use crate::exact::ExactValue;
use crate::expr::Relation;
use crate::options::SolveOptions;
use crate::sets::RealSet;
use crate::solution::{ExclusionReason, Solution, Status};
use crate::solver::{Outcome, ProblemClass};

use super::{interval, plot};

/// Turn a strategy outcome into the public record.
pub(crate) fn assemble(
    input: &str,
    relation: &Relation,
    variable: &str,
    class: ProblemClass,
    outcome: Outcome,
    options: &SolveOptions,
) -> Solution {
    let solutions: Vec<ExactValue> = if relation.op.is_equation() {
        outcome.set.points()
    } else {
        outcome.critical.iter().map(|c| c.value.clone()).collect()
    };
    let approx = |values: &[ExactValue]| -> Vec<f64> {
        values
            .iter()
            .map(|v| v.approx_with(options.max_refinements))
            .collect()
    };
    let critical_values: Vec<ExactValue> =
        outcome.critical.iter().map(|c| c.value.clone()).collect();
    let plot = plot::sample(
        &relation.one_sided(),
        variable,
        approx(&outcome.set.points()),
        approx(&critical_values),
        options,
    );

    Solution {
        input: input.to_string(),
        relation: relation.to_string(),
        variable: variable.to_string(),
        class,
        solutions,
        critical_points: outcome.critical,
        interval_notation: interval::notation(&outcome.set),
        interval_latex: interval::latex(&outcome.set),
        solution_set: outcome.set,
        excluded: outcome.excluded,
        sign_chart: outcome.sign_chart,
        factored: outcome.factored,
        degree: outcome.degree,
        complex_roots: outcome.complex,
        status: Status::Solved,
        plot,
    }
}

/// A well-formed record for input the solver could not finish.
pub(crate) fn assemble_degraded(
    input: &str,
    relation: &Relation,
    variable: &str,
    class: ProblemClass,
    status: Status,
    options: &SolveOptions,
) -> Solution {
    let empty = RealSet::empty();
    let plot = if variable.is_empty() {
        None
    } else {
        plot::sample(&relation.one_sided(), variable, Vec::new(), Vec::new(), options)
    };
    Solution {
        input: input.to_string(),
        relation: relation.to_string(),
        variable: variable.to_string(),
        class,
        solutions: Vec::new(),
        critical_points: Vec::new(),
        interval_notation: interval::notation(&empty),
        interval_latex: interval::latex(&empty),
        solution_set: empty,
        excluded: Vec::new(),
        sign_chart: Vec::new(),
        factored: None,
        degree: None,
        complex_roots: Vec::new(),
        status,
        plot,
    }
}

/// Render a `Solution` into human-readable lines.
pub fn solve_summary(solution: &Solution) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", solution.relation, solution.class)];
    match &solution.status {
        Status::Solved => {}
        Status::Unsolvable { reason } => {
            lines.push(format!("Unsolvable: {reason}"));
            return lines;
        }
        Status::Domain { reason } => {
            lines.push(format!("Domain error: {reason}"));
            return lines;
        }
    }

    if let Some(factored) = &solution.factored {
        lines.push(format!("Factored: {factored}"));
    }
    let var = &solution.variable;
    if solution.class.is_equation() {
        if solution.solution_set.is_empty() {
            lines.push("No real solutions".to_string());
        } else if solution.solution_set.is_finite() {
            let values: Vec<String> = solution.solutions.iter().map(|v| v.to_string()).collect();
            lines.push(format!("{var} = {}", values.join(", ")));
        } else {
            lines.push(format!("{var} ∈ {}", solution.interval_notation));
        }
    } else {
        if !solution.critical_points.is_empty() {
            let values: Vec<String> = solution
                .critical_points
                .iter()
                .map(|c| {
                    if c.multiplicity > 1 {
                        format!("{} (x{})", c.value, c.multiplicity)
                    } else {
                        c.value.to_string()
                    }
                })
                .collect();
            lines.push(format!("Critical points: {}", values.join(", ")));
        }
        lines.push(format!("{var} ∈ {}", solution.interval_notation));
    }
    for excluded in &solution.excluded {
        let why = match excluded.reason {
            ExclusionReason::ZeroDenominator => "makes a denominator zero",
            ExclusionReason::Extraneous => "extraneous",
        };
        lines.push(format!("Excluded {var} = {}: {why}", excluded.value));
    }
    for note in &solution.complex_roots {
        lines.push(format!("Complex: {note}"));
    }
    lines
}
