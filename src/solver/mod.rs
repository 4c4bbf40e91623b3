//! Classify a parsed relation and solve it exactly over the reals.

mod absolute;
pub mod classify;
mod linear;
mod polynomial;
mod radical;
pub mod rational;

use tracing::{debug, trace, warn};

use crate::error::{AlgebraError, Result};
use crate::expr::{Expr, RelOp, Relation};
use crate::format;
use crate::normalize::normalize;
use crate::options::SolveOptions;
use crate::parser::parse_relation;
use crate::sets::RealSet;
use crate::solution::{CriticalPoint, Excluded, SignRow, Solution, Status};

pub use classify::{classify, Problem, ProblemClass};
pub use rational::RationalFunction;

const DEFAULT_VARIABLE: &str = "x";

/// What one strategy found for `expr op 0`.
#[derive(Clone, Debug, Default)]
pub(crate) struct Outcome {
    pub set: RealSet,
    pub critical: Vec<CriticalPoint>,
    pub excluded: Vec<Excluded>,
    pub sign_chart: Vec<SignRow>,
    pub factored: Option<String>,
    pub degree: Option<usize>,
    pub complex: Vec<String>,
}

/// Solver state shared by nested sub-problems.
pub(crate) struct Context<'a> {
    pub var: String,
    pub options: &'a SolveOptions,
}

impl<'a> Context<'a> {
    pub fn new(var: impl Into<String>, options: &'a SolveOptions) -> Self {
        Context {
            var: var.into(),
            options,
        }
    }

    /// Solve `expr op 0` with whatever strategy its class calls for.
    pub fn solve_expr(&self, expr: &Expr, op: RelOp) -> Result<Outcome> {
        let problem = classify(expr, op, &self.var)?;
        trace!(class = %problem.class(op), "sub-problem");
        self.dispatch(problem, op)
    }

    /// Only the solution set of `expr op 0`.
    pub fn solve_set(&self, expr: &Expr, op: RelOp) -> Result<RealSet> {
        Ok(self.solve_expr(expr, op)?.set)
    }

    fn dispatch(&self, problem: Problem, op: RelOp) -> Result<Outcome> {
        match problem {
            Problem::Linear(poly) => linear::solve(self, &poly, op),
            Problem::Polynomial(poly) => polynomial::solve(self, &poly, op),
            Problem::Rational(function) => polynomial::solve_rational(self, &function, op),
            Problem::AbsoluteValue(expr) => absolute::solve(self, &expr, op),
            Problem::Radical(expr) => radical::solve(self, &expr, op),
        }
    }
}

/// Solve a statement with default options.
pub fn solve(input: &str) -> Result<Solution> {
    solve_with(input, &SolveOptions::default())
}

/// Input may be raw notation; it is normalized first, which leaves
/// already normalized text unchanged.
pub fn solve_with(raw: &str, options: &SolveOptions) -> Result<Solution> {
    let normalized = normalize(raw)?;
    let input = normalized.as_str();
    let relation = parse_relation(input)?;
    debug!(%relation, "parsed");

    let variable = match select_variable(&relation, options) {
        Ok(var) => var,
        Err(err) => {
            warn!(%err, "no variable to solve for");
            let var = options.variable.clone().unwrap_or_default();
            return degraded(input, &relation, var, ProblemClass::Unsolvable, err, options);
        }
    };

    let expr = relation.one_sided();
    let ctx = Context::new(variable.clone(), options);
    let problem = match classify(&expr, relation.op, &variable) {
        Ok(problem) => problem,
        Err(err) => {
            warn!(%err, "classification failed");
            return degraded(input, &relation, variable, ProblemClass::Unsolvable, err, options);
        }
    };
    let class = problem.class(relation.op);
    debug!(%class, variable = %variable, "classified");

    match ctx.dispatch(problem, relation.op) {
        Ok(outcome) => {
            debug!(set = %outcome.set, "solved");
            Ok(format::solve::assemble(
                input, &relation, &variable, class, outcome, options,
            ))
        }
        Err(err) => {
            warn!(%err, %class, "strategy gave up");
            degraded(input, &relation, variable, class, err, options)
        }
    }
}

fn degraded(
    input: &str,
    relation: &Relation,
    variable: String,
    class: ProblemClass,
    err: AlgebraError,
    options: &SolveOptions,
) -> Result<Solution> {
    let status = match err {
        AlgebraError::Domain(reason) => Status::Domain { reason },
        AlgebraError::Unsolvable(reason) => Status::Unsolvable { reason },
        other => return Err(other),
    };
    Ok(format::solve::assemble_degraded(
        input, relation, &variable, class, status, options,
    ))
}

/// The requested variable, the single free one, or `x` among several.
fn select_variable(relation: &Relation, options: &SolveOptions) -> Result<String> {
    let vars = relation.variables();
    if let Some(requested) = &options.variable {
        if vars.is_empty() || vars.contains(requested) {
            return Ok(requested.clone());
        }
        return Err(AlgebraError::unsolvable(format!(
            "variable `{requested}` does not appear"
        )));
    }
    if vars.len() <= 1 {
        return Ok(vars
            .into_iter()
            .next()
            .unwrap_or_else(|| DEFAULT_VARIABLE.to_string()));
    }
    if vars.contains(DEFAULT_VARIABLE) {
        return Ok(DEFAULT_VARIABLE.to_string());
    }
    Err(AlgebraError::unsolvable(format!(
        "several variables: {}",
        vars.into_iter().collect::<Vec<_>>().join(", ")
    )))
}
