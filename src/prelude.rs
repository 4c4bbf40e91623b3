//! String-based convenience API: raw notation in, results out.

use crate::error::Result;
use crate::expr::{Expr, Relation};
use crate::normalize::normalize;
use crate::options::SolveOptions;
use crate::parser::{parse_expr, parse_relation};
use crate::solution::Solution;
use crate::solver::solve_with;

pub use crate::format::{pretty, solve_summary};

/// Normalize raw notation and solve it with default options.
pub fn solve_notation(raw: &str) -> Result<Solution> {
    solve_notation_with(raw, &SolveOptions::default())
}

pub fn solve_notation_with(raw: &str, options: &SolveOptions) -> Result<Solution> {
    solve_with(raw, options)
}

/// Human-readable lines for raw notation.
pub fn summary(raw: &str) -> Result<Vec<String>> {
    Ok(solve_summary(&solve_notation(raw)?))
}

pub fn parse(raw: &str) -> Result<Expr> {
    parse_expr(&normalize(raw)?)
}

pub fn parse_statement(raw: &str) -> Result<Relation> {
    parse_relation(&normalize(raw)?)
}
