use std::fmt;

use serde::Serialize;

use crate::error::{AlgebraError, Result};
use crate::expr::{Expr, RelOp};
use crate::polynomial::Poly;
use crate::solver::rational::RationalFunction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemClass {
    LinearEquation,
    LinearInequality,
    PolynomialEquation,
    PolynomialInequality,
    RationalEquation,
    RationalInequality,
    AbsoluteValueEquation,
    AbsoluteValueInequality,
    RadicalEquation,
    Unsolvable,
}

impl ProblemClass {
    pub fn name(self) -> &'static str {
        match self {
            ProblemClass::LinearEquation => "linear-equation",
            ProblemClass::LinearInequality => "linear-inequality",
            ProblemClass::PolynomialEquation => "polynomial-equation",
            ProblemClass::PolynomialInequality => "polynomial-inequality",
            ProblemClass::RationalEquation => "rational-equation",
            ProblemClass::RationalInequality => "rational-inequality",
            ProblemClass::AbsoluteValueEquation => "absolute-value-equation",
            ProblemClass::AbsoluteValueInequality => "absolute-value-inequality",
            ProblemClass::RadicalEquation => "radical-equation",
            ProblemClass::Unsolvable => "unsolvable",
        }
    }

    pub fn is_equation(self) -> bool {
        matches!(
            self,
            ProblemClass::LinearEquation
                | ProblemClass::PolynomialEquation
                | ProblemClass::RationalEquation
                | ProblemClass::AbsoluteValueEquation
                | ProblemClass::RadicalEquation
        )
    }
}

impl fmt::Display for ProblemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified `expr op 0` together with what its strategy needs.
#[derive(Clone, Debug)]
pub enum Problem {
    Linear(Poly),
    Polynomial(Poly),
    Rational(RationalFunction),
    AbsoluteValue(Expr),
    Radical(Expr),
}

impl Problem {
    pub fn class(&self, op: RelOp) -> ProblemClass {
        let eq = op.is_equation();
        match self {
            Problem::Linear(_) if eq => ProblemClass::LinearEquation,
            Problem::Linear(_) => ProblemClass::LinearInequality,
            Problem::Polynomial(_) if eq => ProblemClass::PolynomialEquation,
            Problem::Polynomial(_) => ProblemClass::PolynomialInequality,
            Problem::Rational(_) if eq => ProblemClass::RationalEquation,
            Problem::Rational(_) => ProblemClass::RationalInequality,
            Problem::AbsoluteValue(_) if eq => ProblemClass::AbsoluteValueEquation,
            Problem::AbsoluteValue(_) => ProblemClass::AbsoluteValueInequality,
            Problem::Radical(_) => ProblemClass::RadicalEquation,
        }
    }
}

/// Pick the strategy for `expr op 0`.
pub fn classify(expr: &Expr, op: RelOp, var: &str) -> Result<Problem> {
    if contains_abs_of(expr, var) {
        return Ok(Problem::AbsoluteValue(expr.clone()));
    }
    if contains_sqrt_of(expr, var) {
        if !op.is_equation() {
            return Err(AlgebraError::unsolvable(
                "inequalities with radicals are not supported",
            ));
        }
        return Ok(Problem::Radical(expr.clone()));
    }

    let function = RationalFunction::from_expr(expr, var)?;
    match function.as_polynomial() {
        Some(poly) if poly.degree().unwrap_or(0) <= 1 => Ok(Problem::Linear(poly)),
        Some(poly) => Ok(Problem::Polynomial(poly)),
        None => Ok(Problem::Rational(function)),
    }
}

pub(crate) fn contains_abs_of(expr: &Expr, var: &str) -> bool {
    match expr {
        Expr::Abs(inner) if inner.contains_var(var) => true,
        other => other.children().into_iter().any(|c| contains_abs_of(c, var)),
    }
}

pub(crate) fn contains_sqrt_of(expr: &Expr, var: &str) -> bool {
    match expr {
        Expr::Pow(base, _) if expr.is_square_root() && base.contains_var(var) => true,
        other => other.children().into_iter().any(|c| contains_sqrt_of(c, var)),
    }
}

/// Outermost absolute values containing `var`, without repeats.
pub(crate) fn outer_abs_terms(expr: &Expr, var: &str) -> Vec<Expr> {
    fn walk(expr: &Expr, var: &str, out: &mut Vec<Expr>) {
        match expr {
            Expr::Abs(inner) if inner.contains_var(var) => {
                if !out.contains(expr) {
                    out.push(expr.clone());
                }
            }
            other => {
                for child in other.children() {
                    walk(child, var, out);
                }
            }
        }
    }
    let mut out = Vec::new();
    walk(expr, var, &mut out);
    out
}

/// Outermost square roots containing `var`, without repeats.
pub(crate) fn outer_sqrt_terms(expr: &Expr, var: &str) -> Vec<Expr> {
    fn walk(expr: &Expr, var: &str, out: &mut Vec<Expr>) {
        match expr {
            Expr::Pow(base, _) if expr.is_square_root() && base.contains_var(var) => {
                if !out.contains(expr) {
                    out.push(expr.clone());
                }
            }
            other => {
                for child in other.children() {
                    walk(child, var, out);
                }
            }
        }
    }
    let mut out = Vec::new();
    walk(expr, var, &mut out);
    out
}
