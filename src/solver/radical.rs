//! Equations with one square root: isolate it, square, then keep only the
//! candidates where the isolated side is non-negative.

use num_traits::Zero;
use tracing::debug;

use crate::error::{AlgebraError, Result};
use crate::expr::{self, Expr, Rational, RelOp};
use crate::solution::{CriticalPoint, ExclusionReason, Excluded, PointKind};
use crate::solver::classify::outer_sqrt_terms;
use crate::solver::rational::RationalFunction;
use crate::solver::{Context, Outcome};

pub(crate) fn solve(ctx: &Context<'_>, expr: &Expr, op: RelOp) -> Result<Outcome> {
    if !op.is_equation() {
        return Err(AlgebraError::unsolvable(
            "inequalities with radicals are not supported",
        ));
    }
    let terms = outer_sqrt_terms(expr, &ctx.var);
    let [radical] = terms.as_slice() else {
        return Err(AlgebraError::unsolvable(
            "more than one distinct radical",
        ));
    };
    let Expr::Pow(radicand, _) = radical else {
        return Err(AlgebraError::unsolvable("malformed radical"));
    };

    // expr = k*sqrt(g) + h, checked by substituting 0, 1 and 2 for the radical.
    let at = |n: i64| expr.replace(radical, &Expr::integer(n));
    let h = at(0);
    let k = constant_difference(&at(1), &h, &ctx.var);
    let k2 = constant_difference(&at(2), &h, &ctx.var);
    let (Some(k), Some(k2)) = (k, k2) else {
        return Err(AlgebraError::unsolvable("radical is not isolatable"));
    };
    if k.is_zero() || k2 != &k * Rational::from_integer(2.into()) {
        return Err(AlgebraError::unsolvable("radical is not isolatable"));
    }

    // sqrt(g) = -h/k
    let isolated = expr::neg(expr::div(h, Expr::Constant(k)));
    debug!(radicand = %radicand, isolated = %isolated, "squaring radical equation");

    let squared = expr::sub(
        (**radicand).clone(),
        expr::pow(isolated.clone(), Expr::integer(2)),
    );
    let candidates = ctx.solve_expr(&squared, RelOp::Eq)?;
    let admissible = ctx.solve_set(&isolated, RelOp::Ge)?;
    let set = candidates.set.intersection(&admissible);

    let mut excluded = candidates.excluded;
    for value in candidates.set.points() {
        if !set.contains(&value) {
            excluded.push(Excluded {
                value,
                reason: ExclusionReason::Extraneous,
            });
        }
    }

    let critical = set
        .points()
        .into_iter()
        .map(|value| CriticalPoint {
            value,
            multiplicity: 1,
            kind: PointKind::Zero,
            sign_change: true,
        })
        .collect();

    Ok(Outcome {
        set,
        critical,
        excluded,
        factored: candidates.factored,
        degree: candidates.degree,
        complex: candidates.complex,
        ..Outcome::default()
    })
}

/// `a - b` when the difference is free of the variable.
fn constant_difference(a: &Expr, b: &Expr, var: &str) -> Option<Rational> {
    let a = RationalFunction::from_expr(a, var).ok()?;
    let b = RationalFunction::from_expr(b, var).ok()?;
    let num = a.num * &b.den - b.num * &a.den;
    let den = a.den * b.den;
    num.div_exact(&den)
        .filter(|q| q.is_constant())
        .map(|q| q.coeff(0))
}
