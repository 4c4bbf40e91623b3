//! Absolute values: the isolated form `k*abs(g) + r op 0` directly, anything
//! else by splitting on the sign of each absolute value.

use std::cmp::Ordering;

use num_traits::{Signed, Zero};
use tracing::{debug, trace};

use crate::error::{AlgebraError, Result};
use crate::exact::ExactValue;
use crate::expr::{self, Expr, Rational, RelOp};
use crate::roots::real_roots;
use crate::sets::RealSet;
use crate::solution::{CriticalPoint, Excluded, PointKind};
use crate::solver::classify::outer_abs_terms;
use crate::solver::rational::RationalFunction;
use crate::solver::{Context, Outcome};

// Cannot come out of the parser, so it never clashes with a user variable.
const PLACEHOLDER: &str = "\u{1}abs";

pub(crate) fn solve(ctx: &Context<'_>, expr: &Expr, op: RelOp) -> Result<Outcome> {
    let terms = outer_abs_terms(expr, &ctx.var);
    if let [term] = terms.as_slice() {
        if let Some((inner, op, bound)) = isolate(expr, term, op, &ctx.var) {
            trace!(%inner, %op, bound = %crate::format::show_rational(&bound), "isolated absolute value");
            return isolated(ctx, &inner, op, &bound);
        }
    }
    case_split(ctx, expr, &terms, op)
}

/// Rewrite `k*abs(g) + r op 0` as `abs(g) op' c`.
fn isolate(expr: &Expr, term: &Expr, op: RelOp, var: &str) -> Option<(Expr, RelOp, Rational)> {
    let Expr::Abs(inner) = term else {
        return None;
    };
    let replaced = expr.replace(term, &Expr::var(PLACEHOLDER));
    if replaced.contains_var(var) {
        return None;
    }
    let linear = RationalFunction::from_expr(&replaced, PLACEHOLDER)
        .ok()?
        .as_polynomial()?;
    if linear.degree()? != 1 {
        return None;
    }
    let k = linear.coeff(1);
    let r = linear.coeff(0);
    let op = if k.is_negative() { op.flipped() } else { op };
    Some(((**inner).clone(), op, -r / k))
}

/// Tracks everything the sub-problems report besides their sets.
struct Collected<'c, 'a> {
    ctx: &'c Context<'a>,
    excluded: Vec<Excluded>,
}

impl<'c, 'a> Collected<'c, 'a> {
    fn new(ctx: &'c Context<'a>) -> Self {
        Collected {
            ctx,
            excluded: Vec::new(),
        }
    }

    fn set(&mut self, expr: &Expr, op: RelOp) -> Result<RealSet> {
        let outcome = self.ctx.solve_expr(expr, op)?;
        for e in outcome.excluded {
            if !self.excluded.contains(&e) {
                self.excluded.push(e);
            }
        }
        Ok(outcome.set)
    }
}

fn isolated(ctx: &Context<'_>, g: &Expr, op: RelOp, c: &Rational) -> Result<Outcome> {
    let mut sub = Collected::new(ctx);
    let c_sign = c.cmp(&Rational::zero());
    let constant = Expr::Constant(c.clone());
    let g_minus_c = expr::sub(g.clone(), constant.clone());
    let g_plus_c = expr::add(g.clone(), constant);

    let set = match (op, c_sign) {
        (RelOp::Eq, Ordering::Less) => RealSet::empty(),
        (RelOp::Eq, Ordering::Equal) => sub.set(g, RelOp::Eq)?,
        (RelOp::Eq, Ordering::Greater) => sub
            .set(&g_minus_c, RelOp::Eq)?
            .union(&sub.set(&g_plus_c, RelOp::Eq)?),

        (RelOp::Lt, Ordering::Less | Ordering::Equal) => RealSet::empty(),
        (RelOp::Lt, Ordering::Greater) => sub
            .set(&g_plus_c, RelOp::Gt)?
            .intersection(&sub.set(&g_minus_c, RelOp::Lt)?),

        (RelOp::Le, Ordering::Less) => RealSet::empty(),
        (RelOp::Le, Ordering::Equal) => sub.set(g, RelOp::Eq)?,
        (RelOp::Le, Ordering::Greater) => sub
            .set(&g_plus_c, RelOp::Ge)?
            .intersection(&sub.set(&g_minus_c, RelOp::Le)?),

        (RelOp::Gt, Ordering::Less) => domain_of(ctx, g)?,
        (RelOp::Gt, Ordering::Equal) => sub
            .set(g, RelOp::Lt)?
            .union(&sub.set(g, RelOp::Gt)?),
        (RelOp::Gt, Ordering::Greater) => sub
            .set(&g_plus_c, RelOp::Lt)?
            .union(&sub.set(&g_minus_c, RelOp::Gt)?),

        (RelOp::Ge, Ordering::Less | Ordering::Equal) => domain_of(ctx, g)?,
        (RelOp::Ge, Ordering::Greater) => sub
            .set(&g_plus_c, RelOp::Le)?
            .union(&sub.set(&g_minus_c, RelOp::Ge)?),
    };

    // Where abs(g) meets the bound.
    let touching = match c_sign {
        Ordering::Less => RealSet::empty(),
        Ordering::Equal => sub.set(g, RelOp::Eq)?,
        Ordering::Greater => sub
            .set(&g_minus_c, RelOp::Eq)?
            .union(&sub.set(&g_plus_c, RelOp::Eq)?),
    };

    Ok(Outcome {
        critical: marks(&touching.points()),
        set,
        excluded: sub.excluded,
        ..Outcome::default()
    })
}

fn case_split(ctx: &Context<'_>, expr: &Expr, terms: &[Expr], op: RelOp) -> Result<Outcome> {
    if terms.len() > ctx.options.max_abs_branches {
        return Err(AlgebraError::unsolvable(format!(
            "{} absolute values exceed the limit of {}",
            terms.len(),
            ctx.options.max_abs_branches
        )));
    }
    debug!(branches = 1usize << terms.len(), "splitting absolute values by sign");

    let mut sub = Collected::new(ctx);
    let mut result = RealSet::empty();
    for mask in 0..(1usize << terms.len()) {
        let mut region = RealSet::all();
        let mut branch = expr.clone();
        for (i, term) in terms.iter().enumerate() {
            let Expr::Abs(inner) = term else {
                continue;
            };
            let (piece, side) = if mask & (1 << i) == 0 {
                ((**inner).clone(), RelOp::Ge)
            } else {
                (expr::neg((**inner).clone()), RelOp::Lt)
            };
            region = region.intersection(&sub.set(inner, side)?);
            if region.is_empty() {
                break;
            }
            branch = branch.replace(term, &piece);
        }
        if region.is_empty() {
            continue;
        }
        let solved = sub.set(&branch, op)?;
        result = result.union(&solved.intersection(&region));
    }

    let critical = if op.is_equation() {
        marks(&result.points())
    } else {
        marks(&result.boundary())
    };
    Ok(Outcome {
        set: result,
        critical,
        excluded: sub.excluded,
        ..Outcome::default()
    })
}

fn marks(values: &[ExactValue]) -> Vec<CriticalPoint> {
    values
        .iter()
        .map(|v| CriticalPoint {
            value: v.clone(),
            multiplicity: 1,
            kind: PointKind::Zero,
            sign_change: true,
        })
        .collect()
}

/// All reals where `g` is defined.
fn domain_of(ctx: &Context<'_>, g: &Expr) -> Result<RealSet> {
    let function = RationalFunction::from_expr(&strip_abs(g), &ctx.var)?;
    let undefined: Vec<ExactValue> = function
        .domain
        .iter()
        .chain(std::iter::once(&function.den))
        .flat_map(|d| real_roots(d, &ctx.var).values())
        .collect();
    Ok(RealSet::all_except(undefined))
}

// abs never restricts the domain, so dropping it keeps the same denominators.
fn strip_abs(expr: &Expr) -> Expr {
    match expr {
        Expr::Abs(inner) => strip_abs(inner),
        Expr::Variable(_) | Expr::Constant(_) => expr.clone(),
        Expr::Add(a, b) => expr::add(strip_abs(a), strip_abs(b)),
        Expr::Sub(a, b) => expr::sub(strip_abs(a), strip_abs(b)),
        Expr::Mul(a, b) => expr::mul(strip_abs(a), strip_abs(b)),
        Expr::Div(a, b) => expr::div(strip_abs(a), strip_abs(b)),
        Expr::Pow(a, b) => expr::pow(strip_abs(a), strip_abs(b)),
        Expr::Neg(a) => expr::neg(strip_abs(a)),
        Expr::Sin(a) => Expr::Sin(strip_abs(a).boxed()),
        Expr::Cos(a) => Expr::Cos(strip_abs(a).boxed()),
        Expr::Tan(a) => Expr::Tan(strip_abs(a).boxed()),
        Expr::Exp(a) => Expr::Exp(strip_abs(a).boxed()),
        Expr::Log(a) => Expr::Log(strip_abs(a).boxed()),
    }
}
