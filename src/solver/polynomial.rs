//! Polynomial and rational relations: exact roots plus a sign chart.

use std::cmp::Ordering;

use tracing::trace;

use crate::error::Result;
use crate::exact::{rational_between, ExactValue};
use crate::expr::{Rational, RelOp};
use crate::factor::factor;
use crate::format::interval::notation;
use crate::polynomial::Poly;
use crate::roots::{real_roots, Root};
use crate::sets::{Bound, Interval, RealSet};
use crate::solution::{CriticalPoint, ExclusionReason, Excluded, PointKind, Sign, SignRow};
use crate::solver::rational::RationalFunction;
use crate::solver::{Context, Outcome};

pub(crate) fn solve(ctx: &Context<'_>, poly: &Poly, op: RelOp) -> Result<Outcome> {
    let found = real_roots(poly, &ctx.var);
    trace!(roots = found.roots.len(), "polynomial roots");
    let factored = Some(found.factorization.display(&ctx.var));
    let degree = poly.degree();

    let mut outcome = if op.is_equation() {
        Outcome {
            set: RealSet::from_points(found.values()),
            critical: critical_points(&found.roots, &[], &[]),
            ..Outcome::default()
        }
    } else {
        sign_chart(poly, &Poly::one(), &found.roots, &[], &[], op)
    };
    outcome.factored = factored;
    outcome.degree = degree;
    outcome.complex = found.complex;
    Ok(outcome)
}

pub(crate) fn solve_rational(
    ctx: &Context<'_>,
    function: &RationalFunction,
    op: RelOp,
) -> Result<Outcome> {
    let zeros = real_roots(&function.num, &ctx.var);
    let poles = real_roots(&function.den, &ctx.var).roots;

    // Roots of denominators that cancelled out of the final quotient.
    let mut holes: Vec<ExactValue> = function
        .domain
        .iter()
        .flat_map(|d| real_roots(d, &ctx.var).values())
        .filter(|v| !poles.iter().any(|p| &p.value == v))
        .collect();
    holes.sort();
    holes.dedup();

    let undefined: Vec<ExactValue> = poles
        .iter()
        .map(|p| p.value.clone())
        .chain(holes.iter().cloned())
        .collect();

    let excluded: Vec<Excluded> = zeros
        .roots
        .iter()
        .filter(|z| undefined.contains(&z.value))
        .map(|z| Excluded {
            value: z.value.clone(),
            reason: ExclusionReason::ZeroDenominator,
        })
        .collect();
    trace!(excluded = excluded.len(), "candidates zeroing a denominator");

    let mut outcome = if op.is_equation() {
        let set = if function.num.is_zero() {
            RealSet::all_except(undefined.iter().cloned())
        } else {
            RealSet::from_points(
                zeros
                    .roots
                    .iter()
                    .filter(|z| !undefined.contains(&z.value))
                    .map(|z| z.value.clone()),
            )
        };
        Outcome {
            set,
            critical: critical_points(&zeros.roots, &poles, &holes),
            ..Outcome::default()
        }
    } else {
        sign_chart(&function.num, &function.den, &zeros.roots, &poles, &holes, op)
    };

    outcome.excluded = excluded;
    outcome.factored = Some(quotient_display(function, &ctx.var));
    outcome.degree = function.num.degree();
    outcome.complex = zeros.complex;
    Ok(outcome)
}

fn quotient_display(function: &RationalFunction, var: &str) -> String {
    let num = factor(&function.num).display(var);
    if function.den.is_constant() {
        return num;
    }
    let den = factor(&function.den).display(var);
    format!("{}/{}", wrap(num), wrap(den))
}

fn wrap(s: String) -> String {
    if s.contains(' ') || s.contains('*') {
        format!("({s})")
    } else {
        s
    }
}

struct Boundary {
    value: ExactValue,
    zero_multiplicity: usize,
    pole_multiplicity: usize,
    undefined: bool,
}

/// Merge zeros, poles and holes into one ascending list of critical points.
fn boundaries(zeros: &[Root], poles: &[Root], holes: &[ExactValue]) -> Vec<Boundary> {
    let mut out: Vec<Boundary> = Vec::new();
    let mut upsert = |value: &ExactValue, zero: usize, pole: usize, undefined: bool| {
        match out.iter_mut().find(|b| &b.value == value) {
            Some(b) => {
                b.zero_multiplicity += zero;
                b.pole_multiplicity += pole;
                b.undefined |= undefined;
            }
            None => out.push(Boundary {
                value: value.clone(),
                zero_multiplicity: zero,
                pole_multiplicity: pole,
                undefined,
            }),
        }
    };
    for z in zeros {
        upsert(&z.value, z.multiplicity, 0, false);
    }
    for p in poles {
        upsert(&p.value, 0, p.multiplicity, true);
    }
    for h in holes {
        upsert(h, 0, 0, true);
    }
    out.sort_by(|a, b| a.value.cmp(&b.value));
    out
}

impl Boundary {
    fn critical_point(&self) -> CriticalPoint {
        let (kind, multiplicity) = if self.undefined {
            (PointKind::Undefined, self.pole_multiplicity.max(1))
        } else {
            (PointKind::Zero, self.zero_multiplicity)
        };
        CriticalPoint {
            value: self.value.clone(),
            multiplicity,
            kind,
            sign_change: (self.zero_multiplicity + self.pole_multiplicity) % 2 == 1,
        }
    }
}

fn critical_points(zeros: &[Root], poles: &[Root], holes: &[ExactValue]) -> Vec<CriticalPoint> {
    boundaries(zeros, poles, holes)
        .iter()
        .map(Boundary::critical_point)
        .collect()
}

fn product_sign(a: Ordering, b: Ordering) -> Ordering {
    match (a, b) {
        (Ordering::Equal, _) | (_, Ordering::Equal) => Ordering::Equal,
        (x, y) if x == y => Ordering::Greater,
        _ => Ordering::Less,
    }
}

/// Decide `num/den op 0` on every open interval between critical points.
fn sign_chart(
    num: &Poly,
    den: &Poly,
    zeros: &[Root],
    poles: &[Root],
    holes: &[ExactValue],
    op: RelOp,
) -> Outcome {
    let marks = boundaries(zeros, poles, holes);

    // Open intervals between consecutive marks, each with a rational test point.
    let mut cells: Vec<(Interval, Rational)> = Vec::with_capacity(marks.len() + 1);
    match (marks.first(), marks.last()) {
        (Some(first), Some(last)) => {
            cells.push((
                Interval::new(Bound::Unbounded, Bound::Open(first.value.clone())),
                first.value.rational_below(),
            ));
            for pair in marks.windows(2) {
                cells.push((
                    Interval::open(pair[0].value.clone(), pair[1].value.clone()),
                    rational_between(&pair[0].value, &pair[1].value),
                ));
            }
            cells.push((
                Interval::new(Bound::Open(last.value.clone()), Bound::Unbounded),
                last.value.rational_above(),
            ));
        }
        _ => cells.push((
            Interval::new(Bound::Unbounded, Bound::Unbounded),
            Rational::from_integer(0.into()),
        )),
    }

    let mut pieces = Vec::new();
    let mut rows = Vec::with_capacity(cells.len());
    for (interval, test) in cells {
        let sign = product_sign(num.sign_at(&test), den.sign_at(&test));
        let satisfies = op.holds(sign);
        rows.push(SignRow {
            interval: notation(&RealSet::from_intervals([interval.clone()])),
            sign: Sign::from_ordering(sign),
            satisfies,
        });
        if satisfies {
            pieces.push(interval);
        }
    }

    if !op.is_strict() {
        for mark in marks.iter().filter(|m| !m.undefined) {
            pieces.push(Interval::point(mark.value.clone()));
        }
    }

    Outcome {
        set: RealSet::from_intervals(pieces),
        critical: marks.iter().map(Boundary::critical_point).collect(),
        sign_chart: rows,
        ..Outcome::default()
    }
}
