use num_traits::{Signed, Zero};

use crate::error::Result;
use crate::exact::ExactValue;
use crate::expr::{Rational, RelOp};
use crate::factor::factor;
use crate::polynomial::Poly;
use crate::sets::{Bound, Interval, RealSet};
use crate::solution::{CriticalPoint, PointKind};
use crate::solver::{Context, Outcome};

/// `a*x + b op 0`.
pub(crate) fn solve(ctx: &Context<'_>, poly: &Poly, op: RelOp) -> Result<Outcome> {
    let a = poly.coeff(1);
    let b = poly.coeff(0);

    if a.is_zero() {
        // No variable left: the relation is simply true or false.
        let holds = op.holds(b.cmp(&Rational::zero()));
        let set = if holds { RealSet::all() } else { RealSet::empty() };
        return Ok(Outcome {
            set,
            degree: Some(0),
            ..Outcome::default()
        });
    }

    let root = ExactValue::Rational(-b / &a);
    // Dividing by a negative coefficient flips the comparison.
    let op = if a.is_negative() { op.flipped() } else { op };
    let set = match op {
        RelOp::Eq => RealSet::from_points([root.clone()]),
        RelOp::Lt => ray_below(root.clone(), false),
        RelOp::Le => ray_below(root.clone(), true),
        RelOp::Gt => ray_above(root.clone(), false),
        RelOp::Ge => ray_above(root.clone(), true),
    };

    Ok(Outcome {
        set,
        critical: vec![CriticalPoint {
            value: root,
            multiplicity: 1,
            kind: PointKind::Zero,
            sign_change: true,
        }],
        factored: Some(factor(poly).display(&ctx.var)),
        degree: Some(1),
        ..Outcome::default()
    })
}

fn ray_below(at: ExactValue, closed: bool) -> RealSet {
    let hi = if closed { Bound::Closed(at) } else { Bound::Open(at) };
    RealSet::from_intervals([Interval::new(Bound::Unbounded, hi)])
}

fn ray_above(at: ExactValue, closed: bool) -> RealSet {
    let lo = if closed { Bound::Closed(at) } else { Bound::Open(at) };
    RealSet::from_intervals([Interval::new(lo, Bound::Unbounded)])
}
