//! Exact real values: rationals, quadratic surds and isolated algebraic roots.
//!
//! Every comparison here is decided with exact arithmetic. `approx` exists only
//! for display and plotting.

pub mod algebraic;
pub mod surd;

use std::cmp::Ordering;
use std::fmt;

use crate::expr::Rational;
use crate::polynomial::{rational_to_f64, Poly};
use num_bigint::BigInt;
use num_traits::One;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub use algebraic::{isolate_real_roots, AlgebraicRoot};
pub use surd::Surd;

pub const DEFAULT_REFINEMENTS: usize = 64;

#[derive(Clone, Debug)]
pub enum ExactValue {
    Rational(Rational),
    Surd(Surd),
    Root(AlgebraicRoot),
}

/// Either a rational point or an isolating interval.
enum Isolated {
    Point(Rational),
    Interval(AlgebraicRoot),
}

impl Isolated {
    fn lower(&self) -> &Rational {
        match self {
            Isolated::Point(r) => r,
            Isolated::Interval(root) => root.bounds().0,
        }
    }

    fn upper(&self) -> &Rational {
        match self {
            Isolated::Point(r) => r,
            Isolated::Interval(root) => root.bounds().1,
        }
    }

    fn refine(&mut self) {
        if let Isolated::Interval(root) = self {
            root.refine();
        }
    }
}

impl ExactValue {
    pub fn integer(n: i64) -> Self {
        ExactValue::Rational(Rational::from_integer(BigInt::from(n)))
    }

    pub fn fraction(num: i64, den: i64) -> Self {
        ExactValue::Rational(Rational::new(num.into(), den.into()))
    }

    /// `a + b*sqrt(radicand)` for a non-negative radicand, collapsed when exact.
    pub fn surd(a: Rational, b: Rational, radicand: &Rational) -> Self {
        match Surd::build(a, b, radicand) {
            Ok(surd) => ExactValue::Surd(surd),
            Err(rational) => ExactValue::Rational(rational),
        }
    }

    pub fn as_rational(&self) -> Option<&Rational> {
        match self {
            ExactValue::Rational(r) => Some(r),
            _ => None,
        }
    }

    pub fn is_rational(&self) -> bool {
        matches!(self, ExactValue::Rational(_))
    }

    fn isolate(&self) -> Isolated {
        match self {
            ExactValue::Rational(r) => Isolated::Point(r.clone()),
            ExactValue::Surd(s) => Isolated::Interval(s.to_algebraic()),
            ExactValue::Root(root) => Isolated::Interval(root.clone()),
        }
    }

    /// Sign of `q` at this value.
    pub fn sign_of(&self, q: &Poly) -> Ordering {
        match self.isolate() {
            Isolated::Point(r) => q.sign_at(&r),
            Isolated::Interval(root) => root.sign_of(q),
        }
    }

    /// Whether this value is a root of `q`.
    pub fn is_root_of(&self, q: &Poly) -> bool {
        self.sign_of(q) == Ordering::Equal
    }

    /// A rational strictly below this value.
    pub fn rational_below(&self) -> Rational {
        (self.isolate().lower().floor()) - Rational::one()
    }

    /// A rational strictly above this value.
    pub fn rational_above(&self) -> Rational {
        (self.isolate().upper().ceil()) + Rational::one()
    }

    pub fn approx(&self) -> f64 {
        self.approx_with(DEFAULT_REFINEMENTS)
    }

    pub fn approx_with(&self, max_refinements: usize) -> f64 {
        match self {
            ExactValue::Rational(r) => rational_to_f64(r),
            ExactValue::Surd(s) => s.approx(),
            ExactValue::Root(root) => root.approx(max_refinements),
        }
    }

    pub fn latex(&self) -> String {
        crate::format::value::latex(self)
    }
}

/// A rational strictly between `a < b`, preferring an integer when one fits.
pub fn rational_between(a: &ExactValue, b: &ExactValue) -> Rational {
    let mut left = a.isolate();
    let mut right = b.isolate();
    while left.upper() >= right.lower() {
        left.refine();
        right.refine();
        if matches!((&left, &right), (Isolated::Point(_), Isolated::Point(_))) {
            break;
        }
    }
    let lo = left.upper();
    let hi = right.lower();
    let candidate = (lo.floor()) + Rational::one();
    if &candidate < hi {
        return candidate;
    }
    (lo + hi) / Rational::from_integer(2.into())
}

impl PartialEq for ExactValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ExactValue {}

impl PartialOrd for ExactValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.isolate(), other.isolate()) {
            (Isolated::Point(a), Isolated::Point(b)) => a.cmp(&b),
            (Isolated::Interval(a), Isolated::Point(b)) => a.cmp_rational(&b),
            (Isolated::Point(a), Isolated::Interval(b)) => b.cmp_rational(&a).reverse(),
            (Isolated::Interval(a), Isolated::Interval(b)) => a.cmp_root(&b),
        }
    }
}

impl From<Rational> for ExactValue {
    fn from(r: Rational) -> Self {
        ExactValue::Rational(r)
    }
}

impl fmt::Display for ExactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::value::plain(self))
    }
}

impl Serialize for ExactValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ExactValue", 3)?;
        state.serialize_field("exact", &self.to_string())?;
        state.serialize_field("latex", &self.latex())?;
        state.serialize_field("approx", &self.approx())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn surd_and_rational_compare_exactly() {
        let two = Rational::from_integer(2.into());
        let root_two = ExactValue::surd(Rational::zero(), Rational::one(), &two);
        assert!(root_two > ExactValue::fraction(141, 100));
        assert!(root_two < ExactValue::fraction(142, 100));
        assert!(root_two.is_root_of(&Poly::from_integers(&[-2, 0, 1])));
    }

    #[test]
    fn rational_between_prefers_integers() {
        let a = ExactValue::integer(-2);
        let b = ExactValue::integer(2);
        assert_eq!(rational_between(&a, &b), Rational::from_integer((-1).into()));
        let c = ExactValue::fraction(1, 3);
        let d = ExactValue::fraction(1, 2);
        let mid = rational_between(&c, &d);
        assert!(ExactValue::from(mid.clone()) > c && ExactValue::from(mid) < d);
    }

    #[test]
    fn sign_against_zero_is_exact() {
        let three = Rational::from_integer(3.into());
        let zero = ExactValue::integer(0);
        let value = ExactValue::surd(Rational::one(), -Rational::one(), &three);
        assert!(value < zero);
        let conjugate = ExactValue::surd(Rational::one(), Rational::one(), &three);
        assert!(conjugate > zero);
    }
}
