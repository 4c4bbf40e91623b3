//! Real algebraic numbers given by an isolating interval.

use std::cmp::Ordering;

use crate::expr::Rational;
use crate::polynomial::{rational_to_f64, Poly};
use num_traits::{One, Signed};

/// The unique root of `poly` inside the open interval `(lo, hi)`.
///
/// `poly` is square-free with no rational roots, so neither endpoint nor any
/// bisection midpoint can ever be a root.
#[derive(Clone, Debug)]
pub struct AlgebraicRoot {
    poly: Poly,
    lo: Rational,
    hi: Rational,
}

impl AlgebraicRoot {
    pub(crate) fn new(poly: Poly, lo: Rational, hi: Rational) -> Self {
        AlgebraicRoot { poly, lo, hi }
    }

    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    pub fn bounds(&self) -> (&Rational, &Rational) {
        (&self.lo, &self.hi)
    }

    /// 1-based position of this root among the real roots of `poly`.
    pub fn index(&self) -> usize {
        let bound = self.poly.cauchy_bound();
        self.poly.count_roots_in(&-bound, &self.lo) + 1
    }

    /// Halve the isolating interval.
    pub fn refine(&mut self) {
        let mid = (&self.lo + &self.hi) / Rational::from_integer(2.into());
        if self.poly.sign_at(&mid) == self.poly.sign_at(&self.lo) {
            self.lo = mid;
        } else {
            self.hi = mid;
        }
    }

    fn width(&self) -> Rational {
        &self.hi - &self.lo
    }

    pub fn cmp_rational(&self, r: &Rational) -> Ordering {
        let mut this = self.clone();
        loop {
            if r <= &this.lo {
                return Ordering::Greater;
            }
            if r >= &this.hi {
                return Ordering::Less;
            }
            this.refine();
        }
    }

    pub fn cmp_root(&self, other: &AlgebraicRoot) -> Ordering {
        let mut a = self.clone();
        let mut b = other.clone();
        if a.hi <= b.lo {
            return Ordering::Less;
        }
        if b.hi <= a.lo {
            return Ordering::Greater;
        }
        // Overlapping brackets: equal iff a common factor has a root in the overlap.
        let g = Poly::gcd(&a.poly, &b.poly);
        if !g.is_constant() {
            let lo = (&a.lo).max(&b.lo).clone();
            let hi = (&a.hi).min(&b.hi).clone();
            if g.count_roots_in(&lo, &hi) > 0 {
                return Ordering::Equal;
            }
        }
        loop {
            if a.hi <= b.lo {
                return Ordering::Less;
            }
            if b.hi <= a.lo {
                return Ordering::Greater;
            }
            if a.width() >= b.width() {
                a.refine();
            } else {
                b.refine();
            }
        }
    }

    /// Sign of `q` evaluated at this root.
    pub fn sign_of(&self, q: &Poly) -> Ordering {
        if q.is_zero() {
            return Ordering::Equal;
        }
        if q.is_constant() {
            return q.leading_coeff().cmp(&Rational::from_integer(0.into()));
        }
        let g = Poly::gcd(&self.poly, q);
        if !g.is_constant() && g.count_roots_in(&self.lo, &self.hi) > 0 {
            return Ordering::Equal;
        }
        let mut this = self.clone();
        loop {
            let at_lo = q.sign_at(&this.lo);
            if at_lo != Ordering::Equal && q.count_roots_in(&this.lo, &this.hi) == 0 {
                return at_lo;
            }
            this.refine();
        }
    }

    /// Midpoint after at most `max_refinements` bisections.
    pub fn approx(&self, max_refinements: usize) -> f64 {
        let mut this = self.clone();
        let tolerance = Rational::new(1.into(), num_bigint::BigInt::one() << 52u32);
        for _ in 0..max_refinements {
            let scale = this.lo.abs().max(Rational::one());
            if this.width() < &tolerance * scale {
                break;
            }
            this.refine();
        }
        (rational_to_f64(&this.lo) + rational_to_f64(&this.hi)) / 2.0
    }
}

/// Isolate every real root of a square-free polynomial without rational roots.
pub fn isolate_real_roots(poly: &Poly) -> Vec<AlgebraicRoot> {
    let bound = poly.cauchy_bound();
    let mut pending = vec![(-bound.clone(), bound)];
    let mut found = Vec::new();
    while let Some((lo, hi)) = pending.pop() {
        match poly.count_roots_in(&lo, &hi) {
            0 => {}
            1 => found.push(AlgebraicRoot::new(poly.clone(), lo, hi)),
            _ => {
                let mid = (&lo + &hi) / Rational::from_integer(2.into());
                pending.push((lo, mid.clone()));
                pending.push((mid, hi));
            }
        }
    }
    found.sort_by(|a, b| a.lo.cmp(&b.lo));
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolates_three_roots_of_irreducible_cubic() {
        // x^3 - 3x + 1
        let p = Poly::from_integers(&[1, -3, 0, 1]);
        let roots = isolate_real_roots(&p);
        assert_eq!(roots.len(), 3);
        assert_eq!(roots[0].cmp_root(&roots[1]), Ordering::Less);
        assert_eq!(roots[1].cmp_root(&roots[2]), Ordering::Less);
        assert_eq!(roots[2].index(), 3);
        assert!((roots[2].approx(80) - 1.532_088_886_237_956).abs() < 1e-9);
    }

    #[test]
    fn same_root_from_different_brackets_is_equal() {
        // x^2 - 2 bracketed two ways
        let p = Poly::from_integers(&[-2, 0, 1]);
        let a = AlgebraicRoot::new(p.clone(), Rational::from_integer(1.into()), Rational::from_integer(2.into()));
        let b = AlgebraicRoot::new(
            p,
            Rational::new(5.into(), 4.into()),
            Rational::new(3.into(), 2.into()),
        );
        assert_eq!(a.cmp_root(&b), Ordering::Equal);
    }
}
