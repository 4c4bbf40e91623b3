use crate::exact::algebraic::AlgebraicRoot;
use crate::expr::Rational;
use crate::polynomial::{rational_to_f64, Poly};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

// Trial division stops here; larger radicands may keep a square factor.
const SQUARE_FREE_SEARCH_LIMIT: u64 = 100_000;

/// `a + b*sqrt(d)` with `d > 1` square-free and `b != 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surd {
    pub a: Rational,
    pub b: Rational,
    pub d: BigInt,
}

impl Surd {
    /// Build `a + b*sqrt(radicand)`. Returns the plain rational when the root is exact.
    pub fn build(a: Rational, b: Rational, radicand: &Rational) -> Result<Surd, Rational> {
        if b.is_zero() || radicand.is_zero() {
            return Err(a);
        }
        // sqrt(p/q) = sqrt(p*q)/q
        let pq = radicand.numer() * radicand.denom();
        let (outside, inside) = extract_square(&pq);
        let b = b * Rational::new(outside, radicand.denom().clone());
        if inside.is_one() {
            return Err(a + b);
        }
        Ok(Surd { a, b, d: inside })
    }

    /// The conjugate `a - b*sqrt(d)`.
    pub fn conjugate(&self) -> Surd {
        Surd {
            a: self.a.clone(),
            b: -self.b.clone(),
            d: self.d.clone(),
        }
    }

    /// `x^2 - 2a x + (a^2 - b^2 d)`, irreducible over the rationals.
    pub fn minimal_poly(&self) -> Poly {
        let d = Rational::from_integer(self.d.clone());
        let two = Rational::from_integer(2.into());
        Poly::from_coeffs([
            &self.a * &self.a - &self.b * &self.b * d,
            -(two * &self.a),
            Rational::one(),
        ])
    }

    /// Bracket the value between consecutive integers around `sqrt(d)`.
    pub fn to_algebraic(&self) -> AlgebraicRoot {
        let s = Rational::from_integer(self.d.sqrt());
        let low = &self.a + &self.b * &s;
        let high = &self.a + &self.b * (s + Rational::one());
        let (lo, hi) = if self.b.is_positive() {
            (low, high)
        } else {
            (high, low)
        };
        AlgebraicRoot::new(self.minimal_poly(), lo, hi)
    }

    pub fn approx(&self) -> f64 {
        let d = self.d.to_f64().unwrap_or(f64::NAN);
        rational_to_f64(&self.a) + rational_to_f64(&self.b) * d.sqrt()
    }
}

/// Split `n = outside^2 * inside`.
fn extract_square(n: &BigInt) -> (BigInt, BigInt) {
    let mut inside = n.abs();
    let mut outside = BigInt::one();
    let mut k = BigInt::from(2u32);
    let limit = BigInt::from(SQUARE_FREE_SEARCH_LIMIT);
    while &k * &k <= inside && k <= limit {
        let square = &k * &k;
        while inside.is_multiple_of(&square) {
            inside /= &square;
            outside *= &k;
        }
        k += 1;
    }
    let root = inside.sqrt();
    if &root * &root == inside {
        outside *= root;
        inside = BigInt::one();
    }
    (outside, inside)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Rational {
        Rational::from_integer(n.into())
    }

    #[test]
    fn pulls_square_factors_out_of_radicand() {
        let surd = Surd::build(int(0), int(1), &int(12)).unwrap();
        assert_eq!(surd.b, int(2));
        assert_eq!(surd.d, BigInt::from(3));
    }

    #[test]
    fn perfect_squares_collapse_to_rationals() {
        assert_eq!(Surd::build(int(1), int(1), &Rational::new(9.into(), 4.into())), Err(Rational::new(5.into(), 2.into())));
    }

    #[test]
    fn bracket_contains_value() {
        let surd = Surd::build(int(1), int(-1), &int(5)).unwrap();
        let root = surd.to_algebraic();
        let (lo, hi) = root.bounds();
        let value = surd.approx();
        assert!(rational_to_f64(lo) < value && value < rational_to_f64(hi));
    }
}
