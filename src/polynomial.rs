//! Dense univariate polynomials over the rationals.

use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::expr::{Expr, Rational};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly {
    pub(crate) coeffs: BTreeMap<usize, Rational>,
}

impl Poly {
    pub fn zero() -> Self {
        Poly {
            coeffs: BTreeMap::new(),
        }
    }

    pub fn one() -> Self {
        Poly::from_constant(Rational::one())
    }

    /// The polynomial `x`.
    pub fn identity() -> Self {
        Poly::monomial(Rational::one(), 1)
    }

    pub fn from_constant(c: Rational) -> Self {
        Poly::monomial(c, 0)
    }

    pub fn monomial(c: Rational, power: usize) -> Self {
        let mut coeffs = BTreeMap::new();
        if !c.is_zero() {
            coeffs.insert(power, c);
        }
        Poly { coeffs }
    }

    /// Build from coefficients listed lowest power first.
    pub fn from_coeffs(coeffs: impl IntoIterator<Item = Rational>) -> Self {
        let coeffs = coeffs
            .into_iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .collect();
        Poly { coeffs }
    }

    pub fn from_integers(coeffs: &[i64]) -> Self {
        Poly::from_coeffs(coeffs.iter().map(|c| Rational::from_integer(BigInt::from(*c))))
    }

    /// `x - root`.
    pub fn linear_factor(root: &Rational) -> Self {
        Poly::from_coeffs([-root.clone(), Rational::one()])
    }

    pub fn degree(&self) -> Option<usize> {
        self.coeffs.keys().next_back().cloned()
    }

    pub fn leading_coeff(&self) -> Rational {
        self.degree()
            .and_then(|d| self.coeffs.get(&d).cloned())
            .unwrap_or_else(Rational::zero)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs.get(&0).map(|c| c.is_one()).unwrap_or(false)
    }

    pub fn is_constant(&self) -> bool {
        self.degree().unwrap_or(0) == 0
    }

    pub fn coeff(&self, power: usize) -> Rational {
        self.coeffs
            .get(&power)
            .cloned()
            .unwrap_or_else(Rational::zero)
    }

    pub fn pow(&self, exp: usize) -> Self {
        let mut result = Poly::one();
        let mut base = self.clone();
        let mut n = exp;
        while n > 0 {
            if n % 2 == 1 {
                result = result * &base;
            }
            base = base.clone() * &base;
            n /= 2;
        }
        result
    }

    pub fn scale(&self, k: &Rational) -> Self {
        if k.is_zero() {
            return Poly::zero();
        }
        let coeffs = self
            .coeffs
            .iter()
            .map(|(exp, coeff)| (*exp, coeff * k))
            .collect();
        Poly { coeffs }
    }

    pub fn derivative(&self) -> Self {
        let mut coeffs = BTreeMap::new();
        for (exp, coeff) in &self.coeffs {
            if *exp == 0 {
                continue;
            }
            let factor = Rational::from_integer(BigInt::from(*exp));
            coeffs.insert(exp - 1, coeff * factor);
        }
        Poly { coeffs }
    }

    pub fn monic(&self) -> Self {
        let lc = self.leading_coeff();
        if lc.is_zero() {
            return self.clone();
        }
        self.scale(&(Rational::one() / lc))
    }

    pub fn evaluate(&self, x: &Rational) -> Rational {
        // Horner from the top degree down.
        let Some(top) = self.degree() else {
            return Rational::zero();
        };
        let mut acc = Rational::zero();
        for exp in (0..=top).rev() {
            acc *= x;
            if let Some(coeff) = self.coeffs.get(&exp) {
                acc += coeff;
            }
        }
        acc
    }

    /// Sign of `p(x)` compared with zero.
    pub fn sign_at(&self, x: &Rational) -> Ordering {
        self.evaluate(x).cmp(&Rational::zero())
    }

    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        if divisor.is_zero() {
            return (Poly::zero(), self.clone());
        }
        let mut remainder = self.clone();
        let mut quotient = Poly::zero();
        let divisor_degree = match divisor.degree() {
            Some(deg) => deg,
            None => return (Poly::zero(), remainder),
        };
        let divisor_lc = divisor.leading_coeff();

        while let Some(r_deg) = remainder.degree() {
            if r_deg < divisor_degree {
                break;
            }
            let term = Poly::monomial(remainder.leading_coeff() / &divisor_lc, r_deg - divisor_degree);
            quotient = quotient + &term;
            remainder = remainder - &(term * divisor);
        }

        (quotient, remainder)
    }

    pub fn div_exact(&self, divisor: &Self) -> Option<Self> {
        let (q, r) = self.div_rem(divisor);
        if r.is_zero() {
            Some(q)
        } else {
            None
        }
    }

    pub fn linear_root(&self) -> Option<Rational> {
        if self.degree()? != 1 {
            return None;
        }
        let a = self.coeff(1);
        let b = self.coeff(0);
        if a.is_zero() {
            None
        } else {
            Some(-b / a)
        }
    }

    /// Render highest power first, e.g. `x^3 - 2*x - 5`.
    pub fn display(&self, var: &str) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut out = String::new();
        for (idx, (exp, coeff)) in self.coeffs.iter().rev().enumerate() {
            let negative = coeff.is_negative();
            let magnitude = coeff.abs();
            if idx == 0 {
                if negative {
                    out.push('-');
                }
            } else {
                out.push_str(if negative { " - " } else { " + " });
            }
            let power = match exp {
                0 => String::new(),
                1 => var.to_string(),
                k => format!("{var}^{k}"),
            };
            if power.is_empty() {
                out.push_str(&crate::format::show_rational(&magnitude));
            } else if magnitude.is_one() {
                out.push_str(&power);
            } else {
                out.push_str(&crate::format::show_rational(&magnitude));
                out.push('*');
                out.push_str(&power);
            }
        }
        out
    }

    pub fn content_and_primitive_part(&self) -> (Rational, Self) {
        if self.is_zero() {
            return (Rational::zero(), Poly::zero());
        }
        let mut lcm = BigInt::one();
        for coeff in self.coeffs.values() {
            lcm = lcm.lcm(coeff.denom());
        }

        let mut gcd_num = BigInt::zero();
        let mut scaled_nums = BTreeMap::new();
        for (exp, coeff) in &self.coeffs {
            let scaled = coeff * Rational::from_integer(lcm.clone());
            let num = scaled.numer().clone();
            gcd_num = if gcd_num.is_zero() {
                num.abs()
            } else {
                gcd_num.gcd(&num)
            };
            scaled_nums.insert(*exp, num);
        }

        let coeffs = scaled_nums
            .into_iter()
            .map(|(exp, num)| (exp, Rational::from_integer(num / &gcd_num)))
            .collect();

        let mut primitive = Poly { coeffs };
        let mut content = Rational::new(gcd_num, lcm);
        if primitive.leading_coeff().is_negative() {
            primitive = -primitive;
            content = -content;
        }
        (content, primitive)
    }

    /// Integer coefficients (lowest power first) of the primitive part.
    pub fn integer_coeffs(&self) -> Vec<BigInt> {
        let (_, primitive) = self.content_and_primitive_part();
        let degree = primitive.degree().unwrap_or(0);
        let mut coeffs = vec![BigInt::zero(); degree + 1];
        for (exp, coeff) in &primitive.coeffs {
            coeffs[*exp] = coeff.to_integer();
        }
        coeffs
    }

    pub fn gcd(a: &Poly, b: &Poly) -> Poly {
        let mut r0 = a.clone();
        let mut r1 = b.clone();
        while !r1.is_zero() {
            let (_, r) = r0.div_rem(&r1);
            r0 = r1;
            r1 = r;
        }
        r0.monic()
    }

    /// Yun-style decomposition into coprime square-free parts tagged with multiplicity.
    pub fn square_free_decomposition(&self) -> Vec<(Poly, usize)> {
        if self.is_zero() || self.degree().unwrap_or(0) == 0 {
            return Vec::new();
        }

        let monic = self.monic();
        let mut result = Vec::new();
        let mut i = 1;
        let mut g = Poly::gcd(&monic, &monic.derivative());
        let mut y = monic.div_exact(&g).unwrap_or_else(Poly::zero);

        while !y.is_one() && !y.is_zero() {
            let z = Poly::gcd(&y, &g);
            let factor = y.div_exact(&z).unwrap_or_else(Poly::zero);
            if !factor.is_one() && !factor.is_zero() {
                result.push((factor, i));
            }
            y = z.clone();
            g = g.div_exact(&z).unwrap_or_else(Poly::zero);
            i += 1;
        }

        if !g.is_one() && !g.is_zero() {
            for (part, mult) in g.square_free_decomposition() {
                result.push((part, mult + i - 1));
            }
        }

        result
    }

    /// Product of the distinct irreducible factors, monic.
    pub fn square_free_part(&self) -> Poly {
        if self.is_constant() {
            return Poly::one();
        }
        let g = Poly::gcd(self, &self.derivative());
        self.div_exact(&g)
            .map(|p| p.monic())
            .unwrap_or_else(|| self.monic())
    }

    /// Every real root lies strictly inside `(-bound, bound)`.
    pub fn cauchy_bound(&self) -> Rational {
        let lc = self.leading_coeff().abs();
        let Some(top) = self.degree() else {
            return Rational::one();
        };
        let max_ratio = self
            .coeffs
            .iter()
            .filter(|(exp, _)| **exp < top)
            .map(|(_, c)| c.abs() / &lc)
            .max()
            .unwrap_or_else(Rational::zero);
        max_ratio + Rational::one()
    }

    pub fn sturm_sequence(&self) -> Vec<Poly> {
        let mut seq = vec![self.clone()];
        if self.is_constant() {
            return seq;
        }
        seq.push(self.derivative());
        loop {
            let n = seq.len();
            let (_, r) = seq[n - 2].div_rem(&seq[n - 1]);
            if r.is_zero() {
                break;
            }
            seq.push(-r);
        }
        seq
    }

    /// Number of distinct real roots in the half-open interval `(lo, hi]`.
    pub fn count_roots_in(&self, lo: &Rational, hi: &Rational) -> usize {
        if self.is_constant() || lo >= hi {
            return 0;
        }
        let seq = self.sturm_sequence();
        let at_lo = sign_variations(seq.iter().map(|p| p.sign_at(lo)));
        let at_hi = sign_variations(seq.iter().map(|p| p.sign_at(hi)));
        at_lo.saturating_sub(at_hi)
    }

    /// Number of distinct real roots.
    pub fn count_real_roots(&self) -> usize {
        let bound = self.cauchy_bound();
        self.count_roots_in(&-bound.clone(), &bound)
    }

    pub fn from_expr(expr: &Expr, var: &str) -> Option<Self> {
        if !expr.contains_var(var) {
            return extract_rational(expr).map(Poly::from_constant);
        }
        match expr {
            Expr::Variable(v) if v == var => Some(Poly::identity()),
            Expr::Add(a, b) => Some(Poly::from_expr(a, var)? + Poly::from_expr(b, var)?),
            Expr::Sub(a, b) => Some(Poly::from_expr(a, var)? - Poly::from_expr(b, var)?),
            Expr::Mul(a, b) => Some(Poly::from_expr(a, var)? * Poly::from_expr(b, var)?),
            Expr::Div(a, b) => {
                let denom = extract_rational(b)?;
                if denom.is_zero() {
                    return None;
                }
                Some(Poly::from_expr(a, var)?.scale(&(Rational::one() / denom)))
            }
            Expr::Neg(inner) => Some(-Poly::from_expr(inner, var)?),
            Expr::Pow(base, exp) => {
                let power = extract_rational(exp)?;
                if !power.is_integer() || power.is_negative() {
                    return None;
                }
                let power = power.to_integer().to_usize()?;
                Some(Poly::from_expr(base, var)?.pow(power))
            }
            _ => None,
        }
    }
}

fn sign_variations(signs: impl Iterator<Item = Ordering>) -> usize {
    let mut count = 0;
    let mut last = None;
    for sign in signs.filter(|s| *s != Ordering::Equal) {
        if let Some(prev) = last {
            if prev != sign {
                count += 1;
            }
        }
        last = Some(sign);
    }
    count
}

fn extract_rational(expr: &Expr) -> Option<Rational> {
    match expr {
        Expr::Constant(n) => Some(n.clone()),
        Expr::Neg(inner) => extract_rational(inner).map(|n| -n),
        Expr::Add(a, b) => Some(extract_rational(a)? + extract_rational(b)?),
        Expr::Sub(a, b) => Some(extract_rational(a)? - extract_rational(b)?),
        Expr::Mul(a, b) => Some(extract_rational(a)? * extract_rational(b)?),
        Expr::Div(a, b) => {
            let d = extract_rational(b)?;
            if d.is_zero() {
                None
            } else {
                Some(extract_rational(a)? / d)
            }
        }
        _ => None,
    }
}

pub fn rational_to_f64(r: &Rational) -> f64 {
    match (r.numer().to_f64(), r.denom().to_f64()) {
        (Some(n), Some(d)) if n.is_finite() && d.is_finite() => n / d,
        _ => {
            // Shrink both sides until they fit in an f64.
            let shift = r.denom().bits().max(r.numer().bits()).saturating_sub(1000);
            let n = (r.numer() >> shift).to_f64().unwrap_or(0.0);
            let d = (r.denom() >> shift).to_f64().unwrap_or(1.0);
            if d == 0.0 {
                0.0
            } else {
                n / d
            }
        }
    }
}

impl std::ops::Add for Poly {
    type Output = Poly;
    fn add(self, rhs: Poly) -> Poly {
        self + &rhs
    }
}

impl std::ops::Add<&Poly> for Poly {
    type Output = Poly;
    fn add(self, rhs: &Poly) -> Poly {
        let mut coeffs = self.coeffs;
        for (exp, coeff) in &rhs.coeffs {
            match coeffs.entry(*exp) {
                Entry::Vacant(entry) => {
                    if !coeff.is_zero() {
                        entry.insert(coeff.clone());
                    }
                }
                Entry::Occupied(mut entry) => {
                    let updated = entry.get() + coeff;
                    if updated.is_zero() {
                        entry.remove();
                    } else {
                        *entry.get_mut() = updated;
                    }
                }
            }
        }
        Poly { coeffs }
    }
}

impl std::ops::Sub for Poly {
    type Output = Poly;
    fn sub(self, rhs: Poly) -> Poly {
        self - &rhs
    }
}

impl std::ops::Sub<&Poly> for Poly {
    type Output = Poly;
    fn sub(self, rhs: &Poly) -> Poly {
        self + &(-rhs.clone())
    }
}

impl std::ops::Mul for Poly {
    type Output = Poly;
    fn mul(self, rhs: Poly) -> Poly {
        self * &rhs
    }
}

impl std::ops::Mul<&Poly> for Poly {
    type Output = Poly;
    fn mul(self, rhs: &Poly) -> Poly {
        let mut coeffs: BTreeMap<usize, Rational> = BTreeMap::new();
        for (exp_a, coeff_a) in &self.coeffs {
            for (exp_b, coeff_b) in &rhs.coeffs {
                let product = coeff_a * coeff_b;
                match coeffs.entry(exp_a + exp_b) {
                    Entry::Vacant(entry) => {
                        entry.insert(product);
                    }
                    Entry::Occupied(mut entry) => {
                        *entry.get_mut() += product;
                    }
                }
            }
        }
        coeffs.retain(|_, c| !c.is_zero());
        Poly { coeffs }
    }
}

impl std::ops::Neg for Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        let coeffs = self.coeffs.into_iter().map(|(e, c)| (e, -c)).collect();
        Poly { coeffs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sturm_counts_roots_of_cubic() {
        // (x - 1)(x + 1)(x - 4)
        let p = Poly::from_integers(&[4, -1, -4, 1]);
        assert_eq!(p.count_real_roots(), 3);
        let lo = Rational::from_integer(0.into());
        let hi = Rational::from_integer(2.into());
        assert_eq!(p.count_roots_in(&lo, &hi), 1);
    }

    #[test]
    fn sturm_ignores_complex_pair() {
        // x^2 + 1
        let p = Poly::from_integers(&[1, 0, 1]);
        assert_eq!(p.count_real_roots(), 0);
    }

    #[test]
    fn square_free_part_drops_repeats() {
        // (x - 1)^2 (x + 2)
        let p = Poly::from_integers(&[2, -3, 0, 1]);
        assert_eq!(p.square_free_part(), Poly::from_integers(&[-2, 1, 1]));
    }

    #[test]
    fn display_orders_by_descending_power() {
        let p = Poly::from_integers(&[-5, -2, 0, 1]);
        assert_eq!(p.display("x"), "x^3 - 2*x - 5");
        let q = Poly::from_coeffs([Rational::new(1.into(), 2.into()), -Rational::one()]);
        assert_eq!(q.display("t"), "-t + 1/2");
    }
}
