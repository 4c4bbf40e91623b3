//! Factorization over the rationals: square-free split, rational roots and
//! quartics that break into two rational quadratics.

use crate::expr::Rational;
use crate::polynomial::Poly;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factorization {
    pub constant: Rational,
    pub factors: Vec<Factor>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factor {
    pub poly: Poly,
    pub multiplicity: usize,
}

impl Factor {
    /// Root of a linear factor.
    pub fn rational_root(&self) -> Option<Rational> {
        self.poly.linear_root()
    }
}

impl Factorization {
    pub fn degree(&self) -> usize {
        self.factors
            .iter()
            .map(|f| f.poly.degree().unwrap_or(0) * f.multiplicity)
            .sum()
    }

    /// Multiply the factors back together.
    pub fn expand(&self) -> Poly {
        self.factors
            .iter()
            .fold(Poly::from_constant(self.constant.clone()), |acc, f| {
                acc * f.poly.pow(f.multiplicity)
            })
    }

    /// Render as a product, e.g. `2*(x - 1)^2*(x + 3)`.
    pub fn display(&self, var: &str) -> String {
        if self.constant.is_zero() {
            return "0".to_string();
        }
        if self.factors.is_empty() {
            return crate::format::show_rational(&self.constant);
        }
        let mut parts = Vec::new();
        for factor in &self.factors {
            let base = factor.poly.display(var);
            let base = if factor.poly.coeffs.len() > 1 {
                format!("({base})")
            } else {
                base
            };
            if factor.multiplicity > 1 {
                parts.push(format!("{base}^{}", factor.multiplicity));
            } else {
                parts.push(base);
            }
        }
        let product = parts.join("*");
        if self.constant.is_one() {
            product
        } else if (-self.constant.clone()).is_one() {
            format!("-{product}")
        } else {
            format!("{}*{product}", crate::format::show_rational(&self.constant))
        }
    }
}

/// Factor `poly` into its leading coefficient times monic factors.
pub fn factor(poly: &Poly) -> Factorization {
    if poly.is_zero() {
        return Factorization {
            constant: Rational::zero(),
            factors: Vec::new(),
        };
    }

    let constant = poly.leading_coeff();
    let mut factors = Vec::new();

    for (part, multiplicity) in poly.square_free_decomposition() {
        let mut stack = vec![part];
        while let Some(current) = stack.pop() {
            if current.degree().unwrap_or(0) == 0 {
                continue;
            }
            if current.degree() == Some(1) {
                factors.push(Factor {
                    poly: current.monic(),
                    multiplicity,
                });
                continue;
            }

            if let Some(root) = find_rational_root(&current) {
                let divider = Poly::linear_factor(&root);
                match current.div_exact(&divider) {
                    Some(next) => {
                        factors.push(Factor {
                            poly: divider,
                            multiplicity,
                        });
                        stack.push(next);
                        continue;
                    }
                    None => {
                        factors.push(Factor {
                            poly: current.monic(),
                            multiplicity,
                        });
                        continue;
                    }
                }
            }

            if current.degree() == Some(4) {
                if let Some((a, b)) = split_quartic(&current.monic()) {
                    stack.push(a);
                    stack.push(b);
                    continue;
                }
            }

            factors.push(Factor {
                poly: current.monic(),
                multiplicity,
            });
        }
    }

    factors.sort_by(|a, b| {
        let deg_a = a.poly.degree().unwrap_or(0);
        let deg_b = b.poly.degree().unwrap_or(0);
        deg_a.cmp(&deg_b).then_with(|| match (a.rational_root(), b.rational_root()) {
            (Some(ra), Some(rb)) => ra.cmp(&rb),
            _ => std::cmp::Ordering::Equal,
        })
    });

    Factorization { constant, factors }
}

/// Largest trial divisor tried when enumerating rational root candidates.
const DIVISOR_SEARCH_LIMIT: u64 = 100_000;

/// A rational root of `poly`, if one is found. Quadratics are decided
/// exactly through the discriminant; higher degrees try the candidates
/// `p/q` and give up when the coefficients are too large to enumerate.
pub fn find_rational_root(poly: &Poly) -> Option<Rational> {
    let degree = poly.degree()?;
    if degree == 0 {
        return None;
    }
    if degree == 1 {
        return poly.linear_root();
    }
    if poly.coeff(0).is_zero() {
        return Some(Rational::zero());
    }
    if degree == 2 {
        return quadratic_rational_root(poly);
    }

    let int_coeffs = poly.integer_coeffs();
    let leading = int_coeffs.last()?.clone();
    let constant = int_coeffs.first()?.clone();

    let mut candidates = Vec::new();
    let numerators = divisors(&constant)?;
    let denominators = divisors(&leading)?;
    for p in &numerators {
        for q in &denominators {
            if q.is_zero() {
                continue;
            }
            let candidate = Rational::new(p.clone(), q.clone());
            candidates.push(candidate.clone());
            candidates.push(-candidate);
        }
    }
    candidates.sort();
    candidates.dedup();

    candidates
        .into_iter()
        .find(|candidate| poly.evaluate(candidate).is_zero())
}

fn quadratic_rational_root(poly: &Poly) -> Option<Rational> {
    let a = poly.coeff(2);
    let b = poly.coeff(1);
    let c = poly.coeff(0);
    let discriminant = &b * &b - Rational::from_integer(4.into()) * &a * &c;
    let root = perfect_square_rational(&discriminant)?;
    Some((root - b) / (Rational::from_integer(2.into()) * a))
}

/// Positive divisors of `n`, or `None` past the trial-division limit.
fn divisors(n: &BigInt) -> Option<Vec<BigInt>> {
    let abs_n = n.abs();
    if abs_n.is_zero() {
        return Some(vec![BigInt::zero()]);
    }
    let limit = BigInt::from(DIVISOR_SEARCH_LIMIT);
    if abs_n > &limit * &limit {
        return None;
    }
    let mut result = Vec::new();
    let mut d = BigInt::one();
    while &d * &d <= abs_n {
        if (&abs_n % &d).is_zero() {
            result.push(d.clone());
            let other = &abs_n / &d;
            if other != d {
                result.push(other);
            }
        }
        d += 1;
    }
    result.sort();
    Some(result)
}

fn rational_divisors(r: &Rational) -> Option<Vec<Rational>> {
    let mut result = Vec::new();
    let numerators = divisors(r.numer())?;
    let denominators = divisors(r.denom())?;
    for p in &numerators {
        for q in &denominators {
            if q.is_zero() {
                continue;
            }
            let frac = Rational::new(p.clone(), q.clone());
            result.push(frac.clone());
            result.push(-frac);
        }
    }
    result.sort();
    result.dedup();
    Some(result)
}

pub(crate) fn perfect_square_rational(r: &Rational) -> Option<Rational> {
    if r.is_negative() {
        return None;
    }
    let num_root = integer_sqrt_exact(r.numer())?;
    let den_root = integer_sqrt_exact(r.denom())?;
    Some(Rational::new(num_root, den_root))
}

fn integer_sqrt_exact(n: &BigInt) -> Option<BigInt> {
    if n.is_negative() {
        return None;
    }
    let root = n.sqrt();
    if &root * &root == *n {
        Some(root)
    } else {
        None
    }
}

/// Monic quadratic `x^2 + a*x + b`.
fn quadratic(a: &Rational, b: &Rational) -> Poly {
    Poly::from_coeffs([b.clone(), a.clone(), Rational::one()])
}

/// Try `x^4 + p3 x^3 + p2 x^2 + p1 x + p0 = (x^2 + a x + b)(x^2 + c x + d)`
/// with rational `a, b, c, d`.
fn split_quartic(poly: &Poly) -> Option<(Poly, Poly)> {
    if poly.degree()? != 4 || !poly.leading_coeff().is_one() {
        return None;
    }

    let p3 = poly.coeff(3);
    let p2 = poly.coeff(2);
    let p1 = poly.coeff(1);
    let p0 = poly.coeff(0);
    let two = Rational::from_integer(2.into());
    let four = Rational::from_integer(4.into());

    let candidates = rational_divisors(&p0)?;
    for b in &candidates {
        if b.is_zero() {
            continue;
        }
        let d = &p0 / b;
        // a + c = p3 and a*c = p2 - b - d, so a and c are roots of t^2 - p3 t + (p2 - b - d).
        let ac = &p2 - b - &d;
        let discriminant = &p3 * &p3 - &four * &ac;
        let Some(root) = perfect_square_rational(&discriminant) else {
            continue;
        };
        for a in [(&p3 + &root) / &two, (&p3 - &root) / &two] {
            let c = &p3 - &a;
            if &a * &d + b * &c == p1 {
                return Some((quadratic(&a, b), quadratic(&c, &d)));
            }
        }
    }
    None
}
