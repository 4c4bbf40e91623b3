//! Exact real roots of a polynomial over the rationals.

use crate::exact::{isolate_real_roots, ExactValue};
use crate::expr::Rational;
use crate::factor::{factor, Factorization};
use crate::format::show_rational;
use crate::polynomial::Poly;
use num_traits::{One, Signed, Zero};
use tracing::trace;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Root {
    pub value: ExactValue,
    pub multiplicity: usize,
}

#[derive(Clone, Debug)]
pub struct PolyRoots {
    /// Distinct real roots in ascending order.
    pub roots: Vec<Root>,
    /// Notes for the non-real roots that were left out.
    pub complex: Vec<String>,
    pub factorization: Factorization,
}

impl PolyRoots {
    pub fn values(&self) -> Vec<ExactValue> {
        self.roots.iter().map(|r| r.value.clone()).collect()
    }
}

/// Find every real root of `poly`, named in terms of `var` for the notes.
pub fn real_roots(poly: &Poly, var: &str) -> PolyRoots {
    let factorization = factor(poly);
    let mut roots = Vec::new();
    let mut complex = Vec::new();

    for f in &factorization.factors {
        let multiplicity = f.multiplicity;
        match f.poly.degree().unwrap_or(0) {
            0 => {}
            1 => {
                if let Some(r) = f.rational_root() {
                    roots.push(Root {
                        value: ExactValue::Rational(r),
                        multiplicity,
                    });
                }
            }
            2 => {
                let (real, note) = quadratic_roots(&f.poly, var);
                roots.extend(real.into_iter().map(|value| Root {
                    value,
                    multiplicity,
                }));
                complex.extend(note);
            }
            degree => {
                let isolated = isolate_real_roots(&f.poly);
                let missing = degree - isolated.len();
                trace!(degree, real = isolated.len(), "isolated roots of irreducible factor");
                roots.extend(isolated.into_iter().map(|root| Root {
                    value: ExactValue::Root(root),
                    multiplicity,
                }));
                if missing > 0 {
                    complex.push(format!(
                        "{} = 0 has {missing} non-real roots",
                        f.poly.display(var)
                    ));
                }
            }
        }
    }

    roots.sort_by(|a, b| a.value.cmp(&b.value));
    PolyRoots {
        roots,
        complex,
        factorization,
    }
}

/// Roots of a monic quadratic `x^2 + p x + q` with no rational roots.
fn quadratic_roots(poly: &Poly, var: &str) -> (Vec<ExactValue>, Option<String>) {
    let lc = poly.leading_coeff();
    let p = poly.coeff(1) / &lc;
    let q = poly.coeff(0) / &lc;
    let two = Rational::from_integer(2.into());
    let four = Rational::from_integer(4.into());
    let discriminant = &p * &p - four * q;
    let center = -p / &two;
    let half = Rational::one() / two;

    if discriminant.is_negative() {
        let imaginary = ExactValue::surd(Rational::zero(), half, &-discriminant);
        let imaginary = match imaginary.as_rational() {
            Some(r) if r.is_one() => "i".to_string(),
            _ => format!("{imaginary}*i"),
        };
        let note = if center.is_zero() {
            format!("{} = 0: ±{imaginary}", poly.display(var))
        } else {
            format!(
                "{} = 0: {} ± {imaginary}",
                poly.display(var),
                show_rational(&center)
            )
        };
        return (Vec::new(), Some(note));
    }

    let low = ExactValue::surd(center.clone(), -half.clone(), &discriminant);
    let high = ExactValue::surd(center, half, &discriminant);
    if low == high {
        (vec![low], None)
    } else {
        (vec![low, high], None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_pair_is_noted_not_reported() {
        let result = real_roots(&Poly::from_integers(&[1, 1, 1]), "x");
        assert!(result.roots.is_empty());
        assert_eq!(result.complex, vec!["x^2 + x + 1 = 0: -1/2 ± sqrt(3)/2*i".to_string()]);
    }

    #[test]
    fn unit_imaginary_part_prints_as_i() {
        let result = real_roots(&Poly::from_integers(&[1, 0, 1]), "t");
        assert_eq!(result.complex, vec!["t^2 + 1 = 0: ±i".to_string()]);
    }
}
