//! Expressions as a quotient of two polynomials in one variable.

use crate::error::{AlgebraError, Result};
use crate::expr::{Expr, Rational};
use crate::factor::perfect_square_rational;
use crate::polynomial::Poly;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// `num / den`, plus every non-constant denominator met while building it.
///
/// The numerator is never reduced against the denominator, so candidates that
/// cancel away still show up and can be reported as excluded.
#[derive(Clone, Debug, PartialEq)]
pub struct RationalFunction {
    pub num: Poly,
    pub den: Poly,
    pub domain: Vec<Poly>,
}

impl RationalFunction {
    pub fn constant(c: Rational) -> Self {
        RationalFunction {
            num: Poly::from_constant(c),
            den: Poly::one(),
            domain: Vec::new(),
        }
    }

    fn identity() -> Self {
        RationalFunction {
            num: Poly::identity(),
            den: Poly::one(),
            domain: Vec::new(),
        }
    }

    pub fn is_polynomial(&self) -> bool {
        self.den.is_constant() && self.domain.is_empty()
    }

    /// The numerator divided through by a constant denominator.
    pub fn as_polynomial(&self) -> Option<Poly> {
        if !self.is_polynomial() {
            return None;
        }
        let den = self.den.leading_coeff();
        Some(self.num.scale(&(Rational::one() / den)))
    }

    /// Value when no variable is involved.
    pub fn as_constant(&self) -> Option<Rational> {
        if self.num.is_constant() && self.den.is_constant() && self.domain.is_empty() {
            Some(self.num.coeff(0) / self.den.leading_coeff())
        } else {
            None
        }
    }

    pub fn from_expr(expr: &Expr, var: &str) -> Result<Self> {
        match expr {
            Expr::Variable(v) if v == var => Ok(RationalFunction::identity()),
            Expr::Variable(v) => Err(AlgebraError::unsolvable(format!(
                "unexpected second variable `{v}`"
            ))),
            Expr::Constant(c) => Ok(RationalFunction::constant(c.clone())),
            Expr::Add(a, b) => Ok(Self::from_expr(a, var)?.add(Self::from_expr(b, var)?)),
            Expr::Sub(a, b) => Ok(Self::from_expr(a, var)?.add(Self::from_expr(b, var)?.neg())),
            Expr::Mul(a, b) => Ok(Self::from_expr(a, var)?.mul(Self::from_expr(b, var)?)),
            Expr::Div(a, b) => Self::from_expr(a, var)?.div(Self::from_expr(b, var)?),
            Expr::Neg(a) => Ok(Self::from_expr(a, var)?.neg()),
            Expr::Pow(base, exp) => {
                let exponent = Self::from_expr(exp, var)?.as_constant().ok_or_else(|| {
                    AlgebraError::unsolvable("variable in an exponent")
                })?;
                let base = Self::from_expr(base, var)?;
                base.pow(&exponent)
            }
            Expr::Abs(inner) => {
                let inner = Self::from_expr(inner, var)?;
                match inner.as_constant() {
                    Some(c) => Ok(RationalFunction::constant(c.abs())),
                    None => Err(AlgebraError::unsolvable(
                        "absolute value of a non-constant expression",
                    )),
                }
            }
            Expr::Sin(_) | Expr::Cos(_) | Expr::Tan(_) | Expr::Exp(_) | Expr::Log(_) => Err(
                AlgebraError::unsolvable("transcendental functions are not supported"),
            ),
        }
    }

    fn add(self, other: Self) -> Self {
        let mut domain = self.domain;
        domain.extend(other.domain);
        if self.den == other.den {
            return RationalFunction {
                num: self.num + other.num,
                den: self.den,
                domain,
            };
        }
        RationalFunction {
            num: self.num * &other.den + other.num * &self.den,
            den: self.den * other.den,
            domain,
        }
    }

    fn neg(self) -> Self {
        RationalFunction {
            num: -self.num,
            ..self
        }
    }

    fn mul(self, other: Self) -> Self {
        let mut domain = self.domain;
        domain.extend(other.domain);
        RationalFunction {
            num: self.num * other.num,
            den: self.den * other.den,
            domain,
        }
    }

    fn div(self, other: Self) -> Result<Self> {
        if other.num.is_zero() {
            return Err(AlgebraError::domain("division by zero"));
        }
        let mut domain = self.domain;
        domain.extend(other.domain);
        if !other.num.is_constant() {
            domain.push(other.num.clone());
        }
        Ok(RationalFunction {
            num: self.num * other.den,
            den: self.den * other.num,
            domain,
        })
    }

    fn recip(self) -> Result<Self> {
        RationalFunction::constant(Rational::one()).div(self)
    }

    fn pow(self, exponent: &Rational) -> Result<Self> {
        if exponent.is_integer() {
            let k = exponent
                .to_integer()
                .abs()
                .to_usize()
                .ok_or_else(|| AlgebraError::unsolvable("exponent too large"))?;
            let raised = RationalFunction {
                num: self.num.pow(k),
                den: self.den.pow(k),
                domain: self.domain,
            };
            return if exponent.is_negative() {
                raised.recip()
            } else {
                Ok(raised)
            };
        }

        let Some(value) = self.as_constant() else {
            return Err(AlgebraError::unsolvable(
                "fractional power of a non-constant expression",
            ));
        };
        rational_power(&value, exponent).map(RationalFunction::constant)
    }
}

/// `value^exponent` when the result is rational.
fn rational_power(value: &Rational, exponent: &Rational) -> Result<Rational> {
    let root_index = exponent.denom();
    let even_root = (root_index % BigInt::from(2)).is_zero();
    if value.is_negative() && even_root {
        return Err(AlgebraError::domain(format!(
            "even root of the negative number {}",
            crate::format::show_rational(value)
        )));
    }
    if value.is_zero() {
        return if exponent.is_negative() {
            Err(AlgebraError::domain("division by zero"))
        } else {
            Ok(Rational::zero())
        };
    }
    let root = if root_index == &BigInt::from(2) {
        perfect_square_rational(value)
    } else {
        nth_root(value, root_index)
    }
    .ok_or_else(|| AlgebraError::unsolvable("irrational constant"))?;

    let k = exponent
        .numer()
        .abs()
        .to_i32()
        .ok_or_else(|| AlgebraError::unsolvable("exponent too large"))?;
    let raised = num_traits::pow(root, k as usize);
    if exponent.is_negative() {
        Ok(Rational::one() / raised)
    } else {
        Ok(raised)
    }
}

fn nth_root(value: &Rational, n: &BigInt) -> Option<Rational> {
    let n = n.to_u32()?;
    let root_int = |x: &BigInt| -> Option<BigInt> {
        let magnitude = x.abs();
        let r = magnitude.nth_root(n);
        if num_traits::pow(r.clone(), n as usize) == magnitude {
            Some(if x.is_negative() { -r } else { r })
        } else {
            None
        }
    };
    Some(Rational::new(root_int(value.numer())?, root_int(value.denom())?))
}
