//! Expression tree definitions and helpers.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use serde::Serialize;

pub type Rational = BigRational;

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Expr {
    Variable(String),
    Constant(Rational),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Abs(Box<Expr>),
    Sin(Box<Expr>),
    Cos(Box<Expr>),
    Tan(Box<Expr>),
    Exp(Box<Expr>),
    Log(Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn constant(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Self {
        Expr::Constant(Rational::new(num.into(), den.into()))
    }

    pub fn integer(value: impl Into<BigInt>) -> Self {
        Expr::Constant(Rational::from_integer(value.into()))
    }

    pub fn rational(value: Rational) -> Self {
        Expr::Constant(value)
    }

    pub fn negate(self) -> Self {
        match self {
            Expr::Constant(r) => Expr::Constant(-r),
            Expr::Neg(inner) => *inner,
            other => Expr::Neg(Box::new(other)),
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Constant(r) if r.is_zero())
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Constant(r) if r.is_one())
    }

    pub fn as_variable(&self) -> Option<&str> {
        if let Expr::Variable(name) = self {
            Some(name)
        } else {
            None
        }
    }

    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Direct children, left to right.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Variable(_) | Expr::Constant(_) => Vec::new(),
            Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) | Expr::Pow(a, b) => {
                vec![&**a, &**b]
            }
            Expr::Neg(a)
            | Expr::Abs(a)
            | Expr::Sin(a)
            | Expr::Cos(a)
            | Expr::Tan(a)
            | Expr::Exp(a)
            | Expr::Log(a) => vec![&**a],
        }
    }

    pub fn contains_var(&self, var: &str) -> bool {
        match self {
            Expr::Variable(v) => v == var,
            Expr::Constant(_) => false,
            other => other.children().into_iter().any(|c| c.contains_var(var)),
        }
    }

    pub fn variables(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        collect_variables(self, &mut out);
        out
    }

    /// Square root written as a power with exponent `1/2`.
    pub fn is_square_root(&self) -> bool {
        match self {
            Expr::Pow(_, exp) => matches!(&**exp, Expr::Constant(e) if *e == half()),
            _ => false,
        }
    }

    /// Rebuild the tree with every occurrence of `target` swapped for `replacement`.
    pub fn replace(&self, target: &Expr, replacement: &Expr) -> Expr {
        if self == target {
            return replacement.clone();
        }
        let r = |e: &Expr| e.replace(target, replacement).boxed();
        match self {
            Expr::Variable(_) | Expr::Constant(_) => self.clone(),
            Expr::Add(a, b) => Expr::Add(r(a), r(b)),
            Expr::Sub(a, b) => Expr::Sub(r(a), r(b)),
            Expr::Mul(a, b) => Expr::Mul(r(a), r(b)),
            Expr::Div(a, b) => Expr::Div(r(a), r(b)),
            Expr::Pow(a, b) => Expr::Pow(r(a), r(b)),
            Expr::Neg(a) => Expr::Neg(r(a)),
            Expr::Abs(a) => Expr::Abs(r(a)),
            Expr::Sin(a) => Expr::Sin(r(a)),
            Expr::Cos(a) => Expr::Cos(r(a)),
            Expr::Tan(a) => Expr::Tan(r(a)),
            Expr::Exp(a) => Expr::Exp(r(a)),
            Expr::Log(a) => Expr::Log(r(a)),
        }
    }
}

fn collect_variables(expr: &Expr, out: &mut BTreeSet<String>) {
    match expr {
        Expr::Variable(v) => {
            out.insert(v.clone());
        }
        other => {
            for child in other.children() {
                collect_variables(child, out);
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::pretty(self))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum RelOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
}

impl RelOp {
    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Eq => "=",
            RelOp::Lt => "<",
            RelOp::Le => "<=",
            RelOp::Gt => ">",
            RelOp::Ge => ">=",
        }
    }

    pub fn is_equation(self) -> bool {
        self == RelOp::Eq
    }

    pub fn is_strict(self) -> bool {
        matches!(self, RelOp::Lt | RelOp::Gt)
    }

    /// Relation obtained after multiplying both sides by a negative number.
    pub fn flipped(self) -> RelOp {
        match self {
            RelOp::Eq => RelOp::Eq,
            RelOp::Lt => RelOp::Gt,
            RelOp::Le => RelOp::Ge,
            RelOp::Gt => RelOp::Lt,
            RelOp::Ge => RelOp::Le,
        }
    }

    /// Whether `value op 0` holds for a value with the given ordering against zero.
    pub fn holds(self, sign: Ordering) -> bool {
        match self {
            RelOp::Eq => sign == Ordering::Equal,
            RelOp::Lt => sign == Ordering::Less,
            RelOp::Le => sign != Ordering::Greater,
            RelOp::Gt => sign == Ordering::Greater,
            RelOp::Ge => sign != Ordering::Less,
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A parsed statement `lhs op rhs`. Bare expressions parse as `expr = 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation {
    pub lhs: Expr,
    pub op: RelOp,
    pub rhs: Expr,
}

impl Relation {
    pub fn new(lhs: Expr, op: RelOp, rhs: Expr) -> Self {
        Relation { lhs, op, rhs }
    }

    /// `lhs - rhs`, the side compared against zero.
    pub fn one_sided(&self) -> Expr {
        if self.rhs.is_zero() {
            self.lhs.clone()
        } else {
            sub(self.lhs.clone(), self.rhs.clone())
        }
    }

    pub fn variables(&self) -> BTreeSet<String> {
        let mut vars = self.lhs.variables();
        vars.extend(self.rhs.variables());
        vars
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

pub fn zero() -> Expr {
    Expr::Constant(Rational::zero())
}

pub fn one() -> Expr {
    Expr::Constant(Rational::one())
}

pub fn half() -> Rational {
    rational(1, 2)
}

pub fn rational(num: i64, den: i64) -> Rational {
    Rational::new(num.into(), den.into())
}

pub fn pow(base: Expr, exp: Expr) -> Expr {
    Expr::Pow(base.boxed(), exp.boxed())
}

pub fn add(a: Expr, b: Expr) -> Expr {
    Expr::Add(a.boxed(), b.boxed())
}

pub fn sub(a: Expr, b: Expr) -> Expr {
    Expr::Sub(a.boxed(), b.boxed())
}

pub fn mul(a: Expr, b: Expr) -> Expr {
    Expr::Mul(a.boxed(), b.boxed())
}

pub fn div(a: Expr, b: Expr) -> Expr {
    Expr::Div(a.boxed(), b.boxed())
}

pub fn neg(a: Expr) -> Expr {
    Expr::Neg(a.boxed())
}

pub fn abs(a: Expr) -> Expr {
    Expr::Abs(a.boxed())
}
