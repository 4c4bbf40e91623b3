use crate::expr::{Expr, Rational};
use num_traits::{One, Signed};

/// Render an expression in the normalized input syntax.
pub fn pretty(expr: &Expr) -> String {
    fn pp(ctx: u8, expr: &Expr) -> String {
        match expr {
            Expr::Variable(v) => v.clone(),
            Expr::Constant(r) if ctx <= 2 || (r.is_integer() && !r.is_negative()) => {
                show_rational(r)
            }
            Expr::Constant(r) => format!("({})", show_rational(r)),

            Expr::Add(a, b) => {
                let s_a = pp(1, a);
                let (neg_b, b_inner) = split_neg(b);
                let s_b = pp(2, &b_inner);
                let body = format!("{s_a} {} {s_b}", if neg_b { "-" } else { "+" });
                bracket(ctx, 1, body)
            }

            Expr::Sub(a, b) => {
                let s_a = pp(1, a);
                let (neg_b, b_inner) = split_neg(b);
                let s_b = pp(2, &b_inner);
                let body = format!("{s_a} {} {s_b}", if neg_b { "+" } else { "-" });
                bracket(ctx, 1, body)
            }

            Expr::Mul(a, b) => bracket(ctx, 2, format!("{}*{}", pp(2, a), pp(3, b))),

            Expr::Div(a, b) => bracket(ctx, 2, format!("{}/{}", pp(2, a), pp(3, b))),

            Expr::Pow(base, _) if expr.is_square_root() => format!("sqrt({})", pp(0, base)),

            Expr::Pow(a, b) => bracket(ctx, 4, format!("{}^{}", pp(5, a), pp(4, b))),

            Expr::Neg(a) => bracket(ctx, 3, format!("-{}", pp(3, a))),

            Expr::Abs(a) => format!("abs({})", pp(0, a)),
            Expr::Sin(a) => format!("sin({})", pp(0, a)),
            Expr::Cos(a) => format!("cos({})", pp(0, a)),
            Expr::Tan(a) => format!("tan({})", pp(0, a)),
            Expr::Exp(a) => format!("exp({})", pp(0, a)),
            Expr::Log(a) => format!("log({})", pp(0, a)),
        }
    }

    pp(0, expr)
}

fn split_neg(expr: &Expr) -> (bool, Expr) {
    match expr {
        Expr::Neg(inner) => (true, *inner.clone()),
        Expr::Constant(r) if r.is_negative() => (true, Expr::Constant(-r)),
        other => (false, other.clone()),
    }
}

fn bracket(ctx: u8, prec: u8, body: String) -> String {
    if prec < ctx {
        format!("({body})")
    } else {
        body
    }
}

pub fn show_rational(r: &Rational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// LaTeX form of a rational, `-\frac{1}{2}` style.
pub fn latex_rational(r: &Rational) -> String {
    if r.is_integer() {
        return format!("{}", r.numer());
    }
    let sign = if r.is_negative() { "-" } else { "" };
    format!("{sign}\\frac{{{}}}{{{}}}", r.numer().abs(), r.denom())
}
