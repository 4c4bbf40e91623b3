use crate::expr::Expr;
use crate::options::{SolveOptions, MAX_PLOT_SAMPLES};
use crate::polynomial::rational_to_f64;
use crate::solution::Plot;

const DEFAULT_HALF_WIDTH: f64 = 10.0;

/// Sample `expr` around the interesting points for the plotting UI.
pub fn sample(
    expr: &Expr,
    var: &str,
    solution_markers: Vec<f64>,
    critical_markers: Vec<f64>,
    options: &SolveOptions,
) -> Option<Plot> {
    let samples = options.plot_samples.min(MAX_PLOT_SAMPLES);
    if samples < 2 {
        return None;
    }
    let (lo, hi) = window(&solution_markers, &critical_markers, options.plot_padding);
    let step = (hi - lo) / (samples - 1) as f64;
    let xs: Vec<f64> = (0..samples)
        .map(|i| lo + step * i as f64)
        .collect();
    let ys = xs.iter().map(|x| eval(expr, var, *x)).collect();
    Some(Plot {
        xs,
        ys,
        solution_markers,
        critical_markers,
    })
}

fn window(solutions: &[f64], critical: &[f64], padding: f64) -> (f64, f64) {
    let mut marks = solutions.iter().chain(critical).filter(|v| v.is_finite());
    let Some(first) = marks.next() else {
        return (-DEFAULT_HALF_WIDTH, DEFAULT_HALF_WIDTH);
    };
    let (min, max) = marks.fold((*first, *first), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    let padding = padding.abs().max(1.0);
    (min - padding, max + padding)
}

/// Floating-point value of `expr` at `var = x`, `None` where undefined.
pub fn eval(expr: &Expr, var: &str, x: f64) -> Option<f64> {
    let value = match expr {
        Expr::Variable(v) if v == var => x,
        Expr::Variable(_) => return None,
        Expr::Constant(c) => rational_to_f64(c),
        Expr::Add(a, b) => eval(a, var, x)? + eval(b, var, x)?,
        Expr::Sub(a, b) => eval(a, var, x)? - eval(b, var, x)?,
        Expr::Mul(a, b) => eval(a, var, x)? * eval(b, var, x)?,
        Expr::Div(a, b) => {
            let den = eval(b, var, x)?;
            if den == 0.0 {
                return None;
            }
            eval(a, var, x)? / den
        }
        Expr::Pow(a, b) => {
            let base = eval(a, var, x)?;
            let exp = eval(b, var, x)?;
            if exp.fract() == 0.0 && exp.abs() <= i32::MAX as f64 {
                base.powi(exp as i32)
            } else {
                base.powf(exp)
            }
        }
        Expr::Neg(a) => -eval(a, var, x)?,
        Expr::Abs(a) => eval(a, var, x)?.abs(),
        Expr::Sin(a) => eval(a, var, x)?.sin(),
        Expr::Cos(a) => eval(a, var, x)?.cos(),
        Expr::Tan(a) => eval(a, var, x)?.tan(),
        Expr::Exp(a) => eval(a, var, x)?.exp(),
        Expr::Log(a) => eval(a, var, x)?.ln(),
    };
    value.is_finite().then_some(value)
}
