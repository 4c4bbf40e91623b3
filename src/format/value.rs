use crate::exact::{ExactValue, Surd};
use crate::format::expr::{latex_rational, show_rational};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

pub fn plain(value: &ExactValue) -> String {
    match value {
        ExactValue::Rational(r) => show_rational(r),
        ExactValue::Surd(s) => plain_surd(s),
        ExactValue::Root(root) => {
            format!("RootOf({}, {})", root.poly().display("x"), root.index())
        }
    }
}

pub fn latex(value: &ExactValue) -> String {
    match value {
        ExactValue::Rational(r) => latex_rational(r),
        ExactValue::Surd(s) => latex_surd(s),
        ExactValue::Root(root) => format!(
            "\\operatorname{{RootOf}}({}, {})",
            root.poly().display("x"),
            root.index()
        ),
    }
}

/// `a + b*sqrt(d)` over a common denominator: integers `A`, `B` and `L`.
fn common_denominator(s: &Surd) -> (BigInt, BigInt, BigInt) {
    let l = s.a.denom().lcm(s.b.denom());
    let a = s.a.numer() * (&l / s.a.denom());
    let b = s.b.numer() * (&l / s.b.denom());
    (a, b, l)
}

fn radical_term(b: &BigInt, d: &BigInt) -> String {
    let magnitude = b.abs();
    if magnitude.is_one() {
        format!("sqrt({d})")
    } else {
        format!("{magnitude}*sqrt({d})")
    }
}

fn plain_surd(s: &Surd) -> String {
    let (a, b, l) = common_denominator(s);
    let term = radical_term(&b, &s.d);
    let numerator = if a.is_zero() {
        if b.is_negative() {
            format!("-{term}")
        } else {
            term
        }
    } else {
        let sign = if b.is_negative() { "-" } else { "+" };
        format!("{a} {sign} {term}")
    };
    if l.is_one() {
        numerator
    } else if a.is_zero() {
        format!("{numerator}/{l}")
    } else {
        format!("({numerator})/{l}")
    }
}

fn latex_surd(s: &Surd) -> String {
    let (a, b, l) = common_denominator(s);
    let magnitude = b.abs();
    let term = if magnitude.is_one() {
        format!("\\sqrt{{{}}}", s.d)
    } else {
        format!("{magnitude}\\sqrt{{{}}}", s.d)
    };
    let numerator = if a.is_zero() {
        term
    } else {
        let sign = if b.is_negative() { "-" } else { "+" };
        format!("{a} {sign} {term}")
    };
    let lead = if a.is_zero() && b.is_negative() { "-" } else { "" };
    if l.is_one() {
        format!("{lead}{numerator}")
    } else {
        format!("{lead}\\frac{{{numerator}}}{{{l}}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Rational;

    fn q(n: i64, d: i64) -> Rational {
        Rational::new(n.into(), d.into())
    }

    #[test]
    fn surds_render_over_common_denominator() {
        let golden = ExactValue::surd(q(3, 2), q(1, 2), &q(5, 1));
        assert_eq!(plain(&golden), "(3 + sqrt(5))/2");
        assert_eq!(latex(&golden), "\\frac{3 + \\sqrt{5}}{2}");

        let negative = ExactValue::surd(q(0, 1), q(-3, 2), &q(2, 1));
        assert_eq!(plain(&negative), "-3*sqrt(2)/2");

        let simple = ExactValue::surd(q(1, 1), q(-1, 1), &q(2, 1));
        assert_eq!(plain(&simple), "1 - sqrt(2)");
    }

    #[test]
    fn fractions_render_reduced() {
        assert_eq!(plain(&ExactValue::fraction(6, -4)), "-3/2");
        assert_eq!(latex(&ExactValue::fraction(-3, 2)), "-\\frac{3}{2}");
    }
}
