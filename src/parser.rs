use crate::error::{AlgebraError, Result};
use crate::expr::{half, Expr, Rational, RelOp, Relation};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, alphanumeric0, char, digit1, multispace0};
use nom::combinator::{all_consuming, map, opt, recognize};
use nom::error::VerboseError;
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, preceded};
use nom::IResult;
use num_bigint::BigInt;
use num_traits::{Num, One, Zero};

type Res<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Parse a normalized statement. A missing comparison means `expr = 0`.
pub fn parse_relation(input: &str) -> Result<Relation> {
    match all_consuming(ws(relation))(input) {
        Ok((_, rel)) => Ok(rel),
        Err(e) => Err(parse_error(input, e)),
    }
}

/// Parse a bare expression without any comparison operator.
pub fn parse_expr(input: &str) -> Result<Expr> {
    match all_consuming(ws(parse_add_sub))(input) {
        Ok((_, expr)) => Ok(expr),
        Err(e) => Err(parse_error(input, e)),
    }
}

fn parse_error(input: &str, err: nom::Err<VerboseError<&str>>) -> AlgebraError {
    let rest = match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e
            .errors
            .iter()
            .map(|(slice, _)| *slice)
            .min_by_key(|slice| slice.len())
            .unwrap_or(input),
        nom::Err::Incomplete(_) => "",
    };
    let offset = input.len().saturating_sub(rest.len());
    let position = input[..offset].chars().count();
    let snippet: String = rest.trim_start().chars().take(16).collect();
    let message = if snippet.is_empty() {
        "unexpected end of input".to_string()
    } else {
        format!("unexpected `{snippet}`")
    };
    AlgebraError::Parse { position, message }
}

fn relation(input: &str) -> Res<'_, Relation> {
    let (rest, lhs) = parse_add_sub(input)?;
    let (rest, tail) = opt(pair(ws(comparison), parse_add_sub))(rest)?;
    let rel = match tail {
        Some((op, rhs)) => Relation::new(lhs, op, rhs),
        None => Relation::new(lhs, RelOp::Eq, crate::expr::zero()),
    };
    Ok((rest, rel))
}

fn comparison(input: &str) -> Res<'_, RelOp> {
    alt((
        map(tag("<="), |_| RelOp::Le),
        map(tag(">="), |_| RelOp::Ge),
        map(tag("=="), |_| RelOp::Eq),
        map(char('='), |_| RelOp::Eq),
        map(char('<'), |_| RelOp::Lt),
        map(char('>'), |_| RelOp::Gt),
    ))(input)
}

fn parse_add_sub(input: &str) -> Res<'_, Expr> {
    let (rest, init) = parse_mul_div(input)?;
    fold_many0(
        pair(ws(alt((char('+'), char('-')))), parse_mul_div),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Expr::Add(acc.boxed(), rhs.boxed()),
            _ => Expr::Sub(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

fn parse_mul_div(input: &str) -> Res<'_, Expr> {
    let (rest, init) = parse_unary(input)?;
    fold_many0(
        pair(ws(alt((char('*'), char('/')))), parse_unary),
        move || init.clone(),
        |acc, (op, rhs)| match (op, acc, rhs) {
            ('*', acc, rhs) => Expr::Mul(acc.boxed(), rhs.boxed()),
            // fold literal fractions so `1/2` is a single exact constant
            (_, Expr::Constant(a), Expr::Constant(b)) if !b.is_zero() => Expr::Constant(a / b),
            (_, acc, rhs) => Expr::Div(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

// Unary minus binds looser than `^`, so `-x^2` is `-(x^2)`.
fn parse_unary(input: &str) -> Res<'_, Expr> {
    if let Ok((rest, expr)) = preceded(ws(char('-')), parse_unary)(input) {
        Ok((rest, negate(expr)))
    } else if let Ok((rest, expr)) = preceded(ws(char('+')), parse_unary)(input) {
        Ok((rest, expr))
    } else {
        parse_pow(input)
    }
}

fn parse_pow(input: &str) -> Res<'_, Expr> {
    let (rest, base) = parse_primary(input)?;
    if let Ok((next, exp)) = preceded(ws(char('^')), parse_exponent)(rest) {
        Ok((next, Expr::Pow(base.boxed(), exp.boxed())))
    } else {
        Ok((rest, base))
    }
}

fn parse_exponent(input: &str) -> Res<'_, Expr> {
    if let Ok((rest, expr)) = preceded(ws(char('-')), parse_exponent)(input) {
        Ok((rest, negate(expr)))
    } else {
        parse_pow(input)
    }
}

fn negate(expr: Expr) -> Expr {
    match expr {
        Expr::Constant(c) => Expr::Constant(-c),
        other => Expr::Neg(other.boxed()),
    }
}

fn parse_primary(input: &str) -> Res<'_, Expr> {
    alt((parse_parens, parse_function, parse_number, parse_identifier))(input)
}

fn parse_parens(input: &str) -> Res<'_, Expr> {
    delimited(ws(char('(')), parse_add_sub, ws(char(')')))(input)
}

fn parse_function(input: &str) -> Res<'_, Expr> {
    let (rest, (name, arg)) = pair(
        ws(alt((
            tag("abs"),
            tag("sqrt"),
            tag("sin"),
            tag("cos"),
            tag("tan"),
            tag("exp"),
            tag("log"),
            tag("ln"),
        ))),
        parse_parens,
    )(input)?;

    let expr = match name {
        "abs" => Expr::Abs(arg.boxed()),
        "sqrt" => Expr::Pow(arg.boxed(), Expr::Constant(half()).boxed()),
        "sin" => Expr::Sin(arg.boxed()),
        "cos" => Expr::Cos(arg.boxed()),
        "tan" => Expr::Tan(arg.boxed()),
        "exp" => Expr::Exp(arg.boxed()),
        _ => Expr::Log(arg.boxed()),
    };

    Ok((rest, expr))
}

fn parse_number(input: &str) -> Res<'_, Expr> {
    map(
        ws(pair(digit1, opt(preceded(char('.'), digit1)))),
        |(whole, frac): (&str, Option<&str>)| Expr::Constant(decimal(whole, frac)),
    )(input)
}

fn decimal(whole: &str, frac: Option<&str>) -> Rational {
    let digits = match frac {
        Some(f) => format!("{whole}{f}"),
        None => whole.to_string(),
    };
    // digit1 guarantees a non-empty run of ASCII digits
    let numer = BigInt::from_str_radix(&digits, 10).unwrap_or_default();
    let scale = frac.map(|f| f.len()).unwrap_or(0);
    let mut denom = BigInt::one();
    for _ in 0..scale {
        denom *= 10;
    }
    Rational::new(numer, denom)
}

fn parse_identifier(input: &str) -> Res<'_, Expr> {
    map(ws(recognize(pair(alpha1, alphanumeric0))), |s: &str| {
        Expr::Variable(s.to_string())
    })(input)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> Res<'a, O>
where
    F: FnMut(&'a str) -> Res<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}

