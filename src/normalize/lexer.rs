//! Tokens of the loose notation. Every token remembers the character
//! position it started at so errors can point back into the raw input.

use nom::branch::alt;
use nom::bytes::complete::{tag, take};
use nom::character::complete::{alpha1, char, digit1, multispace0, multispace1};
use nom::combinator::{map, opt, recognize, value};
use nom::sequence::{pair, preceded};
use nom::IResult;

use crate::error::{AlgebraError, Result};
use crate::expr::RelOp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Delim {
    Paren,
    Bracket,
    Brace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Func {
    Sin,
    Cos,
    Tan,
    Exp,
    Log,
}

impl Func {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Exp => "exp",
            Func::Log => "log",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Token {
    Number(String),
    Letter(char),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Rel(RelOp),
    Open(Delim),
    Close(Delim),
    /// `\lvert`, `\left|`
    AbsOpen,
    /// `\rvert`, `\right|`
    AbsClose,
    /// `|` or `\vert`, direction decided by the tree builder
    Pipe,
    Frac,
    Sqrt,
    Abs,
    Func(Func),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub position: usize,
    pub text: String,
}

impl Spanned {
    fn new(token: Token, position: usize, text: impl Into<String>) -> Self {
        Spanned {
            token,
            position,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug)]
enum Lexeme<'a> {
    Space,
    Token(Token),
    Letters(&'a str),
    Command(&'a str),
}

// Keywords recognized inside bare letter runs.
const BARE_WORDS: [(&str, Token); 13] = [
    ("dfrac", Token::Frac),
    ("tfrac", Token::Frac),
    ("lvert", Token::AbsOpen),
    ("rvert", Token::AbsClose),
    ("frac", Token::Frac),
    ("sqrt", Token::Sqrt),
    ("abs", Token::Abs),
    ("sin", Token::Func(Func::Sin)),
    ("cos", Token::Func(Func::Cos)),
    ("tan", Token::Func(Func::Tan)),
    ("exp", Token::Func(Func::Exp)),
    ("log", Token::Func(Func::Log)),
    ("ln", Token::Func(Func::Log)),
];

pub(crate) fn tokenize(input: &str) -> Result<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        let position = position_of(input, rest);
        let Ok((next, lexeme)) = lexeme(rest) else {
            let offending: String = rest.chars().take(1).collect();
            return Err(AlgebraError::normalization(offending, position));
        };
        let text = &rest[..rest.len() - next.len()];
        rest = next;
        match lexeme {
            Lexeme::Space => {}
            Lexeme::Token(token) => tokens.push(Spanned::new(token, position, text)),
            Lexeme::Letters(run) => split_letters(run, position, &mut tokens),
            Lexeme::Command(side @ ("left" | "right")) => {
                let Some((after, token)) = sized_delimiter(side, rest) else {
                    return Err(AlgebraError::normalization(text, position));
                };
                let consumed = &rest[..rest.len() - after.len()];
                if let Some(token) = token {
                    tokens.push(Spanned::new(token, position, format!("{text}{consumed}")));
                }
                rest = after;
            }
            Lexeme::Command(name) => match command(name) {
                Some(Some(token)) => tokens.push(Spanned::new(token, position, text)),
                Some(None) => {}
                None => return Err(AlgebraError::normalization(text, position)),
            },
        }
    }
    Ok(tokens)
}

fn position_of(input: &str, rest: &str) -> usize {
    input[..input.len() - rest.len()].chars().count()
}

fn lexeme(input: &str) -> IResult<&str, Lexeme<'_>> {
    alt((
        value(Lexeme::Space, multispace1),
        map(
            recognize(pair(digit1, opt(pair(char('.'), digit1)))),
            |digits: &str| Lexeme::Token(Token::Number(digits.to_string())),
        ),
        map(recognize(pair(char('.'), digit1)), |digits: &str| {
            Lexeme::Token(Token::Number(format!("0{digits}")))
        }),
        map(alpha1, Lexeme::Letters),
        map(preceded(char('\\'), alt((alpha1, take(1usize)))), Lexeme::Command),
        map(symbol, Lexeme::Token),
    ))(input)
}

fn symbol(input: &str) -> IResult<&str, Token> {
    alt((
        alt((
            value(Token::Rel(RelOp::Le), alt((tag("<="), tag("≤")))),
            value(Token::Rel(RelOp::Ge), alt((tag(">="), tag("≥")))),
            value(Token::Rel(RelOp::Eq), alt((tag("=="), tag("=")))),
            value(Token::Rel(RelOp::Lt), tag("<")),
            value(Token::Rel(RelOp::Gt), tag(">")),
        )),
        alt((
            value(Token::Plus, char('+')),
            value(Token::Minus, alt((char('-'), char('−')))),
            value(Token::Star, alt((char('*'), char('·'), char('×')))),
            value(Token::Slash, alt((char('/'), char('÷')))),
            value(Token::Caret, char('^')),
        )),
        alt((
            value(Token::Open(Delim::Paren), char('(')),
            value(Token::Close(Delim::Paren), char(')')),
            value(Token::Open(Delim::Bracket), char('[')),
            value(Token::Close(Delim::Bracket), char(']')),
            value(Token::Open(Delim::Brace), char('{')),
            value(Token::Close(Delim::Brace), char('}')),
            value(Token::Pipe, char('|')),
        )),
    ))(input)
}

/// The delimiter after `\left` or `\right`; the null delimiter `.` yields
/// no token.
fn sized_delimiter<'a>(side: &str, input: &'a str) -> Option<(&'a str, Option<Token>)> {
    let opening = side == "left";
    let (input, _) = multispace0::<_, nom::error::Error<&str>>(input).ok()?;
    let parsed: IResult<&str, Option<Token>> = if opening {
        alt((
            value(Some(Token::Open(Delim::Paren)), char('(')),
            value(Some(Token::Open(Delim::Bracket)), char('[')),
            value(
                Some(Token::AbsOpen),
                alt((tag("|"), tag("\\lvert"), tag("\\vert"))),
            ),
            value(None, char('.')),
        ))(input)
    } else {
        alt((
            value(Some(Token::Close(Delim::Paren)), char(')')),
            value(Some(Token::Close(Delim::Bracket)), char(']')),
            value(
                Some(Token::AbsClose),
                alt((tag("|"), tag("\\rvert"), tag("\\vert"))),
            ),
            value(None, char('.')),
        ))(input)
    };
    parsed.ok()
}

/// `None` for an unknown command, `Some(None)` for spacing commands.
fn command(name: &str) -> Option<Option<Token>> {
    let token = match name {
        "frac" | "dfrac" | "tfrac" => Token::Frac,
        "sqrt" => Token::Sqrt,
        "abs" => Token::Abs,
        "lvert" => Token::AbsOpen,
        "rvert" => Token::AbsClose,
        "vert" | "mid" => Token::Pipe,
        "sin" => Token::Func(Func::Sin),
        "cos" => Token::Func(Func::Cos),
        "tan" => Token::Func(Func::Tan),
        "exp" => Token::Func(Func::Exp),
        "log" | "ln" => Token::Func(Func::Log),
        "cdot" | "times" => Token::Star,
        "div" => Token::Slash,
        "le" | "leq" => Token::Rel(RelOp::Le),
        "ge" | "geq" => Token::Rel(RelOp::Ge),
        "lt" => Token::Rel(RelOp::Lt),
        "gt" => Token::Rel(RelOp::Gt),
        "," | ";" | ":" | "!" | " " | "quad" | "qquad" => return Some(None),
        _ => return None,
    };
    Some(Some(token))
}

/// Split a letter run into keywords and single-letter variables.
fn split_letters(run: &str, position: usize, tokens: &mut Vec<Spanned>) {
    let mut offset = 0;
    while offset < run.len() {
        let rest = &run[offset..];
        let keyword = BARE_WORDS
            .iter()
            .find(|(word, _)| rest.starts_with(word));
        let (token, len) = match keyword {
            Some((word, token)) => (token.clone(), word.len()),
            // alpha1 only accepts ASCII letters, so one byte is one char
            None => (Token::Letter(char::from(run.as_bytes()[offset])), 1),
        };
        tokens.push(Spanned::new(token, position + offset, &rest[..len]));
        offset += len;
    }
}
