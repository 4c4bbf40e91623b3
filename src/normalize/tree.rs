//! Recursive-descent builder turning the token stream into a small tree.
//! Macros become nodes as soon as their arguments are read, so nested
//! `\frac`/`\sqrt` are expanded innermost first.

use crate::error::{AlgebraError, Result};
use crate::expr::RelOp;

use super::lexer::{Delim, Func, Spanned, Token};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Node {
    Number(String),
    Var(char),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Rel(RelOp),
    Group(Vec<Node>),
    Call(Func, Vec<Node>),
    Abs(Vec<Node>),
    Frac(Vec<Node>, Vec<Node>),
    Root {
        index: Option<Vec<Node>>,
        radicand: Vec<Node>,
    },
}

impl Node {
    /// Whether the node can stand on either side of an implicit product.
    pub(crate) fn is_operand(&self) -> bool {
        !matches!(
            self,
            Node::Plus | Node::Minus | Node::Star | Node::Slash | Node::Caret | Node::Rel(_)
        )
    }

    /// Operands that print without surrounding parentheses.
    pub(crate) fn is_atom(&self) -> bool {
        matches!(
            self,
            Node::Number(_) | Node::Var(_) | Node::Group(_) | Node::Call(..) | Node::Abs(_)
        )
    }
}

/// What ends the sequence currently being read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Closer {
    End,
    Delim(Delim, usize),
    Abs(usize),
    Pipe(usize),
}

pub(crate) fn build(tokens: &[Spanned]) -> Result<Vec<Node>> {
    let mut builder = Builder { tokens, pos: 0 };
    builder.sequence(Closer::End)
}

struct Builder<'t> {
    tokens: &'t [Spanned],
    pos: usize,
}

impl<'t> Builder<'t> {
    fn peek(&self) -> Option<&'t Spanned> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'t Spanned> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn sequence(&mut self, closer: Closer) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        loop {
            let Some(spanned) = self.next() else {
                return match closer {
                    Closer::End => Ok(nodes),
                    Closer::Delim(_, at) | Closer::Abs(at) | Closer::Pipe(at) => {
                        Err(self.stray(at))
                    }
                };
            };
            let at = self.pos - 1;
            let node = match &spanned.token {
                Token::Number(digits) => Node::Number(digits.clone()),
                Token::Letter(c) => Node::Var(*c),
                Token::Plus => Node::Plus,
                Token::Minus => Node::Minus,
                Token::Star => Node::Star,
                Token::Slash => Node::Slash,
                Token::Caret => Node::Caret,
                Token::Rel(op) => Node::Rel(*op),
                Token::Open(delim) => group(self.non_empty(Closer::Delim(*delim, at))?),
                Token::Close(delim) => match closer {
                    Closer::Delim(open, _) if open == *delim => return Ok(nodes),
                    _ => return Err(self.stray(at)),
                },
                Token::AbsOpen => Node::Abs(self.non_empty(Closer::Abs(at))?),
                Token::AbsClose => match closer {
                    Closer::Abs(_) => return Ok(nodes),
                    _ => return Err(self.stray(at)),
                },
                Token::Pipe => match closer {
                    Closer::Pipe(_) if nodes.last().is_some_and(Node::is_operand) => {
                        return Ok(nodes)
                    }
                    _ => Node::Abs(unwrap_group(self.sequence(Closer::Pipe(at))?)),
                },
                Token::Frac => {
                    let num = self.argument(at)?;
                    let den = self.argument(at)?;
                    Node::Frac(num, den)
                }
                Token::Sqrt => {
                    let index = match self.peek() {
                        Some(Spanned {
                            token: Token::Open(Delim::Bracket),
                            ..
                        }) => {
                            let open = self.pos;
                            self.pos += 1;
                            Some(self.non_empty(Closer::Delim(Delim::Bracket, open))?)
                        }
                        _ => None,
                    };
                    let radicand = self.argument(at)?;
                    Node::Root { index, radicand }
                }
                Token::Abs => Node::Abs(self.argument(at)?),
                Token::Func(func) => Node::Call(*func, self.argument(at)?),
            };
            nodes.push(node);
        }
    }

    /// A macro argument: a group of any kind, or a single number or letter.
    fn argument(&mut self, owner: usize) -> Result<Vec<Node>> {
        let Some(spanned) = self.next() else {
            return Err(self.stray(owner));
        };
        let at = self.pos - 1;
        match &spanned.token {
            Token::Open(delim) => self.non_empty(Closer::Delim(*delim, at)),
            Token::Number(digits) => Ok(vec![Node::Number(digits.clone())]),
            Token::Letter(c) => Ok(vec![Node::Var(*c)]),
            _ => Err(self.stray(owner)),
        }
    }

    fn non_empty(&mut self, closer: Closer) -> Result<Vec<Node>> {
        let start = self.pos;
        let nodes = unwrap_group(self.sequence(closer)?);
        if nodes.is_empty() {
            return Err(self.stray(start.saturating_sub(1)));
        }
        Ok(nodes)
    }

    fn stray(&self, index: usize) -> AlgebraError {
        match self.tokens.get(index) {
            Some(token) => AlgebraError::normalization(token.text.clone(), token.position),
            None => AlgebraError::normalization("", 0),
        }
    }
}

/// A parenthesized group, collapsed when it only wraps an atom.
fn group(nodes: Vec<Node>) -> Node {
    let mut nodes = unwrap_group(nodes);
    if nodes.len() == 1 && nodes[0].is_atom() {
        return nodes.remove(0);
    }
    Node::Group(nodes)
}

/// Drop grouping that wraps an entire sequence.
pub(crate) fn unwrap_group(mut nodes: Vec<Node>) -> Vec<Node> {
    while let [Node::Group(_)] = nodes.as_slice() {
        match nodes.pop() {
            Some(Node::Group(inner)) => nodes = inner,
            _ => break,
        }
    }
    nodes
}
