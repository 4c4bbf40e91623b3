use super::tree::Node;

/// Print a node sequence in the canonical spelling the parser reads.
pub(crate) fn emit(nodes: &[Node]) -> String {
    let mut out = String::new();
    sequence(nodes, &mut out);
    out
}

fn sequence(nodes: &[Node], out: &mut String) {
    let mut prev: Option<&Node> = None;
    for (i, node) in nodes.iter().enumerate() {
        let next = nodes.get(i + 1);
        match node {
            Node::Plus | Node::Minus => {
                let symbol = if *node == Node::Plus { "+" } else { "-" };
                if prev.is_some_and(Node::is_operand) {
                    out.push(' ');
                    out.push_str(symbol);
                    out.push(' ');
                } else {
                    out.push_str(symbol);
                }
            }
            Node::Star => out.push('*'),
            Node::Slash => out.push('/'),
            Node::Caret => out.push('^'),
            Node::Rel(op) => {
                out.push(' ');
                out.push_str(op.symbol());
                out.push(' ');
            }
            operand => {
                if prev.is_some_and(Node::is_operand) {
                    out.push('*');
                }
                emit_operand(operand, prev, next, out);
            }
        }
        prev = Some(node);
    }
}

fn emit_operand(node: &Node, prev: Option<&Node>, next: Option<&Node>, out: &mut String) {
    let followed_by_power = next == Some(&Node::Caret);
    match node {
        Node::Number(digits) => out.push_str(digits),
        Node::Var(c) => out.push(*c),
        Node::Group(inner) => parenthesized(inner, out),
        Node::Call(func, arg) => {
            out.push_str(func.name());
            parenthesized(arg, out);
        }
        Node::Abs(inner) => {
            out.push_str("abs");
            parenthesized(inner, out);
        }
        Node::Frac(num, den) => {
            let wrap = followed_by_power || matches!(prev, Some(Node::Slash | Node::Caret));
            wrapped(wrap, out, |out| {
                factor(num, out);
                out.push('/');
                factor(den, out);
            });
        }
        Node::Root { index, radicand } => wrapped(followed_by_power, out, |out| {
            factor(radicand, out);
            out.push_str("^(1/");
            match index {
                Some(index) => factor(index, out),
                None => out.push('2'),
            }
            out.push(')');
        }),
        Node::Plus | Node::Minus | Node::Star | Node::Slash | Node::Caret | Node::Rel(_) => {}
    }
}

fn parenthesized(nodes: &[Node], out: &mut String) {
    out.push('(');
    sequence(nodes, out);
    out.push(')');
}

/// A macro operand: bare when it is a single atom, parenthesized otherwise.
fn factor(nodes: &[Node], out: &mut String) {
    match nodes {
        [single] if single.is_atom() => sequence(nodes, out),
        _ => parenthesized(nodes, out),
    }
}

fn wrapped(wrap: bool, out: &mut String, body: impl FnOnce(&mut String)) {
    if wrap {
        out.push('(');
    }
    body(out);
    if wrap {
        out.push(')');
    }
}
