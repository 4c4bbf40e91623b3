use crate::exact::ExactValue;
use crate::sets::{Bound, Interval, RealSet};

struct Symbols {
    infinity: &'static str,
    union: &'static str,
    empty: &'static str,
    open_brace: &'static str,
    close_brace: &'static str,
    value: fn(&ExactValue) -> String,
}

const PLAIN: Symbols = Symbols {
    infinity: "∞",
    union: " ∪ ",
    empty: "∅",
    open_brace: "{",
    close_brace: "}",
    value: crate::format::value::plain,
};

const LATEX: Symbols = Symbols {
    infinity: "\\infty",
    union: " \\cup ",
    empty: "\\varnothing",
    open_brace: "\\{",
    close_brace: "\\}",
    value: crate::format::value::latex,
};

/// Interval notation, e.g. `(-∞,-2] ∪ [2,∞)` or `{-1, 4}`.
pub fn notation(set: &RealSet) -> String {
    render(set, &PLAIN)
}

pub fn latex(set: &RealSet) -> String {
    render(set, &LATEX)
}

fn render(set: &RealSet, sym: &Symbols) -> String {
    if set.is_empty() {
        return sym.empty.to_string();
    }
    let mut pieces: Vec<String> = Vec::new();
    let mut points: Vec<String> = Vec::new();
    for interval in set.intervals() {
        if let Some(p) = interval.as_point() {
            points.push((sym.value)(p));
            continue;
        }
        flush_points(&mut pieces, &mut points, sym);
        pieces.push(render_interval(interval, sym));
    }
    flush_points(&mut pieces, &mut points, sym);
    pieces.join(sym.union)
}

fn flush_points(pieces: &mut Vec<String>, points: &mut Vec<String>, sym: &Symbols) {
    if points.is_empty() {
        return;
    }
    pieces.push(format!(
        "{}{}{}",
        sym.open_brace,
        points.join(", "),
        sym.close_brace
    ));
    points.clear();
}

fn render_interval(interval: &Interval, sym: &Symbols) -> String {
    let lo = match &interval.lo {
        Bound::Unbounded => format!("(-{}", sym.infinity),
        Bound::Open(v) => format!("({}", (sym.value)(v)),
        Bound::Closed(v) => format!("[{}", (sym.value)(v)),
    };
    let hi = match &interval.hi {
        Bound::Unbounded => format!("{})", sym.infinity),
        Bound::Open(v) => format!("{})", (sym.value)(v)),
        Bound::Closed(v) => format!("{}]", (sym.value)(v)),
    };
    format!("{lo},{hi}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_line_and_empty_set() {
        assert_eq!(notation(&RealSet::all()), "(-∞,∞)");
        assert_eq!(notation(&RealSet::empty()), "∅");
        assert_eq!(latex(&RealSet::all()), "(-\\infty,\\infty)");
    }

    #[test]
    fn consecutive_points_share_braces() {
        let set = RealSet::from_points([ExactValue::integer(4), ExactValue::integer(-1)]);
        assert_eq!(notation(&set), "{-1, 4}");
        assert_eq!(latex(&set), "\\{-1, 4\\}");
    }
}
