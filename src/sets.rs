//! Subsets of the real line as sorted, disjoint unions of intervals.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::exact::ExactValue;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Bound {
    Unbounded,
    Open(ExactValue),
    Closed(ExactValue),
}

impl Bound {
    pub fn value(&self) -> Option<&ExactValue> {
        match self {
            Bound::Unbounded => None,
            Bound::Open(v) | Bound::Closed(v) => Some(v),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Bound::Closed(_))
    }
}

/// Order two lower bounds by where they start.
fn cmp_lower(a: &Bound, b: &Bound) -> Ordering {
    match (a, b) {
        (Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
        (Bound::Unbounded, _) => Ordering::Less,
        (_, Bound::Unbounded) => Ordering::Greater,
        _ => match (a.value(), b.value()) {
            (Some(x), Some(y)) => x
                .cmp(y)
                .then_with(|| b.is_closed().cmp(&a.is_closed())),
            _ => Ordering::Equal,
        },
    }
}

/// Order two upper bounds by where they end.
fn cmp_upper(a: &Bound, b: &Bound) -> Ordering {
    match (a, b) {
        (Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
        (Bound::Unbounded, _) => Ordering::Greater,
        (_, Bound::Unbounded) => Ordering::Less,
        _ => match (a.value(), b.value()) {
            (Some(x), Some(y)) => x
                .cmp(y)
                .then_with(|| a.is_closed().cmp(&b.is_closed())),
            _ => Ordering::Equal,
        },
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub lo: Bound,
    pub hi: Bound,
}

impl Interval {
    pub fn new(lo: Bound, hi: Bound) -> Self {
        Interval { lo, hi }
    }

    pub fn point(value: ExactValue) -> Self {
        Interval::new(Bound::Closed(value.clone()), Bound::Closed(value))
    }

    pub fn open(lo: ExactValue, hi: ExactValue) -> Self {
        Interval::new(Bound::Open(lo), Bound::Open(hi))
    }

    pub fn is_empty(&self) -> bool {
        match (self.lo.value(), self.hi.value()) {
            (Some(lo), Some(hi)) => match lo.cmp(hi) {
                Ordering::Greater => true,
                Ordering::Equal => !(self.lo.is_closed() && self.hi.is_closed()),
                Ordering::Less => false,
            },
            _ => false,
        }
    }

    /// A degenerate `[a, a]`.
    pub fn as_point(&self) -> Option<&ExactValue> {
        match (&self.lo, &self.hi) {
            (Bound::Closed(a), Bound::Closed(b)) if a == b => Some(a),
            _ => None,
        }
    }

    pub fn contains(&self, x: &ExactValue) -> bool {
        let above_lo = match &self.lo {
            Bound::Unbounded => true,
            Bound::Open(v) => x > v,
            Bound::Closed(v) => x >= v,
        };
        let below_hi = match &self.hi {
            Bound::Unbounded => true,
            Bound::Open(v) => x < v,
            Bound::Closed(v) => x <= v,
        };
        above_lo && below_hi
    }

    fn intersect(&self, other: &Interval) -> Interval {
        let lo = if cmp_lower(&self.lo, &other.lo) == Ordering::Less {
            other.lo.clone()
        } else {
            self.lo.clone()
        };
        let hi = if cmp_upper(&self.hi, &other.hi) == Ordering::Greater {
            other.hi.clone()
        } else {
            self.hi.clone()
        };
        Interval { lo, hi }
    }

    /// `next` starts no earlier than `self`; do they overlap or touch?
    fn joins(&self, next: &Interval) -> bool {
        let (Some(end), Some(start)) = (self.hi.value(), next.lo.value()) else {
            return true;
        };
        match start.cmp(end) {
            Ordering::Less => true,
            Ordering::Equal => self.hi.is_closed() || next.lo.is_closed(),
            Ordering::Greater => false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RealSet {
    intervals: Vec<Interval>,
}

impl RealSet {
    pub fn empty() -> Self {
        RealSet::default()
    }

    pub fn all() -> Self {
        RealSet {
            intervals: vec![Interval::new(Bound::Unbounded, Bound::Unbounded)],
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = ExactValue>) -> Self {
        RealSet::from_intervals(points.into_iter().map(Interval::point))
    }

    /// Sort, drop empties and merge overlapping or touching pieces.
    pub fn from_intervals(pieces: impl IntoIterator<Item = Interval>) -> Self {
        let mut pieces: Vec<Interval> = pieces.into_iter().filter(|i| !i.is_empty()).collect();
        pieces.sort_by(|a, b| cmp_lower(&a.lo, &b.lo));
        let mut intervals: Vec<Interval> = Vec::with_capacity(pieces.len());
        for piece in pieces {
            match intervals.last_mut() {
                Some(last) if last.joins(&piece) => {
                    if cmp_upper(&piece.hi, &last.hi) == Ordering::Greater {
                        last.hi = piece.hi;
                    }
                }
                _ => intervals.push(piece),
            }
        }
        RealSet { intervals }
    }

    /// Everything except the given points.
    pub fn all_except(points: impl IntoIterator<Item = ExactValue>) -> Self {
        let mut points: Vec<ExactValue> = points.into_iter().collect();
        points.sort();
        points.dedup();
        let mut pieces = Vec::with_capacity(points.len() + 1);
        let mut lo = Bound::Unbounded;
        for p in points {
            pieces.push(Interval::new(lo, Bound::Open(p.clone())));
            lo = Bound::Open(p);
        }
        pieces.push(Interval::new(lo, Bound::Unbounded));
        RealSet::from_intervals(pieces)
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn is_all(&self) -> bool {
        matches!(
            self.intervals.as_slice(),
            [Interval {
                lo: Bound::Unbounded,
                hi: Bound::Unbounded
            }]
        )
    }

    /// Whether the set is a finite list of points.
    pub fn is_finite(&self) -> bool {
        self.intervals.iter().all(|i| i.as_point().is_some())
    }

    pub fn points(&self) -> Vec<ExactValue> {
        self.intervals
            .iter()
            .filter_map(|i| i.as_point().cloned())
            .collect()
    }

    pub fn contains(&self, x: &ExactValue) -> bool {
        self.intervals.iter().any(|i| i.contains(x))
    }

    pub fn union(&self, other: &RealSet) -> RealSet {
        RealSet::from_intervals(self.intervals.iter().chain(other.intervals.iter()).cloned())
    }

    pub fn intersection(&self, other: &RealSet) -> RealSet {
        let mut pieces = Vec::new();
        for a in &self.intervals {
            for b in &other.intervals {
                pieces.push(a.intersect(b));
            }
        }
        RealSet::from_intervals(pieces)
    }

    /// Finite endpoints in ascending order, each listed once.
    pub fn boundary(&self) -> Vec<ExactValue> {
        let mut out: Vec<ExactValue> = self
            .intervals
            .iter()
            .flat_map(|i| [i.lo.value().cloned(), i.hi.value().cloned()])
            .flatten()
            .collect();
        out.dedup();
        out
    }
}

impl fmt::Display for RealSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::interval::notation(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: i64) -> ExactValue {
        ExactValue::integer(n)
    }

    #[test]
    fn touching_open_and_closed_pieces_merge() {
        let set = RealSet::from_intervals([
            Interval::open(v(0), v(1)),
            Interval::point(v(1)),
            Interval::new(Bound::Open(v(1)), Bound::Closed(v(3))),
        ]);
        assert_eq!(
            set.intervals(),
            &[Interval::new(Bound::Open(v(0)), Bound::Closed(v(3)))]
        );
    }

    #[test]
    fn open_pieces_sharing_an_endpoint_stay_apart() {
        let set = RealSet::from_intervals([Interval::open(v(0), v(1)), Interval::open(v(1), v(2))]);
        assert_eq!(set.intervals().len(), 2);
        assert!(!set.contains(&v(1)));
    }

    #[test]
    fn all_except_punches_holes() {
        let set = RealSet::all_except([v(2), v(-1), v(2)]);
        assert_eq!(set.intervals().len(), 3);
        assert!(set.contains(&v(0)));
        assert!(!set.contains(&v(-1)));
    }
}
