//! The record handed back to callers and serialized for the serving layer.

use serde::Serialize;

use crate::exact::ExactValue;
use crate::sets::RealSet;
use crate::solver::ProblemClass;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    /// The expression vanishes here.
    Zero,
    /// A denominator vanishes here.
    Undefined,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CriticalPoint {
    pub value: ExactValue,
    pub multiplicity: usize,
    pub kind: PointKind,
    /// Whether the sign of the expression flips across this point.
    pub sign_change: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExclusionReason {
    /// Makes some denominator zero.
    ZeroDenominator,
    /// Introduced by squaring both sides.
    Extraneous,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Excluded {
    pub value: ExactValue,
    pub reason: ExclusionReason,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Sign {
    #[serde(rename = "+")]
    Positive,
    #[serde(rename = "-")]
    Negative,
    #[serde(rename = "0")]
    Zero,
}

impl Sign {
    pub fn from_ordering(ord: std::cmp::Ordering) -> Self {
        match ord {
            std::cmp::Ordering::Less => Sign::Negative,
            std::cmp::Ordering::Equal => Sign::Zero,
            std::cmp::Ordering::Greater => Sign::Positive,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Sign::Positive => "+",
            Sign::Negative => "-",
            Sign::Zero => "0",
        }
    }
}

/// One open interval of a sign chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignRow {
    pub interval: String,
    pub sign: Sign,
    pub satisfies: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum Status {
    Solved,
    Unsolvable { reason: String },
    Domain { reason: String },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Plot {
    pub xs: Vec<f64>,
    /// `None` where the curve is undefined.
    pub ys: Vec<Option<f64>>,
    pub solution_markers: Vec<f64>,
    pub critical_markers: Vec<f64>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Solution {
    pub input: String,
    /// The parsed relation printed back.
    pub relation: String,
    pub variable: String,
    pub class: ProblemClass,
    /// Ascending solutions of an equation, or the critical values of an inequality.
    pub solutions: Vec<ExactValue>,
    pub critical_points: Vec<CriticalPoint>,
    pub interval_notation: String,
    pub interval_latex: String,
    pub solution_set: RealSet,
    pub excluded: Vec<Excluded>,
    pub sign_chart: Vec<SignRow>,
    pub factored: Option<String>,
    pub degree: Option<usize>,
    pub complex_roots: Vec<String>,
    pub status: Status,
    pub plot: Option<Plot>,
}

impl Solution {
    pub fn is_solved(&self) -> bool {
        self.status == Status::Solved
    }

    /// Critical values in ascending order.
    pub fn critical_values(&self) -> Vec<ExactValue> {
        self.critical_points.iter().map(|c| c.value.clone()).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn summary(&self) -> Vec<String> {
        crate::format::solve::solve_summary(self)
    }
}
