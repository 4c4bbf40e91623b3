//! Exact algebra engine: normalize loosely written LaTeX-flavored notation,
//! then classify and solve single-variable equations and inequalities over
//! the reals without floating point.

pub mod error;
pub mod exact;
pub mod expr;
pub mod factor;
pub mod format;
pub mod normalize;
pub mod options;
pub mod parser;
pub mod polynomial;
pub mod prelude;
pub mod roots;
pub mod sets;
pub mod solution;
pub mod solver;

pub use error::{AlgebraError, Result};
pub use exact::{AlgebraicRoot, ExactValue, Surd};
pub use expr::{Expr, Rational, RelOp, Relation};
pub use factor::{factor, Factorization};
pub use format::{pretty, solve_summary};
pub use normalize::normalize;
pub use options::SolveOptions;
pub use parser::{parse_expr, parse_relation};
pub use polynomial::Poly;
pub use prelude::{solve_notation, solve_notation_with};
pub use roots::{real_roots, PolyRoots, Root};
pub use sets::{Bound, Interval, RealSet};
pub use solution::{
    CriticalPoint, ExclusionReason, Excluded, Plot, PointKind, Sign, SignRow, Solution, Status,
};
pub use solver::{classify, solve, solve_with, Problem, ProblemClass, RationalFunction};
