//! Formatting helpers for rendering expressions and solver output.

pub mod expr;
pub mod interval;
pub mod plot;
pub mod solve;
pub mod value;

pub use expr::{latex_rational, pretty, show_rational};
pub use solve::solve_summary;
