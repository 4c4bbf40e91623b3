//! Canonicalize loosely written LaTeX-flavored notation into the plain
//! syntax the expression parser accepts.
//!
//! The pipeline is lexer → tree → emitter. `\frac`, `\sqrt` and every
//! absolute-value spelling are resolved while the tree is built; implicit
//! multiplication and spacing are decided on emission. The output is a fixed
//! point: normalizing it again returns the same string.

mod emit;
mod lexer;
mod tree;

use tracing::debug;

use crate::error::Result;

/// Normalize raw notation, e.g. `\frac{\sqrt{x-1}}{x+2}` becomes
/// `((x - 1)^(1/2))/(x + 2)` and `|2x-3|=5` becomes `abs(2*x - 3) = 5`.
pub fn normalize(raw: &str) -> Result<String> {
    let tokens = lexer::tokenize(raw)?;
    let nodes = tree::build(&tokens)?;
    let normalized = emit::emit(&nodes);
    debug!(raw, normalized = %normalized, "normalized notation");
    Ok(normalized)
}
