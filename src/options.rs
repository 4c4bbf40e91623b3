//! Solver configuration.
//!
//! The serving layer forwards options as JSON, so every field has a default and
//! unknown fields are rejected.

use serde::Deserialize;

use crate::error::Result;

/// Upper bound on plot samples, whatever the caller asks for.
pub const MAX_PLOT_SAMPLES: usize = 10_000;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolveOptions {
    /// Variable to solve for when the input mentions several.
    pub variable: Option<String>,
    /// Number of samples in the plot payload, capped at [`MAX_PLOT_SAMPLES`].
    pub plot_samples: usize,
    /// Extra room added on both sides of the interesting region of the plot.
    pub plot_padding: f64,
    /// Cap on distinct absolute values split into sign cases.
    pub max_abs_branches: usize,
    /// Bisection steps spent sharpening `RootOf` approximations.
    pub max_refinements: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions {
            variable: None,
            plot_samples: 200,
            plot_padding: 2.0,
            max_abs_branches: 4,
            max_refinements: crate::exact::DEFAULT_REFINEMENTS,
        }
    }
}

impl SolveOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        let options: SolveOptions = serde_json::from_str(json)?;
        let samples = options.plot_samples;
        Ok(options.with_plot_samples(samples))
    }

    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = Some(variable.into());
        self
    }

    pub fn with_plot_samples(mut self, samples: usize) -> Self {
        self.plot_samples = samples.min(MAX_PLOT_SAMPLES);
        self
    }

    pub fn with_plot_padding(mut self, padding: f64) -> Self {
        self.plot_padding = padding;
        self
    }

    pub fn with_max_abs_branches(mut self, branches: usize) -> Self {
        self.max_abs_branches = branches;
        self
    }

    pub fn with_max_refinements(mut self, refinements: usize) -> Self {
        self.max_refinements = refinements;
        self
    }
}
