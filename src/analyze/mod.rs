//! Order-of-growth analysis by probing toward zero.
//!
//! Three analyzers estimate how fast a quantity grows by sampling it over
//! a grid of shrinking decades and fitting a power law `C · x^alpha` to
//! the samples on a log-log scale:
//!
//! - [`Infinitesimal`] — a univariate function vanishing at zero
//! - [`Infinite`] — a divergent workload, folded to zero through its
//!   reciprocal, with bubble-sort swap counts as the model workload
//! - [`Directional`] — a multivariate function restricted to a ray
//!
//! The fitted [`Asymptote`] carries the order `alpha` (1 for linear
//! decay, 2 for quadratic) and recovers the leading coefficient `C`. The
//! probe grid is [`DECADES`]; tabulating methods return one [`TableRow`]
//! per probed decade.
//!
//! # Example
//!
//! ```
//! use extrema::analyze::Infinitesimal;
//!
//! let mut f = Infinitesimal::new(|x| 10.0 * x);
//! assert!(f.is_infinitesimal());
//!
//! let fit = f.asymptote();
//! assert!((fit.alpha - 1.0).abs() < 1e-9);
//! assert!((fit.coefficient() - 10.0).abs() < 1e-8);
//! ```

mod asymptote;
mod direction;
mod infinite;
mod infinitesimal;
mod table;

#[cfg(test)]
mod tests;

pub use asymptote::Asymptote;
pub use direction::Directional;
pub use infinite::{bubble_swaps, Infinite};
pub use infinitesimal::Infinitesimal;
pub use table::{TableRow, DECADES};

/// Errors from the growth analyzers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalyzeError {
    /// A requested decade window does not fit the probe grid.
    RangeOutOfBounds {
        /// Window start, an index into [`DECADES`].
        start: usize,
        /// Window end, exclusive.
        end: usize,
    },
}

impl core::fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnalyzeError::RangeOutOfBounds { start, end } => {
                write!(
                    f,
                    "decade window {}..{} outside the {}-entry probe grid",
                    start,
                    end,
                    DECADES.len()
                )
            }
        }
    }
}
