use alloc::vec::Vec;
use core::ops::Range;

use super::{AnalyzeError, Asymptote, TableRow, DECADES};

/// Order-of-growth analyzer for a function vanishing at zero.
///
/// Owns the objective and probes it over shrinking decades. The tabular
/// view shows the raw decay; the asymptote fit condenses it into an order
/// and a coefficient.
///
/// # Example
///
/// ```
/// use extrema::analyze::Infinitesimal;
///
/// let mut f = Infinitesimal::new(|x| 10.0 * x);
/// assert!(f.is_infinitesimal());
///
/// let rows = f.table(0..3).unwrap();
/// assert_eq!(rows[1].input, 1e-1);
/// assert!((f.asymptote().alpha - 1.0).abs() < 1e-9);
/// ```
pub struct Infinitesimal<F> {
    f: F,
}

impl<F: FnMut(f64) -> f64> Infinitesimal<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Whether the objective actually vanishes at zero.
    ///
    /// A function that does not is not infinitesimal and its asymptote fit
    /// reads the constant term, not an order of growth.
    pub fn is_infinitesimal(&mut self) -> bool {
        (self.f)(0.0) == 0.0
    }

    /// Probe the objective over a window of [`DECADES`].
    ///
    /// `decades` indexes the grid, so `0..16` is the full table and `2..5`
    /// probes `1e-2`, `1e-3` and `1e-4`.
    ///
    /// # Errors
    ///
    /// [`AnalyzeError::RangeOutOfBounds`] if the window is inverted or
    /// runs past the end of the grid.
    pub fn table(&mut self, decades: Range<usize>) -> Result<Vec<TableRow>, AnalyzeError> {
        if decades.start > decades.end || decades.end > DECADES.len() {
            return Err(AnalyzeError::RangeOutOfBounds {
                start: decades.start,
                end: decades.end,
            });
        }
        Ok(DECADES[decades]
            .iter()
            .map(|&input| TableRow {
                input,
                output: (self.f)(input),
            })
            .collect())
    }

    /// Fit the near-zero power law of the objective.
    pub fn asymptote(&mut self) -> Asymptote {
        Asymptote::fit(&mut self.f)
    }

    /// Leading coefficient of the fitted power law.
    pub fn coefficient(&mut self) -> f64 {
        self.asymptote().coefficient()
    }
}
