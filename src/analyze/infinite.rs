use alloc::vec::Vec;
use core::ops::Range;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use super::{AnalyzeError, Asymptote, Infinitesimal, TableRow};

/// Swaps bubble sort spends ordering its worst case of `n` elements,
/// counted by running the sort.
///
/// The array `0, 1, .., n - 1` sorted into descending order swaps on every
/// comparison, so the count comes out `n (n - 1) / 2`.
///
/// # Example
///
/// ```
/// use extrema::analyze::bubble_swaps;
///
/// assert_eq!(bubble_swaps(10), 45);
/// ```
pub fn bubble_swaps(n: usize) -> u64 {
    if n < 2 {
        return 0;
    }
    let mut arr: Vec<usize> = (0..n).collect();
    let mut swaps = 0;
    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            if arr[j + 1] > arr[j] {
                arr.swap(j, j + 1);
                swaps += 1;
            }
        }
    }
    swaps
}

/// Reciprocal fold of the sort workload: decade `10^-d` probes the swap
/// count of a `10^d`-element sort.
fn reciprocal_swap_count(x: f64) -> f64 {
    let n = (1.0 / x).round() as usize;
    1.0 / (bubble_swaps(n) as f64)
}

/// Order-of-growth analyzer for a workload that diverges with input size.
///
/// Growth at infinity cannot be probed directly, so the workload is folded
/// to zero: `x` maps to the reciprocal of [`bubble_swaps`]`(round(1/x))`
/// and the folded function goes through the [`Infinitesimal`] machinery.
/// A quadratic workload folds to a quadratic infinitesimal, and the fitted
/// `alpha` reads the workload's order directly.
///
/// # Example
///
/// ```no_run
/// use extrema::analyze::Infinite;
///
/// let mut sort = Infinite::new();
/// assert_eq!(sort.asymptote().alpha.round(), 2.0);
/// ```
pub struct Infinite {
    inner: Infinitesimal<fn(f64) -> f64>,
}

impl Infinite {
    pub fn new() -> Self {
        Self {
            inner: Infinitesimal::new(reciprocal_swap_count),
        }
    }

    /// Probe the folded workload over a window of
    /// [`DECADES`](crate::analyze::DECADES).
    ///
    /// Decade `d` sorts `10^d` elements, so each deeper decade costs ten
    /// times the sort work of the one before; keep the window shallow.
    /// Decade 0 is a one-element sort with no swaps and reports an
    /// infinite output.
    ///
    /// # Errors
    ///
    /// [`AnalyzeError::RangeOutOfBounds`] if the window is inverted or
    /// runs past the end of the grid.
    pub fn table(&mut self, decades: Range<usize>) -> Result<Vec<TableRow>, AnalyzeError> {
        self.inner.table(decades)
    }

    /// Fit the power law of the folded workload.
    ///
    /// Probes two sorts of about ten thousand elements each.
    pub fn asymptote(&mut self) -> Asymptote {
        self.inner.asymptote()
    }

    /// Leading coefficient of the fitted power law.
    pub fn coefficient(&mut self) -> f64 {
        self.inner.coefficient()
    }
}

impl Default for Infinite {
    fn default() -> Self {
        Self::new()
    }
}
