#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::precision::log10_abs;

/// Power-law fit `C · x^alpha` to an objective just right of zero.
///
/// Two probes a thousandth of a decade apart give the log-log slope
/// (`alpha`, the order of growth) and intercept (`k`, the base-10 log of
/// the leading coefficient). Exact for monomials; good to several digits
/// for anything whose lowest-order term dominates at `1e-4`.
///
/// # Example
///
/// ```
/// use extrema::analyze::Asymptote;
///
/// let fit = Asymptote::fit(|x| 10.0 * x);
/// assert!((fit.alpha - 1.0).abs() < 1e-9);
/// assert!((fit.coefficient() - 10.0).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asymptote {
    /// Fitted order of growth.
    pub alpha: f64,
    /// Base-10 log of the fitted leading coefficient.
    pub k: f64,
}

impl Asymptote {
    /// Fit a power law from two probes of `f` near zero.
    ///
    /// Probes at `10^-4` and `10^-4.001`: deep enough that lower-order
    /// terms have died away, close enough together that the slope between
    /// them reads the local exponent.
    pub fn fit(mut f: impl FnMut(f64) -> f64) -> Self {
        let left = 1e-4;
        let right = 10f64.powf(-4.001);
        let f_left = f(left);
        let f_right = f(right);

        let alpha = log10_abs(f_right / f_left) / (right / left).log10();
        let k = -right.log10() * log10_abs(f_left / f_right) / (left / right).log10()
            + log10_abs(f_right);
        Self { alpha, k }
    }

    /// The fitted leading coefficient, `10^k`.
    pub fn coefficient(&self) -> f64 {
        10f64.powf(self.k)
    }
}
