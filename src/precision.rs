//! Significant-digit precision model.
//!
//! Every adaptive decision in this crate (finite-difference step sizes,
//! rounding of partial derivatives, the "is this derivative zero yet" test)
//! runs through one rule: a value of magnitude `10^p` carries five
//! significant digits, so quantities derived from it are resolved to
//! `|p - 5|` decimal places, never finer than 15.

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Number of decimal places resolvable for a value of this magnitude.
///
/// Zero maps to 5 (the resolution of a unit-scale value). The count is
/// clamped to 15, the last decade where `f64` still has digits to give.
///
/// # Example
/// ```
/// use extrema::precision::significant_digits;
///
/// assert_eq!(significant_digits(0.5), 5);
/// assert_eq!(significant_digits(123456.789), 0);
/// assert_eq!(significant_digits(1.0e30), 15);
/// ```
pub fn significant_digits(v: f64) -> i32 {
    if v == 0.0 {
        return 5;
    }
    let digits = (v.abs().log10().round() - 5.0).abs() as i32;
    digits.min(15)
}

/// Adaptive step for finite differencing around `v`: `10^-significant_digits(v)`.
///
/// A unit-scale operand gets `1e-5`; the step grows with the operand's
/// magnitude so the difference quotient stays numerically balanced.
pub fn significant_step(v: f64) -> f64 {
    10f64.powi(-significant_digits(v))
}

/// Equality at the resolution of the operands.
///
/// True when `a` and `b` differ by less than the coarser of their two
/// [`significant_step`]s. Not transitive; intended for convergence tests,
/// not for ordering.
///
/// # Example
/// ```
/// use extrema::precision::approx_eq;
///
/// assert!(approx_eq(0.781212901, 0.781212999));
/// assert!(!approx_eq(0.2, 0.3));
/// ```
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < significant_step(a).max(significant_step(b))
}

/// Round `v` to its own significant decimal places.
///
/// This is the denoising pass applied to partial derivatives: a difference
/// quotient like `2.0000199998...` collapses to `2.00002`, and near-zero
/// float dust collapses to exactly `0.0`. Non-finite values pass through.
pub fn round_significant(v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    let scale = 10f64.powi(significant_digits(v));
    (v * scale).round() / scale
}

/// Base-10 logarithm of `|v|`.
///
/// The log-log slope primitive used by the growth analyzers.
pub fn log10_abs(v: f64) -> f64 {
    v.abs().log10()
}
