//! Finite-difference derivative engine.
//!
//! Central differences with steps chosen by the significant-digit model:
//! the perturbation around `x` is [`significant_step`]`(x)`, so a unit-scale
//! operand is probed at `±1e-5` and a larger one proportionally wider.
//!
//! Scalar derivatives are returned raw. Partial derivatives additionally
//! pass through [`round_significant`], which collapses difference-quotient
//! dust (`1.9999999994` to `2.0`) and makes gradients of polynomial test
//! functions exact at unit-scale points. Second partials evaluate nested
//! first partials at shifted points; the nested pass inherits the outer
//! step as a floor so both evaluations differentiate on the same grid.

use crate::precision::{round_significant, significant_step};

#[cfg(feature = "alloc")]
use crate::linalg::{Matrix, Vector};

/// First derivative of `f` at `x` by central difference.
///
/// `(f(x + e) - f(x - e)) / 2e` with `e = significant_step(x)`. Two
/// evaluations of `f`; the quotient is not rounded.
///
/// # Example
///
/// ```
/// use extrema::deriv::derivative;
///
/// let d = derivative(|x| x * x * x, 2.0);
/// assert!((d - 12.0).abs() < 1e-9);
/// ```
pub fn derivative(mut f: impl FnMut(f64) -> f64, x: f64) -> f64 {
    let e = significant_step(x);
    (f(x + e) - f(x - e)) / (2.0 * e)
}

/// Second derivative of `f` at `x` by central difference.
///
/// `(f(x + 2e) + f(x - 2e) - 2 f(x)) / 4e²` with `e = significant_step(x)`.
/// Three evaluations of `f`; the quotient is not rounded.
///
/// # Example
///
/// ```
/// use extrema::deriv::second_derivative;
///
/// let d2 = second_derivative(|x| x * x * x, 1.0);
/// assert!((d2 - 6.0).abs() < 1e-6);
/// ```
pub fn second_derivative(mut f: impl FnMut(f64) -> f64, x: f64) -> f64 {
    let e = significant_step(x);
    (f(x + 2.0 * e) + f(x - 2.0 * e) - 2.0 * f(x)) / (4.0 * e * e)
}

/// First partial with an inherited step floor.
///
/// The floor keeps a nested differentiation on the grid of its outer pass:
/// without it, a shifted evaluation point of slightly different magnitude
/// would pick a finer step and the outer quotient would mix resolutions.
#[cfg(feature = "alloc")]
fn partial_with_floor<F: FnMut(&Vector<f64>) -> f64>(
    f: &mut F,
    at: &Vector<f64>,
    i: usize,
    floor: Option<f64>,
) -> f64 {
    let own = significant_step(at[i]);
    let e = match floor {
        Some(outer) => outer.max(own),
        None => own,
    };
    let mut probe = at.clone();
    probe[i] = at[i] + e;
    let ahead = f(&probe);
    probe[i] = at[i] - e;
    let behind = f(&probe);
    round_significant((ahead - behind) / (2.0 * e))
}

/// Partial derivative of `f` with respect to coordinate `i` at `at`.
///
/// Central difference on the one perturbed coordinate, rounded to the
/// result's own significant decimal places.
///
/// # Arguments
///
/// * `f` — objective over the full coordinate vector
/// * `at` — point of differentiation
/// * `i` — coordinate to perturb
///
/// # Panics
///
/// Panics if `i >= at.len()`.
///
/// # Example
///
/// ```
/// use extrema::{deriv::partial, Vector};
///
/// let f = |v: &Vector<f64>| v[0] * v[0] + v[1] * v[1];
/// assert_eq!(partial(f, &Vector::from_slice(&[1.0, 1.0]), 0), 2.0);
/// ```
#[cfg(feature = "alloc")]
pub fn partial(
    mut f: impl FnMut(&Vector<f64>) -> f64,
    at: &Vector<f64>,
    i: usize,
) -> f64 {
    partial_with_floor(&mut f, at, i, None)
}

/// Second partial of `f` with respect to coordinates `i`, then `j`.
///
/// Outer central difference on coordinate `i`; at each of the two shifted
/// points the nested first partial with respect to `j` is taken with the
/// outer step as floor. Rounded like [`partial`]. Entries are computed
/// independently, so `(i, j)` and `(j, i)` need not be byte-identical away
/// from well-scaled points.
///
/// # Arguments
///
/// * `f` — objective over the full coordinate vector
/// * `at` — point of differentiation
/// * `i` — outer coordinate, differenced second
/// * `j` — inner coordinate, differenced first
///
/// # Panics
///
/// Panics if `i` or `j` is out of bounds.
#[cfg(feature = "alloc")]
pub fn second_partial(
    mut f: impl FnMut(&Vector<f64>) -> f64,
    at: &Vector<f64>,
    i: usize,
    j: usize,
) -> f64 {
    let e = significant_step(at[i]);
    let mut probe = at.clone();
    probe[i] = at[i] + e;
    let ahead = partial_with_floor(&mut f, &probe, j, Some(e));
    probe[i] = at[i] - e;
    let behind = partial_with_floor(&mut f, &probe, j, Some(e));
    round_significant((ahead - behind) / (2.0 * e))
}

/// Gradient of `f` at `at`: the vector of first partials.
///
/// # Example
///
/// ```
/// use extrema::{deriv::gradient, Vector};
///
/// let f = |v: &Vector<f64>| v[0] * v[0] + v[1] * v[1];
/// let g = gradient(f, &Vector::from_slice(&[1.0, 1.0]));
/// assert_eq!(g, Vector::from_slice(&[2.0, 2.0]));
/// ```
#[cfg(feature = "alloc")]
pub fn gradient(mut f: impl FnMut(&Vector<f64>) -> f64, at: &Vector<f64>) -> Vector<f64> {
    Vector::from_fn(at.len(), |i| partial_with_floor(&mut f, at, i, None))
}

/// Hessian of `f` at `at`: the full matrix of second partials.
///
/// Every entry is differenced independently; symmetry is not assumed and
/// not enforced.
#[cfg(feature = "alloc")]
pub fn hessian(mut f: impl FnMut(&Vector<f64>) -> f64, at: &Vector<f64>) -> Matrix<f64> {
    Matrix::from_fn(at.len(), |i, j| second_partial(&mut f, at, i, j))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_first_derivative() {
        let cube = |x: f64| x * x * x;
        assert!(derivative(cube, 0.0).abs() < 1e-9);
        assert!((derivative(cube, 1.0) - 3.0).abs() < 1e-9);
        assert!((derivative(cube, 2.0) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn cubic_second_derivative() {
        let cube = |x: f64| x * x * x;
        assert!(second_derivative(cube, 0.0).abs() < 1e-6);
        assert!((second_derivative(cube, 1.0) - 6.0).abs() < 1e-6);
        assert!((second_derivative(cube, 2.0) - 12.0).abs() < 1e-6);
    }

    #[test]
    fn derivative_of_line_is_exact_slope() {
        assert!((derivative(|x| 2.0 * x, 7.0) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn partials_of_paraboloid() {
        let f = |v: &Vector<f64>| v[0] * v[0] + v[1] * v[1];
        let origin = Vector::from_slice(&[0.0, 0.0]);
        let ones = Vector::from_slice(&[1.0, 1.0]);

        assert_eq!(partial(f, &origin, 0), 0.0);
        assert_eq!(partial(f, &origin, 1), 0.0);
        assert_eq!(partial(f, &ones, 0), 2.0);
        assert_eq!(partial(f, &ones, 1), 2.0);
    }

    #[test]
    fn gradient_of_paraboloid() {
        let f = |v: &Vector<f64>| v[0] * v[0] + v[1] * v[1];
        let g = gradient(f, &Vector::from_slice(&[1.0, 1.0]));
        assert_eq!(g, Vector::from_slice(&[2.0, 2.0]));
    }

    #[test]
    fn hessian_of_paraboloid() {
        let f = |v: &Vector<f64>| v[0] * v[0] + v[1] * v[1];
        let expected = Matrix::from_rows(&[[2.0, 0.0], [0.0, 2.0]]).unwrap();

        assert_eq!(hessian(f, &Vector::from_slice(&[0.0, 0.0])), expected);
        assert_eq!(hessian(f, &Vector::from_slice(&[1.0, 1.0])), expected);
    }

    #[test]
    fn mixed_partials_of_product() {
        // f = x*y has exact mixed partials 1 everywhere.
        let f = |v: &Vector<f64>| v[0] * v[1];
        let at = Vector::from_slice(&[1.0, 1.0]);
        assert_eq!(second_partial(f, &at, 0, 1), 1.0);
        assert_eq!(second_partial(f, &at, 1, 0), 1.0);
    }
}
