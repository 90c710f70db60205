use alloc::vec::Vec;
use core::f64::consts::PI;
use core::ops::Range;

use log::{debug, trace};

use crate::linalg::{LinAlgError, Matrix, Vector};

use super::{AnalyzeError, Asymptote, Infinitesimal, TableRow};

/// Order-of-growth analyzer for a multivariate objective along a ray.
///
/// Restricts `f` to `t -> f(at + t * direction) - f(at)`; the slice
/// vanishes at `t = 0` by construction and goes through the
/// [`Infinitesimal`] machinery. Along the gradient the slice is dominated
/// by its linear term and fits `alpha` near 1; at right angles
/// ([`Vector::orth`]) the linear term cancels and the fit reads the
/// curvature order instead.
///
/// # Example
///
/// ```
/// use extrema::analyze::Directional;
/// use extrema::Vector;
///
/// let sphere = |v: &Vector<f64>| v[0] * v[0] + v[1] * v[1];
/// let mut along = Directional::new(
///     sphere,
///     Vector::zeros(2),
///     Vector::from_slice(&[1.0, 0.0]),
/// );
/// // Every direction out of the bowl's bottom is purely quadratic
/// assert!((along.asymptote().alpha - 2.0).abs() < 1e-6);
/// ```
pub struct Directional<F> {
    f: F,
    at: Vector<f64>,
    direction: Vector<f64>,
}

impl<F: FnMut(&Vector<f64>) -> f64> Directional<F> {
    pub fn new(f: F, at: Vector<f64>, direction: Vector<f64>) -> Self {
        Self { f, at, direction }
    }

    /// The base point of the ray.
    pub fn at(&self) -> &Vector<f64> {
        &self.at
    }

    /// The probe direction.
    pub fn direction(&self) -> &Vector<f64> {
        &self.direction
    }

    /// The objective restricted to the ray, re-based to vanish at `t = 0`.
    fn slice(&mut self) -> impl FnMut(f64) -> f64 + '_ {
        let Self { f, at, direction } = self;
        move |t| {
            let probe = &*at + &(&*direction * t);
            f(&probe) - f(at)
        }
    }

    /// Probe the slice over a window of
    /// [`DECADES`](crate::analyze::DECADES).
    ///
    /// # Errors
    ///
    /// [`AnalyzeError::RangeOutOfBounds`] if the window is inverted or
    /// runs past the end of the grid.
    pub fn table(&mut self, decades: Range<usize>) -> Result<Vec<TableRow>, AnalyzeError> {
        Infinitesimal::new(self.slice()).table(decades)
    }

    /// Fit the power law of the slice near the base point.
    pub fn asymptote(&mut self) -> Asymptote {
        Asymptote::fit(self.slice())
    }

    /// Leading coefficient of the fitted power law.
    pub fn coefficient(&mut self) -> f64 {
        self.asymptote().coefficient()
    }

    /// Sweep the direction through `points` one-degree turns, marking for
    /// each the point `at + coefficient * direction`.
    ///
    /// An objective growing the same way in every direction traces a ring
    /// around the base point; anisotropy stretches the trace. The turn is
    /// one degree per mark regardless of `points`, so 360 marks close the
    /// full ring. The stored direction is left untouched.
    ///
    /// # Errors
    ///
    /// [`LinAlgError::DimensionMismatch`] unless the direction has exactly
    /// two coordinates; the fit-only methods have no such restriction.
    pub fn circle(&mut self, points: usize) -> Result<Vec<Vector<f64>>, LinAlgError> {
        let rot = Matrix::rotation(PI / 180.0);
        let mut dir = self.direction.clone();
        let mut ring = Vec::with_capacity(points);
        for i in 0..points {
            let c = {
                let Self { f, at, .. } = self;
                Asymptote::fit(|t| {
                    let probe = &*at + &(&dir * t);
                    f(&probe) - f(at)
                })
                .coefficient()
            };
            trace!("direction sweep {i}: coefficient {c}");
            ring.push(&self.at + &(&dir * c));
            dir = dir.mul_mat(&rot)?;
        }
        debug!("direction sweep done: {} marks", ring.len());
        Ok(ring)
    }
}
