use log::{debug, trace};

use crate::deriv::{gradient, hessian};
use crate::linalg::Vector;
use crate::optim::{ExtremumNd, NewtonNdSettings, OptimError};

/// Stationary-point search in several variables by Newton steps.
///
/// Each round moves by the solution of `H(x) s = -g(x)` with the gradient
/// and Hessian taken numerically, and stops once two consecutive iterates
/// agree in objective value to within `precision`. Inversion goes through
/// [`Matrix::inverse2`](crate::Matrix::inverse2), so objectives of more
/// than two variables fail with a dimension error.
///
/// # Example
///
/// ```
/// use extrema::optim::{NewtonNd, NewtonNdSettings};
/// use extrema::Vector;
///
/// let mut solver = NewtonNd::new(
///     |v: &Vector<f64>| v[0] * v[0] + v[1] * v[1],
///     Vector::from_slice(&[1.0, 1.0]),
///     NewtonNdSettings::default(),
/// );
/// let best = solver.solve().unwrap();
/// assert!(best.x[0].abs() < 1e-6 && best.x[1].abs() < 1e-6);
/// ```
pub struct NewtonNd<F> {
    f: F,
    start: Vector<f64>,
    settings: NewtonNdSettings,
}

impl<F: FnMut(&Vector<f64>) -> f64> NewtonNd<F> {
    pub fn new(f: F, start: Vector<f64>, settings: NewtonNdSettings) -> Self {
        Self { f, start, settings }
    }

    /// Iterate to a stationary point of the objective.
    ///
    /// # Errors
    ///
    /// [`OptimError::Singular`] if the Hessian determinant vanishes at any
    /// iterate; [`OptimError::LinAlg`] if the objective does not take
    /// exactly two variables; [`OptimError::ConvergenceFailure`] if the
    /// iteration cap is exhausted first.
    pub fn solve(&mut self) -> Result<ExtremumNd, OptimError> {
        let mut evals = 0;
        let mut previous = self.start.clone();
        let mut current = self.step_from(&previous, &mut evals)?;

        for iter in 0..self.settings.max_iter {
            let fc = (self.f)(&current);
            let fp = (self.f)(&previous);
            evals += 2;
            if (fc - fp).abs() < self.settings.precision {
                debug!("newton nd done: x = {:?}, f(x) = {fc}, evals = {evals}", current);
                return Ok(ExtremumNd {
                    x: current,
                    fx: fc,
                    iterations: iter,
                    evals,
                });
            }
            previous = current;
            current = self.step_from(&previous, &mut evals)?;
            trace!("newton nd step: x = {:?}", current);
        }
        Err(OptimError::ConvergenceFailure)
    }

    /// One Newton step from `at`.
    fn step_from(&mut self, at: &Vector<f64>, evals: &mut usize) -> Result<Vector<f64>, OptimError> {
        let f = &mut self.f;
        let mut counted = |v: &Vector<f64>| {
            *evals += 1;
            f(v)
        };
        let g = gradient(&mut counted, at);
        let h = hessian(&mut counted, at);
        if h.det2()?.abs() < f64::EPSILON {
            return Err(OptimError::Singular);
        }
        let step = h.inverse2()?.mul_vec(&g)?;
        Ok(at - &step)
    }
}
