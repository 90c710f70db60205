use log::{debug, trace};

use crate::deriv::{derivative, second_derivative};
use crate::optim::{Extremum, NewtonSettings, OptimError};
use crate::precision::approx_eq;

/// Stationary-point search by Newton steps on the first derivative.
///
/// Each round moves by `-f'(x) / f''(x)` with both derivatives taken
/// numerically, and stops once the first derivative vanishes to within its
/// own significant resolution. Whether the located point is a minimum or a
/// maximum depends on the objective; the solver takes no goal.
///
/// # Example
///
/// ```
/// use extrema::optim::{Newton1d, NewtonSettings};
///
/// let mut solver = Newton1d::new(
///     |x| x * x + 2.0 * x + 1.0,
///     NewtonSettings {
///         start: -1.5,
///         ..Default::default()
///     },
/// );
/// let best = solver.solve().unwrap();
/// assert!((best.x + 1.0).abs() < 1e-4);
/// ```
pub struct Newton1d<F> {
    f: F,
    settings: NewtonSettings,
}

impl<F: FnMut(f64) -> f64> Newton1d<F> {
    pub fn new(f: F, settings: NewtonSettings) -> Self {
        Self { f, settings }
    }

    /// Iterate to a stationary point of the objective.
    ///
    /// # Errors
    ///
    /// [`OptimError::Singular`] if the second derivative vanishes at any
    /// iterate; [`OptimError::ConvergenceFailure`] if the iteration cap is
    /// exhausted first.
    pub fn solve(&mut self) -> Result<Extremum, OptimError> {
        let f = &mut self.f;
        let mut evals = 0;

        let mut d = derivative(&mut *f, self.settings.start);
        let mut d2 = second_derivative(&mut *f, self.settings.start);
        evals += 5;
        if d2.abs() < f64::EPSILON {
            return Err(OptimError::Singular);
        }
        let mut current = self.settings.start - d / d2;

        for iter in 0..self.settings.max_iter {
            if approx_eq(d, 0.0) {
                let fx = f(current);
                evals += 1;
                debug!("newton done: x = {current}, f(x) = {fx}, evals = {evals}");
                return Ok(Extremum {
                    x: current,
                    fx,
                    iterations: iter,
                    evals,
                });
            }
            d = derivative(&mut *f, current);
            d2 = second_derivative(&mut *f, current);
            evals += 5;
            if d2.abs() < f64::EPSILON {
                return Err(OptimError::Singular);
            }
            current -= d / d2;
            trace!("newton step: x = {current}, f'(x) = {d}");
        }
        Err(OptimError::ConvergenceFailure)
    }
}
