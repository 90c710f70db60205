use log::{debug, trace};

use crate::bracket::Triplet;
use crate::optim::{Extremum, Goal, OptimError, SearchSettings};

/// Extremum search by bracket doubling and midpoint halving.
///
/// Phase one grows a bracket from `start` in the direction picked by the
/// construction-time probe, doubling the step each round until the bracket
/// center beats both endpoints under the goal. Phase two repeatedly splits
/// the bracket at its center and keeps the better half until the width
/// drops to `precision`.
///
/// The solver owns its objective; [`solve`](Self::solve) can be called
/// repeatedly and returns the same result each time.
///
/// # Example
///
/// ```
/// use extrema::optim::{Dichotomy, Goal, SearchSettings};
///
/// let mut solver = Dichotomy::new(
///     |x| x * x + 2.0 * x + 1.0,
///     Goal::Minimize,
///     SearchSettings::default(),
/// );
/// let best = solver.solve().unwrap();
/// assert!((best.x + 1.0).abs() < 1e-4);
/// ```
pub struct Dichotomy<F> {
    f: F,
    goal: Goal,
    settings: SearchSettings,
    /// Signed step oriented toward the goal at construction.
    step: f64,
}

impl<F: FnMut(f64) -> f64> Dichotomy<F> {
    /// Create a solver and orient its probe step.
    ///
    /// Evaluates the objective twice, one step either side of
    /// `settings.start`, and signs `settings.step` toward the requested
    /// optimum.
    pub fn new(mut f: F, goal: Goal, settings: SearchSettings) -> Self {
        let up = f(settings.start + settings.step);
        let down = f(settings.start - settings.step);
        let step = goal.directed_step(settings.step, up, down);
        Self {
            f,
            goal,
            settings,
            step,
        }
    }

    /// Run the bracketing phase alone and return the bracket it finds.
    ///
    /// # Errors
    ///
    /// [`OptimError::BracketNotFound`] if the cap is exhausted first.
    pub fn bracket(&mut self) -> Result<Triplet, OptimError> {
        let mut evals = 0;
        self.expand(&mut evals).map(|(t, _)| t)
    }

    /// Run both phases and return the located extremum.
    ///
    /// # Errors
    ///
    /// [`OptimError::BracketNotFound`] if no bracket forms within the cap;
    /// [`OptimError::ConvergenceFailure`] if the shrink phase exhausts its
    /// cap; [`OptimError::SelectionFailed`] if a split cannot be ranked.
    pub fn solve(&mut self) -> Result<Extremum, OptimError> {
        let mut evals = 0;
        let (bracket, grow_iters) = self.expand(&mut evals)?;
        let (last, shrink_iters) = self.shrink(bracket, &mut evals)?;

        let x = last.center();
        let fx = (self.f)(x);
        evals += 1;
        debug!("dichotomy done: x = {x}, f(x) = {fx}, evals = {evals}");
        Ok(Extremum {
            x,
            fx,
            iterations: grow_iters + shrink_iters,
            evals,
        })
    }

    fn expand(&mut self, evals: &mut usize) -> Result<(Triplet, usize), OptimError> {
        let mut step = self.step;
        let mut t = Triplet::new(self.settings.start, self.settings.start + 2.0 * step);
        for iter in 0..self.settings.max_iter {
            if self.is_lucky(&t, evals) {
                debug!("dichotomy bracket [{}, {}] after {iter} iterations", t.a, t.b);
                return Ok((t, iter));
            }
            t.b += step;
            step *= 2.0;
            trace!("dichotomy expand: [{}, {}], next step {step}", t.a, t.b);
        }
        Err(OptimError::BracketNotFound)
    }

    fn shrink(&mut self, mut t: Triplet, evals: &mut usize) -> Result<(Triplet, usize), OptimError> {
        for iter in 0..self.settings.max_iter {
            if t.width() <= self.settings.precision {
                return Ok((t, iter));
            }
            let center = t.center();
            let left = Triplet::new(t.a, center);
            let right = Triplet::new(center, t.b);
            t = self.pick_half(left, right, evals)?;
            trace!("dichotomy shrink: [{}, {}]", t.a, t.b);
        }
        Err(OptimError::ConvergenceFailure)
    }

    /// Keep the better of two halves of a split bracket.
    ///
    /// A half that is lucky while the other is not wins outright; otherwise
    /// the strictly better center wins. Dead-even centers keep the right
    /// half when the halves are lucky and fail otherwise, since a split of
    /// a lucky bracket must leave at least one rankable half.
    fn pick_half(
        &mut self,
        left: Triplet,
        right: Triplet,
        evals: &mut usize,
    ) -> Result<Triplet, OptimError> {
        let lucky_left = self.is_lucky(&left, evals);
        let lucky_right = self.is_lucky(&right, evals);

        if lucky_left != lucky_right {
            return Ok(if lucky_left { left } else { right });
        }

        let fl = (self.f)(left.center());
        let fr = (self.f)(right.center());
        *evals += 2;

        if self.goal.prefers(fl, fr) {
            Ok(left)
        } else if self.goal.prefers(fr, fl) {
            Ok(right)
        } else if lucky_left {
            Ok(right)
        } else {
            Err(OptimError::SelectionFailed)
        }
    }

    /// Whether the bracket center is at least as good as both endpoints.
    fn is_lucky(&mut self, t: &Triplet, evals: &mut usize) -> bool {
        let fc = (self.f)(t.center());
        let fa = (self.f)(t.a);
        let fb = (self.f)(t.b);
        *evals += 3;
        self.goal.accepts(fc, fa) && self.goal.accepts(fc, fb)
    }
}
