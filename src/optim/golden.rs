use log::{debug, trace};

use crate::bracket::GoldenTriplet;
use crate::optim::{Extremum, Goal, OptimError, SearchSettings};

/// Extremum search over golden-ratio brackets.
///
/// The bracketing phase grows the interval by the golden ratio each round,
/// promoting the old right endpoint to the new left interior point so one
/// probe per round is already in place. The shrink phase compares the two
/// interior points and keeps the sub-bracket around the better one, cutting
/// the width by the golden ratio per round with a single fresh probe.
///
/// # Example
///
/// ```
/// use extrema::optim::{Goal, GoldenSection, SearchSettings};
///
/// let mut solver = GoldenSection::new(
///     |x| x * x + 2.0 * x + 1.0,
///     Goal::Minimize,
///     SearchSettings::default(),
/// );
/// let best = solver.solve().unwrap();
/// assert!((best.x + 1.0).abs() < 1e-4);
/// ```
pub struct GoldenSection<F> {
    f: F,
    goal: Goal,
    settings: SearchSettings,
    /// Signed step oriented toward the goal at construction.
    step: f64,
}

impl<F: FnMut(f64) -> f64> GoldenSection<F> {
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
    pub fn bracket(&mut self) -> Result<GoldenTriplet, OptimError> {
        let mut evals = 0;
        self.expand(&mut evals).map(|(t, _)| t)
    }

    /// Run both phases and return the located extremum.
    ///
    /// # Errors
    ///
    /// [`OptimError::BracketNotFound`] if no bracket forms within the cap;
    /// [`OptimError::ConvergenceFailure`] if the shrink phase exhausts its
    /// cap.
    pub fn solve(&mut self) -> Result<Extremum, OptimError> {
        let mut evals = 0;
        let (bracket, grow_iters) = self.expand(&mut evals)?;
        let (last, shrink_iters) = self.shrink(bracket, &mut evals)?;

        let x = last.center();
        let fx = (self.f)(x);
        evals += 1;
        debug!("golden section done: x = {x}, f(x) = {fx}, evals = {evals}");
        Ok(Extremum {
            x,
            fx,
            iterations: grow_iters + shrink_iters,
            evals,
        })
    }

    fn expand(&mut self, evals: &mut usize) -> Result<(GoldenTriplet, usize), OptimError> {
        let start = self.settings.start;
        let mut t = GoldenTriplet::from_right_center(start, start + self.step);
        for iter in 0..self.settings.max_iter {
            if self.is_lucky(&t, evals) {
                debug!(
                    "golden bracket [{}, {}] after {iter} iterations",
                    t.a(),
                    t.b()
                );
                return Ok((t, iter));
            }
            t = GoldenTriplet::from_left_center(t.a(), t.b());
            trace!("golden expand: [{}, {}]", t.a(), t.b());
        }
        Err(OptimError::BracketNotFound)
    }

    fn shrink(
        &mut self,
        mut t: GoldenTriplet,
        evals: &mut usize,
    ) -> Result<(GoldenTriplet, usize), OptimError> {
        for iter in 0..self.settings.max_iter {
            if t.width() <= self.settings.precision {
                return Ok((t, iter));
            }
            let fl = (self.f)(t.left_center());
            let fr = (self.f)(t.right_center());
            *evals += 2;
            t = if self.goal.prefers(fl, fr) {
                GoldenTriplet::new(t.a(), t.right_center())
            } else {
                GoldenTriplet::new(t.left_center(), t.b())
            };
            trace!("golden shrink: [{}, {}]", t.a(), t.b());
        }
        Err(OptimError::ConvergenceFailure)
    }

    /// Whether the right interior point is at least as good as both ends.
    ///
    /// The expand phase promotes the old right endpoint to the new left
    /// interior point, so the right interior point is the fresh probe.
    fn is_lucky(&mut self, t: &GoldenTriplet, evals: &mut usize) -> bool {
        let fc = (self.f)(t.right_center());
        let fa = (self.f)(t.a());
        let fb = (self.f)(t.b());
        *evals += 3;
        self.goal.accepts(fc, fa) && self.goal.accepts(fc, fb)
    }
}
