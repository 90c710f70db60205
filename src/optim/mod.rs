//! Local extremum search: bracketing and Newton methods.
//!
//! Four solvers share the finite-difference engine and one configuration
//! style:
//!
//! - [`Dichotomy`] — bracket by step doubling, shrink by midpoint halving
//! - [`GoldenSection`] — bracket by golden-window shifts, shrink by golden sections
//! - [`Newton1d`] — root of the first derivative via Newton steps
//! - [`NewtonNd`] — multivariate Newton on gradient and Hessian (needs `alloc`)
//!
//! The bracketing pair searches toward either end of [`Goal`]; the Newton
//! pair takes no goal and lands on whichever stationary point its steps
//! reach. Every solver owns its objective
//! closure, keeps no state across calls, and reports progress through the
//! `log` facade (`debug` for phase results, `trace` for per-iteration
//! state).

mod dichotomy;
mod golden;
mod newton;
#[cfg(feature = "alloc")]
mod newton_nd;


pub use dichotomy::Dichotomy;
pub use golden::GoldenSection;
pub use newton::Newton1d;
#[cfg(feature = "alloc")]
pub use newton_nd::NewtonNd;

#[cfg(feature = "alloc")]
use crate::linalg::{LinAlgError, Vector};

/// Errors from extremum search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptimError {
    /// The bracketing phase ran out of iterations before finding a bracket
    /// whose interior probe beats both endpoints. Typical for objectives
    /// without a finite optimum in the search direction, like a line.
    BracketNotFound,
    /// The refinement loop ran out of iterations.
    ConvergenceFailure,
    /// Neither half of a split bracket could be ranked. Indicates a broken
    /// bracket invariant, not a property of the objective.
    SelectionFailed,
    /// Vanishing curvature: a second derivative or Hessian determinant too
    /// close to zero to divide by.
    Singular,
    /// A vector or matrix operation failed inside the multivariate step.
    #[cfg(feature = "alloc")]
    LinAlg(LinAlgError),
}

impl core::fmt::Display for OptimError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OptimError::BracketNotFound => write!(f, "no bracket found within the iteration cap"),
            OptimError::ConvergenceFailure => write!(f, "no convergence within the iteration cap"),
            OptimError::SelectionFailed => write!(f, "could not rank the halves of a bracket"),
            OptimError::Singular => write!(f, "vanishing second derivative or Hessian determinant"),
            #[cfg(feature = "alloc")]
            OptimError::LinAlg(e) => write!(f, "linear algebra failure: {}", e),
        }
    }
}

#[cfg(feature = "alloc")]
impl From<LinAlgError> for OptimError {
    fn from(e: LinAlgError) -> Self {
        OptimError::LinAlg(e)
    }
}

/// Which end of the objective a bracketing search drives toward.
///
/// One comparison strategy consumed uniformly by the luck test, the
/// half-selection rule, and the construction-time direction probe, so the
/// two bracketing solvers cannot disagree on what "better" means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    /// Search for a local minimum.
    Minimize,
    /// Search for a local maximum.
    Maximize,
}

impl Goal {
    /// Strictly better under the goal.
    pub(crate) fn prefers(self, a: f64, b: f64) -> bool {
        match self {
            Goal::Minimize => a < b,
            Goal::Maximize => a > b,
        }
    }

    /// At least as good under the goal.
    pub(crate) fn accepts(self, a: f64, b: f64) -> bool {
        match self {
            Goal::Minimize => a <= b,
            Goal::Maximize => a >= b,
        }
    }

    /// Sign the probe step toward the optimum, given objective values one
    /// step up and one step down from the start. A dead-even probe falls
    /// through to `+step` when minimizing and `-step` when maximizing.
    pub(crate) fn directed_step(self, step: f64, up: f64, down: f64) -> f64 {
        if up > down {
            match self {
                Goal::Maximize => step,
                Goal::Minimize => -step,
            }
        } else {
            match self {
                Goal::Maximize => -step,
                Goal::Minimize => step,
            }
        }
    }
}

/// Settings for the bracketing searches ([`Dichotomy`], [`GoldenSection`]).
#[derive(Debug, Clone, Copy)]
pub struct SearchSettings {
    /// Center of the construction-time direction probe and left end of the
    /// initial bracket.
    pub start: f64,
    /// Unsigned magnitude of the initial step; the solver picks its sign.
    pub step: f64,
    /// Target bracket width; shrinking stops at `width <= precision`.
    pub precision: f64,
    /// Iteration cap, applied to each phase separately.
    pub max_iter: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            start: 0.0,
            step: 1e-2,
            precision: 1e-4,
            max_iter: 150,
        }
    }
}

/// Settings for the univariate Newton search ([`Newton1d`]).
///
/// No precision knob: the stopping rule is the adaptive zero test of the
/// significant-digit model, `approx_eq(f'(x), 0)`.
#[derive(Debug, Clone, Copy)]
pub struct NewtonSettings {
    /// Starting point.
    pub start: f64,
    /// Iteration cap.
    pub max_iter: usize,
}

impl Default for NewtonSettings {
    fn default() -> Self {
        Self {
            start: 0.0,
            max_iter: 15,
        }
    }
}

/// Settings for the multivariate Newton search ([`NewtonNd`]).
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, Copy)]
pub struct NewtonNdSettings {
    /// Stop once successive objective values differ by less than this.
    pub precision: f64,
    /// Iteration cap.
    pub max_iter: usize,
}

#[cfg(feature = "alloc")]
impl Default for NewtonNdSettings {
    fn default() -> Self {
        Self {
            precision: 1e-8,
            max_iter: 8,
        }
    }
}

/// Result of a univariate extremum search.
#[derive(Debug, Clone, Copy)]
pub struct Extremum {
    /// Located optimum.
    pub x: f64,
    /// Objective value at the optimum.
    pub fx: f64,
    /// Iterations spent; both phases combined for the bracketing searches.
    pub iterations: usize,
    /// Objective evaluations spent.
    pub evals: usize,
}

/// Result of a multivariate extremum search.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone)]
pub struct ExtremumNd {
    /// Located optimum.
    pub x: Vector<f64>,
    /// Objective value at the optimum.
    pub fx: f64,
    /// Newton steps taken.
    pub iterations: usize,
    /// Objective evaluations spent, including those inside the
    /// finite-difference gradient and Hessian.
    pub evals: usize,
}
