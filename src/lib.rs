//! # extrema
//!
//! Derivative-free and Newton extremum search over scalar objectives, with
//! a finite-difference derivative engine and order-of-growth analysis.
//! Pure Rust, no-std compatible; the univariate solvers run without a heap.
//!
//! ## Quick start
//!
//! ```
//! use extrema::optim::{Dichotomy, Goal, SearchSettings};
//!
//! // Locate the minimum of f(x) = x^2 + 2x + 1 without derivatives
//! let mut solver = Dichotomy::new(
//!     |x| x * x + 2.0 * x + 1.0,
//!     Goal::Minimize,
//!     SearchSettings::default(),
//! );
//! let best = solver.solve().unwrap();
//! assert!((best.x + 1.0).abs() < 1e-4);
//! ```
//!
//! ## Modules
//!
//! - [`precision`] — The significant-digit model behind every adaptive
//!   decision: a value of magnitude `10^p` resolves to `|p - 5|` decimal
//!   places. Supplies step sizes, approximate equality, and denoising
//!   rounding to the rest of the crate.
//!
//! - [`deriv`] — Central-difference first and second derivatives, partials,
//!   gradients, and Hessians, with steps and rounding drawn from the
//!   precision model. Nested second partials inherit the outer step so both
//!   passes difference on the same grid.
//!
//! - [`bracket`] — Search brackets: midpoint [`Triplet`]s for dichotomy and
//!   immutable golden-ratio [`GoldenTriplet`]s whose factories back-solve an
//!   endpoint from a desired interior point.
//!
//! - [`optim`] — Four extremum searches behind one settings-and-result
//!   surface: bracketing [`Dichotomy`](optim::Dichotomy) and
//!   [`GoldenSection`](optim::GoldenSection) driven toward either end of
//!   [`Goal`](optim::Goal), and derivative-based
//!   [`Newton1d`](optim::Newton1d) and [`NewtonNd`](optim::NewtonNd)
//!   (the latter requires `alloc`).
//!
//! - [`linalg`] — Heap-backed [`Vector`] and square [`Matrix`] with just
//!   enough operations for the multivariate calculus: element arithmetic,
//!   dot and matrix products, closed-form 2x2 determinant and inverse, and
//!   plane rotation. Requires `alloc`.
//!
//! - [`analyze`] — Order-of-growth analyzers: probe a function over
//!   shrinking decades and fit a power law `C · x^alpha` to the samples.
//!   Covers infinitesimals, divergent workloads folded through their
//!   reciprocal, and slices of multivariate functions along a direction.
//!   Requires `alloc`.
//!
//! - [`traits`] — Element trait hierarchy: [`Scalar`] for anything the
//!   containers hold, [`FloatScalar`] for real float math.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Implies `alloc`. Hardware float math via the system libm |
//! | `alloc` | via std | `linalg`, `analyze`, and the multivariate Newton solver |
//! | `libm`  | no      | Pure-Rust software float fallback, required for no_std |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod analyze;
pub mod bracket;
pub mod deriv;
#[cfg(feature = "alloc")]
pub mod linalg;
pub mod optim;
pub mod precision;
pub mod traits;

pub use bracket::{GoldenTriplet, Triplet};
#[cfg(feature = "alloc")]
pub use linalg::{LinAlgError, Matrix, Vector};
pub use traits::{FloatScalar, Scalar};
