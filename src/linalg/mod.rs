//! Heap-backed vector and square-matrix primitives.
//!
//! Just enough linear algebra to carry the multivariate calculus and the
//! Newton step: element-wise arithmetic, dot products, matrix-vector
//! products, and closed-form 2x2 determinant and inverse. Inversion beyond
//! 2x2 is deliberately unsupported and reports
//! [`LinAlgError::DimensionMismatch`] instead of guessing; see
//! [`Matrix::inverse2`].

mod matrix;
mod ops;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

/// Size error for fallible vector and matrix operations.
///
/// Operator impls (`+`, `-`, scalar `*` and `/`) panic on size disagreement
/// like the standard indexing operators do; the named methods (`dot`,
/// `mul_vec`, `mul_mat`, `orth`, `det2`, `inverse2`) return this instead so
/// the solvers can propagate the failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinAlgError {
    /// Operand sizes do not agree, or an operation defined for one size
    /// was invoked on another.
    DimensionMismatch {
        /// Size the operation requires.
        expected: usize,
        /// Size it was given.
        got: usize,
    },
    /// Construction input was ragged or not square.
    ShapeError {
        /// Number of rows supplied.
        rows: usize,
        /// Offending row length.
        cols: usize,
    },
}

impl core::fmt::Display for LinAlgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinAlgError::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {}, got {}", expected, got)
            }
            LinAlgError::ShapeError { rows, cols } => {
                write!(f, "not square: {} rows with a row of length {}", rows, cols)
            }
        }
    }
}
