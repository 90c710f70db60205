use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::{FloatScalar, Scalar};

use super::{LinAlgError, Vector};

/// Dynamically-sized square matrix, row-major `Vec<T>` storage.
///
/// The Hessian carrier. Side length is set at runtime and rows always equal
/// columns; rectangular input is rejected at construction. Inversion ships
/// in closed form for 2x2 only ([`Matrix::inverse2`]), which is exactly what
/// the plane Newton step needs.
///
/// # Examples
///
/// ```
/// use extrema::Matrix;
///
/// let m = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(m[(0, 1)], 2.0);
/// assert_eq!(m.n(), 2);
/// assert_eq!(m.det2().unwrap(), -2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    pub(crate) data: Vec<T>,
    pub(crate) n: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `n x n` matrix of zeros.
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![T::zero(); n * n],
            n,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use extrema::Matrix;
    /// let id = Matrix::<f64>::identity(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Self { data, n }
    }

    /// Create a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// [`LinAlgError::ShapeError`] if any row's length differs from the row
    /// count, which covers both ragged and rectangular input.
    ///
    /// ```
    /// use extrema::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    ///
    /// assert!(Matrix::from_rows(&[[1.0, 2.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, LinAlgError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(LinAlgError::ShapeError {
                    rows: n,
                    cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, n })
    }

    /// Side length.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Matrix times column vector: `ans[i] = Σ_j self[(i, j)] * v[j]`.
    ///
    /// # Errors
    ///
    /// [`LinAlgError::DimensionMismatch`] if `v.len() != self.n()`.
    ///
    /// ```
    /// use extrema::{Matrix, Vector};
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let v = Vector::from_slice(&[4.0, 2.0]);
    /// assert_eq!(m.mul_vec(&v).unwrap(), Vector::from_slice(&[8.0, 20.0]));
    /// ```
    pub fn mul_vec(&self, v: &Vector<T>) -> Result<Vector<T>, LinAlgError> {
        if v.len() != self.n {
            return Err(LinAlgError::DimensionMismatch {
                expected: self.n,
                got: v.len(),
            });
        }
        Ok(Vector::from_fn(self.n, |i| {
            let mut sum = T::zero();
            for j in 0..self.n {
                sum = sum + self.data[i * self.n + j] * v[j];
            }
            sum
        }))
    }

    /// Determinant of a 2x2 matrix: `ad - bc`.
    ///
    /// # Errors
    ///
    /// [`LinAlgError::DimensionMismatch`] for any other side length.
    pub fn det2(&self) -> Result<T, LinAlgError> {
        if self.n != 2 {
            return Err(LinAlgError::DimensionMismatch {
                expected: 2,
                got: self.n,
            });
        }
        Ok(self.data[0] * self.data[3] - self.data[1] * self.data[2])
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Closed-form inverse of a 2x2 matrix (adjugate over determinant).
    ///
    /// No singularity check: a zero determinant produces non-finite entries,
    /// and callers that care test [`Matrix::det2`] first.
    ///
    /// # Errors
    ///
    /// [`LinAlgError::DimensionMismatch`] for any other side length.
    ///
    /// ```
    /// use extrema::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let inv = m.inverse2().unwrap();
    /// assert_eq!(inv, Matrix::from_rows(&[[-2.0, 1.0], [1.5, -0.5]]).unwrap());
    /// ```
    pub fn inverse2(&self) -> Result<Self, LinAlgError> {
        let det = self.det2()?;
        let adjugate = Self {
            data: vec![self.data[3], -self.data[1], -self.data[2], self.data[0]],
            n: 2,
        };
        Ok(adjugate / det)
    }

    /// Plane rotation by `angle` radians, row-vector convention:
    /// `[[cos, sin], [-sin, cos]]`.
    ///
    /// Applied from the right (`v.mul_mat(&rot)`), this turns a row vector
    /// counterclockwise; the directional analyzer sweeps its probe direction
    /// with it one degree at a time.
    pub fn rotation(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            data: vec![cos, sin, -sin, cos],
            n: 2,
        }
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.n + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.n + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_and_index() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(m.n(), 2);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m[(1, 1)], 4.0);
    }

    #[test]
    fn from_rows_rejects_rectangular() {
        assert_eq!(
            Matrix::from_rows(&[[1.0, 2.0]]),
            Err(LinAlgError::ShapeError { rows: 1, cols: 2 })
        );
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let rows = [vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            Matrix::from_rows(&rows),
            Err(LinAlgError::ShapeError { rows: 2, cols: 1 })
        );
    }

    #[test]
    fn from_fn_row_major() {
        let m = Matrix::from_fn(3, |i, j| (i * 3 + j) as f64);
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m[(2, 0)], 6.0);
    }

    #[test]
    fn index_mut() {
        let mut m = Matrix::zeros(2);
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
    }

    #[test]
    fn det2_of_plane_matrix() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(m.det2().unwrap(), -2.0);
    }

    #[test]
    fn det2_rejects_other_sizes() {
        let m = Matrix::<f64>::identity(3);
        assert_eq!(
            m.det2(),
            Err(LinAlgError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        );
    }

    #[test]
    fn inverse2_closed_form() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let inv = m.inverse2().unwrap();
        assert_eq!(
            inv,
            Matrix::from_rows(&[[-2.0, 1.0], [1.5, -0.5]]).unwrap()
        );
    }

    #[test]
    fn inverse2_rejects_other_sizes() {
        let m = Matrix::<f64>::identity(3);
        assert_eq!(
            m.inverse2(),
            Err(LinAlgError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        );
    }

    #[test]
    fn matrix_times_vector() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let v = Vector::from_slice(&[4.0, 2.0]);
        assert_eq!(m.mul_vec(&v).unwrap(), Vector::from_slice(&[8.0, 20.0]));
    }

    #[test]
    fn matrix_times_vector_mismatch() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(
            m.mul_vec(&v),
            Err(LinAlgError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        );
    }

    #[test]
    fn rotation_quarter_turn() {
        let r = Matrix::rotation(core::f64::consts::FRAC_PI_2);
        assert!(r[(0, 0)].abs() < 1.0e-15);
        assert!((r[(0, 1)] - 1.0).abs() < 1.0e-15);
        assert!((r[(1, 0)] + 1.0).abs() < 1.0e-15);
        assert!(r[(1, 1)].abs() < 1.0e-15);
    }

    #[test]
    fn rotation_zero_is_identity() {
        assert_eq!(Matrix::rotation(0.0_f64), Matrix::identity(2));
    }

    #[test]
    fn identity_preserves_vectors() {
        let id = Matrix::identity(3);
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(id.mul_vec(&v).unwrap(), v);
    }
}
