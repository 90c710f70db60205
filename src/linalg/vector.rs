use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

use super::{LinAlgError, Matrix};

/// Dynamically-sized heap-allocated vector.
///
/// The coordinate type of the multivariate calculus: objective functions
/// take `&Vector<f64>`, gradients come back as `Vector<f64>`. Arithmetic
/// returns new vectors; nothing mutates in place except indexed assignment.
///
/// # Examples
///
/// ```
/// use extrema::Vector;
///
/// let v = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.dot(&v).unwrap(), 14.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    pub(crate) data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Create a vector from a flat slice.
    ///
    /// ```
    /// use extrema::Vector;
    /// let v = Vector::from_slice(&[1.0, 2.0]);
    /// assert_eq!(v[1], 2.0);
    /// ```
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Create a vector from an owned `Vec`.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Create a zero vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![T::zero(); n],
        }
    }

    /// Create a vector by calling `f(i)` for each element.
    ///
    /// ```
    /// use extrema::Vector;
    /// let v = Vector::from_fn(3, |i| i as f64);
    /// assert_eq!(v[2], 2.0);
    /// ```
    pub fn from_fn(n: usize, mut f: impl FnMut(usize) -> T) -> Self {
        let mut data = Vec::with_capacity(n);
        for i in 0..n {
            data.push(f(i));
        }
        Self { data }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the vector data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// [`LinAlgError::DimensionMismatch`] if the lengths differ.
    ///
    /// ```
    /// use extrema::Vector;
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b).unwrap(), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> Result<T, LinAlgError> {
        if self.len() != rhs.len() {
            return Err(LinAlgError::DimensionMismatch {
                expected: self.len(),
                got: rhs.len(),
            });
        }
        let mut sum = T::zero();
        for i in 0..self.len() {
            sum = sum + self.data[i] * rhs.data[i];
        }
        Ok(sum)
    }

    /// The perpendicular of a plane vector: `(a, b)` becomes `(b, -a)`.
    ///
    /// Only defined in two dimensions; the directional analyzer uses it to
    /// probe growth at right angles to a given direction.
    ///
    /// # Errors
    ///
    /// [`LinAlgError::DimensionMismatch`] unless `len() == 2`.
    pub fn orth(&self) -> Result<Self, LinAlgError> {
        if self.len() != 2 {
            return Err(LinAlgError::DimensionMismatch {
                expected: 2,
                got: self.len(),
            });
        }
        Ok(Self::from_slice(&[
            self.data[1],
            T::zero() - self.data[0],
        ]))
    }

    /// Row-vector times matrix: `ans[i] = Σ_j self[j] * m[(j, i)]`.
    ///
    /// # Errors
    ///
    /// [`LinAlgError::DimensionMismatch`] if `self.len() != m.n()`.
    ///
    /// ```
    /// use extrema::{Matrix, Vector};
    /// let v = Vector::from_slice(&[4.0, 2.0]);
    /// let m = Matrix::from_rows(&[[7.0, 12.0], [9.0, 1.0]]).unwrap();
    /// assert_eq!(v.mul_mat(&m).unwrap(), Vector::from_slice(&[46.0, 50.0]));
    /// ```
    pub fn mul_mat(&self, m: &Matrix<T>) -> Result<Self, LinAlgError> {
        if self.len() != m.n() {
            return Err(LinAlgError::DimensionMismatch {
                expected: m.n(),
                got: self.len(),
            });
        }
        Ok(Self::from_fn(m.n(), |i| {
            let mut sum = T::zero();
            for j in 0..self.len() {
                sum = sum + self.data[j] * m[(j, i)];
            }
            sum
        }))
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}
