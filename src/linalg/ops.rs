use core::ops::{Add, Div, Mul, Sub};

use crate::traits::Scalar;

use super::{Matrix, Vector};

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.len(),
            rhs.len(),
            "length mismatch: {} + {}",
            self.len(),
            rhs.len(),
        );
        Vector {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| a + b)
                .collect(),
        }
    }
}

impl<T: Scalar> Add for Vector<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Vector<T>> for Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Vector<T>> for &Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: Vector<T>) -> Vector<T> {
        self + &rhs
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.len(),
            rhs.len(),
            "length mismatch: {} - {}",
            self.len(),
            rhs.len(),
        );
        Vector {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| a - b)
                .collect(),
        }
    }
}

impl<T: Scalar> Sub for Vector<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Vector<T>> for Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Vector<T>> for &Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: Vector<T>) -> Vector<T> {
        self - &rhs
    }
}

// ── Scalar multiplication and division: vector ──────────────────────

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        Vector {
            data: self.data.iter().map(|&x| x * rhs).collect(),
        }
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        &self * rhs
    }
}

impl<T: Scalar> Div<T> for &Vector<T> {
    type Output = Vector<T>;

    fn div(self, rhs: T) -> Vector<T> {
        Vector {
            data: self.data.iter().map(|&x| x / rhs).collect(),
        }
    }
}

impl<T: Scalar> Div<T> for Vector<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        &self / rhs
    }
}

// ── scalar * vector (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul_vec {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                    rhs * self
                }
            }

            impl Mul<&Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: &Vector<$t>) -> Vector<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul_vec!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Scalar multiplication and division: matrix ──────────────────────

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        Matrix {
            data: self.data.iter().map(|&x| x * rhs).collect(),
            n: self.n,
        }
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        &self * rhs
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        Matrix {
            data: self.data.iter().map(|&x| x / rhs).collect(),
            n: self.n,
        }
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        &self / rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let b = Vector::from_slice(&[4.0, 5.0, 6.0]);

        let c = &a + &b;
        assert_eq!(c, Vector::from_slice(&[5.0, 7.0, 9.0]));

        let d = &b - &a;
        assert_eq!(d, Vector::from_slice(&[3.0, 3.0, 3.0]));
    }

    #[test]
    fn ref_variants() {
        let a = Vector::from_slice(&[1.0, 2.0]);
        let b = Vector::from_slice(&[3.0, 4.0]);

        let sum1 = &a + &b;
        let sum2 = a.clone() + &b;
        let sum3 = &a + b.clone();
        let sum4 = a.clone() + b.clone();
        assert_eq!(sum1, sum2);
        assert_eq!(sum1, sum3);
        assert_eq!(sum1, sum4);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn add_length_mismatch() {
        let a = Vector::from_slice(&[1.0, 2.0]);
        let b = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let _ = &a + &b;
    }

    #[test]
    fn scalar_multiply() {
        let v = Vector::from_slice(&[1.0, 2.0]);
        assert_eq!(&v * 3.0, Vector::from_slice(&[3.0, 6.0]));
        assert_eq!(3.0 * &v, Vector::from_slice(&[3.0, 6.0]));
        assert_eq!(3.0 * v, Vector::from_slice(&[3.0, 6.0]));
    }

    #[test]
    fn scalar_divide() {
        let v = Vector::from_slice(&[2.0, 4.0]);
        assert_eq!(&v / 2.0, Vector::from_slice(&[1.0, 2.0]));
    }

    #[test]
    fn matrix_scalar_ops() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let doubled = &m * 2.0;
        assert_eq!(
            doubled,
            Matrix::from_rows(&[[2.0, 4.0], [6.0, 8.0]]).unwrap()
        );
        assert_eq!(doubled / 2.0, m);
    }
}
