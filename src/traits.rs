use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Element type for [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix).
///
/// Blanket-implemented, so `f32`, `f64`, and the integer types all
/// qualify without opting in.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by operations that need `sqrt`, `cos`, `abs`, etc.
/// (rotation matrices, 2x2 inversion, the finite-difference engine).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}
