//! Search brackets: plain midpoint triplets and golden-ratio triplets.
//!
//! A bracket is an interval `[a, b]` believed to contain a local optimum,
//! probed at one or two interior points. [`Triplet`] splits at the midpoint
//! and is rebuilt every dichotomy iteration; [`GoldenTriplet`] is an
//! immutable value whose interior points divide the interval in the golden
//! ratio, so a shrink reuses one of the two probes instead of re-evaluating.

/// Midpoint bracket: `[a, b]` probed at `a + (b - a) / 2`.
///
/// A transient working value. Both endpoints are public and freely
/// reassigned while a bracket is being grown or shrunk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triplet {
    /// Left endpoint.
    pub a: f64,
    /// Right endpoint.
    pub b: f64,
}

impl Triplet {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Interior probe point, halfway between the endpoints.
    ///
    /// ```
    /// use extrema::bracket::Triplet;
    /// assert_eq!(Triplet::new(1.0, 3.0).center(), 2.0);
    /// assert_eq!(Triplet::new(-5.0, -3.0).center(), -4.0);
    /// ```
    pub fn center(&self) -> f64 {
        self.a + (self.b - self.a) / 2.0
    }

    /// Bracket width `|b - a|`.
    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }
}

/// Golden-ratio bracket: `[a, b]` probed at the two golden interior points.
///
/// For `a < b` the points order as `a < left_center < right_center < b`
/// (mirrored when the bracket runs the other way), and each interior point
/// is the golden section of the interval measured from its near end. The
/// value is immutable; moving an interior point means back-solving a new
/// `b` through one of the two factories.
///
/// ```
/// use extrema::bracket::GoldenTriplet;
///
/// let t = GoldenTriplet::new(0.0, 1.0);
/// assert_eq!(t.right_center(), GoldenTriplet::GOLDEN);
/// assert!((t.left_center() - GoldenTriplet::SMALL_GOLDEN).abs() < 1e-8);
///
/// // Back-solving the right center onto GOLDEN recovers b == 1.
/// let s = GoldenTriplet::from_right_center(0.0, GoldenTriplet::GOLDEN);
/// assert!((s.b() - 1.0).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenTriplet {
    a: f64,
    b: f64,
}

impl GoldenTriplet {
    /// `1 / φ²`, the left interior point of a unit bracket.
    pub const SMALL_GOLDEN: f64 = 0.3819660113;
    /// `1 / φ`, the right interior point of a unit bracket.
    pub const GOLDEN: f64 = 0.6180339887;
    /// `φ` itself.
    pub const BIG_GOLDEN: f64 = 1.6180339887;

    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Bracket whose [`right_center`](Self::right_center) lands on `rc`:
    /// `b = rc * φ - a / φ`.
    pub fn from_right_center(a: f64, rc: f64) -> Self {
        Self {
            a,
            b: rc * Self::BIG_GOLDEN - a * Self::GOLDEN,
        }
    }

    /// Bracket whose [`left_center`](Self::left_center) lands on `lc`:
    /// `b = lc + φ * (lc - a)`.
    pub fn from_left_center(a: f64, lc: f64) -> Self {
        Self {
            a,
            b: lc + Self::BIG_GOLDEN * (lc - a),
        }
    }

    /// Left endpoint.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Right endpoint.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Midpoint of the bracket, the reported result of a finished search.
    pub fn center(&self) -> f64 {
        self.a + (self.b - self.a) / 2.0
    }

    /// Interior point a golden section from `a`: `a + (b - a) / φ`.
    pub fn right_center(&self) -> f64 {
        self.a + (self.b - self.a) * Self::GOLDEN
    }

    /// Interior point a golden section from `b`: `b - (b - a) / φ`.
    pub fn left_center(&self) -> f64 {
        self.b - (self.b - self.a) * Self::GOLDEN
    }

    /// Bracket width `|b - a|`.
    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }
}
