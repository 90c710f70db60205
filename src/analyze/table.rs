use crate::precision::log10_abs;

/// The probe grid shared by the growth analyzers: `10^0` down to `10^-15`,
/// one entry per decade.
///
/// The ladder stops where [`significant_digits`](crate::precision) is
/// clamped; probing finer than `1e-15` would read `f64` noise.
pub const DECADES: [f64; 16] = [
    1.0, 1e-1, 1e-2, 1e-3, 1e-4, 1e-5, 1e-6, 1e-7, 1e-8, 1e-9, 1e-10, 1e-11, 1e-12, 1e-13, 1e-14,
    1e-15,
];

/// One probe of an objective: an input and the output it produced.
///
/// The log columns are the coordinates the analyzers actually work in; on
/// a power-law objective `C · x^alpha` they advance by `alpha` per decade.
///
/// # Example
///
/// ```
/// use extrema::analyze::TableRow;
///
/// let row = TableRow {
///     input: 1e-4,
///     output: 350.0,
/// };
/// assert_eq!(row.lg_input(), -4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    /// Probed input.
    pub input: f64,
    /// Objective value at the probe.
    pub output: f64,
}

impl TableRow {
    /// `log10 |input|`.
    pub fn lg_input(&self) -> f64 {
        log10_abs(self.input)
    }

    /// `log10 |output|`.
    pub fn lg_output(&self) -> f64 {
        log10_abs(self.output)
    }
}
