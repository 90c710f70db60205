use super::*;

use crate::linalg::{LinAlgError, Vector};

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

// ═══════════════════════════════════════════════════════════════════
// Table rows
// ═══════════════════════════════════════════════════════════════════

#[test]
fn row_log_columns() {
    let row = TableRow {
        input: 1e-4,
        output: 350.0,
    };
    assert_eq!(row.lg_input(), -4.0);
    assert_near(row.lg_output(), 2.5440680443502757, 1e-12, "lg output");
}

#[test]
fn row_logs_ignore_sign() {
    let row = TableRow {
        input: 1e-2,
        output: -100.0,
    };
    assert_eq!(row.lg_output(), 2.0);
}

#[test]
fn decade_grid_shape() {
    assert_eq!(DECADES.len(), 16);
    assert_eq!(DECADES[0], 1.0);
    assert_eq!(DECADES[15], 1e-15);
}

// ═══════════════════════════════════════════════════════════════════
// Asymptote fit
// ═══════════════════════════════════════════════════════════════════

#[test]
fn fit_of_scaled_line() {
    // f(x) = 10x decays one order per decade with coefficient 10
    let fit = Asymptote::fit(|x| 10.0 * x);
    assert_near(fit.alpha, 1.0, 1e-9, "line alpha");
    assert_near(fit.k, 1.0, 1e-9, "line k");
    assert_near(fit.coefficient(), 10.0, 1e-8, "line coefficient");
}

#[test]
fn fit_of_cube() {
    let fit = Asymptote::fit(|x| x * x * x);
    assert_near(fit.alpha, 3.0, 1e-9, "cube alpha");
    assert_near(fit.coefficient(), 1.0, 1e-9, "cube coefficient");
}

#[test]
fn fit_recovers_fractional_coefficient() {
    let fit = Asymptote::fit(|x| 0.5 * x * x);
    assert_near(fit.alpha, 2.0, 1e-9, "half quadratic alpha");
    assert_near(fit.coefficient(), 0.5, 1e-9, "half quadratic coefficient");
}

// ═══════════════════════════════════════════════════════════════════
// Infinitesimal
// ═══════════════════════════════════════════════════════════════════

#[test]
fn vanishing_at_zero() {
    assert!(Infinitesimal::new(|x| 10.0 * x).is_infinitesimal());
    assert!(!Infinitesimal::new(|x| x + 1.0).is_infinitesimal());
}

#[test]
fn full_table_of_scaled_line() {
    let rows = Infinitesimal::new(|x| 10.0 * x).table(0..16).unwrap();
    assert_eq!(rows.len(), 16);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.input, DECADES[i]);
        assert_eq!(row.output, 10.0 * row.input);
        // lg columns advance one per decade, offset by the coefficient
        assert_near(row.lg_input(), -(i as f64), 1e-9, "lg input");
        assert_near(row.lg_output(), 1.0 - i as f64, 1e-9, "lg output");
    }
}

#[test]
fn table_window() {
    let rows = Infinitesimal::new(|x| x * x).table(2..5).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].input, 1e-2);
    assert_eq!(rows[2].input, 1e-4);
}

#[test]
fn table_rejects_bad_windows() {
    let mut f = Infinitesimal::new(|x| x);
    assert_eq!(
        f.table(0..17),
        Err(AnalyzeError::RangeOutOfBounds { start: 0, end: 17 })
    );
    assert_eq!(
        f.table(5..2),
        Err(AnalyzeError::RangeOutOfBounds { start: 5, end: 2 })
    );
}

#[test]
fn empty_window_is_empty_table() {
    let rows = Infinitesimal::new(|x| x).table(3..3).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn analyzer_delegates_to_fit() {
    let mut f = Infinitesimal::new(|x| 10.0 * x);
    assert_near(f.asymptote().alpha, 1.0, 1e-9, "alpha");
    assert_near(f.coefficient(), 10.0, 1e-8, "coefficient");
}

// ═══════════════════════════════════════════════════════════════════
// Infinite
// ═══════════════════════════════════════════════════════════════════

#[test]
fn worst_case_swap_counts() {
    assert_eq!(bubble_swaps(0), 0);
    assert_eq!(bubble_swaps(1), 0);
    assert_eq!(bubble_swaps(2), 1);
    assert_eq!(bubble_swaps(10), 45);
    assert_eq!(bubble_swaps(100), 4950);
}

#[test]
fn sort_table_counts_swaps() {
    // Decade 10^-d sorts 10^d elements
    let rows = Infinite::new().table(1..4).unwrap();
    assert_eq!(rows[0].output, 1.0 / 45.0);
    assert_eq!(rows[1].output, 1.0 / 4950.0);
    assert_eq!(rows[2].output, 1.0 / 499500.0);
}

#[test]
fn sort_decade_zero_is_swapless() {
    // A one-element sort never swaps; its reciprocal blows up
    let rows = Infinite::new().table(0..1).unwrap();
    assert!(rows[0].output.is_infinite());
}

#[test]
fn sort_grows_quadratically() {
    // Probes two sorts of ~10^4 elements; alpha reads n(n-1)/2 as order 2
    let fit = Infinite::new().asymptote();
    assert_eq!(fit.alpha.round(), 2.0, "alpha = {}", fit.alpha);
}

// ═══════════════════════════════════════════════════════════════════
// Directional
// ═══════════════════════════════════════════════════════════════════

#[test]
fn slice_table_squares_the_ray() {
    let sphere = |v: &Vector<f64>| v[0] * v[0] + v[1] * v[1];
    let mut along = Directional::new(
        sphere,
        Vector::zeros(2),
        Vector::from_slice(&[1.0, 0.0]),
    );
    let rows = along.table(0..3).unwrap();
    for row in &rows {
        assert_eq!(row.output, row.input * row.input);
    }
}

#[test]
fn order_reads_one_along_the_gradient_two_across() {
    // f(v) = v0^2 - 6 sqrt(v0 v1) at (1, 1): the slope along (1, 3)/sqrt(10)
    // is nonzero, so that slice is first-order; the orthogonal slice loses
    // its linear term and reads the curvature
    let f = |v: &Vector<f64>| v[0] * v[0] - 6.0 * (v[0] * v[1]).sqrt();
    let at = Vector::from_slice(&[1.0, 1.0]);
    let dir = Vector::from_slice(&[1.0 / 10f64.sqrt(), 3.0 / 10f64.sqrt()]);
    let orth = dir.orth().unwrap();

    let along = Directional::new(f, at.clone(), dir).asymptote().alpha;
    let across = Directional::new(f, at, orth).asymptote().alpha;

    assert_eq!(along.round(), 1.0, "along = {}", along);
    assert_eq!(across.round(), 2.0, "across = {}", across);
    assert!(across > along);
}

#[test]
fn circle_of_the_sphere_is_the_unit_ring() {
    // Slices of v0^2 + v1^2 out of the origin are t^2 in every direction,
    // so every mark lands at distance 1
    let sphere = |v: &Vector<f64>| v[0] * v[0] + v[1] * v[1];
    let mut probe = Directional::new(
        sphere,
        Vector::zeros(2),
        Vector::from_slice(&[1.0, 0.0]),
    );
    let ring = probe.circle(8).unwrap();
    assert_eq!(ring.len(), 8);
    assert_near(ring[0][0], 1.0, 1e-9, "first mark x");
    assert_near(ring[0][1], 0.0, 1e-9, "first mark y");
    for mark in &ring {
        let norm = mark.dot(mark).unwrap().sqrt();
        assert_near(norm, 1.0, 1e-9, "mark norm");
    }
    // The sweep worked on a copy; the stored direction did not turn
    assert_eq!(probe.direction(), &Vector::from_slice(&[1.0, 0.0]));
}

#[test]
fn circle_rejects_non_plane_directions() {
    let f = |v: &Vector<f64>| v[0] * v[0] + v[1] * v[1] + v[2] * v[2];
    let mut probe = Directional::new(
        f,
        Vector::zeros(3),
        Vector::from_slice(&[1.0, 0.0, 0.0]),
    );
    assert_eq!(
        probe.circle(1),
        Err(LinAlgError::DimensionMismatch {
            expected: 2,
            got: 3
        })
    );
    // The fit itself has no dimension restriction
    assert_near(probe.asymptote().alpha, 2.0, 1e-6, "3d slice alpha");
}

// ═══════════════════════════════════════════════════════════════════
// Error display
// ═══════════════════════════════════════════════════════════════════

#[cfg(feature = "std")]
#[test]
fn error_display() {
    let e = AnalyzeError::RangeOutOfBounds { start: 0, end: 17 };
    assert_eq!(
        format!("{}", e),
        "decade window 0..17 outside the 16-entry probe grid"
    );
}
