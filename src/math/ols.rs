//! Closed-form least squares.
//!
//! The grid search is the fitting engine; this solver provides the analytic
//! reference line it is compared against (`--compare` and tests):
//!
//! ```text
//! minimize Σ (y_i - (b + m x_i))^2
//! ```
//!
//! Implementation choices:
//! - design matrix rows are `[1, x_i]`
//! - SVD solve, because the matrix is tall (more rows than columns) and
//!   nalgebra's `QR::solve` is meant for square systems

use nalgebra::{DMatrix, DVector};

use crate::domain::{Line, PointSet};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[1e-12, 1e-10, 1e-8] {
        if let Some(beta) = svd.solve(y, tol).ok().filter(|b| b.iter().all(|v| v.is_finite())) {
            return Some(beta);
        }
    }

    None
}

/// Ordinary least-squares line through `points`.
///
/// `None` for fewer than two points.
pub fn closed_form_line(points: &PointSet) -> Option<Line> {
    let n = points.len();
    if n < 2 {
        return None;
    }

    let mut x = DMatrix::<f64>::zeros(n, 2);
    let mut y = DVector::<f64>::zeros(n);
    for (i, p) in points.iter().enumerate() {
        x[(i, 0)] = 1.0;
        x[(i, 1)] = p.x();
        y[i] = p.y();
    }

    let beta = solve_least_squares(&x, &y)?;
    Some(Line::new(beta[1], beta[0]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn closed_form_triangle() {
        let points = PointSet::from_coordinates(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]).unwrap();
        let line = closed_form_line(&points).unwrap();
        assert!(line.slope().abs() < 1e-12);
        assert!((line.intercept() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn closed_form_needs_two_points() {
        let points = PointSet::from_coordinates(&[(1.0, 1.0)]).unwrap();
        assert!(closed_form_line(&points).is_none());
    }
}
