//! Closed-form fits that skip the grid search.
//!
//! - two points: the line through them is the exact answer
//! - collinear sets: all pairwise slopes agree within one precision step, so
//!   the line through the first two points is the answer

use log::warn;

use crate::domain::{Line, Point, PointSet, Precision};
use crate::error::FitError;

/// The unique line through two points with different x.
pub fn fit_two_points(a: &Point, b: &Point) -> Result<Line, FitError> {
    Line::from_two_points(a, b)
}

/// Line through the first two points of a collinear set.
///
/// Remaining points are checked against the line; a residual larger than the
/// precision step is logged, not raised, since the caller already decided the
/// set is collinear at this precision.
pub fn fit_collinear(points: &PointSet, precision: Precision) -> Result<Line, FitError> {
    let pts = points.points();
    let [a, b, rest @ ..] = pts else {
        return Err(FitError::InsufficientPoints { got: pts.len() });
    };
    let line = Line::from_two_points(a, b)?;

    let tolerance = precision.step();
    for p in rest {
        let r = line.residual(p);
        if r.abs() > tolerance {
            warn!(
                "collinear shortcut: point {p} is {:.6} away from y = {}x + {} (tolerance {tolerance})",
                r.abs(),
                line.slope(),
                line.intercept()
            );
        }
    }

    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::from_coordinates(x, y).unwrap()
    }

    #[test]
    fn two_point_fit_has_zero_residuals() {
        let pairs = [
            ((1.0, 5.0), (2.0, 3.0)),
            ((-4.0, 2.5), (3.0, 2.5)),
            ((0.1, 1e6), (0.2, -1e6)),
            ((-7.0, -3.0), (11.0, 42.0)),
        ];
        for ((x0, y0), (x1, y1)) in pairs {
            let (a, b) = (pt(x0, y0), pt(x1, y1));
            let line = fit_two_points(&a, &b).unwrap();
            let scale = y0.abs().max(y1.abs()).max(1.0);
            assert!(line.residual(&a).abs() / scale < 1e-12);
            assert!(line.residual(&b).abs() / scale < 1e-12);
        }
    }

    #[test]
    fn two_point_scenario() {
        let line = fit_two_points(&pt(1.0, 5.0), &pt(2.0, 3.0)).unwrap();
        assert_eq!(line, Line::new(-2.0, 7.0));
    }

    #[test]
    fn shared_x_is_a_vertical_line() {
        assert_eq!(
            fit_two_points(&pt(0.0, 0.0), &pt(0.0, 5.0)),
            Err(FitError::VerticalLine { x: 0.0 })
        );
    }

    #[test]
    fn collinear_uses_first_two_points() {
        let points = PointSet::from_coordinates(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]).unwrap();
        let line = fit_collinear(&points, Precision::Tenth).unwrap();
        assert_eq!(line, Line::new(1.0, 0.0));
        assert!(line.squared_error(&points) < 1e-24);
    }

    #[test]
    fn collinear_needs_two_points() {
        let points = PointSet::from_coordinates(&[(1.0, 1.0)]).unwrap();
        assert_eq!(
            fit_collinear(&points, Precision::Tenth),
            Err(FitError::InsufficientPoints { got: 1 })
        );
    }
}
