//! Slope/intercept bounds from pairwise point lines.
//!
//! The least-squares line always lies inside the rectangle spanned by the
//! slopes and intercepts of the lines through every pair of points, so the
//! grid search only has to cover that rectangle.
//!
//! Cost: `n * (n - 1) / 2` line constructions.

use crate::domain::{Bounds, Line, PointSet};
use crate::error::FitError;

/// Compute the bounds rectangle for a set of at least two points.
///
/// Every pair is re-checked for a shared x value even though `PointSet`
/// already validates this, so a vertical pair still surfaces as
/// `VerticalLine` rather than an infinite slope.
pub fn estimate_bounds(points: &PointSet) -> Result<Bounds, FitError> {
    if points.len() < 2 {
        return Err(FitError::InsufficientPoints { got: points.len() });
    }

    let mut bounds = Bounds {
        min_slope: f64::INFINITY,
        max_slope: f64::NEG_INFINITY,
        min_intercept: f64::INFINITY,
        max_intercept: f64::NEG_INFINITY,
    };

    let pts = points.points();
    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            let line = Line::from_two_points(&pts[i], &pts[j])?;
            bounds.min_slope = bounds.min_slope.min(line.slope());
            bounds.max_slope = bounds.max_slope.max(line.slope());
            bounds.min_intercept = bounds.min_intercept.min(line.intercept());
            bounds.max_intercept = bounds.max_intercept.max(line.intercept());
        }
    }

    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    #[test]
    fn bounds_cover_all_pairwise_lines() {
        let points = PointSet::from_coordinates(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]).unwrap();
        let b = estimate_bounds(&points).unwrap();
        assert_eq!(b.min_slope, -1.0);
        assert_eq!(b.max_slope, 1.0);
        assert_eq!(b.min_intercept, 0.0);
        assert_eq!(b.max_intercept, 2.0);
    }

    #[test]
    fn bounds_are_ordered_for_assorted_sets() {
        let sets: [&[(f64, f64)]; 5] = [
            &[(1.0, 5.0), (2.0, 3.0)],
            &[(-3.0, 2.0), (0.5, -1.0), (4.0, 4.0), (7.0, 0.0)],
            &[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)],
            &[(0.0, 100.0), (0.001, -100.0), (5.0, 3.0)],
            &[(10.0, 1.0), (-10.0, 1.0), (0.0, 1.0)],
        ];
        for coords in sets {
            let points = PointSet::from_coordinates(coords).unwrap();
            let b = estimate_bounds(&points).unwrap();
            assert!(b.min_slope <= b.max_slope, "{coords:?}: {b:?}");
            assert!(b.min_intercept <= b.max_intercept, "{coords:?}: {b:?}");
        }
    }

    #[test]
    fn two_points_collapse_to_a_single_line() {
        let points = PointSet::from_coordinates(&[(1.0, 5.0), (2.0, 3.0)]).unwrap();
        let b = estimate_bounds(&points).unwrap();
        assert_eq!(b.slope_span(), 0.0);
        assert_eq!(b.intercept_span(), 0.0);
        assert_eq!(b.min_slope, -2.0);
        assert_eq!(b.min_intercept, 7.0);
    }

    #[test]
    fn nearly_vertical_pair_is_rejected() {
        let points = PointSet::from_coordinates(&[(0.0, 0.0), (1e-310, 1.0), (2.0, 0.0)]).unwrap();
        assert!(matches!(
            estimate_bounds(&points),
            Err(FitError::UnrepresentableLine { .. })
        ));
    }

    #[test]
    fn fewer_than_two_points_is_rejected() {
        let points = PointSet::new(vec![Point::from_coordinates(1.0, 1.0).unwrap()]).unwrap();
        assert_eq!(
            estimate_bounds(&points),
            Err(FitError::InsufficientPoints { got: 1 })
        );
    }
}
