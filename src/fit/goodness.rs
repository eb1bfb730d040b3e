//! Coefficient of determination.

use crate::domain::{Line, PointSet, RSquared};

/// `r² = 1 - SSres / SStot`.
///
/// Returns `RSquared::Undefined` when every y is identical or the set is
/// empty. Constant y is tested on the inputs, not on the computed `SStot`:
/// the float mean of identical values such as `0.1` can differ from them in
/// the last bit and leave a tiny non-zero `SStot`.
pub fn r_squared(line: &Line, points: &PointSet) -> RSquared {
    let Some(first) = points.points().first() else {
        return RSquared::Undefined;
    };
    if points.iter().all(|p| p.y() == first.y()) {
        return RSquared::Undefined;
    }

    let avg_y = points.iter().map(|p| p.y()).sum::<f64>() / points.len() as f64;

    let ss_tot: f64 = points
        .iter()
        .map(|p| {
            let d = p.y() - avg_y;
            d * d
        })
        .sum();
    let ss_res: f64 = points
        .iter()
        .map(|p| {
            let d = line.predict(p.x()) - p.y();
            d * d
        })
        .sum();

    RSquared::Value(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_fit_is_one() {
        let points = PointSet::from_coordinates(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]).unwrap();
        assert_eq!(r_squared(&Line::new(1.0, 0.0), &points), RSquared::Value(1.0));
    }

    #[test]
    fn constant_y_is_undefined() {
        let points = PointSet::from_coordinates(&[(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]).unwrap();
        let r2 = r_squared(&Line::new(0.0, 5.0), &points);
        assert!(r2.is_undefined());
        assert_eq!(r2.value(), None);
    }

    #[test]
    fn constant_y_with_inexact_mean_is_undefined() {
        for y in [0.1, 0.7] {
            let points = PointSet::from_coordinates(&[(1.0, y), (2.0, y), (3.0, y)]).unwrap();
            let r2 = r_squared(&Line::new(0.0, y), &points);
            assert!(r2.is_undefined(), "y={y}: {r2}");
        }
    }

    #[test]
    fn mean_line_scores_zero() {
        // The horizontal line through the mean explains none of the variance.
        let points = PointSet::from_coordinates(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]).unwrap();
        let r2 = r_squared(&Line::new(0.0, 1.0 / 3.0), &points).value().unwrap();
        assert!(r2.abs() < 1e-12, "r2={r2}");
    }

    #[test]
    fn poor_fit_can_go_negative() {
        let points = PointSet::from_coordinates(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).unwrap();
        let r2 = r_squared(&Line::new(-1.0, 0.0), &points).value().unwrap();
        assert!(r2 < 0.0);
    }
}
