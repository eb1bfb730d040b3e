//! Reporting utilities: per-point residuals and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::{Line, Point, PointSet};

/// A per-point fitted result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointResidual {
    pub point: Point,
    pub y_fit: f64,
    pub residual: f64,
}

/// Compute fitted values and residuals for each point, in input order.
pub fn compute_residuals(points: &PointSet, line: &Line) -> Vec<PointResidual> {
    points
        .iter()
        .map(|p| {
            let y_fit = line.predict(p.x());
            PointResidual {
                point: *p,
                y_fit,
                residual: p.y() - y_fit,
            }
        })
        .collect()
}
