//! Fit a single line to a point set.
//!
//! Path selection:
//! - fewer than 2 points: `InsufficientPoints`
//! - exactly 2 points: exact line through them
//! - pairwise slope range within one precision step: collinear shortcut
//! - otherwise: bounds estimation followed by the grid search
//!
//! Every path finishes with the r² of the chosen line.

use std::time::Instant;

use log::{debug, info};

use crate::domain::{FitMethod, LineFit, PointSet, Precision};
use crate::error::FitError;
use crate::fit::bounds::estimate_bounds;
use crate::fit::control::SearchControl;
use crate::fit::exact::{fit_collinear, fit_two_points};
use crate::fit::goodness::r_squared;
use crate::fit::search::grid_search;

/// Options that affect how a fit request is carried out.
#[derive(Debug, Clone)]
pub struct FitOptions {
    pub precision: Precision,
    /// See `grid_search` for the meaning of `0` and `1`.
    pub workers: usize,
    pub control: SearchControl,
}

impl FitOptions {
    pub fn new(precision: Precision) -> Self {
        Self {
            precision,
            workers: 1,
            control: SearchControl::new(),
        }
    }
}

/// Fit the best line through `points`.
pub fn fit_line(points: &PointSet, opts: &FitOptions) -> Result<LineFit, FitError> {
    let started = Instant::now();
    let precision = opts.precision;

    let (line, method, bounds, candidates) = match points.points() {
        [] | [_] => {
            return Err(FitError::InsufficientPoints { got: points.len() });
        }
        [a, b] => (fit_two_points(a, b)?, FitMethod::TwoPoint, None, 0),
        _ => {
            let bounds = estimate_bounds(points)?;
            debug!(
                "bounds: slope=[{}, {}] intercept=[{}, {}]",
                bounds.min_slope, bounds.max_slope, bounds.min_intercept, bounds.max_intercept
            );

            if bounds.slope_span() <= precision.step() {
                let line = fit_collinear(points, precision)?;
                (line, FitMethod::Collinear, Some(bounds), 0)
            } else {
                let outcome = grid_search(points, &bounds, precision, &opts.control, opts.workers)?;
                (outcome.line, FitMethod::GridSearch, Some(bounds), outcome.candidates)
            }
        }
    };

    let squared_error = line.squared_error(points);
    let r2 = r_squared(&line, points);
    let elapsed = started.elapsed();

    info!(
        "fit: {} points via {} -> y = {}x + {} (sse={squared_error:.6}, r2={r2}, {candidates} candidates, {elapsed:?})",
        points.len(),
        method.display_name(),
        line.slope(),
        line.intercept(),
    );

    Ok(LineFit {
        line,
        method,
        precision,
        bounds,
        squared_error,
        r2,
        candidates,
    })
}
