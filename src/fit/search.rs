//! Exhaustive angle/intercept grid search.
//!
//! The slope axis is searched as an angle (`atan(slope)`) so that a fixed step
//! gives the same visual change whether the line is flat or steep; the
//! intercept axis is searched directly. Every `(angle, intercept)` pair is
//! scored by its sum of squared vertical residuals.
//!
//! Cost: `A * B * n` residual evaluations, where `A` and `B` are the angle and
//! intercept sample counts (`range / step` each) and `n` is the point count.
//! Going one precision finer multiplies the work by roughly 100.
//!
//! Ties: only a strictly smaller error replaces the current best, so among
//! equal-error candidates the first in (angle, then intercept) order wins.
//! The parallel path splits the angle axis into contiguous chunks, keeps a
//! local best per chunk, and reduces on `(error, grid index)`, which yields
//! the same line as the sequential scan.

use std::ops::Range;

use log::debug;
use rayon::prelude::*;

use crate::domain::{Bounds, Line, PointSet, Precision};
use crate::error::FitError;
use crate::fit::control::SearchControl;
use crate::fit::grid::{GridAxis, partition};

/// Best grid candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub line: Line,
    pub squared_error: f64,
    /// Candidates evaluated across all workers.
    pub candidates: usize,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    /// Position in global iteration order (`angle_index * intercepts + intercept_index`).
    idx: usize,
    line: Line,
    error: f64,
}

#[derive(Debug, Clone, Copy)]
struct ChunkResult {
    best: Option<Candidate>,
    evaluated: usize,
}

/// Search `bounds` for the line with the smallest squared error.
///
/// `workers <= 1` scans on the calling thread; larger values split the angle
/// axis across that many rayon tasks; `0` means one task per rayon thread.
pub fn grid_search(
    points: &PointSet,
    bounds: &Bounds,
    precision: Precision,
    control: &SearchControl,
    workers: usize,
) -> Result<SearchOutcome, FitError> {
    let step = precision.step();
    let angles = GridAxis::half_open(bounds.min_slope.atan(), bounds.max_slope.atan(), step);
    let intercepts = GridAxis::half_open(bounds.min_intercept, bounds.max_intercept, step);

    debug!(
        "grid search: {} angles x {} intercepts x {} points (step {step})",
        angles.len(),
        intercepts.len(),
        points.len()
    );

    if angles.is_empty() || intercepts.is_empty() {
        return Err(FitError::EmptySearchSpace);
    }

    let workers = if workers == 0 {
        rayon::current_num_threads()
    } else {
        workers
    };
    let chunks = partition(angles.len(), workers);

    let results: Vec<Result<ChunkResult, FitError>> = if chunks.len() <= 1 {
        vec![search_rows(points, &angles, &intercepts, 0..angles.len(), control)]
    } else {
        chunks
            .into_par_iter()
            .map(|rows| search_rows(points, &angles, &intercepts, rows, control))
            .collect()
    };

    let mut best: Option<Candidate> = None;
    let mut candidates = 0usize;
    for result in results {
        let chunk = result?;
        candidates += chunk.evaluated;
        if let Some(c) = chunk.best {
            let better = match &best {
                None => true,
                Some(b) => c.error < b.error || (c.error == b.error && c.idx < b.idx),
            };
            if better {
                best = Some(c);
            }
        }
    }

    let best = best.ok_or(FitError::EmptySearchSpace)?;
    Ok(SearchOutcome {
        line: best.line,
        squared_error: best.error,
        candidates,
    })
}

fn search_rows(
    points: &PointSet,
    angles: &GridAxis,
    intercepts: &GridAxis,
    rows: Range<usize>,
    control: &SearchControl,
) -> Result<ChunkResult, FitError> {
    let mut best: Option<Candidate> = None;
    let mut evaluated = 0usize;

    for i in rows {
        control.check()?;
        let slope = angles.value(i).tan();

        for j in 0..intercepts.len() {
            let line = Line::new(slope, intercepts.value(j));
            let error = line.squared_error(points);
            evaluated += 1;

            // Non-finite scores (overflow on extreme inputs) never win.
            if !error.is_finite() {
                continue;
            }
            if best.as_ref().is_none_or(|b| error < b.error) {
                best = Some(Candidate {
                    idx: i * intercepts.len() + j,
                    line,
                    error,
                });
            }
        }
    }

    Ok(ChunkResult { best, evaluated })
}
