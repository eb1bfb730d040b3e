//! Search axes for the angle/intercept grid.
//!
//! Each axis is a half-open range `[start, end)` sampled at a fixed step.
//! Values are computed as `start + step * i` from an integer index, never by
//! accumulating the step, so the last sample of a long axis does not drift.

use std::ops::Range;

/// A half-open, evenly stepped axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridAxis {
    start: f64,
    step: f64,
    len: usize,
}

impl GridAxis {
    /// Samples `start + step * i` for every `i` with a value strictly below `end`.
    pub fn half_open(start: f64, end: f64, step: f64) -> Self {
        Self {
            start,
            step,
            len: step_count(start, end, step),
        }
    }

    pub fn value(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Number of samples `start + step * i` strictly below `end`.
///
/// Zero for an empty or inverted range, a non-positive step, or non-finite
/// inputs.
pub fn step_count(start: f64, end: f64, step: f64) -> usize {
    if !(start.is_finite() && end.is_finite() && step.is_finite() && step > 0.0) || end <= start {
        return 0;
    }

    // The ceil estimate can be off by one either way after rounding; settle it
    // against the exact predicate used by `GridAxis::value`.
    let mut n = ((end - start) / step).ceil() as usize;
    while n > 0 && start + step * ((n - 1) as f64) >= end {
        n -= 1;
    }
    while start + step * (n as f64) < end {
        n += 1;
    }
    n
}

/// Split `0..len` into at most `parts` contiguous, ordered ranges.
pub fn partition(len: usize, parts: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }
    let parts = parts.clamp(1, len);
    let chunk = len.div_ceil(parts);
    (0..len)
        .step_by(chunk)
        .map(|lo| lo..(lo + chunk).min(len))
        .collect()
}
