//! Error types.
//!
//! Two layers:
//!
//! - `FitError` / `PointParseError`: typed failures of the fitting core and of
//!   point parsing. Callers match on these.
//! - `AppError`: what the binary reports. It carries a process exit code and a
//!   user-facing message.
//!
//! Exit codes:
//! - `2`: invalid input or configuration
//! - `3`: not enough data to fit
//! - `4`: the fit itself failed (vertical line, empty search, aborted search)

use std::time::Duration;

/// Failures of a single fit request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Fewer than two points were supplied.
    #[error("Not enough points for a regression: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    /// Two points share the same x value; the only line through them is vertical.
    #[error("Two points share the same x value ({x}); vertical lines are not supported")]
    VerticalLine { x: f64 },

    /// The grid search finished without evaluating a single candidate.
    #[error("Search space is empty: the slope/intercept bounds produced no grid candidates")]
    EmptySearchSpace,

    /// Two points are too close in x for their line to be represented: the
    /// slope or intercept overflows.
    #[error("The line through ({x1}, {y1}) and ({x2}, {y2}) has a non-finite slope or intercept")]
    UnrepresentableLine { x1: f64, y1: f64, x2: f64, y2: f64 },

    /// A coordinate is NaN or infinite.
    #[error("Point coordinates must be finite (got x={x}, y={y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    /// The search was cancelled through its control handle.
    #[error("Search cancelled")]
    Cancelled,

    /// The search ran past its deadline.
    #[error("Search timed out after {elapsed:?}")]
    TimedOut { elapsed: Duration },
}

/// Failures when parsing a point from text such as `"1.5, -2"`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PointParseError {
    #[error("Expected exactly two comma-separated coordinates, found {found}")]
    WrongArity { found: usize },

    #[error("Invalid {axis} coordinate '{value}'")]
    InvalidNumber { axis: char, value: String },

    #[error(transparent)]
    Fit(#[from] FitError),
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        let exit_code = match err {
            FitError::InsufficientPoints { .. } => 3,
            FitError::NonFiniteCoordinate { .. } => 2,
            FitError::VerticalLine { .. }
            | FitError::UnrepresentableLine { .. }
            | FitError::EmptySearchSpace
            | FitError::Cancelled
            | FitError::TimedOut { .. } => 4,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
