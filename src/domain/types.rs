//! Shared domain types.
//!
//! These types are intentionally kept small and `Copy` where possible so the
//! search loop can pass them around by value:
//!
//! - `Point` / `PointSet`: validated inputs
//! - `Line` / `Bounds`: computed values, recomputed for every fit request
//! - `Precision`, `RSquared`, `FitMethod`, `LineFit`: fit settings and outputs
//! - `FitConfig` / `LineFile`: run configuration and the JSON export schema

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{FitError, PointParseError};

/// A point in the plane. Both coordinates are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Build a point from raw coordinates, rejecting NaN and infinities.
    pub fn from_coordinates(x: f64, y: f64) -> Result<Self, FitError> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(FitError::NonFiniteCoordinate { x, y });
        }
        Ok(Self { x, y })
    }

    /// Parse `"x,y"`. Whitespace around either value is allowed; the decimal
    /// separator is a period.
    pub fn parse(text: &str) -> Result<Self, PointParseError> {
        let parts: Vec<&str> = text.split(',').collect();
        if parts.len() != 2 {
            return Err(PointParseError::WrongArity { found: parts.len() });
        }
        let x = parse_coordinate('x', parts[0])?;
        let y = parse_coordinate('y', parts[1])?;
        Ok(Self::from_coordinates(x, y)?)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Two points collide when the line through them would be vertical.
    pub fn collides_with(&self, other: &Point) -> bool {
        self.x == other.x
    }
}

fn parse_coordinate(axis: char, raw: &str) -> Result<f64, PointParseError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| PointParseError::InvalidNumber {
            axis,
            value: trimmed.to_string(),
        })
}

impl FromStr for Point {
    type Err = PointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Point::parse(s)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A non-vertical line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    slope: f64,
    intercept: f64,
}

impl Line {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// The unique line through two points.
    ///
    /// Fails with `VerticalLine` when both points share an x value, and with
    /// `UnrepresentableLine` when the x values are so close that the slope or
    /// intercept overflows.
    pub fn from_two_points(a: &Point, b: &Point) -> Result<Self, FitError> {
        if a.collides_with(b) {
            return Err(FitError::VerticalLine { x: a.x });
        }
        let slope = (a.y - b.y) / (a.x - b.x);
        let intercept = a.y - slope * a.x;
        if !(slope.is_finite() && intercept.is_finite()) {
            return Err(FitError::UnrepresentableLine {
                x1: a.x,
                y1: a.y,
                x2: b.x,
                y2: b.y,
            });
        }
        Ok(Self { slope, intercept })
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Predicted y at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Vertical residual `y - predict(x)`.
    pub fn residual(&self, point: &Point) -> f64 {
        point.y - self.predict(point.x)
    }

    /// Sum of squared vertical residuals over `points`.
    pub fn squared_error(&self, points: &PointSet) -> f64 {
        points
            .iter()
            .map(|p| {
                let r = self.residual(p);
                r * r
            })
            .sum()
    }
}

/// An ordered set of points with pairwise distinct x values.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Validate that no two points share an x value.
    ///
    /// Size is not checked here; the fitter reports `InsufficientPoints`.
    pub fn new(points: Vec<Point>) -> Result<Self, FitError> {
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                if points[i].collides_with(&points[j]) {
                    return Err(FitError::VerticalLine { x: points[i].x });
                }
            }
        }
        Ok(Self { points })
    }

    /// Convenience constructor from raw `(x, y)` tuples.
    pub fn from_coordinates(coords: &[(f64, f64)]) -> Result<Self, FitError> {
        let points = coords
            .iter()
            .map(|&(x, y)| Point::from_coordinates(x, y))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Rectangle of feasible `(slope, intercept)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_slope: f64,
    pub max_slope: f64,
    pub min_intercept: f64,
    pub max_intercept: f64,
}

impl Bounds {
    pub fn slope_span(&self) -> f64 {
        self.max_slope - self.min_slope
    }

    pub fn intercept_span(&self) -> f64 {
        self.max_intercept - self.min_intercept
    }

    /// The four corner lines of the rectangle.
    pub fn corners(&self) -> [Line; 4] {
        [
            Line::new(self.min_slope, self.min_intercept),
            Line::new(self.min_slope, self.max_intercept),
            Line::new(self.max_slope, self.min_intercept),
            Line::new(self.max_slope, self.max_intercept),
        ]
    }
}

/// Grid step size. Coarser is faster, finer is more accurate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Precision {
    #[serde(rename = "0.1")]
    #[value(name = "0.1")]
    Tenth,
    #[default]
    #[serde(rename = "0.01")]
    #[value(name = "0.01")]
    Hundredth,
    #[serde(rename = "0.001")]
    #[value(name = "0.001")]
    Thousandth,
}

impl Precision {
    /// All settings, coarsest first (menu order).
    pub const ALL: [Precision; 3] = [Precision::Tenth, Precision::Hundredth, Precision::Thousandth];

    /// Search step, used for both the angle and the intercept axis.
    pub fn step(self) -> f64 {
        match self {
            Precision::Tenth => 0.1,
            Precision::Hundredth => 0.01,
            Precision::Thousandth => 0.001,
        }
    }

    /// Decimal places implied by the step (`-log10(step)`).
    pub fn decimals(self) -> u32 {
        match self {
            Precision::Tenth => 1,
            Precision::Hundredth => 2,
            Precision::Thousandth => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Precision::Tenth => "0.1",
            Precision::Hundredth => "0.01",
            Precision::Thousandth => "0.001",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Precision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Precision::ALL
            .into_iter()
            .find(|p| p.label() == s.trim())
            .ok_or_else(|| format!("Invalid precision '{s}' (expected 0.1, 0.01 or 0.001)"))
    }
}

/// Coefficient of determination.
///
/// `Undefined` is a reportable state (all y values identical), not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RSquared {
    Value(f64),
    Undefined,
}

impl RSquared {
    pub fn value(self) -> Option<f64> {
        match self {
            RSquared::Value(v) => Some(v),
            RSquared::Undefined => None,
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, RSquared::Undefined)
    }
}

impl fmt::Display for RSquared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RSquared::Value(v) => write!(f, "{v}"),
            RSquared::Undefined => f.write_str("undefined"),
        }
    }
}

/// Which path produced the fitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMethod {
    /// Exactly two points: the line through them.
    TwoPoint,
    /// All pairwise slopes within one precision step: line through the first two points.
    Collinear,
    /// Exhaustive angle/intercept grid search.
    GridSearch,
}

impl FitMethod {
    pub fn display_name(self) -> &'static str {
        match self {
            FitMethod::TwoPoint => "exact (two points)",
            FitMethod::Collinear => "exact (collinear)",
            FitMethod::GridSearch => "grid search",
        }
    }
}

/// Output of a single fit request.
#[derive(Debug, Clone)]
pub struct LineFit {
    pub line: Line,
    pub method: FitMethod,
    pub precision: Precision,
    /// Bounds used for the search (absent for the two-point path).
    pub bounds: Option<Bounds>,
    pub squared_error: f64,
    pub r2: RSquared,
    /// Number of grid candidates evaluated (0 for exact paths).
    pub candidates: usize,
}

/// A full run's configuration as understood by the pipeline.
///
/// Derived from CLI flags, with defaults from the environment.
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub precision: Precision,
    /// Parallel search workers; `1` searches on the calling thread, `0` uses
    /// every available rayon thread.
    pub workers: usize,
    pub timeout: Option<Duration>,

    /// Skip unparseable point lines instead of failing.
    pub skip_invalid: bool,
    /// Also solve the closed-form least-squares line for comparison.
    pub compare: bool,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export: Option<PathBuf>,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            precision: Precision::default(),
            workers: 1,
            timeout: None,
            skip_invalid: false,
            compare: false,
            plot: false,
            plot_width: 60,
            plot_height: 20,
            export: None,
        }
    }
}

/// A saved fit (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineFile {
    pub tool: String,
    pub line: Line,
    /// `None` when r² is undefined.
    pub r2: Option<f64>,
    pub precision: Precision,
    pub method: FitMethod,
    pub squared_error: f64,
    pub points: Vec<Point>,
}
