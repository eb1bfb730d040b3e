//! Read/write fitted-line JSON files.
//!
//! A line file is the portable representation of a fit:
//! - the line (slope, intercept) and its r² (`null` when undefined)
//! - the precision and fit method used
//! - the input points, so the fit can be re-plotted later
//!
//! The schema is defined by `domain::LineFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{LineFile, LineFit, PointSet};
use crate::error::AppError;

/// Build the serializable record for a fit.
pub fn to_line_file(fit: &LineFit, points: &PointSet) -> LineFile {
    LineFile {
        tool: "linefit".to_string(),
        line: fit.line,
        r2: fit.r2.value(),
        precision: fit.precision,
        method: fit.method,
        squared_error: fit.squared_error,
        points: points.points().to_vec(),
    }
}

/// Write a line JSON file.
pub fn write_line_json(path: &Path, fit: &LineFit, points: &PointSet) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create line JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &to_line_file(fit, points))
        .map_err(|e| AppError::new(2, format!("Failed to write line JSON: {e}")))?;

    Ok(())
}

/// Read a line JSON file.
pub fn read_line_json(path: &Path) -> Result<LineFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open line JSON '{}': {e}", path.display())))?;
    let line: LineFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid line JSON: {e}")))?;
    Ok(line)
}
