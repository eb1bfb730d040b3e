//! Point ingest.
//!
//! Turns text (a file, or `--point` arguments) into a validated `PointSet`.
//!
//! Format: one `x,y` pair per line. Blank lines and lines starting with `#`
//! are ignored. Unparseable lines either abort the load (exit code 2) or, with
//! `skip_invalid`, are collected as `RowError`s and reported by the caller.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::domain::{Point, PointSet};
use crate::error::{AppError, PointParseError};

/// A line that could not be parsed as a point.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
    pub error: PointParseError,
}

/// Ingest output: validated points plus skipped rows.
#[derive(Debug, Clone)]
pub struct IngestedPoints {
    pub points: PointSet,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Read and parse a point file.
pub fn load_points(path: &Path, skip_invalid: bool) -> Result<IngestedPoints, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::new(2, format!("Failed to read points file '{}': {e}", path.display())))?;
    debug!("loaded {} bytes from {}", text.len(), path.display());
    parse_points(&text, skip_invalid)
}

/// Parse point text.
pub fn parse_points(text: &str, skip_invalid: bool) -> Result<IngestedPoints, AppError> {
    let mut points = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        rows_read += 1;

        match Point::parse(trimmed) {
            Ok(p) => points.push(p),
            Err(error) if skip_invalid => {
                warn!("skipping line {line} ('{trimmed}'): {error}");
                row_errors.push(RowError {
                    line,
                    text: trimmed.to_string(),
                    error,
                });
            }
            Err(error) => {
                return Err(AppError::new(2, format!("Line {line}: {error} ('{trimmed}')")));
            }
        }
    }

    Ok(IngestedPoints {
        points: PointSet::new(points)?,
        row_errors,
        rows_read,
    })
}

/// Validate points given directly (e.g. repeated `--point` flags).
pub fn collect_points(points: Vec<Point>) -> Result<IngestedPoints, AppError> {
    let rows_read = points.len();
    Ok(IngestedPoints {
        points: PointSet::new(points)?,
        row_errors: Vec::new(),
        rows_read,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comments_and_blank_lines() {
        let text = "# measurements\n0,0\n\n 1, 1 \n2,0\n";
        let ingest = parse_points(text, false).unwrap();
        assert_eq!(ingest.points.len(), 3);
        assert_eq!(ingest.rows_read, 3);
        assert!(ingest.row_errors.is_empty());
        assert_eq!(ingest.points.points()[1], Point::from_coordinates(1.0, 1.0).unwrap());
    }

    #[test]
    fn invalid_line_aborts_by_default() {
        let err = parse_points("0,0\nnope\n2,0\n", false).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("Line 2:"), "{err}");
    }

    #[test]
    fn invalid_lines_are_skipped_on_request() {
        let ingest = parse_points("0,0\nnope\n1,2,3\n2,0\n", true).unwrap();
        assert_eq!(ingest.points.len(), 2);
        assert_eq!(ingest.rows_read, 4);
        let lines: Vec<usize> = ingest.row_errors.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![2, 3]);
        assert_eq!(ingest.row_errors[1].error, PointParseError::WrongArity { found: 3 });
    }

    #[test]
    fn duplicate_x_is_a_fit_error() {
        let err = parse_points("0,0\n0,5\n", false).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn collect_points_validates() {
        let pts = vec![
            Point::from_coordinates(1.0, 1.0).unwrap(),
            Point::from_coordinates(1.0, 2.0).unwrap(),
        ];
        assert!(collect_points(pts).is_err());
    }
}
