//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal, including small calculator-like screens
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed points: `o`
//! - fitted line: `-`

use crate::domain::{Line, LineFile, Point};

/// Render the points and the fitted line.
pub fn render_ascii_plot(points: &[Point], line: &Line, width: usize, height: usize) -> String {
    let view = Viewport::fit(points, line, width.max(10), height.max(5));
    let mut grid = vec![vec![' '; view.width]; view.height];

    // Line first, so points overlay it. Each column covers the x interval
    // around its centre; steep lines fill every row the interval crosses.
    for col in 0..view.width {
        let (lo, hi) = view.column_span(col);
        let a = view.row(line.predict(lo));
        let b = view.row(line.predict(hi));
        for row in grid.iter_mut().take(a.max(b) + 1).skip(a.min(b)) {
            row[col] = '-';
        }
    }

    for p in points {
        grid[view.row(p.y())][view.col(p.x())] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{:.3}, {:.3}] | y=[{:.2}, {:.2}]\n",
        view.x_min, view.x_max, view.y_min, view.y_max
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

/// Render a saved line file.
pub fn render_ascii_plot_from_line_file(file: &LineFile, width: usize, height: usize) -> String {
    render_ascii_plot(&file.points, &file.line, width, height)
}

/// Data window mapped onto a `width x height` character grid.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    width: usize,
    height: usize,
}

impl Viewport {
    /// Span the points in x; span the points and the line ends in y, padded 5%.
    fn fit(points: &[Point], line: &Line, width: usize, height: usize) -> Self {
        let (x_min, x_max) = span(points.iter().map(|p| p.x())).unwrap_or((0.0, 1.0));
        let ends = [line.predict(x_min), line.predict(x_max)];
        let (y_min, y_max) = span(points.iter().map(|p| p.y()).chain(ends))
            .unwrap_or((ends[0] - 1.0, ends[0] + 1.0));
        let pad = ((y_max - y_min) * 0.05).max(1e-12);

        Self {
            x_min,
            x_max,
            y_min: y_min - pad,
            y_max: y_max + pad,
            width,
            height,
        }
    }

    fn col(&self, x: f64) -> usize {
        let u = ((x - self.x_min) / (self.x_max - self.x_min)).clamp(0.0, 1.0);
        (u * (self.width - 1) as f64).round() as usize
    }

    /// Row 0 is the top (largest y).
    fn row(&self, y: f64) -> usize {
        let u = ((y - self.y_min) / (self.y_max - self.y_min)).clamp(0.0, 1.0);
        ((1.0 - u) * (self.height - 1) as f64).round() as usize
    }

    /// x interval drawn by `col`, clipped to the window.
    fn column_span(&self, col: usize) -> (f64, f64) {
        let dx = (self.x_max - self.x_min) / (self.width - 1) as f64;
        let centre = self.x_min + col as f64 * dx;
        (
            (centre - dx / 2.0).max(self.x_min),
            (centre + dx / 2.0).min(self.x_max),
        )
    }
}

/// `(min, max)` of finite values, when they are not all equal.
fn span(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    (max > min).then_some((min, max))
}
