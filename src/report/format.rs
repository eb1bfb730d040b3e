//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the fitting code stays free of presentation concerns
//! - output changes are localized (the summary below is covered by golden tests)

use crate::domain::{Line, LineFit};
use crate::report::PointResidual;

/// Decimal places used for the slope in summaries.
const SLOPE_DECIMALS: u32 = 4;

/// Format the fitted line.
///
/// The first four lines are the classic calculator readout:
/// `y = mx + b`, `m` (4 decimals), `b` (one decimal per precision digit) and
/// `r2` (or `undefined`). Diagnostics follow after a blank line.
pub fn format_fit_summary(fit: &LineFit, reference: Option<&Line>) -> String {
    let mut out = String::new();
    let decimals = fit.precision.decimals();

    out.push_str("y = mx + b\n");
    out.push_str(&format!("m = {}\n", round_to(fit.line.slope(), SLOPE_DECIMALS)));
    out.push_str(&format!("b = {}\n", round_to(fit.line.intercept(), decimals)));
    out.push_str(&format!("r2 = {}\n", fit.r2));

    out.push('\n');
    out.push_str(&format!("Method: {} (precision {})\n", fit.method.display_name(), fit.precision));
    if let Some(b) = &fit.bounds {
        out.push_str(&format!(
            "Bounds: slope=[{:.4}, {:.4}] intercept=[{:.4}, {:.4}]\n",
            b.min_slope, b.max_slope, b.min_intercept, b.max_intercept
        ));
    }
    if fit.candidates > 0 {
        out.push_str(&format!("Candidates: {}\n", fit.candidates));
    }
    out.push_str(&format!("SSE: {:.6}\n", fit.squared_error));

    if let Some(r) = reference {
        out.push_str(&format!(
            "Closed form: m = {} b = {}\n",
            round_to(r.slope(), SLOPE_DECIMALS),
            round_to(r.intercept(), decimals)
        ));
    }

    out
}

/// Format the per-point residual table.
pub fn format_residuals(rows: &[PointResidual]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>12} {:>12} {:>12} {:>12}", "x", "y_obs", "y_fit", "residual"));
    out.push('\n');
    out.push_str(&format!("{:-<12} {:-<12} {:-<12} {:-<12}", "", "", "", ""));
    out.push('\n');

    for r in rows {
        out.push_str(&format!(
            "{:>12.4} {:>12.4} {:>12.4} {:>12.4}",
            r.point.x(),
            r.point.y(),
            r.y_fit,
            r.residual
        ));
        out.push('\n');
    }

    out
}

/// Round to `decimals` places. Negative zero is normalized to zero so that
/// summaries never print `-0`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PointSet, Precision};
    use crate::fit::{FitOptions, fit_line};
    use crate::report::compute_residuals;

    #[test]
    fn round_to_decimals() {
        assert_eq!(round_to(0.33333, 1), 0.3);
        assert_eq!(round_to(0.33333, 3), 0.333);
        assert_eq!(round_to(-0.00001, 2), 0.0);
        assert_eq!(round_to(-0.00001, 2).to_string(), "0");
        assert_eq!(round_to(1.23456, 4), 1.2346);
    }

    #[test]
    fn summary_golden_two_points() {
        let points = PointSet::from_coordinates(&[(1.0, 5.0), (2.0, 3.0)]).unwrap();
        let fit = fit_line(&points, &FitOptions::new(Precision::Hundredth)).unwrap();
        let txt = format_fit_summary(&fit, None);
        let expected = concat!(
            "y = mx + b\n",
            "m = -2\n",
            "b = 7\n",
            "r2 = 1\n",
            "\n",
            "Method: exact (two points) (precision 0.01)\n",
            "SSE: 0.000000\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn summary_reports_undefined_r2() {
        let points = PointSet::from_coordinates(&[(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]).unwrap();
        let fit = fit_line(&points, &FitOptions::new(Precision::Tenth)).unwrap();
        let txt = format_fit_summary(&fit, None);
        assert!(txt.contains("r2 = undefined\n"), "{txt}");
        assert!(txt.contains("m = 0\n"), "{txt}");
        assert!(txt.contains("Bounds: "), "{txt}");
    }

    #[test]
    fn residual_table_has_a_row_per_point() {
        let points = PointSet::from_coordinates(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]).unwrap();
        let rows = compute_residuals(&points, &Line::new(0.0, 0.5));
        let txt = format_residuals(&rows);
        assert_eq!(txt.lines().count(), 2 + 3);
        assert!(txt.lines().nth(3).unwrap().ends_with("0.5000"));
    }
}
