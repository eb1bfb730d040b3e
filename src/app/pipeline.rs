//! Shared "fit pipeline" logic used by both the `fit` and `interactive` front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! points -> fit (exact or grid search) -> residuals -> optional closed-form reference
//!
//! The front-ends can then focus on presentation (flags vs prompt screens).

use crate::domain::{FitConfig, Line, LineFit, PointSet};
use crate::error::AppError;
use crate::fit::{FitOptions, SearchControl, fit_line};
use crate::math::closed_form_line;
use crate::report::{PointResidual, compute_residuals};

/// All computed outputs of a single fit run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub fit: LineFit,
    pub residuals: Vec<PointResidual>,
    /// Closed-form least-squares line, when requested.
    pub reference: Option<Line>,
}

/// Build the core fit options for a run.
pub fn fit_options(config: &FitConfig) -> FitOptions {
    FitOptions {
        precision: config.precision,
        workers: config.workers,
        control: SearchControl::new().with_timeout(config.timeout),
    }
}

/// Execute the fitting pipeline and return the computed outputs.
pub fn run_fit(points: &PointSet, config: &FitConfig) -> Result<RunOutput, AppError> {
    let fit = fit_line(points, &fit_options(config))?;
    let residuals = compute_residuals(points, &fit.line);
    let reference = if config.compare {
        closed_form_line(points)
    } else {
        None
    };

    Ok(RunOutput {
        fit,
        residuals,
        reference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FitMethod, Precision};

    #[test]
    fn run_fit_collects_residuals_and_reference() {
        let points = PointSet::from_coordinates(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]).unwrap();
        let config = FitConfig {
            precision: Precision::Tenth,
            compare: true,
            ..FitConfig::default()
        };
        let run = run_fit(&points, &config).unwrap();
        assert_eq!(run.fit.method, FitMethod::GridSearch);
        assert_eq!(run.residuals.len(), 3);
        let reference = run.reference.unwrap();
        assert!((reference.intercept() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn insufficient_points_exit_code() {
        let points = PointSet::from_coordinates(&[(0.0, 0.0)]).unwrap();
        let err = run_fit(&points, &FitConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
