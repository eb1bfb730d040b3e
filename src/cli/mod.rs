//! Command-line parsing for the line fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fitting code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{Point, Precision};

pub mod prompt;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "linefit", version, about = "Best-fit line by exhaustive grid search")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a line to points given on the command line or in a file.
    Fit(FitArgs),
    /// Prompt for a precision and points, then show the fitted line.
    ///
    /// This is the default when `linefit` runs without a subcommand.
    Interactive(InteractiveArgs),
    /// Plot a previously exported line JSON.
    Plot(PlotArgs),
}

/// Search settings shared by `fit` and `interactive`.
///
/// Unset values fall back to `LINEFIT_*` environment variables, then to
/// built-in defaults.
#[derive(Debug, Args, Clone, Default)]
pub struct SearchArgs {
    /// Parallel search workers (1 = single-threaded, 0 = all cores).
    #[arg(long)]
    pub workers: Option<usize>,

    /// Abort the grid search after this many milliseconds.
    #[arg(long = "timeout-ms")]
    pub timeout_ms: Option<u64>,
}

/// Options for `linefit fit`.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// A point as `x,y` (repeatable).
    #[arg(short = 'p', long = "point", value_name = "X,Y", allow_hyphen_values = true)]
    pub points: Vec<Point>,

    /// Read points from a file (one `x,y` per line, `#` comments allowed).
    #[arg(short = 'f', long, value_name = "FILE", conflicts_with = "points")]
    pub file: Option<PathBuf>,

    /// Search step (also sets the decimals shown for the intercept).
    #[arg(long, value_enum)]
    pub precision: Option<Precision>,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Skip unparseable lines in `--file` instead of failing.
    #[arg(long)]
    pub skip_invalid: bool,

    /// Also print the closed-form least-squares line.
    #[arg(long)]
    pub compare: bool,

    /// Print the per-point residual table.
    #[arg(long)]
    pub residuals: bool,

    /// Render an ASCII plot of the points and the line.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the fit to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for `linefit interactive`.
#[derive(Debug, Parser, Clone, Default)]
pub struct InteractiveArgs {
    /// Clear the screen by printing blank lines instead of terminal control
    /// sequences (for dumb terminals and small device screens).
    #[arg(long)]
    pub plain: bool,

    #[command(flatten)]
    pub search: SearchArgs,
}

/// Options for plotting a saved line.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Line JSON file produced by `linefit fit --export`.
    #[arg(long, value_name = "JSON")]
    pub line: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_accepts_negative_points() {
        let cli = Cli::try_parse_from([
            "linefit", "fit", "-p", "-1,2", "--point", "3,-4", "--precision", "0.001", "--workers", "4",
        ])
        .unwrap();
        let Command::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert_eq!(args.points.len(), 2);
        assert_eq!(args.points[0].x(), -1.0);
        assert_eq!(args.precision, Some(Precision::Thousandth));
        assert_eq!(args.search.workers, Some(4));
    }

    #[test]
    fn fit_rejects_bad_point() {
        assert!(Cli::try_parse_from(["linefit", "fit", "-p", "1;2"]).is_err());
    }

    #[test]
    fn file_and_points_conflict() {
        assert!(Cli::try_parse_from(["linefit", "fit", "-p", "1,2", "-f", "pts.txt"]).is_err());
    }
}
