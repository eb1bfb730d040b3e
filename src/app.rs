//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and environment defaults
//! - collects points (flags, file, or interactive prompt)
//! - runs the fit pipeline
//! - prints the summary / plot and writes optional exports

use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use log::info;

use crate::cli::prompt::{BlankLineScreen, Prompt, Screen, TerminalScreen, collect_input};
use crate::cli::{Command, FitArgs, InteractiveArgs, PlotArgs, SearchArgs};
use crate::config::EnvDefaults;
use crate::domain::{FitConfig, PointSet};
use crate::error::AppError;
use crate::io::IngestedPoints;

pub mod pipeline;

/// Entry point for the `linefit` binary.
pub fn run() -> Result<(), AppError> {
    // `linefit` alone behaves like `linefit interactive`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    let env = EnvDefaults::from_env()?;

    match cli.command {
        Command::Fit(args) => handle_fit(args, &env),
        Command::Interactive(args) => handle_interactive(args, &env),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_fit(args: FitArgs, env: &EnvDefaults) -> Result<(), AppError> {
    let config = fit_config_from_args(&args, env);

    let ingest = match &args.file {
        Some(path) => crate::io::load_points(path, config.skip_invalid)?,
        None => crate::io::collect_points(args.points.clone())?,
    };
    report_row_errors(&ingest);

    let run = pipeline::run_fit(&ingest.points, &config)?;

    println!(
        "{}",
        crate::report::format_fit_summary(&run.fit, run.reference.as_ref())
    );
    if args.residuals {
        println!("{}", crate::report::format_residuals(&run.residuals));
    }
    if config.plot {
        let plot = crate::plot::render_ascii_plot(
            ingest.points.points(),
            &run.fit.line,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    if let Some(path) = &config.export {
        crate::io::write_line_json(path, &run.fit, &ingest.points)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

fn handle_interactive(args: InteractiveArgs, env: &EnvDefaults) -> Result<(), AppError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if args.plain {
        interactive_session(
            Prompt::new(stdin.lock(), stdout.lock(), BlankLineScreen::default()),
            &args.search,
            env,
        )
    } else {
        interactive_session(
            Prompt::new(stdin.lock(), stdout.lock(), TerminalScreen),
            &args.search,
            env,
        )
    }
}

fn interactive_session<R, W, S>(
    mut prompt: Prompt<R, W, S>,
    search: &SearchArgs,
    env: &EnvDefaults,
) -> Result<(), AppError>
where
    R: io::BufRead,
    W: Write,
    S: Screen,
{
    let (precision, points) = collect_input(&mut prompt)?;

    let config = FitConfig {
        precision,
        workers: search.workers.or(env.workers).unwrap_or(1),
        timeout: timeout_from(search, env),
        ..FitConfig::default()
    };

    // Errors end the session on a cleared screen, as the fit summary would.
    let outcome = PointSet::new(points)
        .map_err(AppError::from)
        .and_then(|points| pipeline::run_fit(&points, &config));
    match outcome {
        Ok(run) => prompt.show(&crate::report::format_fit_summary(&run.fit, None)),
        Err(err) => {
            prompt.clear()?;
            Err(err)
        }
    }
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let file = crate::io::read_line_json(&args.line)?;
    let plot = crate::plot::render_ascii_plot_from_line_file(&file, args.width, args.height);
    println!("{plot}");
    Ok(())
}

fn report_row_errors(ingest: &IngestedPoints) {
    if ingest.row_errors.is_empty() {
        return;
    }
    eprintln!(
        "Skipped {} of {} rows:",
        ingest.row_errors.len(),
        ingest.rows_read
    );
    for row in &ingest.row_errors {
        eprintln!("  line {}: {} ('{}')", row.line, row.error, row.text);
    }
}

/// Resolve flags over environment defaults over built-in defaults.
pub fn fit_config_from_args(args: &FitArgs, env: &EnvDefaults) -> FitConfig {
    FitConfig {
        precision: args
            .precision
            .or(env.precision)
            .unwrap_or_default(),
        workers: args.search.workers.or(env.workers).unwrap_or(1),
        timeout: timeout_from(&args.search, env),
        skip_invalid: args.skip_invalid,
        compare: args.compare,
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
        export: args.export.clone(),
    }
}

fn timeout_from(search: &SearchArgs, env: &EnvDefaults) -> Option<Duration> {
    search.timeout_ms.map(Duration::from_millis).or(env.timeout)
}

/// Rewrite argv so `linefit` defaults to `linefit interactive`.
///
/// Rules:
/// - `linefit`                      -> `linefit interactive`
/// - `linefit --plain ...`          -> `linefit interactive --plain ...`
/// - `linefit --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("interactive".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "interactive" | "plot");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "interactive flags".
    if arg1.starts_with('-') {
        argv.insert(1, "interactive".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
