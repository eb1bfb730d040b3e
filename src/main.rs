use std::process::ExitCode;

use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> ExitCode {
    // RUST_LOG overrides the default level.
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Warn).env().init() {
        eprintln!("Failed to initialize logging: {err}");
    }

    match linefit::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
