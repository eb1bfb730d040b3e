//! Interactive prompt.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the prompt provides the "run `linefit` and type points" UX
//!
//! Every screen starts from a cleared display. How the display is cleared is
//! a property of the terminal, not of the prompt, so it is injected through
//! the `Screen` trait.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use log::debug;

use crate::domain::{Point, Precision};
use crate::error::AppError;

/// How a display is cleared.
pub trait Screen {
    fn clear(&mut self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// ANSI terminal: clear and home the cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalScreen;

impl Screen for TerminalScreen {
    fn clear(&mut self, out: &mut dyn Write) -> std::io::Result<()> {
        out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        out.flush()
    }
}

/// Scroll the previous content away with blank lines.
///
/// For displays without cursor control (calculator screens, dumb terminals).
#[derive(Debug, Clone, Copy)]
pub struct BlankLineScreen {
    pub lines: usize,
}

impl Default for BlankLineScreen {
    fn default() -> Self {
        // Two screens' worth on a small device, in case the cursor sits on the first line.
        Self { lines: 13 }
    }
}

impl Screen for BlankLineScreen {
    fn clear(&mut self, out: &mut dyn Write) -> std::io::Result<()> {
        for _ in 0..self.lines {
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Line-oriented prompt over any reader/writer pair.
pub struct Prompt<R, W, S> {
    input: R,
    output: W,
    screen: S,
}

impl<R: BufRead, W: Write, S: Screen> Prompt<R, W, S> {
    pub fn new(input: R, output: W, screen: S) -> Self {
        Self { input, output, screen }
    }

    pub fn clear(&mut self) -> Result<(), AppError> {
        self.screen
            .clear(&mut self.output)
            .map_err(|e| AppError::new(2, format!("Failed to clear screen: {e}")))
    }

    /// Clear the screen and print `text`.
    pub fn show(&mut self, text: &str) -> Result<(), AppError> {
        self.clear()?;
        writeln!(self.output, "{text}").map_err(write_err)?;
        self.output.flush().map_err(write_err)
    }

    /// Ask the user to pick one of `options`. Loops until the answer is a
    /// valid 1-based index; returns the 0-based index.
    pub fn choose_option<T: Display>(&mut self, message: &str, options: &[T]) -> Result<usize, AppError> {
        loop {
            self.clear()?;
            writeln!(self.output, "{message}\n").map_err(write_err)?;
            for (idx, option) in options.iter().enumerate() {
                writeln!(self.output, "{} - {option}", idx + 1).map_err(write_err)?;
            }
            writeln!(self.output).map_err(write_err)?;

            let Some(answer) = self.read_line()? else {
                return Err(AppError::new(2, "No input received."));
            };
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => debug!("ignoring menu answer '{}'", answer.trim()),
            }
        }
    }

    /// Read `x,y` points one per screen until an empty line (or end of input).
    /// Unparseable entries are dropped.
    pub fn read_points(&mut self) -> Result<Vec<Point>, AppError> {
        let mut points = Vec::new();
        loop {
            self.clear()?;
            writeln!(self.output, "Insert points:\n").map_err(write_err)?;

            let Some(answer) = self.read_line()? else {
                break;
            };
            let answer = answer.trim();
            if answer.is_empty() {
                break;
            }
            match Point::parse(answer) {
                Ok(p) => points.push(p),
                Err(e) => debug!("ignoring point '{answer}': {e}"),
            }
        }
        Ok(points)
    }

    /// Print the `> ` marker and read one line. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        write!(self.output, "> ").map_err(write_err)?;
        self.output.flush().map_err(write_err)?;

        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .map_err(|e| AppError::new(2, format!("Failed to read input: {e}")))?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn write_err(e: std::io::Error) -> AppError {
    AppError::new(2, format!("Failed to write prompt: {e}"))
}

/// Ask for the precision, then the points.
pub fn collect_input<R: BufRead, W: Write, S: Screen>(
    prompt: &mut Prompt<R, W, S>,
) -> Result<(Precision, Vec<Point>), AppError> {
    let labels: Vec<&str> = Precision::ALL.iter().map(|p| p.label()).collect();
    let choice = prompt.choose_option("Precision", &labels)?;
    let points = prompt.read_points()?;
    Ok((Precision::ALL[choice], points))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>, BlankLineScreen> {
        Prompt::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            BlankLineScreen { lines: 1 },
        )
    }

    #[test]
    fn menu_retries_until_valid() {
        let mut p = prompt("zero\n9\n2\n");
        let idx = p.choose_option("Precision", &["0.1", "0.01", "0.001"]).unwrap();
        assert_eq!(idx, 1);
        let shown = String::from_utf8(p.output).unwrap();
        assert_eq!(shown.matches("1 - 0.1").count(), 3);
    }

    #[test]
    fn menu_fails_at_end_of_input() {
        let mut p = prompt("");
        let err = p.choose_option("Precision", &["a"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn points_stop_at_empty_line_and_skip_garbage() {
        let mut p = prompt("0,0\nbad\n1, 1\n\n5,5\n");
        let points = p.read_points().unwrap();
        assert_eq!(
            points,
            vec![
                Point::from_coordinates(0.0, 0.0).unwrap(),
                Point::from_coordinates(1.0, 1.0).unwrap(),
            ]
        );
    }

    #[test]
    fn collect_input_reads_precision_then_points() {
        let mut p = prompt("3\n1,5\n2,3\n");
        let (precision, points) = collect_input(&mut p).unwrap();
        assert_eq!(precision, Precision::Thousandth);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn blank_line_screen_prints_newlines() {
        let mut out = Vec::new();
        BlankLineScreen::default().clear(&mut out).unwrap();
        assert_eq!(out, vec![b'\n'; 13]);
    }
}
