//! The interactive save/restore loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use log::debug;

use crate::common::IdGenerator;
use crate::math::Point;
use crate::shapes::{Circle, Polyline, Rect, Shape, Triangle};
use crate::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Save,
    Restore,
    Exit,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognised command: {0:?}")]
pub struct CommandError(pub String);

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "save" => Ok(Command::Save),
            "restore" => Ok(Command::Restore),
            "exit" => Ok(Command::Exit),
            _ => Err(CommandError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Where `save` writes and `restore` reads.
    pub path: PathBuf,
    pub prompt: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            path: PathBuf::from(storage::DEFAULT_PATH),
            prompt: String::from("Do you want to save the shapes to a file? (Save/Restore/Exit): "),
        }
    }
}

const USAGE: &str = "Invalid input. Please enter either 'Save', 'Restore', or 'Exit'.";

/// Reads commands from `input` and applies them to an owned collection of shapes.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
    ids: IdGenerator,
    shapes: Vec<Shape>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `ids` is the generator `shapes` were built with; restores move it past the ids they read.
    pub fn new(input: R, output: W, config: ConsoleConfig, ids: IdGenerator, shapes: Vec<Shape>) -> Self {
        Console { input, output, config, ids, shapes }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Runs until `exit` or the end of the input.
    pub fn run(&mut self) -> io::Result<()> {
        let mut bytes = Vec::new();
        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            bytes.clear();
            if self.input.read_until(b'\n', &mut bytes)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            let line = match std::str::from_utf8(&bytes) {
                Ok(line) => line,
                Err(err) => {
                    debug!("Input is not UTF-8: {}", err);
                    writeln!(self.output, "{}", USAGE)?;
                    continue;
                }
            };

            for word in line.split_whitespace() {
                match word.parse::<Command>() {
                    Ok(Command::Exit) => return Ok(()),
                    Ok(command) => self.apply(command)?,
                    Err(err) => {
                        debug!("{}", err);
                        writeln!(self.output, "{}", USAGE)?;
                    }
                }
            }
        }
    }

    /// Carries out `save` or `restore`.
    pub fn apply(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Save => self.save(),
            Command::Restore => {
                self.shapes = storage::restore_into(&self.config.path, &mut self.ids);
                writeln!(self.output, "Objects restored from file.")?;
                self.save()
            }
            Command::Exit => Ok(()),
        }
    }

    fn save(&mut self) -> io::Result<()> {
        // Failures are already logged by save_all
        if storage::save_all(&self.shapes, &self.config.path).is_ok() {
            writeln!(self.output, "Objects saved to file.")?;
        }
        Ok(())
    }
}

/// The eight shapes the binary starts with: two of each kind.
pub fn demo_shapes(ids: &mut IdGenerator) -> Vec<Shape> {
    let mut shapes = Vec::new();

    let (p1, p2, p3, p4) = (
        Point::new(1.0, 1.0),
        Point::new(1.0, 5.0),
        Point::new(5.0, 5.0),
        Point::new(5.0, 1.0),
    );
    let mut rect = Rect::new();
    rect.set(ids, p1, p2, p3, p4);
    shapes.push(rect.into());
    let mut rect = Rect::new();
    rect.set_diagonal(ids, p1, p3);
    shapes.push(rect.into());

    for _ in 0..2 {
        let mut circle = Circle::new();
        circle.set(ids, Point::new(1.0, 1.0), 5.0);
        shapes.push(circle.into());
    }

    for _ in 0..2 {
        let mut triangle = Triangle::new();
        triangle.set(ids, Point::new(1.0, 1.0), Point::new(3.0, 3.0), Point::new(4.0, 2.0));
        shapes.push(triangle.into());
    }

    let vertices = vec![
        Point::new(1.0, 1.0),
        Point::new(3.0, 3.0),
        Point::new(4.0, 2.0),
        Point::new(5.0, 1.0),
        Point::new(3.0, 4.0),
        Point::new(4.0, 4.0),
    ];
    for _ in 0..2 {
        shapes.push(Polyline::with_points(ids, vertices.clone()).into());
    }

    shapes
}
