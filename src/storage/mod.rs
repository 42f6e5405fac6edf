//! Saving and restoring collections of shapes as a figures file.

pub mod error;
pub mod record;

pub use error::{RecordError, StorageError};

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, error, info, warn};

use crate::common::IdGenerator;
use crate::shapes::{Shape, ShapeKind};

/// The file the console saves to and restores from.
pub const DEFAULT_PATH: &str = "figures.txt";

/// A record that was left out of a restore, with the line its tag was on (1-based).
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub line: usize,
    pub reason: RecordError,
}

/// The outcome of scanning a figures file.
#[derive(Debug, Clone, Default)]
pub struct Restored {
    pub shapes: Vec<Shape>,
    pub skipped: Vec<SkippedRecord>,
}

/// Writes every shape as a tag line plus a data line, in order.
/// Shapes whose geometry was never set are skipped.
/// Returns the number of records written.
pub fn write_records<W: Write>(out: &mut W, shapes: &[Shape]) -> Result<usize, StorageError> {
    let mut written = 0;
    for shape in shapes {
        match shape.write_record(&mut *out) {
            Ok(()) => written += 1,
            Err(StorageError::Unconfigured(kind)) => {
                warn!("Skipping {} with no geometry", kind);
            }
            Err(err) => return Err(err),
        }
    }
    Ok(written)
}

/// Saves the shapes to `path`, replacing whatever was there.
/// If the file can't be opened nothing is written and the failure is logged.
pub fn save_all(shapes: &[Shape], path: impl AsRef<Path>) -> Result<usize, StorageError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| {
        error!("Failed to open {} for recording: {}", path.display(), source);
        StorageError::Open { path: path.to_path_buf(), source }
    })?;

    let mut out = BufWriter::new(file);
    let written = write_records(&mut out, shapes)?;
    out.flush()?;

    info!("Saved {} figures to {}", written, path.display());
    Ok(written)
}

/// Reads records until the source runs out.
///
/// Each record is a tag line followed by a data line. Unknown tags, lines that are not
/// UTF-8 and records that fail to decode are logged and skipped; the scan carries on
/// with the next line. Only an I/O error ends it early.
pub fn read_records<R: BufRead>(source: R) -> Restored {
    let mut restored = Restored::default();
    let mut lines = source.split(b'\n').enumerate();

    while let Some((index, line)) = lines.next() {
        let line_no = index + 1;
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("Stopped reading at line {}: {}", line_no, err);
                break;
            }
        };

        let kind = match decode_line(line).and_then(|line| parse_tag(&line)) {
            Ok(kind) => kind,
            Err(reason) => {
                warn!("Line {}: {}", line_no, reason);
                restored.skipped.push(SkippedRecord { line: line_no, reason });
                continue;
            }
        };

        let data = match lines.next() {
            Some((_, Ok(data))) => data,
            Some((_, Err(err))) => {
                error!("Stopped reading at line {}: {}", line_no + 1, err);
                break;
            }
            None => {
                let reason = RecordError::MissingData(kind);
                warn!("Line {}: {}", line_no, reason);
                restored.skipped.push(SkippedRecord { line: line_no, reason });
                break;
            }
        };

        match decode_line(data).and_then(|data| Shape::from_record(kind, &data)) {
            Ok(shape) => {
                debug!("Restored {} {}", kind, shape.id());
                restored.shapes.push(shape);
            }
            Err(reason) => {
                warn!("Skipping {} at line {}: {}", kind, line_no, reason);
                restored.skipped.push(SkippedRecord { line: line_no, reason });
            }
        }
    }

    restored
}

/// Restores every readable shape from `path`.
/// A missing or unreadable file is logged and gives an empty collection.
pub fn restore_all(path: impl AsRef<Path>) -> Vec<Shape> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            error!("Failed to open {} for restoring: {}", path.display(), err);
            return Vec::new();
        }
    };

    let restored = read_records(BufReader::new(file));
    info!(
        "Restored {} figures from {} ({} skipped)",
        restored.shapes.len(),
        path.display(),
        restored.skipped.len()
    );
    restored.shapes
}

/// As `restore_all`, and moves `ids` past every restored id.
pub fn restore_into(path: impl AsRef<Path>, ids: &mut IdGenerator) -> Vec<Shape> {
    let shapes = restore_all(path);
    for shape in &shapes {
        ids.observe(shape.id());
    }
    shapes
}

fn decode_line(bytes: Vec<u8>) -> Result<String, RecordError> {
    String::from_utf8(bytes).map_err(|_| RecordError::NotUtf8)
}

fn parse_tag(line: &str) -> Result<ShapeKind, RecordError> {
    let tag = line.split_whitespace().next().ok_or(RecordError::EmptyTag)?;
    ShapeKind::from_tag(tag).ok_or_else(|| RecordError::UnknownTag(tag.to_string()))
}
