//! Encoding and decoding of a single two-line record:
//!
//! ```text
//! <tag>
//! <id>,<centerX>,<centerY>,<field>,<field>,...
//! ```
//!
//! Numbers use the shortest representation that reads back to the same `f64`.

use std::io::Write;

use super::error::{RecordError, StorageError};
use crate::common::ShapeId;
use crate::math::Point;
use crate::shapes::ShapeKind;

/// Writes the tag line and the data line for one shape.
pub fn write_record(
    out: &mut dyn Write,
    kind: ShapeKind,
    id: ShapeId,
    center: Point,
    fields: &[f64],
) -> Result<(), StorageError> {
    let mut line = format!("{},{},{}", id, center.x, center.y);
    for value in fields {
        line.push(',');
        line.push_str(&value.to_string());
    }
    writeln!(out, "{}", kind.tag())?;
    writeln!(out, "{}", line)?;
    Ok(())
}

/// Flattens points into x,y pairs.
pub fn coordinates(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// The decoded data line of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct DataLine {
    pub id: ShapeId,
    pub center: Point,
    /// Everything after the center, in file order.
    pub values: Vec<f64>,
}

impl DataLine {
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let mut fields = line.trim().split(',').map(str::trim);

        let id_text = fields.next().filter(|f| !f.is_empty()).ok_or(RecordError::MissingField("id"))?;
        let id = id_text
            .parse::<ShapeId>()
            .map_err(|_| RecordError::InvalidId(id_text.to_string()))?;

        let x = parse_number(1, fields.next().ok_or(RecordError::MissingField("center x"))?)?;
        let y = parse_number(2, fields.next().ok_or(RecordError::MissingField("center y"))?)?;

        let values = fields
            .enumerate()
            .map(|(i, text)| parse_number(i + 3, text))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DataLine { id, center: Point::new(x, y), values })
    }

    /// Fails unless exactly `expected` values follow the center.
    pub fn expect_values(&self, kind: ShapeKind, expected: usize) -> Result<(), RecordError> {
        if self.values.len() != expected {
            return Err(RecordError::FieldCount { kind, expected, found: self.values.len() });
        }
        Ok(())
    }
}

/// Reads a run of values as x,y pairs.
pub fn points_from(kind: ShapeKind, values: &[f64]) -> Result<Vec<Point>, RecordError> {
    if values.len() % 2 != 0 {
        return Err(RecordError::OddCoordinates { kind, found: values.len() });
    }
    Ok(values.chunks_exact(2).map(|pair| Point::new(pair[0], pair[1])).collect())
}

fn parse_number(index: usize, text: &str) -> Result<f64, RecordError> {
    text.parse::<f64>().map_err(|_| RecordError::InvalidNumber {
        index,
        text: text.to_string(),
    })
}
