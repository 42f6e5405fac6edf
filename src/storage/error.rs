use std::io;
use std::path::PathBuf;

use crate::shapes::ShapeKind;

/// Why a single record in a figures file could not be decoded.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("missing object type")]
    EmptyTag,
    #[error("line is not valid UTF-8")]
    NotUtf8,
    #[error("unknown object type: {0}")]
    UnknownTag(String),
    #[error("{0} record has no data line")]
    MissingData(ShapeKind),
    #[error("data line is missing the {0} field")]
    MissingField(&'static str),
    #[error("invalid id: {0:?}")]
    InvalidId(String),
    #[error("field {index} is not a number: {text:?}")]
    InvalidNumber { index: usize, text: String },
    #[error("{kind} expects {expected} values after the center, found {found}")]
    FieldCount { kind: ShapeKind, expected: usize, found: usize },
    #[error("{kind} has an odd number of coordinates ({found})")]
    OddCoordinates { kind: ShapeKind, found: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write figures")]
    Write(#[from] io::Error),
    #[error("{0} has no geometry to write")]
    Unconfigured(ShapeKind),
}
