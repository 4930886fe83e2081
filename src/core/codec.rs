//! One record ⇔ one CSV line of one or two timestamp fields.

use crate::errors::{AppError, AppResult};
use crate::models::{Record, Timestamp};
use csv::{StringRecord, Terminator, WriterBuilder};
use std::fmt;

pub const SEPARATOR: u8 = b',';
pub const TERMINATOR: u8 = b'\n';

/// Why a row of the times file could not be read as a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    /// Neither one nor two fields.
    FieldCount(usize),
    /// A field that is not a timestamp.
    Timestamp(String),
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::FieldCount(n) => write!(f, "expected 1 or 2 fields, found {}", n),
            Malformed::Timestamp(text) => write!(f, "invalid timestamp '{}'", text),
        }
    }
}

fn field(text: &str) -> Result<Timestamp, Malformed> {
    Timestamp::parse(text).map_err(|e| Malformed::Timestamp(e.0))
}

pub fn decode(row: &StringRecord) -> Result<Record, Malformed> {
    match row.len() {
        1 => Ok(Record::open(field(&row[0])?)),
        2 => Ok(Record::closed(field(&row[0])?, field(&row[1])?)),
        n => Err(Malformed::FieldCount(n)),
    }
}

/// Serialize a record as a single `\n`-terminated line.
///
/// The output length depends only on the field texts: no quoting is needed
/// because timestamps never contain the separator.
pub fn encode(record: &Record) -> AppResult<Vec<u8>> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .delimiter(SEPARATOR)
        .terminator(Terminator::Any(TERMINATOR))
        .from_writer(Vec::new());

    wtr.write_record(record.fields())?;
    wtr.flush()?;

    wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))
}
