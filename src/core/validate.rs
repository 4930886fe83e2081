//! Scan the times file and check its structure.

use crate::core::codec::{self, Malformed, SEPARATOR};
use crate::errors::{AppResult, FormatError};
use crate::models::Record;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use tracing::debug;

/// Which rows `read_entries` hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Closed records only, for totals.
    Complete,
    /// Every row, including malformed ones and an open tail.
    All,
}

/// One scanned row of the times file.
#[derive(Debug, Clone)]
pub struct Entry {
    /// 1-based row number; the line number when the file has no blank lines.
    pub line: u64,
    /// Byte offset where reading of the row began.
    pub offset: u64,
    pub record: Result<Record, Malformed>,
}

impl Entry {
    /// Only closed records count as complete rows.
    pub fn is_complete(&self) -> bool {
        matches!(&self.record, Ok(r) if r.is_closed())
    }

    pub fn open_record(&self) -> Option<&Record> {
        self.record.as_ref().ok().filter(|r| r.is_open())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scan {
    pub entries: Vec<Entry>,
    pub report: Option<FormatError>,
}

impl Scan {
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter().filter_map(|e| e.record.as_ref().ok())
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }
}

/// Read every row from `r`, classify it and collect the lines that are not
/// closed records.
///
/// Structural problems do not make this fail: they come back in
/// `Scan::report` next to the entries so each caller can decide whether to
/// tolerate them. Errors from the reader itself are returned as is.
pub fn read_entries<R: Read>(r: R, filter: Filter) -> AppResult<Scan> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(SEPARATOR)
        .from_reader(r);

    let mut entries = Vec::new();
    let mut report = FormatError::default();
    let mut row = StringRecord::new();

    while reader.read_record(&mut row)? {
        // csv marks where it started reading, which can be a blank line or the
        // '\n' of a CRLF pair ahead of the row itself; the mutator skips those
        let offset = row.position().map(|p| p.byte()).unwrap_or(0);
        let entry = Entry {
            line: entries.len() as u64 + 1,
            offset,
            record: codec::decode(&row),
        };

        if !entry.is_complete() {
            report.bad_lines.push(entry.line);
        }
        report.last_is_bad = entry.open_record().is_some();

        entries.push(entry);
    }

    debug!(
        rows = entries.len(),
        bad = report.bad_lines.len(),
        last_is_bad = report.last_is_bad,
        "scanned times file"
    );

    if report.bad_lines.is_empty() {
        return Ok(Scan {
            entries,
            report: None,
        });
    }

    if filter == Filter::Complete {
        entries.retain(Entry::is_complete);
    }

    Ok(Scan {
        entries,
        report: Some(report),
    })
}
