//! Begin and end intervals in the times file.

use crate::core::codec::{self, TERMINATOR};
use crate::core::store::LogStream;
use crate::core::validate::{Entry, Filter, Scan, read_entries};
use crate::errors::{AppError, AppResult, FormatError};
use crate::models::{Record, Timestamp};
use std::io::{self, Read, Seek, SeekFrom, Write};
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Result of a successful begin or end.
#[derive(Debug, Clone)]
pub struct Mutation {
    /// The record as it now stands in the file.
    pub record: Record,
    /// Byte offset of the written line.
    pub offset: u64,
    /// Anomaly that was present but did not stop the operation.
    pub tolerated: Option<FormatError>,
}

/// Append a new open entry stamped with the current time.
pub fn begin_interval<S: LogStream>(stream: &mut S, strict: bool) -> AppResult<Mutation> {
    begin_interval_at(stream, strict, Timestamp::now())
}

/// Complete the open entry at the end of the file with the current time.
pub fn end_interval<S: LogStream>(stream: &mut S, strict: bool) -> AppResult<Mutation> {
    end_interval_at(stream, strict, Timestamp::now())
}

/// `begin_interval` with an explicit start time.
pub fn begin_interval_at<S: LogStream>(
    stream: &mut S,
    strict: bool,
    start: Timestamp,
) -> AppResult<Mutation> {
    stream.rewind()?;
    let scan = read_entries(&mut *stream, Filter::All)?;

    let tolerated = match scan.report {
        None => None,
        Some(report) if strict || !report.just_incomplete() => return Err(report.into()),
        Some(report) => Some(report),
    };

    let mut offset = stream.seek(SeekFrom::End(0))?;
    if offset > 0 && !ends_with_terminator(stream, offset)? {
        // hand-edited file without a final newline
        stream.write_all(&[TERMINATOR])?;
        offset += 1;
    }

    let record = Record::open(start);
    let line = codec::encode(&record)?;
    stream.write_all(&line)?;
    stream.flush()?;

    debug!(offset, len = line.len(), "appended open entry");

    Ok(Mutation {
        record,
        offset,
        tolerated,
    })
}

/// `end_interval` with an explicit end time.
pub fn end_interval_at<S: LogStream>(
    stream: &mut S,
    strict: bool,
    end: Timestamp,
) -> AppResult<Mutation> {
    stream.rewind()?;
    let Scan { entries, report } = read_entries(&mut *stream, Filter::All)?;

    let Some(report) = report else {
        return Err(AppError::NoOpenInterval);
    };
    if !report.last_is_bad {
        return Err(report.into());
    }

    // last_is_bad means the final entry is open
    let Some((tail, open)) = entries
        .last()
        .and_then(|tail| tail.open_record().map(|open| (tail, open)))
    else {
        return Err(report.into());
    };

    let tolerated = if report.bad_lines.len() > 1 {
        if strict {
            return Err(report.into());
        }
        Some(report)
    } else {
        None
    };

    let record = open.clone().close(end);
    let offset = rewrite_tail(stream, tail, open, &record)?;

    Ok(Mutation {
        record,
        offset,
        tolerated,
    })
}

fn ends_with_terminator<S: LogStream>(stream: &mut S, len: u64) -> io::Result<bool> {
    let mut last = [0u8; 1];
    stream.seek(SeekFrom::Start(len - 1))?;
    stream.read_exact(&mut last)?;
    Ok(last[0] == TERMINATOR)
}

/// Replace the open tail line with `closed`, leaving every earlier byte alone.
///
/// The bytes from the tail offset to the end of the stream must be exactly the
/// open entry (after any leading blank lines, before its line break), or
/// nothing is written. A byte order mark at the start of the file is kept.
fn rewrite_tail<S: LogStream>(
    stream: &mut S,
    tail: &Entry,
    open: &Record,
    closed: &Record,
) -> AppResult<u64> {
    let eof = stream.seek(SeekFrom::End(0))?;
    if tail.offset > eof {
        return Err(mismatch(tail, "offset is past the end of the file"));
    }

    stream.seek(SeekFrom::Start(tail.offset))?;
    let mut existing = Vec::new();
    (&mut *stream)
        .take(eof - tail.offset)
        .read_to_end(&mut existing)?;

    // the csv reader hides a leading BOM from row offsets
    let bom = if tail.offset == 0 && existing.starts_with(UTF8_BOM) {
        UTF8_BOM.len()
    } else {
        0
    };
    let skipped = bom
        + existing[bom..]
            .iter()
            .take_while(|b| matches!(b, b'\r' | b'\n'))
            .count();
    let body = trim_line_end(&existing[skipped..]);

    if body != open.start.as_str().as_bytes() {
        return Err(mismatch(tail, "bytes on disk differ from the open entry"));
    }

    let offset = tail.offset + skipped as u64;
    let line = codec::encode(closed)?;

    stream.seek(SeekFrom::Start(offset))?;
    stream.write_all(&line)?;
    stream.truncate(offset + line.len() as u64)?;
    stream.flush()?;

    debug!(
        offset,
        old_len = eof - offset,
        new_len = line.len(),
        "rewrote open entry"
    );

    Ok(offset)
}

fn trim_line_end(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|b| !matches!(b, b'\r' | b'\n'))
        .map_or(0, |i| i + 1);
    &bytes[..end]
}

fn mismatch(tail: &Entry, why: &str) -> AppError {
    AppError::Io(io::Error::new(
        io::ErrorKind::InvalidData,
        format!(
            "cannot close entry on line {} at byte {}: {}",
            tail.line, tail.offset, why
        ),
    ))
}
