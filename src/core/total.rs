use crate::core::validate::{Filter, read_entries};
use crate::errors::{AppError, AppResult, FormatError};
use crate::models::Record;
use chrono::TimeDelta;
use std::io::Read;

/// Sum of all completed intervals in the times file.
#[derive(Debug, Clone)]
pub struct Tally {
    pub elapsed: TimeDelta,
    pub intervals: usize,
    pub tolerated: Option<FormatError>,
}

/// Sum `end - start` over the closed records; open ones add nothing.
///
/// Fails with `DurationOverflow` when the sum leaves the `TimeDelta` range.
pub fn total<'a, I>(records: I) -> AppResult<TimeDelta>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(Record::elapsed)
        .try_fold(TimeDelta::zero(), |acc, d| acc.checked_add(&d))
        .ok_or(AppError::DurationOverflow)
}

/// Read the times file and total its complete entries.
///
/// An open last entry is always skipped and left in `tolerated`. Any other
/// malformed row is skipped too, unless `strict` is set, in which case it is
/// an error.
pub fn total_duration<R: Read>(r: R, strict: bool) -> AppResult<Tally> {
    let scan = read_entries(r, Filter::Complete)?;

    if let Some(report) = &scan.report
        && strict
        && !report.just_incomplete()
    {
        return Err(report.clone().into());
    }

    Ok(Tally {
        elapsed: total(scan.records())?,
        intervals: scan.entries.len(),
        tolerated: scan.report,
    })
}
