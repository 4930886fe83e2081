use super::timestamp::Timestamp;
use chrono::TimeDelta;

/// One interval of the times file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub start: Timestamp,
    pub end: Option<Timestamp>, // None ⇔ still running
}

impl Record {
    pub fn open(start: Timestamp) -> Self {
        Self { start, end: None }
    }

    pub fn closed(start: Timestamp, end: Timestamp) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    pub fn is_closed(&self) -> bool {
        self.end.is_some()
    }

    /// Complete the interval, keeping the start field untouched.
    pub fn close(self, end: Timestamp) -> Self {
        Self::closed(self.start, end)
    }

    /// Length of a closed interval; `None` while it is still open.
    pub fn elapsed(&self) -> Option<TimeDelta> {
        self.end.as_ref().map(|end| self.start.until(end))
    }

    /// Fields as written to the times file.
    pub fn fields(&self) -> Vec<&str> {
        match &self.end {
            Some(end) => vec![self.start.as_str(), end.as_str()],
            None => vec![self.start.as_str()],
        }
    }
}
