use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, SubsecRound, TimeDelta, TimeZone};
use std::fmt;
use std::str::FromStr;

/// On-disk format of every timestamp written to the times file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Format used by older logs, where the zone is an abbreviation such as `CEST`.
/// The abbreviation is skipped and the wall-clock time is read in the local zone.
const ZONE_NAME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// A point in time as stored in the times file.
///
/// The original text is kept next to the parsed instant: an entry that is
/// closed later is rewritten with its start field exactly as it was read.
#[derive(Debug, Clone)]
pub struct Timestamp {
    text: String,
    instant: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTimestamp(pub String);

impl fmt::Display for InvalidTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid timestamp '{}'", self.0)
    }
}

impl std::error::Error for InvalidTimestamp {}

impl Timestamp {
    /// Current local time, truncated to whole seconds so that the stored text
    /// and the instant agree.
    pub fn now() -> Self {
        Self::from_datetime(Local::now())
    }

    pub fn from_datetime<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        let instant = dt.fixed_offset().trunc_subsecs(0);
        Self {
            text: instant.format(TIMESTAMP_FORMAT).to_string(),
            instant,
        }
    }

    pub fn parse(s: &str) -> Result<Self, InvalidTimestamp> {
        if let Ok(instant) = DateTime::parse_from_str(s, TIMESTAMP_FORMAT) {
            return Ok(Self {
                text: s.to_string(),
                instant,
            });
        }

        let naive = NaiveDateTime::parse_from_str(s, ZONE_NAME_FORMAT)
            .map_err(|_| InvalidTimestamp(s.to_string()))?;
        let local = Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| InvalidTimestamp(s.to_string()))?;

        Ok(Self {
            text: s.to_string(),
            instant: local.fixed_offset(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    /// Time elapsed from `self` until `later`.
    pub fn until(&self, later: &Timestamp) -> TimeDelta {
        later.instant - self.instant
    }
}

impl FromStr for Timestamp {
    type Err = InvalidTimestamp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timestamp::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Timestamp {}
