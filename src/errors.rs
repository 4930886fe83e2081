//! Unified application error type.
//! The log engine, the configuration layer and the CLI handlers all return
//! AppError so the binary can report every failure the same way.

use crate::utils::formatting::spoken_list;
use std::fmt;
use std::io;
use thiserror::Error;

/// Structural problems found while scanning the times file.
///
/// `bad_lines` holds the 1-based line of every row that is not a closed
/// record. `last_is_bad` is set when the final row is an open entry, the one
/// kind of bad row that `end` can repair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatError {
    pub bad_lines: Vec<u64>,
    pub last_is_bad: bool,
}

impl FormatError {
    /// True when the only anomaly is an open entry at the end of the file.
    pub fn just_incomplete(&self) -> bool {
        self.bad_lines.len() == 1 && self.last_is_bad
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.just_incomplete() {
            write!(f, "last entry is incomplete")
        } else if self.bad_lines.len() == 1 {
            write!(f, "incomplete or invalid entry on line {}", self.bad_lines[0])
        } else {
            write!(
                f,
                "incomplete or invalid entries on lines {}",
                spoken_list(&self.bad_lines)
            )
        }
    }
}

impl std::error::Error for FormatError {}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Times file structure
    // ---------------------------
    #[error("{0}")]
    Format(#[from] FormatError),

    #[error("no incomplete entry to end")]
    NoOpenInterval,

    #[error("total duration is out of range")]
    DurationOverflow,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AppError {
    /// The structural report carried by this error, if any.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            AppError::Format(report) => Some(report),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
