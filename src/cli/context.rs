use crate::cli::parser::{Cli, TimesFile};
use crate::config::Config;
use crate::errors::FormatError;
use crate::ui::messages::{Output, warning};
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Everything a log command needs, resolved from the command line on top of
/// the configuration.
#[derive(Debug, Clone)]
pub struct Context {
    pub path: PathBuf,
    pub strict: bool,
    pub out: Output,
}

impl Context {
    pub fn new(cli: &Cli, cfg: &Config, target: &TimesFile) -> Self {
        let path = match &target.file {
            Some(file) => expand_tilde(file),
            None => cfg.times_path(),
        };

        Self {
            path,
            strict: cli.fail || cfg.strict,
            out: Output::new(cli.quiet || cfg.quiet),
        }
    }

    /// Report an anomaly that was tolerated.
    pub fn warn_tolerated(&self, tolerated: Option<&FormatError>) {
        if let Some(report) = tolerated {
            warning(report);
        }
    }
}
