//! Times file paths from the command line or the configuration.

use std::path::PathBuf;

/// Resolve a leading `~` (alone or as `~/...`) against the home directory.
/// Other paths, and `~` when no home directory is known, are kept as given.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => Some(""),
        Some(rest) => rest.strip_prefix('/'),
        None => None,
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
