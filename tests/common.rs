#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use track::models::Timestamp;

/// `track` binary with HOME pointed at a per-test directory, so no user
/// configuration leaks in.
pub fn track(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("track");
    cmd.env("HOME", home).env_remove("TRACK_LOG");
    cmd
}

/// Create a unique times file path inside the system temp dir and remove any existing file
pub fn setup_times_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_track_times.csv", name));
    let times_path = path.to_string_lossy().to_string();
    fs::remove_file(&times_path).ok();
    times_path
}

/// Create an empty per-test directory to use as HOME
pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_track_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

pub fn ts(s: &str) -> Timestamp {
    Timestamp::parse(s).expect("valid test timestamp")
}

/// Lines of a times file, without terminators.
pub fn lines(content: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(content)
        .lines()
        .map(str::to_string)
        .collect()
}
