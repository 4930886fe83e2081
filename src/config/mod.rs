use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Times file used when no FILE is given on the command line.
    #[serde(default = "default_times_file")]
    pub times_file: String,
    /// Treat every anomaly in the times file as an error (like `--fail`).
    #[serde(default)]
    pub strict: bool,
    /// Suppress informative messages (like `--quiet`).
    #[serde(default)]
    pub quiet: bool,
}

fn default_times_file() -> String {
    "TIMES.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            times_file: default_times_file(),
            strict: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.track`)
    pub fn config_dir() -> AppResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".track"))
            .ok_or_else(|| AppError::Config("cannot determine the home directory".into()))
    }

    /// Return the full path of the config file
    pub fn config_file() -> AppResult<PathBuf> {
        Ok(Self::config_dir()?.join("track.conf"))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Times file with `~/` expanded.
    pub fn times_path(&self) -> PathBuf {
        expand_tilde(&self.times_file)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration file. An existing file is left alone.
    /// Returns the path and whether it was created.
    pub fn init() -> AppResult<(PathBuf, bool)> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)?;

        let path = Self::config_file()?;
        if path.exists() {
            return Ok((path, false));
        }

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok((path, true))
    }
}
