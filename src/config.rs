// src/config.rs
use std::{env, ffi::OsString, path::PathBuf};

/// Environment variable overriding the CSV location.
pub const CSV_PATH_VAR: &str = "CSV_PATH";

/// Where the dataset lives inside the container unless told otherwise.
pub const DEFAULT_CSV_PATH: &str = "/app/data/dataset.csv";

/// Process configuration, resolved once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub csv_path: PathBuf,
}

impl Config {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Config {
            csv_path: csv_path.into(),
        }
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Resolve using `lookup` in place of the process environment.
    /// A variable that is set but empty is taken literally.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let csv_path = lookup(CSV_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_PATH));
        Config { csv_path }
    }
}
