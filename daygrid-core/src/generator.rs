//! The core `Generator` struct and its associated types, providing the primary API for interaction.

use crate::calendar::days_in_month;
use crate::config::Config;
use crate::paths::{MARKER_FILE, day_dir, day_folder_name};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// A reference to a day folder that now exists on disk.
#[derive(Debug)]
pub struct DayFolder {
    pub date: NaiveDate,
    /// Leaf folder name, e.g. `05-Friday`.
    pub name: String,
    pub path: PathBuf,
}

/// Represents a non-critical issue that occurred during a generation run.
///
/// This is used to report problems (an unreal month, a failed day folder)
/// without stopping a larger generation operation.
#[derive(Debug)]
pub enum GenerateError {
    InvalidDate { input: String, error: String },
    FileError { path: PathBuf, error: anyhow::Error },
}

/// The complete result of a generation run, containing every folder that was
/// created (or already existed) and any per-day failures, in day order.
#[derive(Debug)]
pub struct GenerateResult {
    pub folders: Vec<DayFolder>,
    pub errors: Vec<GenerateError>,
}

/// The central struct for all folder generation.
///
/// An instance of `Generator` holds the configuration and provides methods
/// for scaffolding the `{base}/YYYY/MM/DD-Weekday/` tree.
#[derive(Debug)]
pub struct Generator {
    pub config: Config,
}

impl Generator {
    /// Creates a new `Generator` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Generator` instance with a specific `Config`.
    ///
    /// This also ensures that the base directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.base_dir)
            .with_context(|| format!("creating {}", config.base_dir.display()))?;
        Ok(Self { config })
    }

    /// Creates one folder per day of `year`/`month` under the base directory,
    /// each holding an empty marker file.
    ///
    /// - Days are processed sequentially in ascending order.
    /// - A day that fails (permissions, something squatting on the path) is
    ///   recorded as a [`GenerateError::FileError`] and skipped; it never
    ///   aborts the rest of the month.
    /// - Re-running is idempotent: existing folders are kept, user files in
    ///   them are left alone, and the marker is rewritten empty.
    pub fn generate_month(&self, year: i32, month: u32) -> GenerateResult {
        let mut folders = Vec::new();
        let mut errors = Vec::new();

        let num_days = match days_in_month(year, month) {
            Ok(n) => n,
            Err(error) => {
                errors.push(GenerateError::InvalidDate {
                    input: format!("{year}-{month:02}"),
                    error: error.to_string(),
                });
                return GenerateResult { folders, errors };
            }
        };

        for day in 1..=num_days {
            let date = NaiveDate::from_ymd_opt(year, month, day).expect("day within month");
            let path = day_dir(&self.config.base_dir, date);
            match create_day_folder(&path) {
                Ok(()) => folders.push(DayFolder {
                    date,
                    name: day_folder_name(date),
                    path,
                }),
                Err(error) => errors.push(GenerateError::FileError { path, error }),
            }
        }

        GenerateResult { folders, errors }
    }

    /// Invokes [`Self::generate_month`] for months 1 through 12 in ascending
    /// order, aggregating all outcomes. A failure in one month does not
    /// prevent processing of subsequent months.
    pub fn generate_year(&self, year: i32) -> GenerateResult {
        let mut folders = Vec::new();
        let mut errors = Vec::new();
        for month in 1..=12 {
            let mut result = self.generate_month(year, month);
            folders.append(&mut result.folders);
            errors.append(&mut result.errors);
        }
        GenerateResult { folders, errors }
    }
}

fn create_day_folder(path: &Path) -> Result<()> {
    fs::create_dir_all(path).context("creating the day directory")?;
    let marker = path.join(MARKER_FILE);
    fs::write(&marker, "").context("writing the marker file")?;
    Ok(())
}
