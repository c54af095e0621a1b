use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};

/// Fixed marker file dropped into every leaf directory so version control
/// can track an otherwise-empty folder.
pub const MARKER_FILE: &str = ".gitkeep";

/// Leaf folder name for a day, e.g. `05-Friday`.
pub fn day_folder_name(date: NaiveDate) -> String {
    format!("{:02}-{}", date.day(), date.format("%A"))
}

/// `{root}/{year}/{MM}`. The year is rendered as-is, the month zero-padded.
pub fn month_dir(root: &Path, year: i32, month: u32) -> PathBuf {
    root.join(year.to_string()).join(format!("{month:02}"))
}

pub fn day_dir(root: &Path, date: NaiveDate) -> PathBuf {
    month_dir(root, date.year(), date.month()).join(day_folder_name(date))
}

pub fn marker_path(root: &Path, date: NaiveDate) -> PathBuf {
    day_dir(root, date).join(MARKER_FILE)
}
