//! Daily log file sink and run start/end markers.

use crate::error::{PriceError, Result};
use chrono::NaiveDate;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Line written before the start marker and after the end marker.
pub const SEPARATOR: &str = "####################";

/// Path of the log file for `date`: `<dir>/YYYYMMDD_log.log`.
pub fn log_file_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(format!("{}_log.log", date.format("%Y%m%d")))
}

/// Opens the log file for `date` in append mode, creating the directory and
/// file when missing.
pub fn open_daily_log(dir: &Path, date: NaiveDate) -> Result<File> {
    let path = log_file_path(dir, date);

    fs::create_dir_all(dir)
        .map_err(|source| PriceError::LogFile { path: path.clone(), source })?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| PriceError::LogFile { path, source })
}

/// Plain-text fmt layer writing INFO and above to `file`.
pub fn file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_filter(LevelFilter::INFO)
}

/// Brackets a run in the log. The end marker is written on drop, so it shows
/// up on the error path too.
#[must_use = "the end marker is written when this value is dropped"]
pub struct RunMarker {
    _private: (),
}

impl RunMarker {
    /// Writes the start marker.
    pub fn start() -> Self {
        info!("{}", SEPARATOR);
        info!("Script started");
        Self { _private: () }
    }
}

impl Drop for RunMarker {
    fn drop(&mut self) {
        info!("Script ended");
        info!("{}", SEPARATOR);
    }
}
