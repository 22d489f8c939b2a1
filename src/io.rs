use crate::error::ConvertError;
use crate::summary::TripSummary;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const LOG_FILE_NAME: &str = "log.txt";

/// Turns an ISO-8601 timestamp into a filesystem-safe file stem:
/// `2023-08-01T14:30:00Z` becomes `2023_08_01_14_30_00`.
pub fn format_time_for_filename(time: &str) -> String {
    let time = time.strip_suffix('Z').unwrap_or(time);
    time.chars()
        .map(|c| match c {
            ':' | '.' | '-' | 'T' => '_',
            c => c,
        })
        .collect()
}

/// One line of `log.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub file_name: String,
    pub track_name: String,
    pub summary: Option<TripSummary>,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.file_name, self.track_name)?;
        if let Some(summary) = &self.summary {
            write!(
                f,
                " - Total Time: {}s - Total Distance: {:.2}m",
                summary.total_elapsed_seconds, summary.total_distance_meters
            )?;
        }
        Ok(())
    }
}

/// The batch log. Creating it truncates any previous log; every entry is
/// appended and flushed right away.
pub struct LogSink {
    file: File,
    path: PathBuf,
}

impl LogSink {
    pub fn create(output_dir: &Path) -> io::Result<Self> {
        let path = output_dir.join(LOG_FILE_NAME);
        let file = File::create(&path)?;
        Ok(LogSink { file, path })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(file: File, path: PathBuf) -> Self {
        LogSink { file, path }
    }

    pub fn append(&mut self, entry: &LogEntry) -> io::Result<()> {
        writeln!(self.file, "{}", entry)?;
        self.file.flush()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Writes one rendered image. A partially written file is removed again.
pub fn write_image(output_dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ConvertError> {
    let output_path = output_dir.join(file_name);
    if let Err(e) = fs::write(&output_path, bytes) {
        let _ = fs::remove_file(&output_path);
        return Err(e.into());
    }
    Ok(output_path)
}
