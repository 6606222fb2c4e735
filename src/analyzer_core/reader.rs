//! File-backed log reader with rewindable cursor

use super::record::LogRecord;
use super::source::RecordSource;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads an access log file into memory and replays it as a record source.
///
/// The dataset is finite and bounded, so the whole file is parsed once at
/// open; iteration afterwards is a cursor over the parsed records. Lines
/// starting with `{` are parsed as JSONL, everything else as plain
/// `year month day hour minute` fields. Malformed lines are logged and
/// skipped, never fatal.
pub struct LogfileReader {
    path: PathBuf,
    records: Vec<LogRecord>,
    cursor: usize,
    skipped_lines: u64,
}

impl LogfileReader {
    /// Open a log file and parse all of its records
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = fs::read_to_string(&path)?;

        let mut records = Vec::new();
        let mut skipped_lines = 0u64;

        for (line_no, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let parsed = if line.starts_with('{') {
                LogRecord::from_jsonl(line)
            } else {
                LogRecord::from_line(line)
            };

            match parsed {
                Ok(record) => records.push(record),
                Err(e) => {
                    log::warn!(
                        "Skipping malformed line {} in {}: {}",
                        line_no + 1,
                        path.display(),
                        e
                    );
                    skipped_lines += 1;
                }
            }
        }

        log::info!(
            "📖 Loaded {} records from {} ({} malformed lines skipped)",
            records.len(),
            path.display(),
            skipped_lines
        );

        Ok(Self {
            path,
            records,
            cursor: 0,
            skipped_lines,
        })
    }

    /// Number of lines that failed to parse and were skipped at open
    pub fn skipped_lines(&self) -> u64 {
        self.skipped_lines
    }

    /// All parsed records, in file order. Debug/dump surface only.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for LogfileReader {
    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn next_record(&mut self) -> Option<LogRecord> {
        let record = self.records.get(self.cursor).copied();
        if record.is_some() {
            self.cursor += 1;
        }
        record
    }
}
