//! Demo log-file generation with randomized access records

use crate::analyzer_core::record::LogRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// First year of the generated dataset's five-year span
pub const BASE_YEAR: u32 = 2014;
const SPAN_YEARS: u32 = 5;

/// Writes demo access logs with randomized records in chronological order.
///
/// Records are drawn uniformly from a fixed five-year span, matching the
/// averaging assumption of the statistics layer.
pub struct LogfileCreator {
    rng: StdRng,
}

impl LogfileCreator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic creator for reproducible files
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `count` random records, sorted chronologically
    pub fn create_records(&mut self, count: usize) -> Vec<LogRecord> {
        let mut records: Vec<LogRecord> = (0..count).map(|_| self.create_record()).collect();
        records.sort();
        records
    }

    /// Write `count` random records to `path`, one per line, oldest first.
    /// Returns the number of records written.
    pub fn create_file(&mut self, path: impl AsRef<Path>, count: usize) -> io::Result<usize> {
        let records = self.create_records(count);

        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        for record in &records {
            writeln!(writer, "{}", record)?;
        }
        writer.flush()?;

        log::info!(
            "📝 Wrote {} demo records to {}",
            records.len(),
            path.as_ref().display()
        );
        Ok(records.len())
    }

    fn create_record(&mut self) -> LogRecord {
        LogRecord {
            year: BASE_YEAR + self.rng.gen_range(0..SPAN_YEARS),
            month: self.rng.gen_range(1..=12),
            day: self.rng.gen_range(1..=28),
            hour: self.rng.gen_range(0..24),
            minute: self.rng.gen_range(0..60),
        }
    }
}

impl Default for LogfileCreator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_sorted_and_in_range() {
        let mut creator = LogfileCreator::with_seed(7);
        let records = creator.create_records(200);

        assert_eq!(records.len(), 200);
        assert!(records.windows(2).all(|w| w[0] <= w[1]));
        for record in &records {
            assert!((BASE_YEAR..BASE_YEAR + SPAN_YEARS).contains(&record.year));
            assert!((1..=12).contains(&record.month));
            assert!((1..=28).contains(&record.day));
            assert!(record.hour < 24);
            assert!(record.minute < 60);
        }
    }

    #[test]
    fn test_same_seed_same_records() {
        let a = LogfileCreator::with_seed(42).create_records(50);
        let b = LogfileCreator::with_seed(42).create_records(50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_create_file_round_trips_through_parser() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.log");

        let written = LogfileCreator::with_seed(3)
            .create_file(&path, 25)
            .unwrap();
        assert_eq!(written, 25);

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<LogRecord> = contents
            .lines()
            .map(|line| LogRecord::from_line(line).unwrap())
            .collect();
        assert_eq!(parsed.len(), 25);
        assert!(parsed.windows(2).all(|w| w[0] <= w[1]));
    }
}
