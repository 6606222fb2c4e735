//! Access analyzer: tally passes over a record source plus the query API

use super::counters::CounterSet;
use super::source::RecordSource;
use super::stats;

/// Which counter dimension a tally pass feeds
#[derive(Debug, Clone, Copy)]
enum Dimension {
    Month,
    Day,
    Hour,
}

impl Dimension {
    fn name(&self) -> &'static str {
        match self {
            Dimension::Month => "month",
            Dimension::Day => "day",
            Dimension::Hour => "hour",
        }
    }
}

/// Analyzes access patterns from a rewindable record source.
///
/// The analyzer exclusively owns its counters; each tally pass rewinds the
/// source and accumulates into exactly one dimension. Passes never clear
/// previously tallied counts, so running the same pass twice doubles every
/// touched bucket. Call `clear_counts` for a fresh tally.
pub struct AccessAnalyzer<S: RecordSource> {
    source: S,
    counts: CounterSet,
    skipped_records: u64,
}

impl<S: RecordSource> AccessAnalyzer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            counts: CounterSet::new(),
            skipped_records: 0,
        }
    }

    /// Tally the monthly, daily, and hourly access data, one full pass each
    pub fn tally_all_data(&mut self) {
        self.tally_monthly_data();
        self.tally_daily_data();
        self.tally_hourly_data();
    }

    /// Tally the monthly access data
    pub fn tally_monthly_data(&mut self) {
        self.tally(Dimension::Month);
    }

    /// Tally the daily access data
    pub fn tally_daily_data(&mut self) {
        self.tally(Dimension::Day);
    }

    /// Tally the hourly access data
    pub fn tally_hourly_data(&mut self) {
        self.tally(Dimension::Hour);
    }

    fn tally(&mut self, dimension: Dimension) {
        self.source.reset();
        let mut seen = 0u64;

        while let Some(record) = self.source.next_record() {
            seen += 1;
            let counted = match dimension {
                Dimension::Month => self.counts.add_month(record.month),
                Dimension::Day => self.counts.add_day(record.day),
                Dimension::Hour => self.counts.add_hour(record.hour),
            };

            if !counted {
                log::warn!(
                    "Skipping record with out-of-range {} field: {}",
                    dimension.name(),
                    record
                );
                self.skipped_records += 1;
            }
        }

        log::debug!("Tallied {} pass over {} records", dimension.name(), seen);
    }

    /// Running total of records skipped for out-of-range fields, across all passes
    pub fn skipped_records(&self) -> u64 {
        self.skipped_records
    }

    /// Reset every counter bucket to zero. Tally passes never do this implicitly.
    pub fn clear_counts(&mut self) {
        self.counts.clear();
        self.skipped_records = 0;
    }

    /// The populated counters
    pub fn counts(&self) -> &CounterSet {
        &self.counts
    }

    /// Total number of accesses tallied, from the hour buckets
    pub fn number_of_accesses(&self) -> u64 {
        stats::number_of_accesses(&self.counts)
    }

    /// Hour of day (0-23) with the most accesses
    pub fn busiest_hour(&self) -> usize {
        stats::busiest_hour(&self.counts)
    }

    /// Hour of day (0-23) with the fewest accesses
    pub fn quietest_hour(&self) -> usize {
        stats::quietest_hour(&self.counts)
    }

    /// Starting hour of the busiest contiguous window (wraps past midnight)
    pub fn busiest_two_hour(&self) -> usize {
        stats::busiest_two_hour(&self.counts)
    }

    /// Day of month (1-28) with the most accesses
    pub fn busiest_day(&self) -> usize {
        stats::busiest_day(&self.counts)
    }

    /// Day of month (1-28) with the fewest accesses
    pub fn quietest_day(&self) -> usize {
        stats::quietest_day(&self.counts)
    }

    /// Month (1-12) with the most accesses
    pub fn busiest_month(&self) -> usize {
        stats::busiest_month(&self.counts)
    }

    /// Month (1-12) with the fewest accesses
    pub fn quietest_month(&self) -> usize {
        stats::quietest_month(&self.counts)
    }

    /// Total accesses per month, January first
    pub fn total_accesses_per_month(&self) -> [u64; 12] {
        stats::total_accesses_per_month(&self.counts)
    }

    /// Average accesses per month over the dataset's five-year span
    pub fn average_accesses_per_month(&self) -> [u64; 12] {
        stats::average_accesses_per_month(&self.counts)
    }
}
