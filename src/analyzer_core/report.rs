//! Traffic report assembly and console rendering

use super::counters::CounterSet;
use super::stats;
use serde::Serialize;
use std::fmt::Write as _;

/// Summary of the tallied access statistics, ready for display or JSON emission.
///
/// `generated_at` is a Unix timestamp supplied by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct TrafficReport {
    pub total_accesses: u64,
    pub busiest_hour: usize,
    pub quietest_hour: usize,
    pub busiest_two_hour_start: usize,
    pub busiest_day: usize,
    pub quietest_day: usize,
    pub busiest_month: usize,
    pub quietest_month: usize,
    pub monthly_totals: [u64; 12],
    pub monthly_averages: [u64; 12],
    pub generated_at: i64,
}

impl TrafficReport {
    /// Build a report from populated counters
    pub fn from_counts(counts: &CounterSet, generated_at: i64) -> Self {
        Self {
            total_accesses: stats::number_of_accesses(counts),
            busiest_hour: stats::busiest_hour(counts),
            quietest_hour: stats::quietest_hour(counts),
            busiest_two_hour_start: stats::busiest_two_hour(counts),
            busiest_day: stats::busiest_day(counts),
            quietest_day: stats::quietest_day(counts),
            busiest_month: stats::busiest_month(counts),
            quietest_month: stats::quietest_month(counts),
            monthly_totals: stats::total_accesses_per_month(counts),
            monthly_averages: stats::average_accesses_per_month(counts),
            generated_at,
        }
    }

    /// Render the human-readable summary
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Total accesses: {}", self.total_accesses);
        let _ = writeln!(out, "Busiest hour: {}", self.busiest_hour);
        let _ = writeln!(out, "Quietest hour: {}", self.quietest_hour);
        let _ = writeln!(
            out,
            "Busiest two-hour window starts at: {}",
            self.busiest_two_hour_start
        );
        let _ = writeln!(out, "Busiest day: {}", self.busiest_day);
        let _ = writeln!(out, "Quietest day: {}", self.quietest_day);
        let _ = writeln!(out, "Busiest month: {}", self.busiest_month);
        let _ = writeln!(out, "Quietest month: {}", self.quietest_month);
        let _ = writeln!(out, "Average accesses per month over five years:");
        for (i, avg) in self.monthly_averages.iter().enumerate() {
            let _ = writeln!(out, "  {}: {}", i + 1, avg);
        }
        out
    }
}

/// Render the hourly counts as a `Hr: Count` table. Hour labels are 0-based.
pub fn render_hourly_counts(counts: &CounterSet) -> String {
    let mut out = String::from("Hr: Count\n");
    for (hour, count) in counts.hour_counts().iter().enumerate() {
        let _ = writeln!(out, "{}: {}", hour, count);
    }
    out
}

/// Render the daily counts as a `Day: Count` table. Day labels are 1-based.
pub fn render_daily_counts(counts: &CounterSet) -> String {
    let mut out = String::from("Day: Count\n");
    for (i, count) in counts.day_counts().iter().enumerate() {
        let _ = writeln!(out, "{}: {}", i + 1, count);
    }
    out
}

/// Render the monthly counts as a `Month: Count` table. Month labels are 1-based.
pub fn render_monthly_counts(counts: &CounterSet) -> String {
    let mut out = String::from("Month: Count\n");
    for (i, count) in counts.month_counts().iter().enumerate() {
        let _ = writeln!(out, "{}: {}", i + 1, count);
    }
    out
}
