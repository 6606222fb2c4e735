//! Analyzer Core - Access Log Statistics Engine
//!
//! This module provides the pipeline for turning web-server access logs into
//! descriptive traffic statistics over three time dimensions: hour-of-day,
//! day-of-month, and month-of-year.
//!
//! # Architecture
//!
//! ```text
//! Log file → LogfileReader (RecordSource)
//!     ↓
//! AccessAnalyzer (one tally pass per dimension → CounterSet)
//!     ↓
//! stats (max/min scans, circular window, five-year averages)
//!     ↓
//! TrafficReport → console text or JSON
//! ```

pub mod analyzer;
pub mod counters;
pub mod reader;
pub mod record;
pub mod report;
pub mod source;
pub mod stats;

pub use analyzer::AccessAnalyzer;
pub use counters::{CounterSet, DAYS_TRACKED, HOURS_PER_DAY, MONTHS_PER_YEAR};
pub use reader::LogfileReader;
pub use record::{LogRecord, RecordError};
pub use report::TrafficReport;
pub use source::{MemorySource, RecordSource};
pub use stats::YEARS_SPANNED;
