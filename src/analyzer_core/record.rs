//! Access record parsing from raw log lines to the unified LogRecord struct

use serde::{Deserialize, Serialize};

/// One access recorded by the web server.
///
/// Field order matters: deriving `Ord` over (year, month, day, hour, minute)
/// yields chronological ordering, which the demo-log generator relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LogRecord {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

#[derive(Debug)]
pub enum RecordError {
    MissingField(&'static str),
    InvalidNumber(String),
    Json(serde_json::Error),
}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError::Json(err)
    }
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::MissingField(name) => write!(f, "missing field: {}", name),
            RecordError::InvalidNumber(tok) => write!(f, "invalid number: {}", tok),
            RecordError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for RecordError {}

const FIELD_NAMES: [&str; 5] = ["year", "month", "day", "hour", "minute"];

impl LogRecord {
    /// Parse a LogRecord from a plain log line.
    ///
    /// Expected format: five whitespace-separated decimal fields,
    /// `year month day hour minute`. Values are not range-checked here;
    /// the analyzer decides what to do with out-of-range fields.
    pub fn from_line(line: &str) -> Result<Self, RecordError> {
        let mut tokens = line.split_whitespace();
        let mut fields = [0u32; 5];

        for (slot, name) in fields.iter_mut().zip(FIELD_NAMES) {
            let token = tokens.next().ok_or(RecordError::MissingField(name))?;
            *slot = token
                .parse()
                .map_err(|_| RecordError::InvalidNumber(token.to_string()))?;
        }

        Ok(Self {
            year: fields[0],
            month: fields[1],
            day: fields[2],
            hour: fields[3],
            minute: fields[4],
        })
    }

    /// Parse a LogRecord from a JSONL line
    pub fn from_jsonl(line: &str) -> Result<Self, RecordError> {
        let record: LogRecord = serde_json::from_str(line)?;
        Ok(record)
    }
}

impl std::fmt::Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02} {:02} {:02} {:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
