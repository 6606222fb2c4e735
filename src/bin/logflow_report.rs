//! Report Binary - Access Log Statistics
//!
//! Reads a web-server access log, tallies monthly/daily/hourly counts, and
//! prints the derived traffic statistics.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin logflow_report -- access.log
//! cargo run --release --bin logflow_report -- access.log --json
//! ```
//!
//! ## Environment Variables
//!
//! - ACCESS_LOG_PATH - Log file to analyze when no path argument is given (default: demo.log)
//! - RUST_LOG - Logging level (optional, default: info)

use logflow::analyzer_core::{
    report, AccessAnalyzer, LogfileReader, RecordSource, TrafficReport,
};
use chrono::Utc;
use std::env;
use std::path::PathBuf;

#[derive(Debug)]
struct ReportConfig {
    log_path: PathBuf,
    json_output: bool,
    dump_records: bool,
}

impl ReportConfig {
    fn from_env() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();

        let log_path = args
            .iter()
            .find(|a| !a.starts_with("--"))
            .cloned()
            .or_else(|| env::var("ACCESS_LOG_PATH").ok())
            .unwrap_or_else(|| "demo.log".to_string());

        Self {
            log_path: log_path.into(),
            json_output: args.iter().any(|a| a == "--json"),
            dump_records: args.iter().any(|a| a == "--dump"),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = ReportConfig::from_env();

    log::info!("🚀 Starting access log analysis");
    log::info!("   Log file: {}", config.log_path.display());

    let mut reader = LogfileReader::open(&config.log_path)?;
    if reader.skipped_lines() > 0 {
        log::warn!(
            "{} malformed lines were skipped while reading",
            reader.skipped_lines()
        );
    }

    if config.dump_records {
        reader.reset();
        while let Some(record) = reader.next_record() {
            println!("{}", record);
        }
        return Ok(());
    }

    let mut analyzer = AccessAnalyzer::new(reader);
    analyzer.tally_all_data();

    if analyzer.skipped_records() > 0 {
        log::warn!(
            "{} records had out-of-range fields and were not counted",
            analyzer.skipped_records()
        );
    }

    let traffic_report = TrafficReport::from_counts(analyzer.counts(), Utc::now().timestamp());

    if config.json_output {
        println!("{}", serde_json::to_string_pretty(&traffic_report)?);
    } else {
        print!("{}", traffic_report.render_text());
        println!();
        print!("{}", report::render_hourly_counts(analyzer.counts()));
        println!();
        print!("{}", report::render_daily_counts(analyzer.counts()));
        println!();
        print!("{}", report::render_monthly_counts(analyzer.counts()));
    }

    log::info!(
        "✅ Analyzed {} accesses",
        traffic_report.total_accesses
    );

    Ok(())
}
