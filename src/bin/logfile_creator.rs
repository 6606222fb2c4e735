//! Creator Binary - Demo Log Generation
//!
//! Writes a demo access log of randomized records for exercising the analyzer.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin logfile_creator -- demo.log 1000
//! cargo run --release --bin logfile_creator -- demo.log 1000 --seed 7
//! ```

use logflow::generator::LogfileCreator;
use std::env;

fn parse_seed_from_args(args: &[String]) -> Option<u64> {
    let idx = args.iter().position(|a| a == "--seed")?;
    args.get(idx + 1).and_then(|s| s.parse().ok())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut positional = Vec::new();
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--seed" {
            i += 2; // skip the flag and its value
            continue;
        }
        positional.push(args[i].clone());
        i += 1;
    }

    let path = positional
        .first()
        .cloned()
        .unwrap_or_else(|| "demo.log".to_string());
    let count: usize = positional
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1000);

    let mut creator = match parse_seed_from_args(&args) {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            LogfileCreator::with_seed(seed)
        }
        None => LogfileCreator::new(),
    };

    let written = creator.create_file(&path, count)?;
    log::info!("✅ Created {} with {} records", path, written);

    Ok(())
}
