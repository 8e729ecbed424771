// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: print the prime at each requested index.

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use nth_prime_sieve::engine::MAX_SEGMENT_WIDTH;
use nth_prime_sieve::{nth_prime_with, RetentionPolicy, SieveOptions};

#[derive(Debug, Parser)]
#[command(name = "nth-prime", version, about = "Find the n-th prime (0-indexed) with a segmented sieve")]
struct Args {
    /// Zero-based indices: 0 is 2, 1 is 3, ...
    #[arg(required = true, allow_negative_numbers = true)]
    indices: Vec<i64>,

    /// Keep every prime found instead of only those needed for sieving.
    #[arg(long)]
    retain_all: bool,

    /// Refuse segment widths at or above this value.
    #[arg(long, env = "NTH_PRIME_MAX_SEGMENT_WIDTH", default_value_t = MAX_SEGMENT_WIDTH)]
    max_segment_width: u64,

    /// Print sieve statistics after each prime.
    #[arg(long)]
    stats: bool,

    /// Increase logging (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let options = SieveOptions {
        retention: if args.retain_all {
            RetentionPolicy::All
        } else {
            RetentionPolicy::UpToWidth
        },
        max_segment_width: args.max_segment_width,
    };

    for &n in &args.indices {
        match nth_prime_with(n, &options) {
            Ok(report) => {
                println!("{}", report.prime);
                if args.stats {
                    eprintln!(
                        "index {}: bound {}, width {}",
                        n, report.bound.value, report.bound.width
                    );
                    eprint!("{}", report.statistics);
                }
            }
            Err(e) => {
                eprintln!("ERROR: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
