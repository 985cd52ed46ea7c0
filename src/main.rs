//! Ripple Bench - CLI Entry Point
//!
//! Usage:
//! - `ripple-bench` - 2,500,000 additions of 128-bit operands
//! - `ripple-bench <digit-width> <trials>` - custom width and trial count
//! - `ripple-bench ... --trace` - also print every addition after timing

use std::io::{self, BufWriter};
use std::process;

use clap::Parser;
use ripple::bench::{self, BenchConfig, BenchError, BenchReport};

/// Exit status for configuration and usage errors (matches clap's).
const EXIT_CONFIG: i32 = 2;
/// Exit status for failures while writing output.
const EXIT_IO: i32 = 1;

#[derive(Parser)]
#[command(name = "ripple-bench")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "Measure ripple-carry additions per second on two's-complement bit vectors")]
struct Cli {
    /// Bits per operand, sign bit included (default: 128, minimum: 2)
    #[arg(requires = "trials")]
    digit_width: Option<usize>,
    /// Number of additions to time (default: 2500000)
    trials: Option<u64>,
    /// Print every addition as bits and decimals once timing is done
    #[arg(short, long, conflicts_with = "json")]
    trace: bool,
    /// Seed the operand generator for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,
    /// Operand pairs generated per batch (bounds memory use)
    #[arg(long, default_value_t = BenchConfig::DEFAULT_BATCH_SIZE)]
    batch_size: usize,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> Result<BenchConfig, bench::ConfigError> {
        let digit_width = self.digit_width.unwrap_or(BenchConfig::DEFAULT_DIGIT_WIDTH);
        let trials = self.trials.unwrap_or(BenchConfig::DEFAULT_TRIALS);

        BenchConfig::new(digit_width, trials)?
            .with_trace(self.trace)
            .with_seed(self.seed)
            .with_batch_size(self.batch_size)
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {}", e);
            process::exit(EXIT_CONFIG);
        }
    };

    if !cli.json {
        print_banner(&config);
    }

    let mut trace_out = BufWriter::new(io::stdout().lock());
    let report = match bench::run(&config, &mut trace_out) {
        Ok(report) => report,
        Err(BenchError::Config(e)) => {
            eprintln!("❌ Invalid configuration: {}", e);
            process::exit(EXIT_CONFIG);
        }
        Err(e) => {
            eprintln!("❌ Benchmark failed: {}", e);
            process::exit(EXIT_IO);
        }
    };
    drop(trace_out);

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ Failed to encode report: {}", e);
                process::exit(EXIT_IO);
            }
        }
    } else {
        print_report(&report);
    }
}

fn print_banner(config: &BenchConfig) {
    println!("🔧 Starting test with:");
    println!("   trials      = {}", config.trials);
    println!("   digit width = {}", config.digit_width);
    if let Some(seed) = config.seed {
        println!("   seed        = {}", seed);
    }
    println!();

    if config.trace {
        println!("━━━ Trace ━━━");
    }
}

fn print_report(report: &BenchReport) {
    println!();
    println!("━━━ Result ━━━");
    println!("Elapsed time: {} s", report.elapsed_secs);
    println!("Adds per second: {:.6}", report.adds_per_second);

    if report.is_too_short() {
        println!();
        println!(
            "⚠️  Warning: the test may have been too small for a meaningful measurement of time. \
             Try again with a larger trial count."
        );
    }
}
