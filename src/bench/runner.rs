//! Timed benchmark loop.

use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};
use serde::{Serialize, Deserialize};
use crate::binary::add;
use crate::bench::{trace, BenchConfig, BenchError, OperandBatch, OperandBatches};

/// Runs shorter than this are too coarse to trust.
pub const MIN_MEANINGFUL_SECS: f64 = 0.1;

/// Outcome of a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    pub trials: u64,
    pub digit_width: usize,
    /// Wall-clock time spent in the timed loop.
    pub elapsed_secs: f64,
    pub adds_per_second: f64,
}

impl BenchReport {
    pub fn new(config: &BenchConfig, elapsed: Duration) -> Self {
        // A zero reading would divide by zero; clamp to the clock's resolution
        let timed = elapsed.max(Duration::from_nanos(1));
        Self {
            trials: config.trials,
            digit_width: config.digit_width,
            elapsed_secs: elapsed.as_secs_f64(),
            adds_per_second: config.trials as f64 / timed.as_secs_f64(),
        }
    }

    /// True when the run finished too quickly for a reliable figure.
    pub fn is_too_short(&self) -> bool {
        self.elapsed_secs <= MIN_MEANINGFUL_SECS
    }
}

/// Add every pair of a batch once and return the elapsed time.
///
/// Only addition happens between the two clock readings.
pub fn time_additions(batch: &OperandBatch) -> Duration {
    let start = Instant::now();
    for (a, b) in batch.pairs() {
        black_box(add(black_box(a), black_box(b)));
    }
    start.elapsed()
}

/// Run a full benchmark.
///
/// Trials are split into batches of fresh operands. Each batch is generated,
/// timed, then (in diagnostic mode) replayed to `trace_out` before it is
/// dropped. The reported time is the sum of the timed regions only.
pub fn run<W: Write + ?Sized>(config: &BenchConfig, trace_out: &mut W) -> Result<BenchReport, BenchError> {
    config.validate()?;

    let mut elapsed = Duration::ZERO;
    for batch in OperandBatches::for_config(config) {
        elapsed += time_additions(&batch);

        if config.trace {
            trace::write_trace(trace_out, &batch)?;
        }
    }

    Ok(BenchReport::new(config, elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use crate::bench::ConfigError;
    use crate::bench::input::make_rng;

    #[test]
    fn test_small_run_reports_finite_throughput() {
        let config = BenchConfig::new(128, 1000).unwrap().with_seed(Some(1));
        let report = run(&config, &mut std::io::sink()).unwrap();

        assert_eq!(report.trials, 1000);
        assert_eq!(report.digit_width, 128);
        assert!(report.elapsed_secs >= 0.0);
        assert!(report.adds_per_second.is_finite());
        assert!(report.adds_per_second > 0.0);
    }

    #[test]
    fn test_quiet_run_writes_nothing() {
        let config = BenchConfig::new(16, 50).unwrap().with_seed(Some(2));
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_trace_run_writes_every_trial() {
        let config = BenchConfig::new(4, 25)
            .unwrap()
            .with_seed(Some(3))
            .with_trace(true);
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 25);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = BenchConfig { trials: 0, ..BenchConfig::default() };
        let err = run(&config, &mut std::io::sink()).unwrap_err();
        assert!(matches!(err, BenchError::Config(ConfigError::NoTrials)));
    }

    #[test]
    fn test_zero_elapsed_is_clamped() {
        let config = BenchConfig::new(8, 10).unwrap();
        let report = BenchReport::new(&config, Duration::ZERO);
        assert!(report.adds_per_second.is_finite());
        assert!(report.is_too_short());
    }

    #[test]
    fn test_throughput_formula() {
        let config = BenchConfig::new(8, 500).unwrap();
        let report = BenchReport::new(&config, Duration::from_millis(250));
        assert_eq!(report.elapsed_secs, 0.25);
        assert_eq!(report.adds_per_second, 2000.0);
        assert!(!report.is_too_short());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let config = BenchConfig::new(8, 10).unwrap();
        assert!(BenchReport::new(&config, Duration::from_millis(100)).is_too_short());
        assert!(!BenchReport::new(&config, Duration::from_millis(101)).is_too_short());
    }

    #[test]
    fn test_every_trial_adds_a_new_pair() {
        // 1000 trials in batches of 64: each trace line is one addition,
        // and 64-bit random operands make a repeated line mean reuse
        let config = BenchConfig::new(64, 1000)
            .unwrap()
            .with_batch_size(64)
            .unwrap()
            .with_seed(Some(6))
            .with_trace(true);
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        let distinct: HashSet<&str> = lines.iter().copied().collect();
        assert_eq!(lines.len(), 1000);
        assert_eq!(distinct.len(), 1000);
    }

    #[test]
    fn test_more_trials_take_longer() {
        // Statistical: 200x the work should not finish faster
        let mut rng = make_rng(Some(4));
        let short = OperandBatch::generate(256, 100, &mut rng);
        let long = OperandBatch::generate(256, 20_000, &mut rng);
        let (short, long) = (time_additions(&short), time_additions(&long));
        assert!(long >= short, "short = {:?}, long = {:?}", short, long);
    }
}
