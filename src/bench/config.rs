//! Benchmark configuration.

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Settings for one benchmark run.
///
/// Built once at startup and passed by reference to the runner; nothing
/// reads configuration from global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Bits per operand, sign bit included.
    pub digit_width: usize,
    /// Number of timed additions.
    pub trials: u64,
    /// Operand pairs generated per batch. Bounds memory; every pair is
    /// still added exactly once.
    pub batch_size: usize,
    /// Print every addition after timing (diagnostic mode).
    pub trace: bool,
    /// Seed for operand generation, or `None` for OS entropy.
    pub seed: Option<u64>,
}

impl BenchConfig {
    pub const DEFAULT_DIGIT_WIDTH: usize = 128;
    pub const DEFAULT_TRIALS: u64 = 2_500_000;
    pub const DEFAULT_BATCH_SIZE: usize = 65_536;
    /// One sign bit plus at least one magnitude bit.
    pub const MIN_DIGIT_WIDTH: usize = 2;

    /// Create a validated configuration with default batch size, no trace
    /// and no seed.
    pub fn new(digit_width: usize, trials: u64) -> Result<Self, ConfigError> {
        let config = Self {
            digit_width,
            trials,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Result<Self, ConfigError> {
        self.batch_size = batch_size;
        self.validate()?;
        Ok(self)
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.digit_width < Self::MIN_DIGIT_WIDTH {
            return Err(ConfigError::WidthTooSmall {
                width: self.digit_width,
                min: Self::MIN_DIGIT_WIDTH,
            });
        }
        if self.trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        if self.batch_size == 0 {
            return Err(ConfigError::EmptyBatch);
        }
        Ok(())
    }

    /// Number of batches a run is split into.
    pub fn batch_count(&self) -> u64 {
        self.trials.div_ceil(self.batch_size as u64)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            digit_width: Self::DEFAULT_DIGIT_WIDTH,
            trials: Self::DEFAULT_TRIALS,
            batch_size: Self::DEFAULT_BATCH_SIZE,
            trace: false,
            seed: None,
        }
    }
}

/// Errors from validating a [`BenchConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("digit width must be at least {min}, got {width}")]
    WidthTooSmall { width: usize, min: usize },

    #[error("trial count must be at least 1")]
    NoTrials,

    #[error("operand batch size must be at least 1")]
    EmptyBatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.digit_width, 128);
        assert_eq!(config.trials, 2_500_000);
        assert!(!config.trace);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_narrow_width() {
        assert_eq!(
            BenchConfig::new(1, 10),
            Err(ConfigError::WidthTooSmall { width: 1, min: 2 })
        );
        assert!(BenchConfig::new(0, 10).is_err());
        assert!(BenchConfig::new(2, 10).is_ok());
    }

    #[test]
    fn test_rejects_zero_trials() {
        assert_eq!(BenchConfig::new(128, 0), Err(ConfigError::NoTrials));
    }

    #[test]
    fn test_rejects_empty_batch() {
        let config = BenchConfig::new(8, 10).unwrap();
        assert_eq!(config.with_batch_size(0), Err(ConfigError::EmptyBatch));
    }

    #[test]
    fn test_batch_count() {
        let config = BenchConfig::new(8, 10).unwrap();
        assert_eq!(config.batch_count(), 1);

        let config = BenchConfig::new(8, 1000).unwrap().with_batch_size(64).unwrap();
        assert_eq!(config.batch_count(), 16);

        let config = BenchConfig::new(8, 1024).unwrap().with_batch_size(64).unwrap();
        assert_eq!(config.batch_count(), 16);
    }

    #[test]
    fn test_error_messages() {
        let err = BenchConfig::new(1, 5).unwrap_err();
        assert_eq!(err.to_string(), "digit width must be at least 2, got 1");
    }
}
