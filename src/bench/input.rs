//! Random operand generation.
//!
//! Operands are produced in batches so memory stays bounded for large trial
//! counts. Each batch is generated before its additions are timed, and no
//! pair is ever handed to the adder twice.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::binary::BitVector;
use crate::bench::BenchConfig;

/// Create the generator for a run: seeded when reproducibility is asked
/// for, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Freshly generated operand pairs of a single width.
#[derive(Debug, Clone)]
pub struct OperandBatch {
    width: usize,
    pairs: Vec<(BitVector, BitVector)>,
}

impl OperandBatch {
    /// Generate `count` random pairs of `width`-bit operands.
    pub fn generate<R: Rng + ?Sized>(width: usize, count: usize, rng: &mut R) -> Self {
        let pairs = (0..count)
            .map(|_| (BitVector::random(width, rng), BitVector::random(width, rng)))
            .collect();
        Self { width, pairs }
    }

    /// Width of every operand in the batch.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(BitVector, BitVector)] {
        &self.pairs
    }
}

/// Splits a run's trials into batches of at most `batch_size` new pairs.
///
/// Yields `ceil(trials / batch_size)` batches whose lengths sum to `trials`.
pub struct OperandBatches {
    rng: StdRng,
    width: usize,
    batch_size: usize,
    remaining: u64,
}

impl OperandBatches {
    pub fn new(width: usize, trials: u64, batch_size: usize, rng: StdRng) -> Self {
        Self { rng, width, batch_size, remaining: trials }
    }

    /// Batches for the run a configuration describes.
    pub fn for_config(config: &BenchConfig) -> Self {
        Self::new(
            config.digit_width,
            config.trials,
            config.batch_size,
            make_rng(config.seed),
        )
    }

    /// Trials not yet handed out.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Iterator for OperandBatches {
    type Item = OperandBatch;

    fn next(&mut self) -> Option<OperandBatch> {
        if self.remaining == 0 || self.batch_size == 0 {
            return None;
        }
        let count = usize::try_from(self.remaining).map_or(self.batch_size, |r| r.min(self.batch_size));
        self.remaining -= count as u64;
        Some(OperandBatch::generate(self.width, count, &mut self.rng))
    }
}
