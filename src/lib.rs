//! # Ripple
//!
//! A ripple-carry adder over arbitrary-width two's-complement bit vectors,
//! and a harness that measures how many additions it performs per second.
//!
//! Every bit is stored in its own byte and the adder walks the vector one
//! full adder at a time, from the least significant bit to the sign bit.

pub mod binary;
pub mod bench;

// Re-export commonly used types
pub use binary::{Bit, BitVector, ArithError, ParseError, add, add_with_carry, to_decimal};
pub use bench::{BenchConfig, BenchReport, BenchError, ConfigError};
