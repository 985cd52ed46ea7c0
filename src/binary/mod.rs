//! Two's-complement binary primitives.
//!
//! This module provides the core types for ripple-carry addition:
//! - [`Bit`] - A single binary digit with full-adder logic
//! - [`BitVector`] - A fixed-width, MSB-first two's-complement integer
//! - [`arith`] - The adder and the decimal decoder

mod bit;
mod vector;
pub mod arith;

pub use bit::Bit;
pub use vector::{BitVector, ParseError};
pub use arith::{add, add_with_carry, try_add, signed_overflow, to_decimal, ArithError};
