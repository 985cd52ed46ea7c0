//! Diagnostic output for individual additions.
//!
//! Each line shows the operands and sum as bit strings and as signed
//! decimals, e.g.
//!
//! ```text
//! 0101 + 0011 = 1000	5 + 3 = -8
//! 1111 + 0001 = 0000	-1 + 1 = 0	OVERFLOW
//! ```
//!
//! `OVERFLOW` marks a carry out of the sign bit.

use std::io::{self, Write};
use crate::binary::{add_with_carry, BitVector};
use crate::bench::OperandBatch;

/// Format one addition as a diagnostic line (without trailing newline).
pub fn format_addition(a: &BitVector, b: &BitVector) -> String {
    let (sum, carry) = add_with_carry(a, b);
    let mut line = format!(
        "{} + {} = {}\t{} + {} = {}",
        a, b, sum,
        a.to_decimal(), b.to_decimal(), sum.to_decimal()
    );
    if carry.is_one() {
        line.push_str("\tOVERFLOW");
    }
    line
}

/// Write the diagnostic line for one addition.
pub fn write_addition<W: Write + ?Sized>(out: &mut W, a: &BitVector, b: &BitVector) -> io::Result<()> {
    writeln!(out, "{}", format_addition(a, b))
}

/// Replay the additions of a batch and write one line per pair.
pub fn write_trace<W: Write + ?Sized>(out: &mut W, batch: &OperandBatch) -> io::Result<()> {
    for (a, b) in batch.pairs() {
        write_addition(out, a, b)?;
    }
    out.flush()
}
