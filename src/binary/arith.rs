//! Multi-bit arithmetic.
//!
//! Ripple-carry addition over two's-complement bit vectors, plus the
//! decimal decoding used to check and display results.

use num::BigInt;
use thiserror::Error;
use crate::binary::{Bit, BitVector};

/// Errors from the non-panicking adder entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithError {
    #[error("operand widths differ: {left} bits vs {right} bits")]
    WidthMismatch { left: usize, right: usize },

    #[error("operands must have at least one bit")]
    Empty,
}

/// Add two equal-width vectors, returning (sum, carry_out).
///
/// Bits are processed from the least significant end (the last index) to
/// the sign bit, feeding each carry into the next full adder. The final
/// carry is not part of the sum.
///
/// # Panics
/// Panics if the operand widths differ.
pub fn add_with_carry(a: &BitVector, b: &BitVector) -> (BitVector, Bit) {
    assert_eq!(
        a.len(), b.len(),
        "cannot add a {}-bit vector to a {}-bit vector", a.len(), b.len()
    );

    let width = a.len();
    let (x, y) = (a.bits(), b.bits());
    let mut sum = vec![Bit::Zero; width];
    let mut carry = Bit::Zero;

    for i in (0..width).rev() {
        let (s, new_carry) = x[i].full_add(y[i], carry);
        sum[i] = s;
        carry = new_carry;
    }

    (BitVector::from_bits(sum), carry)
}

/// Add two equal-width vectors, discarding the final carry.
///
/// # Panics
/// Panics if the operand widths differ.
#[inline]
pub fn add(a: &BitVector, b: &BitVector) -> BitVector {
    add_with_carry(a, b).0
}

/// Checked variant of [`add_with_carry`] that reports bad operands instead
/// of panicking.
pub fn try_add(a: &BitVector, b: &BitVector) -> Result<(BitVector, Bit), ArithError> {
    if a.len() != b.len() {
        return Err(ArithError::WidthMismatch { left: a.len(), right: b.len() });
    }
    if a.is_empty() {
        return Err(ArithError::Empty);
    }
    Ok(add_with_carry(a, b))
}

/// Two's-complement overflow: both operands share a sign and the sum's
/// sign differs from it.
///
/// This is independent of the unsigned carry-out, e.g. `0111 + 0001`
/// overflows with carry 0 and `1111 + 0001` carries without overflowing.
pub fn signed_overflow(a: &BitVector, b: &BitVector, sum: &BitVector) -> bool {
    match (a.sign(), b.sign(), sum.sign()) {
        (Some(sa), Some(sb), Some(ss)) => sa == sb && ss != sa,
        _ => false,
    }
}

/// Decode a vector into its signed value.
#[inline]
pub fn to_decimal(v: &BitVector) -> BigInt {
    v.to_decimal()
}
