//! Fixed-width two's-complement bit vectors.
//!
//! A [`BitVector`] stores its bits most significant first: index 0 is the
//! sign bit and index `len - 1` is the least significant bit. The width is
//! chosen at construction time and never changes.

use std::fmt;
use std::ops::Index;
use num::{BigInt, Integer, One, ToPrimitive, Zero};
use rand::Rng;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::binary::Bit;

/// An ordered, fixed-length sequence of bits encoding a signed integer.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BitVector {
    /// Bits stored from most significant (index 0) to least significant
    bits: Vec<Bit>,
}

impl BitVector {
    /// Create an all-zero vector of the given width.
    pub fn zero(width: usize) -> Self {
        Self { bits: vec![Bit::Zero; width] }
    }

    /// Create a vector from bits (MSB first).
    #[inline]
    pub fn from_bits(bits: Vec<Bit>) -> Self {
        Self { bits }
    }

    /// Create a vector from raw bytes (MSB first), each of which must be 0 or 1.
    pub fn from_u8_slice(bytes: &[u8]) -> Result<Self, ParseError> {
        let bits = bytes
            .iter()
            .map(|&b| Bit::from_u8(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bits })
    }

    /// Fill a vector of the given width with independent fair coin flips.
    pub fn random<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Self {
        (0..width).map(|_| Bit::from_bool(rng.random())).collect()
    }

    /// Encode an integer as a `width`-bit two's-complement vector.
    ///
    /// Values outside the representable range wrap modulo 2^width, the same
    /// way the adder wraps on overflow.
    pub fn from_decimal(value: &BigInt, width: usize) -> Self {
        let modulus = BigInt::one() << width;
        let wrapped = value.mod_floor(&modulus);
        // LSB-first base-2 digits of a non-negative value
        let (_, digits) = wrapped.to_radix_le(2);

        let mut bits = vec![Bit::Zero; width];
        for (k, digit) in digits.iter().take(width).enumerate() {
            bits[width - 1 - k] = Bit::from_bool(*digit == 1);
        }
        Self { bits }
    }

    /// Encode an `i128` as a `width`-bit two's-complement vector.
    pub fn from_i128(value: i128, width: usize) -> Self {
        Self::from_decimal(&BigInt::from(value), width)
    }

    /// Number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get the underlying bits (MSB first).
    #[inline]
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// Get a single bit by index (0 = MSB).
    #[inline]
    pub fn get(&self, index: usize) -> Option<Bit> {
        self.bits.get(index).copied()
    }

    /// The sign bit, or `None` for an empty vector.
    #[inline]
    pub fn sign(&self) -> Option<Bit> {
        self.bits.first().copied()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign() == Some(Bit::One)
    }

    /// Check if every bit is zero.
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|b| b.is_zero())
    }

    /// Decode the two's-complement value.
    ///
    /// Bit `i > 0` weighs `2^(len-1-i)`; the sign bit weighs `-2^(len-1)`.
    /// Exact for every width. An empty vector decodes to zero.
    pub fn to_decimal(&self) -> BigInt {
        let Some((sign, rest)) = self.bits.split_first() else {
            return BigInt::zero();
        };

        let mut value = BigInt::zero();
        for bit in rest {
            value = value << 1usize;
            if bit.is_one() {
                value += 1u32;
            }
        }

        if sign.is_one() {
            value -= BigInt::one() << rest.len();
        }
        value
    }

    /// Decode into an `i128`, or `None` if the value does not fit.
    pub fn to_i128(&self) -> Option<i128> {
        self.to_decimal().to_i128()
    }

    /// Parse a string of `0`/`1` characters, MSB first.
    ///
    /// Accepts an optional `0b` prefix and `_` separators, e.g. `0b0101_0011`.
    /// Error positions are character indices into `input` as given.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim_start();
        let mut offset = input.chars().count() - trimmed.chars().count();
        let s = match trimmed.trim_end().strip_prefix("0b") {
            Some(rest) => {
                offset += 2;
                rest
            }
            None => trimmed.trim_end(),
        };

        let mut bits = Vec::with_capacity(s.len());
        for (index, c) in s.chars().enumerate() {
            if c == '_' {
                continue;
            }
            match Bit::from_char(c) {
                Some(bit) => bits.push(bit),
                None => return Err(ParseError::InvalidChar { ch: c, position: offset + index }),
            }
        }

        if bits.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Self { bits })
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector(0b{} = {})", self, self.to_decimal())
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

impl Index<usize> for BitVector {
    type Output = Bit;

    fn index(&self, index: usize) -> &Bit {
        &self.bits[index]
    }
}

impl AsRef<[Bit]> for BitVector {
    fn as_ref(&self) -> &[Bit] {
        &self.bits
    }
}

impl FromIterator<Bit> for BitVector {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self { bits: iter.into_iter().collect() }
    }
}

impl From<Vec<Bit>> for BitVector {
    fn from(bits: Vec<Bit>) -> Self {
        Self::from_bits(bits)
    }
}

impl std::str::FromStr for BitVector {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors that can occur when building bit vectors from text or bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no bits in input")]
    Empty,

    #[error("invalid bit character '{ch}' at position {position} (expected 0 or 1)")]
    InvalidChar { ch: char, position: usize },

    #[error("invalid bit value {0} (expected 0 or 1)")]
    InvalidBit(u8),
}
