//! Single binary digit (bit).
//!
//! Stored as one byte so a [`BitVector`](crate::binary::BitVector) is a
//! plain byte array, one cell per bit.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::binary::ParseError;

/// A single binary digit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Bit {
    /// Zero (0)
    #[default]
    Zero = 0,
    /// One (1)
    One = 1,
}

impl Bit {
    /// Both bit values in order: Zero, One
    pub const ALL: [Bit; 2] = [Bit::Zero, Bit::One];

    /// Create a bit from a raw byte.
    ///
    /// Only 0 and 1 are valid bit bytes.
    #[inline]
    pub fn from_u8(byte: u8) -> Result<Self, ParseError> {
        match byte {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            _ => Err(ParseError::InvalidBit(byte)),
        }
    }

    /// Get the raw byte representation.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Create a bit from a boolean (true = One).
    #[inline]
    pub const fn from_bool(value: bool) -> Self {
        if value { Bit::One } else { Bit::Zero }
    }

    /// Parse a `'0'` or `'1'` character.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_one(self) -> bool {
        matches!(self, Bit::One)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Bit::Zero)
    }

    /// Exclusive or.
    #[inline]
    pub const fn xor(self, other: Self) -> Self {
        Bit::from_bool(self.is_one() != other.is_one())
    }

    /// Conjunction.
    #[inline]
    pub const fn and(self, other: Self) -> Self {
        Bit::from_bool(self.is_one() && other.is_one())
    }

    /// Disjunction.
    #[inline]
    pub const fn or(self, other: Self) -> Self {
        Bit::from_bool(self.is_one() || other.is_one())
    }

    /// Full adder: adds two bits and a carry-in, returns (sum, carry_out).
    ///
    /// sum = (a XOR b) XOR c_in, carry_out = ((a XOR b) AND c_in) OR (a AND b)
    #[inline]
    pub const fn full_add(self, other: Self, carry_in: Self) -> (Self, Self) {
        let half = self.xor(other);
        let sum = half.xor(carry_in);
        let carry_out = half.and(carry_in).or(self.and(other));
        (sum, carry_out)
    }
}

impl fmt::Debug for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_u8())
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_u8())
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        Bit::from_bool(value)
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.to_u8()
    }
}

impl TryFrom<u8> for Bit {
    type Error = ParseError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Bit::from_u8(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_adder_truth_table() {
        // (a, b, c_in) -> (sum, c_out), checked against integer addition
        for a in Bit::ALL {
            for b in Bit::ALL {
                for c in Bit::ALL {
                    let total = a.to_u8() + b.to_u8() + c.to_u8();
                    let (sum, carry) = a.full_add(b, c);
                    assert_eq!(sum.to_u8(), total % 2, "sum of {:?}+{:?}+{:?}", a, b, c);
                    assert_eq!(carry.to_u8(), total / 2, "carry of {:?}+{:?}+{:?}", a, b, c);
                }
            }
        }
    }

    #[test]
    fn test_full_adder_commutativity() {
        for a in Bit::ALL {
            for b in Bit::ALL {
                for c in Bit::ALL {
                    assert_eq!(a.full_add(b, c), b.full_add(a, c));
                }
            }
        }
    }

    #[test]
    fn test_gates() {
        assert_eq!(Bit::One.xor(Bit::One), Bit::Zero);
        assert_eq!(Bit::One.xor(Bit::Zero), Bit::One);
        assert_eq!(Bit::One.and(Bit::Zero), Bit::Zero);
        assert_eq!(Bit::One.and(Bit::One), Bit::One);
        assert_eq!(Bit::Zero.or(Bit::Zero), Bit::Zero);
        assert_eq!(Bit::Zero.or(Bit::One), Bit::One);
    }

    #[test]
    fn test_u8_roundtrip() {
        for b in Bit::ALL {
            assert_eq!(Bit::from_u8(b.to_u8()), Ok(b));
        }
    }

    #[test]
    fn test_invalid_byte() {
        assert_eq!(Bit::from_u8(2), Err(ParseError::InvalidBit(2)));
        assert!(Bit::try_from(255u8).is_err());
    }

    #[test]
    fn test_char_parse() {
        assert_eq!(Bit::from_char('0'), Some(Bit::Zero));
        assert_eq!(Bit::from_char('1'), Some(Bit::One));
        assert_eq!(Bit::from_char('x'), None);
    }
}
