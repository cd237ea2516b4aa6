//! 256-bit proof-of-work target and its compact ("nBits") encoding.
//!
//! `U256` is the fixed-width unsigned integer produced by `construct_uint!`
//! in `lib.rs`. `Compact` is the packed floating-point-like form blocks carry
//! in their header: one byte of exponent, three bytes of mantissa, with the
//! sign carried in the mantissa's top bit.

use crate::U256;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Compact(u32);

impl Compact {
	pub fn new(u: u32) -> Self {
		Compact(u)
	}

	pub fn max_value() -> Self {
		Compact(u32::max_value())
	}

	/// Decodes into `(value, negative, overflow)`. `value` is meaningless when
	/// `negative` or `overflow` is set; callers must check both before use.
	pub fn to_u256(&self) -> (U256, bool, bool) {
		from_compact(self.0)
	}
}

impl From<u32> for Compact {
	fn from(u: u32) -> Self {
		Compact(u)
	}
}

impl From<Compact> for u32 {
	fn from(c: Compact) -> Self {
		c.0
	}
}

impl From<U256> for Compact {
	fn from(u: U256) -> Self {
		Compact(to_compact(u, false))
	}
}

/// Mirrors `arith_uint256::SetCompact`.
pub fn from_compact(compact: u32) -> (U256, bool, bool) {
	let size = compact >> 24;
	let mut word = compact & MANTISSA_MASK;
	let negative = word != 0 && (compact & SIGN_BIT) != 0;

	let value = if size <= 3 {
		word >>= 8 * (3 - size);
		U256::from(word)
	} else {
		U256::from(word) << (8 * (size - 3))
	};

	let overflow = word != 0 && ((size > 34) || (word > 0xff && size > 33) || (word > 0xffff && size > 32));

	(value, negative, overflow)
}

/// Mirrors `arith_uint256::GetCompact`. Encoding a zero value yields `0`.
pub fn to_compact(value: U256, negative: bool) -> u32 {
	let mut size = (value.bits() + 7) / 8;
	let mut compact = if size <= 3 {
		(value.low_u64() as u32) << (8 * (3 - size))
	} else {
		let shifted = value >> (8 * (size - 3));
		shifted.low_u32()
	};

	// The mantissa is treated as signed; if the high bit of the would-be
	// mantissa is set, shift a byte into the exponent to keep it positive.
	if compact & SIGN_BIT != 0 {
		compact >>= 8;
		size += 1;
	}

	compact |= (size as u32) << 24;
	compact |= if negative && (compact & MANTISSA_MASK != 0) { SIGN_BIT } else { 0 };
	compact
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decode_zero_mantissa() {
		let (value, negative, overflow) = from_compact(0x0100_3456);
		assert_eq!(value, U256::zero());
		assert!(!negative);
		assert!(!overflow);
	}

	#[test]
	fn encode_zero_is_zero() {
		assert_eq!(to_compact(U256::zero(), false), 0);
	}

	#[test]
	fn round_trip_pow_limit() {
		let compact = Compact::new(0x1d00_ffff);
		let (value, negative, overflow) = compact.to_u256();
		assert!(!negative);
		assert!(!overflow);
		let back: Compact = value.into();
		assert_eq!(u32::from(back), 0x1d00_ffff);
	}

	#[test]
	fn round_trip_regtest_limit() {
		let compact = Compact::new(0x207f_ffff);
		let (value, negative, overflow) = compact.to_u256();
		assert!(!negative);
		assert!(!overflow);
		let back: Compact = value.into();
		assert_eq!(u32::from(back), 0x207f_ffff);
	}

	#[test]
	fn detects_overflow() {
		let (_, _, overflow) = from_compact(0xff12_3456);
		assert!(overflow);
	}

	#[test]
	fn detects_negative() {
		let (_, negative, _) = from_compact(0x0184_0000);
		assert!(negative);
	}
}
