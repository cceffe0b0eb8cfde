//! Text formatting and parsing for arbitrary-width integers.

#![allow(
	clippy::arithmetic_side_effects,
	clippy::as_conversions,
	clippy::cast_possible_truncation,
	clippy::integer_division,
	reason = "Digit arithmetic is bounded by the radix"
)]



//		Modules

#[cfg(test)]
#[path = "../tests/text.rs"]
mod tests;



//		Packages

use super::ArbitraryInt;
use crate::{
	errors::ConversionError,
	storage::{BitManipulation, BitWindow, StorageFactory},
};
use core::{
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, Write, self},
	str::FromStr,
};
use typenum::Unsigned;



//		Structs

//󰭅		ArbitraryInt
impl<BITS, const SIGNED: bool, OFFSET, F> ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		from_str_radix
	/// Parses an integer from a string in the given base.
	///
	/// The string may have surrounding whitespace and a single leading `+` or
	/// `-`, and underscores between digits are ignored. Unlike
	/// [`FromStr`], no base prefix is accepted.
	///
	/// # Parameters
	///
	/// * `src`   - The string to parse.
	/// * `radix` - The base to parse in, from 2 to 36.
	///
	/// # Errors
	///
	/// Returns an error if the base is unsupported, the string holds no
	/// digits or an invalid digit, or the value does not fit.
	///
	pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, ConversionError> {
		if !(2..=36).contains(&radix) {
			return Err(ConversionError::UnsupportedRadix(radix));
		}
		let (negative, digits) = split_sign(src.trim());
		Self::from_digits(digits, radix, negative)
	}

	//		to_str_radix
	/// Formats the value as a string in the given base, with a leading `-` for
	/// negative values.
	///
	/// Digits above 9 are lowercase letters.
	///
	/// # Errors
	///
	/// Returns an error if the base is outside the range 2 to 36.
	///
	pub fn to_str_radix(&self, radix: u32) -> Result<String, ConversionError> {
		if !(2..=36).contains(&radix) {
			return Err(ConversionError::UnsupportedRadix(radix));
		}
		let digits = self.magnitude().to_digits(radix);
		Ok(if self.is_negative() { format!("-{digits}") } else { digits })
	}

	//		from_digits
	/// Parses a run of digits with the sign already split off.
	fn from_digits(digits: &str, radix: u32, negative: bool) -> Result<Self, ConversionError> {
		if digits.is_empty() {
			return Err(ConversionError::EmptyValue);
		}
		if negative && !SIGNED {
			return Err(ConversionError::ValueIsNegative);
		}

		let out_of_range   = if negative { ConversionError::ValueTooSmall } else { ConversionError::ValueTooLarge };
		let radix_bits     = radix.ilog2() as usize + 1;
		//	Accumulate the magnitude as an unsigned bit pattern
		let mut magnitude  = Self::zero();
		let mut has_digits = false;
		for c in digits.chars() {
			if c == '_' {
				continue;
			}
			let digit = c.to_digit(radix).ok_or(
				if c.is_ascii_alphanumeric() { ConversionError::InvalidRadix(c, radix) } else { ConversionError::InvalidDigit(c) }
			)?;
			has_digits = true;

			let (scaled, overflow) = magnitude.mul_raw(|pos| (radix >> pos) & 1 == 1, radix_bits);
			magnitude              = scaled;
			let carry              = magnitude.storage.offset_add_with_carry(Self::OFFSET, Self::BITS, u64::from(digit), false);
			if overflow || carry {
				return Err(out_of_range);
			}
		}
		if !has_digits {
			return Err(ConversionError::EmptyValue);
		}

		if !SIGNED {
			Ok(magnitude)
		} else if negative {
			//	The magnitude of MIN has only the top bit set
			if magnitude.top_bit() && magnitude != Self::min_value() {
				return Err(out_of_range);
			}
			Ok(magnitude.wrapping_neg())
		} else if magnitude.top_bit() {
			Err(out_of_range)
		} else {
			Ok(magnitude)
		}
	}

	//		to_digits
	/// Formats the window bit pattern, read as unsigned, without prefix or
	/// sign. Only bases 2, 8, 10, and 16 are handled natively, and anything
	/// else falls back to the generic digit loop.
	fn to_digits(&self, radix: u32) -> String {
		let mut out = String::new();
		if Self::BITS <= 128 {
			push_chunk(&mut out, self.low_u128(), radix, 0);
			return out;
		}

		//	Wide values are peeled off in word-sized chunks of digits, least
		//	significant first
		let (chunk_divisor, chunk_digits) = match radix {
			2 | 8 | 10 | 16 => chunk_for_radix(radix),
			_               => (u128::from(radix), 1),
		};
		let divisor       = Self::from_u128_wrapping(chunk_divisor);
		let mut remaining = self.clone();
		let mut chunks    = Vec::new();
		while !remaining.is_zero() {
			let (quotient, remainder) = remaining.div_rem_raw(&divisor);
			chunks.push(remainder.low_u128());
			remaining = quotient;
		}
		if chunks.is_empty() {
			return String::from("0");
		}
		for (index, &chunk) in chunks.iter().rev().enumerate() {
			push_chunk(&mut out, chunk, radix, if index == 0 { 0 } else { chunk_digits });
		}
		out
	}
}

//󰭅		Binary
impl<BITS, const SIGNED: bool, OFFSET, F> Binary for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0b", &self.to_digits(2))
	}
}

//󰭅		Debug
impl<BITS, const SIGNED: bool, OFFSET, F> Debug for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(self, f)
	}
}

//󰭅		Display
impl<BITS, const SIGNED: bool, OFFSET, F> Display for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	The magnitude of MIN is its own bit pattern, read as unsigned
		f.pad_integral(!self.is_negative(), "", &self.magnitude().to_digits(10))
	}
}

//󰭅		FromStr
impl<BITS, const SIGNED: bool, OFFSET, F> FromStr for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	type Err = ConversionError;

	//		from_str
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if trimmed.is_empty() {
			return Err(ConversionError::EmptyValue);
		}
		let (negative, without_sign) = split_sign(trimmed);

		//	Handle different bases
		let (without_base, radix) =
			if        let Some(rest) = without_sign.strip_prefix("0x").or_else(|| without_sign.strip_prefix("0X")) {
				(rest, 16)
			} else if let Some(rest) = without_sign.strip_prefix("0b").or_else(|| without_sign.strip_prefix("0B")) {
				(rest, 2)
			} else if let Some(rest) = without_sign.strip_prefix("0o").or_else(|| without_sign.strip_prefix("0O")) {
				(rest, 8)
			} else {
				(without_sign, 10)
			}
		;
		Self::from_digits(without_base, radix, negative)
	}
}

//󰭅		LowerHex
impl<BITS, const SIGNED: bool, OFFSET, F> LowerHex for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &self.to_digits(16))
	}
}

//󰭅		Octal
impl<BITS, const SIGNED: bool, OFFSET, F> Octal for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0o", &self.to_digits(8))
	}
}

//󰭅		UpperHex
impl<BITS, const SIGNED: bool, OFFSET, F> UpperHex for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &self.to_digits(16).to_uppercase())
	}
}



//		Functions

//		chunk_for_radix
/// The largest power of a formatting base that fits in a machine word, with
/// its number of digits. Wide values are printed a chunk at a time.
const fn chunk_for_radix(radix: u32) -> (u128, usize) {
	match radix {
		2  => (1 << 63, 63),
		8  => (1 << 63, 21),
		16 => (1 << 60, 15),
		_  => (10_000_000_000_000_000_000, 19),
	}
}

//		push_chunk
/// Appends a chunk of digits, zero-padded to `width`.
fn push_chunk(out: &mut String, chunk: u128, radix: u32, width: usize) {
	//	Writing to a String cannot fail
	_ = match radix {
		2  => write!(out, "{chunk:0width$b}"),
		8  => write!(out, "{chunk:0width$o}"),
		10 => write!(out, "{chunk:0width$}"),
		16 => write!(out, "{chunk:0width$x}"),
		_  => {
			push_generic(out, chunk, radix, width);
			Ok(())
		},
	};
}

//		push_generic
/// Appends the digits of `chunk` in any base from 2 to 36.
fn push_generic(out: &mut String, chunk: u128, radix: u32, width: usize) {
	let mut digits = Vec::new();
	let mut value  = chunk;
	while value > 0 {
		let digit = (value % u128::from(radix)) as u32;
		digits.push(char::from_digit(digit, radix).unwrap_or('?'));
		value    /= u128::from(radix);
	}
	while digits.len() < width.max(1) {
		digits.push('0');
	}
	out.extend(digits.iter().rev());
}

//		split_sign
/// Splits an optional leading `+` or `-` from a string, returning whether it
/// was negative.
fn split_sign(s: &str) -> (bool, &str) {
	s.strip_prefix('-').map_or_else(
		|| (false, s.strip_prefix('+').unwrap_or(s)),
		|rest| (true, rest),
	)
}
