//! Conversions between arbitrary-width integers and the primitive integer
//! types, and between byte sequences and integers.

#![allow(
	clippy::arithmetic_side_effects,
	clippy::as_conversions,
	clippy::cast_lossless,
	clippy::cast_possible_wrap,
	clippy::cast_sign_loss,
	reason = "Primitive values are widened to 128 bits before range checks"
)]



//		Modules

#[cfg(test)]
#[path = "../tests/convert.rs"]
mod tests;



//		Packages

use super::ArbitraryInt;
use crate::{
	errors::ConversionError,
	storage::{BitAccess, BitAnalysis, BitCopy, BitWindow, ByteArray, ByteManipulation, StorageFactory},
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
	//		from_be_bytes
	/// Creates an integer from big-endian bytes.
	///
	/// The slice must be exactly [`BYTES`](Self::BYTES) long, and holds the
	/// value aligned to bit `0`, as produced by
	/// [`to_be_bytes()`](Self::to_be_bytes()).
	///
	/// # Errors
	///
	/// Returns an error if the slice has the wrong length, or if any padding
	/// bit above the value is set. For signed integers, padding that extends
	/// the sign bit is accepted.
	///
	pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, ConversionError> {
		let mut source = ByteArray::<BITS::Bytes>::from_slice(bytes)?;
		source.reverse_bytes();
		Self::from_aligned(&source)
	}

	//		from_le_bytes
	/// Creates an integer from little-endian bytes.
	///
	/// The slice must be exactly [`BYTES`](Self::BYTES) long, and holds the
	/// value aligned to bit `0`, as produced by
	/// [`to_le_bytes()`](Self::to_le_bytes()).
	///
	/// # Errors
	///
	/// Returns an error if the slice has the wrong length, or if any padding
	/// bit above the value is set. For signed integers, padding that extends
	/// the sign bit is accepted.
	///
	pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, ConversionError> {
		let source = ByteArray::<BITS::Bytes>::from_slice(bytes)?;
		Self::from_aligned(&source)
	}

	//		from_ne_bytes
	/// Creates an integer from bytes in the native byte order of the target.
	///
	/// # Errors
	///
	/// As for [`from_le_bytes()`](Self::from_le_bytes()).
	///
	pub fn from_ne_bytes(bytes: &[u8]) -> Result<Self, ConversionError> {
		if cfg!(target_endian = "big") {
			Self::from_be_bytes(bytes)
		} else {
			Self::from_le_bytes(bytes)
		}
	}

	//		from_aligned
	/// Moves a value held at bit `0` of a byte array into the window.
	fn from_aligned(source: &ByteArray<BITS::Bytes>) -> Result<Self, ConversionError> {
		let padding  = Self::STORAGE_BITS - Self::BITS;
		let extended = SIGNED && source.get_bit(Self::BITS - 1);
		if !source.test_bit_range(Self::BITS, padding, false)
			&& !(extended && source.test_bit_range(Self::BITS, padding, true))
		{
			return Err(ConversionError::ValueTooLarge);
		}
		let mut value = Self::zero();
		value.storage.copy_bits_from(source, 0, Self::OFFSET, Self::BITS);
		Ok(value)
	}

	//		try_from_i128
	/// Range-checked conversion from a signed primitive.
	fn try_from_i128(value: i128) -> Result<Self, ConversionError> {
		if let Ok(unsigned) = u128::try_from(value) {
			return Self::try_from_u128(unsigned);
		}
		if !SIGNED {
			return Err(ConversionError::ValueIsNegative);
		}
		if Self::BITS < 128 && value < -(1_i128 << (Self::BITS - 1)) {
			return Err(ConversionError::ValueTooSmall);
		}
		Ok(Self::from_i128_wrapping(value))
	}

	//		try_from_u128
	/// Range-checked conversion from an unsigned primitive.
	fn try_from_u128(value: u128) -> Result<Self, ConversionError> {
		let available = Self::BITS - usize::from(SIGNED);
		if available < 128 && value >> available != 0 {
			return Err(ConversionError::ValueTooLarge);
		}
		Ok(Self::from_u128_wrapping(value))
	}

	//		try_to_i128
	/// Range-checked conversion to an [`i128`].
	fn try_to_i128(&self) -> Result<i128, ConversionError> {
		if self.is_negative() {
			//	Everything from bit 127 upwards must be a copy of the sign
			if Self::BITS > 128 && self.leading_ones() < Self::BITS - 127 {
				return Err(ConversionError::ValueTooSmall);
			}
			Ok(self.to_i128_wrapping())
		} else if self.significant_bits() > 127 {
			Err(ConversionError::ValueTooLarge)
		} else {
			Ok(self.low_u128() as i128)
		}
	}

	//		try_to_u128
	/// Range-checked conversion to a [`u128`].
	fn try_to_u128(&self) -> Result<u128, ConversionError> {
		if self.is_negative() {
			Err(ConversionError::ValueIsNegative)
		} else if self.significant_bits() > 128 {
			Err(ConversionError::ValueTooLarge)
		} else {
			Ok(self.low_u128())
		}
	}
}



//		Macros

/// Implements range-checked conversions in both directions between
/// arbitrary-width integers and the signed primitive types.
macro_rules! impl_signed_conversions {
	($($t:ty),*) => { $(
		//󰭅		TryFrom: $t -> ArbitraryInt
		impl<BITS, const SIGNED: bool, OFFSET, F> TryFrom<$t> for ArbitraryInt<BITS, SIGNED, OFFSET, F>
		where
			BITS:   BitWindow<OFFSET>,
			OFFSET: Unsigned,
			F:      StorageFactory,
		{
			type Error = ConversionError;

			//		try_from
			fn try_from(value: $t) -> Result<Self, Self::Error> {
				Self::try_from_i128(value as i128)
			}
		}

		//󰭅		TryFrom: ArbitraryInt -> $t
		impl<BITS, const SIGNED: bool, OFFSET, F> TryFrom<ArbitraryInt<BITS, SIGNED, OFFSET, F>> for $t
		where
			BITS:   BitWindow<OFFSET>,
			OFFSET: Unsigned,
			F:      StorageFactory,
		{
			type Error = ConversionError;

			//		try_from
			fn try_from(value: ArbitraryInt<BITS, SIGNED, OFFSET, F>) -> Result<Self, Self::Error> {
				let wide = value.try_to_i128()?;
				<$t>::try_from(wide).map_err(|_| {
					if wide < 0 { ConversionError::ValueTooSmall } else { ConversionError::ValueTooLarge }
				})
			}
		}
	)* };
}

/// Implements range-checked conversions in both directions between
/// arbitrary-width integers and the unsigned primitive types.
macro_rules! impl_unsigned_conversions {
	($($t:ty),*) => { $(
		//󰭅		TryFrom: $t -> ArbitraryInt
		impl<BITS, const SIGNED: bool, OFFSET, F> TryFrom<$t> for ArbitraryInt<BITS, SIGNED, OFFSET, F>
		where
			BITS:   BitWindow<OFFSET>,
			OFFSET: Unsigned,
			F:      StorageFactory,
		{
			type Error = ConversionError;

			//		try_from
			fn try_from(value: $t) -> Result<Self, Self::Error> {
				Self::try_from_u128(value as u128)
			}
		}

		//󰭅		TryFrom: ArbitraryInt -> $t
		impl<BITS, const SIGNED: bool, OFFSET, F> TryFrom<ArbitraryInt<BITS, SIGNED, OFFSET, F>> for $t
		where
			BITS:   BitWindow<OFFSET>,
			OFFSET: Unsigned,
			F:      StorageFactory,
		{
			type Error = ConversionError;

			//		try_from
			fn try_from(value: ArbitraryInt<BITS, SIGNED, OFFSET, F>) -> Result<Self, Self::Error> {
				<$t>::try_from(value.try_to_u128()?).map_err(|_| ConversionError::ValueTooLarge)
			}
		}
	)* };
}

impl_signed_conversions!(i8, i16, i32, i64, i128, isize);
impl_unsigned_conversions!(u8, u16, u32, u64, u128, usize);
