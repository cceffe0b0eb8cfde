//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		ConversionError
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The storage passed in has bits set outside the integer's window.
	#[error("Bits set outside the value window")]
	BitsOutsideWindow,

	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,

	/// The incoming value is not a valid integer.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),

	/// The incoming byte sequence does not have the required length.
	#[error("Invalid length: expected {expected} bytes, got {actual}")]
	InvalidLength {
		/// The number of bytes required.
		expected: usize,

		/// The number of bytes supplied.
		actual:   usize,
	},

	/// The incoming value is not a valid integer.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidRadix(char, u32),

	/// The requested base is outside the supported range of 2 to 36.
	#[error("Unsupported base: {0}")]
	UnsupportedRadix(u32),

	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,

	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,

	/// The incoming value is too small (too far below zero) to be converted to
	/// the destination type.
	#[error("Value too small")]
	ValueTooSmall,
}
