//! Arbitrary-width integers living in a window of a storage buffer.

//	These lint checks are unnecessary in this module because:
//	  1. All window positions are derived from the BITS and OFFSET constants,
//	     which are tied to the storage size at compile time.
//	  2. The arithmetic on bit positions cannot overflow for any buffer that
//	     fits in memory.
//	  3. We want to emulate the Rust standard library behaviour, including
//	     panicking on division by zero.
#![allow(
	clippy::arithmetic_side_effects,
	clippy::as_conversions,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_sign_loss,
	clippy::indexing_slicing,
	reason = "Window positions are derived from compile-time constants"
)]



//		Modules

mod convert;
mod text;

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages

use crate::storage::{
	ArrayStorageFactory,
	BitAccess,
	BitAnalysis,
	BitCopy,
	BitManipulation,
	BitWindow,
	ByteAnalysis,
	ByteArray,
	ByteManipulation,
	StorageFactory,
};
use crate::errors::ConversionError;
use core::{
	cmp::Ordering,
	hash::{Hash, Hasher},
	iter::{Product, Sum},
	marker::PhantomData,
	ops::{Add, AddAssign, Bound, Div, DivAssign, Mul, MulAssign, Neg, RangeBounds, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
};
use generic_array::GenericArray;
use typenum::{Unsigned, U0};



//		Type aliases

/// The storage type backing an integer of `BITS` bits at bit `OFFSET`,
/// as produced by the factory `F`.
pub type WindowStorage<BITS, OFFSET, F> = <F as StorageFactory>::Storage<<BITS as BitWindow<OFFSET>>::Bytes>;

/// The byte array produced by the byte-order export functions.
pub type WindowBytes<BITS, OFFSET> = GenericArray<u8, <BITS as BitWindow<OFFSET>>::Bytes>;

/// Type alias for unsigned integers, for convenience.
pub type ArbitraryUnsignedInt<BITS, OFFSET = U0, F = ArrayStorageFactory> = ArbitraryInt<BITS, false, OFFSET, F>;

/// Type alias for signed integers, for convenience.
pub type ArbitrarySignedInt<BITS, OFFSET = U0, F = ArrayStorageFactory> = ArbitraryInt<BITS, true, OFFSET, F>;



//		Structs

//		ArbitraryInt
/// A fixed-width integer stored in a window of a byte buffer.
///
/// The integer occupies bits `OFFSET..OFFSET + BITS` of a buffer of exactly
/// `ceil((BITS + OFFSET) / 8)` bytes, created by the storage factory `F`.
/// It can be signed or unsigned, and any width from one bit upwards is
/// supported.
///
/// # Type parameters
///
/// * `BITS`   - The number of bits in the value, as a [`typenum`] unsigned
///              integer.
/// * `SIGNED` - Whether the integer is signed (`true`) or unsigned (`false`).
/// * `OFFSET` - The bit position of the least-significant bit of the value
///              within the buffer, as a [`typenum`] unsigned integer.
/// * `F`      - The [`StorageFactory`] providing the backing store.
///
/// In practice the aliases [`ArbitraryUnsignedInt`] and
/// [`ArbitrarySignedInt`] are more convenient, as they default the offset to
/// zero and the factory to [`ArrayStorageFactory`]. For instance, an 8-bit
/// unsigned field starting four bits into its buffer is
/// `ArbitraryUnsignedInt<U8, U4>`, and occupies two bytes.
///
/// # Window
///
/// Every bit of the buffer outside the window is always zero, for signed
/// values as well as unsigned. Values are sign-extended only when they leave
/// the window, e.g. when converted to a primitive integer.
///
/// For example, a 12-bit value at offset 2 holding `0xABC`:
///
/// ```text
/// Bit:     15 14 | 13 ........................... 2 | 1 0
/// Content:  0  0 | 1010 1011 1100                   | 0 0
/// ```
///
/// # Arithmetic
///
/// All arithmetic is performed on the window through the storage's offset
/// arithmetic, so it works identically for any backend. The operators follow
/// modular arithmetic:
///
///   1. Addition, subtraction, multiplication, and negation wrap silently at
///      the numeric bounds, in all build profiles.
///   2. Division and remainder by zero panic, as with standard integer types.
///   3. Explicit checked, wrapping, saturating, and overflowing arithmetic is
///      available through the respective methods, and the checked family is
///      the way to detect overflow.
///
/// Only integers of the same width, offset, sign, and backend can be used
/// together in arithmetic operations.
///
/// # Ownership
///
/// The integer owns its buffer outright. It is [`Clone`] but not [`Copy`],
/// so that backends are free to use heap or device memory, and every
/// operation takes its operands by reference and returns a new value. The
/// operators are implemented for both owned values and references.
///
pub struct ArbitraryInt<BITS, const SIGNED: bool, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	/// The backing buffer.
	storage: WindowStorage<BITS, OFFSET, F>,

	/// The window layout and factory, which live only at the type level.
	layout:  PhantomData<fn() -> (BITS, OFFSET, F)>,
}

//󰭅		ArbitraryInt
impl<BITS, const SIGNED: bool, OFFSET, F> ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		Public constants

	/// Number of bits in the value.
	pub const BITS:   usize = BITS::USIZE;

	/// Position of the least-significant bit of the value within the buffer.
	pub const OFFSET: usize = OFFSET::USIZE;

	/// Number of bytes in the buffer.
	pub const BYTES:  usize = <BITS::Bytes as Unsigned>::USIZE;

	//		Private constants

	/// One past the most-significant bit of the window.
	const END:          usize = Self::OFFSET + Self::BITS;

	/// Number of bits in the buffer.
	const STORAGE_BITS: usize = Self::BYTES * 8;

	/// Compile-time guard against zero-width integers.
	const NON_ZERO: () = assert!(BITS::USIZE > 0, "An integer must be at least one bit wide");

	//		Constructors

	//		from_storage
	/// Creates an integer from an existing buffer.
	///
	/// # Parameters
	///
	/// * `storage` - The buffer to adopt. Its window bits become the value.
	///
	/// # Errors
	///
	/// Returns an error if any bit outside the window is set.
	///
	pub fn from_storage(storage: WindowStorage<BITS, OFFSET, F>) -> Result<Self, ConversionError> {
		let () = Self::NON_ZERO;
		let value = Self::from_raw(storage);
		if value.is_normalized() {
			Ok(value)
		} else {
			Err(ConversionError::BitsOutsideWindow)
		}
	}

	//		from_i128_wrapping
	/// Creates an integer from an [`i128`], keeping only the low `BITS` bits.
	///
	/// Negative values are sign-extended first when the integer is wider than
	/// 128 bits.
	///
	#[must_use]
	pub fn from_i128_wrapping(value: i128) -> Self {
		let mut result = Self::from_u128_wrapping(value as u128);
		if value < 0 && Self::BITS > 128 {
			result.storage.fill_bits(Self::OFFSET + 128, Self::BITS - 128, true);
		}
		result
	}

	//		from_u128_wrapping
	/// Creates an integer from a [`u128`], keeping only the low `BITS` bits.
	#[must_use]
	pub fn from_u128_wrapping(value: u128) -> Self {
		let mut result = Self::zero();
		let count      = Self::BITS.min(128);
		let mut done   = 0;
		while done < count {
			let chunk = (count - done).min(64);
			result.storage.write_bits(Self::OFFSET + done, chunk, (value >> done) as u64);
			done     += chunk;
		}
		result
	}

	//		max_value
	/// The maximum value, with every window bit set (except the sign bit for
	/// signed integers).
	#[must_use]
	pub fn max_value() -> Self {
		let mut result = Self::zero();
		result.storage.fill_bits(Self::OFFSET, Self::BITS - usize::from(SIGNED), true);
		result
	}

	//		min_value
	/// The minimum value, which is zero for unsigned integers and has only the
	/// sign bit set for signed integers.
	#[must_use]
	pub fn min_value() -> Self {
		let mut result = Self::zero();
		if SIGNED {
			result.storage.set_bit(Self::END - 1, true);
		}
		result
	}

	//		one
	/// The value `1`.
	///
	/// For a one-bit signed integer this has the bit pattern of `-1`, as `1`
	/// is not representable.
	///
	#[must_use]
	pub fn one() -> Self {
		let mut result = Self::zero();
		result.storage.set_bit(Self::OFFSET, true);
		result
	}

	//		zero
	/// The value `0`.
	#[must_use]
	pub fn zero() -> Self {
		let () = Self::NON_ZERO;
		Self::from_raw(F::create())
	}

	//		Public methods

	//		bit
	/// Gets the value of a specific bit of the value.
	///
	/// Returns `false` if the position is out of range.
	///
	/// # Parameters
	///
	/// * `pos` - The position of the bit to get, where `0` is the
	///           least-significant bit of the value (not of the buffer).
	///
	#[must_use]
	pub fn bit(&self, pos: usize) -> bool {
		pos < Self::BITS && self.storage.get_bit(Self::OFFSET + pos)
	}

	//		bits
	/// Returns the bits in the specified range as a [`Vec`] of booleans.
	///
	/// Returns an empty [`Vec`] if the range is invalid or out of bounds.
	///
	/// # Parameters
	///
	/// * `range` - The range of bits to get, where `0` is the least-significant
	///             bit. The range is end-exclusive, like all Rust ranges.
	///
	#[must_use]
	pub fn bits<R: RangeBounds<usize>>(&self, range: R) -> Vec<bool> {
		let start = match range.start_bound() {
			Bound::Included(&n) => n,
			Bound::Excluded(&n) => n + 1,
			Bound::Unbounded    => 0,
		};
		let end   = match range.end_bound() {
			Bound::Included(&n) => n + 1,
			Bound::Excluded(&n) => n,
			Bound::Unbounded    => Self::BITS,
		};

		if start >= Self::BITS || end > Self::BITS || start >= end {
			return Vec::new();
		}
		(start..end).map(|pos| self.bit(pos)).collect()
	}

	//		checked_add
	/// Checked addition.
	///
	/// Computes `self + rhs`, returning [`None`] if overflow occurred.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
		let (result, overflow) = self.overflowing_add(rhs);
		(!overflow).then_some(result)
	}

	//		checked_div
	/// Checked division.
	///
	/// Computes `self / rhs`, returning [`None`] if `rhs` is zero or the result
	/// is too large to fit, which can only happen for the signed `MIN / -1`.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
		if rhs.is_zero() {
			return None;
		}
		let (quotient, _, overflow) = self.div_rem_truncating(rhs);
		(!overflow).then_some(quotient)
	}

	//		checked_div_euclid
	/// Checked Euclidean division.
	///
	/// Returns [`None`] if `rhs` is zero or the division overflows.
	///
	#[must_use]
	pub fn checked_div_euclid(&self, rhs: &Self) -> Option<Self> {
		if rhs.is_zero() {
			return None;
		}
		let (quotient, remainder, overflow) = self.div_rem_truncating(rhs);
		(!overflow).then(|| Self::euclid_adjust(quotient, remainder, rhs).0)
	}

	//		checked_ilog2
	/// Returns the base-2 logarithm of the value, rounded down, or [`None`] if
	/// the value is zero or negative.
	#[must_use]
	pub fn checked_ilog2(&self) -> Option<usize> {
		if self.is_zero() || self.is_negative() {
			return None;
		}
		Some(Self::BITS - 1 - self.leading_zeros())
	}

	//		checked_mul
	/// Checked multiplication.
	///
	/// Computes `self * rhs`, returning [`None`] if overflow occurred.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
		let (result, overflow) = self.overflowing_mul(rhs);
		(!overflow).then_some(result)
	}

	//		checked_neg
	/// Checked negation.
	///
	/// Returns [`None`] for the signed minimum, and for any non-zero unsigned
	/// value.
	///
	#[must_use]
	pub fn checked_neg(&self) -> Option<Self> {
		let (result, overflow) = self.overflowing_neg();
		(!overflow).then_some(result)
	}

	//		checked_pow
	/// Checked exponentiation.
	///
	/// Computes `self.pow(exp)`, returning [`None`] if overflow occurred.
	///
	/// # Parameters
	///
	/// * `exp` - The power to raise `self` to.
	///
	#[must_use]
	pub fn checked_pow(&self, exp: u32) -> Option<Self> {
		let (result, overflow) = self.overflowing_pow(exp);
		(!overflow).then_some(result)
	}

	//		checked_rem
	/// Checked remainder.
	///
	/// Computes `self % rhs`, returning [`None`] if `rhs` is zero or the
	/// division would overflow.
	///
	#[must_use]
	pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
		if rhs.is_zero() {
			return None;
		}
		let (_, remainder, overflow) = self.div_rem_truncating(rhs);
		(!overflow).then_some(remainder)
	}

	//		checked_rem_euclid
	/// Checked Euclidean remainder.
	///
	/// Returns [`None`] if `rhs` is zero or the division would overflow.
	///
	#[must_use]
	pub fn checked_rem_euclid(&self, rhs: &Self) -> Option<Self> {
		if rhs.is_zero() {
			return None;
		}
		let (quotient, remainder, overflow) = self.div_rem_truncating(rhs);
		(!overflow).then(|| Self::euclid_adjust(quotient, remainder, rhs).1)
	}

	//		checked_shl
	/// Checked shift left, returning [`None`] if `n` is not less than `BITS`.
	#[must_use]
	pub fn checked_shl(&self, n: u32) -> Option<Self> {
		let n = shift_amount(n);
		(n < Self::BITS).then(|| self.shl_window(n))
	}

	//		checked_shr
	/// Checked shift right, returning [`None`] if `n` is not less than `BITS`.
	#[must_use]
	pub fn checked_shr(&self, n: u32) -> Option<Self> {
		let n = shift_amount(n);
		(n < Self::BITS).then(|| self.shr_window(n))
	}

	//		checked_sub
	/// Checked subtraction.
	///
	/// Computes `self - rhs`, returning [`None`] if overflow occurred.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
		let (result, overflow) = self.overflowing_sub(rhs);
		(!overflow).then_some(result)
	}

	//		count_ones
	/// Counts the number of ones in the binary representation of the value.
	#[must_use]
	pub fn count_ones(&self) -> usize {
		//	Everything outside the window is zero
		self.storage.pop_count()
	}

	//		count_zeros
	/// Counts the number of zeroes in the binary representation of the value.
	#[must_use]
	pub fn count_zeros(&self) -> usize {
		Self::BITS - self.count_ones()
	}

	//		div_euclid
	/// Euclidean division.
	///
	/// The quotient is rounded so that the remainder is always non-negative.
	/// Overflow wraps, as with the operators.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn div_euclid(&self, rhs: &Self) -> Self {
		self.wrapping_div_euclid(rhs)
	}

	//		div_rem
	/// Computes the truncating quotient and remainder together.
	///
	/// The remainder has the same sign as `self`. Overflow wraps, as with the
	/// operators.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn div_rem(&self, rhs: &Self) -> (Self, Self) {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		let (quotient, remainder, _) = self.div_rem_truncating(rhs);
		(quotient, remainder)
	}

	//		ilog2
	/// Returns the base-2 logarithm of the value, rounded down.
	///
	/// # Panics
	///
	/// Panics if the value is zero or negative.
	///
	#[must_use]
	pub fn ilog2(&self) -> usize {
		assert!(!self.is_zero() && !self.is_negative(), "Argument of integer logarithm must be positive");
		Self::BITS - 1 - self.leading_zeros()
	}

	//		into_storage
	/// Consumes the integer, returning its buffer.
	#[must_use]
	pub fn into_storage(self) -> WindowStorage<BITS, OFFSET, F> {
		self.storage
	}

	//		is_negative
	/// Determines if the value is negative, which is never the case for
	/// unsigned integers.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		SIGNED && self.top_bit()
	}

	//		is_power_of_two
	/// Determines if the value is a positive power of two.
	#[must_use]
	pub fn is_power_of_two(&self) -> bool {
		!self.is_negative() && self.count_ones() == 1
	}

	//		is_zero
	/// Determines if the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.storage.is_all_zeros()
	}

	//		leading_ones
	/// Counts the number of leading ones in the binary representation of the
	/// value.
	#[must_use]
	pub fn leading_ones(&self) -> usize {
		self.complement().leading_zeros()
	}

	//		leading_zeros
	/// Counts the number of leading zeroes in the binary representation of the
	/// value.
	///
	/// If the value is zero, the result is the number of bits in the value.
	///
	#[must_use]
	pub fn leading_zeros(&self) -> usize {
		//	The buffer bits above the window are always zero, so discount them
		(self.storage.count_leading_zeros() - (Self::STORAGE_BITS - Self::END)).min(Self::BITS)
	}

	//		overflowing_add
	/// Overflowing addition.
	///
	/// Computes `self + rhs`, returning a tuple of the result and a boolean
	/// indicating whether an arithmetic overflow would occur.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
		let mut result = self.clone();
		let carry      = result.storage.offset_add_from_with_carry(&rhs.storage, Self::OFFSET, Self::BITS, Self::OFFSET, false);
		let overflow   = if SIGNED {
			//	Overflow if both operands have the same sign and the result
			//	does not
			let sign = self.top_bit();
			sign == rhs.top_bit() && sign != result.top_bit()
		} else {
			carry
		};
		(result, overflow)
	}

	//		overflowing_div
	/// Overflowing division.
	///
	/// Computes `self / rhs`, returning a tuple of the result and a boolean
	/// indicating whether an arithmetic overflow would occur. Only the signed
	/// `MIN / -1` overflows, in which case `MIN` is returned.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn overflowing_div(&self, rhs: &Self) -> (Self, bool) {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		let (quotient, _, overflow) = self.div_rem_truncating(rhs);
		(quotient, overflow)
	}

	//		overflowing_mul
	/// Overflowing multiplication.
	///
	/// Computes `self * rhs`, returning a tuple of the result and a boolean
	/// indicating whether an arithmetic overflow would occur.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn overflowing_mul(&self, rhs: &Self) -> (Self, bool) {
		if !SIGNED {
			return self.mul_raw(|pos| rhs.storage.get_bit(Self::OFFSET + pos), rhs.significant_bits());
		}

		//	Multiply the magnitudes, then apply the sign. The low bits of the
		//	product are the same either way, so only the overflow check needs
		//	the magnitudes.
		let negative              = self.is_negative() != rhs.is_negative();
		let multiplier            = rhs.magnitude();
		let (magnitude, overflow) = self.magnitude().mul_raw(
			|pos| multiplier.storage.get_bit(Self::OFFSET + pos),
			multiplier.significant_bits(),
		);
		//	A negative product may reach MIN, a positive one only MAX
		let fits    = !magnitude.top_bit() || (negative && magnitude == Self::min_value());
		let product = if negative { magnitude.wrapping_neg() } else { magnitude };
		(product, overflow || !fits)
	}

	//		overflowing_neg
	/// Overflowing negation.
	///
	/// Returns the wrapped negation and whether it overflowed, which happens
	/// for the signed minimum and for any non-zero unsigned value.
	///
	#[must_use]
	pub fn overflowing_neg(&self) -> (Self, bool) {
		let overflow = if SIGNED {
			*self == Self::min_value()
		} else {
			!self.is_zero()
		};
		(self.wrapping_neg(), overflow)
	}

	//		overflowing_pow
	/// Overflowing exponentiation.
	///
	/// Computes `self.pow(exp)` by repeated squaring, returning a tuple of the
	/// wrapped result and whether the true power does not fit.
	///
	/// For a one-bit signed integer `1` is not representable, so `pow(0)`
	/// returns the wrapped pattern of `-1` with the overflow flag set.
	///
	/// # Parameters
	///
	/// * `exp` - The power to raise `self` to.
	///
	#[must_use]
	pub fn overflowing_pow(&self, exp: u32) -> (Self, bool) {
		if exp == 0 {
			return (Self::one(), SIGNED && Self::BITS == 1);
		}
		if !SIGNED {
			return self.pow_raw(exp);
		}

		//	Raise the magnitude, then apply the sign, as for multiplication
		let negative              = self.is_negative() && exp & 1 == 1;
		let (magnitude, overflow) = self.magnitude().pow_raw(exp);
		let fits                  = !magnitude.top_bit() || (negative && magnitude == Self::min_value());
		let result                = if negative { magnitude.wrapping_neg() } else { magnitude };
		(result, overflow || !fits)
	}

	//		overflowing_rem
	/// Overflowing remainder.
	///
	/// Returns the remainder and whether the division overflowed. For the
	/// signed `MIN % -1` the remainder is zero and the flag is set.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn overflowing_rem(&self, rhs: &Self) -> (Self, bool) {
		assert!(!rhs.is_zero(), "Attempt to calculate the remainder with a divisor of zero");
		let (_, remainder, overflow) = self.div_rem_truncating(rhs);
		(remainder, overflow)
	}

	//		overflowing_sub
	/// Overflowing subtraction.
	///
	/// Computes `self - rhs`, returning a tuple of the result and a boolean
	/// indicating whether an arithmetic overflow would occur.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
		let mut result = self.clone();
		let borrow     = result.storage.offset_sub_from_with_borrow(&rhs.storage, Self::OFFSET, Self::BITS, Self::OFFSET, false);
		let overflow   = if SIGNED {
			//	Overflow if the operands have different signs and the result
			//	takes the sign of the subtrahend
			let sign = self.top_bit();
			sign != rhs.top_bit() && sign != result.top_bit()
		} else {
			borrow
		};
		(result, overflow)
	}

	//		pow
	/// Raises the value to the power of `exp`, wrapping on overflow.
	#[must_use]
	pub fn pow(&self, exp: u32) -> Self {
		self.wrapping_pow(exp)
	}

	//		rem_euclid
	/// Euclidean remainder, which is always non-negative.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn rem_euclid(&self, rhs: &Self) -> Self {
		self.wrapping_rem_euclid(rhs)
	}

	//		reverse_bits
	/// Reverses the order of the bits in the value.
	///
	/// The least-significant bit becomes the most-significant bit, and so on.
	/// Only the window is reversed.
	///
	#[must_use]
	pub fn reverse_bits(&self) -> Self {
		let mut result = self.clone();
		result.storage.reverse_bits();

		//	Reversing the whole buffer moves the window to the mirrored
		//	position, so shift it back into place
		let mirrored = Self::STORAGE_BITS - Self::END;
		if mirrored >= Self::OFFSET {
			result.storage.shift_right(mirrored - Self::OFFSET);
		} else {
			result.storage.shift_left(Self::OFFSET - mirrored);
		}
		result.normalize();
		result
	}

	//		rotate_left
	/// Rotates the bits of the value to the left.
	///
	/// The `n` most-significant bits are moved to the `n` least-significant
	/// bits, and the rest are moved to the left. Only the window rotates.
	///
	/// # Parameters
	///
	/// * `n` - The number of bits to rotate by.
	///
	#[must_use]
	pub fn rotate_left(&self, n: u32) -> Self {
		let n = shift_amount(n) % Self::BITS;
		if n == 0 {
			return self.clone();
		}
		let mut result = self.shl_window(n);
		let wrapped    = self.shr_logical(Self::BITS - n);
		result.storage.bitwise_or(&wrapped.storage, Self::OFFSET, Self::BITS);
		result
	}

	//		rotate_right
	/// Rotates the bits of the value to the right.
	///
	/// The `n` least-significant bits are moved to the `n` most-significant
	/// bits, and the rest are moved to the right. Only the window rotates.
	///
	/// # Parameters
	///
	/// * `n` - The number of bits to rotate by.
	///
	#[must_use]
	pub fn rotate_right(&self, n: u32) -> Self {
		let n = shift_amount(n) % Self::BITS;
		if n == 0 {
			return self.clone();
		}
		let mut result = self.shr_logical(n);
		let wrapped    = self.shl_window(Self::BITS - n);
		result.storage.bitwise_or(&wrapped.storage, Self::OFFSET, Self::BITS);
		result
	}

	//		saturating_add
	/// Saturating addition.
	///
	/// Computes `self + rhs`, saturating at the numeric bounds instead of
	/// overflowing.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub fn saturating_add(&self, rhs: &Self) -> Self {
		match self.overflowing_add(rhs) {
			(result, false)                         => result,
			(_, true) if SIGNED && self.is_negative() => Self::min_value(),
			(_, true)                               => Self::max_value(),
		}
	}

	//		saturating_div
	/// Saturating division.
	///
	/// Only the signed `MIN / -1` can overflow, and gives `MAX`.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn saturating_div(&self, rhs: &Self) -> Self {
		match self.overflowing_div(rhs) {
			(result, false) => result,
			(_, true)       => Self::max_value(),
		}
	}

	//		saturating_mul
	/// Saturating multiplication.
	///
	/// Computes `self * rhs`, saturating at the numeric bounds instead of
	/// overflowing.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn saturating_mul(&self, rhs: &Self) -> Self {
		match self.overflowing_mul(rhs) {
			(result, false)                                          => result,
			(_, true) if self.is_negative() != rhs.is_negative() => Self::min_value(),
			(_, true)                                                => Self::max_value(),
		}
	}

	//		saturating_pow
	/// Saturating exponentiation.
	///
	/// Computes `self.pow(exp)`, saturating at the numeric bounds instead of
	/// overflowing.
	///
	#[must_use]
	pub fn saturating_pow(&self, exp: u32) -> Self {
		match self.overflowing_pow(exp) {
			(result, false)                                => result,
			(_, true) if self.is_negative() && exp % 2 == 1 => Self::min_value(),
			(_, true)                                      => Self::max_value(),
		}
	}

	//		saturating_sub
	/// Saturating subtraction.
	///
	/// Computes `self - rhs`, saturating at the numeric bounds instead of
	/// overflowing.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub fn saturating_sub(&self, rhs: &Self) -> Self {
		match self.overflowing_sub(rhs) {
			(result, false)                           => result,
			(_, true) if !SIGNED || self.is_negative() => Self::min_value(),
			(_, true)                                 => Self::max_value(),
		}
	}

	//		set_bit
	/// Sets the value of a specific bit of the value.
	///
	/// Returns `false`, and does nothing, if the position is out of range.
	///
	/// # Parameters
	///
	/// * `pos`   - The position of the bit to set, where `0` is the
	///             least-significant bit of the value.
	/// * `value` - The value to set the bit to.
	///
	pub fn set_bit(&mut self, pos: usize, value: bool) -> bool {
		if pos >= Self::BITS {
			return false;
		}
		self.storage.set_bit(Self::OFFSET + pos, value);
		true
	}

	//		storage
	/// Returns a reference to the backing buffer.
	#[must_use]
	pub const fn storage(&self) -> &WindowStorage<BITS, OFFSET, F> {
		&self.storage
	}

	//		to_be_bytes
	/// Returns the value as big-endian bytes.
	///
	/// The value is moved down to bit `0` first, so the result does not depend
	/// on the offset. The most-significant byte comes first, preceded by zero
	/// padding if the buffer has more bytes than the value needs.
	///
	#[must_use]
	pub fn to_be_bytes(&self) -> WindowBytes<BITS, OFFSET> {
		let mut aligned = self.aligned();
		aligned.reverse_bytes();
		aligned.into_array()
	}

	//		to_i128_wrapping
	/// Returns the value as an [`i128`], sign-extending signed values and
	/// keeping only the low 128 bits of wider ones.
	#[must_use]
	pub fn to_i128_wrapping(&self) -> i128 {
		self.to_u128_wrapping() as i128
	}

	//		to_le_bytes
	/// Returns the value as little-endian bytes.
	///
	/// The value is moved down to bit `0` first, so the result does not depend
	/// on the offset.
	///
	#[must_use]
	pub fn to_le_bytes(&self) -> WindowBytes<BITS, OFFSET> {
		self.aligned().into_array()
	}

	//		to_ne_bytes
	/// Returns the value as bytes in the native byte order of the target.
	#[must_use]
	pub fn to_ne_bytes(&self) -> WindowBytes<BITS, OFFSET> {
		if cfg!(target_endian = "big") {
			self.to_be_bytes()
		} else {
			self.to_le_bytes()
		}
	}

	//		to_u128_wrapping
	/// Returns the value as a [`u128`], keeping only the low 128 bits.
	///
	/// Negative signed values are sign-extended first, as with an `as` cast
	/// from a primitive signed integer.
	///
	#[must_use]
	pub fn to_u128_wrapping(&self) -> u128 {
		let mut value = self.low_u128();
		if self.is_negative() && Self::BITS < 128 {
			value |= u128::MAX << Self::BITS;
		}
		value
	}

	//		trailing_ones
	/// Counts the number of trailing ones in the binary representation of the
	/// value.
	#[must_use]
	pub fn trailing_ones(&self) -> usize {
		self.complement().trailing_zeros()
	}

	//		trailing_zeros
	/// Counts the number of trailing zeroes in the binary representation of the
	/// value.
	///
	/// If the value is zero, the result is the number of bits in the value.
	///
	#[must_use]
	pub fn trailing_zeros(&self) -> usize {
		//	The buffer bits below the window are always zero, so discount them
		(self.storage.count_trailing_zeros() - Self::OFFSET).min(Self::BITS)
	}

	//		wrapping_add
	/// Wrapping addition.
	///
	/// Computes `self + rhs`, wrapping around at the numeric bounds instead of
	/// overflowing.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub fn wrapping_add(&self, rhs: &Self) -> Self {
		self.overflowing_add(rhs).0
	}

	//		wrapping_div
	/// Wrapping division.
	///
	/// Computes `self / rhs`. The signed `MIN / -1` wraps to `MIN`.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn wrapping_div(&self, rhs: &Self) -> Self {
		self.overflowing_div(rhs).0
	}

	//		wrapping_div_euclid
	/// Wrapping Euclidean division.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn wrapping_div_euclid(&self, rhs: &Self) -> Self {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		let (quotient, remainder, _) = self.div_rem_truncating(rhs);
		Self::euclid_adjust(quotient, remainder, rhs).0
	}

	//		wrapping_mul
	/// Wrapping multiplication.
	///
	/// Computes `self * rhs`, wrapping around at the numeric bounds instead of
	/// overflowing.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn wrapping_mul(&self, rhs: &Self) -> Self {
		self.overflowing_mul(rhs).0
	}

	//		wrapping_neg
	/// Wrapping negation, computed as the complement of the window plus one.
	#[must_use]
	pub fn wrapping_neg(&self) -> Self {
		let mut result = self.complement();
		result.storage.offset_add(Self::OFFSET, Self::BITS, 1);
		result
	}

	//		wrapping_pow
	/// Wrapping exponentiation.
	#[must_use]
	pub fn wrapping_pow(&self, exp: u32) -> Self {
		self.overflowing_pow(exp).0
	}

	//		wrapping_rem
	/// Wrapping remainder. The signed `MIN % -1` gives zero.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn wrapping_rem(&self, rhs: &Self) -> Self {
		self.overflowing_rem(rhs).0
	}

	//		wrapping_rem_euclid
	/// Wrapping Euclidean remainder.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn wrapping_rem_euclid(&self, rhs: &Self) -> Self {
		assert!(!rhs.is_zero(), "Attempt to calculate the remainder with a divisor of zero");
		let (quotient, remainder, _) = self.div_rem_truncating(rhs);
		Self::euclid_adjust(quotient, remainder, rhs).1
	}

	//		wrapping_shl
	/// Shift left by `n % BITS` bits.
	#[must_use]
	pub fn wrapping_shl(&self, n: u32) -> Self {
		self.shl_window(shift_amount(n) % Self::BITS)
	}

	//		wrapping_shr
	/// Shift right by `n % BITS` bits. The shift is arithmetic for signed
	/// integers.
	#[must_use]
	pub fn wrapping_shr(&self, n: u32) -> Self {
		self.shr_window(shift_amount(n) % Self::BITS)
	}

	//		wrapping_sub
	/// Wrapping subtraction.
	///
	/// Computes `self - rhs`, wrapping around at the numeric bounds instead of
	/// overflowing.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub fn wrapping_sub(&self, rhs: &Self) -> Self {
		self.overflowing_sub(rhs).0
	}

	//		Private methods

	//		aligned
	/// Copies the window down to bit `0` of a fresh byte array.
	fn aligned(&self) -> ByteArray<BITS::Bytes> {
		let mut aligned = ByteArray::new();
		aligned.copy_bits_from(&self.storage, Self::OFFSET, 0, Self::BITS);
		aligned
	}

	//		bitwise
	/// Applies a ranged boolean operation of the storage to the window.
	fn bitwise(&self, rhs: &Self, op: fn(&mut WindowStorage<BITS, OFFSET, F>, &WindowStorage<BITS, OFFSET, F>, usize, usize)) -> Self {
		let mut result = self.clone();
		op(&mut result.storage, &rhs.storage, Self::OFFSET, Self::BITS);
		result
	}

	//		complement
	/// Inverts every bit of the window.
	fn complement(&self) -> Self {
		let mut result = self.clone();
		result.storage.bitwise_not(Self::OFFSET, Self::BITS);
		result
	}

	//		div_rem_raw
	/// Binary long division of the window bit patterns, read as unsigned.
	///
	/// The divisor must be non-zero.
	///
	fn div_rem_raw(&self, divisor: &Self) -> (Self, Self) {
		let mut quotient  = Self::zero();
		let mut remainder = Self::zero();
		for pos in (0..self.significant_bits()).rev() {
			//	If the remainder's top bit is about to be shifted out, the true
			//	remainder exceeds the divisor, and the subtraction below wraps
			//	back to the correct value
			let overflowed = remainder.top_bit();
			remainder      = remainder.shl_window(1);
			if self.storage.get_bit(Self::OFFSET + pos) {
				remainder.storage.set_bit(Self::OFFSET, true);
			}
			if overflowed || remainder.cmp_raw(divisor) != Ordering::Less {
				remainder.storage.offset_sub_from(&divisor.storage, Self::OFFSET, Self::BITS, Self::OFFSET);
				quotient.storage.set_bit(Self::OFFSET + pos, true);
			}
		}
		(quotient, remainder)
	}

	//		div_rem_truncating
	/// Truncating division, returning the quotient, the remainder, and whether
	/// the division overflowed.
	///
	/// The divisor must be non-zero.
	///
	fn div_rem_truncating(&self, rhs: &Self) -> (Self, Self, bool) {
		if !SIGNED {
			let (quotient, remainder) = self.div_rem_raw(rhs);
			return (quotient, remainder, false);
		}

		let (quotient, remainder) = self.magnitude().div_rem_raw(&rhs.magnitude());
		let quotient  = if self.is_negative() != rhs.is_negative() { quotient.wrapping_neg() } else { quotient };
		let remainder = if self.is_negative() { remainder.wrapping_neg() } else { remainder };
		let overflow  = *self == Self::min_value() && rhs.complement().is_zero();
		(quotient, remainder, overflow)
	}

	//		euclid_adjust
	/// Moves a truncating quotient and remainder to their Euclidean
	/// counterparts.
	fn euclid_adjust(quotient: Self, remainder: Self, rhs: &Self) -> (Self, Self) {
		if !remainder.is_negative() {
			return (quotient, remainder);
		}
		let one = Self::one();
		if rhs.is_negative() {
			(quotient.wrapping_add(&one), remainder.wrapping_sub(rhs))
		} else {
			(quotient.wrapping_sub(&one), remainder.wrapping_add(rhs))
		}
	}

	//		from_raw
	/// Wraps a buffer without checking it.
	const fn from_raw(storage: WindowStorage<BITS, OFFSET, F>) -> Self {
		Self { storage, layout: PhantomData }
	}

	//		is_normalized
	/// Determines if every bit outside the window is clear.
	fn is_normalized(&self) -> bool {
		self.storage.test_bit_range(0, Self::OFFSET, false)
			&& self.storage.test_bit_range(Self::END, Self::STORAGE_BITS - Self::END, false)
	}

	//		low_u128
	/// Reads the low 128 bits of the window, without sign extension.
	fn low_u128(&self) -> u128 {
		let count     = Self::BITS.min(128);
		let mut value = u128::from(self.storage.read_bits(Self::OFFSET, count.min(64)));
		if count > 64 {
			value |= u128::from(self.storage.read_bits(Self::OFFSET + 64, count - 64)) << 64_u32;
		}
		value
	}

	//		magnitude
	/// The absolute value as an unsigned bit pattern. The signed minimum maps
	/// to itself, which read as unsigned is its true magnitude.
	fn magnitude(&self) -> Self {
		if self.is_negative() {
			self.wrapping_neg()
		} else {
			self.clone()
		}
	}

	//		mul_raw
	/// Shift-and-add multiplication of the window bit pattern, read as
	/// unsigned, by a multiplier given bit by bit.
	///
	/// Returns the low `BITS` bits of the product, and whether any higher bit
	/// would have been set.
	///
	/// # Parameters
	///
	/// * `multiplier_bit`  - Gets bit `n` of the multiplier.
	/// * `multiplier_bits` - The number of significant bits in the multiplier.
	///
	fn mul_raw(&self, multiplier_bit: impl Fn(usize) -> bool, multiplier_bits: usize) -> (Self, bool) {
		let mut product  = Self::zero();
		let mut overflow = false;
		let significant  = self.significant_bits();
		if significant == 0 {
			return (product, false);
		}

		let mut addend     = self.clone();
		let mut shifted_by = 0;
		for pos in 0..multiplier_bits {
			if !multiplier_bit(pos) {
				continue;
			}
			//	The partial product self << pos does not fit
			if significant + pos > Self::BITS {
				overflow = true;
			}
			addend      = addend.shl_window(pos - shifted_by);
			shifted_by  = pos;
			overflow   |= product.storage.offset_add_from_with_carry(&addend.storage, Self::OFFSET, Self::BITS, Self::OFFSET, false);
		}
		(product, overflow)
	}

	//		pow_raw
	/// Square-and-multiply exponentiation of the window bit pattern, read as
	/// unsigned.
	///
	/// Returns the low `BITS` bits of the power, and whether any higher bit
	/// would have been set. The exponent must be non-zero.
	///
	fn pow_raw(&self, exp: u32) -> (Self, bool) {
		//	The accumulator starts empty rather than at one, so that the first
		//	set exponent bit takes the base as it is
		let mut exp               = exp;
		let mut base              = self.clone();
		let mut acc: Option<Self> = None;
		let mut overflow          = false;
		loop {
			if exp & 1 == 1 {
				acc = Some(match acc {
					None          => base.clone(),
					Some(partial) => {
						let (product, o) = partial.mul_raw(|pos| base.storage.get_bit(Self::OFFSET + pos), base.significant_bits());
						overflow        |= o;
						product
					},
				});
			}
			exp >>= 1;
			if exp == 0 {
				break;
			}
			//	A square that does not fit means the power does not either
			let (square, o) = base.mul_raw(|pos| base.storage.get_bit(Self::OFFSET + pos), base.significant_bits());
			base            = square;
			overflow       |= o;
		}
		(acc.unwrap_or(base), overflow)
	}

	//		normalize
	/// Clears every bit outside the window.
	fn normalize(&mut self) {
		self.storage.fill_bits(0, Self::OFFSET, false);
		self.storage.fill_bits(Self::END, Self::STORAGE_BITS - Self::END, false);
	}

	//		cmp_raw
	/// Compares the window bit patterns, read as unsigned.
	fn cmp_raw(&self, other: &Self) -> Ordering {
		let mut end = Self::BITS;
		while end > 0 {
			let count = end.min(64);
			let start = end - count;
			let ours  = self.storage.read_bits(Self::OFFSET + start, count);
			let theirs = other.storage.read_bits(Self::OFFSET + start, count);
			match ours.cmp(&theirs) {
				Ordering::Equal => {},
				unequal         => return unequal,
			}
			end = start;
		}
		Ordering::Equal
	}

	//		shl_window
	/// Logical shift left within the window. Shifting by `BITS` or more gives
	/// zero.
	fn shl_window(&self, n: usize) -> Self {
		if n >= Self::BITS {
			return Self::zero();
		}
		let mut result = self.clone();
		result.storage.shift_left(n);
		result.storage.fill_bits(Self::END, Self::STORAGE_BITS - Self::END, false);
		result
	}

	//		shr_logical
	/// Logical shift right within the window. Shifting by `BITS` or more gives
	/// zero.
	fn shr_logical(&self, n: usize) -> Self {
		if n >= Self::BITS {
			return Self::zero();
		}
		let mut result = self.clone();
		result.storage.shift_right(n);
		result.storage.fill_bits(0, Self::OFFSET, false);
		result
	}

	//		shr_window
	/// Shift right within the window, arithmetic for signed integers and
	/// logical for unsigned ones.
	fn shr_window(&self, n: usize) -> Self {
		let n          = n.min(Self::BITS);
		let mut result = self.shr_logical(n);
		if self.is_negative() {
			result.storage.fill_bits(Self::END - n, n, true);
		}
		result
	}

	//		significant_bits
	/// The number of bits needed to hold the window bit pattern, read as
	/// unsigned.
	fn significant_bits(&self) -> usize {
		Self::BITS - self.leading_zeros()
	}

	//		top_bit
	/// The most-significant bit of the window, which is the sign bit for
	/// signed integers.
	fn top_bit(&self) -> bool {
		self.storage.get_bit(Self::END - 1)
	}
}

//󰭅		ArbitraryInt: signed
impl<BITS, OFFSET, F> ArbitraryInt<BITS, true, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		abs
	/// Computes the absolute value.
	///
	/// The absolute value of `MIN` cannot be represented, and this returns
	/// `MIN` itself in that case. Use [`checked_abs()`](Self::checked_abs()),
	/// [`saturating_abs()`](Self::saturating_abs()), or
	/// [`unsigned_abs()`](Self::unsigned_abs()) to handle it explicitly.
	///
	#[must_use]
	pub fn abs(&self) -> Self {
		self.wrapping_abs()
	}

	//		abs_diff
	/// Computes the absolute difference between `self` and `rhs`, which always
	/// fits in the unsigned counterpart.
	#[must_use]
	pub fn abs_diff(&self, rhs: &Self) -> ArbitraryInt<BITS, false, OFFSET, F> {
		if self < rhs {
			rhs.wrapping_sub(self).cast_unsigned()
		} else {
			self.wrapping_sub(rhs).cast_unsigned()
		}
	}

	//		cast_unsigned
	/// Reinterprets the bit pattern as the unsigned counterpart, without
	/// rescaling.
	#[must_use]
	pub fn cast_unsigned(&self) -> ArbitraryInt<BITS, false, OFFSET, F> {
		ArbitraryInt::from_raw(self.storage.clone())
	}

	//		checked_abs
	/// Checked absolute value, returning [`None`] for `MIN`.
	#[must_use]
	pub fn checked_abs(&self) -> Option<Self> {
		let (result, overflow) = self.overflowing_abs();
		(!overflow).then_some(result)
	}

	//		is_positive
	/// Determines if the value is strictly positive.
	#[must_use]
	pub fn is_positive(&self) -> bool {
		!self.is_negative() && !self.is_zero()
	}

	//		overflowing_abs
	/// Overflowing absolute value. For `MIN` this returns `MIN` and sets the
	/// flag.
	#[must_use]
	pub fn overflowing_abs(&self) -> (Self, bool) {
		if self.is_negative() {
			self.overflowing_neg()
		} else {
			(self.clone(), false)
		}
	}

	//		saturating_abs
	/// Saturating absolute value, giving `MAX` for `MIN`.
	#[must_use]
	pub fn saturating_abs(&self) -> Self {
		match self.overflowing_abs() {
			(result, false) => result,
			(_, true)       => Self::max_value(),
		}
	}

	//		saturating_neg
	/// Saturating negation, giving `MAX` for `MIN`.
	#[must_use]
	pub fn saturating_neg(&self) -> Self {
		match self.overflowing_neg() {
			(result, false) => result,
			(_, true)       => Self::max_value(),
		}
	}

	//		signum
	/// Returns `0` for zero, `1` for positive values, and `-1` for negative
	/// values.
	#[must_use]
	pub fn signum(&self) -> Self {
		if self.is_negative() {
			Self::zero().complement()
		} else if self.is_zero() {
			Self::zero()
		} else {
			Self::one()
		}
	}

	//		unsigned_abs
	/// Computes the absolute value as the unsigned counterpart, which is exact
	/// for every value including `MIN`.
	#[must_use]
	pub fn unsigned_abs(&self) -> ArbitraryInt<BITS, false, OFFSET, F> {
		self.magnitude().cast_unsigned()
	}

	//		wrapping_abs
	/// Wrapping absolute value, where `MIN` maps to itself.
	#[must_use]
	pub fn wrapping_abs(&self) -> Self {
		self.magnitude()
	}
}

//󰭅		ArbitraryInt: unsigned
impl<BITS, OFFSET, F> ArbitraryInt<BITS, false, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		abs_diff
	/// Computes the absolute difference between `self` and `rhs`.
	#[must_use]
	pub fn abs_diff(&self, rhs: &Self) -> Self {
		if self < rhs {
			rhs.wrapping_sub(self)
		} else {
			self.wrapping_sub(rhs)
		}
	}

	//		cast_signed
	/// Reinterprets the bit pattern as the signed counterpart, without
	/// rescaling.
	#[must_use]
	pub fn cast_signed(&self) -> ArbitraryInt<BITS, true, OFFSET, F> {
		ArbitraryInt::from_raw(self.storage.clone())
	}

	//		checked_next_power_of_two
	/// Returns the smallest power of two greater than or equal to the value,
	/// or [`None`] if it does not fit.
	#[must_use]
	pub fn checked_next_power_of_two(&self) -> Option<Self> {
		if self.is_zero() {
			return Some(Self::one());
		}
		//	The bits needed for (self - 1) give the exponent
		let exponent = self.wrapping_sub(&Self::one()).significant_bits();
		(exponent < Self::BITS).then(|| Self::one().shl_window(exponent))
	}

	//		checked_previous_power_of_two
	/// Returns the largest power of two less than or equal to the value, or
	/// [`None`] if the value is zero.
	#[must_use]
	pub fn checked_previous_power_of_two(&self) -> Option<Self> {
		self.checked_ilog2().map(|exponent| Self::one().shl_window(exponent))
	}

	//		next_power_of_two
	/// Returns the smallest power of two greater than or equal to the value.
	///
	/// If the result does not fit, it wraps to zero.
	///
	#[must_use]
	pub fn next_power_of_two(&self) -> Self {
		self.checked_next_power_of_two().unwrap_or_else(Self::zero)
	}

	//		previous_power_of_two
	/// Returns the largest power of two less than or equal to the value, or
	/// zero if the value is zero.
	#[must_use]
	pub fn previous_power_of_two(&self) -> Self {
		self.checked_previous_power_of_two().unwrap_or_else(Self::zero)
	}
}

//󰭅		Clone
impl<BITS, const SIGNED: bool, OFFSET, F> Clone for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		clone
	fn clone(&self) -> Self {
		Self::from_raw(self.storage.clone())
	}
}

//󰭅		Default
impl<BITS, const SIGNED: bool, OFFSET, F> Default for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		default
	fn default() -> Self {
		Self::zero()
	}
}

//󰭅		Eq
impl<BITS, const SIGNED: bool, OFFSET, F> Eq for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{}

//󰭅		Hash
impl<BITS, const SIGNED: bool, OFFSET, F> Hash for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		hash
	fn hash<H: Hasher>(&self, state: &mut H) {
		for i in 0..Self::BYTES {
			state.write_u8(self.storage[i]);
		}
	}
}

//󰭅		Ord
impl<BITS, const SIGNED: bool, OFFSET, F> Ord for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		cmp
	fn cmp(&self, other: &Self) -> Ordering {
		//	Two's complement values of the same sign order like their bit
		//	patterns
		match (self.is_negative(), other.is_negative()) {
			(true, false) => Ordering::Less,
			(false, true) => Ordering::Greater,
			_             => self.cmp_raw(other),
		}
	}
}

//󰭅		PartialEq
impl<BITS, const SIGNED: bool, OFFSET, F> PartialEq for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		eq
	fn eq(&self, other: &Self) -> bool {
		self.storage.equal(&other.storage)
	}
}

//󰭅		PartialOrd
impl<BITS, const SIGNED: bool, OFFSET, F> PartialOrd for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		partial_cmp
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Product
/// Multiplies from the first element onwards. An empty product is
/// [`one()`](ArbitraryInt::one()), which for a one-bit signed integer is the
/// pattern of `-1`.
impl<BITS, const SIGNED: bool, OFFSET, F> Product for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.reduce(|acc, x| acc.wrapping_mul(&x)).unwrap_or_else(Self::one)
	}
}

//󰭅		Product: &
impl<'a, BITS, const SIGNED: bool, OFFSET, F> Product<&'a ArbitraryInt<BITS, SIGNED, OFFSET, F>> for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(None, |acc: Option<Self>, x| Some(match acc {
			None          => x.clone(),
			Some(partial) => partial.wrapping_mul(x),
		})).unwrap_or_else(Self::one)
	}
}

//󰭅		Sum
impl<BITS, const SIGNED: bool, OFFSET, F> Sum for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::zero(), |acc, x| acc.wrapping_add(&x))
	}
}

//󰭅		Sum: &
impl<'a, BITS, const SIGNED: bool, OFFSET, F> Sum<&'a ArbitraryInt<BITS, SIGNED, OFFSET, F>> for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::zero(), |acc, x| acc.wrapping_add(x))
	}
}



//		Operators

/// Implements a binary operator for all combinations of values and
/// references, plus the assigning form, in terms of an inherent method.
macro_rules! impl_binary_op {
	($trait:ident, $method:ident, $trait_assign:ident, $method_assign:ident, $via:ident) => {
		//󰭅		$trait
		impl<BITS, const SIGNED: bool, OFFSET, F> $trait for ArbitraryInt<BITS, SIGNED, OFFSET, F>
		where
			BITS:   BitWindow<OFFSET>,
			OFFSET: Unsigned,
			F:      StorageFactory,
		{
			type Output = Self;

			fn $method(self, rhs: Self) -> Self::Output {
				Self::$via(&self, &rhs)
			}
		}

		impl<BITS, const SIGNED: bool, OFFSET, F> $trait<&ArbitraryInt<BITS, SIGNED, OFFSET, F>> for ArbitraryInt<BITS, SIGNED, OFFSET, F>
		where
			BITS:   BitWindow<OFFSET>,
			OFFSET: Unsigned,
			F:      StorageFactory,
		{
			type Output = Self;

			fn $method(self, rhs: &Self) -> Self::Output {
				Self::$via(&self, rhs)
			}
		}

		impl<BITS, const SIGNED: bool, OFFSET, F> $trait<ArbitraryInt<BITS, SIGNED, OFFSET, F>> for &ArbitraryInt<BITS, SIGNED, OFFSET, F>
		where
			BITS:   BitWindow<OFFSET>,
			OFFSET: Unsigned,
			F:      StorageFactory,
		{
			type Output = ArbitraryInt<BITS, SIGNED, OFFSET, F>;

			fn $method(self, rhs: ArbitraryInt<BITS, SIGNED, OFFSET, F>) -> Self::Output {
				ArbitraryInt::$via(self, &rhs)
			}
		}

		impl<BITS, const SIGNED: bool, OFFSET, F> $trait<&ArbitraryInt<BITS, SIGNED, OFFSET, F>> for &ArbitraryInt<BITS, SIGNED, OFFSET, F>
		where
			BITS:   BitWindow<OFFSET>,
			OFFSET: Unsigned,
			F:      StorageFactory,
		{
			type Output = ArbitraryInt<BITS, SIGNED, OFFSET, F>;

			fn $method(self, rhs: &ArbitraryInt<BITS, SIGNED, OFFSET, F>) -> Self::Output {
				ArbitraryInt::$via(self, rhs)
			}
		}

		//󰭅		$trait_assign
		impl<BITS, const SIGNED: bool, OFFSET, F> $trait_assign for ArbitraryInt<BITS, SIGNED, OFFSET, F>
		where
			BITS:   BitWindow<OFFSET>,
			OFFSET: Unsigned,
			F:      StorageFactory,
		{
			fn $method_assign(&mut self, rhs: Self) {
				*self = Self::$via(self, &rhs);
			}
		}

		impl<BITS, const SIGNED: bool, OFFSET, F> $trait_assign<&ArbitraryInt<BITS, SIGNED, OFFSET, F>> for ArbitraryInt<BITS, SIGNED, OFFSET, F>
		where
			BITS:   BitWindow<OFFSET>,
			OFFSET: Unsigned,
			F:      StorageFactory,
		{
			fn $method_assign(&mut self, rhs: &Self) {
				*self = Self::$via(self, rhs);
			}
		}
	};
}

/// Implements a shift operator by a [`u32`] for values and references, plus
/// the assigning form.
macro_rules! impl_shift_op {
	($trait:ident, $method:ident, $trait_assign:ident, $method_assign:ident, $via:ident) => {
		//󰭅		$trait
		impl<BITS, const SIGNED: bool, OFFSET, F> $trait<u32> for ArbitraryInt<BITS, SIGNED, OFFSET, F>
		where
			BITS:   BitWindow<OFFSET>,
			OFFSET: Unsigned,
			F:      StorageFactory,
		{
			type Output = Self;

			fn $method(self, rhs: u32) -> Self::Output {
				self.$via(shift_amount(rhs))
			}
		}

		impl<BITS, const SIGNED: bool, OFFSET, F> $trait<u32> for &ArbitraryInt<BITS, SIGNED, OFFSET, F>
		where
			BITS:   BitWindow<OFFSET>,
			OFFSET: Unsigned,
			F:      StorageFactory,
		{
			type Output = ArbitraryInt<BITS, SIGNED, OFFSET, F>;

			fn $method(self, rhs: u32) -> Self::Output {
				self.$via(shift_amount(rhs))
			}
		}

		//󰭅		$trait_assign
		impl<BITS, const SIGNED: bool, OFFSET, F> $trait_assign<u32> for ArbitraryInt<BITS, SIGNED, OFFSET, F>
		where
			BITS:   BitWindow<OFFSET>,
			OFFSET: Unsigned,
			F:      StorageFactory,
		{
			fn $method_assign(&mut self, rhs: u32) {
				*self = self.$via(shift_amount(rhs));
			}
		}
	};
}

impl_binary_op!(Add,    add,    AddAssign,    add_assign,    wrapping_add);
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, bitand_window);
impl_binary_op!(BitOr,  bitor,  BitOrAssign,  bitor_assign,  bitor_window);
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, bitxor_window);
impl_binary_op!(Div,    div,    DivAssign,    div_assign,    wrapping_div);
impl_binary_op!(Mul,    mul,    MulAssign,    mul_assign,    wrapping_mul);
impl_binary_op!(Rem,    rem,    RemAssign,    rem_assign,    wrapping_rem);
impl_binary_op!(Sub,    sub,    SubAssign,    sub_assign,    wrapping_sub);

impl_shift_op!(Shl, shl, ShlAssign, shl_assign, shl_window);
impl_shift_op!(Shr, shr, ShrAssign, shr_assign, shr_window);

//󰭅		ArbitraryInt: bitwise operator helpers
impl<BITS, const SIGNED: bool, OFFSET, F> ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	//		bitand_window
	/// Bitwise AND of the windows.
	fn bitand_window(&self, rhs: &Self) -> Self {
		self.bitwise(rhs, |storage, other, start, count| storage.bitwise_and(other, start, count))
	}

	//		bitor_window
	/// Bitwise OR of the windows.
	fn bitor_window(&self, rhs: &Self) -> Self {
		self.bitwise(rhs, |storage, other, start, count| storage.bitwise_or(other, start, count))
	}

	//		bitxor_window
	/// Bitwise XOR of the windows.
	fn bitxor_window(&self, rhs: &Self) -> Self {
		self.bitwise(rhs, |storage, other, start, count| storage.bitwise_xor(other, start, count))
	}
}

//󰭅		Neg
impl<BITS, OFFSET, F> Neg for ArbitraryInt<BITS, true, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	type Output = Self;

	//		neg
	fn neg(self) -> Self::Output {
		self.wrapping_neg()
	}
}

//󰭅		Neg: &
impl<BITS, OFFSET, F> Neg for &ArbitraryInt<BITS, true, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	type Output = ArbitraryInt<BITS, true, OFFSET, F>;

	//		neg
	fn neg(self) -> Self::Output {
		self.wrapping_neg()
	}
}

//󰭅		Not
impl<BITS, const SIGNED: bool, OFFSET, F> Not for ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	type Output = Self;

	//		not
	fn not(self) -> Self::Output {
		self.complement()
	}
}

//󰭅		Not: &
impl<BITS, const SIGNED: bool, OFFSET, F> Not for &ArbitraryInt<BITS, SIGNED, OFFSET, F>
where
	BITS:   BitWindow<OFFSET>,
	OFFSET: Unsigned,
	F:      StorageFactory,
{
	type Output = ArbitraryInt<BITS, SIGNED, OFFSET, F>;

	//		not
	fn not(self) -> Self::Output {
		self.complement()
	}
}



//		Functions

//		shift_amount
/// Widens a shift amount, saturating on targets where [`usize`] is narrower
/// than [`u32`].
fn shift_amount(n: u32) -> usize {
	usize::try_from(n).unwrap_or(usize::MAX)
}
