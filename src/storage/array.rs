//! The reference byte-array storage backend.

//	These lint checks are unnecessary in this module because:
//	  1. We're working with GenericArray where we know the size at compile time.
//	  2. All our indexing is based on the N::USIZE constant which is tied to the
//	     type's size, or on caller-guaranteed indices as per the storage
//	     contract.
#![allow(
	clippy::arithmetic_side_effects,
	clippy::as_conversions,
	clippy::cast_possible_truncation,
	clippy::indexing_slicing,
	clippy::integer_division,
	reason = "We always know the size"
)]



//		Modules

#[cfg(test)]
#[path = "../tests/array.rs"]
mod tests;



//		Packages

use super::{
	bit::{low_mask, BitAccess, BitAnalysis, BitCopy, BitManipulation},
	byte::{ByteAccess, ByteAnalysis, ByteCopy, ByteManipulation},
	checksum::{Crc32, Fnv1a},
};
use crate::errors::ConversionError;
use core::{
	fmt::{Debug, Formatter, self},
	hash::{Hash, Hasher},
	ops::{Index, IndexMut},
};
use generic_array::{ArrayLength, GenericArray};



//		Structs

//		ByteArray
/// A fixed-size byte buffer implementing every storage capability.
///
/// This is the default backing store for the integer types. The buffer is a
/// [`GenericArray`] of exactly `N` bytes, with no allocation beyond the array
/// itself, and cloning it performs a full value copy.
///
/// Byte `0` is the least-significant byte, and bit `b` of byte `i` is global
/// bit `i * 8 + b`:
///
/// ```text
/// Buffer:  [0x34, 0x12]
///
/// Byte 0:  0011 0100  (bits 0-7)   LSB
/// Byte 1:  0001 0010  (bits 8-15)  MSB
/// ```
///
pub struct ByteArray<N: ArrayLength>(GenericArray<u8, N>);

//󰭅		ByteArray
impl<N: ArrayLength> ByteArray<N> {
	//		Constructors

	//		new
	/// Creates a zero-filled buffer.
	#[must_use]
	pub fn new() -> Self {
		Self(GenericArray::default())
	}

	//		from_array
	/// Wraps an existing array.
	#[must_use]
	pub const fn from_array(bytes: GenericArray<u8, N>) -> Self {
		Self(bytes)
	}

	//		from_slice
	/// Copies a byte slice into a new buffer.
	///
	/// # Errors
	///
	/// Returns an error if the slice is not exactly `N` bytes long.
	///
	pub fn from_slice(bytes: &[u8]) -> Result<Self, ConversionError> {
		if bytes.len() != N::USIZE {
			return Err(ConversionError::InvalidLength { expected: N::USIZE, actual: bytes.len() });
		}
		let mut array = GenericArray::<u8, N>::default();
		array.copy_from_slice(bytes);
		Ok(Self(array))
	}

	//		Public methods

	//		as_array
	/// Represents the buffer as a [`GenericArray`] of bytes.
	#[must_use]
	pub const fn as_array(&self) -> &GenericArray<u8, N> {
		&self.0
	}

	//		as_slice
	/// Represents the buffer as a slice of bytes.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_slice()
	}

	//		into_array
	/// Consumes the buffer, returning the underlying array.
	#[must_use]
	pub fn into_array(self) -> GenericArray<u8, N> {
		self.0
	}
}

//󰭅		BitAccess
impl<N: ArrayLength> BitAccess for ByteArray<N> {
	//		read_bits
	fn read_bits(&self, start: usize, count: usize) -> u64 {
		if count == 0 {
			return 0;
		}
		debug_assert!(count <= 64, "Fields are limited to 64 bits");
		let first = start >> 3;
		let last  = (start + count - 1) >> 3;
		//	At most nine bytes are touched, which fits in a u128
		let mut window = 0_u128;
		for (k, i) in (first..=last).enumerate() {
			window |= u128::from(self.0[i]) << (k * 8);
		}
		(window >> (start & 7)) as u64 & low_mask(count)
	}

	//		write_bits
	fn write_bits(&mut self, start: usize, count: usize, value: u64) {
		if count == 0 {
			return;
		}
		debug_assert!(count <= 64, "Fields are limited to 64 bits");
		let first = start >> 3;
		let last  = (start + count - 1) >> 3;
		let shift = start & 7;
		let mask  = u128::from(low_mask(count)) << shift;
		let bits  = (u128::from(value) << shift) & mask;
		for (k, i) in (first..=last).enumerate() {
			let byte_mask = (mask >> (k * 8)) as u8;
			let byte_bits = (bits >> (k * 8)) as u8;
			self.0[i]     = (self.0[i] & !byte_mask) | byte_bits;
		}
	}
}

//󰭅		BitAnalysis
impl<N: ArrayLength> BitAnalysis for ByteArray<N> {
	//		pop_count
	fn pop_count(&self) -> usize {
		self.0.iter().map(|byte| byte.count_ones() as usize).sum()
	}

	//		is_all_zeros
	fn is_all_zeros(&self) -> bool {
		self.0.iter().all(|&byte| byte == 0)
	}

	//		is_all_ones
	fn is_all_ones(&self) -> bool {
		self.0.iter().all(|&byte| byte == 0xFF)
	}
}

//󰭅		BitCopy
impl<N: ArrayLength> BitCopy for ByteArray<N> {}

//󰭅		BitManipulation
impl<N: ArrayLength> BitManipulation for ByteArray<N> {
	//		shift_left
	fn shift_left(&mut self, n: usize) {
		let size = N::USIZE;
		if n >= size * 8 {
			self.0.fill(0);
			return;
		}

		let byte_shift = n / 8;
		let bit_shift  = n % 8;

		if bit_shift == 0 {
			//	Simple case - byte aligned shift
			self.0.copy_within(0..size - byte_shift, byte_shift);
		} else {
			//	Complex case - bits cross byte boundaries, so work downwards
			//	to read each source byte before it is overwritten
			for i in (byte_shift..size).rev() {
				let mut byte = self.0[i - byte_shift] << bit_shift;
				if i > byte_shift {
					byte |= self.0[i - byte_shift - 1] >> (8 - bit_shift);
				}
				self.0[i] = byte;
			}
		}
		self.0[..byte_shift].fill(0);
	}

	//		shift_right
	fn shift_right(&mut self, n: usize) {
		let size = N::USIZE;
		if n >= size * 8 {
			self.0.fill(0);
			return;
		}

		let byte_shift = n / 8;
		let bit_shift  = n % 8;

		if bit_shift == 0 {
			self.0.copy_within(byte_shift..size, 0);
		} else {
			for i in 0..size - byte_shift {
				let mut byte = self.0[i + byte_shift] >> bit_shift;
				if i + byte_shift + 1 < size {
					byte |= self.0[i + byte_shift + 1] << (8 - bit_shift);
				}
				self.0[i] = byte;
			}
		}
		self.0[size - byte_shift..].fill(0);
	}

	//		rotate_left
	fn rotate_left(&mut self, n: usize) {
		let bits = N::USIZE * 8;
		if bits == 0 || n % bits == 0 {
			return;
		}
		let n        = n % bits;
		let mut wrap = self.clone();
		wrap.shift_right(bits - n);
		self.shift_left(n);
		self.or_bytes(&wrap);
	}

	//		rotate_right
	fn rotate_right(&mut self, n: usize) {
		let bits = N::USIZE * 8;
		if bits == 0 || n % bits == 0 {
			return;
		}
		let n        = n % bits;
		let mut wrap = self.clone();
		wrap.shift_left(bits - n);
		self.shift_right(n);
		self.or_bytes(&wrap);
	}

	//		reverse_bits
	fn reverse_bits(&mut self) {
		//	Reverse each byte's bits and swap it with its mirror position
		self.0.reverse();
		for byte in &mut self.0 {
			*byte = byte.reverse_bits();
		}
	}
}

//󰭅		ByteAccess
impl<N: ArrayLength> ByteAccess for ByteArray<N> {
	//		byte_size
	fn byte_size(&self) -> usize {
		N::USIZE
	}

	//		fill
	fn fill(&mut self, value: u8) {
		self.0.fill(value);
	}
}

//󰭅		ByteAnalysis
impl<N: ArrayLength> ByteAnalysis for ByteArray<N> {
	//		find_byte
	fn find_byte(&self, value: u8) -> Option<usize> {
		self.0.iter().position(|&byte| byte == value)
	}

	//		find_byte_pattern
	fn find_byte_pattern(&self, pattern: &[u8]) -> Option<usize> {
		if pattern.is_empty() {
			return Some(0);
		}
		self.0.windows(pattern.len()).position(|window| window == pattern)
	}

	//		compute_crc32
	fn compute_crc32(&self) -> u32 {
		let mut crc = Crc32::new();
		self.0.iter().for_each(|&byte| crc.update(byte));
		crc.finish()
	}

	//		compute_hash
	fn compute_hash(&self) -> u64 {
		let mut hash = Fnv1a::new();
		self.0.iter().for_each(|&byte| hash.update(byte));
		hash.finish()
	}
}

//󰭅		ByteCopy
impl<N: ArrayLength> ByteCopy for ByteArray<N> {
	//		copy_bytes
	fn copy_bytes(&mut self, src: usize, dst: usize, count: usize) {
		self.0.copy_within(src..src + count, dst);
	}
}

//󰭅		ByteManipulation
impl<N: ArrayLength> ByteManipulation for ByteArray<N> {
	//		swap_bytes
	fn swap_bytes(&mut self, a: usize, b: usize) {
		self.0.swap(a, b);
	}

	//		reverse_bytes
	fn reverse_bytes(&mut self) {
		self.0.reverse();
	}
}

//󰭅		Clone
impl<N: ArrayLength> Clone for ByteArray<N> {
	//		clone
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}

//󰭅		Debug
impl<N: ArrayLength> Debug for ByteArray<N> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ByteArray").field(&self.0.as_slice()).finish()
	}
}

//󰭅		Default
impl<N: ArrayLength> Default for ByteArray<N> {
	//		default
	fn default() -> Self {
		Self::new()
	}
}

//󰭅		Eq
impl<N: ArrayLength> Eq for ByteArray<N> {}

//󰭅		Hash
impl<N: ArrayLength> Hash for ByteArray<N> {
	//		hash
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.as_slice().hash(state);
	}
}

//󰭅		Index
impl<N: ArrayLength> Index<usize> for ByteArray<N> {
	type Output = u8;

	//		index
	fn index(&self, index: usize) -> &Self::Output {
		&self.0[index]
	}
}

//󰭅		IndexMut
impl<N: ArrayLength> IndexMut<usize> for ByteArray<N> {
	//		index_mut
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		&mut self.0[index]
	}
}

//󰭅		PartialEq
impl<N: ArrayLength> PartialEq for ByteArray<N> {
	//		eq
	fn eq(&self, other: &Self) -> bool {
		self.0.as_slice() == other.0.as_slice()
	}
}
