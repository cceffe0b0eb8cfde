//! Byte-granularity storage capabilities.
//!
//! Every trait here has default implementations written purely in terms of
//! [`ByteAccess`], so a new backend only needs indexed byte access to become
//! usable. Backends override whatever they can do faster.

//	Index validity is the caller's responsibility throughout this layer, and
//	the defaults index directly rather than hiding contract violations.
#![allow(
	clippy::arithmetic_side_effects,
	clippy::indexing_slicing,
	reason = "Indices are caller-guaranteed by contract"
)]



//		Packages

use super::checksum::{Crc32, Fnv1a};
use core::{
	cmp::Ordering,
	ops::{Index, IndexMut},
};



//		Traits

//		ByteAccess
/// Raw indexed access to a fixed-size byte buffer.
///
/// Byte `0` is the least-significant byte of the buffer. Indexing outside
/// `0..byte_size()` is a contract violation and is not signalled as an error.
///
pub trait ByteAccess: Index<usize, Output = u8> + IndexMut<usize> {
	//		byte_size
	/// The number of bytes in the buffer.
	fn byte_size(&self) -> usize;

	//		bit_size
	/// The number of bits in the buffer, always `byte_size() * 8`.
	fn bit_size(&self) -> usize {
		self.byte_size() * 8
	}

	//		fill
	/// Sets every byte to `value`.
	fn fill(&mut self, value: u8) {
		for i in 0..self.byte_size() {
			self[i] = value;
		}
	}

	//		clear
	/// Sets every byte to zero.
	fn clear(&mut self) {
		self.fill(0);
	}
}

//		ByteAnalysis
/// Searching, comparison, and checksums over the bytes of a buffer.
pub trait ByteAnalysis: ByteAccess {
	//		find_byte
	/// Returns the index of the first byte equal to `value`.
	fn find_byte(&self, value: u8) -> Option<usize> {
		(0..self.byte_size()).find(|&i| self[i] == value)
	}

	//		find_byte_pattern
	/// Returns the index at which `pattern` first occurs.
	///
	/// An empty pattern matches at index `0`.
	///
	/// # Parameters
	///
	/// * `pattern` - The sequence of bytes to look for.
	///
	fn find_byte_pattern(&self, pattern: &[u8]) -> Option<usize> {
		let size = self.byte_size();
		if pattern.len() > size {
			return None;
		}
		(0..=size - pattern.len()).find(|&start| {
			pattern.iter().enumerate().all(|(k, &byte)| self[start + k] == byte)
		})
	}

	//		compare
	/// Lexicographic comparison against another buffer.
	///
	/// Byte `0` is compared first, as with a plain memory comparison. Only the
	/// overlapping prefix of the two buffers takes part, so comparing against
	/// a shorter buffer ignores the remaining bytes.
	///
	/// # Parameters
	///
	/// * `other` - The buffer or byte slice to compare against.
	///
	fn compare<S: ByteAccess + ?Sized>(&self, other: &S) -> Ordering {
		let len = self.byte_size().min(other.byte_size());
		for i in 0..len {
			match self[i].cmp(&other[i]) {
				Ordering::Equal => {},
				unequal         => return unequal,
			}
		}
		Ordering::Equal
	}

	//		equal
	/// Determines if both buffers have the same length and the same bytes.
	fn equal<S: ByteAccess + ?Sized>(&self, other: &S) -> bool {
		self.byte_size() == other.byte_size() && self.compare(other) == Ordering::Equal
	}

	//		compute_crc32
	/// Computes the CRC-32/ISO-HDLC checksum of the buffer.
	fn compute_crc32(&self) -> u32 {
		let mut crc = Crc32::new();
		for i in 0..self.byte_size() {
			crc.update(self[i]);
		}
		crc.finish()
	}

	//		compute_hash
	/// Computes the 64-bit FNV-1a hash of the buffer.
	fn compute_hash(&self) -> u64 {
		let mut hash = Fnv1a::new();
		for i in 0..self.byte_size() {
			hash.update(self[i]);
		}
		hash.finish()
	}
}

//		ByteManipulation
/// Byte-granularity reordering, shifting, and boolean operations.
pub trait ByteManipulation: ByteAccess {
	//		swap_bytes
	/// Exchanges the bytes at positions `a` and `b`.
	fn swap_bytes(&mut self, a: usize, b: usize) {
		let held = self[a];
		self[a]  = self[b];
		self[b]  = held;
	}

	//		reverse_bytes
	/// Reverses the order of the bytes in the buffer.
	fn reverse_bytes(&mut self) {
		let size = self.byte_size();
		for i in 0..size / 2 {
			self.swap_bytes(i, size - 1 - i);
		}
	}

	//		shift_bytes_left
	/// Moves every byte `n` positions towards the most-significant end.
	///
	/// The vacated low bytes are set to `fill`. Shifting by the buffer length
	/// or more fills the whole buffer.
	///
	/// # Parameters
	///
	/// * `n`    - The number of byte positions to shift by.
	/// * `fill` - The value written into the vacated bytes.
	///
	fn shift_bytes_left(&mut self, n: usize, fill: u8) {
		let size = self.byte_size();
		if n >= size {
			self.fill(fill);
			return;
		}
		for i in (n..size).rev() {
			self[i] = self[i - n];
		}
		for i in 0..n {
			self[i] = fill;
		}
	}

	//		shift_bytes_left_zeroed
	/// Moves every byte `n` positions towards the most-significant end,
	/// zeroing the vacated low bytes.
	fn shift_bytes_left_zeroed(&mut self, n: usize) {
		self.shift_bytes_left(n, 0);
	}

	//		shift_bytes_right
	/// Moves every byte `n` positions towards the least-significant end.
	///
	/// The vacated high bytes are set to `fill`. Shifting by the buffer length
	/// or more fills the whole buffer.
	///
	/// # Parameters
	///
	/// * `n`    - The number of byte positions to shift by.
	/// * `fill` - The value written into the vacated bytes.
	///
	fn shift_bytes_right(&mut self, n: usize, fill: u8) {
		let size = self.byte_size();
		if n >= size {
			self.fill(fill);
			return;
		}
		for i in 0..size - n {
			self[i] = self[i + n];
		}
		for i in size - n..size {
			self[i] = fill;
		}
	}

	//		shift_bytes_right_zeroed
	/// Moves every byte `n` positions towards the least-significant end,
	/// zeroing the vacated high bytes.
	fn shift_bytes_right_zeroed(&mut self, n: usize) {
		self.shift_bytes_right(n, 0);
	}

	//		convert_to_big_endian
	/// Converts the buffer from its little-endian layout to big-endian.
	fn convert_to_big_endian(&mut self) {
		self.reverse_bytes();
	}

	//		convert_to_little_endian
	/// Converts the buffer to little-endian, which is its canonical layout.
	fn convert_to_little_endian(&mut self) {}

	//		convert_to_native_endian
	/// Converts the buffer to the byte order of the target platform.
	fn convert_to_native_endian(&mut self) {
		if cfg!(target_endian = "big") {
			self.reverse_bytes();
		}
	}

	//		and_bytes
	/// Byte-wise AND with the overlapping prefix of `other`.
	fn and_bytes<S: ByteAccess + ?Sized>(&mut self, other: &S) {
		for i in 0..self.byte_size().min(other.byte_size()) {
			self[i] &= other[i];
		}
	}

	//		or_bytes
	/// Byte-wise OR with the overlapping prefix of `other`.
	fn or_bytes<S: ByteAccess + ?Sized>(&mut self, other: &S) {
		for i in 0..self.byte_size().min(other.byte_size()) {
			self[i] |= other[i];
		}
	}

	//		xor_bytes
	/// Byte-wise XOR with the overlapping prefix of `other`.
	fn xor_bytes<S: ByteAccess + ?Sized>(&mut self, other: &S) {
		for i in 0..self.byte_size().min(other.byte_size()) {
			self[i] ^= other[i];
		}
	}

	//		not_bytes
	/// Inverts every byte.
	fn not_bytes(&mut self) {
		for i in 0..self.byte_size() {
			self[i] = !self[i];
		}
	}
}

//		ByteCopy
/// Byte-granularity copies within a buffer and between buffers.
///
/// The copy methods do not check their ranges. Call the matching `can_copy_*`
/// predicate first when the ranges are not already known to be valid.
///
pub trait ByteCopy: ByteAccess {
	//		can_copy_bytes
	/// Determines if `count` bytes can be copied from `src` to `dst` within
	/// this buffer.
	fn can_copy_bytes(&self, src: usize, dst: usize, count: usize) -> bool {
		fits(src, count, self.byte_size()) && fits(dst, count, self.byte_size())
	}

	//		copy_bytes
	/// Copies `count` bytes from `src` to `dst` within this buffer.
	///
	/// Overlapping ranges are handled as with `memmove`.
	///
	fn copy_bytes(&mut self, src: usize, dst: usize, count: usize) {
		if src < dst {
			for k in (0..count).rev() {
				self[dst + k] = self[src + k];
			}
		} else {
			for k in 0..count {
				self[dst + k] = self[src + k];
			}
		}
	}

	//		move_bytes
	/// Copies `count` bytes from `src` to `dst`, then zeroes the source bytes
	/// that the destination did not overwrite.
	fn move_bytes(&mut self, src: usize, dst: usize, count: usize) {
		self.copy_bytes(src, dst, count);
		for i in src..src + count {
			if i < dst || i >= dst + count {
				self[i] = 0;
			}
		}
	}

	//		can_copy_bytes_from
	/// Determines if `count` bytes can be copied from `src` in `other` to
	/// `dst` in this buffer.
	fn can_copy_bytes_from<S: ByteAccess + ?Sized>(&self, other: &S, src: usize, dst: usize, count: usize) -> bool {
		fits(src, count, other.byte_size()) && fits(dst, count, self.byte_size())
	}

	//		copy_bytes_from
	/// Copies `count` bytes from `src` in `other` to `dst` in this buffer.
	fn copy_bytes_from<S: ByteAccess + ?Sized>(&mut self, other: &S, src: usize, dst: usize, count: usize) {
		for k in 0..count {
			self[dst + k] = other[src + k];
		}
	}
}



//		Implementations

//󰭅		ByteAccess: [u8]
impl ByteAccess for [u8] {
	//		byte_size
	fn byte_size(&self) -> usize {
		self.len()
	}
}

//󰭅		ByteAnalysis: [u8]
impl ByteAnalysis for [u8] {}

//󰭅		ByteCopy: [u8]
impl ByteCopy for [u8] {}

//󰭅		ByteManipulation: [u8]
impl ByteManipulation for [u8] {}



//		Functions

//		fits
/// Determines if the range `start..start + count` lies within `size`.
pub(crate) fn fits(start: usize, count: usize, size: usize) -> bool {
	start.checked_add(count).is_some_and(|end| end <= size)
}
