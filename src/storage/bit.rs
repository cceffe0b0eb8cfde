//! Bit-granularity storage capabilities, including offset arithmetic.
//!
//! Bits are addressed by a linear index across the whole buffer: bit `i`
//! lives in byte `i >> 3` at position `i & 7`, least-significant bit first.
//! "Leading" always means towards the most-significant end of the buffer and
//! "trailing" towards bit `0`.
//!
//! As with the byte capabilities, every method has a default implementation
//! built on [`ByteAccess`], and backends override the ones they can do
//! faster.

//	Index validity is the caller's responsibility throughout this layer.
#![allow(
	clippy::arithmetic_side_effects,
	clippy::as_conversions,
	clippy::indexing_slicing,
	reason = "Indices are caller-guaranteed by contract"
)]



//		Packages

use super::byte::{fits, ByteAccess};



//		Traits

//		BitAccess
/// Single-bit and bit-field access.
pub trait BitAccess: ByteAccess {
	//		get_bit
	/// Gets the value of bit `index`.
	fn get_bit(&self, index: usize) -> bool {
		(self[index >> 3] >> (index & 7)) & 1 == 1
	}

	//		set_bit
	/// Sets bit `index` to `value`.
	fn set_bit(&mut self, index: usize, value: bool) {
		let mask = 1_u8 << (index & 7);
		if value {
			self[index >> 3] |= mask;
		} else {
			self[index >> 3] &= !mask;
		}
	}

	//		clear_bit
	/// Sets bit `index` to zero.
	fn clear_bit(&mut self, index: usize) {
		self.set_bit(index, false);
	}

	//		flip_bit
	/// Inverts bit `index`.
	fn flip_bit(&mut self, index: usize) {
		self[index >> 3] ^= 1_u8 << (index & 7);
	}

	//		set_all_bits
	/// Sets every bit in the buffer.
	fn set_all_bits(&mut self) {
		self.fill(0xFF);
	}

	//		clear_all_bits
	/// Clears every bit in the buffer.
	fn clear_all_bits(&mut self) {
		self.fill(0);
	}

	//		flip_all_bits
	/// Inverts every bit in the buffer.
	fn flip_all_bits(&mut self) {
		for i in 0..self.byte_size() {
			self[i] = !self[i];
		}
	}

	//		read_bits
	/// Reads the field `start..start + count` as an unsigned machine word.
	///
	/// Bit `start` becomes bit `0` of the result.
	///
	/// # Parameters
	///
	/// * `start` - The index of the lowest bit of the field.
	/// * `count` - The width of the field, at most 64.
	///
	fn read_bits(&self, start: usize, count: usize) -> u64 {
		debug_assert!(count <= 64, "Fields are limited to 64 bits");
		(0..count)
			.filter(|&k| self.get_bit(start + k))
			.fold(0, |value, k| value | (1 << k))
	}

	//		write_bits
	/// Writes the low `count` bits of `value` into the field
	/// `start..start + count`, leaving all other bits untouched.
	///
	/// # Parameters
	///
	/// * `start` - The index of the lowest bit of the field.
	/// * `count` - The width of the field, at most 64.
	/// * `value` - The value to write. Bits above `count` are ignored.
	///
	fn write_bits(&mut self, start: usize, count: usize, value: u64) {
		debug_assert!(count <= 64, "Fields are limited to 64 bits");
		for k in 0..count {
			self.set_bit(start + k, (value >> k) & 1 == 1);
		}
	}

	//		fill_bits
	/// Sets every bit in `start..start + count` to `value`.
	fn fill_bits(&mut self, start: usize, count: usize, value: bool) {
		let pattern = if value { u64::MAX } else { 0 };
		let mut done = 0;
		while done < count {
			let chunk = (count - done).min(64);
			self.write_bits(start + done, chunk, pattern);
			done += chunk;
		}
	}
}

//		BitAnalysis
/// Counting, searching, and predicates over the bits of a buffer.
pub trait BitAnalysis: BitAccess {
	//		pop_count
	/// Counts the set bits.
	fn pop_count(&self) -> usize {
		(0..self.byte_size()).map(|i| self[i].count_ones() as usize).sum()
	}

	//		count_leading_zeros
	/// Counts the clear bits above the most-significant set bit.
	fn count_leading_zeros(&self) -> usize {
		let mut count = 0;
		for i in (0..self.byte_size()).rev() {
			let zeros = self[i].leading_zeros() as usize;
			count    += zeros;
			if zeros < 8 {
				break;
			}
		}
		count
	}

	//		count_leading_ones
	/// Counts the set bits above the most-significant clear bit.
	fn count_leading_ones(&self) -> usize {
		let mut count = 0;
		for i in (0..self.byte_size()).rev() {
			let ones = self[i].leading_ones() as usize;
			count   += ones;
			if ones < 8 {
				break;
			}
		}
		count
	}

	//		count_trailing_zeros
	/// Counts the clear bits below the least-significant set bit.
	fn count_trailing_zeros(&self) -> usize {
		let mut count = 0;
		for i in 0..self.byte_size() {
			let zeros = self[i].trailing_zeros() as usize;
			count    += zeros;
			if zeros < 8 {
				break;
			}
		}
		count
	}

	//		count_trailing_ones
	/// Counts the set bits below the least-significant clear bit.
	fn count_trailing_ones(&self) -> usize {
		let mut count = 0;
		for i in 0..self.byte_size() {
			let ones = self[i].trailing_ones() as usize;
			count   += ones;
			if ones < 8 {
				break;
			}
		}
		count
	}

	//		find_first_set
	/// Finds the lowest set bit.
	fn find_first_set(&self) -> Option<usize> {
		let index = self.count_trailing_zeros();
		(index < self.bit_size()).then_some(index)
	}

	//		find_first_clear
	/// Finds the lowest clear bit.
	fn find_first_clear(&self) -> Option<usize> {
		let index = self.count_trailing_ones();
		(index < self.bit_size()).then_some(index)
	}

	//		find_last_set
	/// Finds the highest set bit.
	fn find_last_set(&self) -> Option<usize> {
		let zeros = self.count_leading_zeros();
		(zeros < self.bit_size()).then(|| self.bit_size() - 1 - zeros)
	}

	//		find_last_clear
	/// Finds the highest clear bit.
	fn find_last_clear(&self) -> Option<usize> {
		let ones = self.count_leading_ones();
		(ones < self.bit_size()).then(|| self.bit_size() - 1 - ones)
	}

	//		is_all_zeros
	/// Determines if no bit is set.
	fn is_all_zeros(&self) -> bool {
		(0..self.byte_size()).all(|i| self[i] == 0)
	}

	//		is_all_ones
	/// Determines if every bit is set.
	fn is_all_ones(&self) -> bool {
		(0..self.byte_size()).all(|i| self[i] == 0xFF)
	}

	//		is_power_of_two
	/// Determines if exactly one bit is set.
	fn is_power_of_two(&self) -> bool {
		self.pop_count() == 1
	}

	//		has_even_parity
	/// Determines if an even number of bits is set.
	fn has_even_parity(&self) -> bool {
		self.pop_count() % 2 == 0
	}

	//		has_odd_parity
	/// Determines if an odd number of bits is set.
	fn has_odd_parity(&self) -> bool {
		!self.has_even_parity()
	}

	//		test_bit_range
	/// Determines if every bit in `start..start + count` equals `expected`.
	///
	/// A range that runs past the end of the buffer is not an error, and
	/// simply gives `false`. An empty range inside the buffer gives `true`.
	///
	/// # Parameters
	///
	/// * `start`    - The index of the first bit to test.
	/// * `count`    - The number of bits to test.
	/// * `expected` - The value every bit must have.
	///
	fn test_bit_range(&self, start: usize, count: usize, expected: bool) -> bool {
		fits(start, count, self.bit_size())
			&& (start..start + count).all(|i| self.get_bit(i) == expected)
	}
}

//		BitManipulation
/// In-place bit shifting, rotation, boolean operations, and offset
/// arithmetic.
pub trait BitManipulation: BitAccess + BitAnalysis {
	//		shift_left
	/// Logical shift of the whole buffer towards the most-significant end.
	///
	/// Vacated low bits are cleared. Shifting by the bit size or more clears
	/// the buffer.
	///
	fn shift_left(&mut self, n: usize) {
		let bits = self.bit_size();
		if n >= bits {
			self.clear_all_bits();
			return;
		}
		for i in (n..bits).rev() {
			let bit = self.get_bit(i - n);
			self.set_bit(i, bit);
		}
		self.fill_bits(0, n, false);
	}

	//		shift_right
	/// Logical shift of the whole buffer towards bit `0`.
	///
	/// Vacated high bits are cleared. Shifting by the bit size or more clears
	/// the buffer.
	///
	fn shift_right(&mut self, n: usize) {
		let bits = self.bit_size();
		if n >= bits {
			self.clear_all_bits();
			return;
		}
		for i in 0..bits - n {
			let bit = self.get_bit(i + n);
			self.set_bit(i, bit);
		}
		self.fill_bits(bits - n, n, false);
	}

	//		rotate_left
	/// Rotates the whole buffer towards the most-significant end.
	///
	/// Bits leaving the top of the buffer re-enter at bit `0`. The amount is
	/// taken modulo the bit size.
	///
	fn rotate_left(&mut self, n: usize) {
		let bits = self.bit_size();
		if bits == 0 || n % bits == 0 {
			return;
		}
		let n = n % bits;
		self.reverse_bit_range(0, bits);
		self.reverse_bit_range(0, n);
		self.reverse_bit_range(n, bits - n);
	}

	//		rotate_right
	/// Rotates the whole buffer towards bit `0`.
	///
	/// Bits leaving bit `0` re-enter at the top of the buffer. The amount is
	/// taken modulo the bit size.
	///
	fn rotate_right(&mut self, n: usize) {
		let bits = self.bit_size();
		if bits == 0 {
			return;
		}
		self.rotate_left(bits - n % bits);
	}

	//		reverse_bit_range
	/// Reverses the order of the bits in `start..start + count`.
	fn reverse_bit_range(&mut self, start: usize, count: usize) {
		if count < 2 {
			return;
		}
		let (mut low, mut high) = (start, start + count - 1);
		while low < high {
			let (a, b) = (self.get_bit(low), self.get_bit(high));
			self.set_bit(low,  b);
			self.set_bit(high, a);
			low  += 1;
			high -= 1;
		}
	}

	//		reverse_bits
	/// Reverses the entire bit sequence, so that bit `i` swaps with bit
	/// `bit_size() - 1 - i`.
	fn reverse_bits(&mut self) {
		self.reverse_bit_range(0, self.bit_size());
	}

	//		bitwise_and
	/// ANDs bits `start..start + count` of `other` into the same bits of this
	/// buffer.
	fn bitwise_and<S: BitAccess + ?Sized>(&mut self, other: &S, start: usize, count: usize) {
		for i in start..start + count {
			let bit = self.get_bit(i) & other.get_bit(i);
			self.set_bit(i, bit);
		}
	}

	//		bitwise_or
	/// ORs bits `start..start + count` of `other` into the same bits of this
	/// buffer.
	fn bitwise_or<S: BitAccess + ?Sized>(&mut self, other: &S, start: usize, count: usize) {
		for i in start..start + count {
			let bit = self.get_bit(i) | other.get_bit(i);
			self.set_bit(i, bit);
		}
	}

	//		bitwise_xor
	/// XORs bits `start..start + count` of `other` into the same bits of this
	/// buffer.
	fn bitwise_xor<S: BitAccess + ?Sized>(&mut self, other: &S, start: usize, count: usize) {
		for i in start..start + count {
			let bit = self.get_bit(i) ^ other.get_bit(i);
			self.set_bit(i, bit);
		}
	}

	//		bitwise_not
	/// Inverts bits `start..start + count`.
	fn bitwise_not(&mut self, start: usize, count: usize) {
		for i in start..start + count {
			self.flip_bit(i);
		}
	}

	//		increment
	/// Adds one to the whole buffer, wrapping to zero.
	///
	/// The trailing run of set bits is cleared and the bit immediately above
	/// it is set. If the run covers the whole buffer, the buffer wraps to
	/// zero.
	///
	fn increment(&mut self) {
		let run = self.count_trailing_ones();
		if run >= self.bit_size() {
			self.clear_all_bits();
			return;
		}
		self.fill_bits(0, run, false);
		self.set_bit(run, true);
	}

	//		decrement
	/// Subtracts one from the whole buffer, wrapping to all ones.
	///
	/// The mirror image of [`increment()`](BitManipulation::increment()),
	/// working on the trailing run of clear bits.
	///
	fn decrement(&mut self) {
		let run = self.count_trailing_zeros();
		if run >= self.bit_size() {
			self.set_all_bits();
			return;
		}
		self.fill_bits(0, run, true);
		self.clear_bit(run);
	}

	//		offset_add
	/// Adds `value` into the unsigned field `offset..offset + width`.
	///
	/// The carry propagates only within the field, and the result wraps
	/// silently at the field boundary. Bits of `value` above `width` are
	/// ignored, and no bit outside the field is touched.
	///
	/// # Parameters
	///
	/// * `offset` - The index of the lowest bit of the field.
	/// * `width`  - The width of the field in bits.
	/// * `value`  - The value to add.
	///
	fn offset_add(&mut self, offset: usize, width: usize, value: u64) {
		_ = self.offset_add_with_carry(offset, width, value, false);
	}

	//		offset_sub
	/// Subtracts `value` from the unsigned field `offset..offset + width`.
	///
	/// The borrow propagates only within the field, and the result wraps
	/// silently at the field boundary.
	///
	fn offset_sub(&mut self, offset: usize, width: usize, value: u64) {
		_ = self.offset_sub_with_borrow(offset, width, value, false);
	}

	//		offset_add_with_carry
	/// Adds `value` and an incoming carry into the field
	/// `offset..offset + width`, returning the carry out of the top of the
	/// field.
	fn offset_add_with_carry(&mut self, offset: usize, width: usize, value: u64, carry: bool) -> bool {
		let mut carry  = carry;
		let mut addend = value;
		let mut done   = 0;
		while done < width {
			let chunk        = (width - done).min(64);
			let current      = self.read_bits(offset + done, chunk);
			let (sum, out)   = add_chunk(current, addend & low_mask(chunk), carry, chunk);
			self.write_bits(offset + done, chunk, sum);
			carry            = out;
			addend           = 0;
			done            += chunk;
			if !carry {
				break;
			}
		}
		carry
	}

	//		offset_sub_with_borrow
	/// Subtracts `value` and an incoming borrow from the field
	/// `offset..offset + width`, returning the borrow out of the top of the
	/// field.
	fn offset_sub_with_borrow(&mut self, offset: usize, width: usize, value: u64, borrow: bool) -> bool {
		let mut borrow     = borrow;
		let mut subtrahend = value;
		let mut done       = 0;
		while done < width {
			let chunk           = (width - done).min(64);
			let current         = self.read_bits(offset + done, chunk);
			let (difference, out) = sub_chunk(current, subtrahend & low_mask(chunk), borrow, chunk);
			self.write_bits(offset + done, chunk, difference);
			borrow              = out;
			subtrahend          = 0;
			done               += chunk;
			if !borrow {
				break;
			}
		}
		borrow
	}

	//		offset_add_from
	/// Adds the field `src_start..src_start + src_width` of `other` into the
	/// field `dst_start..dst_start + src_width` of this buffer.
	///
	/// The carry stays within the destination field and wraps silently.
	///
	/// # Parameters
	///
	/// * `other`     - The buffer holding the addend.
	/// * `src_start` - The lowest bit of the addend field in `other`.
	/// * `src_width` - The width of both fields.
	/// * `dst_start` - The lowest bit of the destination field.
	///
	fn offset_add_from<S: BitAccess + ?Sized>(&mut self, other: &S, src_start: usize, src_width: usize, dst_start: usize) {
		_ = self.offset_add_from_with_carry(other, src_start, src_width, dst_start, false);
	}

	//		offset_sub_from
	/// Subtracts the field `src_start..src_start + src_width` of `other` from
	/// the field `dst_start..dst_start + src_width` of this buffer.
	fn offset_sub_from<S: BitAccess + ?Sized>(&mut self, other: &S, src_start: usize, src_width: usize, dst_start: usize) {
		_ = self.offset_sub_from_with_borrow(other, src_start, src_width, dst_start, false);
	}

	//		offset_add_from_with_carry
	/// As [`offset_add_from()`](BitManipulation::offset_add_from()), with an
	/// incoming carry, returning the carry out of the top of the field.
	fn offset_add_from_with_carry<S: BitAccess + ?Sized>(
		&mut self,
		other:     &S,
		src_start: usize,
		src_width: usize,
		dst_start: usize,
		carry:     bool,
	) -> bool {
		let mut carry = carry;
		let mut done  = 0;
		while done < src_width {
			let chunk      = (src_width - done).min(64);
			let current    = self.read_bits(dst_start + done, chunk);
			let addend     = other.read_bits(src_start + done, chunk);
			let (sum, out) = add_chunk(current, addend, carry, chunk);
			self.write_bits(dst_start + done, chunk, sum);
			carry          = out;
			done          += chunk;
		}
		carry
	}

	//		offset_sub_from_with_borrow
	/// As [`offset_sub_from()`](BitManipulation::offset_sub_from()), with an
	/// incoming borrow, returning the borrow out of the top of the field.
	fn offset_sub_from_with_borrow<S: BitAccess + ?Sized>(
		&mut self,
		other:     &S,
		src_start: usize,
		src_width: usize,
		dst_start: usize,
		borrow:    bool,
	) -> bool {
		let mut borrow = borrow;
		let mut done   = 0;
		while done < src_width {
			let chunk             = (src_width - done).min(64);
			let current           = self.read_bits(dst_start + done, chunk);
			let subtrahend        = other.read_bits(src_start + done, chunk);
			let (difference, out) = sub_chunk(current, subtrahend, borrow, chunk);
			self.write_bits(dst_start + done, chunk, difference);
			borrow                = out;
			done                 += chunk;
		}
		borrow
	}
}

//		BitCopy
/// Bit-granularity copies within a buffer and between buffers.
///
/// The copy methods do not check their ranges. Call the matching `can_copy_*`
/// predicate first when the ranges are not already known to be valid.
///
pub trait BitCopy: BitAccess {
	//		can_copy_bits
	/// Determines if `count` bits can be copied from `src` to `dst` within
	/// this buffer.
	fn can_copy_bits(&self, src: usize, dst: usize, count: usize) -> bool {
		fits(src, count, self.bit_size()) && fits(dst, count, self.bit_size())
	}

	//		copy_bits
	/// Copies `count` bits from `src` to `dst` within this buffer, handling
	/// overlapping ranges.
	fn copy_bits(&mut self, src: usize, dst: usize, count: usize) {
		if src < dst {
			for k in (0..count).rev() {
				let bit = self.get_bit(src + k);
				self.set_bit(dst + k, bit);
			}
		} else {
			for k in 0..count {
				let bit = self.get_bit(src + k);
				self.set_bit(dst + k, bit);
			}
		}
	}

	//		move_bits
	/// Copies `count` bits from `src` to `dst`, then clears the source bits
	/// that the destination did not overwrite.
	fn move_bits(&mut self, src: usize, dst: usize, count: usize) {
		self.copy_bits(src, dst, count);
		for i in src..src + count {
			if i < dst || i >= dst + count {
				self.clear_bit(i);
			}
		}
	}

	//		can_copy_bits_from
	/// Determines if `count` bits can be copied from `src` in `other` to
	/// `dst` in this buffer.
	fn can_copy_bits_from<S: BitAccess + ?Sized>(&self, other: &S, src: usize, dst: usize, count: usize) -> bool {
		fits(src, count, other.bit_size()) && fits(dst, count, self.bit_size())
	}

	//		copy_bits_from
	/// Copies `count` bits from `src` in `other` to `dst` in this buffer.
	fn copy_bits_from<S: BitAccess + ?Sized>(&mut self, other: &S, src: usize, dst: usize, count: usize) {
		let mut done = 0;
		while done < count {
			let chunk = (count - done).min(64);
			self.write_bits(dst + done, chunk, other.read_bits(src + done, chunk));
			done     += chunk;
		}
	}
}




//		Implementations

//󰭅		BitAccess: [u8]
impl BitAccess for [u8] {}

//󰭅		BitAnalysis: [u8]
impl BitAnalysis for [u8] {}

//󰭅		BitCopy: [u8]
impl BitCopy for [u8] {}

//󰭅		BitManipulation: [u8]
impl BitManipulation for [u8] {}



//		Functions

//		low_mask
/// A mask of the low `count` bits of a machine word.
pub(crate) const fn low_mask(count: usize) -> u64 {
	if count >= 64 {
		u64::MAX
	} else {
		(1_u64 << count) - 1
	}
}

//		add_chunk
/// Adds two `width`-bit words and a carry, returning the `width`-bit sum and
/// the carry out.
fn add_chunk(a: u64, b: u64, carry: bool, width: usize) -> (u64, bool) {
	if width >= 64 {
		let (sum, c1) = a.overflowing_add(b);
		let (sum, c2) = sum.overflowing_add(u64::from(carry));
		(sum, c1 || c2)
	} else {
		//	Both operands are below 2^63, so the sum cannot overflow a u64
		let sum = a + b + u64::from(carry);
		(sum & low_mask(width), sum >> width != 0)
	}
}

//		sub_chunk
/// Subtracts a `width`-bit word and a borrow from another, returning the
/// `width`-bit difference and the borrow out.
fn sub_chunk(a: u64, b: u64, borrow: bool, width: usize) -> (u64, bool) {
	let (difference, b1) = a.overflowing_sub(b);
	let (difference, b2) = difference.overflowing_sub(u64::from(borrow));
	(difference & low_mask(width), b1 || b2)
}
