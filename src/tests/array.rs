//		Packages

use super::*;
use claims::{assert_err_eq, assert_none, assert_ok, assert_some_eq};
use core::cmp::Ordering;
use generic_array::GenericArray;
use rubedo::sugar::s;
use typenum::{U1, U2, U4, U9};



//		Helpers

fn bytes<N: ArrayLength>(slice: &[u8]) -> ByteArray<N> {
	ByteArray::from_slice(slice).unwrap()
}



//		Tests

mod constructors {
	use super::*;

	//		new
	#[test]
	fn new__zeroed() {
		let array = ByteArray::<U4>::new();
		assert_eq!(array.as_slice(), &[0, 0, 0, 0]);
		assert_eq!(array.byte_size(), 4);
		assert_eq!(array.bit_size(), 32);
	}

	//		from_array
	#[test]
	fn from_array__wraps() {
		let raw   = GenericArray::<u8, U2>::from_slice(&[0x12, 0x34]).clone();
		let array = ByteArray::from_array(raw.clone());
		assert_eq!(array.as_array(), &raw);
		assert_eq!(array.into_array(), raw);
	}

	//		from_slice
	#[test]
	fn from_slice__valid() {
		let array = assert_ok!(ByteArray::<U2>::from_slice(&[0xAB, 0xCD]));
		assert_eq!(array[0], 0xAB);
		assert_eq!(array[1], 0xCD);
	}
	#[test]
	fn from_slice__wrong_length() {
		let err = ByteArray::<U2>::from_slice(&[1, 2, 3]);
		assert_err_eq!(&err, &ConversionError::InvalidLength { expected: 2, actual: 3 });
		assert_eq!(err.unwrap_err().to_string(), s!("Invalid length: expected 2 bytes, got 3"));
	}
}

mod byte_access {
	use super::*;

	//		fill
	#[test]
	fn fill__and_clear() {
		let mut array = ByteArray::<U4>::new();
		array.fill(0x5A);
		assert_eq!(array.as_slice(), &[0x5A; 4]);
		array.clear();
		assert!(array.is_all_zeros());
	}

	//		index_mut
	#[test]
	fn index_mut__writes_byte() {
		let mut array = ByteArray::<U2>::new();
		array[1]      = 0x80;
		assert!(array.get_bit(15));
		assert!(!array.get_bit(14));
	}
}

mod byte_analysis {
	use super::*;

	//		find_byte
	#[test]
	fn find_byte__found_and_missing() {
		let array = bytes::<U4>(&[1, 2, 3, 2]);
		assert_some_eq!(array.find_byte(2), 1);
		assert_none!(array.find_byte(9));
	}

	//		find_byte_pattern
	#[test]
	fn find_byte_pattern__found() {
		let array = bytes::<U4>(&[1, 2, 3, 4]);
		assert_some_eq!(array.find_byte_pattern(&[3, 4]), 2);
		assert_some_eq!(array.find_byte_pattern(&[]), 0);
	}
	#[test]
	fn find_byte_pattern__missing() {
		let array = bytes::<U4>(&[1, 2, 3, 4]);
		assert_none!(array.find_byte_pattern(&[4, 3]));
		assert_none!(array.find_byte_pattern(&[1, 2, 3, 4, 5]));
	}

	//		compare
	#[test]
	fn compare__lexicographic_from_byte_zero() {
		let a = bytes::<U2>(&[1, 9]);
		let b = bytes::<U2>(&[2, 0]);
		assert_eq!(a.compare(&b), Ordering::Less);
		assert_eq!(b.compare(&a), Ordering::Greater);
		assert_eq!(a.compare(&a.clone()), Ordering::Equal);
	}
	#[test]
	fn compare__against_slice() {
		let a = bytes::<U2>(&[1, 9]);
		assert_eq!(a.compare(&[1_u8, 9][..]), Ordering::Equal);
		assert_eq!(a.compare(&[1_u8][..]), Ordering::Equal);
		assert!(!a.equal(&[1_u8][..]));
		assert!(a.equal(&[1_u8, 9][..]));
	}

	//		compute_crc32
	#[test]
	fn compute_crc32__check_value() {
		let array = bytes::<U9>(b"123456789");
		assert_eq!(array.compute_crc32(), 0xCBF4_3926);
	}

	//		compute_hash
	#[test]
	fn compute_hash__fnv1a() {
		let array = bytes::<U1>(b"a");
		assert_eq!(array.compute_hash(), 0xAF63_DC4C_8601_EC8C);
	}
}

mod byte_manipulation {
	use super::*;

	//		swap_bytes
	#[test]
	fn swap_bytes__exchanges() {
		let mut array = bytes::<U4>(&[1, 2, 3, 4]);
		array.swap_bytes(0, 3);
		assert_eq!(array.as_slice(), &[4, 2, 3, 1]);
	}

	//		reverse_bytes
	#[test]
	fn reverse_bytes__reverses() {
		let mut array = bytes::<U4>(&[1, 2, 3, 4]);
		array.reverse_bytes();
		assert_eq!(array.as_slice(), &[4, 3, 2, 1]);
	}

	//		shift_bytes_left
	#[test]
	fn shift_bytes_left__with_fill() {
		let mut array = bytes::<U4>(&[1, 2, 3, 4]);
		array.shift_bytes_left(1, 0xEE);
		assert_eq!(array.as_slice(), &[0xEE, 1, 2, 3]);
	}
	#[test]
	fn shift_bytes_left__past_end() {
		let mut array = bytes::<U4>(&[1, 2, 3, 4]);
		array.shift_bytes_left(9, 0x11);
		assert_eq!(array.as_slice(), &[0x11; 4]);
	}

	//		shift_bytes_left_zeroed
	#[test]
	fn shift_bytes_left_zeroed__fills_zero() {
		let mut array = bytes::<U4>(&[1, 2, 3, 4]);
		array.shift_bytes_left_zeroed(1);
		assert_eq!(array.as_slice(), &[0, 1, 2, 3]);
		let mut raw = [1_u8, 2, 3, 4];
		raw[..].shift_bytes_left_zeroed(5);
		assert_eq!(raw, [0; 4]);
	}

	//		shift_bytes_right
	#[test]
	fn shift_bytes_right__with_fill() {
		let mut array = bytes::<U4>(&[1, 2, 3, 4]);
		array.shift_bytes_right(2, 0);
		assert_eq!(array.as_slice(), &[3, 4, 0, 0]);
	}

	//		shift_bytes_right_zeroed
	#[test]
	fn shift_bytes_right_zeroed__fills_zero() {
		let mut array = bytes::<U4>(&[1, 2, 3, 4]);
		array.shift_bytes_right_zeroed(3);
		assert_eq!(array.as_slice(), &[4, 0, 0, 0]);
		let mut raw = [1_u8, 2, 3, 4];
		raw[..].shift_bytes_right_zeroed(1);
		assert_eq!(raw, [2, 3, 4, 0]);
	}

	//		convert_to_big_endian
	#[test]
	fn convert_to_big_endian__reverses() {
		let mut array = bytes::<U2>(&[0x34, 0x12]);
		array.convert_to_big_endian();
		assert_eq!(array.as_slice(), &[0x12, 0x34]);
		array.convert_to_little_endian();
		assert_eq!(array.as_slice(), &[0x12, 0x34]);
	}

	//		and_bytes / or_bytes / xor_bytes / not_bytes
	#[test]
	fn boolean_bytes__combine() {
		let mask      = bytes::<U2>(&[0x0F, 0xF0]);
		let mut array = bytes::<U2>(&[0xFF, 0xFF]);
		array.and_bytes(&mask);
		assert_eq!(array.as_slice(), &[0x0F, 0xF0]);
		array.xor_bytes(&[0xFF_u8][..]);
		assert_eq!(array.as_slice(), &[0xF0, 0xF0]);
		array.or_bytes(&mask);
		assert_eq!(array.as_slice(), &[0xFF, 0xF0]);
		array.not_bytes();
		assert_eq!(array.as_slice(), &[0x00, 0x0F]);
	}
}

mod byte_copy {
	use super::*;

	//		copy_bytes
	#[test]
	fn copy_bytes__overlapping_forward() {
		let mut array = bytes::<U4>(&[1, 2, 3, 4]);
		assert!(array.can_copy_bytes(0, 1, 3));
		array.copy_bytes(0, 1, 3);
		assert_eq!(array.as_slice(), &[1, 1, 2, 3]);
	}
	#[test]
	fn copy_bytes__out_of_range() {
		let array = bytes::<U4>(&[1, 2, 3, 4]);
		assert!(!array.can_copy_bytes(2, 0, 3));
	}

	//		move_bytes
	#[test]
	fn move_bytes__zeroes_source() {
		let mut array = bytes::<U4>(&[1, 2, 3, 4]);
		array.move_bytes(0, 2, 2);
		assert_eq!(array.as_slice(), &[0, 0, 1, 2]);
	}

	//		copy_bytes_from
	#[test]
	fn copy_bytes_from__other_buffer() {
		let source    = bytes::<U2>(&[0xAA, 0xBB]);
		let mut array = ByteArray::<U4>::new();
		assert!(array.can_copy_bytes_from(&source, 0, 2, 2));
		assert!(!array.can_copy_bytes_from(&source, 1, 0, 2));
		array.copy_bytes_from(&source, 0, 2, 2);
		assert_eq!(array.as_slice(), &[0, 0, 0xAA, 0xBB]);
	}
}

mod bit_access {
	use super::*;

	//		set_bit
	#[test]
	fn set_bit__clear_bit__flip_bit() {
		let mut array = ByteArray::<U2>::new();
		array.set_bit(9, true);
		assert_eq!(array.as_slice(), &[0x00, 0x02]);
		array.flip_bit(0);
		array.clear_bit(9);
		assert_eq!(array.as_slice(), &[0x01, 0x00]);
	}

	//		set_all_bits / flip_all_bits
	#[test]
	fn all_bits__set_and_flip() {
		let mut array = ByteArray::<U2>::new();
		array.set_all_bits();
		assert!(array.is_all_ones());
		array.flip_all_bits();
		assert!(array.is_all_zeros());
	}

	//		read_bits
	#[test]
	fn read_bits__across_bytes() {
		let array = bytes::<U2>(&[0x34, 0x12]);
		assert_eq!(array.read_bits(4, 8), 0x23);
		assert_eq!(array.read_bits(0, 16), 0x1234);
		assert_eq!(array.read_bits(3, 0), 0);
	}

	//		write_bits
	#[test]
	fn write_bits__preserves_neighbours() {
		let mut array = bytes::<U2>(&[0xFF, 0xFF]);
		array.write_bits(4, 8, 0x00);
		assert_eq!(array.as_slice(), &[0x0F, 0xF0]);
	}
	#[test]
	fn write_bits__ignores_excess_value_bits() {
		let mut array = ByteArray::<U2>::new();
		array.write_bits(2, 3, 0xFF);
		assert_eq!(array.as_slice(), &[0b0001_1100, 0]);
	}
	#[test]
	fn write_bits__wide_field() {
		let mut array = ByteArray::<U9>::new();
		array.write_bits(3, 64, u64::MAX);
		assert_eq!(array.read_bits(3, 64), u64::MAX);
		assert!(!array.get_bit(2));
		assert!(!array.get_bit(67));
	}

	//		fill_bits
	#[test]
	fn fill_bits__range() {
		let mut array = ByteArray::<U2>::new();
		array.fill_bits(6, 4, true);
		assert_eq!(array.as_slice(), &[0xC0, 0x03]);
	}
}

mod bit_analysis {
	use super::*;

	//		pop_count
	#[test]
	fn pop_count__counts() {
		assert_eq!(bytes::<U2>(&[0xF0, 0x01]).pop_count(), 5);
		assert_eq!(ByteArray::<U2>::new().pop_count(), 0);
	}

	//		count_leading_zeros / count_trailing_zeros
	#[test]
	fn count_zeros__leading_and_trailing() {
		let array = bytes::<U2>(&[0x10, 0x02]);
		assert_eq!(array.count_leading_zeros(), 6);
		assert_eq!(array.count_trailing_zeros(), 4);
	}
	#[test]
	fn count_zeros__empty_buffer() {
		let array = ByteArray::<U2>::new();
		assert_eq!(array.count_leading_zeros(), 16);
		assert_eq!(array.count_trailing_zeros(), 16);
	}

	//		count_leading_ones / count_trailing_ones
	#[test]
	fn count_ones__leading_and_trailing() {
		let array = bytes::<U2>(&[0x07, 0xFE]);
		assert_eq!(array.count_leading_ones(), 7);
		assert_eq!(array.count_trailing_ones(), 3);
	}

	//		find_first_set / find_last_set
	#[test]
	fn find_set__first_and_last() {
		let array = bytes::<U2>(&[0x08, 0x40]);
		assert_some_eq!(array.find_first_set(), 3);
		assert_some_eq!(array.find_last_set(), 14);
		assert_none!(ByteArray::<U2>::new().find_first_set());
	}

	//		find_first_clear / find_last_clear
	#[test]
	fn find_clear__first_and_last() {
		let array = bytes::<U2>(&[0xF7, 0xBF]);
		assert_some_eq!(array.find_first_clear(), 3);
		assert_some_eq!(array.find_last_clear(), 14);
		assert_none!(bytes::<U1>(&[0xFF]).find_last_clear());
	}

	//		is_power_of_two
	#[test]
	fn is_power_of_two__single_bit() {
		assert!(bytes::<U2>(&[0x00, 0x10]).is_power_of_two());
		assert!(!bytes::<U2>(&[0x01, 0x10]).is_power_of_two());
		assert!(!ByteArray::<U2>::new().is_power_of_two());
	}

	//		has_even_parity / has_odd_parity
	#[test]
	fn parity__even_and_odd() {
		let even = bytes::<U2>(&[0x03, 0x00]);
		let odd  = bytes::<U2>(&[0x07, 0x00]);
		assert!(even.has_even_parity());
		assert!(!even.has_odd_parity());
		assert!(odd.has_odd_parity());
	}

	//		test_bit_range
	#[test]
	fn test_bit_range__inside_and_past_end() {
		let array = bytes::<U2>(&[0xF0, 0x00]);
		assert!(array.test_bit_range(4, 4, true));
		assert!(array.test_bit_range(8, 8, false));
		assert!(array.test_bit_range(16, 0, false));
		assert!(!array.test_bit_range(12, 8, false));
	}
}

mod bit_manipulation {
	use super::*;

	//		shift_left
	#[test]
	fn shift_left__across_bytes() {
		let mut array = bytes::<U2>(&[0x81, 0x00]);
		array.shift_left(3);
		assert_eq!(array.as_slice(), &[0x08, 0x04]);
	}
	#[test]
	fn shift_left__byte_aligned() {
		let mut array = bytes::<U4>(&[1, 2, 3, 4]);
		array.shift_left(16);
		assert_eq!(array.as_slice(), &[0, 0, 1, 2]);
	}
	#[test]
	fn shift_left__everything() {
		let mut array = bytes::<U2>(&[0xFF, 0xFF]);
		array.shift_left(16);
		assert!(array.is_all_zeros());
	}

	//		shift_right
	#[test]
	fn shift_right__across_bytes() {
		let mut array = bytes::<U2>(&[0x08, 0x04]);
		array.shift_right(3);
		assert_eq!(array.as_slice(), &[0x81, 0x00]);
	}

	//		rotate_left / rotate_right
	#[test]
	fn rotate_left__wraps_top_bits() {
		let mut array = bytes::<U2>(&[0x01, 0x80]);
		array.rotate_left(1);
		assert_eq!(array.as_slice(), &[0x03, 0x00]);
		array.rotate_right(1);
		assert_eq!(array.as_slice(), &[0x01, 0x80]);
	}
	#[test]
	fn rotate__full_turn() {
		let mut array = bytes::<U2>(&[0x12, 0x34]);
		array.rotate_left(16);
		assert_eq!(array.as_slice(), &[0x12, 0x34]);
		array.rotate_right(21);
		let mut expected = bytes::<U2>(&[0x12, 0x34]);
		expected.rotate_right(5);
		assert_eq!(array, expected);
	}
	#[test]
	fn rotate__default_matches_override() {
		let array    = bytes::<U2>(&[0x12, 0x34]);
		let mut fast = array.clone();
		fast.rotate_left(5);
		let mut slow = array.clone();
		slow.reverse_bit_range(0, 16);
		slow.reverse_bit_range(0, 5);
		slow.reverse_bit_range(5, 11);
		assert_eq!(fast, slow);
	}

	//		reverse_bits
	#[test]
	fn reverse_bits__whole_buffer() {
		let mut array = bytes::<U2>(&[0x01, 0x00]);
		array.reverse_bits();
		assert_eq!(array.as_slice(), &[0x00, 0x80]);
	}

	//		reverse_bit_range
	#[test]
	fn reverse_bit_range__partial() {
		let mut array = bytes::<U1>(&[0b0000_0110]);
		array.reverse_bit_range(1, 4);
		assert_eq!(array.as_slice(), &[0b0001_1000]);
	}

	//		bitwise_and / bitwise_or / bitwise_xor / bitwise_not
	#[test]
	fn bitwise__confined_to_range() {
		let other     = bytes::<U2>(&[0x00, 0x00]);
		let mut array = bytes::<U2>(&[0xFF, 0xFF]);
		array.bitwise_and(&other, 4, 8);
		assert_eq!(array.as_slice(), &[0x0F, 0xF0]);
		array.bitwise_not(0, 4);
		assert_eq!(array.as_slice(), &[0x00, 0xF0]);
		array.bitwise_or(&bytes::<U2>(&[0xFF, 0xFF]), 0, 2);
		assert_eq!(array.as_slice(), &[0x03, 0xF0]);
		array.bitwise_xor(&bytes::<U2>(&[0xFF, 0xFF]), 8, 8);
		assert_eq!(array.as_slice(), &[0x03, 0x0F]);
	}

	//		increment / decrement
	#[test]
	fn increment__carries_and_wraps() {
		let mut array = bytes::<U2>(&[0xFF, 0x00]);
		array.increment();
		assert_eq!(array.as_slice(), &[0x00, 0x01]);
		let mut full = bytes::<U2>(&[0xFF, 0xFF]);
		full.increment();
		assert!(full.is_all_zeros());
	}
	#[test]
	fn decrement__borrows_and_wraps() {
		let mut array = bytes::<U2>(&[0x00, 0x01]);
		array.decrement();
		assert_eq!(array.as_slice(), &[0xFF, 0x00]);
		let mut empty = ByteArray::<U2>::new();
		empty.decrement();
		assert!(empty.is_all_ones());
	}

	//		offset_add
	#[test]
	fn offset_add__carry_stays_in_field() {
		let mut array = bytes::<U1>(&[0b0000_1111]);
		array.offset_add(0, 4, 1);
		assert_eq!(array.as_slice(), &[0b0000_0000]);

		let mut array = bytes::<U1>(&[0xFF]);
		array.offset_add(0, 4, 1);
		assert_eq!(array.as_slice(), &[0xF0]);
	}
	#[test]
	fn offset_add__unaligned_field() {
		//	Field of 12 bits at offset 2 holding 100
		let mut array = ByteArray::<U2>::new();
		array.write_bits(2, 12, 100);
		array.offset_add(2, 12, 50);
		assert_eq!(array.read_bits(2, 12), 150);
		assert!(!array.get_bit(0));
		assert!(!array.get_bit(14));
	}

	//		offset_add_with_carry
	#[test]
	fn offset_add_with_carry__reports_carry() {
		let mut array = ByteArray::<U2>::new();
		array.write_bits(4, 8, 0xFF);
		assert!(array.offset_add_with_carry(4, 8, 1, false));
		assert_eq!(array.read_bits(4, 8), 0);
		assert!(!array.offset_add_with_carry(4, 8, 1, true));
		assert_eq!(array.read_bits(4, 8), 2);
	}

	//		offset_sub
	#[test]
	fn offset_sub__wraps_in_field() {
		let mut array = bytes::<U1>(&[0xF0]);
		array.offset_sub(0, 4, 1);
		assert_eq!(array.as_slice(), &[0xFF]);
	}

	//		offset_sub_with_borrow
	#[test]
	fn offset_sub_with_borrow__reports_borrow() {
		let mut array = ByteArray::<U2>::new();
		array.write_bits(2, 12, 5);
		assert!(!array.offset_sub_with_borrow(2, 12, 5, false));
		assert_eq!(array.read_bits(2, 12), 0);
		assert!(array.offset_sub_with_borrow(2, 12, 0, true));
		assert_eq!(array.read_bits(2, 12), 0xFFF);
		assert!(!array.get_bit(14));
	}

	//		offset_add_from / offset_sub_from
	#[test]
	fn offset_add_from__other_buffer() {
		let mut other = ByteArray::<U2>::new();
		other.write_bits(4, 8, 200);
		let mut array = ByteArray::<U2>::new();
		array.write_bits(4, 8, 100);
		array.offset_add_from(&other, 4, 8, 4);
		assert_eq!(array.read_bits(4, 8), 44);
		assert!(!array.offset_add_from_with_carry(&other, 4, 8, 4, false));
		assert_eq!(array.read_bits(4, 8), 244);
		assert!(array.offset_add_from_with_carry(&other, 4, 8, 4, false));
		assert_eq!(array.read_bits(4, 8), 188);
	}
	#[test]
	fn offset_sub_from__other_buffer() {
		let mut other = ByteArray::<U2>::new();
		other.write_bits(0, 3, 5);
		let mut array = ByteArray::<U2>::new();
		array.write_bits(2, 12, 3);
		assert!(array.offset_sub_from_with_borrow(&other, 0, 3, 2, false));
		assert_eq!(array.read_bits(2, 3), 6);
		array.offset_sub_from(&other, 0, 3, 2);
		assert_eq!(array.read_bits(2, 3), 1);
	}
}

mod bit_copy {
	use super::*;

	//		copy_bits
	#[test]
	fn copy_bits__within_buffer() {
		let mut array = bytes::<U2>(&[0x0F, 0x00]);
		assert!(array.can_copy_bits(0, 6, 4));
		array.copy_bits(0, 6, 4);
		assert_eq!(array.as_slice(), &[0xCF, 0x03]);
	}
	#[test]
	fn copy_bits__overlapping() {
		let mut array = bytes::<U1>(&[0b0000_0111]);
		array.copy_bits(0, 1, 3);
		assert_eq!(array.as_slice(), &[0b0000_1111]);
	}
	#[test]
	fn copy_bits__out_of_range() {
		let array = ByteArray::<U2>::new();
		assert!(!array.can_copy_bits(10, 0, 8));
	}

	//		move_bits
	#[test]
	fn move_bits__clears_source() {
		let mut array = bytes::<U2>(&[0x0F, 0x00]);
		array.move_bits(0, 8, 4);
		assert_eq!(array.as_slice(), &[0x00, 0x0F]);
	}

	//		copy_bits_from
	#[test]
	fn copy_bits_from__unaligned() {
		let source    = bytes::<U2>(&[0xBC, 0x0A]);
		let mut array = ByteArray::<U2>::new();
		assert!(array.can_copy_bits_from(&source, 0, 2, 12));
		array.copy_bits_from(&source, 0, 2, 12);
		assert_eq!(array.read_bits(2, 12), 0xABC);
		assert!(!array.get_bit(0));
		assert!(!array.get_bit(15));
	}
}

mod traits {
	use super::*;

	//		clone / eq
	#[test]
	fn clone__independent_copy() {
		let original = bytes::<U2>(&[1, 2]);
		let mut copy = original.clone();
		copy[0]      = 9;
		assert_eq!(original.as_slice(), &[1, 2]);
		assert_ne!(original, copy);
	}

	//		debug
	#[test]
	fn debug__lists_bytes() {
		assert_eq!(format!("{:?}", bytes::<U2>(&[1, 2])), s!("ByteArray([1, 2])"));
	}

	//		default
	#[test]
	fn default__zeroed() {
		assert_eq!(ByteArray::<U2>::default(), ByteArray::<U2>::new());
	}
}

mod default_methods {
	use super::*;

	//	Byte slices use the default trait methods, which ByteArray overrides

	//		read_bits / write_bits
	#[test]
	fn read_write_bits__match_override() {
		let mut raw   = [0_u8; 9];
		let mut array = ByteArray::<U9>::new();
		BitAccess::write_bits(&mut raw[..], 5, 60, 0x0ABC_DEF0_1234_5678);
		array.write_bits(5, 60, 0x0ABC_DEF0_1234_5678);
		assert_eq!(&raw[..], array.as_slice());
		assert_eq!(BitAccess::read_bits(&raw[..], 9, 33), array.read_bits(9, 33));
	}

	//		shift_left / shift_right
	#[test]
	fn shifts__match_override() {
		for n in 0..=20 {
			let mut raw   = [0x81_u8, 0x7E];
			let mut array = bytes::<U2>(&raw);
			BitManipulation::shift_left(&mut raw[..], n);
			array.shift_left(n);
			assert_eq!(&raw[..], array.as_slice(), "shift_left by {n}");

			let mut raw   = [0x81_u8, 0x7E];
			let mut array = bytes::<U2>(&raw);
			BitManipulation::shift_right(&mut raw[..], n);
			array.shift_right(n);
			assert_eq!(&raw[..], array.as_slice(), "shift_right by {n}");
		}
	}

	//		rotate_left / rotate_right
	#[test]
	fn rotations__match_override() {
		for n in 0..=17 {
			let mut raw   = [0x12_u8, 0x34];
			let mut array = bytes::<U2>(&raw);
			BitManipulation::rotate_left(&mut raw[..], n);
			array.rotate_left(n);
			assert_eq!(&raw[..], array.as_slice(), "rotate_left by {n}");

			BitManipulation::rotate_right(&mut raw[..], n);
			array.rotate_right(n);
			assert_eq!(&raw[..], &[0x12, 0x34], "rotate_right by {n}");
			assert_eq!(array.as_slice(), &[0x12, 0x34]);
		}
	}

	//		reverse_bits
	#[test]
	fn reverse_bits__matches_override() {
		let mut raw   = [0x12_u8, 0x34, 0x56];
		let mut array = ByteArray::<typenum::U3>::from_slice(&raw).unwrap();
		BitManipulation::reverse_bits(&mut raw[..]);
		array.reverse_bits();
		assert_eq!(&raw[..], array.as_slice());
	}

	//		compute_crc32 / compute_hash
	#[test]
	fn checksums__match_override() {
		let array = bytes::<U9>(b"123456789");
		assert_eq!(array.as_slice().compute_crc32(), array.compute_crc32());
		assert_eq!(array.as_slice().compute_hash(), array.compute_hash());
	}

	//		find_byte_pattern
	#[test]
	fn find_byte_pattern__matches_override() {
		let array = bytes::<U4>(&[1, 2, 3, 4]);
		assert_eq!(array.as_slice().find_byte_pattern(&[2, 3]), array.find_byte_pattern(&[2, 3]));
		assert_eq!(array.as_slice().find_byte_pattern(&[3, 2]), None);
	}

	//		pop_count / is_all_zeros / is_all_ones
	#[test]
	fn analysis__matches_override() {
		let array = bytes::<U2>(&[0xFF, 0x0F]);
		assert_eq!(BitAnalysis::pop_count(array.as_slice()), array.pop_count());
		assert_eq!(BitAnalysis::is_all_zeros(array.as_slice()), array.is_all_zeros());
		assert_eq!(BitAnalysis::is_all_ones(array.as_slice()), array.is_all_ones());
	}

	//		copy_bytes
	#[test]
	fn copy_bytes__matches_override() {
		let mut raw   = [1_u8, 2, 3, 4];
		let mut array = bytes::<U4>(&raw);
		ByteCopy::copy_bytes(&mut raw[..], 1, 0, 3);
		array.copy_bytes(1, 0, 3);
		assert_eq!(&raw[..], array.as_slice());
	}
}
