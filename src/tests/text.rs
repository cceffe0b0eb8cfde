//		Packages

use super::*;
use crate::{ArbitrarySignedInt, ArbitraryUnsignedInt};
use claims::{assert_err_eq, assert_ok_eq};
use proptest::prelude::*;
use rubedo::sugar::s;
use typenum::{U1, U2, U3, U4, U8, U12, U200, U256};



//		Types

type U8At4   = ArbitraryUnsignedInt<U8, U4>;
type U12At2  = ArbitraryUnsignedInt<U12, U2>;
type U200At3 = ArbitraryUnsignedInt<U200, U3>;
type U256At1 = ArbitraryUnsignedInt<U256, U1>;
type I8      = ArbitrarySignedInt<U8>;
type I12At2  = ArbitrarySignedInt<U12, U2>;
type I256At1 = ArbitrarySignedInt<U256, U1>;



//		Constants

const U256_MAX: &str = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
const I256_MIN: &str = "-57896044618658097711785492504343953926634992332820282019728792003956564819968";



//		Tests

mod display {
	use super::*;

	//		fmt
	#[test]
	fn fmt__unsigned() {
		assert_eq!(U8At4::try_from(214_u8).unwrap().to_string(), s!("214"));
		assert_eq!(U12At2::zero().to_string(), s!("0"));
		assert_eq!(U12At2::max_value().to_string(), s!("4095"));
	}
	#[test]
	fn fmt__signed() {
		assert_eq!(I8::min_value().to_string(), s!("-128"));
		assert_eq!(I8::max_value().to_string(), s!("127"));
		assert_eq!(I12At2::try_from(-7).unwrap().to_string(), s!("-7"));
	}
	#[test]
	fn fmt__flags() {
		let value = I12At2::try_from(-42).unwrap();
		assert_eq!(format!("{value:>6}"),  s!("   -42"));
		assert_eq!(format!("{value:<6}|"), s!("-42   |"));
		assert_eq!(format!("{value:06}"),  s!("-00042"));
		assert_eq!(format!("{:+}", I12At2::try_from(42).unwrap()), s!("+42"));
	}
	#[test]
	fn fmt__debug_matches_display() {
		assert_eq!(format!("{:?}", I8::min_value()), s!("-128"));
	}
	#[test]
	fn fmt__wide() {
		assert_eq!(U256At1::max_value().to_string(), U256_MAX);
		assert_eq!(I256At1::min_value().to_string(), I256_MIN);
		assert_eq!((U256At1::one() << 128).to_string(), s!("340282366920938463463374607431768211456"));
		assert_eq!(U256At1::try_from(u128::MAX).unwrap().to_string(), u128::MAX.to_string());
	}
}

mod radix_formats {
	use super::*;

	//		Binary
	#[test]
	fn binary__bit_pattern() {
		assert_eq!(format!("{:b}", I8::try_from(-1).unwrap()), s!("11111111"));
		assert_eq!(format!("{:#b}", U12At2::try_from(5).unwrap()), s!("0b101"));
		assert_eq!(format!("{:#014b}", U12At2::try_from(5).unwrap()), s!("0b000000000101"));
		assert_eq!(format!("{:b}", U200At3::max_value()), "1".repeat(200));
	}

	//		Octal
	#[test]
	fn octal__bit_pattern() {
		assert_eq!(format!("{:o}", U12At2::max_value()), s!("7777"));
		assert_eq!(format!("{:#o}", U12At2::try_from(8).unwrap()), s!("0o10"));
		assert_eq!(format!("{:o}", U200At3::max_value()), format!("3{}", "7".repeat(66)));
	}

	//		LowerHex / UpperHex
	#[test]
	fn hex__bit_pattern() {
		assert_eq!(format!("{:x}", U12At2::try_from(0xABC).unwrap()), s!("abc"));
		assert_eq!(format!("{:#X}", U12At2::try_from(0xABC).unwrap()), s!("0xABC"));
		assert_eq!(format!("{:x}", I12At2::try_from(-1).unwrap()), s!("fff"));
		assert_eq!(format!("{:x}", U256At1::max_value()), "f".repeat(64));
		assert_eq!(format!("{:x}", U256At1::one() << 200), format!("1{}", "0".repeat(50)));
	}

	//		to_str_radix
	#[test]
	fn to_str_radix__bases() {
		assert_ok_eq!(U12At2::try_from(1295).unwrap().to_str_radix(36), s!("zz"));
		assert_ok_eq!(I12At2::try_from(-1295).unwrap().to_str_radix(36), s!("-zz"));
		assert_ok_eq!(U12At2::zero().to_str_radix(7), s!("0"));
		assert_ok_eq!(U200At3::try_from(48_u8).unwrap().to_str_radix(7), s!("66"));
		assert_err_eq!(U12At2::zero().to_str_radix(1), ConversionError::UnsupportedRadix(1));
		assert_err_eq!(U12At2::zero().to_str_radix(37), ConversionError::UnsupportedRadix(37));
	}
}

mod parsing {
	use super::*;

	//		from_str
	#[test]
	fn from_str__decimal() {
		assert_ok_eq!("214".parse::<U8At4>(), U8At4::try_from(214_u8).unwrap());
		assert_ok_eq!("  +42  ".parse::<I8>(), I8::try_from(42).unwrap());
		assert_ok_eq!("-128".parse::<I8>(), I8::min_value());
		assert_ok_eq!("1_000".parse::<U12At2>(), U12At2::try_from(1000).unwrap());
	}
	#[test]
	fn from_str__prefixes() {
		assert_ok_eq!("0xABC".parse::<U12At2>(), U12At2::try_from(0xABC).unwrap());
		assert_ok_eq!("0Xabc".parse::<U12At2>(), U12At2::try_from(0xABC).unwrap());
		assert_ok_eq!("0b101".parse::<U12At2>(), U12At2::try_from(5).unwrap());
		assert_ok_eq!("0o777".parse::<U12At2>(), U12At2::try_from(511).unwrap());
		assert_ok_eq!("-0x10".parse::<I8>(), I8::try_from(-16).unwrap());
	}
	#[test]
	fn from_str__empty() {
		assert_err_eq!("".parse::<U12At2>(),    ConversionError::EmptyValue);
		assert_err_eq!("   ".parse::<U12At2>(), ConversionError::EmptyValue);
		assert_err_eq!("-".parse::<I8>(),       ConversionError::EmptyValue);
		assert_err_eq!("0x".parse::<U12At2>(),  ConversionError::EmptyValue);
		assert_err_eq!("_".parse::<U12At2>(),   ConversionError::EmptyValue);
	}
	#[test]
	fn from_str__invalid_digits() {
		assert_err_eq!("12a".parse::<U12At2>(),  ConversionError::InvalidRadix('a', 10));
		assert_err_eq!("0b102".parse::<U12At2>(), ConversionError::InvalidRadix('2', 2));
		assert_err_eq!("1.5".parse::<U12At2>(),  ConversionError::InvalidDigit('.'));
		assert_err_eq!("--1".parse::<I8>(),      ConversionError::InvalidDigit('-'));
	}
	#[test]
	fn from_str__out_of_range() {
		assert_err_eq!("-5".parse::<U12At2>(),  ConversionError::ValueIsNegative);
		assert_err_eq!("256".parse::<U8At4>(),  ConversionError::ValueTooLarge);
		assert_err_eq!("4096".parse::<U12At2>(), ConversionError::ValueTooLarge);
		assert_err_eq!("128".parse::<I8>(),     ConversionError::ValueTooLarge);
		assert_err_eq!("-129".parse::<I8>(),    ConversionError::ValueTooSmall);
		assert_err_eq!("-99999".parse::<I8>(),  ConversionError::ValueTooSmall);
	}
	#[test]
	fn from_str__wide() {
		assert_ok_eq!(U256_MAX.parse::<U256At1>(), U256At1::max_value());
		assert_ok_eq!(I256_MIN.parse::<I256At1>(), I256At1::min_value());
		assert_err_eq!(
			"115792089237316195423570985008687907853269984665640564039457584007913129639936".parse::<U256At1>(),
			ConversionError::ValueTooLarge
		);
		assert_err_eq!(
			"-57896044618658097711785492504343953926634992332820282019728792003956564819969".parse::<I256At1>(),
			ConversionError::ValueTooSmall
		);
	}

	//		from_str_radix
	#[test]
	fn from_str_radix__bases() {
		assert_ok_eq!(U12At2::from_str_radix("zz", 36), U12At2::try_from(1295).unwrap());
		assert_ok_eq!(I12At2::from_str_radix("-ZZ", 36), I12At2::try_from(-1295).unwrap());
		assert_ok_eq!(U12At2::from_str_radix("777", 8), U12At2::try_from(511).unwrap());
	}
	#[test]
	fn from_str_radix__no_prefix() {
		assert_err_eq!(U12At2::from_str_radix("0x10", 16), ConversionError::InvalidRadix('x', 16));
	}
	#[test]
	fn from_str_radix__unsupported() {
		assert_err_eq!(U12At2::from_str_radix("1", 1),  ConversionError::UnsupportedRadix(1));
		assert_err_eq!(U12At2::from_str_radix("1", 37), ConversionError::UnsupportedRadix(37));
	}
	#[test]
	fn from_str_radix__error_messages() {
		let err = U12At2::from_str_radix("4096", 10).unwrap_err();
		assert_eq!(err.to_string(), s!("Value too large"));
	}
}

mod properties {
	use super::*;

	type I200At3 = ArbitrarySignedInt<U200, U3>;

	proptest! {
		#![proptest_config(ProptestConfig::with_cases(128))]

		#[test]
		fn wide_unsigned__matches_u128(value in any::<u128>()) {
			let wide = U200At3::try_from(value).unwrap();
			prop_assert_eq!(wide.to_string(), value.to_string());
			prop_assert_eq!(format!("{wide:x}"), format!("{value:x}"));
			prop_assert_eq!(format!("{wide:o}"), format!("{value:o}"));
			prop_assert_eq!(format!("{wide:b}"), format!("{value:b}"));
			prop_assert_eq!(wide.to_str_radix(36).unwrap(), radix36(value));
			prop_assert_eq!(U200At3::from_str_radix(&radix36(value), 36).unwrap(), wide);
		}

		#[test]
		fn wide_signed__matches_i128(value in any::<i128>()) {
			let wide = I200At3::from_i128_wrapping(value);
			let text = value.to_string();
			prop_assert_eq!(wide.to_string(), text.clone());
			prop_assert_eq!(text.parse::<I200At3>().unwrap(), wide);
		}

		#[test]
		fn narrow_signed__matches_i8(value in any::<i8>()) {
			let narrow = I8::try_from(value).unwrap();
			prop_assert_eq!(narrow.to_string(), value.to_string());
			prop_assert_eq!(format!("{narrow:x}"), format!("{value:x}"));
			prop_assert_eq!(value.to_string().parse::<I8>().unwrap(), narrow);
		}
	}

	/// Formats a value in base 36 the long way.
	fn radix36(value: u128) -> String {
		if value == 0 {
			return s!("0");
		}
		let mut digits = Vec::new();
		let mut rest   = value;
		while rest > 0 {
			digits.push(char::from_digit((rest % 36) as u32, 36).unwrap());
			rest /= 36;
		}
		digits.iter().rev().collect()
	}
}
