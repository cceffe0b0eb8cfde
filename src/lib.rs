//! The Bitwindow crate is a library of fixed-width integers of any number of
//! bits, stored at any bit offset within a byte buffer.
//!
//! An integer is described entirely at the type level: its width, its
//! signedness, the bit offset of its least-significant bit, and the factory
//! that produces its backing store. For instance, `ArbitraryUnsignedInt<U12,
//! U2>` is a 12-bit unsigned value occupying bits 2 to 13 of a two-byte
//! buffer. Arithmetic follows the standard library integer types, including
//! two's complement for signed values and wrapping operators, with checked,
//! wrapping, saturating, and overflowing variants.
//!
//! The storage layer is split into eight capability traits, which the
//! integers use for all of their bit work. [`ByteArray`] is the reference
//! backend, and alternative backends plug in through [`StorageFactory`].



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::as_conversions,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::integer_division,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::unreadable_literal,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod errors;
mod int;
pub mod storage;



//		Packages

pub use errors::ConversionError;
pub use int::{ArbitraryInt, ArbitrarySignedInt, ArbitraryUnsignedInt, WindowBytes, WindowStorage};
pub use storage::{ArrayStorageFactory, ByteArray, Storage, StorageFactory};
