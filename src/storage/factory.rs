//! Type-level binding from a byte count to a concrete storage type.



//		Packages

use super::{array::ByteArray, Storage};
use core::ops::{Add, Div};
use generic_array::ArrayLength;
use typenum::{Quot, Sum as TnSum, Unsigned, U7, U8};



//		Type aliases

/// Helper type to calculate the number of bytes needed for a window of
/// `BITS` bits starting at bit `OFFSET`.
pub type BytesForWindow<BITS, OFFSET> = Quot<TnSum<TnSum<BITS, OFFSET>, U7>, U8>;



//		Traits

//		StorageFactory
/// Binds a byte count to a concrete storage type.
///
/// The factory is stateless, and exists purely at the type level. Integer
/// types take it as a type parameter, which lets them be written once and
/// instantiated against any conforming backend.
///
pub trait StorageFactory {
	/// The storage type holding `N` bytes.
	type Storage<N: ArrayLength>: Storage;

	//		create
	/// Creates a zero-initialised buffer of `N` bytes.
	fn create<N: ArrayLength>() -> Self::Storage<N>;
}

//		BitWindow
/// A window of `Self` bits starting at bit `OFFSET`, and the number of bytes
/// needed to hold it.
///
/// This is implemented for every pair of [`typenum`] unsigned integers whose
/// byte count can be computed, so it never needs implementing by hand. It
/// exists to collapse the arithmetic bounds into a single one.
///
pub trait BitWindow<OFFSET>: Unsigned {
	/// The number of bytes needed, i.e. `ceil((Self + OFFSET) / 8)`.
	type Bytes: ArrayLength;
}

//󰭅		BitWindow
impl<BITS, OFFSET> BitWindow<OFFSET> for BITS
where
	BITS:                           Unsigned + Add<OFFSET>,
	TnSum<BITS, OFFSET>:            Add<U7>,
	TnSum<TnSum<BITS, OFFSET>, U7>: Div<U8>,
	BytesForWindow<BITS, OFFSET>:   ArrayLength,
{
	type Bytes = BytesForWindow<BITS, OFFSET>;
}



//		Structs

//		ArrayStorageFactory
/// The default factory, binding every size to [`ByteArray`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ArrayStorageFactory;

//󰭅		StorageFactory
impl StorageFactory for ArrayStorageFactory {
	type Storage<N: ArrayLength> = ByteArray<N>;

	//		create
	fn create<N: ArrayLength>() -> Self::Storage<N> {
		ByteArray::new()
	}
}
