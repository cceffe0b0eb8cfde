//! Bit- and byte-addressable storage.
//!
//! The storage contract is split into eight capabilities, each a trait:
//!
//!   - [`ByteAccess`]       - indexed byte access, fill, and size.
//!   - [`ByteAnalysis`]     - searching, comparison, and checksums.
//!   - [`ByteManipulation`] - byte reordering, shifting, and boolean ops.
//!   - [`ByteCopy`]         - byte copies within and between buffers.
//!   - [`BitAccess`]        - single-bit and bit-field access.
//!   - [`BitAnalysis`]      - bit counting, searching, and predicates.
//!   - [`BitManipulation`]  - shifts, rotation, and offset arithmetic.
//!   - [`BitCopy`]          - bit copies within and between buffers.
//!
//! [`Storage`] bundles them all together, and is what the integer types
//! require of their backing store. [`ByteArray`] is the reference
//! implementation, and [`StorageFactory`] binds a byte count to a concrete
//! storage type so that the integer types stay generic over the backend.



//		Modules

mod array;
mod bit;
mod byte;
mod checksum;
mod factory;



//		Packages

pub use array::ByteArray;
pub use bit::{BitAccess, BitAnalysis, BitCopy, BitManipulation};
pub use byte::{ByteAccess, ByteAnalysis, ByteCopy, ByteManipulation};
pub use factory::{ArrayStorageFactory, BitWindow, BytesForWindow, StorageFactory};



//		Traits

//		Storage
/// A backing store implementing every storage capability.
///
/// This is implemented automatically for any type providing all eight
/// capabilities plus [`Clone`].
///
pub trait Storage:
	Clone
	+ BitAccess
	+ BitAnalysis
	+ BitCopy
	+ BitManipulation
	+ ByteAccess
	+ ByteAnalysis
	+ ByteCopy
	+ ByteManipulation
{}

//󰭅		Storage
impl<T> Storage for T
where
	T: Clone + BitAccess + BitAnalysis + BitCopy + BitManipulation + ByteAnalysis + ByteCopy + ByteManipulation,
{}
