//! Checksums computed over storage bytes.

#![allow(
	clippy::arithmetic_side_effects,
	clippy::as_conversions,
	clippy::cast_possible_truncation,
	clippy::indexing_slicing,
	reason = "Table lookups are bounded by construction and truncation is deliberate"
)]


//		Constants

/// Reflected CRC-32 (ISO-HDLC) polynomial.
const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;

/// Lookup table for the byte-at-a-time CRC-32 update, built at compile time.
const CRC32_TABLE: [u32; 256] = {
	let mut table = [0_u32; 256];
	let mut i     = 0;
	while i < 256 {
		let mut crc = i as u32;
		let mut bit = 0;
		while bit < 8 {
			crc = if crc & 1 == 1 { (crc >> 1) ^ CRC32_POLYNOMIAL } else { crc >> 1 };
			bit += 1;
		}
		table[i] = crc;
		i       += 1;
	}
	table
};

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;

/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;



//		Structs

//		Crc32
/// Incremental CRC-32/ISO-HDLC state.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Crc32(u32);

//󰭅		Crc32
impl Crc32 {
	//		new
	/// Starts a new checksum.
	pub(crate) const fn new() -> Self {
		Self(0xFFFF_FFFF)
	}

	//		update
	/// Feeds one byte into the checksum.
	pub(crate) fn update(&mut self, byte: u8) {
		let index = usize::from((self.0 as u8) ^ byte);
		self.0    = CRC32_TABLE[index] ^ (self.0 >> 8_u32);
	}

	//		finish
	/// Returns the final checksum value.
	pub(crate) const fn finish(self) -> u32 {
		!self.0
	}
}

//		Fnv1a
/// Incremental 64-bit FNV-1a state.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a(u64);

//󰭅		Fnv1a
impl Fnv1a {
	//		new
	/// Starts a new hash.
	pub(crate) const fn new() -> Self {
		Self(FNV_OFFSET_BASIS)
	}

	//		update
	/// Feeds one byte into the hash.
	pub(crate) fn update(&mut self, byte: u8) {
		self.0 = (self.0 ^ u64::from(byte)).wrapping_mul(FNV_PRIME);
	}

	//		finish
	/// Returns the final hash value.
	pub(crate) const fn finish(self) -> u64 {
		self.0
	}
}
