// Copyright 2025 Irreducible Inc.

//! Big-endian conversions between words and bytes.

#[inline]
pub const fn encode_u32_be(value: u32) -> [u8; 4] {
	value.to_be_bytes()
}

#[inline]
pub const fn decode_u32_be(bytes: [u8; 4]) -> u32 {
	u32::from_be_bytes(bytes)
}

#[inline]
pub const fn encode_u64_be(value: u64) -> [u8; 8] {
	value.to_be_bytes()
}

/// Encodes consecutive words into `dst`, four bytes per word.
///
/// ## Preconditions
///
/// * `dst.len()` must equal `4 * src.len()`
pub fn encode_words_be(dst: &mut [u8], src: &[u32]) {
	assert_eq!(dst.len(), src.len() * 4);

	for (chunk, word) in dst.chunks_exact_mut(4).zip(src) {
		chunk.copy_from_slice(&encode_u32_be(*word));
	}
}

/// Decodes consecutive big-endian words from `src` into `dst`.
///
/// ## Preconditions
///
/// * `src.len()` must equal `4 * dst.len()`
pub fn decode_words_be(dst: &mut [u32], src: &[u8]) {
	assert_eq!(src.len(), dst.len() * 4);

	let words: &[[u8; 4]] = bytemuck::cast_slice(src);
	for (word, bytes) in dst.iter_mut().zip(words) {
		*word = decode_u32_be(*bytes);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_scalar_byte_order() {
		assert_eq!(encode_u32_be(0x01020304), [1, 2, 3, 4]);
		assert_eq!(decode_u32_be([0xde, 0xad, 0xbe, 0xef]), 0xdeadbeef);
		assert_eq!(encode_u64_be(0x0102030405060708), [1, 2, 3, 4, 5, 6, 7, 8]);
		assert_eq!(encode_u64_be(1 << 32), [0, 0, 0, 1, 0, 0, 0, 0]);
	}

	#[test]
	fn test_words_decode_then_encode() {
		let bytes: [u8; 12] = [0, 0, 0, 1, 0x80, 0, 0, 0, 0xff, 0xee, 0xdd, 0xcc];
		let mut words = [0u32; 3];
		decode_words_be(&mut words, &bytes);
		assert_eq!(words, [1, 0x80000000, 0xffeeddcc]);

		let mut out = [0u8; 12];
		encode_words_be(&mut out, &words);
		assert_eq!(out, bytes);
	}

	#[test]
	#[should_panic]
	fn test_encode_words_length_mismatch() {
		let mut out = [0u8; 7];
		encode_words_be(&mut out, &[0, 0]);
	}
}
