// Copyright 2025 Irreducible Inc.

use std::fmt;

use crate::{
	codec::encode_words_be,
	compress::{compress_blocks, compress_with_scratch, Block, Scratch, State},
	consts::{BLOCK_LEN, DIGEST_LEN, INITIAL_STATE},
	hasher::HashError,
	padding::{pad, pending_len},
};

/// A SHA-256 digest.
pub type Sha256Digest = [u8; DIGEST_LEN];

/// The layout of a [`Sha256`] context.
///
/// `buffer` holds `(bit_count >> 3) % 64` meaningful bytes at its start; the rest is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sha256Parts {
	pub state: State,
	pub buffer: Block,
	pub bit_count: u64,
}

/// Streaming SHA-256 hasher.
///
/// The bit counter wraps modulo 2^64, so digests of messages of 2^61 bytes or more are those of
/// the message length taken modulo 2^64 bits.
#[derive(Clone)]
pub struct Sha256 {
	state: State,
	buffer: Block,
	bit_count: u64,
	scratch: Scratch,
}

impl Sha256 {
	/// Creates a context holding the initial state and an empty message.
	pub fn new() -> Self {
		Self::from_parts(Sha256Parts {
			state: INITIAL_STATE,
			buffer: [0; BLOCK_LEN],
			bit_count: 0,
		})
	}

	pub fn from_parts(parts: Sha256Parts) -> Self {
		let Sha256Parts {
			state,
			buffer,
			bit_count,
		} = parts;
		Self {
			state,
			buffer,
			bit_count,
			scratch: Scratch::default(),
		}
	}

	pub fn into_parts(self) -> Sha256Parts {
		Sha256Parts {
			state: self.state,
			buffer: self.buffer,
			bit_count: self.bit_count,
		}
	}

	/// Restores the initial state, discarding everything absorbed so far.
	pub fn init(&mut self) {
		self.state = INITIAL_STATE;
		self.buffer = [0; BLOCK_LEN];
		self.bit_count = 0;
	}

	pub fn reset(&mut self) {
		self.init();
	}

	pub fn state(&self) -> &State {
		&self.state
	}

	/// Number of bits absorbed since the last initialization, modulo 2^64.
	pub fn bit_count(&self) -> u64 {
		self.bit_count
	}

	/// The bytes buffered towards the next, still incomplete, block.
	pub fn pending(&self) -> &[u8] {
		&self.buffer[..pending_len(self.bit_count)]
	}

	/// Appends `data` to the message.
	///
	/// The digest depends only on the concatenation of all updates, never on how the input was
	/// split across calls. Complete blocks are compressed straight from `data`; fewer than
	/// [`BLOCK_LEN`] trailing bytes stay buffered. The bit count grows by `8 * data.len()`
	/// modulo 2^64.
	pub fn update(&mut self, data: &[u8]) {
		if data.is_empty() {
			return;
		}

		let pending = pending_len(self.bit_count);
		self.bit_count = self
			.bit_count
			.wrapping_add((data.len() as u64).wrapping_mul(8));

		if data.len() < BLOCK_LEN - pending {
			self.buffer[pending..pending + data.len()].copy_from_slice(data);
			return;
		}

		// Complete the buffered block first
		let (head, rest) = data.split_at(BLOCK_LEN - pending);
		self.buffer[pending..].copy_from_slice(head);
		compress_with_scratch(&mut self.state, &self.buffer, &mut self.scratch);

		// Full blocks are absorbed straight from the input
		let (body, tail) = rest.split_at(rest.len() - rest.len() % BLOCK_LEN);
		compress_blocks(&mut self.state, bytemuck::cast_slice(body), &mut self.scratch);

		self.buffer[..tail.len()].copy_from_slice(tail);
	}

	pub fn chain_update(mut self, data: &[u8]) -> Self {
		self.update(data);
		self
	}

	fn finalize_core(&mut self, out: &mut Sha256Digest) {
		pad(&mut self.state, &mut self.buffer, self.bit_count, &mut self.scratch);
		encode_words_be(out, &self.state);
	}

	/// Pads the message and returns its digest, consuming the context.
	pub fn finalize(mut self) -> Sha256Digest {
		let mut out = [0; DIGEST_LEN];
		self.finalize_core(&mut out);
		out
	}

	pub fn finalize_into(mut self, out: &mut Sha256Digest) {
		self.finalize_core(out);
	}

	/// Writes the digest into `out`, which must be exactly [`DIGEST_LEN`] bytes long.
	pub fn finalize_into_slice(self, out: &mut [u8]) -> Result<(), HashError> {
		let actual = out.len();
		let out: &mut Sha256Digest = out.try_into().map_err(|_| HashError::OutputLength {
			expected: DIGEST_LEN,
			actual,
		})?;
		self.finalize_into(out);
		Ok(())
	}

	/// Returns the digest of the message so far, then re-initializes the context.
	pub fn finalize_reset(&mut self) -> Sha256Digest {
		let mut out = [0; DIGEST_LEN];
		self.finalize_into_reset(&mut out);
		out
	}

	pub fn finalize_into_reset(&mut self, out: &mut Sha256Digest) {
		self.finalize_core(out);
		self.init();
	}
}

impl Default for Sha256 {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Sha256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Sha256 { ... }")
	}
}

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;

	const ABC: Sha256Digest = hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");

	#[test]
	fn test_buffer_only_update_leaves_state() {
		let mut hasher = Sha256::new();
		hasher.update(&[7u8; 63]);
		assert_eq!(hasher.state(), &INITIAL_STATE);
		assert_eq!(hasher.pending(), &[7u8; 63]);
		assert_eq!(hasher.bit_count(), 63 * 8);

		hasher.update(&[7u8]);
		assert_ne!(hasher.state(), &INITIAL_STATE);
		assert!(hasher.pending().is_empty());
	}

	#[test]
	fn test_empty_update_is_noop() {
		let mut hasher = Sha256::new().chain_update(b"ab");
		let before = hasher.clone().into_parts();
		hasher.update(&[]);
		assert_eq!(hasher.clone().into_parts(), before);
		hasher.update(b"c");
		assert_eq!(hasher.finalize(), ABC);
	}

	#[test]
	fn test_chunking_independence() {
		let data: Vec<u8> = (0..300u32).map(|i| (i * 7 + 3) as u8).collect();
		let expected = Sha256::new().chain_update(&data).finalize();

		for chunk_len in [1, 3, 55, 56, 63, 64, 65, 128, 299] {
			let mut hasher = Sha256::new();
			for chunk in data.chunks(chunk_len) {
				hasher.update(chunk);
			}
			assert_eq!(hasher.finalize(), expected, "chunk_len = {chunk_len}");
		}
	}

	#[test]
	fn test_finalize_reset_reuses_context() {
		let mut hasher = Sha256::new();
		hasher.update(b"some earlier message that spans more than one block of input bytes!!");
		let _ = hasher.finalize_reset();
		assert_eq!(hasher.bit_count(), 0);
		hasher.update(b"abc");
		assert_eq!(hasher.finalize_reset(), ABC);
		hasher.update(b"abc");
		assert_eq!(hasher.finalize(), ABC);
	}

	#[test]
	fn test_parts_resume() {
		let first = Sha256::new().chain_update(b"a").into_parts();
		let digest = Sha256::from_parts(first).chain_update(b"bc").finalize();
		assert_eq!(digest, ABC);
	}

	#[test]
	fn test_bit_count_wraps() {
		let mut hasher = Sha256::from_parts(Sha256Parts {
			state: INITIAL_STATE,
			buffer: [0; BLOCK_LEN],
			bit_count: u64::MAX - 7,
		});
		assert_eq!(hasher.pending().len(), 63);
		hasher.update(&[1, 2]);
		assert_eq!(hasher.bit_count(), 8);
		assert_eq!(hasher.pending(), &[2]);
	}

	#[test]
	fn test_finalize_into_slice_length() {
		let mut out = [0u8; 31];
		assert!(matches!(
			Sha256::new().finalize_into_slice(&mut out),
			Err(HashError::OutputLength {
				expected: 32,
				actual: 31
			})
		));

		let mut out = [0u8; 32];
		Sha256::new()
			.chain_update(b"abc")
			.finalize_into_slice(&mut out)
			.unwrap();
		assert_eq!(out, ABC);
	}
}
