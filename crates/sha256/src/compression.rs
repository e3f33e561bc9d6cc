// Copyright 2025 Irreducible Inc.

use crate::{
	codec::{decode_words_be, encode_words_be},
	compress::{compress, Block, State},
	consts::{BLOCK_LEN, DIGEST_LEN, STATE_WORDS},
	context::Sha256Digest,
	oneshot::hash_buffer,
};

/// An `N`-to-1 compression function collision-resistant in a hash tree setting.
///
/// Unlike `CompressionFunction`, it may not be collision-resistant in general.
/// Instead it is only collision-resistant in hash-tree like settings where
/// the preimage of a non-leaf node must consist of compression outputs.
pub trait PseudoCompressionFunction<T, const N: usize>: Clone {
	fn compress(&self, input: [T; N]) -> T;
}

/// An `N`-to-1 compression function.
pub trait CompressionFunction<T, const N: usize>: PseudoCompressionFunction<T, N> {}

const DOMAIN_TAG: &[u8] = b"HASHKIT SHA-256 COMPRESS";

/// A two-to-one compression function for SHA-256 digests.
///
/// Runs a single compression transform over `left || right`, starting from a domain-separated
/// state rather than the standard initial value. No padding is applied.
#[derive(Debug, Clone)]
pub struct Sha256Compression {
	initial_state: State,
}

impl Sha256Compression {
	pub fn initial_state(&self) -> &State {
		&self.initial_state
	}
}

impl Default for Sha256Compression {
	fn default() -> Self {
		let mut initial_state = [0u32; STATE_WORDS];
		decode_words_be(&mut initial_state, &hash_buffer(DOMAIN_TAG));
		Self { initial_state }
	}
}

impl PseudoCompressionFunction<Sha256Digest, 2> for Sha256Compression {
	fn compress(&self, input: [Sha256Digest; 2]) -> Sha256Digest {
		let mut block: Block = [0; BLOCK_LEN];
		block[..DIGEST_LEN].copy_from_slice(&input[0]);
		block[DIGEST_LEN..].copy_from_slice(&input[1]);

		let mut state = self.initial_state;
		compress(&mut state, &block);

		let mut out = [0; DIGEST_LEN];
		encode_words_be(&mut out, &state);
		out
	}
}

impl CompressionFunction<Sha256Digest, 2> for Sha256Compression {}
