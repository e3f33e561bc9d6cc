// Copyright 2025 Irreducible Inc.

use crate::context::{Sha256, Sha256Digest};

/// Trait representing cryptographic hash functions which is generic over the input type.
///
/// This interface is largely based on the [`digest::Digest`] trait, except that instead of
/// requiring byte strings as input and byte arrays as output, this is generic over the input
/// values and has a less constrained output digest type.
pub trait Hasher<T> {
	/// The hash function output type.
	type Digest;

	fn new() -> Self;
	fn update(&mut self, data: impl AsRef<[T]>);
	fn chain_update(self, data: impl AsRef<[T]>) -> Self;
	fn finalize(self) -> Self::Digest;
	fn finalize_into(self, out: &mut Self::Digest);

	fn finalize_reset(&mut self) -> Self::Digest;
	fn finalize_into_reset(&mut self, out: &mut Self::Digest);
	fn reset(&mut self);
}

#[derive(Debug, thiserror::Error)]
pub enum HashError {
	#[error("Output buffer has the wrong length (expected {expected} bytes, got {actual} bytes)")]
	OutputLength { expected: usize, actual: usize },
	#[error("Legacy double hash reads {len} bytes from a {digest_len}-byte digest")]
	LegacyLengthOutOfBounds { len: usize, digest_len: usize },
}

pub fn hash<T, H: Hasher<T>>(data: impl AsRef<[T]>) -> H::Digest {
	H::new().chain_update(data).finalize()
}

impl Hasher<u8> for Sha256 {
	type Digest = Sha256Digest;

	fn new() -> Self {
		Sha256::new()
	}

	fn update(&mut self, data: impl AsRef<[u8]>) {
		Sha256::update(self, data.as_ref())
	}

	fn chain_update(self, data: impl AsRef<[u8]>) -> Self {
		Sha256::chain_update(self, data.as_ref())
	}

	fn finalize(self) -> Self::Digest {
		Sha256::finalize(self)
	}

	fn finalize_into(self, out: &mut Self::Digest) {
		Sha256::finalize_into(self, out)
	}

	fn finalize_reset(&mut self) -> Self::Digest {
		Sha256::finalize_reset(self)
	}

	fn finalize_into_reset(&mut self, out: &mut Self::Digest) {
		Sha256::finalize_into_reset(self, out)
	}

	fn reset(&mut self) {
		Sha256::reset(self)
	}
}
