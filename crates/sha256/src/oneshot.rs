// Copyright 2025 Irreducible Inc.

use tracing::instrument;

#[cfg(feature = "legacy_double_hash")]
use crate::{consts::DIGEST_LEN, hasher::HashError};
use crate::context::{Sha256, Sha256Digest};

/// Computes the SHA-256 digest of `data`.
#[instrument("sha256::hash_buffer", skip_all, level = "trace", fields(len = data.len()))]
pub fn hash_buffer(data: &[u8]) -> Sha256Digest {
	Sha256::new().chain_update(data).finalize()
}

/// Computes `SHA-256(SHA-256(data))`, the second pass hashing the 32-byte inner digest.
#[instrument("sha256::double_hash", skip_all, level = "trace", fields(len = data.len()))]
pub fn double_hash(data: &[u8]) -> Sha256Digest {
	let mut hasher = Sha256::new().chain_update(data);
	let inner = hasher.finalize_reset();
	hasher.chain_update(&inner).finalize()
}

/// Double hash whose second pass hashes the first `data.len()` bytes of the inner digest.
///
/// Reproduces digests produced by implementations that pass the message length to the second
/// pass. Messages longer than a digest have no such prefix and are rejected.
#[cfg(feature = "legacy_double_hash")]
#[instrument("sha256::double_hash_legacy", skip_all, level = "trace", fields(len = data.len()))]
pub fn double_hash_legacy(data: &[u8]) -> Result<Sha256Digest, HashError> {
	if data.len() > DIGEST_LEN {
		return Err(HashError::LegacyLengthOutOfBounds {
			len: data.len(),
			digest_len: DIGEST_LEN,
		});
	}

	let inner = hash_buffer(data);
	Ok(hash_buffer(&inner[..data.len()]))
}
