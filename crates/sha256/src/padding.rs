// Copyright 2025 Irreducible Inc.

use tracing::trace;

use crate::{
	codec::encode_u64_be,
	compress::{compress_with_scratch, Block, Scratch, State},
	consts::{BLOCK_LEN, LENGTH_OFFSET},
};

/// Number of bytes buffered in a partial block after `bit_count` bits have been absorbed.
#[inline]
pub const fn pending_len(bit_count: u64) -> usize {
	((bit_count >> 3) % BLOCK_LEN as u64) as usize
}

/// Applies the Merkle–Damgård padding and absorbs the final block or blocks.
///
/// `buffer` holds the `pending_len(bit_count)` unabsorbed bytes at its start; its contents are
/// overwritten. On return `state` is the final chaining value of the message.
pub fn pad(state: &mut State, buffer: &mut Block, bit_count: u64, scratch: &mut Scratch) {
	let pending = pending_len(bit_count);

	buffer[pending] = 0x80;
	if pending < LENGTH_OFFSET {
		buffer[pending + 1..LENGTH_OFFSET].fill(0);
	} else {
		buffer[pending + 1..].fill(0);
		trace!(pending, "length trailer spills into an extra block");
		compress_with_scratch(state, buffer, scratch);
		buffer[..LENGTH_OFFSET].fill(0);
	}

	buffer[LENGTH_OFFSET..].copy_from_slice(&encode_u64_be(bit_count));
	compress_with_scratch(state, buffer, scratch);
}
