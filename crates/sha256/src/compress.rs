// Copyright 2025 Irreducible Inc.

//! The SHA-256 block compression function, FIPS 180-4 section 6.2.2.

#![allow(clippy::needless_range_loop)]

use std::array;

use crate::{
	codec::decode_words_be,
	consts::{BLOCK_LEN, ROUNDS, ROUND_CONSTANTS, STATE_WORDS},
};

/// The chaining state of the hash.
pub type State = [u32; STATE_WORDS];

/// One input block.
pub type Block = [u8; BLOCK_LEN];

/// Per-stream working memory of the compression function.
///
/// Holds the message schedule and the rotating working registers. Contents carry no meaning
/// between calls; keeping it alongside a context only avoids re-initializing it per block.
#[derive(Clone)]
pub struct Scratch {
	schedule: [u32; ROUNDS],
	working: [u32; STATE_WORDS],
}

impl Default for Scratch {
	fn default() -> Self {
		Self {
			schedule: [0; ROUNDS],
			working: [0; STATE_WORDS],
		}
	}
}

#[inline(always)]
const fn ch(x: u32, y: u32, z: u32) -> u32 {
	(x & (y ^ z)) ^ z
}

#[inline(always)]
const fn maj(x: u32, y: u32, z: u32) -> u32 {
	(x & (y | z)) | (y & z)
}

#[inline(always)]
const fn big_sigma0(x: u32) -> u32 {
	x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
const fn big_sigma1(x: u32) -> u32 {
	x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
const fn small_sigma0(x: u32) -> u32 {
	x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
const fn small_sigma1(x: u32) -> u32 {
	x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Index of the working register that plays `role` (0 for `a` through 7 for `h`) in `round`.
///
/// Every round the window slides back by one register, so the register written as `h` becomes
/// the next round's `a`, and the one written as `d` becomes the next round's `e`.
#[inline(always)]
const fn register(round: usize, role: usize) -> usize {
	(STATE_WORDS - round % STATE_WORDS + role) % STATE_WORDS
}

fn expand_schedule(schedule: &mut [u32; ROUNDS], block: &Block) {
	decode_words_be(&mut schedule[..16], block);
	for i in 16..ROUNDS {
		schedule[i] = small_sigma1(schedule[i - 2])
			.wrapping_add(schedule[i - 7])
			.wrapping_add(small_sigma0(schedule[i - 15]))
			.wrapping_add(schedule[i - 16]);
	}
}

/// Absorbs one block into `state`, using `scratch` for the schedule and working registers.
pub fn compress_with_scratch(state: &mut State, block: &Block, scratch: &mut Scratch) {
	let Scratch {
		schedule: w,
		working: s,
	} = scratch;

	expand_schedule(w, block);
	*s = *state;

	for i in 0..ROUNDS {
		let [a, b, c, d, e, f, g, h]: [usize; STATE_WORDS] = array::from_fn(|role| register(i, role));

		let t1 = s[h]
			.wrapping_add(big_sigma1(s[e]))
			.wrapping_add(ch(s[e], s[f], s[g]))
			.wrapping_add(ROUND_CONSTANTS[i])
			.wrapping_add(w[i]);
		s[d] = s[d].wrapping_add(t1);
		s[h] = t1
			.wrapping_add(big_sigma0(s[a]))
			.wrapping_add(maj(s[a], s[b], s[c]));
	}

	// ROUNDS is a multiple of the window size, so register roles are back in place.
	for (word, mixed) in state.iter_mut().zip(s.iter()) {
		*word = word.wrapping_add(*mixed);
	}
}

/// Absorbs a sequence of blocks into `state`.
pub fn compress_blocks(state: &mut State, blocks: &[Block], scratch: &mut Scratch) {
	for block in blocks {
		compress_with_scratch(state, block, scratch);
	}
}

/// Absorbs one block into `state` with freshly initialized scratch memory.
pub fn compress(state: &mut State, block: &Block) {
	compress_with_scratch(state, block, &mut Scratch::default());
}
