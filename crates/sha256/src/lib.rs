// Copyright 2025 Irreducible Inc.

//! SHA-256 (FIPS 180-4) with a streaming context, one-shot helpers and a double hash.

pub mod codec;
pub mod compress;
pub mod compression;
pub mod consts;
pub mod context;
pub mod hasher;
mod io;
pub mod oneshot;
pub mod padding;
mod rustcrypto;

pub use compression::*;
pub use consts::{BLOCK_LEN, DIGEST_LEN};
pub use context::*;
pub use digest::{self, Digest};
pub use hasher::*;
pub use oneshot::*;
