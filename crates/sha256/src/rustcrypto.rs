// Copyright 2025 Irreducible Inc.

//! [`digest`] trait implementations, making [`Sha256`] a [`digest::Digest`].

use digest::{
	consts::{U32, U64},
	core_api::BlockSizeUser,
	FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};

use crate::context::Sha256;

impl HashMarker for Sha256 {}

impl BlockSizeUser for Sha256 {
	type BlockSize = U64;
}

impl OutputSizeUser for Sha256 {
	type OutputSize = U32;
}

impl Update for Sha256 {
	#[inline]
	fn update(&mut self, data: &[u8]) {
		Sha256::update(self, data)
	}
}

impl FixedOutput for Sha256 {
	#[inline]
	fn finalize_into(self, out: &mut Output<Self>) {
		out.copy_from_slice(&Sha256::finalize(self));
	}
}

impl Reset for Sha256 {
	#[inline]
	fn reset(&mut self) {
		Sha256::reset(self)
	}
}

impl FixedOutputReset for Sha256 {
	#[inline]
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		out.copy_from_slice(&Sha256::finalize_reset(self));
	}
}
