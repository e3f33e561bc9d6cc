// Copyright 2025 Irreducible Inc.

use std::io;

use crate::context::Sha256;

impl io::Write for Sha256 {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.update(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}
