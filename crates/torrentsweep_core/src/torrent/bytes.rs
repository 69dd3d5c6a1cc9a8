use crate::torrent::{Result, SweepError};

/// Simple bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Look at the next byte without consuming it.
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.pos).copied()
	}

	/// Look at the next byte, failing at end of input.
	pub fn peek_required(&self) -> Result<u8> {
		self.peek().ok_or(SweepError::UnexpectedEof { at: self.pos })
	}

	/// Consume one byte, failing at end of input.
	pub fn next_byte(&mut self) -> Result<u8> {
		let byte = self.peek_required()?;
		self.pos += 1;
		Ok(byte)
	}

	/// Consume one byte and require it to equal `expected`.
	pub fn expect_byte(&mut self, expected: u8, reason: &'static str) -> Result<()> {
		let at = self.pos;
		if self.next_byte()? != expected {
			return Err(SweepError::MalformedInput { at, reason });
		}
		Ok(())
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(SweepError::UnexpectedEof { at: self.bytes.len() });
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a run of ASCII digits, stopping before the first other byte.
	pub fn read_digits(&mut self) -> &'a [u8] {
		let start = self.pos;
		let run = self.bytes[start..].iter().take_while(|byte| byte.is_ascii_digit()).count();
		self.pos += run;
		&self.bytes[start..self.pos]
	}
}
