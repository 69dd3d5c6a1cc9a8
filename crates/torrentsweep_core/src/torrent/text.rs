use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

use crate::torrent::{Result, SweepError};

/// Resolve a manifest `encoding` label (WHATWG label rules, case-insensitive).
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
	Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| SweepError::UnknownEncoding { label: label.to_owned() })
}

/// Decodes raw string payloads under one text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCodec {
	encoding: &'static Encoding,
}

impl Default for TextCodec {
	fn default() -> Self {
		Self::new(UTF_8)
	}
}

impl TextCodec {
	/// Codec for an already-resolved encoding.
	pub fn new(encoding: &'static Encoding) -> Self {
		Self { encoding }
	}

	/// Codec for a manifest `encoding` label.
	pub fn from_label(label: &str) -> Result<Self> {
		resolve_encoding(label).map(Self::new)
	}

	/// Canonical encoding name.
	pub fn name(&self) -> &'static str {
		self.encoding.name()
	}

	/// Decode `bytes`, replacing malformed sequences. A BOM is treated as content.
	pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
		self.encoding.decode_without_bom_handling(bytes).0
	}

	/// True when `bytes` decode without replacement characters.
	pub fn is_clean(&self, bytes: &[u8]) -> bool {
		!self.encoding.decode_without_bom_handling(bytes).1
	}
}
