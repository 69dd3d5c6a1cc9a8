use std::io::Read;

use serde::Serialize;

use crate::torrent::{Result, SweepError};

/// Upper bound on decompressed manifest size.
pub const MAX_DECOMPRESSED_BYTES: usize = 64 * 1024 * 1024;
/// zstd frame magic used by archived `.torrent.zst` manifests.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Compression {
	/// Raw bencode.
	None,
	/// zstd-compressed bencode.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Detect and strip compression, returning `(mode, decoded_bytes)`.
///
/// Anything without the zstd magic is passed through untouched; the decoder
/// reports whether it is valid bencode.
pub(crate) fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if raw.starts_with(&ZSTD_MAGIC) {
		let out = decode_zstd(&raw, MAX_DECOMPRESSED_BYTES)?;
		return Ok((Compression::Zstd, out));
	}

	Ok((Compression::None, raw))
}

fn decode_zstd(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw).map_err(|source| SweepError::io("<zstd stream>", source))?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf).map_err(|source| SweepError::io("<zstd stream>", source))?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(SweepError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}
