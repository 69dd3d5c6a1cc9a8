use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::torrent::compression::decode_bytes;
use crate::torrent::{Compression, DecodeOptions, Manifest, Result, SweepError, Value, decode_prefix};

/// A manifest file read from disk and decoded.
#[derive(Debug, Clone)]
pub struct TorrentFile {
	/// Source path.
	pub path: PathBuf,
	/// Compression mode detected for the source bytes.
	pub compression: Compression,
	/// Decoded top-level term.
	pub value: Value,
}

impl TorrentFile {
	/// Read, decompress, and decode a manifest with default options.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::open_with(path, &DecodeOptions::default())
	}

	/// Read, decompress, and decode a manifest.
	pub fn open_with(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path).map_err(|source| SweepError::io(path, source))?;
		let (compression, bytes) = decode_bytes(raw)?;
		let (value, consumed) = decode_prefix(&bytes, options)?;
		if consumed != bytes.len() {
			debug!(path = %path.display(), trailing = bytes.len() - consumed, "ignoring bytes after manifest term");
		}

		Ok(Self {
			path: path.to_path_buf(),
			compression,
			value,
		})
	}

	/// Interpret the decoded value as a manifest.
	pub fn manifest(&self) -> Result<Manifest> {
		Manifest::from_value(&self.value)
	}
}
