use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SweepError>;

/// Errors produced while reading, decoding, and interpreting torrent manifests.
#[derive(Debug, Error)]
pub enum SweepError {
	/// Filesystem failure with the path it concerned.
	#[error("io at {}: {source}", path.display())]
	Io {
		/// Path being read, listed, or removed.
		path: PathBuf,
		/// Underlying IO error.
		#[source]
		source: std::io::Error,
	},
	/// Bencode grammar violation.
	#[error("malformed input at offset {at}: {reason}")]
	MalformedInput {
		/// Byte offset of the offending byte.
		at: usize,
		/// Short description of the violated rule.
		reason: &'static str,
	},
	/// Input ended in the middle of a term.
	#[error("unexpected end of input at offset {at}")]
	UnexpectedEof {
		/// Byte offset where more input was required.
		at: usize,
	},
	/// Dictionary repeated a key while the reject policy was active.
	#[error("duplicate dictionary key {key:?} at offset {at}")]
	DuplicateKey {
		/// Byte offset of the repeated key.
		at: usize,
		/// Lossy text rendering of the key.
		key: String,
	},
	/// Nesting exceeded the configured decode depth.
	#[error("decode depth exceeded (max={max_depth})")]
	TooDeeplyNested {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Manifest lacks a required field or it has the wrong shape.
	#[error("manifest field {field} missing or not a {expected}")]
	MissingField {
		/// Dotted field name.
		field: &'static str,
		/// Expected value kind.
		expected: &'static str,
	},
	/// Manifest declared a text encoding that is not known.
	#[error("unknown text encoding {label:?}")]
	UnknownEncoding {
		/// Label as written in the manifest.
		label: String,
	},
	/// Decompression output exceeded the configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
}

impl SweepError {
	/// Wrap an IO error with the path it occurred on.
	pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}
