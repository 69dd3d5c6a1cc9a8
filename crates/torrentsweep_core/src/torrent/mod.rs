mod bytes;
mod compression;
mod decode;
mod encode;
mod equality;
mod error;
mod expected;
mod file;
mod manifest;
mod pretty;
mod reconcile;
mod text;
mod value;

/// Bounded byte cursor used by the decoder.
pub use bytes::Cursor;
/// Compression detection result.
pub use compression::{Compression, MAX_DECOMPRESSED_BYTES, ZSTD_MAGIC};
/// Bencode decoding entry points and options.
pub use decode::{DecodeOptions, Decoder, DuplicateKeyPolicy, decode, decode_exact, decode_prefix};
/// Bencode encoding entry points.
pub use encode::{encode, encode_into};
/// Error and result aliases.
pub use error::{Result, SweepError};
/// Expected-path accumulation.
pub use expected::{CaseMode, ExpectedPaths, extract_expected_paths};
/// Manifest file abstraction.
pub use file::TorrentFile;
/// Decoded manifest view.
pub use manifest::{Manifest, ManifestEntry, ManifestLayout};
/// Human-readable value rendering.
pub use pretty::{PrettyOptions, pretty_print, pretty_print_with};
/// Directory reconciliation types and entry point.
pub use reconcile::{FileFailure, FileOp, Orphan, ReconcileOptions, ReconcileReport, reconcile};
/// Declared text encoding handling.
pub use text::{TextCodec, resolve_encoding};
/// Decoded bencode value types.
pub use value::{Dict, Value};
