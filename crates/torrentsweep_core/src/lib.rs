//! Public library API for decoding bencoded torrent manifests and sweeping
//! local payload directories for files no manifest mentions.

/// Bencode value model, codec, manifest extraction, and reconciliation.
pub mod torrent;
