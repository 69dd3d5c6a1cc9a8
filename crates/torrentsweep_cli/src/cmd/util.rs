use std::path::Path;

use serde::Serialize;
use torrentsweep::torrent::{Manifest, TorrentFile};

use crate::error::Result;

/// Print `payload` as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Open a manifest file and interpret it.
pub(crate) fn load_manifest(path: &Path) -> Result<(TorrentFile, Manifest)> {
	let file = TorrentFile::open(path)?;
	let manifest = file.manifest()?;
	Ok((file, manifest))
}

/// Layout label shared by text and JSON output.
pub(crate) fn layout_label(manifest: &Manifest) -> &'static str {
	if manifest.is_single_file() { "single_file" } else { "multi_file" }
}
