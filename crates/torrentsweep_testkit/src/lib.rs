//! Shared test helpers for workspace crates.

use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Bencode a text string.
pub fn bstr(text: &str) -> String {
	format!("{}:{text}", text.len())
}

/// Bencoded multi-file manifest listing `files` (each a list of path segments) with one-byte lengths.
pub fn multi_file_manifest(files: &[&[&str]]) -> Vec<u8> {
	let mut entries = String::new();
	for segments in files {
		let path: String = segments.iter().map(|segment| bstr(segment)).collect();
		entries.push_str(&format!("d{}i1e{}l{path}ee", bstr("length"), bstr("path")));
	}
	format!(
		"d{}d{}l{entries}e{}{}{}i16384eee",
		bstr("info"),
		bstr("files"),
		bstr("name"),
		bstr("payload"),
		bstr("piece length")
	)
	.into_bytes()
}

/// Bencoded single-file manifest.
pub fn single_file_manifest(name: &str, length: u64) -> Vec<u8> {
	format!("d{}d{}i{length}e{}{}ee", bstr("info"), bstr("length"), bstr("name"), bstr(name)).into_bytes()
}

/// Write `bytes` to `dir/name` and return the full path.
pub fn write_manifest(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
	let path = dir.join(name);
	fs::write(&path, bytes).expect("manifest write succeeds");
	path
}

/// Create `files` under `root`; each relative path uses `/` between segments.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
	for (relative, contents) in files {
		let path = relative.split('/').fold(root.to_path_buf(), |acc, segment| acc.join(segment));
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).expect("parent directories create");
		}
		fs::write(&path, contents).expect("tree file write succeeds");
	}
}

/// Fresh scratch directory removed on drop.
pub fn scratch_dir() -> tempfile::TempDir {
	tempfile::tempdir().expect("tempdir creates")
}

/// Parse command stdout as JSON.
pub fn parse_json(stdout: &[u8]) -> serde_json::Value {
	serde_json::from_slice(stdout).expect("stdout should be valid json")
}
