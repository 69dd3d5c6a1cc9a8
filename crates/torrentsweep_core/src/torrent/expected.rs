use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::torrent::{Manifest, Result, Value};

/// How paths are compared between manifests and the local tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
	/// Lower-case both sides; assumes a case-insensitive filesystem.
	#[default]
	Fold,
	/// Compare paths exactly as spelled.
	Exact,
}

impl CaseMode {
	/// Comparison key for `path` under this mode.
	pub fn key(self, path: &Path) -> String {
		let text = path.to_string_lossy();
		match self {
			Self::Fold => text.to_lowercase(),
			Self::Exact => text.into_owned(),
		}
	}
}

/// Union of the absolute payload paths of every manifest added so far.
#[derive(Debug, Clone, Default)]
pub struct ExpectedPaths {
	mode: CaseMode,
	keys: HashSet<String>,
}

impl ExpectedPaths {
	/// Create an empty set comparing under `mode`.
	pub fn new(mode: CaseMode) -> Self {
		Self { mode, keys: HashSet::new() }
	}

	/// Comparison mode used for every key.
	pub fn mode(&self) -> CaseMode {
		self.mode
	}

	/// Add every payload path of `manifest` joined onto `root`; returns how many paths the manifest contributed.
	///
	/// Single-file manifests contribute `root/name`.
	pub fn add_manifest(&mut self, manifest: &Manifest, root: &Path) -> usize {
		let relative = manifest.relative_paths();
		for path in &relative {
			self.insert(&root.join(path));
		}
		debug!(added = relative.len(), total = self.keys.len(), root = %root.display(), "accumulated manifest paths");
		relative.len()
	}

	/// Insert one absolute path; returns false when its key was already present.
	pub fn insert(&mut self, path: &Path) -> bool {
		self.keys.insert(self.mode.key(path))
	}

	/// Membership test under the set's case mode.
	pub fn contains(&self, path: &Path) -> bool {
		self.keys.contains(&self.mode.key(path))
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	/// True when no path has been added.
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// Iterate the comparison keys in unspecified order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.keys.iter().map(String::as_str)
	}
}

/// Interpret one decoded manifest and collect its case-folded payload paths under `root`.
pub fn extract_expected_paths(manifest: &Value, root: &Path) -> Result<ExpectedPaths> {
	let manifest = Manifest::from_value(manifest)?;
	let mut expected = ExpectedPaths::default();
	expected.add_manifest(&manifest, root);
	Ok(expected)
}
