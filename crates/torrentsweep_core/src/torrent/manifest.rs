use std::path::PathBuf;

use tracing::{debug, warn};

use crate::torrent::{Result, SweepError, TextCodec, Value};

/// One file listed by a multi-file manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
	/// Path segments, already decoded under the manifest's text encoding.
	pub segments: Vec<String>,
	/// Declared payload length, when present.
	pub length: Option<i64>,
}

impl ManifestEntry {
	/// Join the segments with the platform separator.
	pub fn relative_path(&self) -> PathBuf {
		self.segments.iter().collect()
	}
}

/// Payload shape described by the `info` dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLayout {
	/// `info.length` is present: one file named `name`.
	SingleFile {
		/// Declared payload length.
		length: i64,
	},
	/// `info.files` lists the payload files.
	MultiFile {
		/// Listed files in manifest order.
		files: Vec<ManifestEntry>,
	},
}

/// The parts of a decoded torrent manifest the sweep needs.
#[derive(Debug, Clone)]
pub struct Manifest {
	/// Top-level `comment`.
	pub comment: Option<String>,
	/// Top-level `created by`.
	pub created_by: Option<String>,
	/// Top-level `encoding` label exactly as written.
	pub declared_encoding: Option<String>,
	/// Codec used for every string below, resolved from `encoding` or UTF-8.
	pub codec: TextCodec,
	/// `info.name`; required for single-file manifests.
	pub name: Option<String>,
	/// File layout.
	pub layout: ManifestLayout,
}

impl Manifest {
	/// Interpret a decoded manifest value.
	pub fn from_value(value: &Value) -> Result<Self> {
		if value.as_dict().is_none() {
			return Err(SweepError::MissingField {
				field: "<root>",
				expected: "dictionary",
			});
		}

		let declared_encoding = match value.get("encoding") {
			Some(item) => Some(
				item.to_text_lossy()
					.ok_or(SweepError::MissingField {
						field: "encoding",
						expected: "string",
					})?
					.into_owned(),
			),
			None => None,
		};
		let codec = match declared_encoding.as_deref() {
			Some(label) => TextCodec::from_label(label)?,
			None => TextCodec::default(),
		};

		let comment = optional_text(value, "comment", codec);
		let created_by = optional_text(value, "created by", codec);

		let info = value.get("info").filter(|item| item.as_dict().is_some()).ok_or(SweepError::MissingField {
			field: "info",
			expected: "dictionary",
		})?;
		let name = info.get("name").and_then(Value::as_bytes).map(|bytes| codec.decode(bytes).into_owned());

		let layout = if let Some(length) = info.get("length") {
			let length = length.as_int().ok_or(SweepError::MissingField {
				field: "info.length",
				expected: "integer",
			})?;
			if name.is_none() {
				return Err(SweepError::MissingField {
					field: "info.name",
					expected: "string",
				});
			}
			ManifestLayout::SingleFile { length }
		} else {
			ManifestLayout::MultiFile {
				files: parse_files(info, codec)?,
			}
		};

		let manifest = Self {
			comment,
			created_by,
			declared_encoding,
			codec,
			name,
			layout,
		};
		debug!(files = manifest.file_count(), encoding = manifest.codec.name(), "parsed manifest");
		Ok(manifest)
	}

	/// True for `info.length` manifests.
	pub fn is_single_file(&self) -> bool {
		matches!(self.layout, ManifestLayout::SingleFile { .. })
	}

	/// Number of payload files described.
	pub fn file_count(&self) -> usize {
		match &self.layout {
			ManifestLayout::SingleFile { .. } => 1,
			ManifestLayout::MultiFile { files } => files.len(),
		}
	}

	/// Relative payload paths in manifest order.
	pub fn relative_paths(&self) -> Vec<PathBuf> {
		match &self.layout {
			ManifestLayout::SingleFile { .. } => self.name.iter().map(PathBuf::from).collect(),
			ManifestLayout::MultiFile { files } => files.iter().map(ManifestEntry::relative_path).collect(),
		}
	}
}

fn optional_text(value: &Value, key: &'static str, codec: TextCodec) -> Option<String> {
	let item = value.get(key)?;
	match item.as_bytes() {
		Some(bytes) => Some(codec.decode(bytes).into_owned()),
		None => {
			warn!(field = key, kind = item.kind(), "ignoring non-string manifest field");
			None
		}
	}
}

fn parse_files(info: &Value, codec: TextCodec) -> Result<Vec<ManifestEntry>> {
	let files = info.get("files").and_then(Value::as_list).ok_or(SweepError::MissingField {
		field: "info.files",
		expected: "list",
	})?;

	let mut out = Vec::with_capacity(files.len());
	for (idx, file) in files.iter().enumerate() {
		if file.as_dict().is_none() {
			warn!(index = idx, kind = file.kind(), "skipping non-dictionary file entry");
			continue;
		}

		let path = file.get("path").and_then(Value::as_list).ok_or(SweepError::MissingField {
			field: "info.files.path",
			expected: "list",
		})?;
		let segments: Vec<String> = path.iter().filter_map(Value::as_bytes).map(|bytes| codec.decode(bytes).into_owned()).collect();
		if segments.len() != path.len() {
			warn!(index = idx, "skipping non-string path segments");
		}
		if segments.is_empty() {
			warn!(index = idx, "skipping file entry with empty path");
			continue;
		}

		out.push(ManifestEntry {
			segments,
			length: file.get("length").and_then(Value::as_int),
		});
	}

	Ok(out)
}
