use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::torrent::{CaseMode, ExpectedPaths, Result, SweepError};

/// Behavior switches for [`reconcile`].
#[derive(Debug, Clone, Default)]
pub struct ReconcileOptions {
	/// Remove orphan files as they are found.
	pub delete: bool,
	/// Descend through symlinked directories and count symlinked files.
	///
	/// With `delete`, orphans whose real location lies outside the root are
	/// reported as delete failures and left in place.
	pub follow_links: bool,
}

/// Filesystem operation that failed for one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOp {
	/// Directory enumeration.
	Walk,
	/// Reading file metadata.
	Stat,
	/// Removing an orphan.
	Delete,
}

impl FileOp {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Walk => "walk",
			Self::Stat => "stat",
			Self::Delete => "delete",
		}
	}
}

/// One per-file failure recorded during a scan.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
	/// Path involved, when known.
	pub path: Option<PathBuf>,
	/// Operation that failed.
	pub op: FileOp,
	/// Rendered IO error.
	pub message: String,
}

/// A local file no manifest mentions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Orphan {
	/// Path as enumerated under the root.
	pub path: PathBuf,
	/// File length in bytes (0 when it could not be read).
	pub size: u64,
	/// Whether the file was removed.
	pub deleted: bool,
}

/// Aggregate result of reconciling one directory tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReconcileReport {
	/// Comparison mode that was applied.
	pub case_mode: CaseMode,
	/// Regular files found under the root.
	pub total_local_files: usize,
	/// Files absent from every manifest.
	pub orphan_count: usize,
	/// Summed size of the orphans.
	pub orphan_bytes: u64,
	/// Orphans sorted by path.
	pub orphans: Vec<Orphan>,
	/// Per-file failures; none of them aborted the scan.
	pub failures: Vec<FileFailure>,
}

impl ReconcileReport {
	/// Orphan size in mebibytes, for display.
	pub fn orphan_megabytes(&self) -> f64 {
		self.orphan_bytes as f64 / (1024.0 * 1024.0)
	}

	/// Number of orphans actually removed.
	pub fn deleted_count(&self) -> usize {
		self.orphans.iter().filter(|item| item.deleted).count()
	}
}

/// Walk `root`, report every regular file missing from `expected`, and optionally delete it.
///
/// Only an unreadable or non-directory root is fatal; every other IO
/// problem is recorded in [`ReconcileReport::failures`].
pub fn reconcile(root: &Path, expected: &ExpectedPaths, options: &ReconcileOptions) -> Result<ReconcileReport> {
	let meta = fs::metadata(root).map_err(|source| SweepError::io(root, source))?;
	if !meta.is_dir() {
		return Err(SweepError::io(root, io::Error::new(io::ErrorKind::NotADirectory, "reconcile root is not a directory")));
	}

	let mut report = ReconcileReport {
		case_mode: expected.mode(),
		..ReconcileReport::default()
	};

	let confine = if options.delete && options.follow_links {
		Some(fs::canonicalize(root).map_err(|source| SweepError::io(root, source))?)
	} else {
		None
	};

	let files = list_local_files(root, options.follow_links, &mut report.failures);
	report.total_local_files = files.len();
	debug!(root = %root.display(), files = files.len(), expected = expected.len(), "listed local tree");

	for entry in files {
		if expected.contains(entry.path()) {
			continue;
		}

		let size = match entry.metadata() {
			Ok(meta) => meta.len(),
			Err(err) => {
				report.failures.push(FileFailure {
					path: Some(entry.path().to_path_buf()),
					op: FileOp::Stat,
					message: err.to_string(),
				});
				0
			}
		};

		let deleted = options.delete && remove_orphan(entry.path(), confine.as_deref(), &mut report.failures);

		report.orphan_count += 1;
		report.orphan_bytes += size;
		report.orphans.push(Orphan {
			path: entry.into_path(),
			size,
			deleted,
		});
	}

	debug!(orphans = report.orphan_count, bytes = report.orphan_bytes, failures = report.failures.len(), "reconciled tree");
	Ok(report)
}

fn list_local_files(root: &Path, follow_links: bool, failures: &mut Vec<FileFailure>) -> Vec<DirEntry> {
	let mut files = Vec::new();
	for entry in WalkDir::new(root).follow_links(follow_links) {
		match entry {
			Ok(entry) if entry.file_type().is_file() => files.push(entry),
			Ok(_) => {}
			Err(err) => {
				warn!(path = ?err.path(), error = %err, "skipping unreadable entry");
				failures.push(FileFailure {
					path: err.path().map(Path::to_path_buf),
					op: FileOp::Walk,
					message: err.to_string(),
				});
			}
		}
	}
	files.sort_by(|left, right| left.path().cmp(right.path()));
	files
}

fn remove_orphan(path: &Path, confine: Option<&Path>, failures: &mut Vec<FileFailure>) -> bool {
	if let Some(root) = confine {
		let inside = fs::canonicalize(path).map(|real| real.starts_with(root));
		let refusal = match inside {
			Ok(true) => None,
			Ok(false) => Some("resolves outside the scan root".to_owned()),
			Err(err) => Some(err.to_string()),
		};
		if let Some(message) = refusal {
			warn!(path = %path.display(), reason = %message, "refusing to delete orphan");
			failures.push(FileFailure {
				path: Some(path.to_path_buf()),
				op: FileOp::Delete,
				message,
			});
			return false;
		}
	}

	match fs::remove_file(path) {
		Ok(()) => {
			debug!(path = %path.display(), "deleted orphan");
			true
		}
		Err(err) => {
			warn!(path = %path.display(), error = %err, "failed to delete orphan");
			failures.push(FileFailure {
				path: Some(path.to_path_buf()),
				op: FileOp::Delete,
				message: err.to_string(),
			});
			false
		}
	}
}
