use std::path::{Path, PathBuf};

use serde::Serialize;
use torrentsweep::torrent::{CaseMode, ExpectedPaths, Manifest, ReconcileOptions, ReconcileReport, reconcile};
use tracing::warn;

use crate::cmd::util::{emit_json, layout_label, load_manifest};
use crate::error::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	/// Torrent files followed or preceded by exactly one directory.
	pub paths: Vec<PathBuf>,
	/// Delete local files not in any torrent. Use with care.
	#[arg(short = 'd', long)]
	pub delete: bool,
	/// Compare paths case-sensitively.
	#[arg(long)]
	pub exact_case: bool,
	/// Follow symlinked files and directories.
	#[arg(long)]
	pub follow_links: bool,
	#[arg(long)]
	pub json: bool,
}

/// Positional arguments sorted into the directory root and manifest files.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Targets {
	pub root: PathBuf,
	pub manifests: Vec<PathBuf>,
}

/// Report every local file under the root that no manifest lists.
pub fn run(args: Args) -> Result<()> {
	let Args {
		paths,
		delete,
		exact_case,
		follow_links,
		json,
	} = args;

	let targets = classify(&paths)?;
	let mode = if exact_case { CaseMode::Exact } else { CaseMode::Fold };
	let mut expected = ExpectedPaths::new(mode);
	let mut loaded = Vec::new();
	let mut skipped = Vec::new();

	for path in &targets.manifests {
		match load_manifest(path) {
			Ok((_, manifest)) => {
				let added = expected.add_manifest(&manifest, &targets.root);
				if !json {
					print_manifest(&manifest);
				}
				loaded.push(ManifestJson::new(path, &manifest, added));
			}
			Err(err) => {
				warn!(path = %path.display(), error = %err, "skipping unreadable torrent file");
				if !json {
					println!("Skipping {}: {err}", path.display());
				}
				skipped.push(SkippedJson {
					path: path.display().to_string(),
					error: err.to_string(),
				});
			}
		}
	}

	if loaded.is_empty() {
		return Err(CliError::NoManifests { count: skipped.len() });
	}

	let options = ReconcileOptions { delete, follow_links };
	let report = reconcile(&targets.root, &expected, &options)?;

	if json {
		return emit_json(&ScanJson {
			root: targets.root.display().to_string(),
			expected_paths: expected.len(),
			manifests: loaded,
			skipped,
			report: &report,
		});
	}

	print_report(&report, delete);
	Ok(())
}

/// Split positional paths: existing files are manifests, one existing directory is the root.
pub(crate) fn classify(paths: &[PathBuf]) -> Result<Targets> {
	let mut root: Option<PathBuf> = None;
	let mut manifests = Vec::new();

	for path in paths {
		if path.is_file() {
			manifests.push(path.clone());
			continue;
		}
		if !path.is_dir() {
			return Err(CliError::Usage(format!("Unknown option '{}'", path.display())));
		}
		if let Some(existing) = &root {
			return Err(CliError::Usage(format!(
				"Please specify only one directory:\n  {}\n  {}",
				existing.display(),
				path.display()
			)));
		}
		root = Some(path.clone());
	}

	let root = root.ok_or_else(|| CliError::Usage("Please specify a path to check".to_owned()))?;
	if manifests.is_empty() {
		return Err(CliError::Usage("Please specify at least one torrent file".to_owned()));
	}

	Ok(Targets { root, manifests })
}

fn print_manifest(manifest: &Manifest) {
	if let Some(comment) = &manifest.comment {
		println!("Comment: {comment}");
	}
	if manifest.declared_encoding.is_some() {
		println!("Encoding: {}", manifest.codec.name());
	}
	match &manifest.name {
		Some(name) if manifest.is_single_file() => println!("Single-file torrent: {name}"),
		_ => println!("Multi-file torrent contains {} files", manifest.file_count()),
	}
}

fn print_report(report: &ReconcileReport, delete: bool) {
	println!("Local directory tree contains {} files", report.total_local_files);
	for orphan in &report.orphans {
		println!("Local file {} not in torrent", orphan.path.display());
	}
	for failure in &report.failures {
		let path = failure.path.as_deref().map(Path::display);
		match path {
			Some(path) => println!("Could not {} {path}: {}", failure.op.as_str(), failure.message),
			None => println!("Could not {}: {}", failure.op.as_str(), failure.message),
		}
	}
	if delete {
		println!("Deleted {} of {} files", report.deleted_count(), report.orphan_count);
	}
	println!(
		"Total: {:.0} MB and {} of {} files NOT in any torrent",
		report.orphan_megabytes(),
		report.orphan_count,
		report.total_local_files
	);
}

#[derive(Serialize)]
struct ScanJson<'a> {
	root: String,
	expected_paths: usize,
	manifests: Vec<ManifestJson>,
	skipped: Vec<SkippedJson>,
	report: &'a ReconcileReport,
}

#[derive(Serialize)]
struct ManifestJson {
	path: String,
	comment: Option<String>,
	encoding: Option<&'static str>,
	layout: &'static str,
	name: Option<String>,
	file_count: usize,
	paths_added: usize,
}

impl ManifestJson {
	fn new(path: &Path, manifest: &Manifest, paths_added: usize) -> Self {
		Self {
			path: path.display().to_string(),
			comment: manifest.comment.clone(),
			encoding: manifest.declared_encoding.as_ref().map(|_| manifest.codec.name()),
			layout: layout_label(manifest),
			name: manifest.name.clone(),
			file_count: manifest.file_count(),
			paths_added,
		}
	}
}

#[derive(Serialize)]
struct SkippedJson {
	path: String,
	error: String,
}

#[cfg(test)]
mod tests;
