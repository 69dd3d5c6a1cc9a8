use std::path::PathBuf;

use serde::Serialize;
use torrentsweep::torrent::ManifestLayout;

use crate::cmd::util::{emit_json, layout_label, load_manifest};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print manifest metadata and layout.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let (file, manifest) = load_manifest(&path)?;
	let declared_length = total_length(&manifest.layout);

	if json {
		return emit_json(&InfoJson {
			path: path.display().to_string(),
			compression: file.compression.as_str(),
			comment: manifest.comment.as_deref(),
			created_by: manifest.created_by.as_deref(),
			declared_encoding: manifest.declared_encoding.as_deref(),
			encoding: manifest.codec.name(),
			layout: layout_label(&manifest),
			name: manifest.name.as_deref(),
			file_count: manifest.file_count(),
			total_length: declared_length,
		});
	}

	println!("path: {}", path.display());
	println!("compression: {}", file.compression.as_str());
	println!("comment: {}", manifest.comment.as_deref().unwrap_or("-"));
	println!("created_by: {}", manifest.created_by.as_deref().unwrap_or("-"));
	println!("encoding: {}", manifest.codec.name());
	println!("layout: {}", layout_label(&manifest));
	println!("name: {}", manifest.name.as_deref().unwrap_or("-"));
	println!("file_count: {}", manifest.file_count());
	match declared_length {
		Some(length) => println!("total_length: {length}"),
		None => println!("total_length: -"),
	}

	Ok(())
}

/// Sum of declared payload lengths; absent when any entry lacks one or the sum overflows.
fn total_length(layout: &ManifestLayout) -> Option<i64> {
	match layout {
		ManifestLayout::SingleFile { length } => Some(*length),
		ManifestLayout::MultiFile { files } => files.iter().try_fold(0_i64, |acc, entry| acc.checked_add(entry.length?)),
	}
}

#[derive(Serialize)]
struct InfoJson<'a> {
	path: String,
	compression: &'static str,
	comment: Option<&'a str>,
	created_by: Option<&'a str>,
	declared_encoding: Option<&'a str>,
	encoding: &'static str,
	layout: &'static str,
	name: Option<&'a str>,
	file_count: usize,
	total_length: Option<i64>,
}

#[cfg(test)]
mod tests;
