use std::path::PathBuf;

use torrentsweep::torrent::{PrettyOptions, TextCodec, TorrentFile, pretty_print_with};
use tracing::debug;

use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Print every string in full, including binary ones.
	#[arg(long)]
	pub raw: bool,
}

/// Dump the decoded term tree.
pub fn run(args: Args) -> Result<()> {
	let Args { path, raw } = args;

	let file = TorrentFile::open(&path)?;
	let options = PrettyOptions {
		codec: manifest_codec(&file),
		..if raw { PrettyOptions::default() } else { PrettyOptions::for_terminal() }
	};

	print!("{}", pretty_print_with(&file.value, 0, &options));
	Ok(())
}

/// Declared manifest codec, falling back to UTF-8 for terms that are not manifests.
fn manifest_codec(file: &TorrentFile) -> TextCodec {
	match file.manifest() {
		Ok(manifest) => manifest.codec,
		Err(err) => {
			debug!(path = %file.path.display(), error = %err, "printing with default codec");
			TextCodec::default()
		}
	}
}
