#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;
mod error;
mod logging;

#[derive(Parser)]
#[command(name = "torrentsweep", about = "Find local files that no torrent manifest mentions")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Compare a directory tree against one or more manifests.
	Scan(cmd::scan::Args),
	/// Pretty-print a decoded manifest.
	Print(cmd::print::Args),
	/// Summarize a manifest.
	Info(cmd::info::Args),
}

fn main() {
	if let Err(err) = logging::init() {
		eprintln!("warning: logging disabled: {err}");
	}

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Scan(args) => cmd::scan::run(args),
		Commands::Print(args) => cmd::print::run(args),
		Commands::Info(args) => cmd::info::run(args),
	}
}
