use torrentsweep::torrent::SweepError;

/// Failures surfaced by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
	/// Library failure.
	#[error(transparent)]
	Sweep(#[from] SweepError),
	/// Bad command-line arguments.
	#[error("{0}")]
	Usage(String),
	/// Every manifest passed to `scan` failed to load.
	#[error("none of the {count} torrent files could be read")]
	NoManifests {
		/// Number of manifests attempted.
		count: usize,
	},
	/// JSON rendering failed.
	#[error("failed to render json output: {0}")]
	Json(#[from] serde_json::Error),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
