use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the stderr subscriber.
///
/// `RUST_LOG` selects the level; without it only warnings are shown so
/// stdout stays reserved for command output.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false).with_level(true).compact();

	let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;

	tracing_subscriber::registry().with(filter_layer).with(fmt_layer).try_init()?;

	Ok(())
}
