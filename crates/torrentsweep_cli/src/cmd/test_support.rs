use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use torrentsweep_testkit::{parse_json, target_dir as workspace_target_dir};

static SWEEP_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_sweep(args: &[&str]) -> Output {
	Command::new(sweep_bin()).args(args).output().expect("torrentsweep command executes")
}

pub(crate) fn run_sweep_ok(args: &[&str]) -> String {
	let output = run_sweep(args);
	assert!(
		output.status.success(),
		"torrentsweep command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout).expect("stdout should be utf-8")
}

pub(crate) fn run_sweep_json(args: &[&str]) -> serde_json::Value {
	parse_json(run_sweep_ok(args).as_bytes())
}

fn sweep_bin() -> &'static PathBuf {
	SWEEP_BIN.get_or_init(resolve_sweep_bin)
}

fn resolve_sweep_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_torrentsweep") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let mut bin = workspace_target_dir().join("debug");
	bin.push(if cfg!(windows) { "torrentsweep.exe" } else { "torrentsweep" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "torrentsweep"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build torrentsweep binary at {}", bin.display());

	bin
}
