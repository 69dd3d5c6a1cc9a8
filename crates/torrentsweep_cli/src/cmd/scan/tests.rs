use torrentsweep_testkit::{multi_file_manifest, scratch_dir, write_manifest};

use super::{Targets, classify};
use crate::error::CliError;

fn usage_message(err: CliError) -> String {
	match err {
		CliError::Usage(message) => message,
		other => panic!("expected usage error, got {other}"),
	}
}

#[test]
fn files_and_one_directory_are_split() {
	let dir = scratch_dir();
	let torrent = write_manifest(dir.path(), "a.torrent", &multi_file_manifest(&[&["x"]]));
	let root = dir.path().join("payload");
	std::fs::create_dir(&root).expect("create root");

	let targets = classify(&[torrent.clone(), root.clone()]).expect("arguments classify");
	assert_eq!(
		targets,
		Targets {
			root,
			manifests: vec![torrent],
		}
	);
}

#[test]
fn directory_may_come_first() {
	let dir = scratch_dir();
	let torrent = write_manifest(dir.path(), "a.torrent", &multi_file_manifest(&[&["x"]]));

	let targets = classify(&[dir.path().to_path_buf(), torrent]).expect("arguments classify");
	assert_eq!(targets.root, dir.path());
}

#[test]
fn second_directory_is_rejected() {
	let first = scratch_dir();
	let second = scratch_dir();
	let torrent = write_manifest(first.path(), "a.torrent", &multi_file_manifest(&[&["x"]]));

	let err = classify(&[torrent, first.path().to_path_buf(), second.path().to_path_buf()]).expect_err("two roots fail");
	assert!(usage_message(err).starts_with("Please specify only one directory"));
}

#[test]
fn missing_path_is_unknown_option() {
	let dir = scratch_dir();
	let err = classify(&[dir.path().join("nope")]).expect_err("missing path fails");
	assert!(usage_message(err).starts_with("Unknown option '"));
}

#[test]
fn root_is_required() {
	let dir = scratch_dir();
	let torrent = write_manifest(dir.path(), "a.torrent", &multi_file_manifest(&[&["x"]]));

	let err = classify(&[torrent]).expect_err("no root fails");
	assert_eq!(usage_message(err), "Please specify a path to check");
}

#[test]
fn manifest_is_required() {
	let dir = scratch_dir();
	let err = classify(&[dir.path().to_path_buf()]).expect_err("no manifest fails");
	assert_eq!(usage_message(err), "Please specify at least one torrent file");
}
