use torrentsweep::torrent::{ManifestEntry, ManifestLayout};
use torrentsweep_testkit::{fixture_path, scratch_dir, single_file_manifest, write_manifest};

use super::total_length;
use crate::cmd::test_support::{run_sweep_json, run_sweep_ok};

#[test]
fn info_json_describes_multi_file_fixture() {
	let fixture = fixture_path("multi.torrent");
	let fixture = fixture.to_string_lossy().into_owned();
	let json = run_sweep_json(&["info", &fixture, "--json"]);

	assert_eq!(json["compression"], "none");
	assert_eq!(json["comment"], "sample multi-file torrent");
	assert_eq!(json["created_by"], "torrentsweep");
	assert_eq!(json["encoding"], "UTF-8");
	assert_eq!(json["layout"], "multi_file");
	assert_eq!(json["file_count"], 3);
	assert_eq!(json["total_length"], 27);
}

#[test]
fn info_text_reports_single_file_name() {
	let dir = scratch_dir();
	let path = write_manifest(dir.path(), "one.torrent", &single_file_manifest("movie.mkv", 42));
	let path = path.to_string_lossy().into_owned();
	let stdout = run_sweep_ok(&["info", &path]);

	assert!(stdout.contains("layout: single_file"), "{stdout}");
	assert!(stdout.contains("name: movie.mkv"), "{stdout}");
	assert!(stdout.contains("total_length: 42"), "{stdout}");
	assert!(stdout.contains("comment: -"), "{stdout}");
}

#[test]
fn info_json_overflowing_lengths_report_no_total() {
	let dir = scratch_dir();
	let huge = b"d4:infod5:filesld6:lengthi9223372036854775807e4:pathl1:aeed6:lengthi9223372036854775807e4:pathl1:beee4:name4:hugeee";
	let path = write_manifest(dir.path(), "huge.torrent", huge);
	let path = path.to_string_lossy().into_owned();
	let json = run_sweep_json(&["info", &path, "--json"]);

	assert_eq!(json["file_count"], 2);
	assert!(json["total_length"].is_null(), "{json}");
}

#[test]
fn total_length_sums_and_guards_overflow() {
	let entry = |length| ManifestEntry {
		segments: vec!["f".to_owned()],
		length,
	};

	let layout = ManifestLayout::MultiFile {
		files: vec![entry(Some(5)), entry(Some(11))],
	};
	assert_eq!(total_length(&layout), Some(16));

	let layout = ManifestLayout::MultiFile {
		files: vec![entry(Some(i64::MAX)), entry(Some(i64::MAX))],
	};
	assert_eq!(total_length(&layout), None);

	let layout = ManifestLayout::MultiFile {
		files: vec![entry(Some(5)), entry(None)],
	};
	assert_eq!(total_length(&layout), None);
}
