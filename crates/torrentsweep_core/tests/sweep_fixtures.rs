#![allow(missing_docs)]

use torrentsweep::torrent::{CaseMode, ExpectedPaths, ReconcileOptions, TorrentFile, extract_expected_paths, reconcile};
use torrentsweep_testkit::{fixture_path, scratch_dir, write_tree};

#[test]
fn multi_file_fixture_covers_its_tree() {
	let dir = scratch_dir();
	write_tree(dir.path(), &[("docs/notes.txt", "hello"), ("album/track1.mp3", "0123456789a"), ("Album/Track2.MP3", "0123456789b")]);

	let file = TorrentFile::open(fixture_path("multi.torrent")).expect("fixture opens");
	let expected = extract_expected_paths(&file.value, dir.path()).expect("paths extract");
	assert_eq!(expected.len(), 3);

	let report = reconcile(dir.path(), &expected, &ReconcileOptions::default()).expect("scan succeeds");
	assert_eq!(report.total_local_files, 3);
	assert_eq!(report.orphan_count, 0);
}

#[test]
fn union_of_fixtures_leaves_only_strays() {
	let dir = scratch_dir();
	write_tree(dir.path(), &[("disk.img", "data"), ("docs/notes.txt", "hello"), ("docs/old.txt", "stale"), ("partial.!qb", "xx")]);

	let mut expected = ExpectedPaths::new(CaseMode::Fold);
	for name in ["multi.torrent", "single.torrent"] {
		let manifest = TorrentFile::open(fixture_path(name)).and_then(|file| file.manifest()).expect("fixture parses");
		expected.add_manifest(&manifest, dir.path());
	}
	assert_eq!(expected.len(), 4);

	let options = ReconcileOptions {
		delete: true,
		..ReconcileOptions::default()
	};
	let report = reconcile(dir.path(), &expected, &options).expect("scan succeeds");

	let orphans: Vec<_> = report.orphans.iter().map(|item| item.path.clone()).collect();
	assert_eq!(orphans, vec![dir.path().join("docs").join("old.txt"), dir.path().join("partial.!qb")]);
	assert_eq!(report.orphan_bytes, 7);
	assert!(dir.path().join("disk.img").exists());
	assert!(!dir.path().join("partial.!qb").exists());
}
