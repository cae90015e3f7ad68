//! End-to-end analysis over the bundled annotation fixture.

use std::path::PathBuf;

use protexai::analysis::{self, annotations};
use protexai::config::Config;
use protexai::launcher;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/annotations.json")
}

/// Copy the bundled fixture into a temporary base directory.
fn setup_base() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    std::fs::copy(fixture_path(), dir.path().join("annotations.json"))
        .expect("failed to copy annotations.json");
    dir
}

#[test]
fn fixture_stream_produces_the_expected_events() {
    let file = annotations::load(&fixture_path()).unwrap();
    let cfg = Config::default();

    let report = analysis::analyze(&file, analysis::roi_polygons(&cfg.rois), cfg.min_frame_gap);

    assert_eq!(report.cam_name, "dock-east");
    assert_eq!(report.rule, "Car and Person");
    assert_eq!(report.summary.frames, 4);

    // Frames 1, 2, and 5 put a car and a person in the first region; frame 3
    // splits them across regions.
    assert_eq!(report.summary.positives, 3);
    let frames: Vec<u32> = report.events.iter().map(|e| e.frame_num).collect();
    assert_eq!(frames, vec![1, 2, 5]);
    assert!(report.events.iter().all(|e| e.roi == 0));

    // Frame 2 follows frame 1 too closely to notify again.
    let notified: Vec<bool> = report.events.iter().map(|e| e.notified).collect();
    assert_eq!(notified, vec![true, false, true]);
    assert_eq!(report.summary.notified, 2);
}

#[test]
fn discovery_finds_the_stream_in_a_base_dir() {
    let dir = setup_base();
    let cfg = Config::default();

    let found = analysis::find_annotations(dir.path(), cfg.search_depth).unwrap();
    assert_eq!(found, dir.path().join("annotations.json"));
}

#[test]
fn report_lands_in_the_output_directory() {
    let dir = setup_base();
    let cfg = Config::default();

    let file = annotations::load(&dir.path().join("annotations.json")).unwrap();
    let report = analysis::analyze(&file, analysis::roi_polygons(&cfg.rois), cfg.min_frame_gap);

    let out_dir = launcher::ensure_out_dir(dir.path(), &cfg.out_dir).unwrap();
    let report_path = out_dir.join("events.json");
    analysis::report::write(&report_path, &report).unwrap();

    let raw = std::fs::read_to_string(&report_path).unwrap();
    let back: analysis::EventReport = serde_json::from_str(&raw).unwrap();
    assert_eq!(back.cam_name, "dock-east");
    assert_eq!(back.summary.positives, 3);
}

#[test]
fn custom_rois_change_the_outcome() {
    let file = annotations::load(&fixture_path()).unwrap();

    // A region far away from every detection: nothing fires.
    let rois = analysis::roi_polygons(&[vec![
        [1800.0, 900.0],
        [1900.0, 900.0],
        [1900.0, 1000.0],
        [1800.0, 1000.0],
    ]]);
    let report = analysis::analyze(&file, rois, 1);
    assert_eq!(report.summary.positives, 0);
    assert!(report.events.is_empty());
}
