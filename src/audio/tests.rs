use super::sink::{open_source, probe_duration};
use std::fs;
use tempfile::tempdir;

#[test]
fn open_source_reports_missing_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gone.mp3");
    let err = open_source(&path).err().unwrap();
    assert!(err.starts_with("failed to open"));
    assert!(err.contains("gone.mp3"));
}

#[test]
fn open_source_reports_undecodable_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fake.mp3");
    fs::write(&path, b"definitely not audio").unwrap();
    let err = open_source(&path).err().unwrap();
    assert!(err.starts_with("failed to decode"));
}

#[test]
fn probe_duration_is_none_for_non_audio() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fake.mp3");
    fs::write(&path, b"definitely not audio").unwrap();
    assert_eq!(probe_duration(&path), None);
}
