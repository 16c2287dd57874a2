//! Integration tests for walking 7-Zip containers.

#![cfg(feature = "sevenz")]

use std::path::PathBuf;

use tempfile::TempDir;

use arcdump::{Error, SevenZipBackend, dump_seven_zip_contents};

/// Compresses a directory of fixture files into a 7z archive and returns
/// the archive path.
fn write_seven_zip(dir: &TempDir, name: &str, members: &[(&str, &[u8])]) -> PathBuf {
    let src = dir.path().join("src");
    std::fs::create_dir(&src).unwrap();
    for (member_name, content) in members {
        let member_path = src.join(member_name);
        if let Some(parent) = member_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(member_path, content).unwrap();
    }
    let path = dir.path().join(name);
    sevenz_rust::compress_to_path(&src, &path).unwrap();
    path
}

#[test]
fn available_backend_itemizes_members() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_seven_zip(
        &dir,
        "layers.gpkx",
        &[("manifest.json", br#"{"v":3}"#), ("readme.txt", b"hello")],
    );

    let mut out = Vec::new();
    dump_seven_zip_contents(&path, SevenZipBackend::Available, &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();

    assert!(report.contains("manifest.json"));
    assert!(report.contains("readme.txt"));
    assert!(report.contains("```json\n{\n  \"v\": 3\n}\n```"));
    assert!(report.contains("hello"));
}

#[test]
fn unavailable_backend_emits_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_seven_zip(&dir, "service.sd", &[("definition.json", br#"{"v":3}"#)]);
    let archive_bytes = std::fs::read(&path).unwrap();

    let mut out = Vec::new();
    dump_seven_zip_contents(&path, SevenZipBackend::Unavailable, &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();

    // Raw whole-file bytes, no per-member breakdown.
    assert!(report.contains(&archive_bytes.escape_ascii().to_string()));
    assert!(!report.contains("## "));
}

#[test]
fn not_a_seven_zip_is_decompression_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.gpkx");
    std::fs::write(&path, b"this is not a 7z archive").unwrap();

    let mut out = Vec::new();
    let err = dump_seven_zip_contents(&path, SevenZipBackend::Available, &mut out).unwrap_err();
    assert!(matches!(err, Error::Decompression { .. }));
    assert!(err.is_archive_error());
    assert!(out.is_empty());
}

#[test]
fn resolve_reports_available_with_feature() {
    assert!(SevenZipBackend::resolve().is_available());
}
