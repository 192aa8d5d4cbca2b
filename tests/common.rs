#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn rtt() -> Command {
    cargo_bin_cmd!("rtimetracker")
}

/// A data file inside a fresh temp dir. Keep the `TempDir` alive for the
/// whole test.
pub fn setup_data_file() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("entries.json");
    (dir, path.to_string_lossy().to_string())
}

/// Run `rtimetracker --test --data <data> <args...>` and expect success.
pub fn run_ok(data: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    rtt()
        .args(["--test", "--data", data])
        .args(args)
        .assert()
        .success()
}

/// Read back the raw JSON array from the data file.
pub fn stored(data: &str) -> Vec<serde_json::Value> {
    let raw = fs::read_to_string(data).expect("read data file");
    serde_json::from_str(&raw).expect("data file is a JSON array")
}

pub fn stored_ids(data: &str) -> Vec<u64> {
    stored(data)
        .iter()
        .map(|v| v["id"].as_u64().expect("numeric id"))
        .collect()
}

/// Small dataset: ProjectA 90 min on 2024-03-01, ProjectB 45 min on 2024-03-02.
pub fn add_sample_entries(data: &str) {
    run_ok(
        data,
        &["add", "2024-03-01", "09:00", "10:30", "--new-project", "ProjectA"],
    );
    run_ok(
        data,
        &[
            "add",
            "2024-03-02",
            "14:00",
            "14:45",
            "--new-project",
            "ProjectB",
            "--desc",
            "review",
        ],
    );
}

pub fn temp_out(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}
