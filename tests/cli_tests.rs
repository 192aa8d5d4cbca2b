use chrono::Local;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_sample_entries, rtt, run_ok, setup_data_file, stored, stored_ids};

#[test]
fn test_init_creates_empty_data_file() {
    let (dir, data) = setup_data_file();
    let nested = dir.path().join("deep").join("entries.json");
    let nested = nested.to_string_lossy().to_string();

    run_ok(&nested, &["init"]).stdout(contains("Data file"));

    assert_eq!(fs::read_to_string(&nested).unwrap(), "[]");
    assert!(!std::path::Path::new(&data).exists());
}

#[test]
fn test_add_persists_entry_with_duration() {
    let (_dir, data) = setup_data_file();

    run_ok(
        &data,
        &["add", "2024-03-01", "09:00", "17:30", "-p", "Acme", "-d", "coding"],
    )
    .stdout(contains("Acme"))
    .stdout(contains("8h 30m"));

    let rows = stored(&data);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["date"], "2024-03-01");
    assert_eq!(rows[0]["startTime"], "09:00");
    assert_eq!(rows[0]["endTime"], "17:30");
    assert_eq!(rows[0]["project"], "Acme");
    assert_eq!(rows[0]["description"], "coding");
    assert_eq!(rows[0]["duration"], 510);
}

#[test]
fn test_add_accepts_twelve_hour_times() {
    let (_dir, data) = setup_data_file();

    run_ok(
        &data,
        &["add", "2024-03-01", "11:30 AM", "1:15 PM", "--new-project", "Lunch talk"],
    );

    let rows = stored(&data);
    assert_eq!(rows[0]["startTime"], "11:30");
    assert_eq!(rows[0]["endTime"], "13:15");
    assert_eq!(rows[0]["duration"], 105);
}

#[test]
fn test_add_rejects_invalid_range_and_keeps_store_untouched() {
    let (_dir, data) = setup_data_file();
    add_sample_entries(&data);

    rtt()
        .args(["--test", "--data", &data])
        .args(["add", "2024-03-03", "10:00", "10:00", "-p", "ProjectA"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));

    rtt()
        .args(["--test", "--data", &data])
        .args(["add", "2024-03-03", "10:00", "09:00", "-p", "ProjectA"])
        .assert()
        .failure();

    assert_eq!(stored(&data).len(), 2);
}

#[test]
fn test_add_rejects_blank_project_and_bad_date() {
    let (_dir, data) = setup_data_file();

    rtt()
        .args(["--test", "--data", &data])
        .args(["add", "2024-03-03", "09:00", "10:00", "--new-project", "   "])
        .assert()
        .failure()
        .stderr(contains("project name must not be empty"));

    rtt()
        .args(["--test", "--data", &data])
        .args(["add", "2024-02-30", "09:00", "10:00", "-p", "A"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    assert!(!std::path::Path::new(&data).exists());
}

#[test]
fn test_add_requires_exactly_one_project_flag() {
    let (_dir, data) = setup_data_file();

    rtt()
        .args(["--test", "--data", &data])
        .args(["add", "2024-03-03", "09:00", "10:00"])
        .assert()
        .failure();

    rtt()
        .args(["--test", "--data", &data])
        .args(["add", "2024-03-03", "09:00", "10:00", "-p", "A", "--new-project", "B"])
        .assert()
        .failure();
}

#[test]
fn test_list_with_date_range_shows_only_matching_entries() {
    let (_dir, data) = setup_data_file();
    add_sample_entries(&data);

    run_ok(&data, &["list", "--from", "2024-03-01", "--to", "2024-03-01"])
        .stdout(contains("ProjectA"))
        .stdout(contains("ProjectB").not())
        .stdout(contains("Mar 1, 2024 - Mar 1, 2024"))
        .stdout(contains("1 entries, total 1h 30m"));
}

#[test]
fn test_list_defaults_to_current_month() {
    let (_dir, data) = setup_data_file();
    add_sample_entries(&data);

    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    run_ok(&data, &["add", &today, "08:00", "09:00", "-p", "ThisMonth"]);

    run_ok(&data, &["list"])
        .stdout(contains("ThisMonth"))
        .stdout(contains("ProjectA").not());

    run_ok(&data, &["list", "--all"])
        .stdout(contains("ThisMonth"))
        .stdout(contains("ProjectA"))
        .stdout(contains("ProjectB"))
        .stdout(contains("Active filters: none"));
}

#[test]
fn test_list_by_project_and_month() {
    let (_dir, data) = setup_data_file();
    add_sample_entries(&data);

    run_ok(&data, &["list", "--month", "2024-03", "--project", "ProjectB"])
        .stdout(contains("review"))
        .stdout(contains("ProjectA").not())
        .stdout(contains("Project: ProjectB"));

    // exact, case-sensitive match
    run_ok(&data, &["list", "--all"]);
    run_ok(&data, &["list", "--month", "2024-03", "--project", "projectb"])
        .stdout(contains("No time entries found"));
}

#[test]
fn test_summary_totals_per_project() {
    let (_dir, data) = setup_data_file();
    add_sample_entries(&data);

    run_ok(&data, &["summary", "--from", "2024-03-01", "--to", "2024-03-31"])
        .stdout(contains("ProjectA"))
        .stdout(contains("1h 30m"))
        .stdout(contains("ProjectB"))
        .stdout(contains("0h 45m"))
        .stdout(contains("Total: 2h 15m"));

    run_ok(&data, &["summary", "--from", "2024-03-01", "--to", "2024-03-01"])
        .stdout(contains("ProjectB").not())
        .stdout(contains("Total: 1h 30m"));

    run_ok(&data, &["summary", "--from", "2030-01-01"])
        .stdout(contains("No data to summarize"))
        .stdout(contains("Total: 0h 0m"));
}

#[test]
fn test_projects_are_distinct_and_sorted() {
    let (_dir, data) = setup_data_file();
    run_ok(&data, &["add", "2024-03-01", "09:00", "10:00", "--new-project", "Zulu"]);
    run_ok(&data, &["add", "2020-01-01", "09:00", "10:00", "--new-project", "Alpha"]);
    run_ok(&data, &["add", "2024-03-02", "09:00", "10:00", "-p", "Zulu"]);

    let out = rtt()
        .args(["--test", "--data", &data, "projects"])
        .output()
        .expect("run projects");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["Alpha", "Zulu"]);
}

#[test]
fn test_delete_then_delete_again_is_a_noop() {
    let (_dir, data) = setup_data_file();
    add_sample_entries(&data);

    let ids = stored_ids(&data);
    // newest first: ProjectB was added last
    let project_b = ids[0].to_string();
    let project_a = ids[1];

    run_ok(&data, &["del", &project_b, "--yes"]).stdout(contains("has been deleted"));
    assert_eq!(stored_ids(&data), vec![project_a]);

    run_ok(&data, &["del", &project_b, "--yes"]).stdout(contains("does not exist"));
    assert_eq!(stored_ids(&data), vec![project_a]);
}

#[test]
fn test_delete_asks_for_confirmation() {
    let (_dir, data) = setup_data_file();
    add_sample_entries(&data);
    let id = stored_ids(&data)[0].to_string();

    rtt()
        .args(["--test", "--data", &data, "del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));
    assert_eq!(stored(&data).len(), 2);

    rtt()
        .args(["--test", "--data", &data, "del", &id])
        .write_stdin("y\n")
        .assert()
        .success();
    assert_eq!(stored(&data).len(), 1);
}

#[test]
fn test_corrupt_data_file_is_reported_and_kept() {
    let (dir, data) = setup_data_file();
    fs::write(&data, "{ this is not json").unwrap();

    run_ok(&data, &["list", "--all"])
        .stdout(contains("could not be read"))
        .stdout(contains("No time entries found"));

    let kept: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().contains(".corrupt-"))
        .collect();
    assert_eq!(kept.len(), 1);
    assert_eq!(
        fs::read_to_string(kept[0].path()).unwrap(),
        "{ this is not json"
    );
}

#[test]
fn test_reads_data_written_by_other_versions() {
    let (_dir, data) = setup_data_file();
    fs::write(
        &data,
        r##"[{"id":1709280000000,"date":"2024-03-01","startTime":"09:00","endTime":"10:30",
             "project":"Legacy","duration":90,"color":"#ff0000"}]"##,
    )
    .unwrap();

    run_ok(&data, &["summary", "--all"])
        .stdout(contains("Legacy"))
        .stdout(contains("Total: 1h 30m"));
}
