#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("rotaplan-cli").unwrap()
}

#[test]
fn init_then_generate_then_show() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    let schedule = dir.path().join("schedule.json");

    cli()
        .args(["--config", config.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample configuration written"));
    assert!(config.exists());

    let csv = dir.path().join("schedule.csv");
    cli()
        .args([
            "--config",
            config.to_str().unwrap(),
            "--schedule",
            schedule.to_str().unwrap(),
            "generate",
            "--out-csv",
            csv.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("shifts over"));
    assert!(schedule.exists());

    let exported = std::fs::read_to_string(&csv).unwrap();
    assert!(exported.starts_with("date,week,staff,task,kind"));

    cli()
        .args(["--schedule", schedule.to_str().unwrap(), "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice").and(predicate::str::contains("triage")));
}

#[test]
fn export_saved_schedule_as_ics() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    let schedule = dir.path().join("schedule.json");
    let ics = dir.path().join("schedule.ics");

    cli()
        .args(["--config", config.to_str().unwrap(), "init"])
        .assert()
        .success();
    cli()
        .args([
            "--config",
            config.to_str().unwrap(),
            "--schedule",
            schedule.to_str().unwrap(),
            "generate",
        ])
        .assert()
        .success();
    cli()
        .args([
            "--schedule",
            schedule.to_str().unwrap(),
            "export",
            "--out-ics",
            ics.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&ics).unwrap();
    assert!(content.contains("BEGIN:VCALENDAR"));
    assert!(content.contains("BEGIN:VEVENT"));
}

#[test]
fn check_reports_double_duty_with_code_2() {
    // La configuration d'exemple cumule chaque mardi : titulaire de la
    // première tâche et renfort après-midi.
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    let schedule = dir.path().join("schedule.json");
    let report = dir.path().join("report.csv");

    cli()
        .args(["--config", config.to_str().unwrap(), "init"])
        .assert()
        .success();
    cli()
        .args([
            "--config",
            config.to_str().unwrap(),
            "--schedule",
            schedule.to_str().unwrap(),
            "generate",
        ])
        .assert()
        .success();
    cli()
        .args([
            "--schedule",
            schedule.to_str().unwrap(),
            "check",
            "--report",
            report.to_str().unwrap(),
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("double dut"));

    let content = std::fs::read_to_string(&report).unwrap();
    assert!(content.starts_with("date,staff"));
    assert!(content.contains("alice"));
}

#[test]
fn generate_fails_on_invalid_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(
        &config,
        r#"{"staff_pool": [], "task_list": ["t"], "start_date": "2026-01-05", "week_count": 1}"#,
    )
    .unwrap();

    cli()
        .args([
            "--config",
            config.to_str().unwrap(),
            "--schedule",
            dir.path().join("schedule.json").to_str().unwrap(),
            "generate",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("staff pool cannot be empty"));
}
