use assert_cmd::Command;
use predicates::prelude::*;

fn mdclue() -> Command {
    Command::cargo_bin("mdclue").expect("binary builds")
}

#[test]
fn help_prints_usage() {
    mdclue()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: mdclue"))
        .stdout(predicate::str::contains("--bots-only"));
}

#[test]
fn unknown_flag_fails_with_a_message() {
    mdclue()
        .arg("--wibble")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown flag: --wibble"));
}

#[test]
fn invalid_player_count_fails_setup() {
    mdclue()
        .args(["--players", "9", "--bots-only", "--seed", "1", "--delay-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the supported range"));
}

#[test]
fn bots_only_seeded_game_runs_to_completion() {
    mdclue()
        .args([
            "--bots-only",
            "--players",
            "4",
            "--seed",
            "7",
            "--delay-ms",
            "0",
            "--risk",
            "1.0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("The solution was:"));
}

#[test]
fn export_snapshot_writes_json() {
    let path = std::env::temp_dir().join(format!("mdclue-snapshot-{}.json", std::process::id()));
    mdclue()
        .args(["--export-snapshot"])
        .arg(&path)
        .args(["42", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Snapshot written"));

    let json = std::fs::read_to_string(&path).expect("snapshot file exists");
    assert!(json.contains("\"seed\": 42"));
    assert!(json.contains("Miss Scarlett"));
    let _ = std::fs::remove_file(&path);
}
