//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn prezquiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("prezquiz").unwrap()
}

const SMALL_DATASET: &str = r#"
[dataset]
name = "Founders"

[[presidents]]
order = 1
name = "George Washington"
year = 1789

[[presidents]]
order = 2
name = "John Adams"
year = 1797

[[presidents]]
order = 3
name = "Thomas Jefferson"
year = 1801
"#;

fn write_dataset(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("dataset.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn help_output() {
    prezquiz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz game for US presidents"));
}

#[test]
fn version_output() {
    prezquiz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("prezquiz"));
}

#[test]
fn list_full_builtin_table() {
    prezquiz()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Abraham Lincoln"))
        .stdout(predicate::str::contains("47 presidents"));
}

#[test]
fn list_single_entity_range() {
    prezquiz()
        .args(["list", "--range", "16", "16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Abraham Lincoln"))
        .stdout(predicate::str::contains("1861"))
        .stdout(predicate::str::contains("1 presidents"));
}

#[test]
fn list_rejects_inverted_range() {
    prezquiz()
        .args(["list", "--range", "5", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid range"));
}

#[test]
fn repeat_conflicts_with_end_early() {
    prezquiz()
        .args(["play", "--repeat", "--end-early"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn validate_valid_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, SMALL_DATASET);

    prezquiz()
        .arg("validate")
        .arg("--dataset")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 presidents"))
        .stdout(predicate::str::contains("Dataset valid"));
}

#[test]
fn validate_reports_shared_name_warning() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        &dir,
        r#"
[[presidents]]
order = 1
name = "George Bush"
year = 1989

[[presidents]]
order = 2
name = "Junior Bush"
year = 2001
"#,
    );

    prezquiz()
        .arg("validate")
        .arg("--dataset")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING"))
        .stdout(predicate::str::contains("'bush'"));
}

#[test]
fn validate_rejects_order_gap() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        &dir,
        r#"
[[presidents]]
order = 1
name = "George Washington"
year = 1789

[[presidents]]
order = 3
name = "Thomas Jefferson"
year = 1801
"#,
    );

    prezquiz()
        .arg("validate")
        .arg("--dataset")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_nonexistent_dataset() {
    prezquiz()
        .args(["validate", "--dataset", "no_such_file.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn play_end_early_asks_each_order_once() {
    // Three garbage answers drain the [1,3] pool; the session must end
    // by itself after exactly three questions.
    prezquiz()
        .args(["play", "--end-early", "--range", "1", "3", "--seed", "42"])
        .write_stdin("x\nx\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All presidents have been asked"))
        .stdout(predicate::str::contains(
            "Total: 0 correct, 3 incorrect of 3 asked",
        ));
}

#[test]
fn play_verbose_echoes_correct_answer_on_miss() {
    prezquiz()
        .args([
            "play",
            "--end-early",
            "--range",
            "16",
            "16",
            "--verbosity",
            "2",
            "--seed",
            "7",
        ])
        .write_stdin("not an answer\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrong!"))
        .stdout(predicate::str::contains("The correct answer is"));
}

#[test]
fn play_quiet_json_summary() {
    prezquiz()
        .args([
            "play",
            "--end-early",
            "--range",
            "1",
            "3",
            "--verbosity",
            "0",
            "--format",
            "json",
            "--seed",
            "1",
        ])
        .write_stdin("a\nb\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 3"))
        .stdout(predicate::str::contains("\"incorrect\": 3"))
        .stdout(predicate::str::contains("Wrong!").not());
}

#[test]
fn play_ends_gracefully_on_empty_input() {
    prezquiz()
        .arg("play")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total: 0 correct, 0 incorrect of 0 asked",
        ));
}

#[test]
fn play_rejects_out_of_bounds_range() {
    prezquiz()
        .args(["play", "--range", "1", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid range"));
}

#[test]
fn play_with_custom_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, SMALL_DATASET);

    prezquiz()
        .arg("play")
        .arg("--end-early")
        .arg("--dataset")
        .arg(&path)
        .arg("--seed")
        .arg("3")
        .write_stdin("x\nx\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("of 3 asked"));
}
