use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const CLAUSE: &str = "AXIS rows\n  GROUP [Anio]\n  GROUP [Mes]\nAXIS columns\n  GROUP [Categoria]\n";

#[allow(deprecated)]
fn cli() -> Command {
    let mut cmd = Command::cargo_bin("context-grid").expect("binary");
    cmd.arg("--quiet");
    cmd
}

fn run_json(args: &[&str], stdin: &str) -> Value {
    let output = cli()
        .args(args)
        .write_stdin(stdin)
        .output()
        .expect("command run");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn parse_prints_axes_and_skipped_lines() {
    let body = run_json(&["parse"], "GROUP [X]\nAXIS rows\nGROUP [Y]\n");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["axes"]["ROWS"], serde_json::json!(["Y"]));
    assert_eq!(body["axes"]["COLUMNS"], serde_json::json!([]));
    assert_eq!(body["skipped"][0]["line_no"], 1);
    assert_eq!(body["skipped"][0]["reason"], "group_outside_axis");
}

#[test]
fn build_json_from_stdin() {
    let body = run_json(&["build"], CLAUSE);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["graph"]["nodes"].as_array().unwrap().len(), 6);
    assert_eq!(body["graph"]["edges"].as_array().unwrap().len(), 7);
    assert_eq!(body["graph"]["rows"], 2);
    assert_eq!(body["graph"]["columns"], 1);
}

#[test]
fn build_empty_clause_signals_empty() {
    let body = run_json(&["build"], "");
    assert_eq!(body["status"], "empty");
}

#[test]
fn build_dot_from_file_with_config() {
    let temp = tempdir().unwrap();
    let clause = temp.path().join("clause.txt");
    let config = temp.path().join("style.toml");
    fs::write(&clause, CLAUSE).unwrap();
    fs::write(&config, "rankdir = \"LR\"\n[intersection]\nfill_color = \"salmon\"\n").unwrap();

    cli()
        .arg("build")
        .arg("--input")
        .arg(&clause)
        .arg("--format")
        .arg("dot")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph context_grid {"))
        .stdout(predicate::str::contains("rankdir=LR;"))
        .stdout(predicate::str::contains(r#""R_2" -> "I_2_1";"#))
        .stdout(predicate::str::contains(r#"shape="ellipse", fillcolor="salmon""#));
}

#[test]
fn build_dot_empty_prints_nothing() {
    cli()
        .args(["build", "--format", "dot"])
        .write_stdin("just some text\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn invalid_config_fails() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("style.toml");
    fs::write(&config, "rankdir = \"sideways\"\n").unwrap();

    cli()
        .args(["build", "--config"])
        .arg(&config)
        .write_stdin(CLAUSE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("rankdir"));
}

#[test]
fn missing_input_file_fails() {
    cli()
        .args(["check", "--input", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read axis clause"));
}

#[test]
fn check_reports_counts() {
    cli()
        .arg("check")
        .write_stdin("AXIS columns\nGROUP [A]\nGROUP [B]\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes: 3"))
        .stdout(predicate::str::contains("edges: 2"))
        .stdout(predicate::str::contains("intersections: 0"));
}

#[test]
fn check_empty_clause() {
    cli()
        .arg("check")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::diff("empty\n"));
}
