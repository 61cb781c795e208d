use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

const PASSING_LOG: &str = "testStarted id=\"1\" name=\"A\"\ntestFinished id=\"1\" duration=\"50\" result=OK\n";
const MIXED_LOG: &str = "\
testStarted id=\"1\" name=\"A\"
testFinished id=\"1\" duration=\"50\" result=OK
testStarted id=\"2\" name=\"B\"
testFinished id=\"2\" duration=\"10\" result=FAIL error=\"boom\"
";

fn testagg(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("testagg").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_aggregate_file_text_output() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("run.log");
    fs::write(&log, MIXED_LOG).unwrap();

    testagg(&dir)
        .arg("aggregate")
        .arg("--file")
        .arg(&log)
        .arg("--bar-width")
        .arg("10")
        .assert()
        .success()
        .stdout(contains("[#####.....]"))
        .stdout(contains("Total number of tests: 2"))
        .stdout(contains("Number of failed tests with errors: 1"))
        .stdout(contains("Pass rate: 50.00%"));
}

#[test]
fn test_aggregate_stdin() {
    let dir = TempDir::new().unwrap();
    testagg(&dir)
        .arg("aggregate")
        .write_stdin(PASSING_LOG)
        .assert()
        .success()
        .stdout(contains("Average test duration: 50.00 ms"));
}

#[test]
fn test_aggregate_json_format() {
    let dir = TempDir::new().unwrap();
    let out = testagg(&dir)
        .arg("aggregate")
        .arg("--text")
        .arg(MIXED_LOG)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["schema_version"], 1);
    assert_eq!(v["report"]["total_tests"], 2);
    assert_eq!(v["report"]["pass_rate"], 0.5);
}

#[test]
fn test_aggregate_no_tests() {
    let dir = TempDir::new().unwrap();
    testagg(&dir)
        .arg("aggregate")
        .arg("--text")
        .arg("testFinished id=\"9\" duration=\"1\" result=OK")
        .assert()
        .success()
        .stdout(contains("No tests to aggregate."))
        .stdout(contains("Number of omitted lines: 1"));
}

#[test]
fn test_aggregate_rejects_binary_file() {
    let dir = TempDir::new().unwrap();
    let bin = dir.path().join("image.png");
    fs::write(&bin, [0x89u8, b'P', b'N', b'G', 0, 0, 0xff]).unwrap();

    testagg(&dir)
        .arg("aggregate")
        .arg("--file")
        .arg(&bin)
        .assert()
        .code(2)
        .stderr(contains("only text input is allowed"));
}

#[test]
fn test_aggregate_rejects_empty_input() {
    let dir = TempDir::new().unwrap();
    testagg(&dir)
        .arg("aggregate")
        .arg("--text")
        .arg("   \n  ")
        .assert()
        .code(2)
        .stderr(contains("input is empty"));
}

#[test]
fn test_aggregate_empty_file_reports_no_tests() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("empty.log");
    fs::write(&log, "").unwrap();

    testagg(&dir)
        .arg("aggregate")
        .arg("--file")
        .arg(&log)
        .assert()
        .success()
        .stdout(contains("No tests to aggregate."))
        .stdout(contains("Number of omitted lines: 0"));
}

#[test]
fn test_aggregate_rejects_empty_stdin() {
    let dir = TempDir::new().unwrap();
    testagg(&dir)
        .arg("aggregate")
        .write_stdin("\n\n")
        .assert()
        .code(2)
        .stderr(contains("input is empty"));
}

#[test]
fn test_aggregate_missing_file() {
    let dir = TempDir::new().unwrap();
    testagg(&dir)
        .arg("aggregate")
        .arg("--file")
        .arg(dir.path().join("nope.log"))
        .assert()
        .code(2)
        .stderr(contains("failed to read log file"));
}

#[test]
fn test_min_pass_rate_gate() {
    let dir = TempDir::new().unwrap();
    testagg(&dir)
        .arg("aggregate")
        .arg("--text")
        .arg(MIXED_LOG)
        .arg("--min-pass-rate")
        .arg("0.8")
        .assert()
        .code(1)
        .stderr(contains("Pass rate threshold not met"));

    testagg(&dir)
        .arg("aggregate")
        .arg("--text")
        .arg(MIXED_LOG)
        .arg("--min-pass-rate")
        .arg("0.5")
        .assert()
        .success();
}

#[test]
fn test_threshold_from_default_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("testagg.yaml"),
        "configVersion: 1\nthresholds:\n  min_pass_rate: 0.9\noutput:\n  format: markdown\n",
    )
    .unwrap();

    testagg(&dir)
        .arg("aggregate")
        .arg("--text")
        .arg(MIXED_LOG)
        .assert()
        .code(1)
        .stdout(contains("| Pass rate | 50.00% |"));
}

#[test]
fn test_invalid_config_is_config_error() {
    let dir = TempDir::new().unwrap();
    let cfg = dir.path().join("bad.yaml");
    fs::write(&cfg, "configVersion: 3\n").unwrap();

    testagg(&dir)
        .arg("aggregate")
        .arg("--config")
        .arg(&cfg)
        .arg("--text")
        .arg(PASSING_LOG)
        .assert()
        .code(2)
        .stderr(contains("unsupported config version 3"));
}
