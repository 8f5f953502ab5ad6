use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn stdin_is_repaired_to_canonical_json() {
    let mut cmd = Command::cargo_bin("recipemend").unwrap();
    cmd.arg("--fallback-title")
        .arg("测试菜")
        .write_stdin("```json\n{'name': '宫保鸡丁' \"servings\": 2}\n```")
        .assert()
        .success()
        .stdout(predicate::str::contains("宫保鸡丁"))
        .stdout(predicate::str::contains("imageShots"));
}

#[test]
fn file_input_and_output_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = dir.path().join("raw.txt");
    let out_path = dir.path().join("record.json");
    std::fs::write(&in_path, "{\"titleZh\": \"汤\"}").unwrap();
    Command::cargo_bin("recipemend")
        .unwrap()
        .arg(in_path.to_str().unwrap())
        .arg("-o")
        .arg(out_path.to_str().unwrap())
        .assert()
        .success();
    let record = std::fs::read_to_string(&out_path).unwrap();
    assert!(record.contains("\"titleZh\":\"汤\""));
    assert!(record.contains("cover_main"));
}

#[test]
fn irrecoverable_input_exits_nonzero_with_report() {
    Command::cargo_bin("recipemend")
        .unwrap()
        .write_stdin("完全不是 JSON 的一段话")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("SyntaxRecovery"));
}

#[test]
fn warnings_flag_prints_diagnostics() {
    Command::cargo_bin("recipemend")
        .unwrap()
        .arg("--warnings")
        .write_stdin("{\"titleZh\": \"面\" \"summary\": {\"servings\": 1}}")
        .assert()
        .success()
        .stderr(predicate::str::contains("warning[commas]"));
}

#[test]
fn unknown_option_is_a_usage_error() {
    Command::cargo_bin("recipemend")
        .unwrap()
        .arg("--frobnicate")
        .assert()
        .code(2);
}
