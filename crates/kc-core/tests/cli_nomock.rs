//! CLI surface tests against the real binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_results(dir: &Path, stem: &str) {
    let mut lines = Vec::new();
    for rep in 1..=5u32 {
        for alpha in ["1/log(n)", "0.50"] {
            for n in [200u32, 1000] {
                lines.push(format!(
                    r#"{{"rep":{rep},"alpha":"{alpha}","n":{n},"kmode":2,"kMAP":2,"kVI":2,"kBinder":3}}"#
                ));
            }
        }
    }
    fs::write(dir.join(format!("{stem}.jsonl")), lines.join("\n")).unwrap();
}

#[test]
fn check_prints_a_text_summary() {
    let tmp = tempfile::tempdir().unwrap();
    write_results(tmp.path(), "miller_results");

    let mut cmd = Command::cargo_bin("kcomp").unwrap();
    cmd.args(["check", "--scenario", "miller", "--results-dir"])
        .arg(tmp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("miller: 20 rows"));
}

#[test]
fn check_emits_json_when_asked() {
    let tmp = tempfile::tempdir().unwrap();
    write_results(tmp.path(), "miller_results");

    let mut cmd = Command::cargo_bin("kcomp").unwrap();
    cmd.args(["check", "--scenario", "miller", "-f", "json", "--results-dir"])
        .arg(tmp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""scenario": "miller""#));
}

#[test]
fn missing_results_dir_exits_with_data_error() {
    let tmp = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("kcomp").unwrap();
    cmd.args(["check", "--results-dir"])
        .arg(tmp.path().join("nope"));
    cmd.assert()
        .failure()
        .code(10)
        .stderr(predicate::str::contains("result file not found"));
}

#[test]
fn render_writes_the_report_file() {
    let tmp = tempfile::tempdir().unwrap();
    for stem in ["miller_results", "raj4_results", "raj3_results"] {
        write_results(tmp.path(), stem);
    }
    let out = tmp.path().join("out.html");

    let mut cmd = Command::cargo_bin("kcomp").unwrap();
    cmd.args(["render", "--quiet", "--out"])
        .arg(&out)
        .arg("--results-dir")
        .arg(tmp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("out.html"));
    assert!(out.exists());
}
