//! Result-table loader tests over real files.

use std::fs;
use std::path::Path;

use kc_common::{AlphaLevel, Estimator, Scenario};
use kc_data::{DataError, ResultTable};

fn write_table(dir: &Path, scenario: Scenario, lines: &[&str]) {
    let path = dir.join(format!("{}.jsonl", scenario.result_stem()));
    fs::write(path, lines.join("\n")).unwrap();
}

fn sample_lines() -> Vec<String> {
    let mut lines = Vec::new();
    for rep in 1..=5u32 {
        for alpha in ["1/log(n)", "0.50", "1.00", "2.00"] {
            for n in [200u32, 1000] {
                lines.push(format!(
                    r#"{{"rep":{rep},"alpha":"{alpha}","n":{n},"kmode":2,"kMAP":3,"kVI":{},"kBinder":{}}}"#,
                    2 + rep % 3,
                    4 + rep % 5,
                ));
            }
        }
    }
    lines
}

#[test]
fn loads_rows_levels_and_sizes() {
    let tmp = tempfile::tempdir().unwrap();
    let lines = sample_lines();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    write_table(tmp.path(), Scenario::Miller, &refs);

    let table = ResultTable::load(tmp.path(), Scenario::Miller).unwrap();
    assert_eq!(table.len(), 40);
    assert_eq!(table.replicates(), 5);
    assert_eq!(
        table.alpha_levels(),
        vec![
            AlphaLevel::Adaptive { numerator: 1 },
            AlphaLevel::Fixed(0.5),
            AlphaLevel::Fixed(1.0),
            AlphaLevel::Fixed(2.0),
        ]
    );
    assert_eq!(table.sample_sizes(), vec![200, 1000]);

    let cell = table.counts(Estimator::Mode, AlphaLevel::Fixed(0.5), 200);
    assert_eq!(cell.len(), 5);
    assert!(cell.iter().all(|k| *k == 2.0));
}

#[test]
fn repeated_loads_are_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    let lines = sample_lines();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    write_table(tmp.path(), Scenario::Raj4, &refs);

    let first = ResultTable::load(tmp.path(), Scenario::Raj4).unwrap();
    let second = ResultTable::load(tmp.path(), Scenario::Raj4).unwrap();
    assert_eq!(first.len(), second.len());
    assert_eq!(first.alpha_levels(), second.alpha_levels());
    assert_eq!(first.sample_sizes(), second.sample_sizes());
}

#[test]
fn missing_file_is_a_fatal_error_naming_the_path() {
    let tmp = tempfile::tempdir().unwrap();
    let err = ResultTable::load(tmp.path(), Scenario::Raj3).unwrap_err();
    match err {
        DataError::MissingFile(path) => {
            assert!(path.ends_with("raj3_results.jsonl"), "{path:?}");
        }
        other => panic!("expected MissingFile, got {other:?}"),
    }
}

#[test]
fn malformed_line_reports_line_number() {
    let tmp = tempfile::tempdir().unwrap();
    write_table(
        tmp.path(),
        Scenario::Miller,
        &[
            r#"{"rep":1,"alpha":"0.50","n":200,"kmode":2,"kMAP":2,"kVI":2,"kBinder":2}"#,
            "not json",
        ],
    );
    let err = ResultTable::load(tmp.path(), Scenario::Miller).unwrap_err();
    match err {
        DataError::MalformedRow { line, .. } => assert_eq!(line, 2),
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn count_exceeding_sample_size_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    write_table(
        tmp.path(),
        Scenario::Miller,
        &[r#"{"rep":1,"alpha":"0.50","n":10,"kmode":2,"kMAP":11,"kVI":2,"kBinder":2}"#],
    );
    let err = ResultTable::load(tmp.path(), Scenario::Miller).unwrap_err();
    match err {
        DataError::InvalidRow { line, detail, .. } => {
            assert_eq!(line, 1);
            assert!(detail.contains("kMAP"), "{detail}");
        }
        other => panic!("expected InvalidRow, got {other:?}"),
    }
}

#[test]
fn zero_count_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    write_table(
        tmp.path(),
        Scenario::Miller,
        &[r#"{"rep":1,"alpha":"0.50","n":10,"kmode":0,"kMAP":1,"kVI":1,"kBinder":1}"#],
    );
    let err = ResultTable::load(tmp.path(), Scenario::Miller).unwrap_err();
    assert!(matches!(err, DataError::InvalidRow { .. }), "{err:?}");
}

#[test]
fn empty_file_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    write_table(tmp.path(), Scenario::Miller, &["", "  "]);
    let err = ResultTable::load(tmp.path(), Scenario::Miller).unwrap_err();
    assert!(matches!(err, DataError::EmptyTable(_)), "{err:?}");
}

#[test]
fn unknown_alpha_level_is_malformed() {
    let tmp = tempfile::tempdir().unwrap();
    write_table(
        tmp.path(),
        Scenario::Miller,
        &[r#"{"rep":1,"alpha":"sometimes","n":10,"kmode":1,"kMAP":1,"kVI":1,"kBinder":1}"#],
    );
    let err = ResultTable::load(tmp.path(), Scenario::Miller).unwrap_err();
    assert!(matches!(err, DataError::MalformedRow { .. }), "{err:?}");
}
