//! Tests for roster loading, schema validation, and decoding

use std::path::PathBuf;

use rstest::{fixture, rstest};
use tempfile::TempDir;

use orgtree::util::testing;
use orgtree::{
    build_hierarchies, decode_roster, exitcode, read_roster, render_summary, validate_roster,
    RosterError,
};

fn create_roster_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write roster file");
    path
}

/// Happy-path roster JSON
#[fixture]
fn roster_json() -> &'static str {
    r#"[
        {"first_name": "Dave", "id": 1, "manager": 2, "salary": 100000},
        {"first_name": "Jeff", "id": 2, "manager": null, "salary": 110000},
        {"first_name": "Andy", "id": 3, "manager": 1, "salary": 90000},
        {"first_name": "Jason", "id": 4, "manager": 1, "salary": 80000},
        {"first_name": "Dan", "id": 5, "manager": 1, "salary": 70000},
        {"first_name": "Rick", "id": 6, "manager": 1, "salary": 60000},
        {"first_name": "Suzanne", "id": 9, "manager": 1, "salary": 80000}
    ]"#
}

/// Roster JSON that should fail schema validation, one violation per entry
#[fixture]
fn bad_roster_json() -> &'static str {
    r#"[
        {"first_name": "Dave", "manager": 2, "salary": 100000},
        {"first_name": null, "id": 2, "manager": null, "salary": 110000},
        {"first_name": 5, "id": 3, "manager": 1, "salary": 90000},
        {"first_name": "Jason", "id": 4, "salary": 80000},
        {"first_name": "Dan", "id": 5, "manager": 1, "salary": "one million"},
        {"first_name": "Suzanne", "id": 9, "manager": 1, "salary": 80000, "age": 34}
    ]"#
}

#[rstest]
fn given_valid_roster_file_when_loading_then_validates_and_decodes(roster_json: &str) {
    testing::init_test_setup();

    let temp = TempDir::new().unwrap();
    let path = create_roster_file(&temp, "input.json", roster_json);

    let roster = read_roster(&path).unwrap();
    assert!(validate_roster(&roster).is_empty());

    let employees = decode_roster(roster).unwrap();
    assert_eq!(employees.len(), 7);
    assert_eq!(employees[0].first_name, "Dave");
    assert_eq!(employees[0].manager, Some(2));
    assert_eq!(employees[1].manager, None);
    assert_eq!(employees[6].salary, 80000.0);
}

#[rstest]
fn given_valid_roster_when_rendering_end_to_end_then_summary_matches(roster_json: &str) {
    let temp = TempDir::new().unwrap();
    let path = create_roster_file(&temp, "input.json", roster_json);

    let employees = decode_roster(read_roster(&path).unwrap()).unwrap();
    let forest = build_hierarchies(&employees);
    let summary = render_summary(&employees, &forest);

    assert!(summary.starts_with("    - Jeff"));
    assert!(summary.ends_with("Total salary: 590000"));
}

#[rstest]
fn given_bad_roster_when_validating_then_one_sorted_message_per_violation(bad_roster_json: &str) {
    let temp = TempDir::new().unwrap();
    let path = create_roster_file(&temp, "bad.json", bad_roster_json);

    let roster = read_roster(&path).unwrap();
    let errors = validate_roster(&roster);

    assert_eq!(errors.len(), 6);

    let mut sorted = errors.clone();
    sorted.sort();
    assert_eq!(errors, sorted);

    assert!(errors.iter().any(|e| e.contains("is a required property")));
    assert!(errors.iter().any(|e| e.contains("is not of type")));
    assert!(errors
        .iter()
        .any(|e| e.contains("Additional properties are not allowed")));
}

#[rstest]
fn given_empty_list_when_loading_then_valid_and_summary_is_bare_total() {
    let temp = TempDir::new().unwrap();
    let path = create_roster_file(&temp, "empty.json", "[]");

    let roster = read_roster(&path).unwrap();
    assert!(validate_roster(&roster).is_empty());

    let employees = decode_roster(roster).unwrap();
    assert!(employees.is_empty());

    let forest = build_hierarchies(&employees);
    assert_eq!(render_summary(&employees, &forest), "Total salary: 0");
}

#[rstest]
fn given_missing_file_when_reading_then_read_error_with_noinput_exit_code() {
    let result = read_roster(&PathBuf::from("/nonexistent/roster.json"));

    let err = result.unwrap_err();
    assert!(matches!(err, RosterError::Read { .. }));
    assert_eq!(err.exit_code(), exitcode::NOINPUT);
    assert!(err.to_string().contains("/nonexistent/roster.json"));
}

#[rstest]
fn given_malformed_json_when_reading_then_parse_error_with_dataerr_exit_code() {
    let temp = TempDir::new().unwrap();
    let path = create_roster_file(&temp, "broken.json", "[{\"first_name\": ");

    let err = read_roster(&path).unwrap_err();
    assert!(matches!(err, RosterError::Parse { .. }));
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[rstest]
fn given_fractional_id_when_decoding_then_decode_error() {
    // Passes shape validation ("number") but cannot decode to an integer id.
    let temp = TempDir::new().unwrap();
    let path = create_roster_file(
        &temp,
        "frac.json",
        r#"[{"first_name": "Ana", "id": 1.5, "manager": null, "salary": 1000}]"#,
    );

    let roster = read_roster(&path).unwrap();
    assert!(validate_roster(&roster).is_empty());

    let err = decode_roster(roster).unwrap_err();
    assert!(matches!(err, RosterError::Decode(_)));
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}
