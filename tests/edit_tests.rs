use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::env_with_data;

#[test]
fn test_edit_updates_given_fields_only() {
    let env = env_with_data("edit_fields");

    env.run()
        .args(["edit", "5", "2", "--start", "14:30", "--desc", "Code review"])
        .assert()
        .success()
        .stdout(contains("Row 2 of month 5 updated"));

    env.run()
        .args(["list", "--month", "5"])
        .assert()
        .success()
        .stdout(contains("9. 5. 2024"))
        .stdout(contains("14:30").and(contains("17:00")))
        .stdout(contains("Code review"))
        .stdout(contains("Review\n").not());
}

#[test]
fn test_edit_moves_session_to_new_month() {
    let env = env_with_data("edit_move");

    env.run()
        .args(["edit", "6", "1", "--date", "15. 7. 2024"])
        .assert()
        .success()
        .stdout(contains("moved to month 7"));

    let doc = env.document();
    assert!(doc["second"]["6"].as_array().unwrap().is_empty());
    assert_eq!(doc["second"]["7"][0]["description"], "Deploy");
}

#[test]
fn test_interactive_edit_retries_and_cancels() {
    let env = env_with_data("edit_interactive");

    // invalid time is asked again, then the edit is cancelled
    env.run()
        .args(["edit", "5", "1", "--fast", "--interactive"])
        .write_stdin("99:99\n07:15\nq\n")
        .assert()
        .success()
        .stderr(contains("Invalid time format"))
        .stdout(contains("Edit cancelled"));

    env.run()
        .args(["list", "--month", "5"])
        .assert()
        .success()
        .stdout(contains("08:00"))
        .stdout(contains("07:15").not());

    // empty lines keep the values
    env.run()
        .args(["edit", "5", "1", "--fast", "--interactive"])
        .write_stdin("07:15\n\n\n")
        .assert()
        .success()
        .stdout(contains("updated"));

    env.run()
        .args(["list", "--month", "5"])
        .assert()
        .success()
        .stdout(contains("07:15"))
        .stdout(contains("Analýza"));
}

#[test]
fn test_edit_rejects_unknown_row() {
    let env = env_with_data("edit_unknown_row");

    env.run()
        .args(["edit", "5", "3", "--desc", "x"])
        .assert()
        .failure()
        .stderr(contains("Invalid session index 3 for month 5"));
}

#[test]
fn test_del_removes_row() {
    let env = env_with_data("del_row");

    env.run()
        .args(["del", "5", "1"])
        .assert()
        .success()
        .stdout(contains("Deleted 2. 5. 2024 08:00"));

    let doc = env.document();
    let may = doc["second"]["5"].as_array().unwrap();
    assert_eq!(may.len(), 1);
    assert_eq!(may[0]["description"], "Review");
}

#[test]
fn test_clear_month_and_year() {
    let env = env_with_data("clear");

    // no confirmation on stdin keeps the data
    env.run()
        .args(["clear", "--month", "5"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));
    assert_eq!(env.document()["second"]["5"].as_array().unwrap().len(), 2);

    env.run()
        .args(["clear", "--month", "5", "--yes"])
        .assert()
        .success();
    let doc = env.document();
    assert!(doc["second"]["5"].as_array().unwrap().is_empty());
    assert_eq!(doc["second"]["6"].as_array().unwrap().len(), 1);

    env.run().args(["clear", "--yes"]).assert().success();
    let doc = env.document();
    assert!(
        doc["second"]
            .as_object()
            .unwrap()
            .values()
            .all(|m| m.as_array().unwrap().is_empty())
    );
}
