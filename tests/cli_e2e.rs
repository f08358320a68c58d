use assert_cmd::Command;
use predicates::prelude::*;

fn liftlog(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("liftlog").unwrap();
    cmd.env("LIFTLOG_DATA_DIR", dir).env("NO_COLOR", "1");
    cmd
}

#[test]
fn exercise_add_and_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    liftlog(temp_dir.path())
        .args(["training", "new", "Push Day"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Training created: Push Day"));

    liftlog(temp_dir.path())
        .args(["exercise", "add", "Bench Press", "--sets", "5", "--reps", "5", "--weight", "80"])
        .assert()
        .success();

    liftlog(temp_dir.path())
        .args(["exercise", "list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Push Day"))
        .stdout(predicates::str::contains("Bench Press"))
        .stdout(predicates::str::contains("5x5"))
        .stdout(predicates::str::contains("80kg"));
}

#[test]
fn food_log_shows_in_day_summary() {
    let temp_dir = tempfile::tempdir().unwrap();

    liftlog(temp_dir.path())
        .args(["food", "add", "Egg", "--calories", "70", "--protein", "6"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Food logged: Egg"));

    liftlog(temp_dir.path())
        .arg("day")
        .assert()
        .success()
        .stdout(predicates::str::contains("Egg"))
        .stdout(predicates::str::contains("70 cal"))
        .stdout(predicates::str::contains("6g protein"));

    liftlog(temp_dir.path())
        .args(["food", "favorites"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Egg"));
}

#[test]
fn empty_training_name_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    liftlog(temp_dir.path())
        .args(["training", "new", "   "])
        .assert()
        .failure()
        .stderr(predicates::str::contains("must not be empty"));
}

#[test]
fn calendar_prints_a_six_week_grid() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = liftlog(temp_dir.path())
        .args(["calendar", "2024-03"])
        .assert()
        .success()
        .stdout(predicates::str::contains("March 2024"))
        .stdout(predicates::str::contains("Sun Mon Tue Wed Thu Fri Sat"))
        .get_output()
        .clone();

    // Header, weekday row, six week rows, legend.
    let lines = String::from_utf8(output.stdout).unwrap().lines().count();
    assert_eq!(lines, 9);
}

#[test]
fn out_of_range_index_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    liftlog(temp_dir.path())
        .args(["exercise", "rm", "3"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("no exercise at position 3"));
}
