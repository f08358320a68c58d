use chrono::NaiveDate;
use liftlog::api::TrackerApi;
use liftlog::model::{AppSettings, ExerciseDraft, FoodDraft, SizeChoice};
use liftlog::store::fs::FileBackend;
use std::path::Path;

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn open(dir: &Path, date: &str) -> TrackerApi<FileBackend> {
    TrackerApi::open_on(FileBackend::new(dir), day(date))
}

fn row() -> ExerciseDraft {
    ExerciseDraft {
        name: "Row".into(),
        sets: 3,
        reps: 10,
        weight: None,
        note: None,
    }
}

fn squat() -> ExerciseDraft {
    ExerciseDraft {
        name: "Squat".into(),
        sets: 5,
        reps: 5,
        weight: Some(100.0),
        note: Some("pause at the bottom".into()),
    }
}

#[test]
fn training_survives_a_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut api = open(dir.path(), "2024-03-11");
        api.create_training("Push Day").unwrap();
        api.add_exercise(row()).unwrap();
        api.add_exercise(squat()).unwrap();

        let exercises = &api.session().training.exercises;
        let (squat_id, row_id) = (exercises[1].id, exercises[0].id);
        api.move_exercise_before(squat_id, row_id).unwrap();
    }

    let api = open(dir.path(), "2024-03-11");
    let training = &api.session().training;
    assert_eq!(training.name, "Push Day");
    let order: Vec<&str> = training.exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(order, vec!["Squat", "Row"]);

    // Optional fields round-trip through disk as absent/present.
    assert_eq!(training.exercises[1].weight, None);
    assert_eq!(training.exercises[0].weight, Some(100.0));
    assert_eq!(
        training.exercises[0].note.as_deref(),
        Some("pause at the bottom")
    );
}

#[test]
fn day_snapshots_track_the_session_date() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut api = open(dir.path(), "2024-03-11");
        api.add_exercise(row()).unwrap();
        api.add_food(FoodDraft {
            name: "Egg".into(),
            calories: Some(70.0),
            protein: Some(6.0),
            ..FoodDraft::default()
        })
        .unwrap();
    }

    let api = open(dir.path(), "2024-03-12");
    assert!(api.has_data(day("2024-03-11")));
    assert!(!api.has_data(day("2024-03-12")));

    let summary = api.day_summary(day("2024-03-11")).unwrap().summary.unwrap();
    assert_eq!(summary.exercises.len(), 1);
    assert_eq!(summary.foods.len(), 1);
    assert_eq!(summary.totals.calories, 70.0);

    // A new day starts with an empty food list; yesterday's snapshot stays.
    assert!(api.session().foods.is_empty());
}

#[test]
fn favorites_survive_and_quick_add_relogs() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut api = open(dir.path(), "2024-03-11");
        api.add_food(FoodDraft {
            name: "Egg".into(),
            calories: Some(70.0),
            ..FoodDraft::default()
        })
        .unwrap();
        api.add_food(FoodDraft {
            name: "Water".into(),
            ..FoodDraft::default()
        })
        .unwrap();
    }

    let mut api = open(dir.path(), "2024-03-12");
    let favorites = api.favorite_foods().unwrap().favorites;
    assert_eq!(favorites.len(), 1, "macro-free food must not be a favorite");
    assert_eq!(favorites[0].name, "Egg");

    api.quick_add_food(favorites[0].id).unwrap();
    let foods = &api.session().foods;
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0].name, "Egg");
    assert_ne!(foods[0].id, favorites[0].id);
    assert!(api.has_data(day("2024-03-12")));
}

#[test]
fn corrupt_records_degrade_to_empty_defaults() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut api = open(dir.path(), "2024-03-11");
        api.create_training("Push Day").unwrap();
    }
    std::fs::write(dir.path().join("savedTrainings.json"), "{broken").unwrap();

    let mut api = open(dir.path(), "2024-03-11");
    assert_eq!(api.session().training.name, "My Training");
    assert!(api.saved_trainings().unwrap().trainings.is_empty());

    // The store stays usable after degradation.
    api.create_training("Fresh Start").unwrap();
    assert_eq!(api.saved_trainings().unwrap().trainings.len(), 1);
}

#[test]
fn settings_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let api = open(dir.path(), "2024-03-11");
        api.save_settings(AppSettings {
            dark_mode: true,
            block_size: SizeChoice::Large,
            font_size: SizeChoice::Small,
        })
        .unwrap();
    }

    let api = open(dir.path(), "2024-03-11");
    let settings = api.settings().unwrap().settings.unwrap();
    assert!(settings.dark_mode);
    assert_eq!(settings.block_size, SizeChoice::Large);

    api.reset_settings().unwrap();
    let settings = api.settings().unwrap().settings.unwrap();
    assert_eq!(settings, AppSettings::default());
}
