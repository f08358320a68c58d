use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{LiftlogError, Result};
use crate::model::{Exercise, ExerciseDraft};
use crate::session::Session;
use crate::store::{RecordStore, StorageBackend};
use uuid::Uuid;

fn validate(draft: &mut ExerciseDraft) -> Result<()> {
    draft.name = draft.name.trim().to_string();
    if draft.name.is_empty() {
        return Err(LiftlogError::InvalidInput(
            "exercise name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Append an exercise to the current training and re-sync history and
/// today's snapshot.
pub fn add<B: StorageBackend>(
    store: &RecordStore<B>,
    session: &mut Session,
    mut draft: ExerciseDraft,
) -> Result<CmdResult> {
    validate(&mut draft)?;

    let exercise = Exercise::new(draft);
    session.training.exercises.push(exercise.clone());
    helpers::sync_training(store, session)?;

    let mut result = CmdResult::default().with_exercises(vec![exercise.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Exercise added: {}",
        exercise.name
    )));
    Ok(result)
}

/// Replace the user-editable fields of an exercise in place, keeping its id
/// and creation time. An unknown id is a no-op.
pub fn edit<B: StorageBackend>(
    store: &RecordStore<B>,
    session: &mut Session,
    id: Uuid,
    mut draft: ExerciseDraft,
) -> Result<CmdResult> {
    validate(&mut draft)?;

    let mut result = CmdResult::default();
    let Some(exercise) = session.training.exercises.iter_mut().find(|e| e.id == id) else {
        result.add_message(CmdMessage::warning("No exercise with that id"));
        return Ok(result);
    };

    exercise.name = draft.name;
    exercise.sets = draft.sets;
    exercise.reps = draft.reps;
    exercise.weight = draft.weight;
    exercise.note = draft.note;
    let updated = exercise.clone();
    helpers::sync_training(store, session)?;

    result.add_message(CmdMessage::success(format!(
        "Exercise updated: {}",
        updated.name
    )));
    Ok(result.with_exercises(vec![updated]))
}

/// Remove an exercise from the current training. An unknown id is a no-op.
pub fn delete<B: StorageBackend>(
    store: &RecordStore<B>,
    session: &mut Session,
    id: Uuid,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(index) = session.training.exercises.iter().position(|e| e.id == id) else {
        result.add_message(CmdMessage::warning("No exercise with that id"));
        return Ok(result);
    };

    let removed = session.training.exercises.remove(index);
    helpers::sync_training(store, session)?;

    result.add_message(CmdMessage::success(format!(
        "Exercise deleted: {}",
        removed.name
    )));
    Ok(result.with_exercises(vec![removed]))
}

/// Move an exercise directly before another one. Unknown ids are a no-op
/// and skip the re-sync entirely.
pub fn reorder<B: StorageBackend>(
    store: &RecordStore<B>,
    session: &mut Session,
    moved: Uuid,
    target: Uuid,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !helpers::move_before(&mut session.training.exercises, moved, target) {
        result.add_message(CmdMessage::warning("Nothing to reorder"));
        return Ok(result);
    }

    helpers::sync_training(store, session)?;
    result.add_message(CmdMessage::success("Exercises reordered"));
    Ok(result.with_exercises(session.training.exercises.clone()))
}

/// The current training's exercise list, in user order.
pub fn list(session: &Session) -> Result<CmdResult> {
    Ok(CmdResult::default().with_exercises(session.training.exercises.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DayTraining, Training};
    use crate::store::memory::MemBackend;
    use crate::store::keys;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn setup() -> (RecordStore<MemBackend>, Session) {
        let store = RecordStore::new(MemBackend::new());
        let session = Session::load_on(&store, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        (store, session)
    }

    fn draft(name: &str) -> ExerciseDraft {
        ExerciseDraft {
            name: name.into(),
            sets: 3,
            reps: 10,
            weight: None,
            note: None,
        }
    }

    #[test]
    fn add_syncs_history_and_day_snapshot() {
        let (store, mut session) = setup();
        add(&store, &mut session, draft("Row")).unwrap();

        let saved: Vec<Training> = store.get(keys::SAVED_TRAININGS);
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].exercises.len(), 1);

        let daily: BTreeMap<NaiveDate, DayTraining> = store.get(keys::DAILY_EXERCISES);
        let snapshot = daily.get(&session.today).unwrap();
        assert_eq!(snapshot.exercises.len(), 1);
        assert_eq!(snapshot.exercises[0].name, "Row");
        assert_eq!(snapshot.exercises[0].weight, None);
    }

    #[test]
    fn add_rejects_blank_name() {
        let (store, mut session) = setup();
        assert!(add(&store, &mut session, draft("  ")).is_err());
        assert!(session.training.exercises.is_empty());
    }

    #[test]
    fn edit_keeps_id_and_created_at() {
        let (store, mut session) = setup();
        add(&store, &mut session, draft("Row")).unwrap();
        let original = session.training.exercises[0].clone();

        let mut updated = draft("Barbell Row");
        updated.weight = Some(60.0);
        edit(&store, &mut session, original.id, updated).unwrap();

        let exercise = &session.training.exercises[0];
        assert_eq!(exercise.id, original.id);
        assert_eq!(exercise.created_at, original.created_at);
        assert_eq!(exercise.name, "Barbell Row");
        assert_eq!(exercise.weight, Some(60.0));
    }

    #[test]
    fn edit_unknown_id_is_a_noop() {
        let (store, mut session) = setup();
        add(&store, &mut session, draft("Row")).unwrap();

        let result = edit(&store, &mut session, Uuid::new_v4(), draft("Ghost")).unwrap();
        assert!(result.exercises.is_empty());
        assert_eq!(session.training.exercises[0].name, "Row");
    }

    #[test]
    fn delete_removes_from_list_and_snapshot() {
        let (store, mut session) = setup();
        add(&store, &mut session, draft("Row")).unwrap();
        add(&store, &mut session, draft("Squat")).unwrap();
        let id = session.training.exercises[0].id;

        delete(&store, &mut session, id).unwrap();
        assert_eq!(session.training.exercises.len(), 1);

        let daily: BTreeMap<NaiveDate, DayTraining> = store.get(keys::DAILY_EXERCISES);
        assert_eq!(daily.get(&session.today).unwrap().exercises.len(), 1);
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let (store, mut session) = setup();
        add(&store, &mut session, draft("Row")).unwrap();

        delete(&store, &mut session, Uuid::new_v4()).unwrap();
        assert_eq!(session.training.exercises.len(), 1);
    }

    #[test]
    fn reorder_persists_new_order() {
        let (store, mut session) = setup();
        add(&store, &mut session, draft("Row")).unwrap();
        add(&store, &mut session, draft("Squat")).unwrap();
        add(&store, &mut session, draft("Bench")).unwrap();
        let bench = session.training.exercises[2].id;
        let row = session.training.exercises[0].id;

        reorder(&store, &mut session, bench, row).unwrap();

        let saved: Vec<Training> = store.get(keys::SAVED_TRAININGS);
        let order: Vec<&str> = saved[0].exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(order, vec!["Bench", "Row", "Squat"]);
    }
}
