use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{LiftlogError, Result};
use crate::model::Training;
use crate::session::Session;
use crate::store::{keys, RecordStore, StorageBackend};

/// Replace the current training with a fresh empty one and persist it
/// immediately. An empty (or all-whitespace) name rejects the operation
/// before any state changes.
pub fn create<B: StorageBackend>(
    store: &RecordStore<B>,
    session: &mut Session,
    name: &str,
) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LiftlogError::InvalidInput(
            "training name must not be empty".to_string(),
        ));
    }

    session.training = Training::new(name);
    helpers::sync_training(store, session)?;

    let mut result = CmdResult::default().with_trainings(vec![session.training.clone()]);
    result.add_message(CmdMessage::success(format!("Training created: {}", name)));
    Ok(result)
}

/// Rename the current training and re-key it in the saved history. The old
/// name's entry is dropped so the rename does not leave a ghost behind; if
/// another saved training already uses the new name, it is overwritten
/// (history identity is by name).
pub fn rename<B: StorageBackend>(
    store: &RecordStore<B>,
    session: &mut Session,
    name: &str,
) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LiftlogError::InvalidInput(
            "training name must not be empty".to_string(),
        ));
    }

    let mut saved: Vec<Training> = store.get(keys::SAVED_TRAININGS);
    saved.retain(|t| t.name != session.training.name);
    store.set(keys::SAVED_TRAININGS, &saved)?;

    session.training.name = name.to_string();
    helpers::sync_training(store, session)?;

    let mut result = CmdResult::default().with_trainings(vec![session.training.clone()]);
    result.add_message(CmdMessage::success(format!("Training renamed: {}", name)));
    Ok(result)
}

/// Make the most recently modified saved training current. The history is
/// kept most-recent-first, so this is the first entry. Loading does not
/// touch today's day snapshot; that re-syncs on the next mutation.
pub fn load_most_recent<B: StorageBackend>(
    store: &RecordStore<B>,
    session: &mut Session,
) -> Result<CmdResult> {
    let saved: Vec<Training> = store.get(keys::SAVED_TRAININGS);
    let mut result = CmdResult::default();

    match saved.into_iter().next() {
        Some(training) => {
            result.add_message(CmdMessage::info(format!(
                "Training loaded: {}",
                training.name
            )));
            result.trainings.push(training.clone());
            session.training = training;
        }
        None => result.add_message(CmdMessage::warning("No saved trainings yet")),
    }
    Ok(result)
}

/// Look up a saved training by name and make it current, leaving the saved
/// entry in place. An unknown name is a no-op.
pub fn load_by_name<B: StorageBackend>(
    store: &RecordStore<B>,
    session: &mut Session,
    name: &str,
) -> Result<CmdResult> {
    let saved: Vec<Training> = store.get(keys::SAVED_TRAININGS);
    let mut result = CmdResult::default();

    match saved.into_iter().find(|t| t.name == name) {
        Some(training) => {
            result.add_message(CmdMessage::info(format!(
                "Training loaded: {}",
                training.name
            )));
            result.trainings.push(training.clone());
            session.training = training;
        }
        None => result.add_message(CmdMessage::warning(format!("No training named {}", name))),
    }
    Ok(result)
}

/// The saved history, most recently modified first.
pub fn list_saved<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let saved: Vec<Training> = store.get(keys::SAVED_TRAININGS);
    Ok(CmdResult::default().with_trainings(saved))
}
