use crate::commands::{MAX_FAVORITE_FOODS, MAX_SAVED_TRAININGS};
use crate::error::Result;
use crate::model::{DayNutrition, DayTraining, Food, HasId, Training};
use crate::session::Session;
use crate::store::{keys, RecordStore, StorageBackend};
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Move `moved` directly before `target`, the single reordering primitive.
/// Unknown ids and moved == target are no-ops. Returns whether the list
/// changed shape; length and membership are always preserved.
pub fn move_before<T: HasId>(list: &mut Vec<T>, moved: Uuid, target: Uuid) -> bool {
    if moved == target {
        return false;
    }
    let Some(from) = list.iter().position(|e| e.id() == moved) else {
        return false;
    };
    let Some(to) = list.iter().position(|e| e.id() == target) else {
        return false;
    };

    let entry = list.remove(from);
    let to = if from < to { to - 1 } else { to };
    list.insert(to, entry);
    true
}

/// Re-derive the durable training records from the session: bump
/// `lastModified`, upsert the bounded name-keyed history (most-recent-first),
/// and overwrite today's day snapshot wholesale. Called after every mutation
/// of the current exercise list.
pub fn sync_training<B: StorageBackend>(
    store: &RecordStore<B>,
    session: &mut Session,
) -> Result<()> {
    session.training.last_modified = Utc::now();

    let mut saved: Vec<Training> = store.get(keys::SAVED_TRAININGS);
    saved.retain(|t| t.name != session.training.name);
    saved.insert(0, session.training.clone());
    saved.truncate(MAX_SAVED_TRAININGS);
    store.set(keys::SAVED_TRAININGS, &saved)?;

    let mut daily: BTreeMap<NaiveDate, DayTraining> = store.get(keys::DAILY_EXERCISES);
    daily.insert(session.today, session.day_training());
    store.set(keys::DAILY_EXERCISES, &daily)
}

/// Overwrite today's nutrition snapshot from the session's food list.
pub fn sync_foods<B: StorageBackend>(store: &RecordStore<B>, session: &Session) -> Result<()> {
    let mut daily: BTreeMap<NaiveDate, DayNutrition> = store.get(keys::DAILY_FOODS);
    daily.insert(session.today, session.day_nutrition());
    store.set(keys::DAILY_FOODS, &daily)
}

/// Upsert a food into the favorites list: dedup by name, newest at the
/// front, bounded. Callers gate on `Food::has_macros`.
pub fn remember_favorite<B: StorageBackend>(store: &RecordStore<B>, food: &Food) -> Result<()> {
    let mut favorites: Vec<Food> = store.get(keys::SAVED_FOODS);
    favorites.retain(|f| f.name != food.name);
    favorites.insert(0, food.clone());
    favorites.truncate(MAX_FAVORITE_FOODS);
    store.set(keys::SAVED_FOODS, &favorites)
}
