use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{LiftlogError, Result};
use crate::model::{Food, FoodDraft};
use crate::session::Session;
use crate::store::{keys, RecordStore, StorageBackend};
use chrono::Utc;
use uuid::Uuid;

fn validate(draft: &mut FoodDraft) -> Result<()> {
    draft.name = draft.name.trim().to_string();
    if draft.name.is_empty() {
        return Err(LiftlogError::InvalidInput(
            "food name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Log a food for today. Foods carrying at least one macro are also
/// upserted into the favorites list for quick re-adding; a bare name never
/// is.
pub fn add<B: StorageBackend>(
    store: &RecordStore<B>,
    session: &mut Session,
    mut draft: FoodDraft,
) -> Result<CmdResult> {
    validate(&mut draft)?;

    let food = Food::new(draft);
    session.foods.push(food.clone());
    helpers::sync_foods(store, session)?;
    if food.has_macros() {
        helpers::remember_favorite(store, &food)?;
    }

    let mut result = CmdResult::default().with_foods(vec![food.clone()]);
    result.add_message(CmdMessage::success(format!("Food logged: {}", food.name)));
    Ok(result)
}

/// Replace the user-editable fields of a logged food in place. An unknown
/// id is a no-op. Editing never touches the favorites list.
pub fn edit<B: StorageBackend>(
    store: &RecordStore<B>,
    session: &mut Session,
    id: Uuid,
    mut draft: FoodDraft,
) -> Result<CmdResult> {
    validate(&mut draft)?;

    let mut result = CmdResult::default();
    let Some(food) = session.foods.iter_mut().find(|f| f.id == id) else {
        result.add_message(CmdMessage::warning("No food with that id"));
        return Ok(result);
    };

    food.name = draft.name;
    food.calories = draft.calories;
    food.protein = draft.protein;
    food.carbs = draft.carbs;
    food.fats = draft.fats;
    food.note = draft.note;
    let updated = food.clone();
    helpers::sync_foods(store, session)?;

    result.add_message(CmdMessage::success(format!("Food updated: {}", updated.name)));
    Ok(result.with_foods(vec![updated]))
}

/// Remove a food from today's list. An unknown id is a no-op.
pub fn delete<B: StorageBackend>(
    store: &RecordStore<B>,
    session: &mut Session,
    id: Uuid,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(index) = session.foods.iter().position(|f| f.id == id) else {
        result.add_message(CmdMessage::warning("No food with that id"));
        return Ok(result);
    };

    let removed = session.foods.remove(index);
    helpers::sync_foods(store, session)?;

    result.add_message(CmdMessage::success(format!("Food deleted: {}", removed.name)));
    Ok(result.with_foods(vec![removed]))
}

/// Move a food directly before another one in today's list.
pub fn reorder<B: StorageBackend>(
    store: &RecordStore<B>,
    session: &mut Session,
    moved: Uuid,
    target: Uuid,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !helpers::move_before(&mut session.foods, moved, target) {
        result.add_message(CmdMessage::warning("Nothing to reorder"));
        return Ok(result);
    }

    helpers::sync_foods(store, session)?;
    result.add_message(CmdMessage::success("Foods reordered"));
    Ok(result.with_foods(session.foods.clone()))
}

/// Re-log a favorite into today's list as a fresh entry (new id, current
/// timestamp). The favorite itself is left intact, though re-adding bumps
/// it back to the front of the favorites list.
pub fn quick_add<B: StorageBackend>(
    store: &RecordStore<B>,
    session: &mut Session,
    favorite_id: Uuid,
) -> Result<CmdResult> {
    let favorites: Vec<Food> = store.get(keys::SAVED_FOODS);
    let Some(favorite) = favorites.into_iter().find(|f| f.id == favorite_id) else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("No favorite with that id"));
        return Ok(result);
    };

    let food = Food {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        ..favorite
    };
    session.foods.push(food.clone());
    helpers::sync_foods(store, session)?;
    if food.has_macros() {
        helpers::remember_favorite(store, &food)?;
    }

    let mut result = CmdResult::default().with_foods(vec![food.clone()]);
    result.add_message(CmdMessage::success(format!("Food logged: {}", food.name)));
    Ok(result)
}

/// The favorites list, most recently used first.
pub fn favorites<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let favorites: Vec<Food> = store.get(keys::SAVED_FOODS);
    Ok(CmdResult::default().with_favorites(favorites))
}

/// Today's food list, in user order.
pub fn list(session: &Session) -> Result<CmdResult> {
    Ok(CmdResult::default().with_foods(session.foods.clone()))
}
