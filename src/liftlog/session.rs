use crate::model::{DayNutrition, DayTraining, Food, Training};
use crate::store::{keys, RecordStore, StorageBackend};
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

/// Name given to the training synthesized when no history exists yet.
pub const DEFAULT_TRAINING_NAME: &str = "My Training";

/// The live editing context: the current training and today's food list.
///
/// This is a cache over the persisted records, not a second source of truth.
/// Every mutating command re-syncs the day snapshots and the saved-trainings
/// history from it before returning.
#[derive(Debug, Clone)]
pub struct Session {
    pub training: Training,
    pub foods: Vec<Food>,
    pub today: NaiveDate,
}

impl Session {
    /// Restore a session for the local calendar date.
    pub fn load<B: StorageBackend>(store: &RecordStore<B>) -> Self {
        Self::load_on(store, Local::now().date_naive())
    }

    /// Restore a session for an explicit date. The current training becomes
    /// the most recently modified saved one (the history is kept
    /// most-recent-first, so that is the first entry); with no history, an
    /// empty default training is synthesized and not yet persisted. Today's
    /// foods come from the day snapshot, if any.
    pub fn load_on<B: StorageBackend>(store: &RecordStore<B>, today: NaiveDate) -> Self {
        let saved: Vec<Training> = store.get(keys::SAVED_TRAININGS);
        let training = saved
            .into_iter()
            .next()
            .unwrap_or_else(|| Training::new(DEFAULT_TRAINING_NAME));

        let daily: BTreeMap<NaiveDate, DayNutrition> = store.get(keys::DAILY_FOODS);
        let foods = daily.get(&today).map(|d| d.foods.clone()).unwrap_or_default();

        Self {
            training,
            foods,
            today,
        }
    }

    /// Today's training-stream snapshot, derived from the current list.
    pub fn day_training(&self) -> DayTraining {
        DayTraining {
            date: self.today,
            exercises: self.training.exercises.clone(),
        }
    }

    /// Today's nutrition-stream snapshot, derived from the current list.
    pub fn day_nutrition(&self) -> DayNutrition {
        DayNutrition {
            date: self.today,
            foods: self.foods.clone(),
        }
    }
}
