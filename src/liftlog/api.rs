//! # API Facade
//!
//! The single entry point for all tracker operations, regardless of the
//! client sitting on top. A thin dispatch layer: input normalization and
//! session bookkeeping live here, business logic lives in `commands`,
//! persistence in `store`. Nothing here touches stdout/stderr or formats
//! user-facing strings.
//!
//! Generic over [`StorageBackend`]: production clients use
//! `TrackerApi<FileBackend>`, tests use `TrackerApi<MemBackend>`.

use crate::commands::{self, calendar::CalendarCell, CmdResult};
use crate::error::Result;
use crate::model::{AppSettings, ExerciseDraft, FoodDraft};
use crate::session::Session;
use crate::store::{RecordStore, StorageBackend};
use chrono::NaiveDate;
use uuid::Uuid;

pub struct TrackerApi<B: StorageBackend> {
    store: RecordStore<B>,
    session: Session,
}

impl<B: StorageBackend> TrackerApi<B> {
    /// Open the tracker for the local calendar date, restoring the most
    /// recent training and today's food log.
    pub fn open(backend: B) -> Self {
        let store = RecordStore::new(backend);
        let session = Session::load(&store);
        Self { store, session }
    }

    /// Open the tracker pinned to an explicit date. Used by tests and by
    /// anything that needs a deterministic "today".
    pub fn open_on(backend: B, today: NaiveDate) -> Self {
        let store = RecordStore::new(backend);
        let session = Session::load_on(&store, today);
        Self { store, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // --- Trainings ---

    pub fn create_training(&mut self, name: &str) -> Result<CmdResult> {
        commands::training::create(&self.store, &mut self.session, name)
    }

    pub fn rename_training(&mut self, name: &str) -> Result<CmdResult> {
        commands::training::rename(&self.store, &mut self.session, name)
    }

    pub fn load_training(&mut self, name: &str) -> Result<CmdResult> {
        commands::training::load_by_name(&self.store, &mut self.session, name)
    }

    pub fn load_most_recent_training(&mut self) -> Result<CmdResult> {
        commands::training::load_most_recent(&self.store, &mut self.session)
    }

    pub fn saved_trainings(&self) -> Result<CmdResult> {
        commands::training::list_saved(&self.store)
    }

    // --- Exercises ---

    pub fn add_exercise(&mut self, draft: ExerciseDraft) -> Result<CmdResult> {
        commands::exercise::add(&self.store, &mut self.session, draft)
    }

    pub fn edit_exercise(&mut self, id: Uuid, draft: ExerciseDraft) -> Result<CmdResult> {
        commands::exercise::edit(&self.store, &mut self.session, id, draft)
    }

    pub fn delete_exercise(&mut self, id: Uuid) -> Result<CmdResult> {
        commands::exercise::delete(&self.store, &mut self.session, id)
    }

    pub fn move_exercise_before(&mut self, moved: Uuid, target: Uuid) -> Result<CmdResult> {
        commands::exercise::reorder(&self.store, &mut self.session, moved, target)
    }

    pub fn exercises(&self) -> Result<CmdResult> {
        commands::exercise::list(&self.session)
    }

    // --- Foods ---

    pub fn add_food(&mut self, draft: FoodDraft) -> Result<CmdResult> {
        commands::nutrition::add(&self.store, &mut self.session, draft)
    }

    pub fn edit_food(&mut self, id: Uuid, draft: FoodDraft) -> Result<CmdResult> {
        commands::nutrition::edit(&self.store, &mut self.session, id, draft)
    }

    pub fn delete_food(&mut self, id: Uuid) -> Result<CmdResult> {
        commands::nutrition::delete(&self.store, &mut self.session, id)
    }

    pub fn move_food_before(&mut self, moved: Uuid, target: Uuid) -> Result<CmdResult> {
        commands::nutrition::reorder(&self.store, &mut self.session, moved, target)
    }

    pub fn quick_add_food(&mut self, favorite_id: Uuid) -> Result<CmdResult> {
        commands::nutrition::quick_add(&self.store, &mut self.session, favorite_id)
    }

    pub fn favorite_foods(&self) -> Result<CmdResult> {
        commands::nutrition::favorites(&self.store)
    }

    pub fn foods(&self) -> Result<CmdResult> {
        commands::nutrition::list(&self.session)
    }

    // --- Calendar ---

    pub fn has_data(&self, date: NaiveDate) -> bool {
        commands::calendar::has_data(&self.store, date)
    }

    pub fn day_summary(&self, date: NaiveDate) -> Result<CmdResult> {
        commands::calendar::summarize(&self.store, date)
    }

    pub fn month_grid(&self, year: i32, month: u32) -> Result<Vec<CalendarCell>> {
        commands::calendar::month_grid(&self.store, year, month, self.session.today)
    }

    // --- Settings ---

    pub fn settings(&self) -> Result<CmdResult> {
        commands::settings::get(&self.store)
    }

    pub fn save_settings(&self, settings: AppSettings) -> Result<CmdResult> {
        commands::settings::save(&self.store, settings)
    }

    pub fn reset_settings(&self) -> Result<CmdResult> {
        commands::settings::reset(&self.store)
    }
}
