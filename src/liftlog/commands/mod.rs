use crate::model::{AppSettings, Exercise, Food, Training};

pub mod calendar;
pub mod exercise;
pub mod helpers;
pub mod nutrition;
pub mod settings;
pub mod training;

use self::calendar::DaySummary;

/// Saved-trainings history keeps the 10 most recently modified entries.
pub const MAX_SAVED_TRAININGS: usize = 10;
/// Favorites keep the 20 most recently used foods.
pub const MAX_FAVORITE_FOODS: usize = 20;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command, consumed by whatever client sits on top.
/// Commands never format user-facing strings beyond the message text.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub exercises: Vec<Exercise>,
    pub foods: Vec<Food>,
    pub trainings: Vec<Training>,
    pub favorites: Vec<Food>,
    pub summary: Option<DaySummary>,
    pub settings: Option<AppSettings>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_exercises(mut self, exercises: Vec<Exercise>) -> Self {
        self.exercises = exercises;
        self
    }

    pub fn with_foods(mut self, foods: Vec<Food>) -> Self {
        self.foods = foods;
        self
    }

    pub fn with_trainings(mut self, trainings: Vec<Training>) -> Self {
        self.trainings = trainings;
        self
    }

    pub fn with_favorites(mut self, favorites: Vec<Food>) -> Self {
        self.favorites = favorites;
        self
    }

    pub fn with_summary(mut self, summary: DaySummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_settings(mut self, settings: AppSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}
