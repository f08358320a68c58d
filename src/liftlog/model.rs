use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anything living in a user-ordered list and addressable by id.
/// Lets the reorder primitive work over exercises and foods alike.
pub trait HasId {
    fn id(&self) -> Uuid;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    // Absent weight means "bodyweight / not recorded" and is distinct from 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Exercise {
    pub fn new(draft: ExerciseDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            sets: draft.sets,
            reps: draft.reps,
            weight: draft.weight,
            note: draft.note,
            created_at: Utc::now(),
        }
    }
}

impl HasId for Exercise {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// User-supplied exercise fields, before an id and timestamp are assigned.
#[derive(Debug, Clone)]
pub struct ExerciseDraft {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: Option<f64>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fats: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Food {
    pub fn new(draft: FoodDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            calories: draft.calories,
            protein: draft.protein,
            carbs: draft.carbs,
            fats: draft.fats,
            note: draft.note,
            created_at: Utc::now(),
        }
    }

    /// Foods with at least one macro qualify for the favorites list.
    pub fn has_macros(&self) -> bool {
        self.calories.is_some()
            || self.protein.is_some()
            || self.carbs.is_some()
            || self.fats.is_some()
    }
}

impl HasId for Food {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct FoodDraft {
    pub name: String,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
    pub note: Option<String>,
}

/// A named, ordered collection of exercises. The saved-trainings history
/// upserts by `name`, so the name doubles as the history key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    pub name: String,
    pub exercises: Vec<Exercise>,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl Training {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            exercises: Vec::new(),
            created_at: now,
            last_modified: now,
        }
    }
}

/// Full exercise list recorded for one calendar day, replaced wholesale on
/// every save. Never merged incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTraining {
    pub date: NaiveDate,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayNutrition {
    pub date: NaiveDate,
    pub foods: Vec<Food>,
}

/// Per-day macro sums. Absent macros count as zero here, while the stored
/// foods themselves keep absence distinct from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroTotals {
    pub fn from_foods(foods: &[Food]) -> Self {
        foods.iter().fold(Self::default(), |mut acc, food| {
            acc.calories += food.calories.unwrap_or(0.0);
            acc.protein += food.protein.unwrap_or(0.0);
            acc.carbs += food.carbs.unwrap_or(0.0);
            acc.fats += food.fats.unwrap_or(0.0);
            acc
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeChoice {
    Small,
    #[default]
    Medium,
    Large,
}

impl std::fmt::Display for SizeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeChoice::Small => write!(f, "small"),
            SizeChoice::Medium => write!(f, "medium"),
            SizeChoice::Large => write!(f, "large"),
        }
    }
}

/// Display settings, persisted under the `appSettings` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub block_size: SizeChoice,
    #[serde(default)]
    pub font_size: SizeChoice,
}
