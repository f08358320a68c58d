use crate::commands::CmdResult;
use crate::error::{LiftlogError, Result};
use crate::model::{DayNutrition, DayTraining, Exercise, Food, MacroTotals};
use crate::store::{keys, RecordStore, StorageBackend};
use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeMap;

/// Number of cells in the fixed 6x7 month grid.
pub const GRID_CELLS: usize = 42;

/// Everything recorded for one calendar date, across both streams.
#[derive(Debug, Clone, Default)]
pub struct DaySummary {
    pub date: Option<NaiveDate>,
    pub exercises: Vec<Exercise>,
    pub foods: Vec<Food>,
    pub totals: MacroTotals,
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub has_training: bool,
    pub has_nutrition: bool,
}

/// True if either stream recorded anything for the date.
pub fn has_data<B: StorageBackend>(store: &RecordStore<B>, date: NaiveDate) -> bool {
    let training: BTreeMap<NaiveDate, DayTraining> = store.get(keys::DAILY_EXERCISES);
    if training.contains_key(&date) {
        return true;
    }
    let nutrition: BTreeMap<NaiveDate, DayNutrition> = store.get(keys::DAILY_FOODS);
    nutrition.contains_key(&date)
}

/// Both streams' snapshots for a date, with per-day macro totals. Dates with
/// no data summarize to empty lists. Totals count absent macros as zero; the
/// foods themselves keep absence intact.
pub fn summarize<B: StorageBackend>(
    store: &RecordStore<B>,
    date: NaiveDate,
) -> Result<CmdResult> {
    let training: BTreeMap<NaiveDate, DayTraining> = store.get(keys::DAILY_EXERCISES);
    let nutrition: BTreeMap<NaiveDate, DayNutrition> = store.get(keys::DAILY_FOODS);

    let exercises = training
        .get(&date)
        .map(|d| d.exercises.clone())
        .unwrap_or_default();
    let foods = nutrition
        .get(&date)
        .map(|d| d.foods.clone())
        .unwrap_or_default();
    let totals = MacroTotals::from_foods(&foods);

    Ok(CmdResult::default().with_summary(DaySummary {
        date: Some(date),
        exercises,
        foods,
        totals,
    }))
}

/// The 42 cells filling a 6x7 grid for the given month, starting from the
/// Sunday on or before the 1st. Cells outside the month are flagged rather
/// than omitted so the grid shape never varies.
pub fn month_grid<B: StorageBackend>(
    store: &RecordStore<B>,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<Vec<CalendarCell>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| LiftlogError::InvalidInput(format!("invalid month: {}-{}", year, month)))?;
    let start = first - Days::new(u64::from(first.weekday().num_days_from_sunday()));

    let training: BTreeMap<NaiveDate, DayTraining> = store.get(keys::DAILY_EXERCISES);
    let nutrition: BTreeMap<NaiveDate, DayNutrition> = store.get(keys::DAILY_FOODS);

    let mut cells = Vec::with_capacity(GRID_CELLS);
    for offset in 0..GRID_CELLS {
        let date = start + Days::new(offset as u64);
        cells.push(CalendarCell {
            date,
            in_month: date.month() == month && date.year() == year,
            is_today: date == today,
            has_training: training.contains_key(&date),
            has_nutrition: nutrition.contains_key(&date),
        });
    }
    Ok(cells)
}
