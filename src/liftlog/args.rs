use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "liftlog")]
#[command(about = "Local-first training and nutrition log", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to $LIFTLOG_DATA_DIR, then the platform data dir)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage named trainings
    #[command(subcommand, alias = "t")]
    Training(TrainingCmd),

    /// Manage the current training's exercises
    #[command(subcommand, alias = "ex")]
    Exercise(ExerciseCmd),

    /// Log today's foods
    #[command(subcommand, alias = "f")]
    Food(FoodCmd),

    /// Show everything recorded for a day
    Day {
        /// Date to show (YYYY-MM-DD), defaults to today
        date: Option<NaiveDate>,
    },

    /// Show the month calendar with logged-data markers
    #[command(alias = "cal")]
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        month: Option<String>,
    },

    /// Display settings
    #[command(subcommand)]
    Settings(SettingsCmd),
}

#[derive(Subcommand, Debug)]
pub enum TrainingCmd {
    /// Start a new empty training
    New { name: String },

    /// Make a saved training current
    Load { name: String },

    /// Rename the current training
    Rename { name: String },

    /// List saved trainings, most recent first
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum ExerciseCmd {
    /// Add an exercise to the current training
    Add {
        name: String,

        #[arg(short, long)]
        sets: u32,

        #[arg(short, long)]
        reps: u32,

        /// Weight in kg (omit for bodyweight work)
        #[arg(short, long)]
        weight: Option<f64>,

        #[arg(short, long)]
        note: Option<String>,
    },

    /// Replace an exercise's fields
    Edit {
        /// Position in the list (1-based)
        index: usize,

        name: String,

        #[arg(short, long)]
        sets: u32,

        #[arg(short, long)]
        reps: u32,

        #[arg(short, long)]
        weight: Option<f64>,

        #[arg(short, long)]
        note: Option<String>,
    },

    /// Delete an exercise
    #[command(alias = "rm")]
    Delete {
        /// Position in the list (1-based)
        index: usize,
    },

    /// Move an exercise before another position
    Move {
        /// Position of the exercise to move (1-based)
        index: usize,

        /// Position to move it before (1-based)
        before: usize,
    },

    /// List the current training's exercises
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum FoodCmd {
    /// Log a food for today
    Add {
        name: String,

        #[arg(short, long)]
        calories: Option<f64>,

        #[arg(short, long)]
        protein: Option<f64>,

        #[arg(long)]
        carbs: Option<f64>,

        #[arg(short, long)]
        fats: Option<f64>,

        #[arg(short, long)]
        note: Option<String>,
    },

    /// Replace a logged food's fields
    Edit {
        /// Position in today's list (1-based)
        index: usize,

        name: String,

        #[arg(short, long)]
        calories: Option<f64>,

        #[arg(short, long)]
        protein: Option<f64>,

        #[arg(long)]
        carbs: Option<f64>,

        #[arg(short, long)]
        fats: Option<f64>,

        #[arg(short, long)]
        note: Option<String>,
    },

    /// Delete a food from today's list
    #[command(alias = "rm")]
    Delete {
        /// Position in today's list (1-based)
        index: usize,
    },

    /// Move a food before another position
    Move {
        /// Position of the food to move (1-based)
        index: usize,

        /// Position to move it before (1-based)
        before: usize,
    },

    /// Re-log a favorite food
    Quick {
        /// Position in the favorites list (1-based)
        index: usize,
    },

    /// List favorite foods, most recently used first
    #[command(alias = "favs")]
    Favorites,

    /// List today's foods
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCmd {
    /// Show current settings
    Show,

    /// Change settings (only the given flags change)
    Set {
        /// Enable or disable dark mode (true/false)
        #[arg(long)]
        dark_mode: Option<bool>,

        /// Block size: small, medium or large
        #[arg(long)]
        block_size: Option<String>,

        /// Font size: small, medium or large
        #[arg(long)]
        font_size: Option<String>,
    },

    /// Restore default settings
    Reset,
}
