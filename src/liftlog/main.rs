use chrono::{Datelike, NaiveDate};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use liftlog::api::TrackerApi;
use liftlog::commands::{CmdResult, MessageLevel};
use liftlog::error::{LiftlogError, Result};
use liftlog::model::{AppSettings, Exercise, ExerciseDraft, Food, FoodDraft, SizeChoice, Training};
use liftlog::store::fs::FileBackend;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

mod args;
use args::{Cli, Commands, ExerciseCmd, FoodCmd, SettingsCmd, TrainingCmd};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let backend = FileBackend::new(data_dir(&cli)?);
    let mut api = TrackerApi::open(backend);

    match cli.command {
        Commands::Training(cmd) => handle_training(&mut api, cmd),
        Commands::Exercise(cmd) => handle_exercise(&mut api, cmd),
        Commands::Food(cmd) => handle_food(&mut api, cmd),
        Commands::Day { date } => handle_day(&api, date),
        Commands::Calendar { month } => handle_calendar(&api, month),
        Commands::Settings(cmd) => handle_settings(&api, cmd),
    }
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var("LIFTLOG_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "liftlog", "liftlog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LiftlogError::Store("Could not determine data directory".to_string()))
}

fn handle_training(api: &mut TrackerApi<FileBackend>, cmd: TrainingCmd) -> Result<()> {
    match cmd {
        TrainingCmd::New { name } => print_messages(&api.create_training(&name)?),
        TrainingCmd::Load { name } => print_messages(&api.load_training(&name)?),
        TrainingCmd::Rename { name } => print_messages(&api.rename_training(&name)?),
        TrainingCmd::List => {
            let result = api.saved_trainings()?;
            if result.trainings.is_empty() {
                println!("No saved trainings yet");
            }
            for training in &result.trainings {
                print_training_line(training, training.name == api.session().training.name);
            }
        }
    }
    Ok(())
}

fn handle_exercise(api: &mut TrackerApi<FileBackend>, cmd: ExerciseCmd) -> Result<()> {
    match cmd {
        ExerciseCmd::Add {
            name,
            sets,
            reps,
            weight,
            note,
        } => {
            let draft = ExerciseDraft {
                name,
                sets,
                reps,
                weight,
                note,
            };
            print_messages(&api.add_exercise(draft)?);
        }
        ExerciseCmd::Edit {
            index,
            name,
            sets,
            reps,
            weight,
            note,
        } => {
            let id = nth_exercise(api, index)?;
            let draft = ExerciseDraft {
                name,
                sets,
                reps,
                weight,
                note,
            };
            print_messages(&api.edit_exercise(id, draft)?);
        }
        ExerciseCmd::Delete { index } => {
            let id = nth_exercise(api, index)?;
            print_messages(&api.delete_exercise(id)?);
        }
        ExerciseCmd::Move { index, before } => {
            let moved = nth_exercise(api, index)?;
            let target = nth_exercise(api, before)?;
            print_messages(&api.move_exercise_before(moved, target)?);
        }
        ExerciseCmd::List => {
            let session = api.session();
            println!("{}", session.training.name.bold());
            let result = api.exercises()?;
            if result.exercises.is_empty() {
                println!("No exercises yet");
            }
            for (i, exercise) in result.exercises.iter().enumerate() {
                print_exercise_line(i + 1, exercise);
            }
        }
    }
    Ok(())
}

fn handle_food(api: &mut TrackerApi<FileBackend>, cmd: FoodCmd) -> Result<()> {
    match cmd {
        FoodCmd::Add {
            name,
            calories,
            protein,
            carbs,
            fats,
            note,
        } => {
            let draft = FoodDraft {
                name,
                calories,
                protein,
                carbs,
                fats,
                note,
            };
            print_messages(&api.add_food(draft)?);
        }
        FoodCmd::Edit {
            index,
            name,
            calories,
            protein,
            carbs,
            fats,
            note,
        } => {
            let id = nth_food(api, index)?;
            let draft = FoodDraft {
                name,
                calories,
                protein,
                carbs,
                fats,
                note,
            };
            print_messages(&api.edit_food(id, draft)?);
        }
        FoodCmd::Delete { index } => {
            let id = nth_food(api, index)?;
            print_messages(&api.delete_food(id)?);
        }
        FoodCmd::Move { index, before } => {
            let moved = nth_food(api, index)?;
            let target = nth_food(api, before)?;
            print_messages(&api.move_food_before(moved, target)?);
        }
        FoodCmd::Quick { index } => {
            let favorites = api.favorite_foods()?.favorites;
            let id = nth_id(favorites.iter().map(|f| f.id), index, "favorite")?;
            print_messages(&api.quick_add_food(id)?);
        }
        FoodCmd::Favorites => {
            let result = api.favorite_foods()?;
            if result.favorites.is_empty() {
                println!("No favorite foods yet");
            }
            for (i, food) in result.favorites.iter().enumerate() {
                print_food_line(i + 1, food);
            }
        }
        FoodCmd::List => {
            let result = api.foods()?;
            if result.foods.is_empty() {
                println!("No foods logged today");
            }
            for (i, food) in result.foods.iter().enumerate() {
                print_food_line(i + 1, food);
            }
        }
    }
    Ok(())
}

fn handle_day(api: &TrackerApi<FileBackend>, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or(api.session().today);
    let result = api.day_summary(date)?;
    let summary = result
        .summary
        .ok_or_else(|| LiftlogError::Store("Missing day summary".to_string()))?;

    println!("{}", date.format("%A, %B %-d, %Y").to_string().bold());

    println!("\n{}", "Training".underline());
    if summary.exercises.is_empty() {
        println!("No training data for this day");
    }
    for (i, exercise) in summary.exercises.iter().enumerate() {
        print_exercise_line(i + 1, exercise);
    }

    println!("\n{}", "Nutrition".underline());
    if summary.foods.is_empty() {
        println!("No nutrition data for this day");
    } else {
        let t = summary.totals;
        println!(
            "{} {:.0} cal | {:.0}g protein | {:.0}g carbs | {:.0}g fats",
            "Totals:".bold(),
            t.calories,
            t.protein,
            t.carbs,
            t.fats
        );
        for (i, food) in summary.foods.iter().enumerate() {
            print_food_line(i + 1, food);
        }
    }
    Ok(())
}

fn handle_calendar(api: &TrackerApi<FileBackend>, month: Option<String>) -> Result<()> {
    let today = api.session().today;
    let (year, month) = match month {
        Some(raw) => parse_month(&raw)?,
        None => (today.year(), today.month()),
    };

    let cells = api.month_grid(year, month)?;
    let title = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| LiftlogError::InvalidInput(format!("invalid month: {}-{}", year, month)))?
        .format("%B %Y");
    println!("{}", title.to_string().bold());
    println!(" Sun Mon Tue Wed Thu Fri Sat");

    for week in cells.chunks(7) {
        for cell in week {
            let text = format!("{:>3}", cell.date.day());
            let styled = if !cell.in_month {
                text.as_str().dimmed()
            } else if cell.has_training && cell.has_nutrition {
                text.as_str().yellow()
            } else if cell.has_training {
                text.as_str().green()
            } else if cell.has_nutrition {
                text.as_str().cyan()
            } else {
                text.as_str().normal()
            };
            let styled = if cell.is_today {
                styled.bold().underline()
            } else {
                styled
            };
            print!("{} ", styled);
        }
        println!();
    }
    println!(
        "{} training  {} nutrition  {} both",
        "■".green(),
        "■".cyan(),
        "■".yellow()
    );
    Ok(())
}

fn handle_settings(api: &TrackerApi<FileBackend>, cmd: SettingsCmd) -> Result<()> {
    match cmd {
        SettingsCmd::Show => {
            let settings = current_settings(api)?;
            print_settings(&settings);
        }
        SettingsCmd::Set {
            dark_mode,
            block_size,
            font_size,
        } => {
            let mut settings = current_settings(api)?;
            if let Some(dark) = dark_mode {
                settings.dark_mode = dark;
            }
            if let Some(size) = block_size {
                settings.block_size = parse_size(&size)?;
            }
            if let Some(size) = font_size {
                settings.font_size = parse_size(&size)?;
            }
            let result = api.save_settings(settings)?;
            print_messages(&result);
            print_settings(&settings);
        }
        SettingsCmd::Reset => {
            let result = api.reset_settings()?;
            print_messages(&result);
        }
    }
    Ok(())
}

fn print_settings(settings: &AppSettings) {
    println!("dark mode:  {}", settings.dark_mode);
    println!("block size: {}", settings.block_size);
    println!("font size:  {}", settings.font_size);
}

fn current_settings(api: &TrackerApi<FileBackend>) -> Result<AppSettings> {
    Ok(api.settings()?.settings.unwrap_or_default())
}

fn parse_size(raw: &str) -> Result<SizeChoice> {
    match raw.to_lowercase().as_str() {
        "small" => Ok(SizeChoice::Small),
        "medium" => Ok(SizeChoice::Medium),
        "large" => Ok(SizeChoice::Large),
        other => Err(LiftlogError::InvalidInput(format!(
            "unknown size: {} (expected small, medium or large)",
            other
        ))),
    }
}

fn parse_month(raw: &str) -> Result<(i32, u32)> {
    let invalid = || LiftlogError::InvalidInput(format!("invalid month: {} (expected YYYY-MM)", raw));
    let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

// --- Index resolution (1-based CLI positions to ids) ---

fn nth_exercise(api: &TrackerApi<FileBackend>, index: usize) -> Result<Uuid> {
    nth_id(
        api.session().training.exercises.iter().map(|e| e.id),
        index,
        "exercise",
    )
}

fn nth_food(api: &TrackerApi<FileBackend>, index: usize) -> Result<Uuid> {
    nth_id(api.session().foods.iter().map(|f| f.id), index, "food")
}

fn nth_id(mut ids: impl Iterator<Item = Uuid>, index: usize, what: &str) -> Result<Uuid> {
    if index == 0 {
        return Err(LiftlogError::InvalidInput(format!(
            "{} positions start at 1",
            what
        )));
    }
    ids.nth(index - 1)
        .ok_or_else(|| LiftlogError::InvalidInput(format!("no {} at position {}", what, index)))
}

// --- Printing ---

fn print_messages(result: &CmdResult) {
    for message in &result.messages {
        match message.level {
            MessageLevel::Success => println!("{} {}", "✓".green(), message.content),
            MessageLevel::Warning => println!("{} {}", "!".yellow(), message.content),
            MessageLevel::Info => println!("{}", message.content),
        }
    }
}

fn print_training_line(training: &Training, current: bool) {
    let marker = if current { "*" } else { " " };
    println!(
        "{} {} ({} exercises, modified {})",
        marker,
        training.name.bold(),
        training.exercises.len(),
        training.last_modified.format("%Y-%m-%d")
    );
}

fn print_exercise_line(position: usize, exercise: &Exercise) {
    let weight = exercise
        .weight
        .map(|w| format!(" @ {}kg", w))
        .unwrap_or_default();
    println!(
        "{:>2}. {} {}x{}{}",
        position,
        exercise.name.bold(),
        exercise.sets,
        exercise.reps,
        weight
    );
    if let Some(note) = &exercise.note {
        println!("    {}", note.italic());
    }
}

fn print_food_line(position: usize, food: &Food) {
    let mut macros = Vec::new();
    if let Some(cal) = food.calories {
        macros.push(format!("{} cal", cal));
    }
    if let Some(protein) = food.protein {
        macros.push(format!("{}g protein", protein));
    }
    if let Some(carbs) = food.carbs {
        macros.push(format!("{}g carbs", carbs));
    }
    if let Some(fats) = food.fats {
        macros.push(format!("{}g fats", fats));
    }
    let detail = if macros.is_empty() {
        String::new()
    } else {
        format!(" • {}", macros.join(" • "))
    };
    println!("{:>2}. {}{}", position, food.name.bold(), detail);
    if let Some(note) = &food.note {
        println!("    {}", note.italic());
    }
}
