use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_rotation_rs::cli::{Cli, Command, DishAction, InventoryAction, PlansAction};
use meal_rotation_rs::config::DataPaths;
use meal_rotation_rs::error::{MealError, Result};
use meal_rotation_rs::interface::{
    display_consumption, display_dishes, display_history, display_inventory, display_saved_plan,
    display_saved_plans, prompt_dish_name, prompt_yes_no, suggest_dishes,
};
use meal_rotation_rs::models::{Dish, DishCategory, DishUpdate};
use meal_rotation_rs::planner::{NO_PLAN_MESSAGE, RECENT_DAYS, WeeklyPlanner};
use meal_rotation_rs::receipt::parse_purchase_text;
use meal_rotation_rs::state::{DishLibrary, Inventory, MealHistoryLog, MealPlanBook};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = DataPaths::new(&cli.data_dir);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { start_day, save } => cmd_plan(&paths, start_day, save.as_deref()),
        Command::ParseReceipt { file, save, yes } => {
            cmd_parse_receipt(&paths, file.as_deref(), save, yes)
        }
        Command::Dish { action } => cmd_dish(&paths, action),
        Command::Inventory { action } => cmd_inventory(&paths, action),
        Command::Record { dish, date } => cmd_record(&paths, dish, date.as_deref()),
        Command::Cook { dish, date, amount } => cmd_cook(&paths, &dish, date.as_deref(), amount),
        Command::History { days } => cmd_history(&paths, days),
        Command::Plans { action } => cmd_plans(&paths, action),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "meal_rotation_rs=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(text) => Ok(NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)?),
        None => Ok(Local::now().date_naive()),
    }
}

/// Generate a weekly plan from the stocked inventory.
fn cmd_plan(paths: &DataPaths, start_day: Option<u8>, save: Option<&str>) -> Result<()> {
    let library = DishLibrary::load(paths.dishes())?;
    let inventory = Inventory::load(paths.inventory())?;
    let history = MealHistoryLog::new(paths.history());

    println!(
        "Loaded {} dishes and {} stocked items",
        library.len(),
        inventory.len()
    );

    let start_day = start_day
        .map(usize::from)
        .unwrap_or_else(|| Local::now().weekday().num_days_from_sunday() as usize);

    let planner = WeeklyPlanner::new(&library, &history);
    let text = planner.generate(&inventory.names(), start_day)?;

    println!();
    println!("{}", text);
    println!();

    if let Some(name) = save {
        if text == NO_PLAN_MESSAGE {
            println!("Nothing to save.");
            return Ok(());
        }

        let mut book = MealPlanBook::load(paths.plans())?;
        let saved = book.upsert(name, &text, Local::now().naive_local())?;
        let saved_name = saved.name.clone();
        book.save(paths.plans())?;
        println!("Plan saved as '{}'.", saved_name);
    }

    Ok(())
}

/// Parse purchase text and optionally merge it into the inventory.
fn cmd_parse_receipt(
    paths: &DataPaths,
    file: Option<&std::path::Path>,
    save: bool,
    yes: bool,
) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };

    let entries = parse_purchase_text(&text);
    display_inventory(&entries, "Parsed items");

    if entries.is_empty() || !save {
        return Ok(());
    }

    if !yes && !prompt_yes_no("Add these items to the inventory?", true)? {
        return Ok(());
    }

    let mut inventory = Inventory::load(paths.inventory())?;
    let count = entries.len();
    for entry in entries {
        inventory.add(entry);
    }
    inventory.save(paths.inventory())?;
    println!("Added {} items. Inventory now holds {}.", count, inventory.len());

    Ok(())
}

fn cmd_dish(paths: &DataPaths, action: DishAction) -> Result<()> {
    let mut library = DishLibrary::load(paths.dishes())?;

    match action {
        DishAction::List => {
            display_dishes(library.all());
            return Ok(());
        }
        DishAction::Add {
            name,
            category,
            ingredients,
        } => {
            let category: DishCategory = category.parse()?;
            let dish = Dish {
                id: 0,
                name,
                category,
                ingredients: trimmed(ingredients),
            };
            let added = library.add(dish)?;
            println!("Added dish {}: {}", added.id, added.name);
        }
        DishAction::Update {
            id,
            name,
            category,
            ingredients,
        } => {
            let update = DishUpdate {
                name,
                category: category.map(|c| c.parse()).transpose()?,
                ingredients: ingredients.map(trimmed),
            };
            if update.is_empty() {
                println!("Nothing to update. Pass --name, --category or --ingredients.");
                return Ok(());
            }
            let updated = library.update(id, &update)?;
            println!("Updated dish {}: {}", updated.id, updated.name);
        }
        DishAction::Remove { id } => {
            let removed = library.remove(id)?;
            println!("Removed dish {}: {}", removed.id, removed.name);
        }
    }

    library.save(paths.dishes())
}

fn trimmed(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

fn cmd_inventory(paths: &DataPaths, action: InventoryAction) -> Result<()> {
    let mut inventory = Inventory::load(paths.inventory())?;

    match action {
        InventoryAction::List => {
            display_inventory(inventory.all(), "Inventory");
            return Ok(());
        }
        InventoryAction::Remove { name } => {
            let removed = inventory.remove(&name)?;
            println!("Removed {}.", removed.name);
        }
        InventoryAction::Use { name, amount } => {
            let item = inventory.decrease(&name, amount)?;
            println!("{}: {} {} left.", item.name, item.quantity, item.unit);
        }
    }

    inventory.save(paths.inventory())
}

/// Log a cooked dish, prompting for the name when none is given.
fn cmd_record(paths: &DataPaths, dish: Option<String>, date: Option<&str>) -> Result<()> {
    let date = parse_date(date)?;

    let dish_name = match dish {
        Some(name) => name,
        None => {
            let library = DishLibrary::load(paths.dishes())?;
            match prompt_dish_name(library.all())? {
                Some(name) => name,
                None => return Ok(()),
            }
        }
    };

    let record = MealHistoryLog::new(paths.history()).record(date, &dish_name)?;
    println!("Recorded {} on {}.", record.dish_name, record.date);
    Ok(())
}

/// Log a dish from the library as cooked and draw its ingredients from stock.
fn cmd_cook(paths: &DataPaths, dish_name: &str, date: Option<&str>, amount: f64) -> Result<()> {
    let date = parse_date(date)?;
    let library = DishLibrary::load(paths.dishes())?;

    let Some(dish) = library.find_by_name(dish_name) else {
        let suggestions = suggest_dishes(library.all(), dish_name);
        if !suggestions.is_empty() {
            let names: Vec<&str> = suggestions.iter().map(|(d, _)| d.name.as_str()).collect();
            eprintln!("Did you mean: {}?", names.join(", "));
        }
        return Err(MealError::InvalidInput(format!(
            "Dish '{}' is not in the library",
            dish_name
        )));
    };

    let mut inventory = Inventory::load(paths.inventory())?;
    let outcomes = inventory.consume_ingredients(&dish.ingredients, amount)?;
    inventory.save(paths.inventory())?;

    let record = MealHistoryLog::new(paths.history()).record(date, &dish.name)?;
    println!("Cooked {} on {}.", record.dish_name, record.date);
    display_consumption(&outcomes);

    Ok(())
}

fn cmd_history(paths: &DataPaths, days: i64) -> Result<()> {
    let days = if days > 0 { days } else { RECENT_DAYS };
    let records =
        MealHistoryLog::new(paths.history()).records_since(Local::now().date_naive(), days)?;
    display_history(&records, days);
    Ok(())
}

fn cmd_plans(paths: &DataPaths, action: PlansAction) -> Result<()> {
    let mut book = MealPlanBook::load(paths.plans())?;

    match action {
        PlansAction::List => display_saved_plans(book.all()),
        PlansAction::Show { name } => {
            let plan = book
                .get(&name)
                .ok_or_else(|| MealError::PlanNotFound(name.clone()))?;
            display_saved_plan(plan);
        }
        PlansAction::Delete { name } => {
            let removed = book.remove(&name)?;
            book.save(paths.plans())?;
            println!("Deleted plan '{}'.", removed.name);
        }
    }

    Ok(())
}
