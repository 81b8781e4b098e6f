use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_DATA_DIR;

/// MealRotation: plan a week of home cooking from what is in the fridge.
#[derive(Parser, Debug)]
#[command(name = "meal_rotation")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding dishes, inventory, history and saved plans.
    #[arg(
        short,
        long,
        global = true,
        env = "MEAL_ROTATION_DATA_DIR",
        default_value = DEFAULT_DATA_DIR
    )]
    pub data_dir: PathBuf,

    /// Log planning decisions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a 7-day meal plan from the current inventory.
    Plan {
        /// First day of the plan (0 = Sunday). Defaults to today.
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=6))]
        start_day: Option<u8>,

        /// Keep the generated plan under this name.
        #[arg(long)]
        save: Option<String>,
    },

    /// Parse purchase text (a table or an order export) into inventory entries.
    ParseReceipt {
        /// File to read; stdin when omitted.
        file: Option<PathBuf>,

        /// Merge the parsed entries into the inventory.
        #[arg(long)]
        save: bool,

        /// Do not ask before saving.
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage the dish library.
    Dish {
        #[command(subcommand)]
        action: DishAction,
    },

    /// Inspect or adjust stocked ingredients.
    Inventory {
        #[command(subcommand)]
        action: InventoryAction,
    },

    /// Log a dish as cooked.
    Record {
        /// Dish name; prompts with suggestions when omitted.
        #[arg(long)]
        dish: Option<String>,

        /// Date cooked (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,
    },

    /// Log a dish as cooked and draw its ingredients from stock.
    Cook {
        #[arg(long)]
        dish: String,

        /// Date cooked (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Amount taken from each matched ingredient.
        #[arg(long, default_value = "1")]
        amount: f64,
    },

    /// Show recently cooked dishes.
    History {
        #[arg(long, default_value = "7")]
        days: i64,
    },

    /// Manage saved meal plans.
    Plans {
        #[command(subcommand)]
        action: PlansAction,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            start_day: None,
            save: None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum DishAction {
    /// List all dishes.
    List,

    /// Add a dish.
    Add {
        #[arg(long)]
        name: String,

        /// One of 肉类, 海鲜, 蔬菜, 豆类, 蛋类, 主食 (or the English name).
        #[arg(long)]
        category: String,

        /// Comma-separated ingredient names.
        #[arg(long, value_delimiter = ',', required = true)]
        ingredients: Vec<String>,
    },

    /// Change fields of a dish.
    Update {
        id: u32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long, value_delimiter = ',')]
        ingredients: Option<Vec<String>>,
    },

    /// Delete a dish.
    Remove { id: u32 },
}

#[derive(Subcommand, Debug)]
pub enum InventoryAction {
    /// List stocked items.
    List,

    /// Drop an item from stock.
    Remove { name: String },

    /// Take an amount off an item.
    Use { name: String, amount: f64 },
}

#[derive(Subcommand, Debug)]
pub enum PlansAction {
    /// List saved plans.
    List,

    /// Print a saved plan.
    Show { name: String },

    /// Delete a saved plan.
    Delete { name: String },
}
