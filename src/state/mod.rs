mod dishes;
mod history;
mod inventory;
mod persistence;
mod plans;

pub use dishes::DishLibrary;
pub use history::MealHistoryLog;
pub use inventory::{Consumption, Inventory};
pub use persistence::{append_meal_record, load_json_list, load_meal_records, save_json_list};
pub use plans::MealPlanBook;
