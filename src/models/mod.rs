mod category;
mod dish;
mod inventory;
mod meal;
mod plan;
mod unit;

pub use category::{DishCategory, IngredientCategory};
pub use dish::{Dish, DishUpdate};
pub use inventory::{InventoryEntry, InventoryUpdate};
pub use meal::{MealRecord, SavedPlan};
pub use plan::{DayPlan, ScoredDish, WeeklyPlan};
pub use unit::Unit;
