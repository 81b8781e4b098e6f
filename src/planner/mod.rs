pub mod constants;
pub mod matching;
pub mod schedule;
pub mod sources;

pub use constants::*;
pub use matching::{feasible_dishes, ingredient_matches, score_dish};
pub use schedule::{WeeklyPlanner, build_weekly_plan, schedule_week};
pub use sources::{DishSource, MealHistory, recent_names_as_of};
