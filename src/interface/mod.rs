pub mod prompts;
pub mod render;

pub use prompts::{prompt_dish_name, prompt_yes_no, suggest_dishes};
pub use render::{
    display_consumption, display_dishes, display_history, display_inventory, display_saved_plan,
    display_saved_plans,
};
