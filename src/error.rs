use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealError {
    #[error("Dish with ID {0} not found")]
    DishNotFound(u32),

    #[error("Dish '{0}' already exists")]
    DuplicateDish(String),

    #[error("Invalid dish: {0}")]
    InvalidDish(String),

    #[error("Item '{0}' not found")]
    ItemNotFound(String),

    #[error("Meal plan '{0}' not found")]
    PlanNotFound(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid date: {0}")]
    Date(#[from] chrono::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MealError>;
