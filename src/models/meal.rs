use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the cooking log: a dish prepared on a date.
///
/// Duplicates are meaningful (the same dish cooked twice).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRecord {
    pub date: NaiveDate,
    pub dish_name: String,
}

impl MealRecord {
    pub fn new(date: NaiveDate, dish_name: impl Into<String>) -> Self {
        Self {
            date,
            dish_name: dish_name.into(),
        }
    }
}

/// A generated plan the user chose to keep, stored as rendered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlan {
    pub name: String,

    pub plan: String,

    /// Creation timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,
}
