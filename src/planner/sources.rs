use std::collections::HashSet;

use chrono::{Duration, Local, NaiveDate};

use crate::error::Result;
use crate::models::{Dish, MealRecord};

/// Anything that can hand the planner the current dish library.
pub trait DishSource {
    fn list_dishes(&self) -> Result<Vec<Dish>>;
}

/// Anything that knows which dishes were cooked lately.
pub trait MealHistory {
    /// Names of dishes cooked within the trailing `within_days` days.
    fn recent_dish_names(&self, within_days: i64) -> Result<HashSet<String>>;
}

impl DishSource for Vec<Dish> {
    fn list_dishes(&self) -> Result<Vec<Dish>> {
        Ok(self.clone())
    }
}

impl MealHistory for Vec<MealRecord> {
    fn recent_dish_names(&self, within_days: i64) -> Result<HashSet<String>> {
        Ok(recent_names_as_of(self, Local::now().date_naive(), within_days))
    }
}

/// Dishes cooked after `today - within_days`.
///
/// With a 7-day window this covers today and the six days before it; records
/// dated in the future also count as recent.
pub fn recent_names_as_of(
    records: &[MealRecord],
    today: NaiveDate,
    within_days: i64,
) -> HashSet<String> {
    let cutoff = today - Duration::days(within_days);
    records
        .iter()
        .filter(|r| r.date > cutoff)
        .map(|r| r.dish_name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_recent_window_boundaries() {
        let records = vec![
            MealRecord::new(date("2026-10-19"), "今天"),
            MealRecord::new(date("2026-10-13"), "六天前"),
            MealRecord::new(date("2026-10-12"), "七天前"),
            MealRecord::new(date("2026-09-01"), "上个月"),
        ];

        let recent = recent_names_as_of(&records, date("2026-10-19"), 7);

        assert!(recent.contains("今天"));
        assert!(recent.contains("六天前"));
        assert!(!recent.contains("七天前"));
        assert!(!recent.contains("上个月"));
    }

    #[test]
    fn test_duplicate_records_collapse() {
        let records = vec![
            MealRecord::new(date("2026-10-18"), "红烧肉"),
            MealRecord::new(date("2026-10-17"), "红烧肉"),
        ];
        let recent = recent_names_as_of(&records, date("2026-10-19"), 7);
        assert_eq!(recent.len(), 1);
    }
}
