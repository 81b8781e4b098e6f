use std::collections::HashSet;
use std::fmt;

use crate::models::Dish;
use crate::planner::constants::EMPTY_DAY_PLACEHOLDER;

/// A dish with its inventory coverage for one planning run.
#[derive(Debug, Clone)]
pub struct ScoredDish<'a> {
    pub dish: &'a Dish,

    /// Fraction of the dish's ingredients covered by inventory, in [0, 1].
    pub score: f64,

    /// Dish ingredients that some inventory item satisfied.
    pub matched: HashSet<String>,
}

impl<'a> ScoredDish<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        self.dish.name.as_str()
    }
}

/// Dishes scheduled for one day of the week.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub day_name: String,
    pub dishes: Vec<String>,
}

impl DayPlan {
    pub fn new(day_name: impl Into<String>) -> Self {
        Self {
            day_name: day_name.into(),
            dishes: Vec::new(),
        }
    }

    pub fn contains(&self, dish_name: &str) -> bool {
        self.dishes.iter().any(|d| d == dish_name)
    }
}

/// Seven consecutive days of dishes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeeklyPlan {
    pub days: Vec<DayPlan>,
}

impl WeeklyPlan {
    /// Number of times `dish_name` is scheduled across the week.
    pub fn occurrences(&self, dish_name: &str) -> usize {
        self.days
            .iter()
            .flat_map(|d| d.dishes.iter())
            .filter(|d| *d == dish_name)
            .count()
    }

    /// Render one line per day name and dish, with a blank line between days.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, day) in self.days.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.push(day.day_name.clone());
            if day.dishes.is_empty() {
                lines.push(EMPTY_DAY_PLACEHOLDER.to_string());
            } else {
                lines.extend(day.dishes.iter().cloned());
            }
        }
        lines
    }
}

impl fmt::Display for WeeklyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_separates_days_without_trailing_blank() {
        let mut monday = DayPlan::new("周一");
        monday.dishes.push("清炒菠菜".to_string());
        let tuesday = DayPlan::new("周二");

        let plan = WeeklyPlan {
            days: vec![monday, tuesday],
        };

        assert_eq!(plan.to_string(), "周一\n清炒菠菜\n\n周二\n(待定)");
    }

    #[test]
    fn test_occurrences() {
        let mut day = DayPlan::new("周日");
        day.dishes.push("红烧肉".to_string());
        let plan = WeeklyPlan {
            days: vec![day.clone(), day],
        };
        assert_eq!(plan.occurrences("红烧肉"), 2);
        assert_eq!(plan.occurrences("鱼香肉丝"), 0);
    }
}
