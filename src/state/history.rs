use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::error::{MealError, Result};
use crate::models::MealRecord;
use crate::planner::{MealHistory, recent_names_as_of};
use crate::state::persistence::{append_meal_record, load_meal_records};

/// Append-only cooking log backed by a CSV file.
pub struct MealHistoryLog {
    path: PathBuf,
}

impl MealHistoryLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn records(&self) -> Result<Vec<MealRecord>> {
        load_meal_records(&self.path)
    }

    /// Log that `dish_name` was cooked on `date`.
    pub fn record(&self, date: NaiveDate, dish_name: &str) -> Result<MealRecord> {
        let dish_name = dish_name.trim();
        if dish_name.is_empty() {
            return Err(MealError::InvalidInput("Dish name required".to_string()));
        }

        let record = MealRecord::new(date, dish_name);
        append_meal_record(&self.path, &record)?;
        info!(%date, dish_name, "Recorded meal");
        Ok(record)
    }

    /// Records dated within the trailing `days` days of `today`, newest first.
    pub fn records_since(&self, today: NaiveDate, days: i64) -> Result<Vec<MealRecord>> {
        let cutoff = today - chrono::Duration::days(days);
        let mut records: Vec<MealRecord> = self
            .records()?
            .into_iter()
            .filter(|r| r.date > cutoff)
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }
}

impl MealHistory for MealHistoryLog {
    fn recent_dish_names(&self, within_days: i64) -> Result<HashSet<String>> {
        let today = Local::now().date_naive();
        Ok(recent_names_as_of(&self.records()?, today, within_days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_record_and_recent() {
        let dir = tempdir().unwrap();
        let log = MealHistoryLog::new(dir.path().join("past_meals.csv"));

        let today = Local::now().date_naive();
        log.record(today, "清炒菠菜").unwrap();
        log.record(today - chrono::Duration::days(30), "红烧肉").unwrap();

        let recent = log.recent_dish_names(7).unwrap();
        assert!(recent.contains("清炒菠菜"));
        assert!(!recent.contains("红烧肉"));

        assert_eq!(log.records().unwrap().len(), 2);
        assert_eq!(log.records_since(today, 7).unwrap().len(), 1);
    }

    #[test]
    fn test_blank_dish_rejected() {
        let dir = tempdir().unwrap();
        let log = MealHistoryLog::new(dir.path().join("past_meals.csv"));
        let today = Local::now().date_naive();
        assert!(matches!(
            log.record(today, "  "),
            Err(MealError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_file_has_no_history() {
        let dir = tempdir().unwrap();
        let log = MealHistoryLog::new(dir.path().join("none.csv"));
        assert!(log.recent_dish_names(7).unwrap().is_empty());
    }

    #[test]
    fn test_ragged_log_still_plans() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("past_meals.csv");
        let today = Local::now().date_naive();
        let yesterday = today - chrono::Duration::days(1);
        std::fs::write(
            &path,
            format!("date,dish_name\n{today},红烧肉\n{yesterday},清炒菠菜,extra\n{yesterday}\n"),
        )
        .unwrap();

        let recent = MealHistoryLog::new(&path).recent_dish_names(7).unwrap();
        assert!(recent.contains("红烧肉"));
    }
}
