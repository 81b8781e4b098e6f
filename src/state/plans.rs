use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{MealError, Result};
use crate::models::SavedPlan;
use crate::state::persistence::{load_json_list, save_json_list};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Named weekly plans the household decided to keep.
pub struct MealPlanBook {
    plans: Vec<SavedPlan>,
}

impl MealPlanBook {
    pub fn new(plans: Vec<SavedPlan>) -> Self {
        Self { plans }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(load_json_list(path)?))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_json_list(path, &self.plans)
    }

    pub fn all(&self) -> &[SavedPlan] {
        &self.plans
    }

    pub fn get(&self, name: &str) -> Option<&SavedPlan> {
        self.position(name).map(|i| &self.plans[i])
    }

    /// Store a plan under `name`, replacing any plan with the same name.
    ///
    /// A replaced plan keeps its original creation date and gains an
    /// `updated_date`.
    pub fn upsert(
        &mut self,
        name: &str,
        plan_text: &str,
        now: NaiveDateTime,
    ) -> Result<&SavedPlan> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MealError::InvalidInput("Plan name is required".to_string()));
        }
        let plan_text = plan_text.trim();
        if plan_text.is_empty() {
            return Err(MealError::InvalidInput("Plan content is required".to_string()));
        }

        let stamp = now.format(TIMESTAMP_FORMAT).to_string();
        let mut saved = SavedPlan {
            name: name.to_string(),
            plan: plan_text.to_string(),
            date: stamp.clone(),
            updated_date: None,
        };

        match self.position(name) {
            Some(i) => {
                saved.date = self.plans[i].date.clone();
                saved.updated_date = Some(stamp);
                self.plans[i] = saved;
                Ok(&self.plans[i])
            }
            None => {
                self.plans.push(saved);
                Ok(&self.plans[self.plans.len() - 1])
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Result<SavedPlan> {
        let i = self
            .position(name)
            .ok_or_else(|| MealError::PlanNotFound(name.to_string()))?;
        Ok(self.plans.remove(i))
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name.trim().to_lowercase();
        self.plans.iter().position(|p| p.name.to_lowercase() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_upsert_keeps_creation_date() {
        let mut book = MealPlanBook::new(Vec::new());
        book.upsert("本周", "周日\n红烧肉", at(18, 9)).unwrap();
        let updated = book.upsert("本周", "周日\n清炒菠菜", at(19, 10)).unwrap();

        assert_eq!(updated.name, "本周");
        assert_eq!(updated.plan, "周日\n清炒菠菜");
        assert_eq!(updated.date, "2026-10-18 09:00:00");
        assert_eq!(updated.updated_date.as_deref(), Some("2026-10-19 10:00:00"));
        assert_eq!(book.all().len(), 1);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut book = MealPlanBook::new(Vec::new());
        book.upsert("Week 42", "周一\n麻婆豆腐", at(19, 8)).unwrap();
        assert!(book.get("week 42").is_some());
        assert!(book.remove("WEEK 42").is_ok());
        assert!(matches!(
            book.remove("week 42"),
            Err(MealError::PlanNotFound(_))
        ));
    }

    #[test]
    fn test_empty_name_or_content_rejected() {
        let mut book = MealPlanBook::new(Vec::new());
        assert!(book.upsert(" ", "周一", at(19, 8)).is_err());
        assert!(book.upsert("空", "\n", at(19, 8)).is_err());
    }
}
