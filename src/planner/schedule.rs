use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::Result;
use crate::models::{DayPlan, Dish, DishCategory, ScoredDish, WeeklyPlan};
use crate::planner::constants::*;
use crate::planner::matching::feasible_dishes;
use crate::planner::sources::{DishSource, MealHistory};

/// Per-run count of how often each dish has been scheduled.
#[derive(Debug)]
struct UsageTracker<'a> {
    counts: HashMap<&'a str, u32>,
    max_repeats: u32,
}

impl<'a> UsageTracker<'a> {
    fn new(max_repeats: u32) -> Self {
        Self {
            counts: HashMap::new(),
            max_repeats,
        }
    }

    fn count(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    fn is_usable(&self, name: &str) -> bool {
        self.count(name) < self.max_repeats
    }

    fn increment(&mut self, name: &'a str) {
        *self.counts.entry(name).or_insert(0) += 1;
    }
}

/// Pick one dish from a category bucket.
///
/// A dish not yet scheduled this week wins, highest score first. Otherwise
/// the usable dish scheduled the fewest times; ties go to the higher score.
fn pick_from_bucket<'a>(
    bucket: &[&ScoredDish<'a>],
    usage: &UsageTracker<'a>,
) -> Option<&'a str> {
    let fresh = bucket
        .iter()
        .find(|s| usage.count(s.name()) == 0 && usage.is_usable(s.name()));

    fresh
        .or_else(|| {
            bucket
                .iter()
                .filter(|s| usage.is_usable(s.name()))
                .min_by_key(|s| usage.count(s.name()))
        })
        .map(|s| s.name())
}

/// Lay out seven days from an already scored and sorted dish list.
///
/// Each day gets a vegetable dish, a meat or seafood dish, up to
/// `extra_dishes_per_day` more of the best remaining dishes, and a final
/// top-up when it is still short of `min_dishes_per_day`. No dish is
/// scheduled more than `max_repeats` times.
pub fn schedule_week<'a>(
    scored: &[ScoredDish<'a>],
    start_day: usize,
    config: &PlannerConfig,
) -> WeeklyPlan {
    let vegetables: Vec<&ScoredDish<'a>> = scored
        .iter()
        .filter(|s| s.dish.category == DishCategory::Vegetable)
        .collect();
    let proteins: Vec<&ScoredDish<'a>> = scored
        .iter()
        .filter(|s| s.dish.category.is_protein())
        .collect();

    debug!(
        vegetables = vegetables.len(),
        proteins = proteins.len(),
        others = scored.len() - vegetables.len() - proteins.len(),
        "Partitioned feasible dishes"
    );

    let mut usage = UsageTracker::new(config.max_repeats);
    let mut plan = WeeklyPlan::default();

    for offset in 0..DAYS_PER_WEEK {
        let mut day = DayPlan::new(day_name(start_day + offset));
        let mut chosen: Vec<&'a str> = Vec::new();

        if let Some(name) = pick_from_bucket(&vegetables, &usage) {
            chosen.push(name);
        }
        if let Some(name) = pick_from_bucket(&proteins, &usage) {
            chosen.push(name);
        }

        let extras: Vec<&'a str> = scored
            .iter()
            .map(ScoredDish::name)
            .filter(|name| usage.is_usable(name) && !chosen.contains(name))
            .take(config.extra_dishes_per_day)
            .collect();
        chosen.extend(extras);

        if chosen.len() < config.min_dishes_per_day {
            let top_up = scored
                .iter()
                .map(ScoredDish::name)
                .find(|name| usage.is_usable(name) && !chosen.contains(name));
            if let Some(name) = top_up {
                chosen.push(name);
            }
        }

        for &name in &chosen {
            usage.increment(name);
        }

        debug!(day = %day.day_name, dishes = ?chosen, "Scheduled day");
        day.dishes = chosen.into_iter().map(str::to_string).collect();
        plan.days.push(day);
    }

    plan
}

/// Build a week of dishes from a library snapshot.
///
/// Dishes cooked recently or with no ingredient coverage are dropped first.
/// Returns `None` when nothing is left to schedule.
pub fn build_weekly_plan(
    dishes: &[Dish],
    recent: &HashSet<String>,
    inventory_items: &[String],
    start_day: usize,
    config: &PlannerConfig,
) -> Option<WeeklyPlan> {
    let items: Vec<String> = inventory_items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    let scored = feasible_dishes(dishes, &items, recent);
    debug!(
        library = dishes.len(),
        recent = recent.len(),
        feasible = scored.len(),
        "Scored dish library"
    );

    if scored.is_empty() {
        return None;
    }

    Some(schedule_week(&scored, start_day % DAYS_PER_WEEK, config))
}

/// Weekly planner reading its dishes and history through the store traits.
pub struct WeeklyPlanner<'s> {
    dishes: &'s dyn DishSource,
    history: &'s dyn MealHistory,
    config: PlannerConfig,
}

impl<'s> WeeklyPlanner<'s> {
    pub fn new(dishes: &'s dyn DishSource, history: &'s dyn MealHistory) -> Self {
        Self::with_config(dishes, history, PlannerConfig::default())
    }

    pub fn with_config(
        dishes: &'s dyn DishSource,
        history: &'s dyn MealHistory,
        config: PlannerConfig,
    ) -> Self {
        Self {
            dishes,
            history,
            config,
        }
    }

    /// Plan a week starting at `start_day` (0 = Sunday).
    ///
    /// Reads the library and the recent history once each.
    pub fn plan(&self, inventory_items: &[String], start_day: usize) -> Result<Option<WeeklyPlan>> {
        let dishes = self.dishes.list_dishes()?;
        let recent = self.history.recent_dish_names(self.config.recent_days)?;
        Ok(build_weekly_plan(
            &dishes,
            &recent,
            inventory_items,
            start_day,
            &self.config,
        ))
    }

    /// Plan a week and render it as text, or the no-plan message.
    pub fn generate(&self, inventory_items: &[String], start_day: usize) -> Result<String> {
        Ok(self
            .plan(inventory_items, start_day)?
            .map(|plan| plan.to_string())
            .unwrap_or_else(|| NO_PLAN_MESSAGE.to_string()))
    }
}
