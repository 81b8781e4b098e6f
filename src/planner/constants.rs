/// Number of days in one generated plan.
pub const DAYS_PER_WEEK: usize = 7;

/// Day labels indexed by weekday, Sunday first.
pub const DAY_NAMES: [&str; DAYS_PER_WEEK] =
    ["周日", "周一", "周二", "周三", "周四", "周五", "周六"];

/// Maximum times one dish may be scheduled within a single week.
pub const MAX_REPEATS_PER_WEEK: u32 = 2;

/// Dishes cooked within this many trailing days are left out of the plan.
pub const RECENT_DAYS: i64 = 7;

/// Extra dishes appended after the vegetable and protein picks.
pub const EXTRA_DISHES_PER_DAY: usize = 2;

/// A day with fewer dishes than this gets one more, regardless of category.
pub const MIN_DISHES_PER_DAY: usize = 2;

/// Returned instead of a plan when no dish scores above zero.
pub const NO_PLAN_MESSAGE: &str = "无法生成餐单：没有找到匹配的菜品。";

/// Printed under a day that ended up with no dishes.
pub const EMPTY_DAY_PLACEHOLDER: &str = "(待定)";

/// Runtime-configurable planner limits.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub max_repeats: u32,
    pub recent_days: i64,
    pub extra_dishes_per_day: usize,
    pub min_dishes_per_day: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_repeats: MAX_REPEATS_PER_WEEK,
            recent_days: RECENT_DAYS,
            extra_dishes_per_day: EXTRA_DISHES_PER_DAY,
            min_dishes_per_day: MIN_DISHES_PER_DAY,
        }
    }
}

/// Day label for a weekday index, wrapping past Saturday.
pub fn day_name(index: usize) -> &'static str {
    DAY_NAMES[index % DAYS_PER_WEEK]
}
