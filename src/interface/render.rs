use crate::models::{Dish, InventoryEntry, MealRecord, SavedPlan};
use crate::state::Consumption;

/// Display parsed or stocked items in a formatted table.
pub fn display_inventory(items: &[InventoryEntry], title: &str) {
    if items.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    let max_name_len = items
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(10);

    for item in items {
        let weight = item
            .weight
            .as_deref()
            .map(|w| format!("  ({})", w))
            .unwrap_or_default();

        println!(
            "  {:<width$}  {:>6} {:<4} [{}]{}",
            item.name,
            format_quantity(item.quantity),
            item.unit,
            item.category,
            weight,
            width = max_name_len
        );
    }

    println!();
}

/// Display the dish library in id order.
pub fn display_dishes(dishes: &[Dish]) {
    if dishes.is_empty() {
        println!("Dish library is empty. Use 'dish add' to create one.");
        return;
    }

    println!();
    println!("=== Dishes ({}) ===", dishes.len());
    println!();

    for dish in dishes {
        println!(
            "{:>4}. {} [{}] - {}",
            dish.id,
            dish.name,
            dish.category,
            dish.ingredients.join(", ")
        );
    }

    println!();
}

pub fn display_history(records: &[MealRecord], days: i64) {
    if records.is_empty() {
        println!("Nothing cooked in the last {} days.", days);
        return;
    }

    println!();
    println!("=== Cooked in the last {} days ===", days);
    println!();

    for record in records {
        println!("  {}  {}", record.date, record.dish_name);
    }

    println!();
}

pub fn display_saved_plans(plans: &[SavedPlan]) {
    if plans.is_empty() {
        println!("No saved plans.");
        return;
    }

    for plan in plans {
        match &plan.updated_date {
            Some(updated) => println!(
                "  {}  (saved {}, updated {})",
                plan.name, plan.date, updated
            ),
            None => println!("  {}  (saved {})", plan.name, plan.date),
        }
    }
}

pub fn display_saved_plan(plan: &SavedPlan) {
    println!();
    println!("=== {} ===", plan.name);
    println!();
    println!("{}", plan.plan);
    println!();
}

/// Report which ingredients were drawn from stock after cooking.
pub fn display_consumption(outcomes: &[Consumption]) {
    for outcome in outcomes {
        match outcome {
            Consumption::Used {
                ingredient,
                item,
                remaining,
            } => {
                if ingredient == item {
                    println!("  - {}: {} left", item, format_quantity(*remaining));
                } else {
                    println!(
                        "  - {} (as {}): {} left",
                        ingredient,
                        item,
                        format_quantity(*remaining)
                    );
                }
            }
            Consumption::Missing { ingredient } => {
                println!("  ! {}: not in stock", ingredient);
            }
        }
    }
}

/// Whole quantities print without a fraction.
fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{:.0}", quantity)
    } else {
        format!("{:.2}", quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(0.5), "0.50");
    }
}
