use std::collections::HashSet;

use crate::models::{Dish, ScoredDish};

/// Check whether a stocked item satisfies a dish ingredient.
///
/// Case-insensitive, and deliberately loose. True when:
/// 1. the names are equal,
/// 2. either name contains the other, or
/// 3. both are at least two characters and share their first two.
///
/// Rule 3 lets "鸡翅" stand in for "鸡翅根" but also pairs unrelated names
/// with a common prefix. Single-character names never match through it.
pub fn ingredient_matches(inventory_item: &str, dish_ingredient: &str) -> bool {
    let item = inventory_item.to_lowercase();
    let ingredient = dish_ingredient.to_lowercase();

    if item == ingredient {
        return true;
    }

    if item.contains(&ingredient) || ingredient.contains(&item) {
        return true;
    }

    let item_prefix: Vec<char> = item.chars().take(2).collect();
    let ingredient_prefix: Vec<char> = ingredient.chars().take(2).collect();
    item_prefix.len() == 2 && item_prefix == ingredient_prefix
}

/// Score a dish by how much of it the inventory covers.
///
/// Returns `(matched / total, matched)`, where `matched` holds the dish's own
/// ingredient names. A dish without ingredients scores 0.
pub fn score_dish(dish: &Dish, inventory_items: &[String]) -> (f64, HashSet<String>) {
    if dish.ingredients.is_empty() {
        return (0.0, HashSet::new());
    }

    let mut matched = HashSet::new();
    for ingredient in &dish.ingredients {
        if inventory_items
            .iter()
            .any(|item| ingredient_matches(item, ingredient))
        {
            matched.insert(ingredient.clone());
        }
    }

    let score = matched.len() as f64 / dish.ingredients.len() as f64;
    (score, matched)
}

/// Score every dish not cooked recently and keep those with any coverage.
///
/// Sorted by score, highest first; equal scores keep library order.
pub fn feasible_dishes<'a>(
    dishes: &'a [Dish],
    inventory_items: &[String],
    recent: &HashSet<String>,
) -> Vec<ScoredDish<'a>> {
    let mut scored: Vec<ScoredDish<'a>> = dishes
        .iter()
        .filter(|dish| !recent.contains(&dish.name))
        .filter_map(|dish| {
            let (score, matched) = score_dish(dish, inventory_items);
            (score > 0.0).then_some(ScoredDish {
                dish,
                score,
                matched,
            })
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}
