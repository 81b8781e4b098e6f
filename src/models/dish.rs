use serde::{Deserialize, Serialize};

use crate::models::DishCategory;

/// A named recipe in the dish library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    #[serde(default)]
    pub id: u32,

    pub name: String,

    pub category: DishCategory,

    /// Required ingredients, in the order the cook listed them.
    pub ingredients: Vec<String>,
}

impl Dish {
    pub fn new(name: impl Into<String>, category: DishCategory, ingredients: &[&str]) -> Self {
        Self {
            id: 0,
            name: name.into(),
            category,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Check the fields a library entry must always carry.
    ///
    /// Returns the reason the dish is rejected, if any.
    pub fn validation_error(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("Dish must have a name");
        }
        if self.ingredients.is_empty() {
            return Some("Dish must have at least one ingredient");
        }
        if self.ingredients.iter().any(|i| i.trim().is_empty()) {
            return Some("Ingredient names must not be blank");
        }
        None
    }
}

/// Partial update applied to an existing dish.
#[derive(Debug, Clone, Default)]
pub struct DishUpdate {
    pub name: Option<String>,
    pub category: Option<DishCategory>,
    pub ingredients: Option<Vec<String>>,
}

impl DishUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.ingredients.is_none()
    }

    /// Apply the set fields on top of `dish`, leaving the id untouched.
    pub fn apply_to(&self, dish: &Dish) -> Dish {
        Dish {
            id: dish.id,
            name: self.name.clone().unwrap_or_else(|| dish.name.clone()),
            category: self.category.unwrap_or(dish.category),
            ingredients: self
                .ingredients
                .clone()
                .unwrap_or_else(|| dish.ingredients.clone()),
        }
    }
}
