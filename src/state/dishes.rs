use std::path::Path;

use tracing::info;

use crate::error::{MealError, Result};
use crate::models::{Dish, DishUpdate};
use crate::planner::DishSource;
use crate::state::persistence::{load_json_list, save_json_list};

/// The household's dish library.
pub struct DishLibrary {
    dishes: Vec<Dish>,
}

impl DishLibrary {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(load_json_list(path)?))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_json_list(path, &self.dishes)
    }

    pub fn all(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn get(&self, id: u32) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    /// Look up a dish by name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Dish> {
        let name = name.trim().to_lowercase();
        self.dishes.iter().find(|d| d.name.to_lowercase() == name)
    }

    /// Add a dish, assigning the next free id.
    pub fn add(&mut self, mut dish: Dish) -> Result<&Dish> {
        if let Some(reason) = dish.validation_error() {
            return Err(MealError::InvalidDish(reason.to_string()));
        }
        dish.name = dish.name.trim().to_string();

        if self.dishes.iter().any(|d| d.name == dish.name) {
            return Err(MealError::DuplicateDish(dish.name));
        }

        dish.id = self.next_id();
        info!(id = dish.id, name = %dish.name, "Added dish");
        self.dishes.push(dish);
        Ok(&self.dishes[self.dishes.len() - 1])
    }

    /// Apply a partial update. The id never changes.
    pub fn update(&mut self, id: u32, update: &DishUpdate) -> Result<&Dish> {
        let index = self
            .dishes
            .iter()
            .position(|d| d.id == id)
            .ok_or(MealError::DishNotFound(id))?;

        let mut updated = update.apply_to(&self.dishes[index]);
        if let Some(reason) = updated.validation_error() {
            return Err(MealError::InvalidDish(reason.to_string()));
        }
        updated.name = updated.name.trim().to_string();

        if self
            .dishes
            .iter()
            .any(|d| d.id != id && d.name == updated.name)
        {
            return Err(MealError::DuplicateDish(updated.name));
        }

        info!(id, name = %updated.name, "Updated dish");
        self.dishes[index] = updated;
        Ok(&self.dishes[index])
    }

    pub fn remove(&mut self, id: u32) -> Result<Dish> {
        let index = self
            .dishes
            .iter()
            .position(|d| d.id == id)
            .ok_or(MealError::DishNotFound(id))?;

        let removed = self.dishes.remove(index);
        info!(id, name = %removed.name, "Removed dish");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    fn next_id(&self) -> u32 {
        self.dishes.iter().map(|d| d.id).max().unwrap_or(0) + 1
    }
}

impl DishSource for DishLibrary {
    fn list_dishes(&self) -> Result<Vec<Dish>> {
        Ok(self.dishes.clone())
    }
}
