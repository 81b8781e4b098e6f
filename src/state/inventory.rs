use std::path::Path;

use tracing::{debug, info};

use crate::error::{MealError, Result};
use crate::models::{InventoryEntry, InventoryUpdate};
use crate::state::persistence::{load_json_list, save_json_list};

/// Result of drawing one dish ingredient from stock.
#[derive(Debug, Clone, PartialEq)]
pub enum Consumption {
    /// `item` was decreased and now holds `remaining`.
    Used {
        ingredient: String,
        item: String,
        remaining: f64,
    },
    /// Nothing in stock resembles the ingredient.
    Missing { ingredient: String },
}

/// Stocked ingredients, keyed by case-insensitive name.
pub struct Inventory {
    items: Vec<InventoryEntry>,
}

impl Inventory {
    pub fn new(items: Vec<InventoryEntry>) -> Self {
        let mut inventory = Self { items: Vec::new() };
        for item in items {
            inventory.add(item);
        }
        inventory
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(load_json_list(path)?))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_json_list(path, &self.items)
    }

    pub fn all(&self) -> &[InventoryEntry] {
        &self.items
    }

    /// Item names as the planner consumes them.
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|i| i.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&InventoryEntry> {
        self.position(name).map(|i| &self.items[i])
    }

    /// Stock an item.
    ///
    /// An existing item in the same unit gains the new quantity; one in a
    /// different unit is replaced outright.
    pub fn add(&mut self, entry: InventoryEntry) -> &InventoryEntry {
        match self.position(&entry.name) {
            Some(i) if self.items[i].unit == entry.unit => {
                self.items[i].quantity += entry.quantity;
                debug!(name = %entry.name, quantity = self.items[i].quantity, "Merged stock");
                &self.items[i]
            }
            Some(i) => {
                debug!(name = %entry.name, unit = %entry.unit, "Replaced stock with new unit");
                self.items[i] = entry;
                &self.items[i]
            }
            None => {
                self.items.push(entry);
                &self.items[self.items.len() - 1]
            }
        }
    }

    pub fn update(&mut self, name: &str, update: InventoryUpdate) -> Result<&InventoryEntry> {
        let i = self
            .position(name)
            .ok_or_else(|| MealError::ItemNotFound(name.to_string()))?;

        let item = &mut self.items[i];
        if let Some(quantity) = update.quantity {
            item.quantity = quantity.max(0.0);
        }
        if let Some(unit) = update.unit {
            item.unit = unit;
        }
        if let Some(category) = update.category {
            item.category = category;
        }
        if update.weight.is_some() {
            item.weight = update.weight;
        }
        Ok(&self.items[i])
    }

    pub fn remove(&mut self, name: &str) -> Result<InventoryEntry> {
        let i = self
            .position(name)
            .ok_or_else(|| MealError::ItemNotFound(name.to_string()))?;
        Ok(self.items.remove(i))
    }

    /// Take `amount` off an item, never going below zero.
    pub fn decrease(&mut self, name: &str, amount: f64) -> Result<&InventoryEntry> {
        let amount = checked_amount(amount)?;
        let i = self
            .position(name)
            .ok_or_else(|| MealError::ItemNotFound(name.to_string()))?;

        let item = &mut self.items[i];
        item.quantity = (item.quantity - amount).max(0.0);
        Ok(&self.items[i])
    }

    /// Draw each ingredient of a cooked dish from stock.
    ///
    /// The first item that equals the ingredient or contains it (or is
    /// contained by it) is decreased by `amount`.
    pub fn consume_ingredients(
        &mut self,
        ingredients: &[String],
        amount: f64,
    ) -> Result<Vec<Consumption>> {
        let amount = checked_amount(amount)?;
        let outcomes: Vec<Consumption> = ingredients
            .iter()
            .map(|ingredient| {
                let wanted = ingredient.to_lowercase();
                let found = self.items.iter().position(|item| {
                    let key = item.key();
                    key == wanted || key.contains(&wanted) || wanted.contains(&key)
                });

                match found {
                    Some(i) => {
                        let item = &mut self.items[i];
                        item.quantity = (item.quantity - amount).max(0.0);
                        Consumption::Used {
                            ingredient: ingredient.clone(),
                            item: item.name.clone(),
                            remaining: item.quantity,
                        }
                    }
                    None => Consumption::Missing {
                        ingredient: ingredient.clone(),
                    },
                }
            })
            .collect();

        info!(
            used = outcomes
                .iter()
                .filter(|o| matches!(o, Consumption::Used { .. }))
                .count(),
            missing = outcomes
                .iter()
                .filter(|o| matches!(o, Consumption::Missing { .. }))
                .count(),
            "Consumed ingredients"
        );
        Ok(outcomes)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name.trim().to_lowercase();
        self.items.iter().position(|i| i.key() == key)
    }
}

/// Amounts taken from stock must be finite and non-negative.
fn checked_amount(amount: f64) -> Result<f64> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(MealError::InvalidInput(format!(
            "Amount must be a non-negative number, got {}",
            amount
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IngredientCategory, Unit};
    use assert_float_eq::assert_float_absolute_eq;

    fn entry(name: &str, quantity: f64, unit: Unit) -> InventoryEntry {
        InventoryEntry::new(name, quantity, unit, IngredientCategory::Other)
    }

    #[test]
    fn test_add_merges_same_unit() {
        let mut inventory = Inventory::new(vec![entry("Tofu", 1.0, Unit::Box)]);
        inventory.add(entry("tofu", 2.0, Unit::Box));

        assert_eq!(inventory.len(), 1);
        assert_float_absolute_eq!(inventory.get("TOFU").unwrap().quantity, 3.0, 1e-9);
    }

    #[test]
    fn test_add_replaces_different_unit() {
        let mut inventory = Inventory::new(vec![entry("排骨", 1.0, Unit::Pound)]);
        inventory.add(entry("排骨", 500.0, Unit::Gram));

        let item = inventory.get("排骨").unwrap();
        assert_eq!(item.unit, Unit::Gram);
        assert_float_absolute_eq!(item.quantity, 500.0, 1e-9);
    }

    #[test]
    fn test_decrease_floors_at_zero() {
        let mut inventory = Inventory::new(vec![entry("菠菜", 1.0, Unit::Bunch)]);
        let item = inventory.decrease("菠菜", 3.0).unwrap();
        assert_eq!(item.quantity, 0.0);
        assert!(matches!(
            inventory.decrease("白菜", 1.0),
            Err(MealError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_update_keeps_name() {
        let mut inventory = Inventory::new(vec![entry("香菇", 2.0, Unit::Pack)]);
        let update = InventoryUpdate {
            quantity: Some(5.0),
            unit: Some(Unit::Box),
            ..Default::default()
        };
        let item = inventory.update("香菇", update).unwrap();
        assert_eq!(item.name, "香菇");
        assert_eq!(item.quantity, 5.0);
        assert_eq!(item.unit, Unit::Box);
    }

    #[test]
    fn test_consume_ingredients() {
        let mut inventory = Inventory::new(vec![
            entry("大蒜", 3.0, Unit::Piece),
            entry("菠菜", 1.0, Unit::Bunch),
        ]);

        let wanted = ["菠菜".to_string(), "蒜".to_string(), "盐".to_string()];
        let outcomes = inventory.consume_ingredients(&wanted, 1.0).unwrap();

        assert_eq!(
            outcomes[0],
            Consumption::Used {
                ingredient: "菠菜".to_string(),
                item: "菠菜".to_string(),
                remaining: 0.0,
            }
        );
        assert!(matches!(&outcomes[1], Consumption::Used { item, .. } if item == "大蒜"));
        assert!(matches!(&outcomes[2], Consumption::Missing { ingredient } if ingredient == "盐"));
        assert_float_absolute_eq!(inventory.get("大蒜").unwrap().quantity, 2.0, 1e-9);
    }

    #[test]
    fn test_remove() {
        let mut inventory = Inventory::new(vec![entry("面筋", 1.0, Unit::Pack)]);
        assert_eq!(inventory.remove("面筋").unwrap().name, "面筋");
        assert!(inventory.is_empty());
        assert!(inventory.remove("面筋").is_err());
    }

    #[test]
    fn test_negative_amount_leaves_stock_alone() {
        let mut inventory = Inventory::new(vec![entry("菠菜", 1.0, Unit::Bunch)]);
        let wanted = vec!["菠菜".to_string()];

        assert!(matches!(
            inventory.consume_ingredients(&wanted, -2.0),
            Err(MealError::InvalidInput(_))
        ));
        assert!(inventory.consume_ingredients(&wanted, f64::NAN).is_err());
        assert!(inventory.decrease("菠菜", -1.0).is_err());
        assert_float_absolute_eq!(inventory.get("菠菜").unwrap().quantity, 1.0, 1e-9);
    }
}
