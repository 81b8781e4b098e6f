use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MealError;

/// Category a dish is filed under in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DishCategory {
    #[serde(rename = "肉类", alias = "Meat")]
    Meat,
    #[serde(rename = "海鲜", alias = "Seafood")]
    Seafood,
    #[serde(rename = "蔬菜", alias = "Vegetable")]
    Vegetable,
    #[serde(rename = "豆类", alias = "Legume")]
    Legume,
    #[serde(rename = "蛋类", alias = "Egg")]
    Egg,
    #[serde(rename = "主食", alias = "Staple")]
    Staple,
}

impl DishCategory {
    pub const ALL: [DishCategory; 6] = [
        DishCategory::Meat,
        DishCategory::Seafood,
        DishCategory::Vegetable,
        DishCategory::Legume,
        DishCategory::Egg,
        DishCategory::Staple,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DishCategory::Meat => "肉类",
            DishCategory::Seafood => "海鲜",
            DishCategory::Vegetable => "蔬菜",
            DishCategory::Legume => "豆类",
            DishCategory::Egg => "蛋类",
            DishCategory::Staple => "主食",
        }
    }

    fn english(&self) -> &'static str {
        match self {
            DishCategory::Meat => "meat",
            DishCategory::Seafood => "seafood",
            DishCategory::Vegetable => "vegetable",
            DishCategory::Legume => "legume",
            DishCategory::Egg => "egg",
            DishCategory::Staple => "staple",
        }
    }

    /// Meat and seafood dishes both count as the day's protein.
    #[inline]
    pub fn is_protein(&self) -> bool {
        matches!(self, DishCategory::Meat | DishCategory::Seafood)
    }
}

impl fmt::Display for DishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DishCategory {
    type Err = MealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        DishCategory::ALL
            .into_iter()
            .find(|c| c.label() == s || c.english().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let labels: Vec<&str> = DishCategory::ALL.iter().map(|c| c.label()).collect();
                MealError::UnknownCategory(format!(
                    "'{}' (expected one of: {})",
                    s,
                    labels.join(", ")
                ))
            })
    }
}

/// Category assigned to a stocked ingredient.
///
/// Variant order mirrors the keyword table the categorizer walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IngredientCategory {
    #[serde(rename = "肉类", alias = "Meat")]
    Meat,
    #[serde(rename = "海鲜", alias = "Seafood")]
    Seafood,
    #[serde(rename = "蔬菜", alias = "Vegetable")]
    Vegetable,
    #[serde(rename = "豆制品", alias = "Legume")]
    Legume,
    #[serde(rename = "蛋类", alias = "Egg")]
    Egg,
    #[serde(rename = "主食", alias = "Staple")]
    Staple,
    #[serde(rename = "调料", alias = "Seasoning")]
    Seasoning,
    #[default]
    #[serde(rename = "其他", alias = "Other")]
    Other,
}

impl IngredientCategory {
    pub const ALL: [IngredientCategory; 8] = [
        IngredientCategory::Meat,
        IngredientCategory::Seafood,
        IngredientCategory::Vegetable,
        IngredientCategory::Legume,
        IngredientCategory::Egg,
        IngredientCategory::Staple,
        IngredientCategory::Seasoning,
        IngredientCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IngredientCategory::Meat => "肉类",
            IngredientCategory::Seafood => "海鲜",
            IngredientCategory::Vegetable => "蔬菜",
            IngredientCategory::Legume => "豆制品",
            IngredientCategory::Egg => "蛋类",
            IngredientCategory::Staple => "主食",
            IngredientCategory::Seasoning => "调料",
            IngredientCategory::Other => "其他",
        }
    }

    /// Lenient lookup used for free-text columns: unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        IngredientCategory::ALL
            .into_iter()
            .find(|c| c.label() == label || format!("{:?}", c).eq_ignore_ascii_case(label))
            .unwrap_or(IngredientCategory::Other)
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_category_parses_label_and_english() {
        assert_eq!("蔬菜".parse::<DishCategory>().unwrap(), DishCategory::Vegetable);
        assert_eq!("SEAFOOD".parse::<DishCategory>().unwrap(), DishCategory::Seafood);
        assert!("水果".parse::<DishCategory>().is_err());
    }

    #[test]
    fn test_protein_categories() {
        assert!(DishCategory::Meat.is_protein());
        assert!(DishCategory::Seafood.is_protein());
        assert!(!DishCategory::Egg.is_protein());
    }

    #[test]
    fn test_ingredient_category_unknown_label_is_other() {
        assert_eq!(IngredientCategory::from_label("调料"), IngredientCategory::Seasoning);
        assert_eq!(IngredientCategory::from_label("legume"), IngredientCategory::Legume);
        assert_eq!(IngredientCategory::from_label("水果"), IngredientCategory::Other);
    }

    #[test]
    fn test_serde_uses_chinese_labels() {
        let json = serde_json::to_string(&DishCategory::Legume).unwrap();
        assert_eq!(json, "\"豆类\"");
        let parsed: IngredientCategory = serde_json::from_str("\"海鲜\"").unwrap();
        assert_eq!(parsed, IngredientCategory::Seafood);
    }
}
