use tracing::warn;

use crate::models::{IngredientCategory, InventoryEntry, Unit};
use crate::receipt::categorize::categorize;
use crate::receipt::patterns::{DEFAULT_QUANTITY, FIELD_SPLIT_RE, HEADER_TOKENS};

/// Whether pasted text looks like a spreadsheet copy.
pub fn is_table(text: &str) -> bool {
    text.contains('\t')
}

/// Parse `name  quantity  unit  [category]` rows.
///
/// A header row is skipped when present. Rows with fewer than three fields
/// are dropped.
pub fn parse_table(text: &str) -> Vec<InventoryEntry> {
    let lines: Vec<&str> = text.trim().lines().collect();

    let has_header = lines
        .first()
        .is_some_and(|first| HEADER_TOKENS.iter().any(|t| first.contains(t)));
    let skip = usize::from(has_header);

    lines
        .iter()
        .skip(skip)
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .filter_map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> Option<InventoryEntry> {
    let mut fields: Vec<&str> = FIELD_SPLIT_RE
        .split(line)
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();

    if fields.len() < 3 {
        fields = line.split_whitespace().collect();
    }

    if fields.len() < 3 {
        warn!(line, "Skipping table row with fewer than three fields");
        return None;
    }

    let name = fields[0];
    let category = fields
        .get(3)
        .map(|label| IngredientCategory::from_label(label))
        .unwrap_or_else(|| categorize(name));

    Some(InventoryEntry::new(
        name,
        parse_quantity(fields[1]),
        Unit::from_label(fields[2]),
        category,
    ))
}

/// Parse a quantity cell, falling back to 1 for anything unusable.
pub fn parse_quantity(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(q) if q.is_finite() && q >= 0.0 => q,
        _ => DEFAULT_QUANTITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_with_categories() {
        let entries = parse_table("排骨\t1\t磅\t肉类\n白菜\t2\t斤\t蔬菜");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "排骨");
        assert_eq!(entries[0].quantity, 1.0);
        assert_eq!(entries[0].unit.label(), "磅");
        assert_eq!(entries[0].category, IngredientCategory::Meat);
        assert_eq!(entries[1].name, "白菜");
        assert_eq!(entries[1].quantity, 2.0);
        assert_eq!(entries[1].unit, Unit::Jin);
        assert_eq!(entries[1].category, IngredientCategory::Vegetable);
    }

    #[test]
    fn test_header_skipped_and_category_derived() {
        let text = "Ingredient Name\tQuantity\tUnit\n鸡翅\t1.5\t磅\n";
        let entries = parse_table(text);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "鸡翅");
        assert_eq!(entries[0].quantity, 1.5);
        assert_eq!(entries[0].category, IngredientCategory::Meat);
    }

    #[test]
    fn test_bad_quantity_defaults_to_one() {
        let entries = parse_table("香菇\tabout two\t盒");
        assert_eq!(entries[0].quantity, 1.0);
        assert_eq!(entries[0].unit, Unit::Box);

        assert_eq!(parse_quantity("-3"), 1.0);
        assert_eq!(parse_quantity("NaN"), 1.0);
        assert_eq!(parse_quantity("0"), 0.0);
    }

    #[test]
    fn test_space_separated_columns() {
        let entries = parse_table("豆腐  2  盒\n\n面筋 1 包\t");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "豆腐");
        assert_eq!(entries[1].name, "面筋");
        assert_eq!(entries[1].unit, Unit::Pack);
        assert_eq!(entries[1].category, IngredientCategory::Legume);
    }

    #[test]
    fn test_short_rows_dropped() {
        assert!(parse_table("只有名字\t1").is_empty());
    }
}
