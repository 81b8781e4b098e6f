use assert_float_eq::assert_float_absolute_eq;

use meal_rotation_rs::models::{IngredientCategory, InventoryEntry, Unit};
use meal_rotation_rs::receipt::{categorize, parse_purchase_text};

fn table_line(entry: &InventoryEntry) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        entry.name, entry.quantity, entry.unit, entry.category
    )
}

#[test]
fn test_spreadsheet_rows_parse_to_entries() {
    let entries = parse_purchase_text("排骨\t1\t磅\t肉类\n白菜\t2\t斤\t蔬菜");

    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].name, "排骨");
    assert_float_absolute_eq!(entries[0].quantity, 1.0, 1e-9);
    assert_eq!(entries[0].unit, Unit::Pound);
    assert_eq!(entries[0].category, IngredientCategory::Meat);

    assert_eq!(entries[1].name, "白菜");
    assert_float_absolute_eq!(entries[1].quantity, 2.0, 1e-9);
    assert_eq!(entries[1].unit, Unit::Jin);
    assert_eq!(entries[1].category, IngredientCategory::Vegetable);
}

#[test]
fn test_table_fields_survive_reparse() {
    let stocked = vec![
        InventoryEntry::new("三文鱼", 0.5, Unit::Pound, IngredientCategory::Seafood),
        InventoryEntry::new("嫩豆腐", 2.0, Unit::Box, IngredientCategory::Legume),
        InventoryEntry::new("鸡蛋", 12.0, Unit::Piece, IngredientCategory::Egg),
        InventoryEntry::new("生抽", 1.0, Unit::Bottle, IngredientCategory::Seasoning),
        InventoryEntry::new("挂面", 3.0, Unit::Other("袋".to_string()), IngredientCategory::Staple),
        InventoryEntry::new("牛排", 2.0, Unit::Other("lb".to_string()), IngredientCategory::Meat),
        InventoryEntry::new(
            "面粉",
            500.0,
            Unit::Other("g".to_string()),
            IngredientCategory::Staple,
        ),
    ];

    let text: Vec<String> = stocked.iter().map(table_line).collect();
    let parsed = parse_purchase_text(&text.join("\n"));

    assert_eq!(parsed.len(), stocked.len());
    for (got, want) in parsed.iter().zip(&stocked) {
        assert_eq!(got.name, want.name);
        assert_float_absolute_eq!(got.quantity, want.quantity, 1e-9);
        assert_eq!(got.unit, want.unit);
        assert_eq!(got.category, want.category);
    }
}

#[test]
fn test_table_units_are_not_normalized() {
    let entries = parse_purchase_text("牛排\t2\tlb\t肉类\n面粉\t500\tg\t主食\n牛腩\t1\tKG\t肉类");

    let units: Vec<String> = entries.iter().map(|e| e.unit.to_string()).collect();
    assert_eq!(units, vec!["lb", "g", "KG"]);
}

#[test]
fn test_table_header_and_short_rows_skipped() {
    let text = "食材名称\t数量\t单位\t分类\n排骨\t1\n菠菜\t2\t把";
    let entries = parse_purchase_text(text);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "菠菜");
    assert_eq!(entries[0].unit, Unit::Bunch);
    assert_eq!(entries[0].category, IngredientCategory::Vegetable);
}

#[test]
fn test_order_export_parses_items() {
    let text = "订单 #1042\n\
                weee_牧民人家 奶疙瘩 原味 400 克\n\
                单价: $5.79 |数量: 1\n\
                weee_台湾高丽菜 卷心菜 1 个\n\
                单价: $2.99 |数量：2\n\
                weee_美国 鸡翅 中翅 2lb\n\
                单价: $8.99 |数量: 3";

    let entries = parse_purchase_text(text);
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].name, "奶疙瘩");
    assert_eq!(entries[0].unit, Unit::Gram);
    assert_eq!(entries[0].weight.as_deref(), Some("400 克"));

    assert_eq!(entries[1].name, "卷心菜");
    assert_eq!(entries[1].unit, Unit::Piece);
    assert_float_absolute_eq!(entries[1].quantity, 2.0, 1e-9);
    assert_eq!(entries[1].category, IngredientCategory::Vegetable);

    assert_eq!(entries[2].unit, Unit::Pound);
    assert_float_absolute_eq!(entries[2].quantity, 3.0, 1e-9);
    assert_eq!(entries[2].category, IngredientCategory::Meat);
}

#[test]
fn test_text_without_items_parses_to_nothing() {
    assert!(parse_purchase_text("").is_empty());
    assert!(parse_purchase_text("   \n  ").is_empty());
    assert!(parse_purchase_text("感谢您的订购\n配送时间: 周三").is_empty());
}

#[test]
fn test_categorize_seafood_beats_meat() {
    assert_eq!(categorize("鸡翅"), IngredientCategory::Meat);
    assert_eq!(categorize("三文鱼排骨"), IngredientCategory::Seafood);
    assert_eq!(categorize("咖啡"), IngredientCategory::Other);
}
