use std::sync::LazyLock;

use regex::Regex;

use crate::models::Unit;

/// Prefix that opens an item block in an exported order.
pub const ITEM_MARKER: &str = "weee_";

/// Tokens that mark the first line of a pasted table as a header.
pub const HEADER_TOKENS: [&str; 3] = ["Ingredient Name", "Item", "食材名称"];

/// Quantity used whenever a number is missing or unreadable.
pub const DEFAULT_QUANTITY: f64 = 1.0;

/// Container or unit keywords, in priority order.
pub const CONTAINER_KEYWORDS: &[(&str, Unit)] = &[
    ("个", Unit::Piece),
    ("把", Unit::Bunch),
    ("包", Unit::Pack),
    ("袋", Unit::Pack),
    ("盒", Unit::Box),
    ("瓶", Unit::Bottle),
    ("磅", Unit::Pound),
    ("盎司", Unit::Ounce),
    ("克", Unit::Gram),
    ("斤", Unit::Jin),
];

/// Brand, flavor and origin words that are never the item itself.
pub const DESCRIPTOR_STOPLIST: [&str; 7] = ["原味", "日式", "台湾", "新鲜", "嫩", "大", "小"];

/// `<number><weight unit>`, e.g. `400 克` or `2lb`.
pub static WEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(克|斤|两|磅|盎司|(?i:kg|g|oz|lb))")
        .expect("weight pattern should be valid")
});

/// `数量: 2` on the line following an item.
pub static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"数量\s*[:：]\s*(\d+(?:\.\d+)?)").expect("quantity pattern should be valid")
});

/// Ingredient names worth pulling out of a product title directly.
pub static KNOWN_INGREDIENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "(排骨|鸡胸肉|鸡翅|牛肉|咸肉|青江菜|菠菜|莴笋|白菜|香菇|毛豆|大白菜|青葱|韭菜|空心菜|面筋|百叶|蚝油|酸菜|淀粉|地瓜粉|红薯淀粉)",
    )
    .expect("ingredient pattern should be valid")
});

/// Column separator for pasted tables: tab runs or two or more spaces.
pub static FIELD_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t+|\s{2,}").expect("field pattern should be valid"));

/// Whether a product-title token is a descriptor rather than a name.
pub fn is_descriptor(token: &str) -> bool {
    DESCRIPTOR_STOPLIST.contains(&token) || token.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_pattern() {
        let caps = WEIGHT_RE.captures("牧民人家 奶疙瘩 原味 400 克").unwrap();
        assert_eq!(&caps[0], "400 克");
        assert_eq!(&caps[2], "克");

        let caps = WEIGHT_RE.captures("Ribeye 1.5LB").unwrap();
        assert_eq!(&caps[1], "1.5");
        assert_eq!(&caps[2], "LB");

        assert!(WEIGHT_RE.captures("卷心菜 1 个").is_none());
    }

    #[test]
    fn test_quantity_pattern_accepts_fullwidth_colon() {
        assert_eq!(&QUANTITY_RE.captures("单价: $5.79 |数量: 2").unwrap()[1], "2");
        assert_eq!(&QUANTITY_RE.captures("数量：1.5").unwrap()[1], "1.5");
    }

    #[test]
    fn test_descriptors() {
        assert!(is_descriptor("原味"));
        assert!(is_descriptor("12"));
        assert!(!is_descriptor("奶疙瘩"));
    }
}
