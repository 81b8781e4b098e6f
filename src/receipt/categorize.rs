use crate::models::IngredientCategory;

/// Keyword table walked top to bottom; the first category with a keyword
/// contained in the name wins.
pub const CATEGORY_KEYWORDS: &[(IngredientCategory, &[&str])] = &[
    (
        IngredientCategory::Meat,
        &[
            "肉", "排骨", "鸡", "鸭", "鹅", "牛", "羊", "猪", "鱼", "虾", "蟹", "贝", "翅", "腿",
            "胸", "咸肉",
        ],
    ),
    (
        IngredientCategory::Seafood,
        &["鱼", "虾", "蟹", "贝", "花甲", "扇贝", "三文鱼", "带鱼", "鱿鱼", "章鱼"],
    ),
    (
        IngredientCategory::Vegetable,
        &[
            "菜", "白菜", "菠菜", "青菜", "韭菜", "芹菜", "莴笋", "萝卜", "胡萝卜", "土豆", "地瓜",
            "红薯", "香菇", "蘑菇", "葱", "蒜", "姜", "辣椒", "茄子", "黄瓜", "西红柿", "西兰花",
            "花菜", "包菜", "卷心菜", "高丽菜", "空心菜", "毛豆", "青豆", "豆芽", "丝瓜", "冬瓜",
            "南瓜", "芦笋", "乌笋", "扁尖笋",
        ],
    ),
    (
        IngredientCategory::Legume,
        &["豆腐", "豆干", "香干", "百叶", "面筋", "腐竹", "豆皮", "豆泡", "油豆腐"],
    ),
    (IngredientCategory::Egg, &["蛋", "鸡蛋", "鸭蛋", "鹌鹑蛋"]),
    (
        IngredientCategory::Staple,
        &["米", "面", "粉", "饺子", "包子", "馒头", "饼", "面包"],
    ),
    (
        IngredientCategory::Seasoning,
        &[
            "油", "盐", "酱", "醋", "糖", "淀粉", "蚝油", "生抽", "老抽", "料酒", "调料", "酸菜",
        ],
    ),
];

/// Names containing any of these are never filed under meat.
pub const SEAFOOD_OVERRIDE_KEYWORDS: &[&str] = &["鱼", "虾", "蟹", "贝"];

/// Map a free-text ingredient name to its category.
///
/// Seafood wins over meat when a name carries keywords of both. Names that
/// hit no keyword are `Other`.
pub fn categorize(name: &str) -> IngredientCategory {
    let has_seafood = SEAFOOD_OVERRIDE_KEYWORDS.iter().any(|k| name.contains(k));

    CATEGORY_KEYWORDS
        .iter()
        .filter(|(category, _)| !(*category == IngredientCategory::Meat && has_seafood))
        .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(IngredientCategory::Other)
}
