use tracing::{debug, warn};

use crate::models::{InventoryEntry, Unit};
use crate::receipt::categorize::categorize;
use crate::receipt::patterns::{
    CONTAINER_KEYWORDS, DEFAULT_QUANTITY, ITEM_MARKER, KNOWN_INGREDIENT_RE, QUANTITY_RE, WEIGHT_RE,
    is_descriptor,
};

/// What one product title line yields before its quantity is known.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLine {
    pub name: String,
    pub unit: Unit,
    pub weight: Option<String>,
}

impl ItemLine {
    fn into_entry(self, quantity: f64) -> InventoryEntry {
        let category = categorize(&self.name);
        InventoryEntry {
            name: self.name,
            quantity,
            unit: self.unit,
            category,
            weight: self.weight,
        }
    }
}

/// Parse an order export made of two-line item blocks:
///
/// ```text
/// weee_牧民人家 奶疙瘩 原味 400 克
/// 单价: $5.79 |数量: 1
/// ```
///
/// Lines outside a block are ignored. A block whose second line is missing
/// (or is the start of the next block) gets quantity 1.
pub fn parse_blocks(text: &str) -> Vec<InventoryEntry> {
    let lines: Vec<&str> = text.trim().lines().map(str::trim).collect();
    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(title) = lines[i].strip_prefix(ITEM_MARKER) else {
            i += 1;
            continue;
        };

        let Some(item) = parse_item_line(title) else {
            warn!(line = lines[i], "Skipping item block without a product name");
            i += 1;
            continue;
        };

        let quantity_line = lines
            .get(i + 1)
            .filter(|next| !next.starts_with(ITEM_MARKER));

        let quantity = quantity_line
            .map(|line| parse_quantity_line(line))
            .unwrap_or(DEFAULT_QUANTITY);

        debug!(name = %item.name, quantity, unit = %item.unit, "Parsed item block");
        entries.push(item.into_entry(quantity));

        i += if quantity_line.is_some() { 2 } else { 1 };
    }

    entries
}

/// Pull name, unit and package weight out of a product title.
///
/// Returns `None` when nothing is left to name the item.
pub fn parse_item_line(title: &str) -> Option<ItemLine> {
    let title = title.trim();
    let mut remaining = title.to_string();
    let mut weight = None;
    let mut weight_unit = None;

    if let Some(caps) = WEIGHT_RE.captures(title) {
        let token = caps.get(0)?;
        weight = Some(token.as_str().to_string());
        weight_unit = Some(Unit::normalized(&caps[2]));
        remaining = format!("{} {}", &title[..token.start()], &title[token.end()..])
            .trim()
            .to_string();
    }

    let tokens: Vec<&str> = remaining.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    let name = item_name(&remaining, &tokens);
    let unit = weight_unit
        .or_else(|| container_unit(&remaining))
        .unwrap_or_default();

    Some(ItemLine { name, unit, weight })
}

/// Known ingredient first, then the last token that is not a descriptor,
/// then the last token as printed.
fn item_name(remaining: &str, tokens: &[&str]) -> String {
    if let Some(known) = KNOWN_INGREDIENT_RE.find(remaining) {
        return known.as_str().to_string();
    }

    tokens
        .iter()
        .rev()
        .find(|t| !is_descriptor(t) && t.chars().count() > 1)
        .or_else(|| tokens.last())
        .map(|t| t.to_string())
        .unwrap_or_default()
}

fn container_unit(text: &str) -> Option<Unit> {
    CONTAINER_KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, unit)| unit.clone())
}

/// Read `数量: N` from the line under a title; 1 when absent.
pub fn parse_quantity_line(line: &str) -> f64 {
    QUANTITY_RE
        .captures(line)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .unwrap_or(DEFAULT_QUANTITY)
}
