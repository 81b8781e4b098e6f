//! Turning pasted grocery purchases into inventory entries.
//!
//! Two inputs are understood: a table copied from a spreadsheet (tab or
//! wide-space separated) and the plain-text order export of an online
//! grocer, where every item is a `weee_` title line followed by a price and
//! quantity line.

pub mod blocks;
pub mod categorize;
pub mod patterns;
pub mod table;

use tracing::info;

use crate::models::InventoryEntry;

pub use blocks::{ItemLine, parse_blocks, parse_item_line, parse_quantity_line};
pub use categorize::categorize;
pub use table::{is_table, parse_table};

/// Parse purchase text in whichever format it is in.
///
/// Never fails: unreadable numbers fall back to defaults and unusable lines
/// are skipped.
pub fn parse_purchase_text(text: &str) -> Vec<InventoryEntry> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let (format, entries) = if is_table(text) {
        ("table", parse_table(text))
    } else {
        ("order", parse_blocks(text))
    };

    info!(format, count = entries.len(), "Parsed purchase text");
    entries
}
