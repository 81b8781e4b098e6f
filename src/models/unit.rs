use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit a stocked item is counted in.
///
/// Receipts carry arbitrary unit text, so anything unrecognized is kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    Piece,
    Bunch,
    #[default]
    Pack,
    Box,
    Bottle,
    Pound,
    Ounce,
    Gram,
    Kilogram,
    Jin,
    Liang,
    Other(String),
}

impl Unit {
    pub fn label(&self) -> &str {
        match self {
            Unit::Piece => "个",
            Unit::Bunch => "把",
            Unit::Pack => "包",
            Unit::Box => "盒",
            Unit::Bottle => "瓶",
            Unit::Pound => "磅",
            Unit::Ounce => "盎司",
            Unit::Gram => "克",
            Unit::Kilogram => "千克",
            Unit::Jin => "斤",
            Unit::Liang => "两",
            Unit::Other(text) => text,
        }
    }

    /// Map a unit label to its unit. Any other text, Latin abbreviations
    /// included, is kept verbatim.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        match label {
            "个" => Unit::Piece,
            "把" => Unit::Bunch,
            "包" => Unit::Pack,
            "盒" => Unit::Box,
            "瓶" => Unit::Bottle,
            "磅" => Unit::Pound,
            "盎司" => Unit::Ounce,
            "克" => Unit::Gram,
            "千克" => Unit::Kilogram,
            "斤" => Unit::Jin,
            "两" => Unit::Liang,
            _ => Unit::Other(label.to_string()),
        }
    }

    /// Like [`Unit::from_label`], but Latin weight abbreviations
    /// (`g`, `kg`, `oz`, `lb`, any case) map to their canonical units.
    pub fn normalized(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "lb" => Unit::Pound,
            "oz" => Unit::Ounce,
            "g" => Unit::Gram,
            "kg" => Unit::Kilogram,
            _ => Unit::from_label(label),
        }
    }

    /// Whether this unit measures weight rather than a container or count.
    pub fn is_weight(&self) -> bool {
        matches!(
            self,
            Unit::Pound | Unit::Ounce | Unit::Gram | Unit::Kilogram | Unit::Jin | Unit::Liang
        )
    }
}

impl From<String> for Unit {
    fn from(value: String) -> Self {
        Unit::from_label(&value)
    }
}

impl From<Unit> for String {
    fn from(value: Unit) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
