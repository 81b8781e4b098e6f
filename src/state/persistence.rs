use std::fs::{self, OpenOptions};
use std::path::Path;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::models::MealRecord;

/// Load a JSON array from disk. A missing or blank file is an empty list.
pub fn load_json_list<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(&content)?)
}

/// Write a JSON array to disk, creating parent directories as needed.
pub fn save_json_list<T: Serialize, P: AsRef<Path>>(path: P, items: &[T]) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}

/// CSV row as written, before the date is checked.
#[derive(Debug, Deserialize)]
struct RawMealRow {
    #[serde(default)]
    date: String,
    #[serde(default)]
    dish_name: String,
}

/// Load the cooking log.
///
/// Rows with an unreadable date, no dish name or a stray extra field are
/// tolerated: the bad ones are skipped and the rest still load.
pub fn load_meal_records<P: AsRef<Path>>(path: P) -> Result<Vec<MealRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let mut records = Vec::new();

    for row in reader.deserialize::<RawMealRow>() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable meal record");
                continue;
            }
        };
        let dish_name = row.dish_name.trim();
        if dish_name.is_empty() {
            warn!(date = %row.date, "Skipping meal record without a dish name");
            continue;
        }
        match NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d") {
            Ok(date) => records.push(MealRecord::new(date, dish_name)),
            Err(e) => warn!(date = %row.date, dish_name, error = %e, "Skipping meal record"),
        }
    }

    Ok(records)
}

/// Append one row to the cooking log, writing the header for a new file.
pub fn append_meal_record<P: AsRef<Path>>(path: P, record: &MealRecord) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let is_new = !path.exists() || fs::metadata(path)?.len() == 0;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(is_new)
        .from_writer(file);
    writer.serialize(record)?;
    writer.flush()?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
