use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DISHES_FILE: &str = "dishes.json";
pub const INVENTORY_FILE: &str = "inventory.json";
pub const HISTORY_FILE: &str = "past_meals.csv";
pub const PLANS_FILE: &str = "meal_plans.json";

/// Locations of the household's data files.
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dishes(&self) -> PathBuf {
        self.root.join(DISHES_FILE)
    }

    pub fn inventory(&self) -> PathBuf {
        self.root.join(INVENTORY_FILE)
    }

    pub fn history(&self) -> PathBuf {
        self.root.join(HISTORY_FILE)
    }

    pub fn plans(&self) -> PathBuf {
        self.root.join(PLANS_FILE)
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_root() {
        let paths = DataPaths::new("/tmp/kitchen");
        assert_eq!(paths.dishes(), PathBuf::from("/tmp/kitchen/dishes.json"));
        assert_eq!(paths.history(), PathBuf::from("/tmp/kitchen/past_meals.csv"));
        assert_eq!(DataPaths::default().root(), Path::new("data"));
    }
}
