use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::KnapsackError;
use crate::types::MIN_CATALOG_SIZE;
use serde::{Deserialize, Serialize};

/// Problem instance: how the item catalog is generated and the knapsack size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub item_count: usize,
    pub max_weight: u32,
    pub max_value: u32,
    pub capacity: u32,
    #[serde(with = "super::seed")]
    pub catalog_seed: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            item_count: 10,
            max_weight: 10,
            max_value: 100,
            capacity: 50,
            catalog_seed: Some(2022),
        }
    }
}

impl ConfigSection for CatalogConfig {
    fn section_name() -> &'static str {
        "catalog"
    }

    fn validate(&self) -> Result<(), KnapsackError> {
        if self.item_count < MIN_CATALOG_SIZE {
            return Err(KnapsackError::Configuration(format!(
                "Item count must be at least {}",
                MIN_CATALOG_SIZE
            )));
        }
        if self.max_weight == 0 || self.max_value == 0 {
            return Err(KnapsackError::Configuration(
                "Max weight and max value must be positive".to_string(),
            ));
        }
        if self.capacity == 0 {
            return Err(KnapsackError::Configuration(
                "Capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: "Catalog".to_string(),
            fields: vec![
                FieldManifest::new(
                    "item_count",
                    "integer",
                    serde_json::json!(defaults.item_count),
                    "Number of items in the generated catalog",
                )
                .with_min(MIN_CATALOG_SIZE as f64),
                FieldManifest::new(
                    "max_weight",
                    "integer",
                    serde_json::json!(defaults.max_weight),
                    "Upper bound (inclusive) of a generated item's weight",
                )
                .with_min(1.0),
                FieldManifest::new(
                    "max_value",
                    "integer",
                    serde_json::json!(defaults.max_value),
                    "Upper bound (inclusive) of a generated item's value",
                )
                .with_min(1.0),
                FieldManifest::new(
                    "capacity",
                    "integer",
                    serde_json::json!(defaults.capacity),
                    "Knapsack capacity shared by every genome",
                )
                .with_min(1.0),
                FieldManifest::new(
                    "catalog_seed",
                    "integer?",
                    serde_json::json!(defaults.catalog_seed),
                    "Seed for catalog generation; \"random\" draws from entropy",
                ),
            ],
        }
    }
}
