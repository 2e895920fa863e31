use crate::config::CatalogConfig;
use crate::error::{KnapsackError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Smallest catalog a single-point crossover can split with both parents contributing.
pub const MIN_CATALOG_SIZE: usize = 3;

/// An item that can be packed. Identity is its position in the [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub weight: u32,
    pub value: u32,
}

impl Item {
    pub fn new(weight: u32, value: u32) -> Self {
        Self { weight, value }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item(weight={}, value={})", self.weight, self.value)
    }
}

/// Ordered, read-only list of items for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self> {
        if items.len() < MIN_CATALOG_SIZE {
            return Err(KnapsackError::Configuration(format!(
                "Catalog needs at least {} items, got {}",
                MIN_CATALOG_SIZE,
                items.len()
            )));
        }
        if let Some(pos) = items.iter().position(|i| i.weight == 0 || i.value == 0) {
            return Err(KnapsackError::Configuration(format!(
                "Item {} must have positive weight and value",
                pos
            )));
        }
        Ok(Self { items })
    }

    /// Generate a catalog from config. Uses `catalog_seed` when set so the
    /// problem instance is reproducible across runs.
    pub fn generate(config: &CatalogConfig) -> Result<Self> {
        let mut rng = match config.catalog_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::generate_with_rng(config, &mut rng)
    }

    pub fn generate_with_rng<R: Rng>(config: &CatalogConfig, rng: &mut R) -> Result<Self> {
        if config.max_weight == 0 || config.max_value == 0 {
            return Err(KnapsackError::Configuration(
                "Item weight and value bounds must be positive".to_string(),
            ));
        }

        let items = (0..config.item_count)
            .map(|_| {
                Item::new(
                    rng.gen_range(1..=config.max_weight),
                    rng.gen_range(1..=config.max_value),
                )
            })
            .collect();

        let catalog = Self::new(items)?;
        log::info!(
            "Generated catalog of {} items (seed: {:?})",
            catalog.len(),
            config.catalog_seed
        );
        Ok(catalog)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl Index<usize> for Catalog {
    type Output = Item;

    fn index(&self, index: usize) -> &Item {
        &self.items[index]
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
