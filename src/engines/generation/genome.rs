//! Genome representation for the knapsack search
//!
//! A genome assigns a quantity in `0..=MAX_QUANTITY` to every catalog item.
//! Genes are indexed by catalog position, so gene `i` is always the quantity of
//! `catalog[i]`:
//!
//! ```text
//! catalog:  [(w=2, v=10), (w=3, v=20), (w=5, v=5)]
//! genome:   [1, 1, 0]        -> weight 5, value 30
//! ```
//!
//! Crossover splits the gene vector at a catalog index and mutation nudges
//! single genes, so both stay trivial slice operations.
//!
//! The fitness is cached by [`Genome::evaluate`] and is not part of the
//! genome's identity.

use super::fitness::FitnessFunction;
use crate::error::{KnapsackError, Result};
use crate::types::Catalog;
use rand::Rng;
use std::fmt;

pub const MAX_QUANTITY: u8 = 3;

#[derive(Debug, Clone)]
pub struct Genome {
    quantities: Vec<u8>,
    capacity: u32,
    fitness: f64,
}

impl PartialEq for Genome {
    fn eq(&self, other: &Self) -> bool {
        self.quantities == other.quantities && self.capacity == other.capacity
    }
}

impl Genome {
    /// Empty knapsack covering `item_count` items.
    pub fn new(capacity: u32, item_count: usize) -> Self {
        Self {
            quantities: vec![0; item_count],
            capacity,
            fitness: 0.0,
        }
    }

    /// Every catalog item gets a quantity drawn uniformly from `0..=MAX_QUANTITY`.
    pub fn random<R: Rng>(catalog: &Catalog, capacity: u32, rng: &mut R) -> Self {
        let quantities = (0..catalog.len())
            .map(|_| rng.gen_range(0..=MAX_QUANTITY))
            .collect();

        Self {
            quantities,
            capacity,
            fitness: 0.0,
        }
    }

    pub fn from_quantities(capacity: u32, quantities: Vec<u8>) -> Result<Self> {
        if let Some(pos) = quantities.iter().position(|&q| q > MAX_QUANTITY) {
            return Err(KnapsackError::Invariant(format!(
                "Quantity {} for item {} exceeds {}",
                quantities[pos], pos, MAX_QUANTITY
            )));
        }

        Ok(Self {
            quantities,
            capacity,
            fitness: 0.0,
        })
    }

    pub fn set_quantity(&mut self, index: usize, quantity: u8) -> Result<()> {
        if quantity > MAX_QUANTITY {
            return Err(KnapsackError::Invariant(format!(
                "Quantity {} exceeds {}",
                quantity, MAX_QUANTITY
            )));
        }
        let len = self.quantities.len();
        let slot = self.quantities.get_mut(index).ok_or_else(|| {
            KnapsackError::Invariant(format!(
                "Item {} is not in a catalog of {} items",
                index, len
            ))
        })?;
        *slot = quantity;
        Ok(())
    }

    pub fn quantity(&self, index: usize) -> Option<u8> {
        self.quantities.get(index).copied()
    }

    pub fn quantities(&self) -> &[u8] {
        &self.quantities
    }

    pub(crate) fn quantities_mut(&mut self) -> &mut [u8] {
        &mut self.quantities
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn total_weight(&self, catalog: &Catalog) -> u64 {
        self.quantities
            .iter()
            .zip(catalog.iter())
            .map(|(&q, item)| q as u64 * item.weight as u64)
            .sum()
    }

    pub fn total_value(&self, catalog: &Catalog) -> u64 {
        self.quantities
            .iter()
            .zip(catalog.iter())
            .map(|(&q, item)| q as u64 * item.value as u64)
            .sum()
    }

    /// Recompute and cache the fitness.
    pub fn evaluate(&mut self, catalog: &Catalog, fitness_fn: &dyn FitnessFunction) -> f64 {
        self.fitness = fitness_fn.score(
            self.total_weight(catalog),
            self.total_value(catalog),
            self.capacity,
        );
        self.fitness
    }

    /// Fitness from the latest [`Genome::evaluate`] call.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Check completeness against the catalog and the quantity bound.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        if self.quantities.len() != catalog.len() {
            return Err(KnapsackError::Invariant(format!(
                "Genome covers {} items, catalog has {}",
                self.quantities.len(),
                catalog.len()
            )));
        }
        if let Some(pos) = self.quantities.iter().position(|&q| q > MAX_QUANTITY) {
            return Err(KnapsackError::Invariant(format!(
                "Quantity {} for item {} exceeds {}",
                self.quantities[pos], pos, MAX_QUANTITY
            )));
        }
        Ok(())
    }

    pub fn summary<'a>(&'a self, catalog: &'a Catalog) -> GenomeSummary<'a> {
        GenomeSummary {
            genome: self,
            catalog,
        }
    }
}

/// Multi-line report of a genome against its catalog.
pub struct GenomeSummary<'a> {
    genome: &'a Genome,
    catalog: &'a Catalog,
}

impl fmt::Display for GenomeSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (item, quantity) in self.catalog.iter().zip(self.genome.quantities()) {
            writeln!(f, "{}\tAmount: {}", item, quantity)?;
        }
        writeln!(f, "Total weight: {}", self.genome.total_weight(self.catalog))?;
        writeln!(f, "Total value: {}", self.genome.total_value(self.catalog))?;
        write!(f, "Fitness: {}", self.genome.fitness())
    }
}
