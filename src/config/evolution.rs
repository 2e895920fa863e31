use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::KnapsackError;
use serde::{Deserialize, Serialize};

/// Parents for one offspring are two distinct elites.
pub const MIN_ELITISM_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub elitism_count: usize,
    pub total_generations: usize,
    pub mutation_rate: f64,
    #[serde(with = "super::seed")]
    pub evolution_seed: Option<u64>,
    /// Carry elites into the next generation without mutating them.
    pub protect_elites: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            elitism_count: 5,
            total_generations: 100,
            mutation_rate: 0.05,
            evolution_seed: None,
            protect_elites: false,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), KnapsackError> {
        if self.elitism_count < MIN_ELITISM_COUNT {
            return Err(KnapsackError::Configuration(format!(
                "Elitism count must be at least {}",
                MIN_ELITISM_COUNT
            )));
        }
        if self.population_size < self.elitism_count {
            return Err(KnapsackError::Configuration(format!(
                "Population size ({}) must not be smaller than elitism count ({})",
                self.population_size, self.elitism_count
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(KnapsackError::Configuration(
                "Mutation rate must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: "Evolution".to_string(),
            fields: vec![
                FieldManifest::new(
                    "population_size",
                    "integer",
                    serde_json::json!(defaults.population_size),
                    "Number of genomes in every generation",
                )
                .with_min(MIN_ELITISM_COUNT as f64),
                FieldManifest::new(
                    "elitism_count",
                    "integer",
                    serde_json::json!(defaults.elitism_count),
                    "Top genomes carried over and used as parents",
                )
                .with_min(MIN_ELITISM_COUNT as f64),
                FieldManifest::new(
                    "total_generations",
                    "integer",
                    serde_json::json!(defaults.total_generations),
                    "Number of generations to evolve",
                )
                .with_min(0.0),
                FieldManifest::new(
                    "mutation_rate",
                    "float",
                    serde_json::json!(defaults.mutation_rate),
                    "Per-gene probability of a +/-1 quantity change",
                )
                .with_min(0.0)
                .with_max(1.0),
                FieldManifest::new(
                    "evolution_seed",
                    "integer?",
                    serde_json::json!(defaults.evolution_seed),
                    "Seed for the evolutionary search; \"random\" draws from entropy",
                ),
                FieldManifest::new(
                    "protect_elites",
                    "bool",
                    serde_json::json!(defaults.protect_elites),
                    "Skip mutation for elites copied into the next generation",
                ),
            ],
        }
    }
}
