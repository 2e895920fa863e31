use crate::config::{ConfigSection, EvolutionConfig};
use crate::engines::generation::{
    fitness::{CapacityPenaltyFitness, FitnessFunction},
    genome::Genome,
    operators::{crossover, mutate, pick_parents, select_elites},
};
use crate::error::KnapsackError;
use crate::types::{Catalog, MIN_CATALOG_SIZE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cmp::Ordering;
use std::sync::Arc;

pub type Population = Vec<Genome>;

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    /// `ranked_fitness` holds every genome's fitness, best first.
    fn on_generation_complete(&mut self, generation: usize, ranked_fitness: &[f64]);
}

/// Result of a finished run.
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    pub best: Genome,
    pub final_population: Population,
    /// Best fitness after each generation.
    pub best_fitness_history: Vec<f64>,
}

pub struct EvolutionEngine {
    config: EvolutionConfig,
    catalog: Arc<Catalog>,
    capacity: u32,
    fitness_fn: Box<dyn FitnessFunction>,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(
        config: EvolutionConfig,
        catalog: Arc<Catalog>,
        capacity: u32,
    ) -> Result<Self, KnapsackError> {
        Self::with_fitness(config, catalog, capacity, Box::new(CapacityPenaltyFitness))
    }

    pub fn with_fitness(
        config: EvolutionConfig,
        catalog: Arc<Catalog>,
        capacity: u32,
        fitness_fn: Box<dyn FitnessFunction>,
    ) -> Result<Self, KnapsackError> {
        config.validate()?;
        if catalog.len() < MIN_CATALOG_SIZE {
            return Err(KnapsackError::Configuration(format!(
                "Catalog needs at least {} items, got {}",
                MIN_CATALOG_SIZE,
                catalog.len()
            )));
        }
        if capacity == 0 {
            return Err(KnapsackError::Configuration(
                "Capacity must be positive".to_string(),
            ));
        }

        let rng = match config.evolution_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            catalog,
            capacity,
            fitness_fn,
            rng,
        })
    }

    /// Run the evolution process
    pub fn run<C: ProgressCallback>(
        &mut self,
        callback: &mut C,
    ) -> Result<EvolutionOutcome, KnapsackError> {
        log::info!(
            "Evolving {} genomes over {} generations ({} items, capacity {})",
            self.config.population_size,
            self.config.total_generations,
            self.catalog.len(),
            self.capacity
        );

        let mut population = self.initialize_population();
        let mut best_fitness_history = Vec::with_capacity(self.config.total_generations);

        for generation in 0..self.config.total_generations {
            callback.on_generation_start(generation);

            population = self.next_generation(population)?;

            let ranked = ranked_fitness(&population);
            let best_fitness = ranked.first().copied().unwrap_or(0.0);
            best_fitness_history.push(best_fitness);
            log::debug!("Generation {}: best fitness {}", generation + 1, best_fitness);

            callback.on_generation_complete(generation, &ranked);
        }

        let best = population
            .iter()
            .max_by(|a, b| a.fitness().partial_cmp(&b.fitness()).unwrap_or(Ordering::Equal))
            .cloned()
            .ok_or_else(|| KnapsackError::Invariant("Final population is empty".to_string()))?;

        log::info!("Evolution finished, best fitness {}", best.fitness());

        Ok(EvolutionOutcome {
            best,
            final_population: population,
            best_fitness_history,
        })
    }

    /// Random, evaluated starting population.
    pub fn initialize_population(&mut self) -> Population {
        let mut population: Population = (0..self.config.population_size)
            .map(|_| Genome::random(&self.catalog, self.capacity, &mut self.rng))
            .collect();
        self.evaluate_population(&mut population);
        population
    }

    /// One evolutionary step: elites carried over, the rest bred from elite
    /// pairs, everything mutated (elites too unless `protect_elites`), then
    /// evaluated and checked.
    pub fn next_generation(
        &mut self,
        mut population: Population,
    ) -> Result<Population, KnapsackError> {
        self.evaluate_population(&mut population);

        let mut elites = select_elites(&population, self.config.elitism_count)?;
        log::debug!(
            "Elite fitness: {:?}",
            elites.iter().map(|g| g.fitness()).collect::<Vec<_>>()
        );

        let mut next_generation: Population = Vec::with_capacity(self.config.population_size);
        next_generation.extend(elites.iter().map(|&g| g.clone()));

        while next_generation.len() < self.config.population_size {
            let (parent1, parent2) = pick_parents(&mut elites, &mut self.rng)?;
            next_generation.push(crossover(parent1, parent2, &mut self.rng)?);
        }

        let skip = if self.config.protect_elites {
            self.config.elitism_count
        } else {
            0
        };
        for genome in next_generation.iter_mut().skip(skip) {
            mutate(genome, self.config.mutation_rate, &mut self.rng)?;
        }

        self.evaluate_population(&mut next_generation);
        self.check_population(&next_generation)?;
        Ok(next_generation)
    }

    fn evaluate_population(&self, population: &mut [Genome]) {
        for genome in population.iter_mut() {
            genome.evaluate(&self.catalog, self.fitness_fn.as_ref());
        }
    }

    fn check_population(&self, population: &[Genome]) -> Result<(), KnapsackError> {
        if population.len() != self.config.population_size {
            return Err(KnapsackError::Invariant(format!(
                "Population size drifted to {}, expected {}",
                population.len(),
                self.config.population_size
            )));
        }
        for genome in population {
            genome.validate(&self.catalog)?;
        }
        Ok(())
    }
}

/// Every genome's cached fitness, descending.
pub fn ranked_fitness(population: &[Genome]) -> Vec<f64> {
    let mut fitness: Vec<f64> = population.iter().map(|g| g.fitness()).collect();
    fitness.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    fitness
}
