use crate::config::evolution::MIN_ELITISM_COUNT;
use crate::engines::generation::genome::{Genome, MAX_QUANTITY};
use crate::error::{KnapsackError, Result};
use crate::types::MIN_CATALOG_SIZE;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

/// Elitism: the `count` fittest genomes, best first.
///
/// Ranks by the cached fitness, so the population must be evaluated first.
/// The sort is stable, so ties keep population order.
pub fn select_elites(population: &[Genome], count: usize) -> Result<Vec<&Genome>> {
    if count < MIN_ELITISM_COUNT {
        return Err(KnapsackError::Configuration(format!(
            "Elitism count must be at least {}, got {}",
            MIN_ELITISM_COUNT, count
        )));
    }
    if count > population.len() {
        return Err(KnapsackError::Configuration(format!(
            "Cannot select {} elites from a population of {}",
            count,
            population.len()
        )));
    }

    let mut ranked: Vec<&Genome> = population.iter().collect();
    ranked.sort_by(|a, b| {
        b.fitness()
            .partial_cmp(&a.fitness())
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(count);
    Ok(ranked)
}

/// Shuffle the elites and take the first two as parents.
pub fn pick_parents<'a, R: Rng>(
    elites: &mut [&'a Genome],
    rng: &mut R,
) -> Result<(&'a Genome, &'a Genome)> {
    if elites.len() < MIN_ELITISM_COUNT {
        return Err(KnapsackError::Configuration(format!(
            "Need at least {} elites to pick parents, got {}",
            MIN_ELITISM_COUNT,
            elites.len()
        )));
    }

    elites.shuffle(rng);
    Ok((elites[0], elites[1]))
}

/// Single-point crossover at a random point in `1..=len-2`.
pub fn crossover<R: Rng>(parent1: &Genome, parent2: &Genome, rng: &mut R) -> Result<Genome> {
    let len = parent1.len();
    if len < MIN_CATALOG_SIZE {
        return Err(KnapsackError::Configuration(format!(
            "Crossover needs at least {} genes, got {}",
            MIN_CATALOG_SIZE, len
        )));
    }

    let point = rng.gen_range(1..=len - 2);
    log::trace!("Crossover point {} of {}", point, len);
    crossover_at(parent1, parent2, point)
}

/// Child takes `parent1` genes for `[0, point)` and `parent2` genes for `[point, len)`.
pub fn crossover_at(parent1: &Genome, parent2: &Genome, point: usize) -> Result<Genome> {
    let len = parent1.len();
    if parent2.len() != len {
        return Err(KnapsackError::Invariant(format!(
            "Parents differ in length: {} vs {}",
            len,
            parent2.len()
        )));
    }
    if point == 0 || point >= len {
        return Err(KnapsackError::Configuration(format!(
            "Crossover point {} outside 1..{}",
            point, len
        )));
    }

    let mut quantities = Vec::with_capacity(len);
    quantities.extend_from_slice(&parent1.quantities()[..point]);
    quantities.extend_from_slice(&parent2.quantities()[point..]);

    Genome::from_quantities(parent1.capacity(), quantities)
}

/// Mutation: each gene moves by +1 or -1 with probability `mutation_rate`,
/// clamped to `0..=MAX_QUANTITY`.
pub fn mutate<'g, R: Rng>(
    genome: &'g mut Genome,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<&'g mut Genome> {
    if !(0.0..=1.0).contains(&mutation_rate) {
        return Err(KnapsackError::Configuration(format!(
            "Mutation rate {} outside [0, 1]",
            mutation_rate
        )));
    }

    for gene in genome.quantities_mut() {
        if rng.gen_bool(mutation_rate) {
            *gene = if rng.gen_bool(0.5) {
                (*gene + 1).min(MAX_QUANTITY)
            } else {
                gene.saturating_sub(1)
            };
        }
    }
    Ok(genome)
}
