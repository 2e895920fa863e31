use knapsack_ga::config::CatalogConfig;
use knapsack_ga::engines::generation::{
    CapacityPenaltyFitness, FitnessFunction, Genome, MAX_QUANTITY,
};
use knapsack_ga::{Catalog, Item, KnapsackError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn small_catalog() -> Catalog {
    Catalog::new(vec![Item::new(2, 10), Item::new(3, 20), Item::new(5, 5)]).unwrap()
}

#[test]
fn test_fitness_under_capacity_is_total_value() {
    let catalog = small_catalog();
    let mut genome = Genome::from_quantities(6, vec![1, 1, 0]).unwrap();

    assert_eq!(genome.total_weight(&catalog), 5);
    assert_eq!(genome.evaluate(&catalog, &CapacityPenaltyFitness), 30.0);
    assert_eq!(genome.fitness(), 30.0);
}

#[test]
fn test_fitness_over_capacity_is_penalty() {
    let catalog = small_catalog();
    let mut genome = Genome::from_quantities(6, vec![2, 1, 1]).unwrap();

    // 4 + 3 + 5 = 12 >= 6 -> 6 * 100 / 12
    assert_eq!(genome.total_weight(&catalog), 12);
    assert_eq!(genome.total_value(&catalog), 45);
    assert_eq!(genome.evaluate(&catalog, &CapacityPenaltyFitness), 50.0);
}

#[test]
fn test_fitness_boundary_at_capacity() {
    let catalog = small_catalog();

    // weight 5: one below capacity 6 scores raw value
    let mut below = Genome::from_quantities(6, vec![1, 1, 0]).unwrap();
    assert_eq!(below.evaluate(&catalog, &CapacityPenaltyFitness), 30.0);

    // weight 5 with capacity 5: exactly full uses the penalty
    let mut full = Genome::from_quantities(5, vec![1, 1, 0]).unwrap();
    assert_eq!(full.evaluate(&catalog, &CapacityPenaltyFitness), 100.0);
}

#[test]
fn test_evaluate_recomputes_after_change() {
    let catalog = small_catalog();
    let mut genome = Genome::from_quantities(6, vec![1, 1, 0]).unwrap();
    genome.evaluate(&catalog, &CapacityPenaltyFitness);

    genome.set_quantity(1, 0).unwrap();
    // Cache is stale until re-evaluated
    assert_eq!(genome.fitness(), 30.0);
    assert_eq!(genome.evaluate(&catalog, &CapacityPenaltyFitness), 10.0);
}

#[test]
fn test_custom_fitness_function() {
    struct ValueOnly;
    impl FitnessFunction for ValueOnly {
        fn score(&self, _total_weight: u64, total_value: u64, _capacity: u32) -> f64 {
            total_value as f64
        }
    }

    let catalog = small_catalog();
    let mut genome = Genome::from_quantities(6, vec![2, 1, 1]).unwrap();
    assert_eq!(genome.evaluate(&catalog, &ValueOnly), 45.0);
}

#[test]
fn test_set_quantity_rejects_out_of_range() {
    let mut genome = Genome::new(6, 3);

    assert!(matches!(
        genome.set_quantity(0, MAX_QUANTITY + 1),
        Err(KnapsackError::Invariant(_))
    ));
    assert!(matches!(
        genome.set_quantity(3, 1),
        Err(KnapsackError::Invariant(_))
    ));

    genome.set_quantity(2, 3).unwrap();
    assert_eq!(genome.quantities(), &[0, 0, 3]);
}

#[test]
fn test_from_quantities_rejects_bound_violation() {
    assert!(Genome::from_quantities(6, vec![0, 4, 1]).is_err());
}

#[test]
fn test_random_genome_is_complete_and_bounded() {
    let catalog = small_catalog();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let genome = Genome::random(&catalog, 6, &mut rng);
        assert_eq!(genome.len(), catalog.len());
        assert!(genome.quantities().iter().all(|&q| q <= MAX_QUANTITY));
        genome.validate(&catalog).unwrap();
    }
}

#[test]
fn test_validate_detects_incomplete_genome() {
    let catalog = small_catalog();
    let genome = Genome::new(6, 2);
    assert!(matches!(
        genome.validate(&catalog),
        Err(KnapsackError::Invariant(_))
    ));
}

#[test]
fn test_equality_ignores_fitness() {
    let catalog = small_catalog();
    let mut a = Genome::from_quantities(6, vec![1, 1, 0]).unwrap();
    let b = a.clone();
    a.evaluate(&catalog, &CapacityPenaltyFitness);
    assert_eq!(a, b);
}

#[test]
fn test_summary_lists_items_and_totals() {
    let catalog = small_catalog();
    let mut genome = Genome::from_quantities(6, vec![1, 1, 0]).unwrap();
    genome.evaluate(&catalog, &CapacityPenaltyFitness);

    let text = genome.summary(&catalog).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Item(weight=2, value=10)\tAmount: 1");
    assert_eq!(lines[3], "Total weight: 5");
    assert_eq!(lines[4], "Total value: 30");
    assert_eq!(lines[5], "Fitness: 30");
}

#[test]
fn test_catalog_rejects_fewer_than_three_items() {
    let result = Catalog::new(vec![Item::new(1, 1), Item::new(2, 2)]);
    assert!(matches!(result, Err(KnapsackError::Configuration(_))));
}

#[test]
fn test_seeded_catalog_is_reproducible() {
    let config = CatalogConfig::default();
    let first = Catalog::generate(&config).unwrap();
    let second = Catalog::generate(&config).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), config.item_count);
    for item in first.iter() {
        assert!((1..=config.max_weight).contains(&item.weight));
        assert!((1..=config.max_value).contains(&item.value));
    }
}
