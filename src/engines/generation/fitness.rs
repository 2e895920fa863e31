/// Scores a packed knapsack from its totals.
///
/// Implementations must be pure: the same totals always give the same score.
pub trait FitnessFunction: Send + Sync {
    fn score(&self, total_weight: u64, total_value: u64, capacity: u32) -> f64;
}

/// Two-scale fitness.
///
/// Under capacity the score is the raw total value. At or over capacity it is
/// `capacity * 100 / total_weight`, a penalty on a different scale, so the
/// objective jumps at `total_weight == capacity`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapacityPenaltyFitness;

impl FitnessFunction for CapacityPenaltyFitness {
    fn score(&self, total_weight: u64, total_value: u64, capacity: u32) -> f64 {
        if total_weight < capacity as u64 {
            total_value as f64
        } else {
            capacity as f64 * 100.0 / total_weight as f64
        }
    }
}
