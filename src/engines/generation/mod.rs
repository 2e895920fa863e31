pub mod evolution_engine;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod progress;

pub use evolution_engine::{EvolutionEngine, EvolutionOutcome, Population, ProgressCallback};
pub use fitness::{CapacityPenaltyFitness, FitnessFunction};
pub use genome::{Genome, GenomeSummary, MAX_QUANTITY};
pub use progress::{ConsoleProgressCallback, RecordingProgressCallback};
