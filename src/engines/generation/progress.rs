use super::evolution_engine::ProgressCallback;

/// Prints one line per generation: every fitness, best first, space separated.
pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("Generation {} starting...", generation + 1);
    }

    fn on_generation_complete(&mut self, _generation: usize, ranked_fitness: &[f64]) {
        println!("{}", format_fitness_line(ranked_fitness));
    }
}

/// Collects per-generation rankings instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingProgressCallback {
    pub started: Vec<usize>,
    pub rankings: Vec<Vec<f64>>,
}

impl ProgressCallback for RecordingProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        self.started.push(generation);
    }

    fn on_generation_complete(&mut self, _generation: usize, ranked_fitness: &[f64]) {
        self.rankings.push(ranked_fitness.to_vec());
    }
}

pub fn format_fitness_line(ranked_fitness: &[f64]) -> String {
    ranked_fitness
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitness_line_is_space_separated() {
        assert_eq!(format_fitness_line(&[30.0, 12.5, 0.0]), "30 12.5 0");
        assert_eq!(format_fitness_line(&[]), "");
    }
}
