use anyhow::{bail, Context};
use knapsack_ga::config::ConfigManager;
use knapsack_ga::engines::generation::{ConsoleProgressCallback, EvolutionEngine};
use knapsack_ga::Catalog;
use std::env;
use std::sync::Arc;
use std::time::Instant;

const USAGE: &str = "Usage: knapsack-ga [CONFIG.toml] [--manifest]";

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config_path: Option<String>,
    show_manifest: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<CliArgs> {
    let mut parsed = CliArgs::default();

    for arg in args {
        if arg == "--manifest" {
            parsed.show_manifest = true;
        } else if arg.starts_with('-') {
            bail!("Unknown option '{}'\n{}", arg, USAGE);
        } else if parsed.config_path.is_some() {
            bail!("Unexpected argument '{}'\n{}", arg, USAGE);
        } else {
            parsed.config_path = Some(arg);
        }
    }

    Ok(parsed)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let start_time = Instant::now();

    let args = parse_args(env::args().skip(1))?;

    let manager = match &args.config_path {
        Some(path) => ConfigManager::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => ConfigManager::from_env().context("Invalid configuration")?,
    };
    let config = manager.get();

    if args.show_manifest {
        println!("{}", serde_json::to_string_pretty(&config.manifests())?);
        return Ok(());
    }

    let catalog = Catalog::generate(&config.catalog).context("Failed to generate catalog")?;
    let catalog = Arc::new(catalog);
    println!("{}", catalog);

    let mut engine = EvolutionEngine::new(
        config.evolution.clone(),
        Arc::clone(&catalog),
        config.catalog.capacity,
    )?;
    let outcome = engine.run(&mut ConsoleProgressCallback)?;

    println!("{}", outcome.best.summary(&catalog));

    println!(
        "Total execution time: {}ms",
        start_time.elapsed().as_millis()
    );
    Ok(())
}
