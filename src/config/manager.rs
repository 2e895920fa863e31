use super::{
    catalog::CatalogConfig,
    evolution::EvolutionConfig,
    traits::{ConfigManifest, ConfigSection},
};
use crate::error::KnapsackError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `KNAPSACK_EVOLUTION__MUTATION_RATE=0.1`.
pub const ENV_PREFIX: &str = "KNAPSACK";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub evolution: EvolutionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), KnapsackError> {
        self.catalog.validate()?;
        self.evolution.validate()?;
        Ok(())
    }

    pub fn manifests(&self) -> Vec<ConfigManifest> {
        vec![self.catalog.to_manifest(), self.evolution.to_manifest()]
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Defaults overridden by `KNAPSACK_*` environment variables.
    pub fn from_env() -> Result<Self, KnapsackError> {
        let config = Self::build(None)?;
        Ok(Self { config })
    }

    /// TOML file layered over defaults, then environment overrides.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, KnapsackError> {
        let config = Self::build(Some(path.as_ref()))?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Ok(Self { config })
    }

    fn build(path: Option<&Path>) -> Result<AppConfig, KnapsackError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), KnapsackError> {
        let toml_str = toml::to_string_pretty(&self.config)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Apply `f` and keep the result only if it validates.
    pub fn update<F>(&mut self, f: F) -> Result<(), KnapsackError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}
