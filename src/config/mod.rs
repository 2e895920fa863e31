pub mod catalog;
pub mod evolution;
pub mod manager;
pub mod seed;
pub mod traits;

pub use catalog::CatalogConfig;
pub use evolution::EvolutionConfig;
pub use manager::{AppConfig, ConfigManager};
pub use traits::{ConfigManifest, ConfigSection, FieldManifest};
