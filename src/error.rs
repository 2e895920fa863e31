use thiserror::Error;

#[derive(Error, Debug)]
pub enum KnapsackError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invariant violated: {0}")]
    Invariant(String),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KnapsackError>;
