use thiserror::Error;

use super::config::ConfigError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Requested {requested} ranked pharmacophore(s) but only {available} are available")]
    OutOfRange { requested: usize, available: usize },
}
