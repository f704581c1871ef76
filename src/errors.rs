use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Initialization error: {0}")]
    InitializationError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
