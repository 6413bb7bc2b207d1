use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Configuration I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
