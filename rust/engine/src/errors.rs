use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DoorError {
    #[error("Cannot generate random numbers: {0}")]
    Entropy(String),
    #[error("Invalid door number: {0} (expected 1, 2 or 3)")]
    InvalidDoor(u8),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
