use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable PORT must be a positive integer, got `{value}`")]
    InvalidPort { value: String },
}
