use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config error: {name} must lie in [0, 1], got {value}")]
    InvalidFraction {
        name: &'static str,
        value: f64
    },
    #[error("Config error: output file name is empty")]
    EmptyFileName
}
