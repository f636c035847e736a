use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentifierError {
    #[error("Identifier error: {0}")]
    InvalidFormat(String),
    #[error("Identifier error: {0}")]
    ParseInt(#[from] ParseIntError),
    #[error("Identifier error: {value} is outside [{min}, {max}]")]
    OutOfRange {
        value: u16,
        min: u16,
        max: u16
    }
}
