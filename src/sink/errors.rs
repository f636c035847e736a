use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Could not create output directory [{}]: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        source: io::Error
    },
    #[error("Could not write transactions to [{}]: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: csv::Error
    }
}
