mod csv_sink;
mod errors;

use std::path::PathBuf;

use crate::models::TransactionRecord;

pub use csv_sink::CsvSink;
pub use errors::SinkError;

pub trait Sink {
    /// Persists the whole collection and returns where it went.
    fn write(&self, records: &[TransactionRecord]) -> Result<PathBuf, SinkError>;
}
