use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::info;

use crate::models::TransactionRecord;
use crate::sink::{Sink, SinkError};

/// Writes records as comma-separated text with a header row, replacing any existing file.
pub struct CsvSink {
    output_dir: PathBuf,
    file_name: String
}

impl CsvSink {
    pub fn new(output_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_name: file_name.into()
        }
    }

    pub fn path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    fn write_csv(&self, path: &Path, records: &[TransactionRecord]) -> Result<(), csv::Error> {
        //NOTE: Headers are written by hand so an empty collection still gets its header row
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;

        writer.write_record(TransactionRecord::HEADER)?;

        for record in records {
            writer.serialize(record)?;
        }

        writer.flush()?;

        Ok(())
    }
}

impl Sink for CsvSink {
    fn write(&self, records: &[TransactionRecord]) -> Result<PathBuf, SinkError> {
        create_dir_all(&self.output_dir).map_err(|source| SinkError::CreateDirectory {
            path: self.output_dir.clone(),
            source
        })?;

        let path = self.path();

        self.write_csv(&path, records).map_err(|source| SinkError::Write {
            path: path.clone(),
            source
        })?;

        info!("Wrote {} transactions to {}", records.len(), path.display());

        Ok(path)
    }
}
