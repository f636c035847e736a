mod errors;

use std::env;
use std::path::{Path, PathBuf};

use crate::generator::DEFAULT_BATCH_SIZE;

pub use errors::ConfigError;

const DATA_DIR: &str = "data";
const OUTPUT_FILE_NAME: &str = "transactions.csv";

const MISSING_FRACTION: f64 = 0.01;
const DUPLICATE_FRACTION: f64 = 0.01;
const OUT_OF_ORDER_FRACTION: f64 = 0.05;
const DUPLICATE_SEED: u64 = 42;

/// Tuning for the three noise steps.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseConfig {
    /// Share of records that get one field blanked.
    pub missing_fraction: f64,
    /// Share of records copied and appended as exact duplicates.
    pub duplicate_fraction: f64,
    /// Share of the timestamp-sorted records pulled out and shuffled.
    pub out_of_order_fraction: f64,
    /// Seed for the duplicate sampler. `None` draws from the pipeline's random source instead.
    pub duplicate_seed: Option<u64>
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            missing_fraction: MISSING_FRACTION,
            duplicate_fraction: DUPLICATE_FRACTION,
            out_of_order_fraction: OUT_OF_ORDER_FRACTION,
            duplicate_seed: Some(DUPLICATE_SEED)
        }
    }
}

impl NoiseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_fraction("missing_fraction", self.missing_fraction)?;
        check_fraction("duplicate_fraction", self.duplicate_fraction)?;
        check_fraction("out_of_order_fraction", self.out_of_order_fraction)
    }
}

fn check_fraction(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidFraction { name, value })
    }
}

/// Everything one pipeline run needs, resolved up front.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub batch_size: usize,
    pub output_dir: PathBuf,
    pub file_name: String,
    /// Seed for the run's random source. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub noise: NoiseConfig
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            output_dir: PathBuf::from(DATA_DIR),
            file_name: OUTPUT_FILE_NAME.to_string(),
            seed: None,
            noise: NoiseConfig::default()
        }
    }
}

impl PipelineConfig {
    /// Default configuration writing to the `data` directory one level above the running executable.
    pub fn beside_executable() -> Self {
        let output_dir = env::current_exe()
            .ok()
            .and_then(|executable| output_dir_for(&executable))
            .unwrap_or_else(|| PathBuf::from(DATA_DIR));

        Self {
            output_dir,
            ..Self::default()
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_name.trim().is_empty() {
            return Err(ConfigError::EmptyFileName);
        }

        self.noise.validate()
    }
}

fn output_dir_for(executable: &Path) -> Option<PathBuf> {
    executable.parent()?.parent().map(|root| root.join(DATA_DIR))
}
