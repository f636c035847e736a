mod batch_builder;
mod record_generator;

pub use batch_builder::build_batch;
pub use record_generator::RecordGenerator;

/// Default number of records in one batch.
pub const DEFAULT_BATCH_SIZE: usize = 1000;
