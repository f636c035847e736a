use rand::Rng;
use tracing::debug;

use crate::clock::Clock;
use crate::generator::RecordGenerator;
use crate::models::TransactionRecord;

/// Builds `count` independently generated records.
pub fn build_batch<C: Clock, R: Rng>(generator: &RecordGenerator<C>, rng: &mut R, count: usize) -> Vec<TransactionRecord> {
    let batch: Vec<TransactionRecord> = (0..count).map(|_| generator.generate(rng)).collect();

    debug!("Built batch of {} records", batch.len());

    batch
}
