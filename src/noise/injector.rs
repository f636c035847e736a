use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::NoiseConfig;
use crate::models::{NoisyField, TransactionRecord};
use crate::noise::{fraction_of, NoiseReport};

/// Degrades a clean batch with missing fields, duplicate rows and out-of-order timestamps.
pub struct NoiseInjector {
    config: NoiseConfig
}

impl NoiseInjector {
    pub fn new(config: NoiseConfig) -> Self {
        Self {
            config
        }
    }

    /// Runs the three noise steps in order: missing values, duplicates, out-of-order.
    ///
    /// The returned collection holds `len + floor(len * duplicate_fraction)` records in random order.
    pub fn apply<R: Rng>(&self, mut records: Vec<TransactionRecord>, rng: &mut R) -> (Vec<TransactionRecord>, NoiseReport) {
        let missing = self.inject_missing_values(&mut records, rng);
        let duplicated = self.inject_duplicates(&mut records, rng);
        let (records, displaced) = self.inject_out_of_order(records, rng);

        let report = NoiseReport {
            missing,
            duplicated,
            displaced
        };

        info!("Injected noise: {} missing fields, {} duplicates, {} out-of-order records", report.missing, report.duplicated, report.displaced);

        (records, report)
    }

    /// Blanks one randomly chosen noisable field in a sample of distinct records.
    pub fn inject_missing_values<R: Rng>(&self, records: &mut [TransactionRecord], rng: &mut R) -> usize {
        let count = fraction_of(records.len(), self.config.missing_fraction);

        for position in index::sample(rng, records.len(), count) {
            let field = NoisyField::ALL[rng.gen_range(0..NoisyField::ALL.len())];
            debug!("Clearing {field:?} on record [{position}]");
            records[position].clear(field);
        }

        count
    }

    /// Appends exact copies of a sample of records, then shuffles the whole collection.
    ///
    /// With a configured `duplicate_seed` the sampled positions depend only on the collection length.
    pub fn inject_duplicates<R: Rng>(&self, records: &mut Vec<TransactionRecord>, rng: &mut R) -> usize {
        let count = fraction_of(records.len(), self.config.duplicate_fraction);

        let positions = match self.config.duplicate_seed {
            Some(seed) => index::sample(&mut StdRng::seed_from_u64(seed), records.len(), count),
            None => index::sample(rng, records.len(), count)
        };

        let duplicates: Vec<TransactionRecord> = positions.iter().map(|position| records[position].clone()).collect();
        debug!("Duplicating records at {:?}", positions.into_vec());

        records.extend(duplicates);
        records.shuffle(rng);

        count
    }

    /// Moves a sample of records out of timestamp order, then shuffles the result.
    pub fn inject_out_of_order<R: Rng>(&self, records: Vec<TransactionRecord>, rng: &mut R) -> (Vec<TransactionRecord>, usize) {
        let count = fraction_of(records.len(), self.config.out_of_order_fraction);

        let mut records = displace(records, count, rng);
        records.shuffle(rng);

        (records, count)
    }
}

/// Sorts by timestamp and moves `count` sampled positions, shuffled, behind the sorted remainder.
pub(crate) fn displace<R: Rng>(mut records: Vec<TransactionRecord>, count: usize, rng: &mut R) -> Vec<TransactionRecord> {
    records.sort_by(TransactionRecord::cmp_by_timestamp);

    let count = count.min(records.len());
    let mut selected = vec![false; records.len()];

    for position in index::sample(rng, records.len(), count) {
        selected[position] = true;
    }

    let (mut unordered, mut ordered): (Vec<_>, Vec<_>) = records
        .into_iter()
        .zip(selected)
        .partition(|(_, is_selected)| *is_selected);

    unordered.shuffle(rng);
    ordered.append(&mut unordered);

    ordered.into_iter().map(|(record, _)| record).collect()
}
