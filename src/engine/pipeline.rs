use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::config::PipelineConfig;
use crate::generator::{build_batch, RecordGenerator};
use crate::noise::{NoiseInjector, NoiseReport};
use crate::sink::Sink;

/// Counts from one completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSummary {
    pub generated: usize,
    pub noise: NoiseReport,
    pub written: usize,
    /// Written records holding at least one missing field, duplicates included.
    pub incomplete: usize,
    pub path: PathBuf
}

/// Runs generate → perturb → write once over a single in-memory batch.
pub struct Pipeline<C: Clock, S: Sink> {
    config: PipelineConfig,
    generator: RecordGenerator<C>,
    sink: S
}

impl<C: Clock, S: Sink> Pipeline<C, S> {
    /// Validates the configuration and wires the stages together.
    pub fn new(config: PipelineConfig, clock: C, sink: S) -> anyhow::Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            generator: RecordGenerator::new(clock),
            sink
        })
    }

    /// Orchestrates the end-to-end run and returns what was written where.
    pub fn run(&self) -> anyhow::Result<PipelineSummary> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy()
        };

        debug!("Generating {} transactions", self.config.batch_size);
        let batch = build_batch(&self.generator, &mut rng, self.config.batch_size);
        let generated = batch.len();

        let injector = NoiseInjector::new(self.config.noise.clone());
        let (records, noise) = injector.apply(batch, &mut rng);

        let path = self.sink.write(&records)?;
        let incomplete = records.iter().filter(|record| !record.missing_fields().is_empty()).count();

        info!("Pipeline finished: {generated} generated, {} written", records.len());

        Ok(PipelineSummary {
            generated,
            noise,
            written: records.len(),
            incomplete,
            path
        })
    }
}
