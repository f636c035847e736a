mod clock;
mod config;
mod engine;
mod generator;
mod models;
mod noise;
mod sink;
mod types;

use std::io::stderr;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::clock::SystemClock;
use crate::config::PipelineConfig;
use crate::engine::Pipeline;
use crate::sink::CsvSink;

const LOG_LEVEL: LevelFilter = LevelFilter::WARN;

fn main() -> Result<()> {
    setup_logging(LOG_LEVEL);

    let config = PipelineConfig::beside_executable();
    info!("Writing transactions to {}", config.output_path().display());

    let sink = CsvSink::new(config.output_dir.clone(), config.file_name.clone());
    let pipeline = Pipeline::new(config, SystemClock, sink)?;

    println!("Generating transactions...");

    let timer = Instant::now();
    let summary = pipeline.run()?;
    let duration = timer.elapsed();

    info!("Generated transactions in: {duration:?}");
    info!(
        "Generated {} records, blanked {}, duplicated {}, displaced {}, {} incomplete rows written",
        summary.generated,
        summary.noise.missing,
        summary.noise.duplicated,
        summary.noise.displaced,
        summary.incomplete
    );

    println!("Done, {} transactions written to {}", summary.written, summary.path.display());

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout only carries the two status lines, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
