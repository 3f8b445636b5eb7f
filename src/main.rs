use discogs_exporter::utils::{logger, timing, validation::Validate};
use discogs_exporter::{CollectionPipeline, Config, ExportEngine, LocalStorage};
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger();
    tracing::info!("Starting discogs-exporter");

    let config = Config::from_env()?;
    config.validate()?;

    let storage = LocalStorage::new(config.output_dir.clone());
    let pipeline = CollectionPipeline::new(storage, config)?;
    let engine = ExportEngine::new(pipeline);

    let started = Instant::now();
    let output_path = engine.run().await?;
    println!("Finished in {}", timing::format_duration(started.elapsed()));

    tracing::info!("Report written to {}", output_path);

    Ok(())
}
