use anyhow::{Context, Result};
use sentiment140_prep::core::{DEFAULT_SAMPLE_SIZE, DEFAULT_SEED};
use sentiment140_prep::pipelines::dataset_preparation::*;
use sentiment140_prep::sample_and_save;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let preparer = DatasetPreparerBuilder::sentiment140().build();

    let table = preparer
        .prepare()
        .with_context(|| format!("Failed to prepare dataset from {}", preparer.url()))?;

    let output_path = preparer.config().output_path();
    sample_and_save(&table, DEFAULT_SAMPLE_SIZE, DEFAULT_SEED, &output_path)
        .with_context(|| format!("Failed to save sample to {}", output_path.display()))?;

    println!("Sample saved to {}", output_path.display());

    Ok(())
}
