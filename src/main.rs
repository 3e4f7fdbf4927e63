use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tbdrcat::{Config, Pipeline, RunOutcome};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("TB-DR catalogue processing started");
    tracing::info!("Catalogue directory: {:?}", config.catalog_dir);

    let outcome = Pipeline::from_config(&config)
        .run()
        .with_context(|| format!("failed to process catalogue in {:?}", config.catalog_dir))?;

    match outcome {
        RunOutcome::Skipped(paths) => {
            tracing::info!("All catalogue output files already exist. Nothing to do.");
            for path in paths {
                tracing::info!("  - {}", path.display());
            }
        }
        RunOutcome::Completed(summary) => {
            tracing::info!(
                coordinate_rows = summary.coordinate_rows,
                master_rows = summary.master_rows,
                invalid_rows = summary.invalid_rows,
                intervals = summary.intervals,
                annotations = summary.annotations,
                "Finished catalogue processing"
            );
        }
    }

    Ok(())
}
