//! Hiring demo data generator binary.
//!
//! Launches the full hiring campaign against a running engine.

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hiring_datagen::{CampaignConfig, CampaignDriver, DatagenConfig, EngineClient};

#[derive(Parser)]
#[command(name = "hiring-datagen")]
#[command(version, about = "Generate hiring demo data in a process engine", long_about = None)]
struct Cli {
    /// Engine REST API root (overrides HIRING_DATAGEN_ENGINE_URL)
    #[arg(long)]
    engine_url: Option<String>,

    /// Seed for reproducible data (overrides HIRING_DATAGEN_SEED)
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hiring_datagen=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = DatagenConfig::from_env()?;
    if let Some(engine_url) = cli.engine_url {
        config.engine_url = engine_url;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    tracing::info!(
        engine_url = %config.engine_url,
        process_definition_key = %config.process_definition_key,
        seed = ?config.seed,
        "Configuration loaded"
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let campaign = CampaignConfig::default();
    tracing::info!(
        instances = campaign.total_instances(),
        "Starting hiring campaign"
    );

    // One client for the whole run, dropped on every exit path.
    let engine = EngineClient::from_config(&config)?;
    let driver = CampaignDriver::new(&campaign, &engine, &config.user_id);

    match driver.run(&mut rng).await {
        Ok(report) => {
            tracing::info!(
                launched = report.total_launched(),
                tasks_completed = report.tasks.completed,
                task_warnings = report.tasks.warnings,
                message_warnings = report.message_warnings,
                "Campaign finished"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Campaign aborted");
            Err(e.into())
        }
    }
}
