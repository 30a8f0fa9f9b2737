mod cli;
mod config;
mod errors;
mod intake;
mod llm_client;
mod models;
mod output;
mod screening;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::screening::evaluator::LlmEvaluator;
use crate::screening::pipeline::run_batch;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first; a missing API key stops the run before any applicant I/O
    let config = Config::load(&cli)?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting screener v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(&config)?;
    info!("LLM client initialized (model: {})", llm.model());
    info!(
        "Job registry: {}",
        config.jobs.job_ids().collect::<Vec<_>>().join(", ")
    );

    let evaluator = LlmEvaluator(llm);
    let report = run_batch(&config, &evaluator).await?;

    info!("Outputs saved:");
    info!(" - JSON: {}", config.paths.results_json.display());
    if report.wrote_updated_table {
        info!(" - CSV : {}", config.paths.updated_csv.display());
    } else {
        info!(" - CSV : not written (no applicant rows)");
    }

    Ok(())
}
