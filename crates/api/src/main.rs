//! Breast Cancer Diagnosis API - Main Entry Point

use api::{init_logging, run_server, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging();

    info!("=== Breast Cancer Diagnosis API v{} ===", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    info!(
        "Dataset: {}, model: {}",
        config.dataset_path, config.model_path
    );

    run_server(config).await?;

    Ok(())
}
