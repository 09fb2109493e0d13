//! Search & Rescue Mission - Main Entry Point

use sar_app::{init_logging, load_settings, run_demo};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== SkySAR mission stack v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting autonomous search and rescue mission...");

    let settings = load_settings()?;
    run_demo(settings).await?;

    Ok(())
}
