use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use cura_core::{config::analysis_delay_from_env_value, CoreConfig};

/// Main entry point for the Cura server.
///
/// Resolves configuration from the environment once, then serves the REST API.
///
/// # Environment Variables
/// - `CURA_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `CURA_ANALYSIS_DELAY_MS`: cosmetic pause before results are returned (default: 2000)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cura=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("CURA_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let analysis_delay: Duration =
        analysis_delay_from_env_value(std::env::var("CURA_ANALYSIS_DELAY_MS").ok())?;

    tracing::info!("++ Starting Cura REST on {}", rest_addr);
    tracing::info!("++ Analysis delay {:?}", analysis_delay);

    let state = AppState::new(CoreConfig::new(analysis_delay));
    api_rest::serve(&rest_addr, state).await
}
