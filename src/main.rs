use anyhow::Result;
use mcp_surf_forecast::{SurfConfig, SurfForecastServer};
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcp_surf_forecast=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting MCP surf forecast server");

    let config = SurfConfig::from_env();
    tracing::debug!(
        "Upstream endpoints: geocoding={} marine={} weather={}",
        config.geocoding_url,
        config.marine_url,
        config.weather_url
    );

    let server = SurfForecastServer::new(&config)?;
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
