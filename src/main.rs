use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use std::time::Duration;

mod config;
mod fetch;
mod models;
mod params;
mod query;
mod server;

use config::ServerConfig;
use server::WeatherServer;

#[derive(Debug, Parser)]
#[command(version, about = "Weather and geocoding MCP server backed by the Open-Meteo API")]
struct Args {
    /// Base URL of the weather forecast API.
    #[arg(long, default_value = config::DEFAULT_WEATHER_API_BASE)]
    weather_api_base: String,

    /// Base URL of the geocoding API.
    #[arg(long, default_value = config::DEFAULT_GEOCODING_API_BASE)]
    geocoding_api_base: String,

    /// Outbound request timeout in seconds.
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout belongs to the MCP transport.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting weather MCP server...");

    let config = ServerConfig {
        weather_api_base: args.weather_api_base,
        geocoding_api_base: args.geocoding_api_base,
        timeout: Duration::from_secs(args.timeout_secs),
    };

    let server = WeatherServer::new(config)?;

    tracing::info!("Using stdio transport");
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    service.waiting().await?;
    Ok(())
}
