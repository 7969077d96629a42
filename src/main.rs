use std::sync::Arc;

use booking_client::{config::ClientConfig, BookingApi, HttpClient};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ClientConfig::from_env()?;

    // Logs go to stderr so the rendered screens stay readable on stdout
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Using booking API at {}", config.api_url);

    let api: Arc<dyn BookingApi> = Arc::new(HttpClient::new(config)?);
    booking_ui::shell::run(api).await?;

    Ok(())
}
