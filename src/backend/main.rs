/**
 * Studio Booking Server Entry Point
 *
 * Loads configuration, initializes tracing and serves the HTTP API.
 */

use studio_booking::backend::server::init::create_app;
use studio_booking::shared::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match std::env::var("STUDIO_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading configuration from {}", path);
            AppConfig::from_file(path)?
        }
        Err(_) => AppConfig::from_env()?,
    };

    let app = create_app(&config).await?;

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
