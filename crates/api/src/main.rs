//! Server entry point.

use retail_app::config::Config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!(?config, "loaded configuration");

    let app = retail_app::create_app();

    if let Err(err) = retail_app::serve(&config, app).await {
        tracing::error!(error = %err, "server stopped");
        std::process::exit(1);
    }

    tracing::info!("server shut down gracefully");
}
