//! HTTP status service for RetailCo.
//!
//! Serves two static JSON endpoints, `/` and `/hello`, each stamped with
//! the time the request was handled.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tokio::signal;
use tower_http::trace::TraceLayer;

use config::Config;
use error::ServerError;

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::status::root))
        .route("/hello", get(routes::status::hello))
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves `app` until SIGINT or SIGTERM.
pub async fn serve(config: &Config, app: Router) -> Result<(), ServerError> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!(addr = %local_addr, "starting retail-app server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}
