use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use translate_web::config::Config;
use translate_web::gateway::HttpGateway;
use translate_web::routes;
use translate_web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when not present)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translate_web=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting translation web server");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!("Loaded configuration: {:?}", config);

    let gateway = HttpGateway::from_config(&config).context("Failed to build HTTP client")?;
    info!(
        "Using translation provider at {} (timeout {:?})",
        config.translate_api_url, config.gateway_timeout
    );

    let app = routes::create_router(AppState::new(Arc::new(gateway)));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
