use minifeed_api::{
    AppState, app,
    config::{Config, ConfigError},
};
use thiserror::Error;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Error binding tcp listener: {0}")]
    TcpBind(std::io::Error),
    #[error("Error serving server: {0}")]
    TcpServe(std::io::Error),
}

fn install_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "minifeed_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), InitError> {
    install_tracing();
    let config = Config::from_env()?;

    // Nothing survives a restart.
    let state = AppState::new();

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(InitError::TcpBind)?;

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /api/health               - Health check");
    info!("  POST   /api/register             - Create account");
    info!("  POST   /api/login                - Login");
    info!("  GET    /api/users/:id            - Profile and posts");
    info!("  POST   /api/users/:id/follow     - Toggle follow");
    info!("  GET    /api/posts                - Feed, newest first");
    info!("  POST   /api/posts                - Create post");
    info!("  POST   /api/posts/:id/like       - Toggle like");
    info!("  POST   /api/posts/:id/comment    - Add comment");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(InitError::TcpServe)?;

    Ok(())
}
