use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use axum::middleware;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use feedback_api::logging::log_request;
use feedback_api::routes::AppState;
use feedback_api::store::FeedbackStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "feedback=debug,feedback_api=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("FEEDBACK_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;
    let public_dir: PathBuf = std::env::var("FEEDBACK_PUBLIC_DIR")
        .unwrap_or_else(|_| "crates/feedback-server/public".into())
        .into();

    // In-memory store, seeded with the welcome record. Resets on restart.
    let state = AppState {
        store: FeedbackStore::with_seed(),
    };

    // Static files with SPA fallback: any path that matches neither an API
    // route nor a file under the public dir serves index.html.
    let index = public_dir.join("index.html");
    let static_files = ServeDir::new(&public_dir).fallback(ServeFile::new(index));

    let app = feedback_api::api_router(state)
        .fallback_service(static_files)
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Feedback Board listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server closed. Exiting process.");
    Ok(())
}

/// Resolves on SIGINT or SIGTERM, then arms a 10 second watchdog that
/// force-exits if open connections refuse to drain.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT. Shutting down gracefully..."),
        _ = terminate => info!("Received SIGTERM. Shutting down gracefully..."),
    }

    tokio::spawn(async {
        tokio::time::sleep(Duration::from_secs(10)).await;
        error!("Forcing shutdown.");
        std::process::exit(1);
    });
}
