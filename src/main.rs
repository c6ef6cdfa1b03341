use marketplace::app::app;
use marketplace::config::ServerConfig;
use marketplace::session::{SessionStore, spawn_prune_task};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;

    eprintln!("🛒 MarketPlace v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: http://{}:{}/api", config.bind, config.port);
    eprintln!("   Session WS: ws://{}:{}/ws/session", config.bind, config.port);
    eprintln!(
        "   Sessions: idle timeout {}s, sweep every {}s",
        config.session_idle_timeout.as_secs(),
        config.prune_interval.as_secs()
    );

    // The store is owned here and handed to the router; there is no global.
    let sessions = SessionStore::new();
    let _prune_handle = spawn_prune_task(
        sessions.clone(),
        config.prune_interval,
        config.session_idle_timeout,
    );

    let router = app(sessions, config.cors_any);
    let listener = tokio::net::TcpListener::bind((config.bind, config.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "Marketplace server started");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Marketplace server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
