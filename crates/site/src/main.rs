//! Folio Site Server
//!
//! Serves the portfolio website: home page, portfolio, blog and contact form.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_site::{
    config::{AppConfig, DatabaseConfig, StoreKind},
    db::{create_pool, ContentStore, MemoryStore, PgStore},
    routes::build_router,
    state::AppState,
};

/// Initialize tracing/logging.
///
/// `FOLIO_LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,folio_site=debug,tower_http=debug".into());
    let json = std::env::var("FOLIO_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Open the configured content store.
async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn ContentStore>> {
    match config.store {
        StoreKind::Postgres => {
            let db_config = DatabaseConfig::from_env().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to load database config, using defaults");
                DatabaseConfig::default()
            });

            let pool = create_pool(&db_config).await?;
            let store = PgStore::new(pool);
            store.migrate().await?;
            Ok(Arc::new(store))
        }
        StoreKind::Memory => {
            let store = match &config.fixtures {
                Some(path) => MemoryStore::from_fixture_file(path).await?,
                None => {
                    tracing::warn!("FOLIO_FIXTURES not set, memory store starts empty");
                    MemoryStore::default()
                }
            };
            Ok(Arc::new(store))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Folio site");

    let app_config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load app config, using defaults");
        AppConfig::default()
    });

    tracing::info!(
        host = %app_config.host,
        port = app_config.port,
        store = app_config.store.as_str(),
        debug = app_config.debug,
        "Configuration loaded"
    );

    let store = open_store(&app_config).await?;
    let addr: SocketAddr = app_config.bind_address().parse()?;

    let state = AppState::new(store, app_config)?;
    let app = build_router(state);

    let listener = TcpListener::bind(addr).await?;

    tracing::info!(address = %addr, "Server listening");

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
