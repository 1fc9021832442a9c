use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;
use catalog_db::{Catalog, DbConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "catalog_api=debug,catalog_db=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let db_config = DbConfig::from_env().expect("Invalid database configuration");
    tracing::info!(
        db_host = %db_config.host,
        db_name = %db_config.database,
        "Loaded database configuration"
    );

    // --- Database ---
    let pool = catalog_db::create_pool(&db_config)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    catalog_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    catalog_db::ensure_schema(&pool)
        .await
        .expect("Failed to create projects table");
    tracing::info!("Database schema ready");

    // --- App state ---
    let state = AppState {
        catalog: Catalog::new(pool.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
