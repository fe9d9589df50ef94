mod auth;
mod config;
mod digest;
mod error;
mod handlers;
mod models;
mod router;
mod state;

use clap::Parser;
use config::GatewayConfig;
use digest::DigestVerifier;
use ledger::Ledger;
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = GatewayConfig::parse();

    init_tracing(config.log_json);

    tracing::info!(
        bind = %config.bind,
        digest_algorithm = ?config.digest_algorithm,
        "Starting wallet ledger gateway"
    );

    // Ledger state lives for the process lifetime; nothing is persisted.
    let state = AppState::new(
        Ledger::new(),
        DigestVerifier::new(config.secret_key.as_bytes(), config.digest_algorithm),
    );

    let app = create_router(state);

    let listener = TcpListener::bind(config.bind).await?;

    tracing::info!("Listening on {}", config.bind);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
