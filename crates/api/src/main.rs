use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cbprep_api::config::{NotifyConfig, ServerConfig};
use cbprep_api::router::build_app_router;
use cbprep_api::state::AppState;
use cbprep_notify::{Mailer, MailerConfig, ResendMailer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cbprep_api=debug,cbprep_notify=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let notify = NotifyConfig::from_env();
    if notify.from.is_none() || notify.owner.is_none() {
        tracing::warn!("EMAIL_FROM or EMAIL_OWNER not set; intake requests will fail until configured");
    }

    // --- Email provider ---
    let mailer: Option<Arc<dyn Mailer>> = match MailerConfig::from_env() {
        Some(mailer_config) => {
            tracing::info!(api_base = %mailer_config.api_base, "Resend mailer configured");
            let mailer: Arc<dyn Mailer> = Arc::new(
                ResendMailer::new(mailer_config).expect("Failed to build email HTTP client"),
            );
            Some(mailer)
        }
        None => {
            tracing::warn!("RESEND_API_KEY not set; intake requests will fail until configured");
            None
        }
    };

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        notify: Arc::new(notify),
        mailer,
    };

    let app = build_app_router(state);

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

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
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
