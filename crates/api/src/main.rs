use std::net::SocketAddr;
use std::sync::Arc;

use makeup_api::config::ServerConfig;
use makeup_api::router::build_app_router;
use makeup_api::state::AppState;
use makeup_db::{DbConfig, PgBookingStore};
use makeup_notify::{DisabledSms, SmsClient, SmsConfig, SmsSender};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let db_config = DbConfig::from_env();
    tracing::debug!(?db_config, "Loaded database configuration");

    let pool = makeup_db::create_pool(&db_config)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    makeup_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    makeup_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- SMS ---
    let sms: Arc<dyn SmsSender> = match SmsConfig::from_env() {
        Some(sms_config) => {
            tracing::info!(url = %sms_config.url, "SMS gateway configured");
            Arc::new(SmsClient::new(sms_config).expect("Failed to build SMS client"))
        }
        None => {
            tracing::warn!("SMS_URL not set, booking notifications are disabled");
            Arc::new(DisabledSms)
        }
    };
    if config.sms_recipients.is_empty() {
        tracing::warn!("SMS_PHONE_LIST is empty, booking notifications will not be sent");
    }

    // --- App state ---
    let state = AppState {
        store: Arc::new(PgBookingStore::new(pool)),
        sms,
        config: Arc::new(config.clone()),
    };

    // --- Router ---
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

/// Install the global tracing subscriber.
///
/// `RUST_LOG` controls filtering; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "makeup_api=debug,makeup_notify=debug,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
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
