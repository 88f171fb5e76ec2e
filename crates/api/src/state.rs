use std::sync::Arc;

use makeup_db::BookingStore;
use makeup_notify::SmsSender;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (everything is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Data access for artists and appointments.
    pub store: Arc<dyn BookingStore>,
    /// Outbound SMS gateway.
    pub sms: Arc<dyn SmsSender>,
    /// Server configuration (API key, notification settings).
    pub config: Arc<ServerConfig>,
}
