/// Server configuration loaded from environment variables.
///
/// All fields except the API key have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Shared secret expected in the `X-API-KEY` header on `/api/*`.
    pub api_key: String,
    /// Public confirmation page prefix; the transaction token is appended.
    pub appointment_view_url: String,
    /// Phone numbers notified of every new booking.
    pub sms_recipients: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default  |
    /// |------------------------|----------|
    /// | `HOST`                 | `0.0.0.0`|
    /// | `PORT`                 | `8080`   |
    /// | `CORS_ORIGINS`         | `*`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`     |
    /// | `API_KEY`              | required |
    /// | `APPOINTMENT_VIEW_URL` | empty    |
    /// | `SMS_PHONE_LIST`       | empty    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = split_list(&std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()));

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let api_key = std::env::var("API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .expect("API_KEY must be set");

        let appointment_view_url = std::env::var("APPOINTMENT_VIEW_URL").unwrap_or_default();

        let sms_recipients = split_list(&std::env::var("SMS_PHONE_LIST").unwrap_or_default());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            api_key,
            appointment_view_url,
            sms_recipients,
        }
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cors_origins", &self.cors_origins)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("api_key", &"<redacted>")
            .field("appointment_view_url", &self.appointment_view_url)
            .field("sms_recipients", &self.sms_recipients.len())
            .finish()
    }
}

/// Split a comma-separated list, trimming entries and dropping blanks.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
