/// SMS gateway settings.
#[derive(Clone, Default)]
pub struct SmsConfig {
    /// Gateway endpoint that accepts the JSON message batch.
    pub url: String,
    /// Sender id shown on the recipient's handset.
    pub source_addr: String,
    pub username: String,
    pub password: String,
}

impl SmsConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMS_URL` is not set, signalling that SMS delivery
    /// is not configured and every send should report failure.
    ///
    /// | Variable          | Required | Default |
    /// |-------------------|----------|---------|
    /// | `SMS_URL`         | yes      | none    |
    /// | `SMS_SOURCE_ADDR` | no       | empty   |
    /// | `SMS_USERNAME`    | no       | empty   |
    /// | `SMS_PASSWORD`    | no       | empty   |
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("SMS_URL").ok().filter(|u| !u.is_empty())?;
        Some(Self {
            url,
            source_addr: std::env::var("SMS_SOURCE_ADDR").unwrap_or_default(),
            username: std::env::var("SMS_USERNAME").unwrap_or_default(),
            password: std::env::var("SMS_PASSWORD").unwrap_or_default(),
        })
    }
}

impl std::fmt::Debug for SmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsConfig")
            .field("url", &self.url)
            .field("source_addr", &self.source_addr)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
