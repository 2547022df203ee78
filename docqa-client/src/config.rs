use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize, Clone)]
pub struct ApiSettings {
    /// Root URL of the backend API, e.g. "https://app.example.com/api".
    pub base_url: String,
    /// Upper bound on waiting for the session provider to finish loading
    /// before a request fails as unauthenticated.
    #[serde(default = "default_auth_ready_timeout_ms")]
    pub auth_ready_timeout_ms: u64,
}

fn default_auth_ready_timeout_ms() -> u64 {
    10_000
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_ready_timeout_ms: default_auth_ready_timeout_ms(),
        }
    }

    pub fn auth_ready_timeout(&self) -> Duration {
        Duration::from_millis(self.auth_ready_timeout_ms)
    }
}
