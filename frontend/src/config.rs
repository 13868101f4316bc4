/// Base URL used when `API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Client-side settings, fixed when the bundle is built
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Root of the REST API; resource paths are appended to it
    pub api_base_url: String,
    /// How long success/error toasts stay on screen
    pub notification_duration_ms: u32,
}

impl ClientConfig {
    /// Read overrides baked in by the build (`API_BASE_URL=... trunk build`)
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("API_BASE_URL") {
            config.api_base_url = normalize_base_url(url);
        }
        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            notification_duration_ms: 3000,
        }
    }
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
