//! API client configuration.

/// Connection settings for the finance API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl ApiConfig {
    /// Read settings from the environment, falling back to defaults.
    ///
    /// `POCKETBOOK_API_URL` overrides the base URL and
    /// `POCKETBOOK_API_TIMEOUT` the request timeout in seconds.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = std::env::var("POCKETBOOK_API_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.base_url);
        let timeout_seconds = std::env::var("POCKETBOOK_API_TIMEOUT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.timeout_seconds);
        Self {
            base_url,
            timeout_seconds,
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_thirty_seconds() {
        let config = ApiConfig::default();
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn with_base_url_overrides_only_url() {
        let config = ApiConfig::with_base_url("https://api.example.com");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_seconds, 30);
    }
}
