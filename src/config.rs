use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE: &str = "http://localhost:8080";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend address reachable from the user's browser.
    pub public_api_base: String,
    /// Backend address for windowless execution contexts (prerender, workers).
    pub private_api_base: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub retry_attempts: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            public_api_base: DEFAULT_API_BASE.to_string(),
            private_api_base: DEFAULT_API_BASE.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 30,
            retry_attempts: 3,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    /// (populated from `.env` by the build script).
    pub fn from_env() -> Self {
        Self {
            public_api_base: option_env!("PUBLIC_API_BASE")
                .unwrap_or(DEFAULT_API_BASE).to_string(),
            private_api_base: option_env!("API_BASE")
                .unwrap_or(DEFAULT_API_BASE).to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("30").parse().unwrap_or(30),
            retry_attempts: option_env!("RETRY_ATTEMPTS")
                .unwrap_or("3").parse().unwrap_or(3),
        }
    }

    /// Selects the backend base URL for the current execution context.
    ///
    /// Calls issued from a user's browser may need a different reachable
    /// host than calls issued where no address bar exists.
    pub fn api_base(&self) -> &str {
        self.api_base_for(web_sys::window().is_some())
    }

    pub fn api_base_for(&self, has_window: bool) -> &str {
        if has_window {
            &self.public_api_base
        } else {
            &self.private_api_base
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Global static configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_follows_execution_context() {
        let config = AppConfig {
            public_api_base: "https://api.example.com".to_string(),
            private_api_base: "http://backend.internal:8080".to_string(),
            ..AppConfig::default()
        };

        assert_eq!(config.api_base_for(true), "https://api.example.com");
        assert_eq!(config.api_base_for(false), "http://backend.internal:8080");
    }

    #[test]
    fn default_points_at_localhost() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_for(true), DEFAULT_API_BASE);
        assert_eq!(config.api_base_for(false), DEFAULT_API_BASE);
        assert_eq!(config.network_timeout_seconds, 30);
    }
}
