//! Server configuration module

use clap::Parser;

use crate::config::{
    commerce::CommerceApiArgs, cookies::CookieConfig, logging::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod commerce;
pub(crate) mod cookies;
pub(crate) mod logging;
pub(crate) mod server;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Commerce backend settings.
    #[command(flatten)]
    pub commerce: CommerceApiArgs,

    /// Session cookie settings.
    #[command(flatten)]
    pub cookies: CookieConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_the_backend_is_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--commerce-api-url",
            "https://api.example.com",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.logging.slow_request_threshold_ms, 1_000);
        assert_eq!(config.commerce.commerce_api_timeout_seconds, 10);
        assert_eq!(config.cookies.access_token_max_age_seconds, 900);
        assert_eq!(config.cookies.refresh_token_max_age_days, 30);
        assert!(!config.cookies.cookie_secure);

        Ok(())
    }
}
