//! Commerce API Config

use std::time::Duration;

use clap::Args;

use storefront_app::client::CommerceApiConfig;

/// Commerce backend settings.
#[derive(Debug, Args)]
pub struct CommerceApiArgs {
    /// Base URL of the commerce API
    #[arg(long, env = "COMMERCE_API_URL")]
    pub commerce_api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "COMMERCE_API_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub commerce_api_timeout_seconds: u64,
}

impl CommerceApiArgs {
    /// Client configuration for the app services.
    #[must_use]
    pub fn client_config(&self) -> CommerceApiConfig {
        CommerceApiConfig {
            base_url: self.commerce_api_url.clone(),
            timeout: Duration::from_secs(self.commerce_api_timeout_seconds),
        }
    }
}
