//! Session Cookie Config

use clap::Args;

/// Lifetimes and flags for the auth cookies.
#[derive(Debug, Clone, Args)]
pub struct CookieConfig {
    /// Lifetime of the `access_token` cookie in seconds
    #[arg(long, env = "ACCESS_TOKEN_MAX_AGE_SECONDS", default_value_t = 900_i64)]
    pub access_token_max_age_seconds: i64,

    /// Lifetime of the `refresh_token` cookie in days
    #[arg(long, env = "REFRESH_TOKEN_MAX_AGE_DAYS", default_value_t = 30_i64)]
    pub refresh_token_max_age_days: i64,

    /// Mark cookies `Secure` (HTTPS only)
    #[arg(long, env = "COOKIE_SECURE", default_value_t = false)]
    pub cookie_secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            access_token_max_age_seconds: 900,
            refresh_token_max_age_days: 30,
            cookie_secure: false,
        }
    }
}
