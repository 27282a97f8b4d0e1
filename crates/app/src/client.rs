//! Commerce API client configuration.

use std::time::Duration;

use reqwest::Client;

/// Where the commerce backend lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct CommerceApiConfig {
    /// Base URL, e.g. `"https://api.example.com/v1"`.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl CommerceApiConfig {
    /// Join `path` onto the base URL with exactly one slash between them.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build an HTTP client honouring the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn http_client(&self) -> Result<Client, reqwest::Error> {
        Client::builder().timeout(self.timeout).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> CommerceApiConfig {
        CommerceApiConfig {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn url_joins_with_a_single_slash() {
        assert_eq!(
            config("https://api.example.com/v1/").url("/categories"),
            "https://api.example.com/v1/categories"
        );
        assert_eq!(
            config("https://api.example.com").url("auth/login"),
            "https://api.example.com/auth/login"
        );
    }
}
