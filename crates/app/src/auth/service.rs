//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use tracing::debug;

use crate::{
    auth::{
        AuthServiceError, Credentials, LoginErrorBody, LoginResponse, SessionToken, SessionTokens,
    },
    client::CommerceApiConfig,
};

/// Exchanges credentials for session tokens with the commerce backend.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    config: CommerceApiConfig,
    http: Client,
}

impl HttpAuthService {
    /// Create a new service from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: CommerceApiConfig) -> Result<Self, AuthServiceError> {
        let http = config.http_client()?;

        Ok(Self { config, http })
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, credentials: Credentials) -> Result<SessionTokens, AuthServiceError> {
        let url = self.config.url("auth/login");

        let response = self.http.post(&url).json(&credentials).send().await?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body: LoginErrorBody = serde_json::from_str(&text).unwrap_or_default();

            debug!(status = status.as_u16(), "login rejected by commerce API");

            return Err(AuthServiceError::Rejected {
                message: body.into_message(),
                status: Some(status.as_u16()),
            });
        }

        let parsed: LoginResponse = response.json().await?;

        let (Some(access), Some(refresh)) = (parsed.access_token, parsed.refresh_token) else {
            return Err(AuthServiceError::UnexpectedResponse(
                "login response is missing a token".to_string(),
            ));
        };

        Ok(SessionTokens {
            access: SessionToken::new(access),
            refresh: SessionToken::new(refresh),
        })
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Log a customer in.
    async fn login(&self, credentials: Credentials) -> Result<SessionTokens, AuthServiceError>;
}
