//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, AuthServiceError, HttpAuthService},
    client::CommerceApiConfig,
    content::{ContentService, ContentServiceError, HttpContentService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build content client")]
    Content(#[source] ContentServiceError),

    #[error("failed to build auth client")]
    Auth(#[source] AuthServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub content: Arc<dyn ContentService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context backed by the commerce API.
    ///
    /// # Errors
    ///
    /// Returns an error when an HTTP client cannot be built.
    pub fn from_commerce_api(config: &CommerceApiConfig) -> Result<Self, AppInitError> {
        let content = HttpContentService::new(config.clone()).map_err(AppInitError::Content)?;
        let auth = HttpAuthService::new(config.clone()).map_err(AppInitError::Auth)?;

        Ok(Self {
            content: Arc::new(content),
            auth: Arc::new(auth),
        })
    }
}
