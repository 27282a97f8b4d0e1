//! Content service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, Response};
use tracing::debug;

use crate::{
    client::CommerceApiConfig,
    content::{
        Announcement, AnnouncementResponse, CategoriesResponse, Category, CategoryRecord,
        ContentServiceError,
    },
};

/// Reads storefront content from the commerce backend.
#[derive(Debug, Clone)]
pub struct HttpContentService {
    config: CommerceApiConfig,
    http: Client,
}

impl HttpContentService {
    /// Create a new service from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: CommerceApiConfig) -> Result<Self, ContentServiceError> {
        let http = config.http_client()?;

        Ok(Self { config, http })
    }

    async fn get(&self, path: &str) -> Result<Response, ContentServiceError> {
        let url = self.config.url(path);

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(ContentServiceError::UnexpectedResponse(format!(
                "GET {path} failed with status {status}: {text}"
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl ContentService for HttpContentService {
    async fn categories(&self) -> Result<Vec<Category>, ContentServiceError> {
        let parsed: CategoriesResponse = self.get("categories").await?.json().await?;

        let total = parsed.product_categories.len();

        let categories: Vec<Category> = parsed
            .product_categories
            .into_iter()
            .filter_map(CategoryRecord::into_category)
            .collect();

        if categories.len() < total {
            debug!(
                skipped = total - categories.len(),
                "skipped categories without a slug or handle"
            );
        }

        Ok(categories)
    }

    async fn active_announcement(&self) -> Result<Option<Announcement>, ContentServiceError> {
        let parsed: AnnouncementResponse = self.get("announcements/active").await?.json().await?;

        Ok(parsed.announcement)
    }
}

#[automock]
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Product categories for the navigation menus.
    async fn categories(&self) -> Result<Vec<Category>, ContentServiceError>;

    /// The announcement currently running, if any.
    async fn active_announcement(&self) -> Result<Option<Announcement>, ContentServiceError>;
}
