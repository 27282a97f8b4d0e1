//! Header and footer navigation data.

use serde::Serialize;
use tracing::warn;

use crate::content::{Announcement, Category, ContentService};

/// Everything the layout chrome needs from the content API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Category menu entries.
    pub categories: Vec<Category>,

    /// Announcement bar message.
    pub announcement: Option<Announcement>,
}

impl Navigation {
    /// Load navigation data. A failing source is logged and left empty so the page still renders.
    pub async fn load(content: &dyn ContentService) -> Self {
        let categories = content.categories().await.unwrap_or_else(|error| {
            warn!(error = %error, "failed to load categories");

            Vec::new()
        });

        let announcement = content.active_announcement().await.unwrap_or_else(|error| {
            warn!(error = %error, "failed to load announcement");

            None
        });

        Self {
            categories,
            announcement,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::content::{ContentServiceError, MockContentService};

    use super::*;

    fn sarees() -> Category {
        Category {
            name: "Sarees".to_string(),
            slug: "sarees".to_string(),
        }
    }

    fn sale() -> Announcement {
        Announcement {
            text: "Festive sale ends Sunday".to_string(),
            link: Some("/sale".to_string()),
        }
    }

    #[tokio::test]
    async fn loads_categories_and_announcement() {
        let mut content = MockContentService::new();

        content
            .expect_categories()
            .once()
            .return_once(|| Ok(vec![sarees()]));

        content
            .expect_active_announcement()
            .once()
            .return_once(|| Ok(Some(sale())));

        let navigation = Navigation::load(&content).await;

        assert_eq!(navigation.categories, vec![sarees()]);
        assert_eq!(navigation.announcement, Some(sale()));
    }

    #[tokio::test]
    async fn failing_sources_degrade_to_empty() {
        let mut content = MockContentService::new();

        content.expect_categories().once().return_once(|| {
            Err(ContentServiceError::UnexpectedResponse(
                "GET categories failed with status 503".to_string(),
            ))
        });

        content
            .expect_active_announcement()
            .once()
            .return_once(|| Ok(Some(sale())));

        let navigation = Navigation::load(&content).await;

        assert!(navigation.categories.is_empty());
        assert_eq!(navigation.announcement, Some(sale()));
    }
}
