//! Navigation Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use storefront_app::content::{Announcement, Category, Navigation};

use crate::extensions::*;

/// Category menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            name: category.name,
            slug: category.slug,
        }
    }
}

/// Announcement bar message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct AnnouncementResponse {
    pub text: String,
    pub link: Option<String>,
}

impl From<Announcement> for AnnouncementResponse {
    fn from(announcement: Announcement) -> Self {
        Self {
            text: announcement.text,
            link: announcement.link,
        }
    }
}

/// Navigation Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NavigationResponse {
    pub categories: Vec<CategoryResponse>,
    pub announcement: Option<AnnouncementResponse>,
}

impl From<Navigation> for NavigationResponse {
    fn from(navigation: Navigation) -> Self {
        Self {
            categories: navigation.categories.into_iter().map(Into::into).collect(),
            announcement: navigation.announcement.map(Into::into),
        }
    }
}

/// Navigation Handler
///
/// Category menu and announcement bar. Content API failures yield empty values, never an error.
#[endpoint(
    tags("content"),
    summary = "Header and footer navigation",
    responses(
        (status_code = StatusCode::OK, description = "Navigation data"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<NavigationResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let navigation = Navigation::load(state.app.content.as_ref()).await;

    Ok(Json(navigation.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::content::{ContentServiceError, MockContentService};

    use crate::test_helpers::content_service;

    use super::*;

    fn make_service(content: MockContentService) -> Service {
        content_service(content, Router::with_path("api/navigation").get(handler))
    }

    #[tokio::test]
    async fn test_navigation_returns_categories_and_announcement() -> TestResult {
        let mut content = MockContentService::new();

        content.expect_categories().once().return_once(|| {
            Ok(vec![Category {
                name: "Sarees".to_string(),
                slug: "sarees".to_string(),
            }])
        });

        content.expect_active_announcement().once().return_once(|| {
            Ok(Some(Announcement {
                text: "Free shipping over ₹999".to_string(),
                link: None,
            }))
        });

        let mut res = TestClient::get("http://example.com/api/navigation")
            .send(&make_service(content))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: NavigationResponse = res.take_json().await?;

        assert_eq!(
            body.categories,
            vec![CategoryResponse {
                name: "Sarees".to_string(),
                slug: "sarees".to_string(),
            }]
        );
        assert_eq!(
            body.announcement,
            Some(AnnouncementResponse {
                text: "Free shipping over ₹999".to_string(),
                link: None,
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_navigation_degrades_when_content_api_fails() -> TestResult {
        let mut content = MockContentService::new();

        content.expect_categories().once().return_once(|| {
            Err(ContentServiceError::UnexpectedResponse(
                "GET categories failed with status 502".to_string(),
            ))
        });

        content.expect_active_announcement().once().return_once(|| {
            Err(ContentServiceError::UnexpectedResponse(
                "GET announcements/active failed with status 502".to_string(),
            ))
        });

        let mut res = TestClient::get("http://example.com/api/navigation")
            .send(&make_service(content))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: NavigationResponse = res.take_json().await?;

        assert!(body.categories.is_empty());
        assert_eq!(body.announcement, None);

        Ok(())
    }
}
