//! Content models.

use serde::{Deserialize, Serialize};

/// A product category shown in the header and footer menus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name.
    pub name: String,

    /// URL segment under `/categories/`.
    pub slug: String,
}

/// Site-wide announcement bar message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Message text.
    pub text: String,

    /// Optional link target.
    pub link: Option<String>,
}

/// Category as returned by the backend, which names the URL segment either `slug` or `handle`.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoryRecord {
    pub name: String,
    pub slug: Option<String>,
    pub handle: Option<String>,
}

impl CategoryRecord {
    /// `None` when the record has neither a slug nor a handle.
    pub(crate) fn into_category(self) -> Option<Category> {
        let slug = self
            .slug
            .filter(|slug| !slug.trim().is_empty())
            .or(self.handle)
            .filter(|slug| !slug.trim().is_empty())?;

        Some(Category {
            name: self.name,
            slug,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesResponse {
    #[serde(default)]
    pub product_categories: Vec<CategoryRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnnouncementResponse {
    pub announcement: Option<Announcement>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn categories(body: serde_json::Value) -> Result<Vec<Category>, serde_json::Error> {
        let response: CategoriesResponse = serde_json::from_value(body)?;

        Ok(response
            .product_categories
            .into_iter()
            .filter_map(CategoryRecord::into_category)
            .collect())
    }

    #[test]
    fn handle_is_used_when_slug_is_absent() -> TestResult {
        let parsed = categories(json!({
            "product_categories": [
                { "name": "Sarees", "slug": "sarees" },
                { "name": "Kurtas", "handle": "kurtas" },
                { "name": "Dupattas", "slug": "", "handle": "dupattas" },
            ]
        }))?;

        assert_eq!(
            parsed,
            vec![
                Category {
                    name: "Sarees".to_string(),
                    slug: "sarees".to_string(),
                },
                Category {
                    name: "Kurtas".to_string(),
                    slug: "kurtas".to_string(),
                },
                Category {
                    name: "Dupattas".to_string(),
                    slug: "dupattas".to_string(),
                },
            ]
        );

        Ok(())
    }

    #[test]
    fn categories_without_a_slug_are_skipped() -> TestResult {
        let parsed = categories(json!({
            "product_categories": [{ "name": "Orphan" }]
        }))?;

        assert!(parsed.is_empty());

        Ok(())
    }

    #[test]
    fn missing_category_list_is_empty() -> TestResult {
        assert!(categories(json!({}))?.is_empty());

        Ok(())
    }

    #[test]
    fn null_announcement_is_none() -> TestResult {
        let response: AnnouncementResponse =
            serde_json::from_value(json!({ "announcement": null }))?;

        assert_eq!(response.announcement, None);

        Ok(())
    }
}
