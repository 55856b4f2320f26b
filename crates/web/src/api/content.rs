// =============================================================================
// Forsaj Web - Site Content API
// =============================================================================

use super::{ApiClient, ApiError};
use crate::content::SitePage;

/// Endpoint serving one CMS page.
pub fn page_endpoint(page_key: &str) -> String {
    format!("/api/site-content/{}", urlencoding::encode(page_key))
}

/// Fetch the sections and texts of one page. A page the CMS has never
/// stored comes back empty so the built-in text is shown.
pub async fn fetch_page(client: &ApiClient, page_key: &str) -> Result<SitePage, ApiError> {
    match client.get::<SitePage>(&page_endpoint(page_key)).await {
        Ok(page) => Ok(page),
        Err(ApiError::NotFound) => {
            log::debug!("No stored content for page {}", page_key);
            Ok(SitePage::default())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_endpoint_encodes_key() {
        assert_eq!(
            page_endpoint("termsofservicepage"),
            "/api/site-content/termsofservicepage"
        );
        assert_eq!(page_endpoint("a b/c"), "/api/site-content/a%20b%2Fc");
    }

    #[test]
    fn test_page_payload_decodes() {
        let json = r#"{
            "sections": [
                { "id": "SECTION_9_TITLE", "value": "Extra" },
                { "id": "SECTION_9_BODY", "value": "Extra body" }
            ],
            "texts": { "PAGE_TITLE": "TERMS" }
        }"#;
        let page: SitePage = serde_json::from_str(json).unwrap();

        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.texts.get("PAGE_TITLE").map(String::as_str), Some("TERMS"));
    }
}
