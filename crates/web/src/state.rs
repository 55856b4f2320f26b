// =============================================================================
// Forsaj Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Configuration
// 3. App State
// 4. Content Loading
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{fetch_page, ApiClient};
use crate::content::SiteContent;

// -----------------------------------------------------------------------------
// 2. Configuration
// -----------------------------------------------------------------------------

const DEVELOPMENT_API_URL: &str = "http://localhost:7000";
const PRODUCTION_API_URL: &str = "https://api.forsaj.az";

/// Pick the content API base URL. An explicit override wins, otherwise the
/// build environment decides.
pub fn api_url_for(environment: Option<&str>, override_url: Option<&str>) -> String {
    if let Some(url) = override_url.map(str::trim).filter(|url| !url.is_empty()) {
        return url.to_string();
    }

    match environment.unwrap_or("production") {
        "development" => DEVELOPMENT_API_URL.to_string(),
        // Production or staging use the production API
        _ => PRODUCTION_API_URL.to_string(),
    }
}

// -----------------------------------------------------------------------------
// 3. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    /// API base URL.
    pub api_url: String,

    /// Latest CMS snapshot. Starts empty, so pages show built-in text.
    pub content: RwSignal<SiteContent>,
}

impl AppState {
    /// Create a new app state instance.
    pub fn new() -> Self {
        let api_url = api_url_for(option_env!("ENVIRONMENT"), option_env!("API_URL"));
        log::debug!("Content API: {}", api_url);

        Self {
            api_url,
            content: RwSignal::new(SiteContent::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 4. Content Loading
// -----------------------------------------------------------------------------

impl AppState {
    /// Fetch one page from the CMS and merge it into the snapshot. On failure
    /// the previous snapshot stays in place and pages keep their built-in text.
    pub fn load_page(&self, page_key: &'static str) {
        let client = ApiClient::new(&self.api_url);
        let content = self.content;

        spawn_local(async move {
            match fetch_page(&client, page_key).await {
                Ok(page) => {
                    log::info!(
                        "Loaded {} content ({} records)",
                        page_key,
                        page.sections.len()
                    );
                    content.update(|snapshot| snapshot.insert_page(page_key, page));
                }
                Err(e) => log::warn!("Failed to load {} content: {}", page_key, e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_for_environment() {
        assert_eq!(api_url_for(Some("development"), None), DEVELOPMENT_API_URL);
        assert_eq!(api_url_for(Some("staging"), None), PRODUCTION_API_URL);
        assert_eq!(api_url_for(None, None), PRODUCTION_API_URL);
    }

    #[test]
    fn test_api_url_override() {
        assert_eq!(
            api_url_for(Some("development"), Some("https://cms.example.az")),
            "https://cms.example.az"
        );
        assert_eq!(api_url_for(Some("development"), Some("  ")), DEVELOPMENT_API_URL);
    }

    #[test]
    fn test_new_state_starts_with_empty_snapshot() {
        let state = AppState::new();
        assert_eq!(state.content.get_untracked(), SiteContent::new());
        assert!(!state.api_url.is_empty());
    }
}
