// =============================================================================
// Forsaj Web - Site Content Model
// =============================================================================
// Table of Contents:
// 1. Raw Records
// 2. Content Snapshot
// 3. Content Source Trait
// 4. Page Scope
// =============================================================================

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

// -----------------------------------------------------------------------------
// 1. Raw Records
// -----------------------------------------------------------------------------

/// A single editor-supplied entry, e.g. `{ "id": "SECTION_2_BODY", "value": "..." }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
}

impl SectionRecord {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// The CMS sends `null` for cleared fields.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Everything the backend stores for one page.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SitePage {
    /// Raw section records, in backend order.
    #[serde(default)]
    pub sections: Vec<SectionRecord>,

    /// Localized text overrides keyed by text key.
    #[serde(default)]
    pub texts: BTreeMap<String, String>,
}

impl SitePage {
    pub fn with_sections(sections: Vec<SectionRecord>) -> Self {
        Self {
            sections,
            ..Default::default()
        }
    }

    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.texts.insert(key.into(), value.into());
        self
    }
}

// -----------------------------------------------------------------------------
// 2. Content Snapshot
// -----------------------------------------------------------------------------

/// Snapshot of site content for every loaded page.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteContent {
    #[serde(default)]
    pub pages: BTreeMap<String, SitePage>,
}

impl SiteContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this snapshot with `page` stored under `page_key`.
    pub fn with_page(mut self, page_key: impl Into<String>, page: SitePage) -> Self {
        self.pages.insert(page_key.into(), page);
        self
    }

    /// Replace a single page in place.
    pub fn insert_page(&mut self, page_key: impl Into<String>, page: SitePage) {
        self.pages.insert(page_key.into(), page);
    }

    /// Accessor bound to one page, the way pages consume content.
    pub fn scope<'a>(&'a self, page_key: &'a str) -> PageScope<'a> {
        PageScope {
            content: self,
            page_key,
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Content Source Trait
// -----------------------------------------------------------------------------

/// Read-only access to pages and localized text.
pub trait ContentSource {
    /// Raw page data, if the page is known.
    fn page(&self, page_key: &str) -> Option<&SitePage>;

    /// Localized text for `key`, or `fallback` when unset or blank.
    fn text(&self, key: &str, fallback: &str) -> String;
}

// -----------------------------------------------------------------------------
// 4. Page Scope
// -----------------------------------------------------------------------------

/// Content accessor scoped to a single page key.
#[derive(Clone, Copy, Debug)]
pub struct PageScope<'a> {
    content: &'a SiteContent,
    page_key: &'a str,
}

impl<'a> PageScope<'a> {
    pub fn page_key(&self) -> &str {
        self.page_key
    }
}

impl ContentSource for PageScope<'_> {
    fn page(&self, page_key: &str) -> Option<&SitePage> {
        self.content.pages.get(page_key)
    }

    fn text(&self, key: &str, fallback: &str) -> String {
        self.content
            .pages
            .get(self.page_key)
            .and_then(|page| page.texts.get(key))
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_falls_back_when_missing_or_blank() {
        let content = SiteContent::new().with_page(
            "about",
            SitePage::default()
                .with_text("TITLE", "  Haqqımızda ")
                .with_text("BLANK", "   "),
        );
        let scope = content.scope("about");

        assert_eq!(scope.text("TITLE", "x"), "Haqqımızda");
        assert_eq!(scope.text("BLANK", "fallback"), "fallback");
        assert_eq!(scope.text("MISSING", "fallback"), "fallback");
    }

    #[test]
    fn test_scope_of_unknown_page() {
        let content = SiteContent::new();
        let scope = content.scope("nowhere");

        assert_eq!(scope.page_key(), "nowhere");
        assert!(scope.page("nowhere").is_none());
        assert_eq!(scope.text("PAGE_TITLE", "Default"), "Default");
    }

    #[test]
    fn test_text_is_scoped_to_page() {
        let content = SiteContent::new()
            .with_page("a", SitePage::default().with_text("K", "from a"))
            .with_page("b", SitePage::default());

        assert_eq!(content.scope("a").text("K", "-"), "from a");
        assert_eq!(content.scope("b").text("K", "-"), "-");
    }

    #[test]
    fn test_deserialize_null_fields() {
        let json = r#"{
            "pages": {
                "termsofservicepage": {
                    "sections": [
                        { "id": "SECTION_1_TITLE", "value": null },
                        { "value": "orphan" }
                    ]
                }
            }
        }"#;
        let content: SiteContent = serde_json::from_str(json).unwrap();
        let scope = content.scope("termsofservicepage");
        let sections = &scope.page("termsofservicepage").unwrap().sections;

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0], SectionRecord::new("SECTION_1_TITLE", ""));
        assert_eq!(sections[1], SectionRecord::new("", "orphan"));
    }
}
