// =============================================================================
// Forsaj Web - Site Content
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// 3. Logical Section
// =============================================================================
// Turns CMS snapshots into display-ready page data. Everything in here is a
// pure function of the snapshot it is given.
// =============================================================================

pub mod defaults;
pub mod icons;
pub mod key;
pub mod model;
pub mod normalize;
pub mod resolve;

pub use defaults::{FallbackSection, TERMS_FALLBACK_SECTIONS, TERMS_PAGE_KEY};
pub use icons::{resolve_legal_icon, LegalIcon};
pub use key::{SectionField, SectionKey};
pub use model::{ContentSource, PageScope, SectionRecord, SiteContent, SitePage};
pub use normalize::{content_sections, is_contact_title, normalize_token};
pub use resolve::{first_non_empty, resolve_sections};

// -----------------------------------------------------------------------------
// 3. Logical Section
// -----------------------------------------------------------------------------

/// A resolved section ready for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogicalSection {
    pub title: String,
    /// Raw icon token from the CMS; may not name a known icon.
    pub icon: String,
    pub body: String,
}

impl LogicalSection {
    pub fn new(title: impl Into<String>, icon: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            body: body.into(),
        }
    }

    pub fn legal_icon(&self) -> Option<LegalIcon> {
        resolve_legal_icon(&self.icon)
    }
}
