// =============================================================================
// Forsaj Web - Terms of Service Page
// =============================================================================
// Table of Contents:
// 1. Page Model
// 2. Page Component
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{ContactBlock, IntroBanner, LegalHeader, LegalSectionCard};
use crate::content::defaults::text;
use crate::content::{
    content_sections, resolve_sections, ContentSource, LogicalSection, PageScope,
    TERMS_FALLBACK_SECTIONS, TERMS_PAGE_KEY,
};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. Page Model
// -----------------------------------------------------------------------------

/// Everything the terms page displays, derived from one content snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct TermsPageModel {
    pub title: String,
    pub subtitle: String,
    pub intro: String,
    pub updated_label: String,
    pub updated_date: String,
    /// Sections for the main list, contact section excluded.
    pub sections: Vec<LogicalSection>,
    pub contact_title: String,
    pub contact_email: String,
    pub contact_website: String,
}

impl TermsPageModel {
    pub fn build(scope: &PageScope<'_>) -> Self {
        let get = |(key, fallback): (&str, &str)| scope.text(key, fallback);

        let sections = resolve_sections(scope, scope.page_key(), TERMS_FALLBACK_SECTIONS);

        Self {
            title: get(text::PAGE_TITLE),
            subtitle: get(text::PAGE_SUBTITLE),
            intro: get(text::INTRO_TEXT),
            updated_label: get(text::UPDATED_LABEL),
            updated_date: get(text::UPDATED_DATE),
            sections: content_sections(sections),
            contact_title: get(text::CONTACT_TITLE),
            contact_email: get(text::CONTACT_EMAIL),
            contact_website: get(text::CONTACT_WEBSITE),
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Page Component
// -----------------------------------------------------------------------------

#[component]
pub fn TermsPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let content = app_state.content;

    let model = Memo::new(move |_| {
        content.with(|snapshot| TermsPageModel::build(&snapshot.scope(TERMS_PAGE_KEY)))
    });

    view! {
        <Title text=move || model.with(|m| m.title.clone()) />
        <div class="bg-[#0A0A0A] min-h-screen py-16 px-6 lg:px-20 text-white">
            <div class="max-w-6xl mx-auto">
                {move || {
                    let m = model.get();
                    view! {
                        <LegalHeader title=m.title subtitle=m.subtitle />
                        <IntroBanner
                            intro=m.intro
                            updated_label=m.updated_label
                            updated_date=m.updated_date
                        />
                        <div class="space-y-4">
                            {m.sections
                                .into_iter()
                                .map(|section| view! { <LegalSectionCard section=section /> })
                                .collect_view()}
                        </div>
                        <ContactBlock
                            title=m.contact_title
                            email=m.contact_email
                            website=m.contact_website
                        />
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{SectionRecord, SiteContent, SitePage};

    fn build(page: Option<SitePage>) -> TermsPageModel {
        let mut content = SiteContent::new();
        if let Some(page) = page {
            content.insert_page(TERMS_PAGE_KEY, page);
        }
        TermsPageModel::build(&content.scope(TERMS_PAGE_KEY))
    }

    #[test]
    fn test_defaults_without_content() {
        let model = build(None);

        assert_eq!(model.title, "XİDMƏT ŞƏRTLƏRİ (TERMS OF SERVICE)");
        assert_eq!(model.updated_date, "18 Fevral 2026");
        assert_eq!(model.sections.len(), 7);
        assert_eq!(model.sections[0].title, "1. Qəbul");
        assert_eq!(model.sections[6].title, "7. Tətbiq Olunan Qanun");
        assert!(model.sections.iter().all(|s| s.icon.is_empty()));
        assert_eq!(model.contact_title, "Əlaqə");
        assert_eq!(model.contact_email, "info@forsaj.az");
        assert_eq!(model.contact_website, "https://forsaj.az");
    }

    #[test]
    fn test_extra_dynamic_section_is_appended() {
        let model = build(Some(SitePage::with_sections(vec![
            SectionRecord::new("SECTION_9_TITLE", "Extra"),
            SectionRecord::new("SECTION_9_BODY", "Extra body"),
        ])));

        assert_eq!(model.sections.len(), 8);
        assert_eq!(model.sections[7], LogicalSection::new("Extra", "", "Extra body"));
        assert_eq!(model.sections[7].legal_icon(), None);
    }

    #[test]
    fn test_renamed_contact_section_is_still_excluded() {
        let model = build(Some(SitePage::with_sections(vec![
            SectionRecord::new("SECTION_8_TITLE", "Contact Us"),
            SectionRecord::new("SECTION_2_TITLE", "Əlaqə vasitələri"),
        ])));

        assert_eq!(model.sections.len(), 6);
        assert!(model.sections.iter().all(|s| s.title != "Contact Us"));
    }

    #[test]
    fn test_page_texts_override_defaults() {
        let model = build(Some(
            SitePage::default()
                .with_text("PAGE_TITLE", "TERMS OF SERVICE")
                .with_text("CONTACT_EMAIL", "legal@forsaj.az")
                .with_text("SECTION_1_TITLE", "1. Acceptance"),
        ));

        assert_eq!(model.title, "TERMS OF SERVICE");
        assert_eq!(model.subtitle, "İSTİFADƏ QAYDALARI VƏ HÜQUQİ ŞƏRTLƏR");
        assert_eq!(model.contact_email, "legal@forsaj.az");
        assert_eq!(model.sections[0].title, "1. Acceptance");
    }

    #[test]
    fn test_icons_resolve_from_records() {
        let model = build(Some(SitePage::with_sections(vec![
            SectionRecord::new("SECTION_1_ICON", " shieldcheck "),
            SectionRecord::new("SECTION_2_ICON", "unknown-icon"),
        ])));

        assert_eq!(
            model.sections[0].legal_icon(),
            Some(crate::content::LegalIcon::ShieldCheck)
        );
        assert_eq!(model.sections[1].icon, "unknown-icon");
        assert_eq!(model.sections[1].legal_icon(), None);
    }
}
