// =============================================================================
// Forsaj Web - Inline SVG Icons
// =============================================================================
// Lucide outline glyphs, 24x24 viewBox, stroked with currentColor.
// =============================================================================

use leptos::prelude::*;

use crate::content::LegalIcon;

/// Every glyph the site can draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Legal(LegalIcon),
    Scale,
    CalendarDays,
    Mail,
}

impl IconKind {
    pub const GLOBE: IconKind = IconKind::Legal(LegalIcon::Globe);

    /// SVG child markup for the glyph.
    pub fn paths(&self) -> &'static str {
        match self {
            IconKind::Legal(LegalIcon::FileText) => concat!(
                r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/>"#,
                r#"<path d="M14 2v4a2 2 0 0 0 2 2h4"/>"#,
                r#"<path d="M10 9H8"/><path d="M16 13H8"/><path d="M16 17H8"/>"#,
            ),
            IconKind::Legal(LegalIcon::Shield) => concat!(
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#,
            ),
            IconKind::Legal(LegalIcon::ShieldCheck) => concat!(
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#,
                r#"<path d="m9 12 2 2 4-4"/>"#,
            ),
            IconKind::Legal(LegalIcon::Users) => concat!(
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>"#,
                r#"<circle cx="9" cy="7" r="4"/>"#,
                r#"<path d="M22 21v-2a4 4 0 0 0-3-3.87"/>"#,
                r#"<path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
            ),
            IconKind::Legal(LegalIcon::Globe) => concat!(
                r#"<circle cx="12" cy="12" r="10"/>"#,
                r#"<path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/>"#,
                r#"<path d="M2 12h20"/>"#,
            ),
            IconKind::Legal(LegalIcon::Leaf) => concat!(
                r#"<path d="M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z"/>"#,
                r#"<path d="M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12"/>"#,
            ),
            IconKind::Legal(LegalIcon::Zap) => concat!(
                r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#,
            ),
            IconKind::Scale => concat!(
                r#"<path d="m16 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z"/>"#,
                r#"<path d="m2 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z"/>"#,
                r#"<path d="M7 21h10"/><path d="M12 3v18"/>"#,
                r#"<path d="M3 7h2c2 0 5-1 7-2 2 1 5 2 7 2h2"/>"#,
            ),
            IconKind::CalendarDays => concat!(
                r#"<path d="M8 2v4"/><path d="M16 2v4"/>"#,
                r#"<rect width="18" height="18" x="3" y="4" rx="2"/>"#,
                r#"<path d="M3 10h18"/>"#,
                r#"<path d="M8 14h.01"/><path d="M12 14h.01"/><path d="M16 14h.01"/>"#,
                r#"<path d="M8 18h.01"/><path d="M12 18h.01"/><path d="M16 18h.01"/>"#,
            ),
            IconKind::Mail => concat!(
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
                r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            ),
        }
    }
}

impl From<LegalIcon> for IconKind {
    fn from(icon: LegalIcon) -> Self {
        IconKind::Legal(icon)
    }
}

/// Inline SVG icon.
#[component]
pub fn Icon(
    #[prop(into)] kind: IconKind,
    #[prop(default = 24)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
            inner_html=kind.paths()
        ></svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_paths() {
        let kinds = LegalIcon::ALL
            .into_iter()
            .map(IconKind::from)
            .chain([IconKind::Scale, IconKind::CalendarDays, IconKind::Mail]);

        for kind in kinds {
            let paths = kind.paths();
            assert!(paths.starts_with('<') && paths.ends_with("/>"), "{kind:?}");
        }
    }
}
