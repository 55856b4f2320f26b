// =============================================================================
// Forsaj Web - Legal Page Components
// =============================================================================
// Table of Contents:
// 1. Legal Header
// 2. Intro Banner
// 3. Section Card
// 4. Contact Block
// =============================================================================

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::LogicalSection;
use crate::utils::{is_external_url, mailto_href};

// -----------------------------------------------------------------------------
// 1. Legal Header
// -----------------------------------------------------------------------------

/// Page heading with accent bar.
#[component]
pub fn LegalHeader(#[prop(into)] title: String, #[prop(into)] subtitle: String) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4 mb-10">
            <div class="w-2 h-16 bg-[#FF4D00] shadow-[0_0_15px_rgba(255,77,0,0.4)]"></div>
            <div>
                <h2 class="text-4xl md:text-6xl font-black italic tracking-tighter uppercase leading-none">
                    {title}
                </h2>
                <p class="text-[#FF4D00] font-black italic text-[10px] md:text-xs mt-2 uppercase tracking-[0.3em]">
                    {subtitle}
                </p>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Intro Banner
// -----------------------------------------------------------------------------

/// Intro text with the last-updated stamp.
#[component]
pub fn IntroBanner(
    #[prop(into)] intro: String,
    #[prop(into)] updated_label: String,
    #[prop(into)] updated_date: String,
) -> impl IntoView {
    view! {
        <div class="bg-[#111] border border-white/10 p-6 md:p-8 mb-8 flex flex-col md:flex-row gap-6 md:items-center md:justify-between">
            <div class="flex items-start gap-3">
                <Icon kind=IconKind::Scale size=20 class="text-[#FF4D00] mt-1" />
                <p class="text-gray-300 text-sm md:text-base leading-relaxed">{intro}</p>
            </div>
            <div class="flex items-center gap-2 text-gray-400 text-sm whitespace-nowrap">
                <Icon kind=IconKind::CalendarDays size=16 class="text-[#FF4D00]" />
                <span class="font-bold italic uppercase text-[11px] tracking-wider">
                    {format!("{}: {}", updated_label, updated_date)}
                </span>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Section Card
// -----------------------------------------------------------------------------

/// One numbered section. Unknown icon tokens render no icon.
#[component]
pub fn LegalSectionCard(section: LogicalSection) -> impl IntoView {
    let icon = section.legal_icon();

    view! {
        <article class="bg-[#111] border border-white/5 p-6 md:p-8 rounded-sm">
            <h3 class="text-xl md:text-2xl font-black italic text-[#FF4D00] mb-4 uppercase tracking-tight flex items-center gap-2">
                {icon.map(|icon| view! { <Icon kind=icon size=20 class="text-[#FF4D00]" /> })}
                <span>{section.title}</span>
            </h3>
            // whitespace-pre-line keeps the editor's line breaks
            <p class="text-gray-300 leading-relaxed whitespace-pre-line">{section.body}</p>
        </article>
    }
}

// -----------------------------------------------------------------------------
// 4. Contact Block
// -----------------------------------------------------------------------------

/// Contact details shown below the sections.
#[component]
pub fn ContactBlock(
    #[prop(into)] title: String,
    #[prop(into)] email: String,
    #[prop(into)] website: String,
) -> impl IntoView {
    let mailto = mailto_href(&email);
    let external = is_external_url(&website);
    let website_href = website.clone();

    view! {
        <div class="mt-8 bg-black/40 border border-white/10 p-6 md:p-8 rounded-sm">
            <h4 class="text-white font-black italic uppercase tracking-widest text-sm mb-4">{title}</h4>
            <div class="flex flex-col md:flex-row gap-4 md:gap-8 text-gray-300">
                <a href=mailto class="inline-flex items-center gap-2 hover:text-[#FF4D00] transition-colors">
                    <Icon kind=IconKind::Mail size=16 class="text-[#FF4D00]" />
                    {email}
                </a>
                <a
                    href=website_href
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                    class="inline-flex items-center gap-2 hover:text-[#FF4D00] transition-colors"
                >
                    <Icon kind=IconKind::GLOBE size=16 class="text-[#FF4D00]" />
                    {website}
                </a>
            </div>
        </div>
    }
}
