// =============================================================================
// Forsaj Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="bg-[#0A0A0A] min-h-screen flex items-center justify-center text-white">
            <div class="text-center">
                <span class="text-[#FF4D00] font-black italic text-6xl">"404"</span>
                <h1 class="mt-4 text-2xl font-black italic uppercase">"Səhifə tapılmadı"</h1>
                <a href="/terms" class="mt-6 inline-block text-gray-300 hover:text-[#FF4D00]">
                    "Xidmət Şərtləri"
                </a>
            </div>
        </div>
    }
}
