// =============================================================================
// Forsaj Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Html};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::content::defaults::SITE_LOCALE;
use crate::content::TERMS_PAGE_KEY;
use crate::pages::{NotFoundPage, TermsPage};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide global app state
    let app_state = AppState::new();

    // Pages render built-in text until the CMS answers
    app_state.load_page(TERMS_PAGE_KEY);

    provide_context(app_state);

    // -------------------------------------------------------------------------
    // 3. Router Configuration
    // -------------------------------------------------------------------------

    view! {
        <Html attr:lang=SITE_LOCALE />
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/terms" /> } />

                // Legal pages
                <Route path=path!("/terms") view=TermsPage />
                <Route path=path!("/terms-of-service") view=TermsPage />
            </Routes>
        </Router>
    }
}
