// =============================================================================
// Forsaj Web - Page Components
// =============================================================================

pub mod not_found;
pub mod terms;

pub use not_found::NotFoundPage;
pub use terms::{TermsPage, TermsPageModel};
