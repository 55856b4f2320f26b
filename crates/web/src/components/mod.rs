// =============================================================================
// Forsaj Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Icons
// 2. Legal Page Components
// =============================================================================

pub mod icons;
pub mod legal;

pub use icons::{Icon, IconKind};
pub use legal::{ContactBlock, IntroBanner, LegalHeader, LegalSectionCard};
