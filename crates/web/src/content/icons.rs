// =============================================================================
// Forsaj Web - Legal Icon Registry
// =============================================================================

/// Icons an editor may attach to a legal section via `SECTION_<n>_ICON`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegalIcon {
    FileText,
    Shield,
    ShieldCheck,
    Users,
    Globe,
    Leaf,
    Zap,
}

impl LegalIcon {
    /// Registry, in display order.
    pub const ALL: [LegalIcon; 7] = [
        LegalIcon::FileText,
        LegalIcon::Shield,
        LegalIcon::ShieldCheck,
        LegalIcon::Users,
        LegalIcon::Globe,
        LegalIcon::Leaf,
        LegalIcon::Zap,
    ];

    /// Name editors type into the CMS.
    pub fn name(&self) -> &'static str {
        match self {
            LegalIcon::FileText => "FileText",
            LegalIcon::Shield => "Shield",
            LegalIcon::ShieldCheck => "ShieldCheck",
            LegalIcon::Users => "Users",
            LegalIcon::Globe => "Globe",
            LegalIcon::Leaf => "Leaf",
            LegalIcon::Zap => "Zap",
        }
    }
}

/// Resolve a free-form token to a registered icon. Blank and unknown tokens
/// resolve to `None`.
pub fn resolve_legal_icon(token: &str) -> Option<LegalIcon> {
    let normalized = token.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    LegalIcon::ALL
        .into_iter()
        .find(|icon| icon.name().to_lowercase() == normalized)
}
