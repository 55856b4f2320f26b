// =============================================================================
// Forsaj Web - Utility Functions
// =============================================================================
// Link helpers for content-supplied URLs.
// =============================================================================

/// Build a `mailto:` href, tolerating an address that already carries the scheme.
pub fn mailto_href(email: &str) -> String {
    let email = email.trim();
    let address = email
        .get(..7)
        .filter(|scheme| scheme.eq_ignore_ascii_case("mailto:"))
        .map(|_| &email[7..])
        .unwrap_or(email);
    format!("mailto:{}", address.trim())
}

/// Whether a link leaves the site and should open in a new tab.
pub fn is_external_url(href: &str) -> bool {
    let href = href.trim_start().to_ascii_lowercase();
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_href() {
        assert_eq!(mailto_href("info@forsaj.az"), "mailto:info@forsaj.az");
        assert_eq!(mailto_href(" info@forsaj.az "), "mailto:info@forsaj.az");
        assert_eq!(mailto_href("MAILTO:info@forsaj.az"), "mailto:info@forsaj.az");
        assert_eq!(mailto_href("mail"), "mailto:mail");
    }

    #[test]
    fn test_is_external_url() {
        assert!(is_external_url("https://forsaj.az"));
        assert!(is_external_url("HTTP://forsaj.az"));
        assert!(is_external_url("//cdn.forsaj.az"));
        assert!(!is_external_url("/terms"));
        assert!(!is_external_url("mailto:info@forsaj.az"));
    }
}
