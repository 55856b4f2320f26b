// =============================================================================
// Forsaj Web - Heading Normalization
// =============================================================================
// Canonical ASCII tokens for matching section headings. Tokens are never
// displayed.
// =============================================================================

use unicode_normalization::UnicodeNormalization;

use super::LogicalSection;

/// Azerbaijani letters folded to their plain ASCII counterpart.
const LETTER_FOLDS: [(char, char); 7] = [
    ('ə', 'e'),
    ('ı', 'i'),
    ('ö', 'o'),
    ('ü', 'u'),
    ('ğ', 'g'),
    ('ş', 's'),
    ('ç', 'c'),
];

/// Token fragments marking the contact heading (Azerbaijani and English).
const CONTACT_MARKERS: [&str; 2] = ["elaqe", "contact"];

/// Lowercase following Azerbaijani casing: `I` → `ı`, `İ` → `i`.
fn to_az_lowercase(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(ch.to_lowercase()),
        }
    }
    out
}

fn is_combining_mark(ch: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&ch)
}

/// Reduce `value` to lowercase ASCII letters and digits.
pub fn normalize_token(value: &str) -> String {
    to_az_lowercase(value)
        .chars()
        .map(|ch| {
            LETTER_FOLDS
                .iter()
                .find(|(from, _)| *from == ch)
                .map(|(_, to)| *to)
                .unwrap_or(ch)
        })
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        .collect()
}

/// Whether a heading denotes the contact section.
pub fn is_contact_title(title: &str) -> bool {
    let token = normalize_token(title);
    CONTACT_MARKERS.iter().any(|marker| token.contains(marker))
}

/// Sections for the main content list; contact details render separately.
pub fn content_sections(sections: Vec<LogicalSection>) -> Vec<LogicalSection> {
    sections
        .into_iter()
        .filter(|section| !is_contact_title(&section.title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_azerbaijani_letters() {
        assert_eq!(normalize_token("Əlaqə"), "elaqe");
        assert_eq!(normalize_token("8. Əlaqə"), "8elaqe");
        assert_eq!(normalize_token("XİDMƏT ŞƏRTLƏRİ"), "xidmetsertleri");
        assert_eq!(normalize_token("İstifadə Qaydaları"), "istifadeqaydalari");
        assert_eq!(normalize_token("ÇÖĞÜŞ"), "cogus");
    }

    #[test]
    fn test_normalize_strips_other_diacritics() {
        assert_eq!(normalize_token("Café Résumé"), "caferesume");
        assert_eq!(normalize_token("Ñandú"), "nandu");
    }

    #[test]
    fn test_normalize_drops_non_alphanumerics() {
        assert_eq!(normalize_token("Contact Us!"), "contactus");
        assert_eq!(normalize_token("  -- 2. Qəbul -- "), "2qebul");
        assert_eq!(normalize_token("Ω Δ ✓"), "");
        assert_eq!(normalize_token(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["Əlaqə", "Contact Us", "5. Məsuliyyətin Məhdudlaşdırılması", "İİıı"] {
            let once = normalize_token(input);
            assert_eq!(normalize_token(&once), once);
        }
    }

    #[test]
    fn test_contact_titles() {
        assert!(is_contact_title("Əlaqə"));
        assert!(is_contact_title("8. ƏLAQƏ"));
        assert!(is_contact_title("Contact Us"));
        assert!(is_contact_title("CONTACTS"));
        assert!(!is_contact_title("1. Qəbul"));
        assert!(!is_contact_title("Contract terms"));
        assert!(!is_contact_title(""));
    }

    #[test]
    fn test_content_sections_filters_contact() {
        let sections = vec![
            LogicalSection::new("1. Qəbul", "", "a"),
            LogicalSection::new("Contact Us", "", "b"),
            LogicalSection::new("8. Əlaqə", "Globe", "c"),
            LogicalSection::new("9. Extra", "", "d"),
        ];
        let titles: Vec<_> = content_sections(sections)
            .into_iter()
            .map(|s| s.title)
            .collect();

        assert_eq!(titles, vec!["1. Qəbul", "9. Extra"]);
    }
}
