// =============================================================================
// Forsaj Web - Built-in Terms of Service Text
// =============================================================================
// Shown whenever the CMS has no override for a key.
// =============================================================================

/// CMS page key for the Terms of Service page.
pub const TERMS_PAGE_KEY: &str = "termsofservicepage";

/// Primary site language.
pub const SITE_LOCALE: &str = "az";

/// Text keys of the terms page and their built-in defaults.
pub mod text {
    pub const PAGE_TITLE: (&str, &str) = ("PAGE_TITLE", "XİDMƏT ŞƏRTLƏRİ (TERMS OF SERVICE)");
    pub const PAGE_SUBTITLE: (&str, &str) = ("PAGE_SUBTITLE", "İSTİFADƏ QAYDALARI VƏ HÜQUQİ ŞƏRTLƏR");
    pub const INTRO_TEXT: (&str, &str) = (
        "INTRO_TEXT",
        "forsaj.az platformasından istifadə qaydalarını və hüquqi çərçivəni müəyyən edən əsas şərtlər.",
    );
    pub const UPDATED_LABEL: (&str, &str) = ("UPDATED_LABEL", "Son yenilənmə tarixi");
    pub const UPDATED_DATE: (&str, &str) = ("UPDATED_DATE", "18 Fevral 2026");
    pub const CONTACT_TITLE: (&str, &str) = ("CONTACT_TITLE", "Əlaqə");
    pub const CONTACT_EMAIL: (&str, &str) = ("CONTACT_EMAIL", "info@forsaj.az");
    pub const CONTACT_WEBSITE: (&str, &str) = ("CONTACT_WEBSITE", "https://forsaj.az");
}

/// Default title and body of one numbered section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FallbackSection {
    pub title: &'static str,
    pub body: &'static str,
}

/// Built-in sections, numbered from 1.
pub const TERMS_FALLBACK_SECTIONS: &[FallbackSection] = &[
    FallbackSection {
        title: "1. Qəbul",
        body: "forsaj.az saytından istifadə etməklə siz bu Xidmət Şərtlərini qəbul etmiş olursunuz.",
    },
    FallbackSection {
        title: "2. Xidmətin Təsviri",
        body: "forsaj.az avtomobil, motorsport, off-road və Forsaj icması ilə bağlı məlumat, tədbir və digər rəqəmsal xidmətlər təqdim edir.",
    },
    FallbackSection {
        title: "3. İstifadə Qaydaları",
        body: "İstifadəçi:\n- Saytdan yalnız qanuni məqsədlərlə istifadə etməlidir\n- Digər istifadəçilərin hüquqlarını pozmamalıdır\n- Saytın texniki sisteminə zərər verə biləcək hərəkətlər etməməlidir",
    },
    FallbackSection {
        title: "4. Əqli Mülkiyyət Hüquqları",
        body: "Saytda yerləşdirilən bütün məzmun (mətnlər, şəkillər, videolar, loqo və s.) müəllif hüquqları ilə qorunur və icazəsiz istifadə edilə bilməz.",
    },
    FallbackSection {
        title: "5. Məsuliyyətin Məhdudlaşdırılması",
        body: "Sayt və xidmətlər “olduğu kimi” təqdim olunur. Texniki nasazlıq və ya fasilələrə görə sayt rəhbərliyi məsuliyyət daşımır.",
    },
    FallbackSection {
        title: "6. Dəyişiklik Hüququ",
        body: "Biz bu şərtləri istənilən vaxt dəyişdirmək hüququnu özümüzdə saxlayırıq. Yenilənmiş versiya saytda dərc edildiyi tarixdən qüvvəyə minir.",
    },
    FallbackSection {
        title: "7. Tətbiq Olunan Qanun",
        body: "Bu Xidmət Şərtləri Azərbaycan Respublikasının qanunvericiliyinə uyğun tənzimlənir.",
    },
    FallbackSection {
        title: "8. Əlaqə",
        body: "Email: info@forsaj.az\nVeb sayt: https://forsaj.az",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::normalize::is_contact_title;

    #[test]
    fn test_fallback_sections_are_numbered() {
        assert_eq!(TERMS_FALLBACK_SECTIONS.len(), 8);
        for (index, section) in TERMS_FALLBACK_SECTIONS.iter().enumerate() {
            assert!(section.title.starts_with(&format!("{}. ", index + 1)));
            assert!(!section.body.trim().is_empty());
        }
    }

    #[test]
    fn test_only_last_fallback_is_contact() {
        let contact: Vec<_> = TERMS_FALLBACK_SECTIONS
            .iter()
            .enumerate()
            .filter(|(_, s)| is_contact_title(s.title))
            .map(|(i, _)| i + 1)
            .collect();
        assert_eq!(contact, vec![8]);
    }
}
