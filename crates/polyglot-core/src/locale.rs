//! Locale Code Table: internal UI locale ids to backend language codes.
//!
//! Regional variants collapse to their base language (`en-GB` -> `en`) and a
//! few codes use the backend's legacy spelling (`he` -> `iw`, `fil` -> `tl`).

/// Every locale the app ships, in menu order. The first entry is the base locale.
pub const LOCALE_CODES: &[(&str, &str)] = &[
    ("ko", "ko"),
    ("en", "en"),
    ("ja", "ja"),
    ("zh", "zh-cn"),
    ("zh-TW", "zh-tw"),
    ("vi", "vi"),
    ("th", "th"),
    ("id", "id"),
    ("ms", "ms"),
    ("fil", "tl"),
    ("hi", "hi"),
    ("bn", "bn"),
    ("ur", "ur"),
    ("ta", "ta"),
    ("te", "te"),
    ("mr", "mr"),
    ("kn", "kn"),
    ("gu", "gu"),
    ("ml", "ml"),
    ("si", "si"),
    ("ne", "ne"),
    ("my", "my"),
    ("km", "km"),
    ("lo", "lo"),
    ("mn", "mn"),
    ("kk", "kk"),
    ("uz", "uz"),
    ("az", "az"),
    ("hy", "hy"),
    ("ka", "ka"),
    ("es", "es"),
    ("fr", "fr"),
    ("de", "de"),
    ("it", "it"),
    ("pt", "pt"),
    ("pt-BR", "pt"),
    ("ru", "ru"),
    ("pl", "pl"),
    ("uk", "uk"),
    ("nl", "nl"),
    ("sv", "sv"),
    ("no", "no"),
    ("da", "da"),
    ("fi", "fi"),
    ("cs", "cs"),
    ("sk", "sk"),
    ("hu", "hu"),
    ("ro", "ro"),
    ("bg", "bg"),
    ("el", "el"),
    ("tr", "tr"),
    ("hr", "hr"),
    ("sr", "sr"),
    ("sl", "sl"),
    ("lt", "lt"),
    ("lv", "lv"),
    ("et", "et"),
    ("sq", "sq"),
    ("mk", "mk"),
    ("bs", "bs"),
    ("is", "is"),
    ("ga", "ga"),
    ("cy", "cy"),
    ("mt", "mt"),
    ("be", "be"),
    ("gl", "gl"),
    ("eu", "eu"),
    ("ca", "ca"),
    ("ar", "ar"),
    ("he", "iw"),
    ("fa", "fa"),
    ("sw", "sw"),
    ("am", "am"),
    ("ha", "ha"),
    ("yo", "yo"),
    ("ig", "ig"),
    ("zu", "zu"),
    ("xh", "xh"),
    ("af", "af"),
    ("so", "so"),
    ("mg", "mg"),
    ("sn", "sn"),
    ("ny", "ny"),
    ("st", "st"),
    ("ps", "ps"),
    ("ku", "ku"),
    ("en-US", "en"),
    ("en-GB", "en"),
    ("en-AU", "en"),
    ("en-CA", "en"),
    ("es-MX", "es"),
    ("es-AR", "es"),
    ("fr-CA", "fr"),
    ("ht", "ht"),
];

/// Widely used locales offered as the quick batch, with display names.
pub const CURATED_LOCALES: &[(&str, &str)] = &[
    ("en", "English"),
    ("ja", "Japanese"),
    ("zh", "Chinese (Simplified)"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
];

/// Backend language code for `locale`.
///
/// Unknown locales are passed through unchanged. The result is not checked
/// against what the backend supports.
pub fn external_code(locale: &str) -> &str {
    LOCALE_CODES
        .iter()
        .find(|(code, _)| *code == locale)
        .map(|(_, external)| *external)
        .unwrap_or(locale)
}

/// Whether `locale` has an entry in [`LOCALE_CODES`].
pub fn is_known(locale: &str) -> bool {
    LOCALE_CODES.iter().any(|(code, _)| *code == locale)
}

/// All known locale codes in table order.
pub fn known_locales() -> impl Iterator<Item = &'static str> {
    LOCALE_CODES.iter().map(|(code, _)| *code)
}

/// Display name used in status lines.
pub fn display_name(locale: &str) -> String {
    CURATED_LOCALES
        .iter()
        .find(|(code, _)| *code == locale)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| format!("Language-{locale}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_regional_variants_collapse() {
        assert_eq!(external_code("en-US"), "en");
        assert_eq!(external_code("en-GB"), "en");
        assert_eq!(external_code("pt-BR"), "pt");
        assert_eq!(external_code("es-MX"), "es");
        assert_eq!(external_code("fr-CA"), "fr");
    }

    #[test]
    fn test_backend_renames() {
        assert_eq!(external_code("he"), "iw");
        assert_eq!(external_code("fil"), "tl");
        assert_eq!(external_code("zh"), "zh-cn");
        assert_eq!(external_code("zh-TW"), "zh-tw");
    }

    #[test]
    fn test_unknown_locale_passes_through() {
        assert!(!is_known("tlh"));
        assert_eq!(external_code("tlh"), "tlh");
        assert_eq!(external_code(""), "");
    }

    #[test]
    fn test_table_has_no_duplicate_locales() {
        let unique: HashSet<&str> = known_locales().collect();
        assert_eq!(unique.len(), LOCALE_CODES.len());
        assert_eq!(LOCALE_CODES.len(), 94);
        assert_eq!(known_locales().next(), Some("ko"));
    }

    #[test]
    fn test_curated_locales_are_known() {
        for (code, _) in CURATED_LOCALES {
            assert!(is_known(code), "{code} missing from LOCALE_CODES");
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("ja"), "Japanese");
        assert_eq!(display_name("sw"), "Language-sw");
    }
}
