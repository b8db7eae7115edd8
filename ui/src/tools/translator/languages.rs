//! Target languages offered by the translator. Source language is always English.

pub const DEFAULT_TARGET: &str = "es";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "ru", name: "Russian" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "nl", name: "Dutch" },
];

pub fn find(code: &str) -> Option<&'static Language> {
    LANGUAGES
        .iter()
        .find(|lang| lang.code.eq_ignore_ascii_case(code.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_is_listed() {
        assert_eq!(find(DEFAULT_TARGET).map(|l| l.name), Some("Spanish"));
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find("FR").map(|l| l.code), Some("fr"));
        assert!(find("xx").is_none());
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = LANGUAGES.iter().map(|l| l.code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), LANGUAGES.len());
    }
}
