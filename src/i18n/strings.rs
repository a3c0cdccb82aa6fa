use crate::i18n::Language;

/// All localized user-facing strings for a language
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Site ====================
    /// Short tagline shown under the author's name
    pub site_description: &'static str,

    // ==================== Home Page ====================
    /// `<title>` of the landing page
    pub home_title: &'static str,

    /// `<meta name="description">` of the landing page
    pub home_description: &'static str,

    // ==================== Language Switcher ====================
    /// Accessible label of the language switcher control
    pub language_switcher_label: &'static str,

    // ==================== Footer ====================
    /// Footer text after the copyright year and author
    pub footer_rights: &'static str,
}

impl LanguageStrings {
    pub fn for_language(language: Language) -> &'static LanguageStrings {
        match language.code() {
            "es" => &SPANISH_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    site_description: "Passionate about technology and philosophy",
    home_title: "Links - Jesús Bossa's link library",
    home_description: "Jesús Bossa's link library",
    language_switcher_label: "Change language",
    footer_rights: "All rights reserved.",
};

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    site_description: "Apasionado por la tecnología y la filosofía",
    home_title: "Links - La biblioteca de links de Jesús Bossa",
    home_description: "La biblioteca de links de Jesús Bossa",
    language_switcher_label: "Cambiar idioma",
    footer_rights: "Todos los derechos reservados.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_language_english() {
        let strings = LanguageStrings::for_language(Language::ENGLISH);
        assert_eq!(
            strings.site_description,
            "Passionate about technology and philosophy"
        );
    }

    #[test]
    fn test_for_language_spanish() {
        let strings = LanguageStrings::for_language(Language::SPANISH);
        assert_eq!(
            strings.site_description,
            "Apasionado por la tecnología y la filosofía"
        );
        assert_eq!(
            strings.home_title,
            "Links - La biblioteca de links de Jesús Bossa"
        );
    }

    #[test]
    fn test_every_language_has_strings() {
        for language in Language::all() {
            let strings = LanguageStrings::for_language(language);
            assert!(!strings.site_description.is_empty());
            assert!(!strings.home_title.is_empty());
            assert!(!strings.home_description.is_empty());
            assert!(!strings.language_switcher_label.is_empty());
            assert!(!strings.footer_rights.is_empty());
        }
    }

    #[test]
    fn test_home_titles_start_with_site_name() {
        assert!(ENGLISH_STRINGS.home_title.starts_with("Links"));
        assert!(SPANISH_STRINGS.home_title.starts_with("Links"));
    }
}
