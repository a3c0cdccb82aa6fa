//! Static site constants and per-language head metadata.

use crate::i18n::{Language, LanguageStrings};
use serde::Serialize;

/// Site-wide identity.
#[derive(Debug, Clone, Copy)]
pub struct Site {
    pub name: &'static str,
    pub author: &'static str,
    pub email: &'static str,
    pub image: &'static str,
}

/// A link shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Social {
    pub name: &'static str,
    pub href: &'static str,
}

pub const SITE: Site = Site {
    name: "Links",
    author: "Jesús Bossa",
    email: "x@jesusbossa.dev",
    image: "https://github.com/makinox/storageGarage/blob/main/images/general/me.jpeg?raw=true",
};

pub const SOCIALS: [Social; 4] = [
    Social {
        name: "instagram",
        href: "https://www.instagram.com/jesusbossa.dev",
    },
    Social {
        name: "github",
        href: "https://github.com/makinox",
    },
    Social {
        name: "linkedin",
        href: "https://www.linkedin.com/in/jesusbossa",
    },
    Social {
        name: "home",
        href: "https://jesusbossa.dev",
    },
];

/// Everything the page head, header and footer need for one language.
#[derive(Debug, Clone, Serialize)]
pub struct SiteMetadata {
    pub language: Language,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tagline: &'static str,
    pub author: &'static str,
    pub email: &'static str,
    pub image: &'static str,
    pub footer: &'static str,
    pub language_switcher_label: &'static str,
    pub socials: &'static [Social],
}

impl SiteMetadata {
    pub fn for_language(language: Language) -> Self {
        let strings = LanguageStrings::for_language(language);

        Self {
            language,
            name: SITE.name,
            title: strings.home_title,
            description: strings.home_description,
            tagline: strings.site_description,
            author: SITE.author,
            email: SITE.email,
            image: SITE.image,
            footer: strings.footer_rights,
            language_switcher_label: strings.language_switcher_label,
            socials: &SOCIALS,
        }
    }
}
