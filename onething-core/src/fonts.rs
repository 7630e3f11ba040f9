//! Web font loading model.
//!
//! Fonts are served by Google Fonts: the document preconnects to the
//! font origins, links the generated CSS2 stylesheet, and declares one
//! CSS custom property per family so the theme's `sans`/`serif` stacks
//! can reference them.

use crate::theme::quote_family;

/// How text renders while its web font is still loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontDisplay {
    Auto,
    Block,
    Swap,
    Fallback,
    Optional,
}

impl FontDisplay {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Block => "block",
            Self::Swap => "swap",
            Self::Fallback => "fallback",
            Self::Optional => "optional",
        }
    }
}

/// A web font family and the CSS custom property it is exposed through.
#[derive(Debug, Clone, Copy)]
pub struct FontFamily {
    pub family: &'static str,
    pub css_variable: &'static str,
    /// Generic fallback used until the family loads.
    pub generic: &'static str,
    pub display: FontDisplay,
}

impl FontFamily {
    /// The `:root` declaration for this family, e.g.
    /// `--font-noto-sans-jp: 'Noto Sans JP', sans-serif`.
    #[must_use]
    pub fn variable_declaration(&self) -> (&'static str, String) {
        (
            self.css_variable,
            format!("{}, {}", quote_family(self.family), self.generic),
        )
    }
}

pub const NOTO_SANS_JP: FontFamily = FontFamily {
    family: "Noto Sans JP",
    css_variable: "--font-noto-sans-jp",
    generic: "sans-serif",
    display: FontDisplay::Swap,
};

pub const NOTO_SERIF_JP: FontFamily = FontFamily {
    family: "Noto Serif JP",
    css_variable: "--font-noto-serif-jp",
    generic: "serif",
    display: FontDisplay::Swap,
};

/// The families every page loads, in stylesheet order.
pub const SITE_FONTS: [FontFamily; 2] = [NOTO_SANS_JP, NOTO_SERIF_JP];

/// An origin the browser should connect to before the stylesheet asks.
#[derive(Debug, Clone, Copy)]
pub struct Preconnect {
    pub href: &'static str,
    /// Font files are fetched in CORS mode; the stylesheet is not.
    pub crossorigin: bool,
}

pub const PRECONNECT: [Preconnect; 2] = [
    Preconnect {
        href: "https://fonts.googleapis.com",
        crossorigin: false,
    },
    Preconnect {
        href: "https://fonts.gstatic.com",
        crossorigin: true,
    },
];

/// Builds the Google Fonts CSS2 stylesheet URL for a set of families.
///
/// Spaces in family names become `+` per the CSS2 endpoint's query
/// syntax. The `display` parameter applies to the whole request, so it
/// is taken from the first family.
#[must_use]
pub fn stylesheet_href(families: &[FontFamily]) -> String {
    let mut href = String::from("https://fonts.googleapis.com/css2");
    let mut separator = '?';
    for font in families {
        href.push(separator);
        separator = '&';
        href.push_str("family=");
        href.push_str(&font.family.replace(' ', "+"));
    }
    if let Some(first) = families.first() {
        href.push(separator);
        href.push_str("display=");
        href.push_str(first.display.as_str());
    }
    href
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_stylesheet_href_requests_both_families() {
        assert_eq!(
            stylesheet_href(&SITE_FONTS),
            "https://fonts.googleapis.com/css2?family=Noto+Sans+JP&family=Noto+Serif+JP&display=swap"
        );
    }

    #[test]
    fn variable_declarations_quote_spaced_families() {
        let (name, value) = NOTO_SANS_JP.variable_declaration();
        assert_eq!(name, "--font-noto-sans-jp");
        assert_eq!(value, "'Noto Sans JP', sans-serif");

        let (name, value) = NOTO_SERIF_JP.variable_declaration();
        assert_eq!(name, "--font-noto-serif-jp");
        assert_eq!(value, "'Noto Serif JP', serif");
    }

    #[test]
    fn preconnect_covers_both_font_origins() {
        assert_eq!(PRECONNECT[0].href, "https://fonts.googleapis.com");
        assert!(!PRECONNECT[0].crossorigin);
        assert_eq!(PRECONNECT[1].href, "https://fonts.gstatic.com");
        assert!(PRECONNECT[1].crossorigin);
    }

    #[test]
    fn display_strategies_serialize_to_css_keywords() {
        assert_eq!(FontDisplay::Swap.as_str(), "swap");
        assert_eq!(FontDisplay::Optional.as_str(), "optional");
    }
}
