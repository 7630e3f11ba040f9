//! Design tokens: the site palette and font family aliases.

use std::fmt;

/// An sRGB color carried as its canonical `#RRGGBB` spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(&'static str);

impl Color {
    /// Wraps a hex spelling. Panics unless it is `#` followed by six
    /// uppercase hex digits; in const position that is a compile error.
    #[must_use]
    pub const fn new(hex: &'static str) -> Self {
        let bytes = hex.as_bytes();
        assert!(
            bytes.len() == 7 && bytes[0] == b'#',
            "color must be spelled #RRGGBB"
        );
        let mut i = 1;
        while i < 7 {
            assert!(
                matches!(bytes[i], b'0'..=b'9' | b'A'..=b'F'),
                "color digits must be uppercase hex"
            );
            i += 1;
        }
        Self(hex)
    }

    #[must_use]
    pub const fn hex(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The closed set of recognized color tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Background,
    Primary,
    Accent,
    Gray,
}

impl ColorToken {
    pub const ALL: [Self; 4] = [Self::Background, Self::Primary, Self::Accent, Self::Gray];

    /// The token name as it appears in utility class names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Primary => "primary",
            Self::Accent => "accent",
            Self::Gray => "gray",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "background" => Some(Self::Background),
            "primary" => Some(Self::Primary),
            "accent" => Some(Self::Accent),
            "gray" => Some(Self::Gray),
            _ => None,
        }
    }

    /// The CSS custom property that carries the token's value.
    #[must_use]
    pub const fn css_variable(self) -> &'static str {
        match self {
            Self::Background => "--color-background",
            Self::Primary => "--color-primary",
            Self::Accent => "--color-accent",
            Self::Gray => "--color-gray",
        }
    }
}

/// The closed set of recognized font family aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontAlias {
    Sans,
    Serif,
}

impl FontAlias {
    pub const ALL: [Self; 2] = [Self::Sans, Self::Serif];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sans => "sans",
            Self::Serif => "serif",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sans" => Some(Self::Sans),
            "serif" => Some(Self::Serif),
            _ => None,
        }
    }
}

/// An ordered `font-family` stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontStack(&'static [&'static str]);

impl FontStack {
    #[must_use]
    pub const fn new(families: &'static [&'static str]) -> Self {
        Self(families)
    }

    #[must_use]
    pub const fn families(self) -> &'static [&'static str] {
        self.0
    }

    /// Renders the stack as a CSS `font-family` value. Names containing
    /// whitespace are single-quoted; `var()` references and generic
    /// keywords pass through untouched.
    #[must_use]
    pub fn css(self) -> String {
        let mut out = String::new();
        for (i, family) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&quote_family(family));
        }
        out
    }
}

/// Single-quotes a family name when it contains whitespace.
pub(crate) fn quote_family(family: &str) -> String {
    if family.chars().any(char::is_whitespace) {
        format!("'{family}'")
    } else {
        family.to_string()
    }
}

/// One color per token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub primary: Color,
    pub accent: Color,
    pub gray: Color,
}

impl Palette {
    #[must_use]
    pub const fn color(self, token: ColorToken) -> Color {
        match token {
            ColorToken::Background => self.background,
            ColorToken::Primary => self.primary,
            ColorToken::Accent => self.accent,
            ColorToken::Gray => self.gray,
        }
    }
}

/// The styling configuration consumed by class-name resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
    pub sans: FontStack,
    pub serif: FontStack,
}

impl Theme {
    /// The One Day One Thing theme. The `sans` alias resolves through the
    /// variable the document shell loads Noto Sans JP into; `serif` is the
    /// literal stack from the styling configuration.
    pub const DEFAULT: Self = Self {
        palette: Palette {
            background: Color::new("#FAFAF7"),
            primary: Color::new("#7C9A82"),
            accent: Color::new("#8BA4B8"),
            gray: Color::new("#9B9B8E"),
        },
        sans: FontStack::new(&["var(--font-noto-sans-jp)"]),
        serif: FontStack::new(&["Noto Serif JP", "serif"]),
    };

    #[must_use]
    pub const fn color(&self, token: ColorToken) -> Color {
        self.palette.color(token)
    }

    #[must_use]
    pub const fn font(&self, alias: FontAlias) -> FontStack {
        match alias {
            FontAlias::Sans => self.sans,
            FontAlias::Serif => self.serif,
        }
    }

    /// `:root` declarations for every color token, in token order. All
    /// tokens are declared whether or not any class references them.
    #[must_use]
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        ColorToken::ALL
            .iter()
            .map(|&token| (token.css_variable(), self.color(token).hex().to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_matches_design_tokens() {
        let theme = Theme::default();
        assert_eq!(theme.color(ColorToken::Background).hex(), "#FAFAF7");
        assert_eq!(theme.color(ColorToken::Primary).hex(), "#7C9A82");
        assert_eq!(theme.color(ColorToken::Accent).hex(), "#8BA4B8");
        assert_eq!(theme.color(ColorToken::Gray).hex(), "#9B9B8E");
    }

    #[test]
    fn token_set_is_closed() {
        assert_eq!(ColorToken::ALL.len(), 4);
        for token in ColorToken::ALL {
            assert_eq!(ColorToken::from_name(token.name()), Some(token));
        }
        assert_eq!(ColorToken::from_name("Background"), None);
        assert_eq!(ColorToken::from_name("chartreuse"), None);
    }

    #[test]
    fn alias_set_is_closed() {
        assert_eq!(FontAlias::ALL.len(), 2);
        for alias in FontAlias::ALL {
            assert_eq!(FontAlias::from_name(alias.name()), Some(alias));
        }
        assert_eq!(FontAlias::from_name("mono"), None);
    }

    #[test]
    fn css_variables_declare_every_token() {
        let vars = Theme::default().css_variables();
        assert_eq!(
            vars,
            vec![
                ("--color-background", "#FAFAF7".to_string()),
                ("--color-primary", "#7C9A82".to_string()),
                ("--color-accent", "#8BA4B8".to_string()),
                ("--color-gray", "#9B9B8E".to_string()),
            ]
        );
    }

    #[test]
    fn font_aliases_resolve_to_configured_stacks() {
        let theme = Theme::default();
        assert_eq!(theme.font(FontAlias::Sans).css(), "var(--font-noto-sans-jp)");
        assert_eq!(theme.font(FontAlias::Serif).css(), "'Noto Serif JP', serif");
    }

    #[test]
    fn families_are_quoted_only_when_spaced() {
        assert_eq!(quote_family("serif"), "serif");
        assert_eq!(quote_family("Noto Serif JP"), "'Noto Serif JP'");
        assert_eq!(
            quote_family("var(--font-noto-sans-jp)"),
            "var(--font-noto-sans-jp)"
        );
    }
}
