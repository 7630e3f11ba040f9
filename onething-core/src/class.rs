//! Utility-class resolution.

use thiserror::Error;

use crate::theme::{ColorToken, FontAlias, Theme};

/// Errors raised while resolving class names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("unrecognized utility class `{0}`")]
    UnknownClass(String),
    #[error("unknown color token `{0}`")]
    UnknownColor(String),
    #[error("invalid spacing step in `{class}`: `{step}` is not an integer in 0..={max}", max = Spacing::MAX_STEP)]
    InvalidSpacing { class: String, step: String },
}

/// A step on the quarter-rem spacing scale: step `n` is `n × 0.25rem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing(u8);

impl Spacing {
    pub const MAX_STEP: u8 = 96;

    #[must_use]
    pub fn from_step(step: u8) -> Option<Self> {
        (step <= Self::MAX_STEP).then_some(Self(step))
    }

    /// Renders the step as a CSS length: `0`, `0.25rem`, `1rem`, `1.5rem`, …
    #[must_use]
    pub fn css(self) -> String {
        let quarters = u32::from(self.0) * 25;
        if quarters == 0 {
            return "0".to_string();
        }
        let whole = quarters / 100;
        match quarters % 100 {
            0 => format!("{whole}rem"),
            50 => format!("{whole}.5rem"),
            frac => format!("{whole}.{frac}rem"),
        }
    }
}

/// The closed font-size scale, each size paired with its line height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    Xl2,
    Xl3,
    Xl4,
}

impl TextSize {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "xs" => Some(Self::Xs),
            "sm" => Some(Self::Sm),
            "base" => Some(Self::Base),
            "lg" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            "2xl" => Some(Self::Xl2),
            "3xl" => Some(Self::Xl3),
            "4xl" => Some(Self::Xl4),
            _ => None,
        }
    }

    #[must_use]
    pub const fn font_size(self) -> &'static str {
        match self {
            Self::Xs => "0.75rem",
            Self::Sm => "0.875rem",
            Self::Base => "1rem",
            Self::Lg => "1.125rem",
            Self::Xl => "1.25rem",
            Self::Xl2 => "1.5rem",
            Self::Xl3 => "1.875rem",
            Self::Xl4 => "2.25rem",
        }
    }

    #[must_use]
    pub const fn line_height(self) -> &'static str {
        match self {
            Self::Xs => "1rem",
            Self::Sm => "1.25rem",
            Self::Base => "1.5rem",
            Self::Lg => "1.75rem",
            Self::Xl => "1.75rem",
            Self::Xl2 => "2rem",
            Self::Xl3 => "2.25rem",
            Self::Xl4 => "2.5rem",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    Col,
}

impl FlexDirection {
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Col => "column",
        }
    }
}

/// Flex alignment keywords shared by `items-*` and `justify-*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Start,
    Center,
    End,
}

impl Alignment {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "end" => Some(Self::End),
            _ => None,
        }
    }

    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Which margin a spacing utility applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    All,
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    #[must_use]
    pub const fn margin_property(self) -> &'static str {
        match self {
            Self::All => "margin",
            Self::Top => "margin-top",
            Self::Right => "margin-right",
            Self::Bottom => "margin-bottom",
            Self::Left => "margin-left",
        }
    }
}

/// A single CSS property/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// A parsed utility class name.
///
/// # Grammar
///
/// The styling system recognizes a closed set of class shapes:
///
/// ```text
/// flex | flex-row | flex-col          flex container and direction
/// items-{start,center,end}            align-items
/// justify-{start,center,end}          justify-content
/// min-h-screen                        full-viewport minimum height
/// text-{left,center,right}            text-align
/// text-{xs..4xl}                      font-size + line-height
/// text-{token}                        color (theme token)
/// bg-{token}                          background-color (theme token)
/// font-{sans,serif}                   font-family (theme alias)
/// antialiased                         font smoothing
/// p-{n}                               padding, n × 0.25rem
/// m-{n} mt-{n} mr-{n} mb-{n} ml-{n}   margin, n × 0.25rem
/// ```
///
/// # Resolution order
///
/// The `text-` prefix is shared by three utility families. Its suffix is
/// resolved as an alignment keyword first, then a size keyword, then a
/// color token; anything else fails. The three keyword sets are disjoint,
/// so the order never changes the result of a valid class. It only
/// decides which family a class *could* have belonged to when reporting
/// errors.
///
/// Anything outside the grammar is an error: resolution is fail-closed so
/// a typo surfaces when the stylesheet is compiled, not as a silently
/// unstyled element.
///
/// Color and background utilities emit `var(--color-…)` references rather
/// than literal hex values, so a token's value is declared once, in
/// `:root`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utility {
    Flex,
    Direction(FlexDirection),
    Items(Alignment),
    Justify(Alignment),
    MinHScreen,
    TextAlign(TextAlign),
    TextSize(TextSize),
    TextColor(ColorToken),
    BackgroundColor(ColorToken),
    FontFamily(FontAlias),
    Antialiased,
    Padding(Spacing),
    Margin(Side, Spacing),
}

impl Utility {
    pub fn parse(class: &str) -> Result<Self, StyleError> {
        match class {
            "flex" => return Ok(Self::Flex),
            "flex-row" => return Ok(Self::Direction(FlexDirection::Row)),
            "flex-col" => return Ok(Self::Direction(FlexDirection::Col)),
            "min-h-screen" => return Ok(Self::MinHScreen),
            "antialiased" => return Ok(Self::Antialiased),
            _ => {}
        }

        let unknown = || StyleError::UnknownClass(class.to_string());
        let Some((prefix, rest)) = class.split_once('-') else {
            return Err(unknown());
        };

        match prefix {
            "items" => Alignment::from_name(rest)
                .map(Self::Items)
                .ok_or_else(unknown),
            "justify" => Alignment::from_name(rest)
                .map(Self::Justify)
                .ok_or_else(unknown),
            "text" => TextAlign::from_name(rest)
                .map(Self::TextAlign)
                .or_else(|| TextSize::from_name(rest).map(Self::TextSize))
                .or_else(|| ColorToken::from_name(rest).map(Self::TextColor))
                .ok_or_else(unknown),
            "bg" => ColorToken::from_name(rest)
                .map(Self::BackgroundColor)
                .ok_or_else(|| StyleError::UnknownColor(rest.to_string())),
            "font" => FontAlias::from_name(rest)
                .map(Self::FontFamily)
                .ok_or_else(unknown),
            "p" => Ok(Self::Padding(parse_spacing(class, rest)?)),
            "m" => Ok(Self::Margin(Side::All, parse_spacing(class, rest)?)),
            "mt" => Ok(Self::Margin(Side::Top, parse_spacing(class, rest)?)),
            "mr" => Ok(Self::Margin(Side::Right, parse_spacing(class, rest)?)),
            "mb" => Ok(Self::Margin(Side::Bottom, parse_spacing(class, rest)?)),
            "ml" => Ok(Self::Margin(Side::Left, parse_spacing(class, rest)?)),
            _ => Err(unknown()),
        }
    }

    /// The CSS declarations this utility resolves to. Font aliases are the
    /// only utilities whose value comes from the theme directly; colors go
    /// through `:root` variables.
    #[must_use]
    pub fn declarations(self, theme: &Theme) -> Vec<Declaration> {
        match self {
            Self::Flex => vec![Declaration::new("display", "flex")],
            Self::Direction(direction) => {
                vec![Declaration::new("flex-direction", direction.css())]
            }
            Self::Items(alignment) => vec![Declaration::new("align-items", alignment.css())],
            Self::Justify(alignment) => {
                vec![Declaration::new("justify-content", alignment.css())]
            }
            Self::MinHScreen => vec![Declaration::new("min-height", "100vh")],
            Self::TextAlign(align) => vec![Declaration::new("text-align", align.css())],
            Self::TextSize(size) => vec![
                Declaration::new("font-size", size.font_size()),
                Declaration::new("line-height", size.line_height()),
            ],
            Self::TextColor(token) => {
                vec![Declaration::new("color", format!("var({})", token.css_variable()))]
            }
            Self::BackgroundColor(token) => vec![Declaration::new(
                "background-color",
                format!("var({})", token.css_variable()),
            )],
            Self::FontFamily(alias) => {
                vec![Declaration::new("font-family", theme.font(alias).css())]
            }
            Self::Antialiased => vec![
                Declaration::new("-webkit-font-smoothing", "antialiased"),
                Declaration::new("-moz-osx-font-smoothing", "grayscale"),
            ],
            Self::Padding(spacing) => vec![Declaration::new("padding", spacing.css())],
            Self::Margin(side, spacing) => {
                vec![Declaration::new(side.margin_property(), spacing.css())]
            }
        }
    }
}

fn parse_spacing(class: &str, step: &str) -> Result<Spacing, StyleError> {
    let invalid = || StyleError::InvalidSpacing {
        class: class.to_string(),
        step: step.to_string(),
    };

    if step.is_empty() || !step.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let step_value: u8 = step.parse().map_err(|_| invalid())?;
    Spacing::from_step(step_value).ok_or_else(invalid)
}
