//! Build-time stylesheet compilation.
//!
//! `compile` turns the theme, the loaded fonts, and the utility classes a
//! document actually uses into its full stylesheet. It runs once, when the
//! site is built; request handling never touches it.

use std::collections::HashSet;

use crate::class::{StyleError, Utility};
use crate::fonts::FontFamily;
use crate::theme::Theme;

pub const CSS_RESET: &str = "* { box-sizing: border-box; margin: 0; padding: 0; }";

/// Compiles the page stylesheet: reset, `:root` custom properties (font
/// variables, then color tokens), then one rule per used class in
/// first-use order. Duplicate class names produce a single rule. Any
/// unrecognized class aborts compilation.
pub fn compile(
    theme: &Theme,
    fonts: &[FontFamily],
    class_names: &[String],
) -> Result<String, StyleError> {
    let mut css = String::new();
    css.push_str(CSS_RESET);
    css.push('\n');

    css.push_str(":root {\n");
    for font in fonts {
        let (name, value) = font.variable_declaration();
        css.push_str(&format!("    {name}: {value};\n"));
    }
    for (name, value) in theme.css_variables() {
        css.push_str(&format!("    {name}: {value};\n"));
    }
    css.push_str("}\n");

    let mut seen: HashSet<&str> = HashSet::new();
    for class in class_names {
        if !seen.insert(class.as_str()) {
            continue;
        }
        let utility = Utility::parse(class)?;
        css.push_str(&format!(".{class} {{ "));
        for declaration in utility.declarations(theme) {
            css.push_str(&format!(
                "{}: {}; ",
                declaration.property, declaration.value
            ));
        }
        css.push_str("}\n");
    }

    Ok(css)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::SITE_FONTS;

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|&name| name.to_string()).collect()
    }

    #[test]
    fn stylesheet_opens_with_reset_and_root_variables() {
        let css = compile(&Theme::default(), &SITE_FONTS, &[]).unwrap();
        assert!(css.starts_with(CSS_RESET));
        assert!(css.contains("    --font-noto-sans-jp: 'Noto Sans JP', sans-serif;\n"));
        assert!(css.contains("    --font-noto-serif-jp: 'Noto Serif JP', serif;\n"));
        assert!(css.contains("    --color-background: #FAFAF7;\n"));
        assert!(css.contains("    --color-accent: #8BA4B8;\n"));
    }

    #[test]
    fn rules_are_emitted_only_for_used_classes() {
        let css = compile(
            &Theme::default(),
            &SITE_FONTS,
            &classes(&["text-primary", "p-6"]),
        )
        .unwrap();
        assert!(css.contains(".text-primary { color: var(--color-primary); }\n"));
        assert!(css.contains(".p-6 { padding: 1.5rem; }\n"));
        // The accent token is declared but, being unused, gets no rule.
        assert!(css.contains("--color-accent"));
        assert!(!css.contains(".text-accent"));
        assert!(!css.contains(".bg-accent"));
    }

    #[test]
    fn duplicate_classes_produce_one_rule() {
        let css = compile(
            &Theme::default(),
            &SITE_FONTS,
            &classes(&["flex", "text-center", "flex"]),
        )
        .unwrap();
        assert_eq!(css.matches(".flex {").count(), 1);
    }

    #[test]
    fn rules_keep_first_use_order() {
        let css = compile(
            &Theme::default(),
            &SITE_FONTS,
            &classes(&["text-gray", "flex", "text-gray", "mb-4"]),
        )
        .unwrap();
        let gray = css.find(".text-gray").unwrap();
        let flex = css.find(".flex").unwrap();
        let margin = css.find(".mb-4").unwrap();
        assert!(gray < flex && flex < margin);
    }

    #[test]
    fn unknown_classes_abort_compilation() {
        let err = compile(
            &Theme::default(),
            &SITE_FONTS,
            &classes(&["flex", "text-chartreuse"]),
        )
        .unwrap_err();
        assert_eq!(err, StyleError::UnknownClass("text-chartreuse".to_string()));
    }

    #[test]
    fn compilation_is_deterministic() {
        let used = classes(&["font-sans", "antialiased", "bg-background", "flex"]);
        let first = compile(&Theme::default(), &SITE_FONTS, &used).unwrap();
        let second = compile(&Theme::default(), &SITE_FONTS, &used).unwrap();
        assert_eq!(first, second);
    }
}
