//! Page composition.
//!
//! Pages are element trees built from utility classes. [`document`]
//! wraps a page in the shared shell (head metadata, font loading, the
//! compiled stylesheet) and serializes the whole thing; the stylesheet
//! carries rules only for classes the document actually uses.

use onething_core::fonts;
use onething_core::markup::{render_document, Element};
use onething_core::stylesheet;
use onething_core::{StyleError, Theme};

pub const SITE_TITLE: &str = "One Day One Thing";
pub const SITE_TAGLINE: &str = "毎日、たったひとつだけ。";

/// Document-level metadata for the shell.
#[derive(Debug, Clone, Copy)]
pub struct PageMeta {
    pub lang: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            lang: "ja",
            title: SITE_TITLE,
            description: SITE_TAGLINE,
        }
    }
}

/// The home page: a centered heading and tagline.
#[must_use]
pub fn home_page() -> Element {
    Element::new("main")
        .class("flex min-h-screen flex-col items-center justify-center p-6")
        .child(
            Element::new("div")
                .class("text-center")
                .child(
                    Element::new("h1")
                        .class("text-4xl font-serif text-primary mb-4")
                        .text(SITE_TITLE),
                )
                .child(Element::new("p").class("text-lg text-gray").text(SITE_TAGLINE)),
        )
}

/// Wraps page content in the document shell and serializes it.
///
/// The body carries the site-wide classes (`font-sans antialiased
/// bg-background`); every class used anywhere in the tree is compiled
/// into the inline stylesheet. Fails if the tree uses a class the
/// styling system does not know.
pub fn document(meta: PageMeta, theme: &Theme, content: Element) -> Result<String, StyleError> {
    let body = Element::new("body")
        .class("font-sans antialiased bg-background")
        .child(content);

    let mut classes = Vec::new();
    body.collect_classes(&mut classes);
    let css = stylesheet::compile(theme, &fonts::SITE_FONTS, &classes)?;

    let mut head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(Element::new("title").text(meta.title))
        .child(
            Element::new("meta")
                .attr("name", "description")
                .attr("content", meta.description),
        );
    for origin in fonts::PRECONNECT {
        let mut link = Element::new("link")
            .attr("rel", "preconnect")
            .attr("href", origin.href);
        if origin.crossorigin {
            link = link.flag("crossorigin");
        }
        head = head.child(link);
    }
    head = head
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", fonts::stylesheet_href(&fonts::SITE_FONTS)),
        )
        .child(Element::new("style").raw(css));

    let html = Element::new("html")
        .attr("lang", meta.lang)
        .child(head)
        .child(body);

    Ok(render_document(&html))
}

/// Renders the complete home page document.
pub fn render_index(theme: &Theme) -> Result<String, StyleError> {
    document(PageMeta::default(), theme, home_page())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> String {
        render_index(&Theme::default()).unwrap()
    }

    #[test]
    fn index_is_a_japanese_html_document() {
        let html = index();
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains(r#"<html lang="ja">"#));
    }

    #[test]
    fn head_carries_title_and_description() {
        let html = index();
        assert!(html.contains("<title>One Day One Thing</title>"));
        assert!(html.contains(
            r#"<meta name="description" content="毎日、たったひとつだけ。">"#
        ));
    }

    #[test]
    fn body_shows_heading_and_tagline_exactly_once() {
        let html = index();
        let body = html
            .split_once("<body")
            .map(|(_, rest)| rest)
            .unwrap_or_default();
        assert_eq!(body.matches(SITE_TITLE).count(), 1);
        assert_eq!(body.matches(SITE_TAGLINE).count(), 1);
    }

    #[test]
    fn heading_and_tagline_carry_their_classes() {
        let html = index();
        assert!(html.contains(r#"<h1 class="text-4xl font-serif text-primary mb-4">"#));
        assert!(html.contains(r#"<p class="text-lg text-gray">"#));
    }

    #[test]
    fn stylesheet_is_inlined_and_scoped_to_used_classes() {
        let html = index();
        assert!(html.contains("<style>"));
        assert!(html.contains(".text-4xl {"));
        assert!(html.contains(".bg-background { background-color: var(--color-background); }"));
        // Every token is declared, but unused utilities get no rule.
        assert!(html.contains("--color-accent: #8BA4B8;"));
        assert!(!html.contains(".text-accent"));
    }

    #[test]
    fn fonts_are_preconnected_and_linked() {
        let html = index();
        assert!(html.contains(
            r#"<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>"#
        ));
        assert!(html.contains(
            "https://fonts.googleapis.com/css2?family=Noto+Sans+JP&amp;family=Noto+Serif+JP&amp;display=swap"
        ));
    }
}
