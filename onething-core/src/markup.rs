//! Minimal HTML element tree.
//!
//! Pages are composed as trees rather than format strings so the
//! stylesheet compiler can collect the classes a document actually uses
//! before it is serialized, and so text is escaped exactly once, at
//! render time.

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Trusted markup injected verbatim (the inline stylesheet).
    Raw(String),
}

#[derive(Debug, Clone)]
struct Attr {
    name: &'static str,
    /// `None` renders as a bare boolean attribute (`crossorigin`).
    value: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    attrs: Vec<Attr>,
    children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends whitespace-separated class names, preserving order.
    #[must_use]
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push(Attr {
            name,
            value: Some(value.into()),
        });
        self
    }

    /// A bare boolean attribute, rendered as the name alone.
    #[must_use]
    pub fn flag(mut self, name: &'static str) -> Self {
        self.attrs.push(Attr { name, value: None });
        self
    }

    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        debug_assert!(!self.is_void(), "<{}> cannot have children", self.tag);
        self.children.push(Node::Element(child));
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        debug_assert!(!self.is_void(), "<{}> cannot have children", self.tag);
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Appends trusted markup that is rendered without escaping.
    #[must_use]
    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        debug_assert!(!self.is_void(), "<{}> cannot have children", self.tag);
        self.children.push(Node::Raw(markup.into()));
        self
    }

    #[must_use]
    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }

    /// Collects class names from this element and its descendants in
    /// document order. Duplicates are preserved; the stylesheet compiler
    /// deduplicates.
    pub fn collect_classes(&self, out: &mut Vec<String>) {
        out.extend(self.classes.iter().cloned());
        for child in &self.children {
            if let Node::Element(element) = child {
                element.collect_classes(out);
            }
        }
    }

    pub fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            for (i, class) in self.classes.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                escape_attr(class, out);
            }
            out.push('"');
        }
        for attr in &self.attrs {
            out.push(' ');
            out.push_str(attr.name);
            if let Some(value) = &attr.value {
                out.push_str("=\"");
                escape_attr(value, out);
                out.push('"');
            }
        }
        out.push('>');

        if self.is_void() {
            return;
        }
        for child in &self.children {
            match child {
                Node::Element(element) => element.render_into(out),
                Node::Text(text) => escape_text(text, out),
                Node::Raw(markup) => out.push_str(markup),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

/// Serializes a root element with the HTML5 doctype prepended.
#[must_use]
pub fn render_document(root: &Element) -> String {
    let mut out = String::from("<!DOCTYPE html>\n");
    root.render_into(&mut out);
    out
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
