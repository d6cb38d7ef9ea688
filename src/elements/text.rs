//! `<text>` emitter
//!
//! The style string this produces has two quirks that existing stylesheets
//! and page templates depend on:
//!
//! - colour is declared as `colour: ...;`, not the CSS `color` property
//! - the `text-anchor` declaration is not terminated with `;`

use crate::config::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
use crate::markup::{
    format_number, non_blank, Escaper, HtmlEscaper, RenderMode, StyleBuilder, TagBuilder,
};

use super::{identity_attrs, style_attr};

/// Optional parameters for [`svg_text`]
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    pub id: Option<String>,
    pub css_class: Option<String>,
    pub font_size: f64,
    pub colour: Option<String>,
    /// Defaults to `Arial`; set to `None` or a blank string to omit
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub text_anchor: Option<String>,
    /// Rendered as a nested `<title>` tooltip after the text content
    pub title: Option<String>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            id: None,
            css_class: None,
            font_size: DEFAULT_FONT_SIZE,
            colour: None,
            font_family: Some(DEFAULT_FONT_FAMILY.to_string()),
            font_weight: None,
            text_anchor: None,
            title: None,
        }
    }
}

impl TextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_colour(mut self, colour: impl Into<String>) -> Self {
        self.colour = Some(colour.into());
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn without_font_family(mut self) -> Self {
        self.font_family = None;
        self
    }

    pub fn with_font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn with_text_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.text_anchor = Some(anchor.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

fn text_style(options: &TextOptions) -> StyleBuilder {
    let mut style = StyleBuilder::new();
    style
        .declare_number("font-size", options.font_size)
        .declare("colour", options.colour.as_deref())
        .declare("font-family", options.font_family.as_deref())
        .declare("font-weight", options.font_weight.as_deref())
        .declare_unterminated("text-anchor", options.text_anchor.as_deref());
    style
}

/// Emit `<text x y [id] [class] style>text[<title>title</title>]</text>`.
///
/// `text` is escaped and always closes with `</text>`, even when empty.
pub fn svg_text(x: f64, y: f64, text: &str, options: &TextOptions) -> String {
    svg_text_with(x, y, text, options, &HtmlEscaper)
}

pub fn svg_text_with(
    x: f64,
    y: f64,
    text: &str,
    options: &TextOptions,
    escaper: &dyn Escaper,
) -> String {
    let mut tag = TagBuilder::new("text");
    tag.attr("x", format_number(x))
        .attr("y", format_number(y))
        .set_inner_html(escaper.escape(text));

    identity_attrs(
        &mut tag,
        options.id.as_deref(),
        options.css_class.as_deref(),
        escaper,
    );

    if let Some(title) = non_blank(options.title.as_deref()) {
        let mut title_tag = TagBuilder::new("title");
        title_tag.set_inner_html(escaper.escape(title));
        tag.append_inner_html(&title_tag.render(RenderMode::Normal));
    }

    style_attr(&mut tag, &text_style(options), escaper);

    tag.render(RenderMode::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_defaults() {
        let svg = svg_text(5.0, 15.0, "Hello", &TextOptions::default());
        assert_eq!(
            svg,
            r#"<text x="5" y="15" style="font-size: 12;font-family: Arial;">Hello</text>"#
        );
    }

    #[test]
    fn test_text_full_style_order() {
        let options = TextOptions::new()
            .with_font_size(9.5)
            .with_colour("red")
            .with_font_family("Verdana")
            .with_font_weight("bold")
            .with_text_anchor("middle");
        let svg = svg_text(0.0, 0.0, "x", &options);
        assert_eq!(
            svg,
            r#"<text x="0" y="0" style="font-size: 9.5;colour: red;font-family: Verdana;font-weight: bold;text-anchor: middle">x</text>"#
        );
    }

    #[test]
    fn test_title_follows_text() {
        let options = TextOptions::new().with_title("Q1 & Q2");
        let svg = svg_text(1.0, 2.0, "Revenue", &options);
        assert!(svg.ends_with(">Revenue<title>Q1 &amp; Q2</title></text>"));
    }

    #[test]
    fn test_text_content_escaped() {
        let svg = svg_text(0.0, 0.0, "a < b", &TextOptions::default());
        assert!(svg.contains(">a &lt; b</text>"));
    }

    #[test]
    fn test_empty_text_still_closes() {
        let svg = svg_text(0.0, 0.0, "", &TextOptions::default().without_font_family());
        assert_eq!(svg, r#"<text x="0" y="0" style="font-size: 12;"></text>"#);
    }

    #[test]
    fn test_blank_title_suppressed() {
        let svg = svg_text(0.0, 0.0, "t", &TextOptions::new().with_title("  "));
        assert!(!svg.contains("<title>"));
    }
}
