//! Single-element markup serialization

use indexmap::IndexMap;

use super::blank::non_blank;

/// How a tag is closed when rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// `<name ... />`, ignoring any inner markup
    SelfClosing,
    /// `<name ...>inner</name>`, even when inner markup is empty
    Normal,
}

/// Builds one element from an ordered attribute map and optional inner markup.
///
/// Values are written verbatim: anything that needs escaping must be escaped
/// before it is handed to the builder.
#[derive(Debug, Clone)]
pub struct TagBuilder {
    name: &'static str,
    attributes: IndexMap<&'static str, String>,
    inner_html: String,
}

impl TagBuilder {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: IndexMap::new(),
            inner_html: String::new(),
        }
    }

    /// Set an attribute. Blank values leave the attribute out entirely.
    pub fn attr(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if non_blank(Some(value.as_str())).is_some() {
            self.attributes.insert(name, value);
        }
        self
    }

    /// Set an attribute only when `value` is present and non-blank
    pub fn attr_opt<S: Into<String>>(&mut self, name: &'static str, value: Option<S>) -> &mut Self {
        if let Some(value) = value {
            self.attr(name, value);
        }
        self
    }

    pub fn set_inner_html(&mut self, markup: impl Into<String>) -> &mut Self {
        self.inner_html = markup.into();
        self
    }

    pub fn append_inner_html(&mut self, markup: &str) -> &mut Self {
        self.inner_html.push_str(markup);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn render(&self, mode: RenderMode) -> String {
        tracing::trace!(
            tag = self.name,
            attributes = self.attributes.len(),
            inner_len = self.inner_html.len(),
            "rendering svg element"
        );

        let mut out = String::with_capacity(32 + self.inner_html.len());
        out.push('<');
        out.push_str(self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        match mode {
            RenderMode::SelfClosing => out.push_str(" />"),
            RenderMode::Normal => {
                out.push('>');
                out.push_str(&self.inner_html);
                out.push_str("</");
                out.push_str(self.name);
                out.push('>');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing_keeps_insertion_order() {
        let mut tag = TagBuilder::new("line");
        tag.attr("x1", "0").attr("x2", "5").attr("y1", "1").attr("y2", "2");
        assert_eq!(
            tag.render(RenderMode::SelfClosing),
            r#"<line x1="0" x2="5" y1="1" y2="2" />"#
        );
    }

    #[test]
    fn test_blank_attributes_are_dropped() {
        let mut tag = TagBuilder::new("circle");
        tag.attr("id", "")
            .attr("class", "   ")
            .attr_opt::<String>("style", None)
            .attr_opt("r", Some("3"));
        assert_eq!(tag.attribute("id"), None);
        assert_eq!(tag.attribute("class"), None);
        assert_eq!(tag.render(RenderMode::SelfClosing), r#"<circle r="3" />"#);
    }

    #[test]
    fn test_normal_mode_with_inner_markup() {
        let mut tag = TagBuilder::new("text");
        tag.attr("x", "1")
            .set_inner_html("hello")
            .append_inner_html("<title>t</title>");
        assert_eq!(
            tag.render(RenderMode::Normal),
            r#"<text x="1">hello<title>t</title></text>"#
        );
    }

    #[test]
    fn test_normal_mode_empty_content_still_closes() {
        let tag = TagBuilder::new("title");
        assert_eq!(tag.render(RenderMode::Normal), "<title></title>");
    }
}
