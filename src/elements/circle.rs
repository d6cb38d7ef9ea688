use crate::config::DEFAULT_STROKE_WIDTH;
use crate::markup::{format_number, Escaper, HtmlEscaper, RenderMode, TagBuilder};

use super::{identity_attrs, stroke_style, style_attr};

/// Optional parameters for [`svg_circle`]
#[derive(Debug, Clone, PartialEq)]
pub struct CircleOptions {
    pub id: Option<String>,
    pub css_class: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub fill: Option<String>,
    /// Extra declarations appended verbatim after `fill`
    pub styles: Option<String>,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self {
            id: None,
            css_class: None,
            stroke: None,
            stroke_width: DEFAULT_STROKE_WIDTH,
            fill: None,
            styles: None,
        }
    }
}

impl CircleOptions {
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

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_styles(mut self, styles: impl Into<String>) -> Self {
        self.styles = Some(styles.into());
        self
    }
}

/// Emit `<circle cx cy r [id] [class] style />`
pub fn svg_circle(x: f64, y: f64, radius: f64, options: &CircleOptions) -> String {
    svg_circle_with(x, y, radius, options, &HtmlEscaper)
}

pub fn svg_circle_with(
    x: f64,
    y: f64,
    radius: f64,
    options: &CircleOptions,
    escaper: &dyn Escaper,
) -> String {
    let mut tag = TagBuilder::new("circle");
    tag.attr("cx", format_number(x))
        .attr("cy", format_number(y))
        .attr("r", format_number(radius));

    identity_attrs(
        &mut tag,
        options.id.as_deref(),
        options.css_class.as_deref(),
        escaper,
    );

    let mut style = stroke_style(
        options.stroke.as_deref(),
        options.stroke_width,
        options.fill.as_deref(),
    );
    style.append_raw(options.styles.as_deref());
    style_attr(&mut tag, &style, escaper);

    tag.render(RenderMode::SelfClosing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_circle_with_fill() {
        let svg = svg_circle(10.0, 20.0, 5.0, &CircleOptions::new().with_fill("red"));
        assert_eq!(
            svg,
            r#"<circle cx="10" cy="20" r="5" style="stroke-width: 1;fill: red;" />"#
        );
    }

    #[test]
    fn test_negative_radius_not_validated() {
        let svg = svg_circle(0.0, 0.0, -2.5, &CircleOptions::default());
        assert!(svg.contains(r#"r="-2.5""#));
    }

    #[test]
    fn test_circle_id_and_class_escaped() {
        let options = CircleOptions::new()
            .with_id("a<b")
            .with_class("x&y")
            .with_stroke("black");
        let svg = svg_circle(1.0, 2.0, 3.0, &options);
        assert_eq!(
            svg,
            r#"<circle cx="1" cy="2" r="3" id="a&lt;b" class="x&amp;y" style="stroke: black;stroke-width: 1;" />"#
        );
    }
}
