//! `<line>` emitter

use crate::config::DEFAULT_STROKE_WIDTH;
use crate::markup::{format_number, Escaper, HtmlEscaper, RenderMode, TagBuilder};

use super::{identity_attrs, stroke_style, style_attr};

/// Optional parameters for [`svg_line`]
#[derive(Debug, Clone, PartialEq)]
pub struct LineOptions {
    pub id: Option<String>,
    pub css_class: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub fill: Option<String>,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            id: None,
            css_class: None,
            stroke: None,
            stroke_width: DEFAULT_STROKE_WIDTH,
            fill: None,
        }
    }
}

impl LineOptions {
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
}

/// Emit `<line x1 x2 y1 y2 [id] [class] style />`.
///
/// Note the attribute order groups both x coordinates before the y ones.
pub fn svg_line(x1: f64, y1: f64, x2: f64, y2: f64, options: &LineOptions) -> String {
    svg_line_with(x1, y1, x2, y2, options, &HtmlEscaper)
}

pub fn svg_line_with(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    options: &LineOptions,
    escaper: &dyn Escaper,
) -> String {
    let mut tag = TagBuilder::new("line");
    tag.attr("x1", format_number(x1))
        .attr("x2", format_number(x2))
        .attr("y1", format_number(y1))
        .attr("y2", format_number(y2));

    identity_attrs(
        &mut tag,
        options.id.as_deref(),
        options.css_class.as_deref(),
        escaper,
    );

    let style = stroke_style(
        options.stroke.as_deref(),
        options.stroke_width,
        options.fill.as_deref(),
    );
    style_attr(&mut tag, &style, escaper);

    tag.render(RenderMode::SelfClosing)
}
