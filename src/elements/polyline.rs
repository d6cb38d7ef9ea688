//! `<polyline>` emitter

use crate::config::DEFAULT_STROKE_WIDTH;
use crate::markup::{number::write_number, Escaper, HtmlEscaper, RenderMode, TagBuilder};
use crate::types::Point;

use super::{identity_attrs, stroke_style, style_attr};

/// Optional parameters for [`svg_polyline`]
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineOptions {
    pub id: Option<String>,
    pub css_class: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub fill: Option<String>,
    /// Extra declarations appended verbatim after `fill`
    pub styles: Option<String>,
}

impl Default for PolylineOptions {
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

impl PolylineOptions {
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

/// Serialize vertices as `"x, y "` per point. The trailing space after the
/// last pair is part of the output format.
pub(crate) fn points_to_attr(points: &[Point]) -> String {
    let mut out = String::new();
    for p in points {
        write_number(&mut out, p.x);
        out.push_str(", ");
        write_number(&mut out, p.y);
        out.push(' ');
    }
    out
}

/// Emit `<polyline [points] [id] [class] style />`.
///
/// An empty `points` slice leaves the `points` attribute out.
pub fn svg_polyline(points: &[Point], options: &PolylineOptions) -> String {
    svg_polyline_with(points, options, &HtmlEscaper)
}

pub fn svg_polyline_with(
    points: &[Point],
    options: &PolylineOptions,
    escaper: &dyn Escaper,
) -> String {
    let mut tag = TagBuilder::new("polyline");
    tag.attr("points", points_to_attr(points));

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
    fn test_points_keep_trailing_space() {
        let points = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        assert_eq!(points_to_attr(&points), "1, 2 3, 4 ");
    }

    #[test]
    fn test_empty_points_omitted() {
        let svg = svg_polyline(&[], &PolylineOptions::default());
        assert_eq!(svg, r#"<polyline style="stroke-width: 1;" />"#);
    }

    #[test]
    fn test_polyline_with_extra_styles() {
        let points = [Point::new(0.0, 0.0), Point::new(5.5, 10.0), Point::new(10.0, 0.0)];
        let options = PolylineOptions::new()
            .with_id("trend")
            .with_stroke("blue")
            .with_stroke_width(2.0)
            .with_fill("none")
            .with_styles("stroke-dasharray: 4,2;");
        assert_eq!(
            svg_polyline(&points, &options),
            r#"<polyline points="0, 0 5.5, 10 10, 0 " id="trend" style="stroke: blue;stroke-width: 2;fill: none;stroke-dasharray: 4,2;" />"#
        );
    }

    #[test]
    fn test_blank_extra_styles_suppressed() {
        let options = PolylineOptions::new().with_styles("   ");
        let svg = svg_polyline(&[Point::new(1.0, 1.0)], &options);
        assert_eq!(
            svg,
            r#"<polyline points="1, 1 " style="stroke-width: 1;" />"#
        );
    }

    #[test]
    fn test_extra_styles_escaped_with_style_string() {
        let options = PolylineOptions::new().with_styles("font-family: \"A&B\";");
        let svg = svg_polyline(&[], &options);
        assert_eq!(
            svg,
            r#"<polyline style="stroke-width: 1;font-family: &quot;A&amp;B&quot;;" />"#
        );
    }
}
