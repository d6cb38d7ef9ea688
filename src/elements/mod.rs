//! Emitters for individual SVG elements
//!
//! Each emitter takes its required geometry as plain arguments and the
//! optional parameters as an options record, and returns one complete tag.
//! The plain functions escape with [`HtmlEscaper`]; the `*_with` variants
//! accept any [`Escaper`].

pub mod circle;
pub mod line;
pub mod polyline;
pub mod text;

pub use circle::{svg_circle, svg_circle_with, CircleOptions};
pub use line::{svg_line, svg_line_with, LineOptions};
pub use polyline::{svg_polyline, svg_polyline_with, PolylineOptions};
pub use text::{svg_text, svg_text_with, TextOptions};

use crate::markup::{non_blank, Escaper, StyleBuilder, TagBuilder};

/// Attach the escaped `id` and `class` attributes, skipping blank values
fn identity_attrs(
    tag: &mut TagBuilder,
    id: Option<&str>,
    css_class: Option<&str>,
    escaper: &dyn Escaper,
) {
    tag.attr_opt("id", non_blank(id).map(|v| escaper.escape(v)));
    tag.attr_opt("class", non_blank(css_class).map(|v| escaper.escape(v)));
}

/// `stroke`, `stroke-width` and `fill` declarations shared by the shape elements
fn stroke_style(stroke: Option<&str>, stroke_width: f64, fill: Option<&str>) -> StyleBuilder {
    let mut style = StyleBuilder::new();
    style
        .declare("stroke", stroke)
        .declare_number("stroke-width", stroke_width)
        .declare("fill", fill);
    style
}

/// The style string is escaped as a whole, after every declaration is in place
fn style_attr(tag: &mut TagBuilder, style: &StyleBuilder, escaper: &dyn Escaper) {
    tag.attr_opt("style", style.finish().map(|css| escaper.escape(css)));
}
