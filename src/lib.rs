//! SVG Helpers - single-element SVG markup for server-side page templates
//!
//! Each helper turns a handful of geometric and styling parameters into one
//! escaped SVG tag (`line`, `polyline`, `circle` or `text`) ready to be
//! written into an HTML response.
//!
//! # Example
//!
//! ```rust
//! use svg_helpers::{svg_circle, CircleOptions};
//!
//! let svg = svg_circle(10.0, 20.0, 5.0, &CircleOptions::new().with_fill("red"));
//! assert_eq!(
//!     svg,
//!     r#"<circle cx="10" cy="20" r="5" style="stroke-width: 1;fill: red;" />"#
//! );
//! ```

pub mod config;
pub mod elements;
pub mod error;
pub mod markup;
pub mod types;

pub use config::Defaults;
pub use elements::{
    svg_circle, svg_circle_with, svg_line, svg_line_with, svg_polyline, svg_polyline_with,
    svg_text, svg_text_with, CircleOptions, LineOptions, PolylineOptions, TextOptions,
};
pub use error::{ConfigError, PointParseError};
pub use markup::{format_number, Escaper, HtmlEscaper};
pub use types::Point;
