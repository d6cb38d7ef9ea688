//! Building blocks shared by the element emitters
//!
//! Escaping, number formatting, inline style assembly and tag serialization.

mod blank;
pub mod escape;
pub mod number;
pub mod style;
pub mod tag;

pub(crate) use blank::non_blank;
pub use escape::{Escaper, HtmlEscaper};
pub use number::format_number;
pub use style::StyleBuilder;
pub use tag::{RenderMode, TagBuilder};
