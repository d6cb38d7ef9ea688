//! Inline `style` attribute assembly

use super::blank::non_blank;
use super::number::write_number;

/// Accumulates `property: value` declarations in call order.
///
/// Blank values are skipped so the caller can pass optional inputs straight
/// through without checking them first.
#[derive(Debug, Clone, Default)]
pub struct StyleBuilder {
    css: String,
}

impl StyleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `property: value;` if `value` is non-blank
    pub fn declare(&mut self, property: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = non_blank(value) {
            self.css.push_str(property);
            self.css.push_str(": ");
            self.css.push_str(value);
            self.css.push(';');
        }
        self
    }

    /// Append `property: value` with no terminating semicolon
    pub fn declare_unterminated(&mut self, property: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = non_blank(value) {
            self.css.push_str(property);
            self.css.push_str(": ");
            self.css.push_str(value);
        }
        self
    }

    /// Append `property: n;` unconditionally
    pub fn declare_number(&mut self, property: &str, value: f64) -> &mut Self {
        self.css.push_str(property);
        self.css.push_str(": ");
        write_number(&mut self.css, value);
        self.css.push(';');
        self
    }

    /// Append free-form declarations verbatim if non-blank
    pub fn append_raw(&mut self, text: Option<&str>) -> &mut Self {
        if let Some(text) = non_blank(text) {
            self.css.push_str(text);
        }
        self
    }

    /// The assembled style string, or `None` if nothing was declared
    pub fn finish(&self) -> Option<&str> {
        non_blank(Some(self.css.as_str()))
    }
}
