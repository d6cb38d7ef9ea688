//! Default values for optional element parameters
//!
//! The built-in defaults are a stroke width of 1, a font size of 12 and the
//! Arial font family. A TOML file can override any of them:
//!
//! ```toml
//! [stroke]
//! width = 1.5
//!
//! [text]
//! font_size = 14
//! font_family = "Helvetica"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::elements::{CircleOptions, LineOptions, PolylineOptions, TextOptions};
use crate::error::ConfigError;

pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
pub const DEFAULT_FONT_SIZE: f64 = 12.0;
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Defaults applied when an element's optional parameter is not given
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    pub stroke_width: f64,
    pub font_size: f64,
    pub font_family: String,
}

/// TOML structure for deserializing a defaults file
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDefaults {
    stroke: Option<TomlStroke>,
    text: Option<TomlText>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlStroke {
    width: Option<f64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlText {
    font_size: Option<f64>,
    font_family: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl Defaults {
    /// Load defaults from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load defaults from a TOML string; missing keys keep the built-in value
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlDefaults = toml::from_str(content)?;
        let builtin = Self::default();

        let stroke_width = parsed
            .stroke
            .and_then(|s| s.width)
            .unwrap_or(builtin.stroke_width);
        let (font_size, font_family) = match parsed.text {
            Some(text) => (
                text.font_size.unwrap_or(builtin.font_size),
                text.font_family.unwrap_or(builtin.font_family),
            ),
            None => (builtin.font_size, builtin.font_family),
        };

        Ok(Defaults {
            stroke_width,
            font_size,
            font_family,
        })
    }

    pub fn line(&self) -> LineOptions {
        LineOptions::default().with_stroke_width(self.stroke_width)
    }

    pub fn polyline(&self) -> PolylineOptions {
        PolylineOptions::default().with_stroke_width(self.stroke_width)
    }

    pub fn circle(&self) -> CircleOptions {
        CircleOptions::default().with_stroke_width(self.stroke_width)
    }

    pub fn text(&self) -> TextOptions {
        TextOptions::default()
            .with_font_size(self.font_size)
            .with_font_family(self.font_family.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults() {
        let defaults = Defaults::default();
        assert_eq!(defaults.stroke_width, 1.0);
        assert_eq!(defaults.font_size, 12.0);
        assert_eq!(defaults.font_family, "Arial");
    }

    #[test]
    fn test_parse_full_file() {
        let toml_str = r#"
[stroke]
width = 2.5

[text]
font_size = 14
font_family = "Helvetica"
"#;
        let defaults = Defaults::from_str(toml_str).expect("Should parse");
        assert_eq!(defaults.stroke_width, 2.5);
        assert_eq!(defaults.font_size, 14.0);
        assert_eq!(defaults.font_family, "Helvetica");
    }

    #[test]
    fn test_partial_file_falls_back() {
        let defaults = Defaults::from_str("[text]\nfont_size = 9\n").expect("Should parse");
        assert_eq!(defaults.stroke_width, 1.0);
        assert_eq!(defaults.font_size, 9.0);
        assert_eq!(defaults.font_family, "Arial");

        let empty = Defaults::from_str("").expect("Should parse");
        assert_eq!(empty, Defaults::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = Defaults::from_str("[stroke]\ncolour = \"red\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Defaults::from_str("this is not valid toml {{{{");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Defaults::from_file(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_seeded_options() {
        let defaults = Defaults {
            stroke_width: 3.0,
            font_size: 20.0,
            font_family: "Courier".to_string(),
        };
        assert_eq!(defaults.line().stroke_width, 3.0);
        assert_eq!(defaults.polyline().stroke_width, 3.0);
        assert_eq!(defaults.circle().stroke_width, 3.0);
        let text = defaults.text();
        assert_eq!(text.font_size, 20.0);
        assert_eq!(text.font_family.as_deref(), Some("Courier"));
    }
}
