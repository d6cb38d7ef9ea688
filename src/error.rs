//! Error types for configuration loading and argument parsing
//!
//! The emitters themselves never fail; these only cover the I/O edges.

use thiserror::Error;

/// Errors that can occur when loading a defaults file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read defaults file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse defaults TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A point argument that is not an `X,Y` pair of numbers
#[derive(Error, Debug, PartialEq)]
pub enum PointParseError {
    #[error("expected `X,Y` but found '{0}'")]
    MissingComma(String),
    #[error("invalid coordinate '{value}' in '{input}'")]
    InvalidCoordinate { input: String, value: String },
}
