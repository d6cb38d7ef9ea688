//! Geometric input types

use std::str::FromStr;

use crate::error::PointParseError;

/// A 2D point in SVG user units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl FromStr for Point {
    type Err = PointParseError;

    /// Parse `X,Y`, allowing whitespace around either coordinate
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| PointParseError::MissingComma(s.to_string()))?;
        let coord = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| PointParseError::InvalidCoordinate {
                    input: s.to_string(),
                    value: v.trim().to_string(),
                })
        };
        Ok(Point::new(coord(x)?, coord(y)?))
    }
}
