//! Stroke style for the rendered shape.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGBA8 color, written as `#rrggbb` (or `#rrggbbaa` when not opaque).
///
/// Parsing also accepts any CSS color string (`red`, `rgb(10 20 30)`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ColorError::Invalid(s.to_string());
        if let Some(hex) = s.strip_prefix('#') {
            if !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return match hex.len() {
                6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
                8 => Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
                _ => Err(invalid()),
            };
        }
        let parsed = peniko::color::parse_color(s).map_err(|_| invalid())?;
        Ok(parsed.to_alpha_color::<peniko::color::Srgb>().into())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl From<peniko::Color> for Color {
    fn from(color: peniko::Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<Color> for peniko::Color {
    fn from(color: Color) -> Self {
        peniko::Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style handed to the renderer with every drawn shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleOptions {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub weight: f64,
    /// Stroke opacity (0.0 = transparent, 1.0 = opaque).
    pub opacity: f64,
    /// Dash pattern, e.g. `"5, 10"`. None = solid.
    #[serde(alias = "dashArray")]
    pub dash_array: Option<String>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            color: Color::rgb(0x88, 0x66, 0x99),
            weight: 1.0,
            opacity: 1.0,
            dash_array: Some("5, 10".to_string()),
        }
    }
}

impl StyleOptions {
    /// These options with every field set in `overrides` replaced.
    pub fn merged(&self, overrides: &StyleOverrides) -> Self {
        Self {
            color: overrides.color.unwrap_or(self.color),
            weight: overrides.weight.unwrap_or(self.weight),
            opacity: overrides.opacity.unwrap_or(self.opacity),
            dash_array: overrides
                .dash_array
                .clone()
                .or_else(|| self.dash_array.clone()),
        }
    }

    /// Stroke color with opacity applied, for renderers.
    pub fn stroke_with_opacity(&self) -> peniko::Color {
        let alpha = (f64::from(self.color.a) * self.opacity.clamp(0.0, 1.0)) as u8;
        peniko::Color::from_rgba8(self.color.r, self.color.g, self.color.b, alpha)
    }
}

/// Partial style; unset fields keep their defaults when merged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub color: Option<Color>,
    pub weight: Option<f64>,
    pub opacity: Option<f64>,
    #[serde(alias = "dashArray")]
    pub dash_array: Option<String>,
}
