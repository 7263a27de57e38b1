//! Color values for the editor widgets.
//!
//! `ColorBuffer` is the normalized form every widget holds. It is built from
//! textual colors (`#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`, CSS
//! names) or from a picker `ColorEvent`, and serializes to the two forms
//! the editor needs: `#RRGGBB` for display and `rgb(r, g, b)` for the figure.

use std::fmt;
use std::str::FromStr;

use dioxus_logger::tracing::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

static RGB_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
    )
    .expect("valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color")]
    Empty,
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
    #[error("invalid rgb color: {0}")]
    InvalidRgb(String),
    #[error("invalid picker event: {0}")]
    InvalidEvent(String),
}

/// Normalized RGBA color. Alpha is kept in `[0, 1]`, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBuffer {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    a: f64,
}

impl ColorBuffer {
    pub const BLACK: ColorBuffer = ColorBuffer {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
    };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: bound_alpha(a),
        }
    }

    /// Builds a color from unbounded channel values, clamping each to range.
    pub fn from_channels(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::rgba(clamp_channel(r), clamp_channel(g), clamp_channel(b), a)
    }

    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some(named) = named_color(&lower) {
            return Ok(named);
        }
        if lower.starts_with("rgb") {
            return parse_rgb_function(&lower);
        }
        parse_hex_digits(lower.strip_prefix('#').unwrap_or(&lower))
    }

    /// Lenient parse: anything unreadable becomes opaque black.
    pub fn from_input(input: &str) -> Self {
        match Self::parse(input) {
            Ok(color) => color,
            Err(e) => {
                warn!("Falling back to black for color {:?}: {}", input, e);
                Self::BLACK
            }
        }
    }

    pub fn alpha(&self) -> f64 {
        self.a
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// `#RRGGBB`, alpha dropped
    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise
    pub fn to_rgb_string(&self) -> String {
        if self.is_opaque() {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for ColorBuffer {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for ColorBuffer {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ColorBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgb_string())
    }
}

fn bound_alpha(a: f64) -> f64 {
    if a.is_nan() {
        1.0
    } else {
        (a.clamp(0.0, 1.0) * 100.0).round() / 100.0
    }
}

fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        0
    } else {
        value.round().clamp(0.0, 255.0) as u8
    }
}

/// CSS named colors, `transparent` included
fn named_color(name: &str) -> Option<ColorBuffer> {
    if !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let [r, g, b, a] = csscolorparser::parse(name).ok()?.to_rgba8();
    Some(ColorBuffer::rgba(r, g, b, f64::from(a) / 255.0))
}

fn parse_rgb_function(input: &str) -> Result<ColorBuffer, ColorParseError> {
    let caps = RGB_FUNCTION
        .captures(input)
        .ok_or_else(|| ColorParseError::InvalidRgb(input.to_string()))?;

    let channel = |idx: usize| -> Result<f64, ColorParseError> {
        caps.get(idx)
            .map(|m| m.as_str())
            .unwrap_or("1")
            .parse::<f64>()
            .map_err(|e| ColorParseError::InvalidRgb(format!("{input}: {e}")))
    };

    Ok(ColorBuffer::from_channels(
        channel(1)?,
        channel(2)?,
        channel(3)?,
        channel(4)?,
    ))
}

fn parse_hex_digits(digits: &str) -> Result<ColorBuffer, ColorParseError> {
    let invalid = || ColorParseError::InvalidHex(digits.to_string());
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let bytes: Vec<u8> = match digits.len() {
        3 | 4 => digits
            .chars()
            .map(|c| c.to_digit(16).map(|d| (d * 17) as u8))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?,
        6 | 8 => (0..digits.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?,
        _ => return Err(invalid()),
    };

    let alpha = bytes.get(3).map(|a| f64::from(*a) / 255.0).unwrap_or(1.0);
    Ok(ColorBuffer::rgba(bytes[0], bytes[1], bytes[2], alpha))
}

// ============================================================================
// Picker events
// ============================================================================

/// A completed selection from a picker.
///
/// Pickers either report text (`Hex`, which also carries raw `rgb()` strings
/// typed by the user) or channel values (`Rgb`). On the wire the event keeps
/// the JS shape: a bare string, `{source: "rgb", rgb: {r, g, b, a}}`,
/// `{source: "rgb", r, g, b, a}` or `{source: "hex", hex: "#rrggbb"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum ColorEvent {
    Hex(String),
    Rgb { r: u8, g: u8, b: u8, a: f64 },
}

impl ColorEvent {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorEvent::Rgb { r, g, b, a: 1.0 }
    }
}

#[derive(Debug, Deserialize)]
struct RgbChannels {
    r: f64,
    g: f64,
    b: f64,
    #[serde(default = "opaque")]
    a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl TryFrom<Value> for ColorEvent {
    type Error = ColorParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let map = match &value {
            Value::String(text) => return Ok(ColorEvent::Hex(text.clone())),
            Value::Object(map) => map,
            other => return Err(ColorParseError::InvalidEvent(other.to_string())),
        };

        if map.get("source").and_then(Value::as_str) == Some("rgb") {
            // Either a nested `rgb` object or the event itself carries channels
            let channels = map.get("rgb").filter(|v| v.is_object()).unwrap_or(&value);
            let channels: RgbChannels = serde_json::from_value(channels.clone())
                .map_err(|e| ColorParseError::InvalidEvent(e.to_string()))?;
            let color = ColorBuffer::from_channels(channels.r, channels.g, channels.b, channels.a);
            return Ok(ColorEvent::Rgb {
                r: color.r,
                g: color.g,
                b: color.b,
                a: color.alpha(),
            });
        }

        map.get("hex")
            .and_then(Value::as_str)
            .map(|hex| ColorEvent::Hex(hex.to_string()))
            .ok_or_else(|| ColorParseError::InvalidEvent("missing hex field".to_string()))
    }
}

impl From<ColorEvent> for Value {
    fn from(event: ColorEvent) -> Self {
        match event {
            ColorEvent::Hex(hex) => serde_json::json!({ "source": "hex", "hex": hex }),
            ColorEvent::Rgb { r, g, b, a } => serde_json::json!({
                "source": "rgb",
                "rgb": { "r": r, "g": g, "b": b, "a": a }
            }),
        }
    }
}

impl From<ColorEvent> for ColorBuffer {
    fn from(event: ColorEvent) -> Self {
        match event {
            ColorEvent::Hex(text) => ColorBuffer::from_input(&text),
            ColorEvent::Rgb { r, g, b, a } => ColorBuffer::rgba(r, g, b, a),
        }
    }
}
