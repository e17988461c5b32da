//! Core domain types
//!
//! Transient values built once per invocation: the payload fields for each
//! generation mode, the request handed to the encoder, and the render options.

use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::utils::QrError;

/// Default image written by the single-QR modes
pub const DEFAULT_OUTPUT: &str = "qrcode.png";

/// Pixel edge length of one module
pub const DEFAULT_BOX_SIZE: u32 = 10;

/// Light modules around the symbol
pub const DEFAULT_BORDER: u32 = 4;

/// Largest accepted box size
pub const MAX_BOX_SIZE: u32 = 100;

/// Largest accepted border
pub const MAX_BORDER: u32 = 100;

/// Modules per side of a version 40 symbol
const MAX_SYMBOL_WIDTH: u32 = 177;

/// Largest image side the encoder will allocate
pub const MAX_IMAGE_SIDE: u32 = (MAX_SYMBOL_WIDTH + 2 * MAX_BORDER) * MAX_BOX_SIZE;

/// QR redundancy tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ErrorCorrection {
    /// ~7% recovery
    Low,
    /// ~15% recovery
    Medium,
    /// ~25% recovery
    Quartile,
    /// ~30% recovery
    #[default]
    High,
}

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0]);
    pub const WHITE: Color = Color([255, 255, 255]);

    fn named(name: &str) -> Option<Color> {
        let rgb = match name {
            "black" => [0, 0, 0],
            "white" => [255, 255, 255],
            "red" => [255, 0, 0],
            "green" => [0, 128, 0],
            "blue" => [0, 0, 255],
            "yellow" => [255, 255, 0],
            "cyan" => [0, 255, 255],
            "magenta" => [255, 0, 255],
            "gray" | "grey" => [128, 128, 128],
            "orange" => [255, 165, 0],
            "purple" => [128, 0, 128],
            "navy" => [0, 0, 128],
            _ => return None,
        };
        Some(Color(rgb))
    }

    fn from_hex(hex: &str) -> Option<Color> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            6 => Some(Color([channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?])),
            // #rgb shorthand: each digit is doubled
            3 => {
                let mut rgb = [0u8; 3];
                for (slot, digit) in rgb.iter_mut().zip(hex.chars()) {
                    let v = digit.to_digit(16)? as u8;
                    *slot = v * 16 + v;
                }
                Some(Color(rgb))
            }
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let parsed = match value.strip_prefix('#') {
            Some(hex) => Color::from_hex(hex),
            None => Color::named(&value.to_ascii_lowercase()),
        };
        parsed.ok_or_else(|| QrError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Contact card fields, formatted into vCard 3.0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardFields {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Network join fields, formatted into a `WIFI:` payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiFields {
    pub ssid: String,
    pub password: String,
    /// Authentication type as printed in the payload (`WPA`, `WEP`, `nopass`, ...)
    pub security: String,
}

/// A newline-delimited list of links and the directory its images land in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    pub source: PathBuf,
    pub output_dir: PathBuf,
}

/// One image to produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    /// Text to encode
    pub payload: String,

    /// Where the image is written; the extension selects the format
    pub output_path: PathBuf,

    /// Dark module colour
    pub foreground: Color,

    /// Light module and quiet zone colour
    pub background: Color,
}

impl QrRequest {
    /// Black-on-white request for `payload`.
    pub fn new(payload: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            payload: payload.into(),
            output_path: output_path.into(),
            foreground: Color::BLACK,
            background: Color::WHITE,
        }
    }

    pub fn with_colors(self, foreground: Color, background: Color) -> Self {
        Self { foreground, background, ..self }
    }
}

/// Symbol geometry and presentation shared by every generation in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub error_correction: ErrorCorrection,
    pub box_size: u32,
    pub border: u32,
    /// Print a unicode preview after the image is saved
    pub preview: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::High,
            box_size: DEFAULT_BOX_SIZE,
            border: DEFAULT_BORDER,
            preview: true,
        }
    }
}
