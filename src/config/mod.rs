//! Run configuration
//!
//! There is no config file: defaults live in [`Config::default`] and command
//! line flags are merged on top through [`merge_cli_with_config`].

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

use std::path::{Path, PathBuf};

use crate::domain::{Color, QrRequest, RenderOptions, DEFAULT_OUTPUT};

/// Settings shared by every QR generated in one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output file for the single-QR modes
    pub output: PathBuf,

    pub foreground: Color,
    pub background: Color,

    pub render: RenderOptions,

    /// Shorten links through the URL shortener before encoding
    pub shorten: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            foreground: Color::BLACK,
            background: Color::WHITE,
            render: RenderOptions::default(),
            shorten: false,
        }
    }
}

impl Config {
    /// Request for `payload` written to `output_path`, in this config's colours.
    pub fn request(&self, payload: String, output_path: &Path) -> QrRequest {
        QrRequest::new(payload, output_path).with_colors(self.foreground, self.background)
    }
}
